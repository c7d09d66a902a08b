//! # Simulator Tests
//!
//! File loading and the instruction budget.

use ls8_core::config::Config;
use ls8_core::soc::BufferConsole;
use ls8_core::{SimError, Simulator};

use crate::common::builder::ProgramBuilder;

fn simulator() -> Simulator<BufferConsole> {
    Simulator::new(&Config::default(), BufferConsole::new())
}

#[test]
fn test_run_from_file() {
    let program = ProgramBuilder::new().ldi(0, 8).ldi(1, 9).prn(0).hlt();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("print8.ls8");
    std::fs::write(&path, program.to_source()).unwrap();

    let image = program.build();
    let mut sim = simulator();
    assert_eq!(sim.load_file(&path).unwrap(), image.len());
    assert_eq!(image.len(), 9);
    let summary = sim.run(None).unwrap();
    assert_eq!(summary.instructions, 4);
    assert_eq!(sim.cpu.console().lines(), ["8"]);
}

#[test]
fn test_budget_large_enough_halts_normally() {
    let mut sim = simulator();
    sim.load(&ProgramBuilder::new().ldi(0, 8).prn(0).hlt().build())
        .unwrap();
    let summary = sim.run(Some(3)).unwrap();
    assert_eq!(summary.instructions, 3);
    assert_eq!(summary.halt_pc, 5);
}

#[test]
fn test_infinite_loop_hits_budget() {
    // LDI R0,0; JMP R0
    let mut sim = simulator();
    sim.load(&ProgramBuilder::new().ldi(0, 0).jmp(0).build())
        .unwrap();
    let err = sim.run(Some(10)).unwrap_err();
    assert!(matches!(err, SimError::StepLimitExceeded { limit: 10 }));
    assert!(!err.is_load_error());
    assert_eq!(sim.cpu.stats.instructions_retired, 10);
    assert!(!sim.cpu.is_halted());
}

#[test]
fn test_budget_does_not_mask_faults() {
    let mut sim = simulator();
    sim.load(&[0xFF]).unwrap();
    assert!(matches!(
        sim.run(Some(100)),
        Err(SimError::UnknownOpcode { opcode: 0xFF, pc: 0 })
    ));
}

#[test]
fn test_load_file_errors_leave_memory_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.ls8");
    std::fs::write(&path, "00000001\nnope\n").unwrap();

    let mut sim = simulator();
    let err = sim.load_file(&path).unwrap_err();
    assert!(err.is_load_error());
    assert!(sim.cpu.bus.memory.as_slice().iter().all(|&b| b == 0));
}

fn demo(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

#[rstest::rstest]
#[case("print8.ls8", &["8"])]
#[case("mult.ls8", &["72"])]
#[case("call.ls8", &["99"])]
#[case("countdown.ls8", &["3", "2", "1"])]
fn test_demo_programs(#[case] name: &str, #[case] expected: &[&str]) {
    let mut sim = simulator();
    let _ = sim.load_file(demo(name)).unwrap();
    let _ = sim.run(Some(1000)).unwrap();
    assert_eq!(sim.cpu.console().lines(), expected);
}

#[test]
fn test_demo_config_parses() {
    let config = Config::from_file(demo("conventional.json")).unwrap();
    assert_eq!(
        config.stack.discipline,
        ls8_core::config::StackDiscipline::Conventional
    );
}
