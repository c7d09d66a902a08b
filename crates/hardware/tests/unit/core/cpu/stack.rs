//! # Stack Tests
//!
//! PUSH and POP under the reference and conventional stack disciplines.

use ls8_core::config::{Config, StackDiscipline};

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;

fn conventional() -> Config {
    let mut config = Config::default();
    config.stack.discipline = StackDiscipline::Conventional;
    config
}

#[test]
fn test_push_decrements_then_stores() {
    let program = ProgramBuilder::new().ldi(0, 0x77).push(0).hlt().build();
    let mut ctx = TestContext::new().load_program(&program);
    ctx.step_n(2);
    assert_eq!(ctx.cpu.sp, 0xF3);
    assert_eq!(ctx.mem(0xF3), 0x77);
    assert_eq!(ctx.cpu.pc, 5);
}

#[test]
fn test_pop_reads_top_without_moving_sp() {
    let program = ProgramBuilder::new()
        .ldi(0, 1)
        .ldi(1, 2)
        .push(0)
        .push(1)
        .pop(2)
        .pop(3)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&program);
    let _ = ctx.run();
    assert_eq!(ctx.get_reg(2), 2);
    assert_eq!(ctx.get_reg(3), 2);
    assert_eq!(ctx.cpu.sp, 0xF2);
}

#[test]
fn test_pop_conventional_is_lifo() {
    let program = ProgramBuilder::new()
        .ldi(0, 1)
        .ldi(1, 2)
        .push(0)
        .push(1)
        .pop(2)
        .pop(3)
        .hlt()
        .build();
    let mut ctx = TestContext::with_config(&conventional()).load_program(&program);
    let _ = ctx.run();
    assert_eq!(ctx.get_reg(2), 2);
    assert_eq!(ctx.get_reg(3), 1);
    assert_eq!(ctx.cpu.sp, 0xF4);
}

#[test]
fn test_sp_wraps_below_zero() {
    let mut config = Config::default();
    config.general.initial_sp = 0;
    let program = ProgramBuilder::new().ldi(0, 9).push(0).hlt().build();
    let mut ctx = TestContext::with_config(&config).load_program(&program);
    let _ = ctx.run();
    assert_eq!(ctx.cpu.sp, 0xFF);
    assert_eq!(ctx.mem(0xFF), 9);
}

#[test]
fn test_stack_can_overwrite_program() {
    let mut config = Config::default();
    config.general.initial_sp = 6;
    // PUSH lands on the HLT at address 5.
    let program = ProgramBuilder::new().ldi(0, 0xAA).push(0).hlt().build();
    let mut ctx = TestContext::with_config(&config).load_program(&program);
    ctx.step_n(2);
    assert_eq!(ctx.mem(5), 0xAA);
}

#[test]
fn test_pop_bad_register_leaves_sp() {
    let program = ProgramBuilder::new().pop(8).build();
    let mut ctx = TestContext::with_config(&conventional()).load_program(&program);
    let _ = ctx.run_expect_fault();
    assert_eq!(ctx.cpu.sp, 0xF4);
}

#[test]
fn test_pop_bad_register_reference_leaves_state() {
    let program = ProgramBuilder::new().ldi(0, 5).push(0).pop(9).build();
    let mut ctx = TestContext::new().load_program(&program);
    let err = ctx.run_expect_fault();
    assert!(matches!(
        err,
        ls8_core::SimError::RegisterOutOfRange(9)
    ));
    assert_eq!(ctx.cpu.sp, 0xF3);
    assert_eq!(ctx.cpu.pc, 5);
}

#[test]
fn test_push_then_pop_keeps_sp_and_reads_pushed_cell() {
    let program = ProgramBuilder::new().ldi(0, 0x3C).push(0).pop(1).hlt().build();
    let mut ctx = TestContext::new().load_program(&program);
    ctx.step_n(2);
    let sp_after_push = ctx.cpu.sp;
    ctx.step_n(1);
    assert_eq!(ctx.cpu.sp, sp_after_push);
    assert_eq!(ctx.get_reg(1), ctx.mem(sp_after_push));
}
