
/// Error classification and messages.
pub mod error;
