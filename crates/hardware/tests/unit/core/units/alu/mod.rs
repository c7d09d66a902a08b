/// Add, multiply, and remainder.
pub mod arithmetic;
