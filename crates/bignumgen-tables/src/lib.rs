//! bignumgen-tables - Digit tables and test vectors for a decimal bignum engine
//!
//! This crate provides functionality to:
//! - Build per-digit addition, subtraction and multiplication tables (result digit + carry/borrow)
//! - Enumerate exhaustive full-adder, full-subtracter and multiplication test vectors
//! - Render everything as source text consumed by the engine and its test suite

pub mod constants;
pub mod domain;
pub mod error;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use app::generator::{
    GenerateOptions, GenerateSummary, OutputFormat, Section, generate, generate_to_path,
    generate_to_string,
};
pub use constants::*;
pub use domain::digit::{Digit, OpResult};
pub use domain::table::{DigitOp, DigitTable};
pub use domain::vector::{
    FullAdderVector, FullSubtracterVector, MulStressVector, full_adder_vectors,
    full_subtracter_vectors, mul_stress_vectors,
};
pub use error::{GenerateError, ParseError};
