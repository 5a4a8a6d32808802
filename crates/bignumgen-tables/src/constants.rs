//! Digit domain and output format constants

// =============================================================================
// Digit domain
// =============================================================================

/// Radix of a single digit position
pub const DIGIT_BASE: u8 = 10;

/// Largest single digit
pub const DIGIT_MAX: u8 = DIGIT_BASE - 1;

/// Largest operand of the multiplication stress vectors
pub const TWO_DIGIT_MAX: u8 = 99;

// =============================================================================
// Table and vector sizes
// =============================================================================

/// Entries in an upper-triangular table (10 + 9 + ... + 1)
pub const TRIANGULAR_TABLE_LEN: usize = 55;

/// Entries in a full 10x10 table
pub const FULL_TABLE_LEN: usize = 100;

/// Number of full-adder vectors ([0,9]^3)
pub const FULL_ADDER_VECTOR_COUNT: usize = 1000;

/// Number of full-subtracter vectors ([0,9]^3)
pub const FULL_SUBTRACTER_VECTOR_COUNT: usize = 1000;

/// Number of multiplication stress vectors (upper triangle of [0,99]^2)
pub const MUL_STRESS_VECTOR_COUNT: usize = 5050;

// =============================================================================
// Legacy text format
// =============================================================================

/// Default class exposing the verification entry points
pub const DEFAULT_HARNESS: &str = "BadBignumTests";

/// Full-adder verification entry point
pub const CHECK_FULL_ADDER: &str = "checkFullAdder";

/// Full-subtracter verification entry point
pub const CHECK_FULL_SUBBER: &str = "checkFullSubber";

/// Multiplication verification entry point
pub const CHECK_MUL: &str = "checkMul";

/// Indent of table rows and test calls
pub const ROW_INDENT: &str = "        ";

/// Indent of table entries inside a row
pub const ENTRY_INDENT: &str = "            ";
