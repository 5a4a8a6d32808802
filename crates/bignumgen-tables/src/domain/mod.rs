//! Domain layer - Pure computational logic
//!
//! This module contains the digit arithmetic and enumeration logic without I/O dependencies.

pub mod digit;
pub mod table;
pub mod vector;
