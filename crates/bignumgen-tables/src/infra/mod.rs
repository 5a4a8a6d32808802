//! Infrastructure layer - I/O and external dependencies
//!
//! This module handles output rendering and file operations.

pub mod output;
pub mod render;
