//! Section renderers
//!
//! A [`Renderer`] turns table rows and test vectors into text. The legacy
//! renderer reproduces the historical generated source byte-for-byte; the
//! JSON Lines renderer emits one tagged record per line.

use crate::app::generator::Section;
use crate::constants::{
    CHECK_FULL_ADDER, CHECK_FULL_SUBBER, CHECK_MUL, ENTRY_INDENT, ROW_INDENT,
};
use crate::domain::table::TableRow;
use crate::domain::vector::{FullAdderVector, FullSubtracterVector, MulStressVector};
use crate::error::GenerateError;
use std::io::Write;

/// Output serialization of sections
pub trait Renderer {
    /// Write whatever introduces `section`
    fn begin_section(&self, out: &mut dyn Write, section: Section) -> Result<(), GenerateError>;

    /// Write one row of a digit table
    fn table_row(&self, out: &mut dyn Write, row: TableRow<'_>) -> Result<(), GenerateError>;

    fn full_adder(&self, out: &mut dyn Write, v: &FullAdderVector) -> Result<(), GenerateError>;

    fn full_subtracter(
        &self,
        out: &mut dyn Write,
        v: &FullSubtracterVector,
    ) -> Result<(), GenerateError>;

    fn mul_stress(&self, out: &mut dyn Write, v: &MulStressVector) -> Result<(), GenerateError>;

    /// Write whatever closes `section`
    fn end_section(&self, _out: &mut dyn Write, _section: Section) -> Result<(), GenerateError> {
        Ok(())
    }
}

// =============================================================================
// Legacy text format
// =============================================================================

/// Nested-literal tables and one harness call per test vector
pub struct LegacyRenderer<'a> {
    harness: &'a str,
}

impl<'a> LegacyRenderer<'a> {
    pub fn new(harness: &'a str) -> Self {
        Self { harness }
    }
}

impl Renderer for LegacyRenderer<'_> {
    fn begin_section(&self, out: &mut dyn Write, section: Section) -> Result<(), GenerateError> {
        writeln!(out, "// {}", section.label())?;
        Ok(())
    }

    fn table_row(&self, out: &mut dyn Write, row: TableRow<'_>) -> Result<(), GenerateError> {
        writeln!(out, "{ROW_INDENT}'{}': {{", row.first())?;
        for (second, result) in row.entries() {
            writeln!(out, "{ENTRY_INDENT}'{}': '{}',", second, result)?;
        }
        writeln!(out, "{ROW_INDENT}}},")?;
        Ok(())
    }

    fn full_adder(&self, out: &mut dyn Write, v: &FullAdderVector) -> Result<(), GenerateError> {
        writeln!(
            out,
            "{ROW_INDENT}{}.{CHECK_FULL_ADDER}('{}', '{}', '{}', '{}');",
            self.harness, v.a, v.b, v.carry_in, v.expected
        )?;
        Ok(())
    }

    fn full_subtracter(
        &self,
        out: &mut dyn Write,
        v: &FullSubtracterVector,
    ) -> Result<(), GenerateError> {
        writeln!(
            out,
            "{ROW_INDENT}{}.{CHECK_FULL_SUBBER}('{}', '{}', '{}', '{}');",
            self.harness, v.a, v.b, v.borrow_in, v.expected
        )?;
        Ok(())
    }

    fn mul_stress(&self, out: &mut dyn Write, v: &MulStressVector) -> Result<(), GenerateError> {
        writeln!(
            out,
            "{ROW_INDENT}{}.{CHECK_MUL}('{}', '{}', '{}');",
            self.harness, v.a, v.b, v.product
        )?;
        Ok(())
    }

    fn end_section(&self, out: &mut dyn Write, section: Section) -> Result<(), GenerateError> {
        // Table sections are separated by a blank line; test sections are not.
        if section.table_op().is_some() {
            writeln!(out)?;
        }
        Ok(())
    }
}

// =============================================================================
// JSON Lines format (json feature)
// =============================================================================

#[cfg(feature = "json")]
mod json {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    #[serde(tag = "kind", rename_all = "snake_case")]
    enum Record<'a> {
        Section {
            name: &'a str,
        },
        Table {
            op: &'a str,
            a: u8,
            b: u8,
            result: String,
        },
        FullAdder {
            a: u8,
            b: u8,
            carry_in: u8,
            expected: String,
        },
        FullSubtracter {
            a: u8,
            b: u8,
            borrow_in: u8,
            expected: String,
        },
        Mul {
            a: u8,
            b: u8,
            product: u32,
        },
    }

    fn write_record(out: &mut dyn Write, record: &Record<'_>) -> Result<(), GenerateError> {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
        Ok(())
    }

    /// One JSON object per line, tagged by `kind`
    pub struct JsonLinesRenderer;

    impl Renderer for JsonLinesRenderer {
        fn begin_section(
            &self,
            out: &mut dyn Write,
            section: Section,
        ) -> Result<(), GenerateError> {
            write_record(
                out,
                &Record::Section {
                    name: section.label(),
                },
            )
        }

        fn table_row(&self, out: &mut dyn Write, row: TableRow<'_>) -> Result<(), GenerateError> {
            let op = row.op().name();
            for (second, result) in row.entries() {
                write_record(
                    out,
                    &Record::Table {
                        op,
                        a: row.first().get(),
                        b: second.get(),
                        result: result.to_string(),
                    },
                )?;
            }
            Ok(())
        }

        fn full_adder(
            &self,
            out: &mut dyn Write,
            v: &FullAdderVector,
        ) -> Result<(), GenerateError> {
            write_record(
                out,
                &Record::FullAdder {
                    a: v.a.get(),
                    b: v.b.get(),
                    carry_in: v.carry_in.get(),
                    expected: v.expected.to_string(),
                },
            )
        }

        fn full_subtracter(
            &self,
            out: &mut dyn Write,
            v: &FullSubtracterVector,
        ) -> Result<(), GenerateError> {
            write_record(
                out,
                &Record::FullSubtracter {
                    a: v.a.get(),
                    b: v.b.get(),
                    borrow_in: v.borrow_in.get(),
                    expected: v.expected.to_string(),
                },
            )
        }

        fn mul_stress(
            &self,
            out: &mut dyn Write,
            v: &MulStressVector,
        ) -> Result<(), GenerateError> {
            write_record(
                out,
                &Record::Mul {
                    a: v.a,
                    b: v.b,
                    product: v.product,
                },
            )
        }
    }
}

#[cfg(feature = "json")]
pub use json::JsonLinesRenderer;
