//! Section generation workflow
//!
//! This module drives the table builder and the vector enumerators through
//! the output sections in their fixed order.

use crate::constants::DEFAULT_HARNESS;
use crate::domain::table::{DigitOp, DigitTable};
use crate::domain::vector::{full_adder_vectors, full_subtracter_vectors, mul_stress_vectors};
use crate::error::{GenerateError, ParseError};
use crate::infra::output::{commit_staging_file, create_staging_file};
use crate::infra::render::{LegacyRenderer, Renderer};
use std::fmt;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[cfg(feature = "json")]
use crate::infra::render::JsonLinesRenderer;

// =============================================================================
// Sections
// =============================================================================

/// Output section, declared in output order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    AddTable,
    SubTable,
    MulTable,
    FullAdderTest,
    FullSubberTest,
    MulTest,
}

impl Section {
    /// All sections, in output order
    pub const ALL: [Section; 6] = [
        Section::AddTable,
        Section::SubTable,
        Section::MulTable,
        Section::FullAdderTest,
        Section::FullSubberTest,
        Section::MulTest,
    ];

    /// Label written on the section's comment line
    pub const fn label(self) -> &'static str {
        match self {
            Section::AddTable => "addTable",
            Section::SubTable => "subTable",
            Section::MulTable => "mulTable",
            Section::FullAdderTest => "fullAdderTest",
            Section::FullSubberTest => "fullSubberTest",
            Section::MulTest => "mulTest",
        }
    }

    /// Name accepted on the command line
    pub const fn cli_name(self) -> &'static str {
        match self {
            Section::AddTable => "add-table",
            Section::SubTable => "sub-table",
            Section::MulTable => "mul-table",
            Section::FullAdderTest => "full-adder",
            Section::FullSubberTest => "full-subber",
            Section::MulTest => "mul-test",
        }
    }

    /// Operation of a table section, `None` for test sections
    pub const fn table_op(self) -> Option<DigitOp> {
        match self {
            Section::AddTable => Some(DigitOp::Add),
            Section::SubTable => Some(DigitOp::Sub),
            Section::MulTable => Some(DigitOp::Mul),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli_name())
    }
}

impl FromStr for Section {
    type Err = ParseError;

    /// Accepts either the command-line name or the section label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.cli_name() == s || section.label() == s)
            .ok_or_else(|| ParseError::UnknownSection(s.to_string()))
    }
}

// =============================================================================
// Options
// =============================================================================

/// Output serialization
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Generated source text for the bignum engine and its test suite
    #[default]
    Legacy,
    /// One JSON record per line
    #[cfg(feature = "json")]
    JsonLines,
}

impl OutputFormat {
    pub const fn name(self) -> &'static str {
        match self {
            OutputFormat::Legacy => "legacy",
            #[cfg(feature = "json")]
            OutputFormat::JsonLines => "jsonl",
        }
    }

    fn renderer<'a>(self, harness: &'a str) -> Box<dyn Renderer + 'a> {
        match self {
            OutputFormat::Legacy => Box::new(LegacyRenderer::new(harness)),
            #[cfg(feature = "json")]
            OutputFormat::JsonLines => Box::new(JsonLinesRenderer),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" => Ok(OutputFormat::Legacy),
            #[cfg(feature = "json")]
            "jsonl" | "json-lines" => Ok(OutputFormat::JsonLines),
            _ => Err(ParseError::UnknownFormat(s.to_string())),
        }
    }
}

/// Generation options
#[derive(Clone, Debug)]
pub struct GenerateOptions {
    /// Sections to emit (empty = all)
    sections: Vec<Section>,
    /// Output serialization
    format: OutputFormat,
    /// Class name prefixed to the legacy test calls
    harness: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            format: OutputFormat::default(),
            harness: DEFAULT_HARNESS.to_string(),
        }
    }
}

impl GenerateOptions {
    /// Restrict output to `sections`; an empty selection means all sections
    pub fn with_sections(mut self, sections: impl IntoIterator<Item = Section>) -> Self {
        self.sections = sections.into_iter().collect();
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_harness(mut self, harness: impl Into<String>) -> Self {
        self.harness = harness.into();
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn harness(&self) -> &str {
        &self.harness
    }

    /// Selected sections in output order, independent of selection order
    pub fn selected_sections(&self) -> impl Iterator<Item = Section> + '_ {
        Section::ALL
            .into_iter()
            .filter(|section| self.sections.is_empty() || self.sections.contains(section))
    }
}

/// Counts reported after generation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Number of sections written
    pub sections: usize,
    /// Number of table entries and test vectors written
    pub records: usize,
}

// =============================================================================
// Generation
// =============================================================================

/// Write all selected sections to `writer`
///
/// The writer is buffered internally and flushed before returning.
pub fn generate<W: Write>(
    writer: W,
    options: &GenerateOptions,
) -> Result<GenerateSummary, GenerateError> {
    let mut out = BufWriter::new(writer);
    let renderer = options.format().renderer(options.harness());
    let mut summary = GenerateSummary::default();

    for section in options.selected_sections() {
        let records = write_section(&mut out, renderer.as_ref(), section)?;
        debug!(section = section.label(), records, "section written");

        summary.sections += 1;
        summary.records += records;
    }

    out.flush()?;
    Ok(summary)
}

/// Render all selected sections into a string
pub fn generate_to_string(options: &GenerateOptions) -> Result<String, GenerateError> {
    let mut buf = Vec::new();
    generate(&mut buf, options)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Write all selected sections to the file at `path`
///
/// The file only appears under `path` once every section was written.
pub fn generate_to_path(
    path: impl AsRef<Path>,
    options: &GenerateOptions,
) -> Result<GenerateSummary, GenerateError> {
    let path = path.as_ref();
    let mut staging = create_staging_file(path)?;
    let summary = generate(staging.as_file_mut(), options)?;
    staging.as_file().sync_all()?;
    commit_staging_file(staging, path)?;
    Ok(summary)
}

fn write_section(
    out: &mut dyn Write,
    renderer: &dyn Renderer,
    section: Section,
) -> Result<usize, GenerateError> {
    renderer.begin_section(out, section)?;

    let mut records = 0;
    match section {
        Section::AddTable => records = write_table(out, renderer, DigitOp::Add)?,
        Section::SubTable => records = write_table(out, renderer, DigitOp::Sub)?,
        Section::MulTable => records = write_table(out, renderer, DigitOp::Mul)?,
        Section::FullAdderTest => {
            for v in full_adder_vectors() {
                renderer.full_adder(out, &v)?;
                records += 1;
            }
        }
        Section::FullSubberTest => {
            for v in full_subtracter_vectors() {
                renderer.full_subtracter(out, &v)?;
                records += 1;
            }
        }
        Section::MulTest => {
            for v in mul_stress_vectors() {
                renderer.mul_stress(out, &v)?;
                records += 1;
            }
        }
    }

    renderer.end_section(out, section)?;
    Ok(records)
}

fn write_table(
    out: &mut dyn Write,
    renderer: &dyn Renderer,
    op: DigitOp,
) -> Result<usize, GenerateError> {
    let table = DigitTable::build(op);
    for row in table.rows() {
        renderer.table_row(out, row)?;
    }
    Ok(table.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order() {
        let labels: Vec<&str> = Section::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec![
                "addTable",
                "subTable",
                "mulTable",
                "fullAdderTest",
                "fullSubberTest",
                "mulTest"
            ]
        );
    }

    #[test]
    fn test_section_parse() {
        assert_eq!("full-adder".parse::<Section>(), Ok(Section::FullAdderTest));
        assert_eq!("fullSubberTest".parse::<Section>(), Ok(Section::FullSubberTest));
        assert_eq!(
            "divTable".parse::<Section>(),
            Err(ParseError::UnknownSection("divTable".to_string()))
        );
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("legacy".parse::<OutputFormat>(), Ok(OutputFormat::Legacy));
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(ParseError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_selected_sections_canonical_order() {
        let options =
            GenerateOptions::default().with_sections([Section::MulTest, Section::AddTable]);
        let selected: Vec<Section> = options.selected_sections().collect();
        assert_eq!(selected, vec![Section::AddTable, Section::MulTest]);

        let all: Vec<Section> = GenerateOptions::default().selected_sections().collect();
        assert_eq!(all, Section::ALL.to_vec());
    }

    #[test]
    fn test_generate_summary() {
        let summary = generate(std::io::sink(), &GenerateOptions::default()).unwrap();
        assert_eq!(summary.sections, 6);
        assert_eq!(summary.records, 55 + 100 + 55 + 1000 + 1000 + 5050);
    }

    #[test]
    fn test_generate_single_section() {
        let options = GenerateOptions::default().with_sections([Section::MulTable]);
        let text = generate_to_string(&options).unwrap();
        assert!(text.starts_with("// mulTable\n        '0': {\n            '0': '00',\n"));
        assert!(text.ends_with("        '9': {\n            '9': '18',\n        },\n\n"));
    }

    #[test]
    fn test_harness_name() {
        let options = GenerateOptions::default()
            .with_sections([Section::MulTest])
            .with_harness("DigitTests");
        let text = generate_to_string(&options).unwrap();
        assert_eq!(
            text.lines().nth(1),
            Some("        DigitTests.checkMul('0', '0', '0');")
        );
    }
}
