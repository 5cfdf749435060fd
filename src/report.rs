//! Command-line output
//!
//! Formats the renderings of one expression for the `cparen` binary, either
//! as indented text or as a JSON document.

use crate::blocks::{render, Block, Parens};
use serde::Serialize;
use std::io::{self, Write};

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// What to print for one expression
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub format: Format,
    /// Print a single rendering instead of both
    pub only: Option<Parens>,
    /// List every block with its description and operand ranges
    pub blocks: bool,
}

impl Options {
    fn renderings(&self) -> Vec<Parens> {
        match self.only {
            Some(parens) => vec![parens],
            None => vec![Parens::Full, Parens::Minimal],
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    expression: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    minimal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    blocks: Option<&'a [Block]>,
}

#[derive(Serialize)]
struct ErrorReport<'a> {
    expression: &'a str,
    error: String,
}

/// Write the report for a successfully parsed expression.
pub fn write_report<W: Write>(
    out: &mut W,
    source: &str,
    blocks: &[Block],
    options: &Options,
) -> io::Result<()> {
    match options.format {
        Format::Text => write_text(out, blocks, options),
        Format::Json => {
            let mut report = Report {
                expression: source,
                full: None,
                minimal: None,
                blocks: options.blocks.then_some(blocks),
            };
            for parens in options.renderings() {
                let text = Some(render(blocks, parens));
                match parens {
                    Parens::Full => report.full = text,
                    Parens::Minimal => report.minimal = text,
                }
            }
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)
        }
    }
}

/// Write the report for an expression that failed to parse.
pub fn write_error<W: Write>(
    out: &mut W,
    source: &str,
    error: &crate::Error,
    format: Format,
) -> io::Result<()> {
    match format {
        Format::Text => writeln!(out, "Error: {}", error),
        Format::Json => {
            let report = ErrorReport {
                expression: source,
                error: error.to_string(),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)
        }
    }
}

fn write_text<W: Write>(out: &mut W, blocks: &[Block], options: &Options) -> io::Result<()> {
    for parens in options.renderings() {
        writeln!(out, "{}:", parens.label())?;
        writeln!(out, "  {}", render(blocks, parens))?;
    }

    if options.blocks {
        writeln!(out, "Blocks:")?;
        for (index, block) in blocks.iter().enumerate() {
            let ranges: Vec<String> = block
                .operands()
                .iter()
                .map(|r| format!("{}..{}", r.start, r.end))
                .collect();
            write!(
                out,
                "  {:>3}  {:<16} {}",
                index,
                format!("'{}'", block.text()),
                block.description()
            )?;
            if ranges.is_empty() {
                writeln!(out)?;
            } else {
                writeln!(out, " [{}]", ranges.join(", "))?;
            }
        }
    }

    Ok(())
}
