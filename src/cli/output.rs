//! Output formatting for CLI results.

use serde::Serialize;
use std::io::Write;

use crate::cli::args::{OutputFormat, ProfanityArgs};
use crate::dictionary::Term;
use crate::error::Result;
use crate::matcher::Profanity;

/// Outcome of checking one text.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub language: String,
    pub text: String,
    pub profanity: Option<Profanity>,
}

/// Terms of one dictionary.
#[derive(Debug, Serialize)]
pub struct TermsResult<'a> {
    pub language: String,
    pub skipped_lines: usize,
    pub terms: &'a [Term],
}

/// Write check results in the selected format.
pub fn output_check_results<W: Write>(
    out: &mut W,
    results: &[CheckResult],
    args: &ProfanityArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for result in results {
                if args.verbosity() > 1 {
                    writeln!(out, "[{}] {}", result.language, result.text)?;
                }
                match &result.profanity {
                    Some(found) => writeln!(
                        out,
                        "{}..{}\t{}\t{}\t{:.3}",
                        found.start, found.end, found.text, found.term, found.score
                    )?,
                    None => writeln!(out, "clean")?,
                }
            }
            Ok(())
        }
        OutputFormat::Json => output_json(out, results, args),
    }
}

/// Write a dictionary listing in the selected format.
pub fn output_terms<W: Write>(
    out: &mut W,
    result: &TermsResult<'_>,
    args: &ProfanityArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(
                    out,
                    "{}: {} terms, {} skipped lines",
                    result.language,
                    result.terms.len(),
                    result.skipped_lines
                )?;
            }
            for term in result.terms {
                if term.is_exact() {
                    writeln!(out, "{}\texact", term.text())?;
                } else {
                    writeln!(out, "{}", term.text())?;
                }
            }
            Ok(())
        }
        OutputFormat::Json => output_json(out, result, args),
    }
}

fn output_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
    args: &ProfanityArgs,
) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
