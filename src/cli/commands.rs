//! Command implementations for the profanity CLI.

use std::fs;
use std::io::{self, BufRead, Write};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::FilterConfig;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::filter::{DirectoryLoader, ProfanityFilter, ResourceLoader, language_of};

/// Exit status of a completed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Matched,
}

/// Execute a CLI command, writing results to stdout.
pub fn execute_command(args: ProfanityArgs) -> Result<Outcome> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &args.command {
        Command::Check(check_args) => {
            let texts = if check_args.texts.is_empty() {
                io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?
            } else {
                check_args.texts.clone()
            };
            check_texts(check_args, &texts, &args, &mut out)
        }
        Command::Terms(terms_args) => list_terms(terms_args, &args, &mut out),
    }
}

/// Load the filter configuration and apply command line overrides.
pub fn load_config(args: &ProfanityArgs, language: &str) -> Result<FilterConfig> {
    let mut config = match &args.config {
        Some(path) => FilterConfig::from_json(&fs::read_to_string(path)?)?,
        None => FilterConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    config.languages = vec![language_of(language)];
    config.default_language = language_of(language);
    config.validate()?;
    Ok(config)
}

/// Check every text against the dictionary of one language.
pub fn check_texts<W: Write>(
    check_args: &CheckArgs,
    texts: &[String],
    args: &ProfanityArgs,
    out: &mut W,
) -> Result<Outcome> {
    let config = load_config(args, &check_args.lang)?;
    let filter = ProfanityFilter::new(&DirectoryLoader::new(&args.dir), &config)?;
    let language = filter.default_language().to_string();

    let results: Vec<CheckResult> = texts
        .iter()
        .map(|text| CheckResult {
            language: language.clone(),
            text: text.clone(),
            profanity: filter.find(&language, text),
        })
        .collect();

    let matched = results.iter().filter(|r| r.profanity.is_some()).count();
    tracing::info!(texts = results.len(), matched, "check finished");

    output_check_results(out, &results, args)?;

    if check_args.fail_on_match && matched > 0 {
        Ok(Outcome::Matched)
    } else {
        Ok(Outcome::Clean)
    }
}

/// List the terms of one language dictionary.
pub fn list_terms<W: Write>(
    terms_args: &TermsArgs,
    args: &ProfanityArgs,
    out: &mut W,
) -> Result<Outcome> {
    let config = load_config(args, &terms_args.lang)?;
    let language = config.default_language.clone();

    let loader = DirectoryLoader::new(&args.dir);
    let dictionary =
        Dictionary::read_with_config(&language, loader.load(&language)?, &config.dictionary)?;

    output_terms(
        out,
        &TermsResult {
            language,
            skipped_lines: dictionary.skipped_lines(),
            terms: dictionary.terms(),
        },
        args,
    )?;
    Ok(Outcome::Clean)
}
