//! Integration tests for the multilingual filter and its loaders.

use std::fs;
use std::io::ErrorKind;
use std::sync::Arc;

use profanity::config::FilterConfig;
use profanity::error::{ProfanityError, Result};
use profanity::filter::{
    DirectoryLoader, MemoryLoader, ProfanityFilter, SUPPORTED_LANGUAGES, language_of,
};
use tempfile::TempDir;

fn write_dictionaries(dir: &TempDir) {
    fs::write(dir.path().join("dictionary.en"), "idiot\nmoron\texact\n").unwrap();
    fs::write(dir.path().join("dictionary.it"), "# Italiano\ncretino\nstronzo\n").unwrap();
    fs::write(dir.path().join("dictionary.no"), "dust\n").unwrap();
}

fn config(languages: &[&str]) -> FilterConfig {
    FilterConfig {
        languages: languages.iter().map(|l| l.to_string()).collect(),
        ..FilterConfig::default()
    }
}

#[test]
fn test_directory_loader_filter() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    write_dictionaries(&temp_dir);

    let loader = DirectoryLoader::new(temp_dir.path());
    let filter = ProfanityFilter::new(&loader, &config(&["en", "it", "no"]))?;

    assert_eq!(filter.languages(), vec!["en", "it", "no"]);
    assert!(filter.test("en", "what an idi0t"));
    assert!(filter.test("it-IT", "che STR0NZ0"));
    assert!(filter.test("nb", "din dust"));
    assert!(filter.test("nn_NO", "din dust"));
    assert!(!filter.test("en", "have a nice day"));
    assert!(!filter.test("es", "idiot"));

    let found = filter.find("it", "sei un cretino!").expect("cretino should match");
    assert_eq!(found.term, "cretino");
    assert_eq!((found.start, found.end), (7, 14));

    assert!(filter.test_default("IDIOT"));
    Ok(())
}

#[test]
fn test_missing_dictionary_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    write_dictionaries(&temp_dir);

    let loader = DirectoryLoader::new(temp_dir.path());
    match ProfanityFilter::new(&loader, &config(&["en", "fr"])) {
        Err(ProfanityError::Io(err)) => assert_eq!(err.kind(), ErrorKind::NotFound),
        other => panic!("expected a not-found error, got {other:?}"),
    }
}

#[test]
fn test_skip_missing_languages() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    write_dictionaries(&temp_dir);

    let config = FilterConfig {
        skip_missing: true,
        ..FilterConfig::default()
    };

    let filter = ProfanityFilter::new(&DirectoryLoader::new(temp_dir.path()), &config)?;
    assert_eq!(filter.languages(), vec!["en", "it", "no"]);
    assert!(filter.test_default("moron"));
    Ok(())
}

#[test]
fn test_config_from_json() -> Result<()> {
    let config = FilterConfig::from_json(
        r#"{
            "threshold": 1.0,
            "default_language": "it",
            "languages": ["it"],
            "dictionary": {"normalizer": {"fold_obfuscation": false}}
        }"#,
    )?;

    let loader = MemoryLoader::new().with("it", "stronzo\n");
    let filter = ProfanityFilter::new(&loader, &config)?;

    assert!(filter.test_default("stronzo"));
    // Folding disabled and threshold 1.0: leetspeak no longer matches.
    assert!(!filter.test_default("str0nz0"));
    Ok(())
}

#[test]
fn test_filter_shared_across_threads() -> Result<()> {
    let loader = MemoryLoader::new().with("en", "idiot\n").with("it", "cretino\n");
    let filter = Arc::new(ProfanityFilter::new(&loader, &config(&["en", "it"]))?);

    let handles: Vec<_> = ["en", "it", "en-US", "it_CH"]
        .into_iter()
        .map(|language| {
            let filter = Arc::clone(&filter);
            std::thread::spawn(move || filter.test(language, "idiot cretino"))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    Ok(())
}

#[test]
fn test_language_codes() {
    assert_eq!(language_of("en-US"), "en");
    assert_eq!(language_of("nb"), "no");
    assert_eq!(language_of("nn"), "no");
    assert_eq!(SUPPORTED_LANGUAGES.len(), 51);
    assert!(SUPPORTED_LANGUAGES.contains(&"zu"));
}
