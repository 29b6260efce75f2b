//! Sources of dictionary resources.
//!
//! A [`ResourceLoader`] hands out the raw word list of one language. The
//! filter never knows where dictionaries live; it only calls
//! [`ResourceLoader::load`] once per language at construction time.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use ahash::AHashMap;

use crate::error::{ProfanityError, Result};

/// Opens the dictionary resource of a language.
///
/// Implemented for any `Fn(&str) -> Result<Box<dyn Read>>`, so a closure is
/// enough for ad-hoc sources.
pub trait ResourceLoader: Send + Sync {
    /// Open the resource for `language`.
    ///
    /// A missing resource is reported as an I/O error of kind
    /// [`NotFound`](io::ErrorKind::NotFound).
    fn load(&self, language: &str) -> Result<Box<dyn Read + '_>>;
}

impl<F> ResourceLoader for F
where
    F: Fn(&str) -> Result<Box<dyn Read>> + Send + Sync,
{
    fn load(&self, language: &str) -> Result<Box<dyn Read + '_>> {
        self(language)
    }
}

/// Loads `dictionary.<language>` files from a directory.
#[derive(Clone, Debug)]
pub struct DirectoryLoader {
    dir: PathBuf,
}

impl DirectoryLoader {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        DirectoryLoader {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the resource for `language`.
    pub fn path(&self, language: &str) -> PathBuf {
        self.dir.join(format!("dictionary.{language}"))
    }
}

impl ResourceLoader for DirectoryLoader {
    fn load(&self, language: &str) -> Result<Box<dyn Read + '_>> {
        let path = self.path(language);
        match File::open(&path) {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(ProfanityError::not_found(
                format!("no dictionary for '{language}' at {}", path.display()),
            )),
            Err(err) => Err(err.into()),
        }
    }
}

/// Serves dictionaries held in memory, mostly for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct MemoryLoader {
    resources: AHashMap<String, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the resource of `language`.
    pub fn with<L: Into<String>, S: Into<String>>(mut self, language: L, resource: S) -> Self {
        self.resources.insert(language.into(), resource.into());
        self
    }
}

impl ResourceLoader for MemoryLoader {
    fn load(&self, language: &str) -> Result<Box<dyn Read + '_>> {
        self.resources
            .get(language)
            .map(|resource| Box::new(resource.as_bytes()) as Box<dyn Read + '_>)
            .ok_or_else(|| ProfanityError::not_found(format!("no dictionary for '{language}'")))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn read_all(mut reader: Box<dyn Read + '_>) -> String {
        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        text
    }

    fn is_not_found(result: Result<Box<dyn Read + '_>>) -> bool {
        matches!(result, Err(ProfanityError::Io(err)) if err.kind() == io::ErrorKind::NotFound)
    }

    #[test]
    fn test_directory_loader() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("dictionary.en"), "idiot\n").unwrap();

        let loader = DirectoryLoader::new(temp_dir.path());
        assert_eq!(loader.path("en"), temp_dir.path().join("dictionary.en"));
        assert_eq!(read_all(loader.load("en").unwrap()), "idiot\n");
        assert!(is_not_found(loader.load("it")));
    }

    #[test]
    fn test_memory_loader() {
        let loader = MemoryLoader::new().with("en", "idiot\n").with("en", "moron\n");
        assert_eq!(read_all(loader.load("en").unwrap()), "moron\n");
        assert!(is_not_found(loader.load("de")));
    }

    #[test]
    fn test_closure_loader() {
        let loader = |language: &str| -> Result<Box<dyn Read>> {
            Ok(Box::new(io::Cursor::new(format!("{language}-word\n"))))
        };
        assert_eq!(read_all(loader.load("fr").unwrap()), "fr-word\n");
    }
}
