use crate::error::Error;
use crate::result::Result;
use std::path::{Path, PathBuf};

/// Context passed throughout the application containing global configuration
#[derive(Clone)]
pub struct Context {
    /// Enable verbose output (hidden files skipped, assembled file list)
    pub verbose: bool,

    /// Directory holding the extension files; manifest paths are relative to it
    pub base_dir: PathBuf,
}

impl Context {
    pub fn new(path: Option<&Path>, verbose: bool) -> Result<Self> {
        let base_dir = match path {
            Some(p) => p.to_path_buf(),
            None => std::env::current_dir()?,
        };

        if !base_dir.is_dir() {
            return Err(Error::custom(format!(
                "{} is not a directory",
                base_dir.display()
            )));
        }

        Ok(Self { verbose, base_dir })
    }

    /// Resolve a path against the extension directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
