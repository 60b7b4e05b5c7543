use crate::domain::ports::RoadSource;
use crate::utils::error::{Result, RoadError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// A road description stored on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RoadSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&self) -> Result<Box<dyn Read + '_>> {
        let file = File::open(&self.path).map_err(|source| RoadError::SourceError {
            source_name: self.name.clone(),
            source,
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// A road description held in memory.
#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl RoadSource for TextSource {
    fn name(&self) -> &str {
        "<inline>"
    }

    fn open(&self) -> Result<Box<dyn Read + '_>> {
        Ok(Box::new(self.text.as_bytes()))
    }
}
