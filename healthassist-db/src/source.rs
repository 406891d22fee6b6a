use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot open {name}, it may not exist or cannot be opened")]
    Missing {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("{0} is empty")]
    Empty(String),
    #[error("failed to access {name}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
}

type Result<T> = std::result::Result<T, SourceError>;

/// Named provider of record lines.
#[mockall::automock]
pub trait RecordSource {
    /// Returns every line of the source. Fails when the source is missing or holds no
    /// records.
    fn read_lines(&self, name: &str) -> Result<Vec<String>>;
}

/// Named destination for record lines. Lines are always appended.
#[mockall::automock]
pub trait RecordSink {
    fn append_lines(&self, name: &str, lines: &[String]) -> Result<()>;
}

/// Record files inside a data directory.
#[derive(Debug, Clone)]
pub struct RecordFiles {
    dir: PathBuf,
}

impl RecordFiles {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl RecordSource for RecordFiles {
    fn read_lines(&self, name: &str) -> Result<Vec<String>> {
        let path = self.path(name);
        debug!("Reading records from {}", path.display());
        let content = fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => SourceError::Missing {
                name: name.to_owned(),
                source,
            },
            _ => SourceError::Io {
                name: name.to_owned(),
                source,
            },
        })?;

        if content.trim().is_empty() {
            return Err(SourceError::Empty(name.to_owned()));
        }

        let lines: Vec<String> = content.lines().map(str::to_owned).collect();
        info!("Read {} lines from {}", lines.len(), name);
        Ok(lines)
    }
}

impl RecordSink for RecordFiles {
    fn append_lines(&self, name: &str, lines: &[String]) -> Result<()> {
        let path = self.path(name);
        let io_error = |source| SourceError::Io {
            name: name.to_owned(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(io_error)?;
        for line in lines {
            writeln!(file, "{}", line).map_err(io_error)?;
        }
        file.flush().map_err(io_error)?;

        info!("Appended {} lines to {}", lines.len(), path.display());
        Ok(())
    }
}
