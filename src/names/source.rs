use std::future::Future;
use std::path::PathBuf;

use rand::Rng;
use thiserror::Error;

/// Failure to obtain the driver-name list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NameError {
    /// The list file could not be read.
    #[error("failed to read name list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network or HTTP client error.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(String),
}

/// Where the raw, newline-delimited name list comes from.
pub trait NameSource {
    /// Fetch the whole list as UTF-8 text.
    fn fetch(&self) -> impl Future<Output = Result<String, NameError>> + Send;
}

/// A name list held in memory.
#[derive(Debug, Clone)]
pub struct StaticNames {
    text: String,
}

impl StaticNames {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build a list from individual names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = names
            .into_iter()
            .map(|n| n.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join("\n");
        Self { text }
    }
}

impl NameSource for StaticNames {
    fn fetch(&self) -> impl Future<Output = Result<String, NameError>> + Send {
        std::future::ready(Ok(self.text.clone()))
    }
}

/// A name list read from a local file on every fetch.
#[derive(Debug, Clone)]
pub struct FileNames {
    path: PathBuf,
}

impl FileNames {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl NameSource for FileNames {
    fn fetch(&self) -> impl Future<Output = Result<String, NameError>> + Send {
        async move {
            std::fs::read_to_string(&self.path).map_err(|source| NameError::Io {
                path: self.path.clone(),
                source,
            })
        }
    }
}

/// Split a list into names: one per line, trimmed, blank lines dropped.
pub fn parse_names(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Draws a uniformly random name from a [`NameSource`].
#[derive(Debug, Clone)]
pub struct RandomNameProvider<S> {
    source: S,
}

impl<S: NameSource> RandomNameProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the list and pick one name.
    ///
    /// An empty list yields an empty name rather than an error.
    pub async fn random_name<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, NameError> {
        let text = self.source.fetch().await?;
        let names = parse_names(&text);
        if names.is_empty() {
            tracing::warn!("driver name list is empty");
            return Ok(String::new());
        }
        let idx = rng.random_range(0..names.len());
        Ok(names[idx].to_owned())
    }
}
