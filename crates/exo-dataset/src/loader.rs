//! Dataset loading adapters
//!
//! The demo reads two static JSON files, one with samples and one with
//! synthesis fixtures, concurrently, and only becomes ready once both have
//! resolved. [`load_datasets`] joins the two loads of a [`DatasetSource`].

use crate::error::{DatasetKind, LoadError};
use crate::sample::Sample;
use crate::synthesis::SynthesisRecord;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Default location of the samples file
pub const DEFAULT_SAMPLES_PATH: &str = "data/samples.json";

/// Default location of the synthesis file
pub const DEFAULT_SYNTHESIS_PATH: &str = "data/synthesis_data.json";

/// Both datasets, parsed
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    /// Candidate samples in file order
    pub samples: Vec<Sample>,
    /// Synthesis fixtures in file order
    pub synthesis: Vec<SynthesisRecord>,
}

/// Provider of the two datasets
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Load and parse the samples dataset
    async fn load_samples(&self) -> Result<Vec<Sample>, LoadError>;

    /// Load and parse the synthesis dataset
    async fn load_synthesis(&self) -> Result<Vec<SynthesisRecord>, LoadError>;
}

/// Load both datasets concurrently; the first failure wins
///
/// # Errors
/// Whatever either load returns.
pub async fn load_datasets<S>(source: &S) -> Result<Datasets, LoadError>
where
    S: DatasetSource + ?Sized,
{
    let (samples, synthesis) = tokio::try_join!(source.load_samples(), source.load_synthesis())?;
    tracing::debug!(
        samples = samples.len(),
        synthesis = synthesis.len(),
        "datasets loaded"
    );
    Ok(Datasets { samples, synthesis })
}

/// Parse a JSON array of samples
///
/// # Errors
/// [`LoadError::Parse`] if the text is not an array of valid samples.
pub fn parse_samples(text: &str) -> Result<Vec<Sample>, LoadError> {
    serde_json::from_str(text).map_err(|source| LoadError::Parse {
        kind: DatasetKind::Samples,
        source,
    })
}

/// Parse a JSON array of synthesis records
///
/// # Errors
/// [`LoadError::Parse`] if the text is not an array of valid records.
pub fn parse_synthesis(text: &str) -> Result<Vec<SynthesisRecord>, LoadError> {
    serde_json::from_str(text).map_err(|source| LoadError::Parse {
        kind: DatasetKind::Synthesis,
        source,
    })
}

/// Datasets stored as JSON files on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    samples_path: PathBuf,
    synthesis_path: PathBuf,
}

impl FileSource {
    /// Create source from explicit paths
    #[must_use]
    pub fn new(samples_path: impl Into<PathBuf>, synthesis_path: impl Into<PathBuf>) -> Self {
        Self {
            samples_path: samples_path.into(),
            synthesis_path: synthesis_path.into(),
        }
    }

    /// Path of the samples file
    #[inline]
    #[must_use]
    pub fn samples_path(&self) -> &Path {
        &self.samples_path
    }

    /// Path of the synthesis file
    #[inline]
    #[must_use]
    pub fn synthesis_path(&self) -> &Path {
        &self.synthesis_path
    }

    async fn read(kind: DatasetKind, path: &Path) -> Result<String, LoadError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Io {
                kind,
                path: path.to_path_buf(),
                source,
            })
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLES_PATH, DEFAULT_SYNTHESIS_PATH)
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn load_samples(&self) -> Result<Vec<Sample>, LoadError> {
        let text = Self::read(DatasetKind::Samples, &self.samples_path).await?;
        parse_samples(&text)
    }

    async fn load_synthesis(&self) -> Result<Vec<SynthesisRecord>, LoadError> {
        let text = Self::read(DatasetKind::Synthesis, &self.synthesis_path).await?;
        parse_synthesis(&text)
    }
}

/// Datasets held as in-memory JSON text
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    samples_json: String,
    synthesis_json: String,
}

impl StaticSource {
    /// Create source from JSON text
    #[must_use]
    pub fn new(samples_json: impl Into<String>, synthesis_json: impl Into<String>) -> Self {
        Self {
            samples_json: samples_json.into(),
            synthesis_json: synthesis_json.into(),
        }
    }
}

#[async_trait]
impl DatasetSource for StaticSource {
    async fn load_samples(&self) -> Result<Vec<Sample>, LoadError> {
        parse_samples(&self.samples_json)
    }

    async fn load_synthesis(&self) -> Result<Vec<SynthesisRecord>, LoadError> {
        parse_synthesis(&self.synthesis_json)
    }
}
