use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::catalog::Service;
use crate::error::CatalogError;

pub const DEFAULT_DATA_FILE: &str = "data/services.json";

/// Where the catalog comes from. Called at most once per store.
pub trait CatalogSource: Send + Sync {
    fn describe(&self) -> String;
    fn load(&self) -> Result<Vec<Service>, CatalogError>;
}

/// JSON dataset on disk, looked up in a fixed list of candidate locations.
#[derive(Debug, Clone)]
pub struct FileSource {
    candidates: Vec<PathBuf>,
}

impl FileSource {
    /// Builds the candidate list for `path` using the running executable's directory.
    pub fn discover(path: impl AsRef<Path>) -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf));
        if exe_dir.is_none() {
            tracing::warn!("could not determine executable directory, skipping that candidate");
        }
        Self {
            candidates: candidate_paths(path.as_ref(), exe_dir.as_deref()),
        }
    }

    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }
}

/// Lookup order: working directory, executable directory, one level up, two levels up.
/// An absolute path is the only candidate.
pub fn candidate_paths(path: &Path, exe_dir: Option<&Path>) -> Vec<PathBuf> {
    if path.is_absolute() {
        return vec![path.to_path_buf()];
    }
    let mut out = vec![path.to_path_buf()];
    if let Some(dir) = exe_dir {
        out.push(dir.join(path));
    }
    out.push(Path::new("..").join(path));
    out.push(Path::new("..").join("..").join(path));
    out
}

impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        format!("file candidates {:?}", self.candidates)
    }

    fn load(&self) -> Result<Vec<Service>, CatalogError> {
        for path in &self.candidates {
            let file = match File::open(path) {
                Ok(f) => f,
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "dataset candidate not usable");
                    continue;
                }
            };
            tracing::info!(path = %path.display(), "loading services dataset");
            return serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                CatalogError::Parse {
                    path: path.clone(),
                    source,
                }
            });
        }
        Err(CatalogError::SourceUnavailable {
            tried: self.candidates.clone(),
        })
    }
}
