use std::path::PathBuf;

use thiserror::Error;

/// Failures while obtaining the catalog snapshot.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("could not open the services dataset in any of the expected locations: {}", display_paths(.tried))]
    SourceUnavailable { tried: Vec<PathBuf> },

    #[error("error parsing services dataset {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures surfaced by a tool invocation.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{0} is required")]
    MissingArgument(&'static str),

    #[error("{name} {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("error retrieving services: {0}")]
    Catalog(#[from] CatalogError),

    #[error("error serializing services data: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ToolError {
    /// True for errors caused by the caller's input rather than the server.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            ToolError::MissingArgument(_)
                | ToolError::InvalidArgument { .. }
                | ToolError::UnknownTool(_)
        )
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
