//! Error types for the permission passes

use pagebuilder_components::NodePath;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PermissionError {
    #[error("No component carries the content region marker")]
    MissingContentRegion,

    #[error("Expected exactly one content region, found {count}")]
    AmbiguousContentRegion { count: usize },

    #[error("Component not found: {0}")]
    NodeNotFound(NodePath),

    #[error("Block wrapper at the tree root has no parent to unwrap into")]
    DetachedWrapper,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid policy: {0}")]
    Config(#[from] serde_json::Error),
}
