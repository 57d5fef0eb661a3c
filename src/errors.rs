use std::io;

use thiserror::Error;

use crate::types::DocumentId;

/// Error type for configuration, document access, and catalogue/report IO failures.
#[derive(Debug, Error)]
pub enum SuggestError {
    /// A reference document could not be located or read.
    #[error("document '{document}' is unavailable: {reason}")]
    DocumentUnavailable {
        /// Requested document id.
        document: DocumentId,
        /// Underlying cause.
        reason: String,
    },
    /// The goal catalogue is not valid catalogue JSON.
    #[error("goal catalogue '{path}' is malformed: {details}")]
    MalformedCatalogue {
        /// Catalogue location.
        path: String,
        /// Parser message.
        details: String,
    },
    /// Filesystem failure.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// JSON (de)serialization failure outside the catalogue.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Invalid run configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
