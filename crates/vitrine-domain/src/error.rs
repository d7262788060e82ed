//! Error handling types

use thiserror::Error;

use crate::constants::{I18N_CLIENT, I18N_DATA, I18N_FRONTEND};

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Vitrine rendering engine
///
/// The three categories `View`, `Frontend` and `Data` are *recoverable*: the
/// tree renderer converts them into localized messages on the rendering
/// context and keeps going. Everything else is either fatal to component
/// construction (`InvalidName`, `UnknownComponent`, `UnknownDecorator`,
/// `Config`) or treated as unexpected by the renderer (logged, replaced by a
/// generic message).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A configured implementation name contains characters outside `[A-Za-z0-9]`
    #[error("Invalid client name \"{name}\"")]
    InvalidName {
        /// The composed `<client-type>/<name>` identifier that was rejected
        name: String,
    },

    /// No component registered under the requested type path and name
    #[error("Unknown component \"{client_type}\" with name \"{name}\". Registered: {available:?}")]
    UnknownComponent {
        /// Requested component type path
        client_type: String,
        /// Requested implementation name
        name: String,
        /// Registered `type:name` pairs, for diagnostics
        available: Vec<String>,
    },

    /// No decorator registered under the requested name
    #[error("Unknown decorator \"{name}\". Registered: {available:?}")]
    UnknownDecorator {
        /// Requested decorator name
        name: String,
        /// Registered decorator names, for diagnostics
        available: Vec<String>,
    },

    /// View-layer failure, recoverable, shown to the visitor.
    ///
    /// The display output is the bare message because it doubles as the
    /// lookup key into the `client` translation catalog.
    #[error("{message}")]
    View {
        /// Untranslated message text
        message: String,
    },

    /// Frontend/business-logic failure, recoverable, shown to the visitor
    #[error("{message}")]
    Frontend {
        /// Untranslated message text
        message: String,
    },

    /// Data-layer failure, recoverable, shown to the visitor
    #[error("{message}")]
    Data {
        /// Untranslated message text
        message: String,
    },

    /// Template engine failure
    #[error("Template error: {message}")]
    Template {
        /// Description of the template failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl Error {
    /// Create a configuration error from a message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a view-layer error from a message
    pub fn view(message: impl Into<String>) -> Self {
        Self::View {
            message: message.into(),
        }
    }

    /// Create a frontend error from a message
    pub fn frontend(message: impl Into<String>) -> Self {
        Self::Frontend {
            message: message.into(),
        }
    }

    /// Create a data-layer error from a message
    pub fn data(message: impl Into<String>) -> Self {
        Self::Data {
            message: message.into(),
        }
    }

    /// Create an internal error from a message
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Translation domain of a recoverable error category
    ///
    /// Returns the catalog domain the renderer must translate the message
    /// through, or `None` for errors that are not recoverable at the node
    /// boundary (those are logged and replaced by a generic message).
    pub fn recoverable_domain(&self) -> Option<&'static str> {
        match self {
            Self::View { .. } => Some(I18N_CLIENT),
            Self::Frontend { .. } => Some(I18N_FRONTEND),
            Self::Data { .. } => Some(I18N_DATA),
            _ => None,
        }
    }
}
