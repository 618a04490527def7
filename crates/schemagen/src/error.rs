//! Generator errors. Every variant is fatal: nothing is written once one of
//! them is returned.

use std::io;
use std::path::PathBuf;

/// Result alias for the generator.
pub type Result<T, E = SchemagenError> = std::result::Result<T, E>;

/// Fatal failure of a generator run.
#[derive(Debug, thiserror::Error)]
pub enum SchemagenError {
    /// A requested type is not declared at the top level of the source file.
    #[error("unknown type: {name}")]
    UnknownType { name: String },

    /// The source file is not valid Rust.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },

    /// A requested type exists but cannot be generated for.
    #[error("unsupported type `{name}`: {reason}")]
    Unsupported { name: String, reason: String },

    /// Reading the source or writing the artifact failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Check mode found an artifact that differs from what would be
    /// generated.
    #[error("{} is out of date; re-run schemagen", path.display())]
    Stale { path: PathBuf },
}

impl SchemagenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn unsupported(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unsupported {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
