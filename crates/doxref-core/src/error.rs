//! Error types for the reference-generation pipeline.
//!
//! Every stage fails fast: the first error aborts the whole run and no
//! partial output is considered valid.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for pipeline operations
pub type DocResult<T> = Result<T, DocError>;

/// Errors that can occur while resolving a documentation corpus
#[derive(Error, Debug)]
pub enum DocError {
    /// A document could not be read from disk
    #[error("failed to read `{}`", .path.display())]
    Io {
        /// Path of the unreadable document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A document was not well-formed XML
    #[error("failed to parse `{doc}`: {message}")]
    Parse {
        /// Identifier of the offending document
        doc: String,
        /// Parser diagnostic
        message: String,
    },

    /// An XPath query failed or produced an unexpected shape
    #[error("unexpected shape in `{doc}`: {message}")]
    Query {
        /// Identifier of the offending document
        doc: String,
        /// What the query expected and what it found
        message: String,
    },

    /// The index had no unique directory compound for the root namespace
    #[error("index has {matches} directory compound(s) named after root namespace `{token}`, expected exactly 1")]
    RootModuleNotFound {
        /// The configured namespace token
        token: String,
        /// How many compounds matched it
        matches: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_document() {
        let err = DocError::Parse {
            doc: "dir_abc123".to_string(),
            message: "unexpected end of input".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("dir_abc123"));
        assert!(text.contains("unexpected end of input"));
    }

    #[test]
    fn root_module_error_reports_match_count() {
        let err = DocError::RootModuleNotFound {
            token: "xlnt".to_string(),
            matches: 0,
        };
        assert!(err.to_string().contains("0 directory compound(s)"));
        assert!(err.to_string().contains("`xlnt`"));
    }
}
