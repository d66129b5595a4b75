//! Doxref Core - resolution engine for flattened API references
//!
//! This crate turns the multi-file XML corpus produced by a documentation
//! generator (one `index.xml` plus one detail document per compound,
//! cross-referenced by `refid`) into a single ordered tree of modules,
//! classes, and public members, and renders that tree as Markdown:
//! - Store: async document fetch and XPath node selection
//! - Index: directory-compound listing, root-module lookup, subtree filter
//! - Expand: inner-file / inner-class child expansion
//! - Members: public member extraction into sparse field records
//! - Pipeline: the fan-out/fan-in orchestration of the above
//! - Markdown: rendering of the finished tree

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types shared across the pipeline
pub mod error;

/// Document fetch and XPath selection
pub mod store;

/// Resolved entity tree - modules, classes, member records
pub mod model;

/// Index document resolution and subtree filtering
pub mod index;

/// Child-reference expansion for compound detail documents
pub mod expand;

/// Public member extraction
pub mod members;

/// Orchestration of the full resolution run
pub mod pipeline;

/// Markdown rendering of the resolved tree
pub mod markdown;

/// Convenience re-export of the error type and result alias
pub use error::{DocError, DocResult};

/// Convenience re-export of the document store
pub use store::{DocumentStore, XmlDocument};

/// Convenience re-export of the resolved entity types
pub use model::{Class, CompoundRef, MemberField, MemberRecord, Module};

/// Convenience re-export of the pipeline
pub use pipeline::DocPipeline;

/// Convenience re-export of the renderer
pub use markdown::MarkdownGenerator;
