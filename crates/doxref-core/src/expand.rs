//! Child-reference expansion for compound detail documents.
//!
//! The same operation serves two nesting levels: a directory compound lists
//! its source files, and a source-file compound lists its classes. Both are
//! sequences of `{refid, name}` references in document order.

use sxd_xpath::nodeset::Node;

use crate::error::{DocError, DocResult};
use crate::model::CompoundRef;
use crate::store::{element_text, select_nodes, XmlDocument};

/// The two child relations a compound detail document can list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    /// `innerfile` references from a directory compound to its source files
    SourceFile,
    /// `innerclass` references from a source-file compound to its types
    InnerClass,
}

impl ChildKind {
    fn selector(self) -> &'static str {
        match self {
            Self::SourceFile => "/doxygen/compounddef/innerfile",
            Self::InnerClass => "/doxygen/compounddef/innerclass",
        }
    }
}

/// Extract the compound's listed children of the given kind, in document
/// order.
///
/// Every listed child is returned; no filtering happens at this level. Each
/// entry's `name` is the reference node's text content and its `refid` the
/// identifier attribute.
pub fn inner_refs(doc: &XmlDocument, kind: ChildKind) -> DocResult<Vec<CompoundRef>> {
    let document = doc.document();
    let nodes = select_nodes(&document, doc.id(), kind.selector())?;

    let mut refs = Vec::with_capacity(nodes.len());
    for node in nodes {
        let Node::Element(child) = node else {
            return Err(shape_error(doc, "child selector matched a non-element node"));
        };
        let refid = child
            .attribute_value("refid")
            .ok_or_else(|| shape_error(doc, "child reference without a refid attribute"))?;
        refs.push(CompoundRef::new(refid, element_text(child)));
    }
    Ok(refs)
}

fn shape_error(doc: &XmlDocument, message: &str) -> DocError {
    DocError::Query {
        doc: doc.id().to_string(),
        message: message.to_string(),
    }
}
