//! Document fetch and XPath node selection.
//!
//! The corpus is a directory of XML documents cross-referenced by `refid`:
//! a refid maps to a same-named `<refid>.xml` file in the same directory.
//! Documents are immutable for the duration of a run and each refid is read
//! exactly once in the natural traversal, so no caching is done here.

use std::path::{Path, PathBuf};

use sxd_document::dom::{ChildOfElement, Document, Element};
use sxd_document::{parser, Package};
use sxd_xpath::nodeset::Node;
use sxd_xpath::{evaluate_xpath, Value};

use crate::error::{DocError, DocResult};

/// Document identifier of the corpus root index
pub const INDEX_DOC: &str = "index";

/// Fetches and parses documents from a corpus directory
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    /// Create a store rooted at the given corpus directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The corpus directory this store reads from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read and parse the document identified by `doc_id`
    pub async fn fetch(&self, doc_id: &str) -> DocResult<XmlDocument> {
        let path = self.root.join(format!("{doc_id}.xml"));
        let xml = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| DocError::Io { path, source })?;
        XmlDocument::parse(doc_id, &xml)
    }
}

/// A parsed XML document, owning its backing storage
pub struct XmlDocument {
    id: String,
    package: Package,
}

impl XmlDocument {
    /// Parse `xml` into a navigable document identified by `id`
    pub fn parse(id: &str, xml: &str) -> DocResult<Self> {
        let package = parser::parse(xml).map_err(|e| DocError::Parse {
            doc: id.to_string(),
            message: format!("{e:?}"),
        })?;
        Ok(Self {
            id: id.to_string(),
            package,
        })
    }

    /// The document identifier this was fetched under
    pub fn id(&self) -> &str {
        &self.id
    }

    /// A navigable view of the parsed tree
    pub fn document(&self) -> Document<'_> {
        self.package.as_document()
    }
}

impl std::fmt::Debug for XmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XmlDocument").field("id", &self.id).finish()
    }
}

/// Evaluate `xpath` against `document` and return the matching nodes in
/// document order.
///
/// Fails with [`DocError::Query`] if the expression does not evaluate or
/// does not yield a node-set.
pub fn select_nodes<'d>(
    document: &'d Document<'d>,
    doc_id: &str,
    xpath: &str,
) -> DocResult<Vec<Node<'d>>> {
    let value = evaluate_xpath(document, xpath).map_err(|e| DocError::Query {
        doc: doc_id.to_string(),
        message: format!("{e:?}"),
    })?;
    match value {
        Value::Nodeset(nodes) => Ok(nodes.document_order()),
        other => Err(DocError::Query {
            doc: doc_id.to_string(),
            message: format!("`{xpath}` selected a {} instead of a node-set", value_kind(&other)),
        }),
    }
}

fn value_kind(value: &Value<'_>) -> &'static str {
    match value {
        Value::Nodeset(_) => "node-set",
        Value::Boolean(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
    }
}

/// Concatenated text content of an element and its descendants, like the
/// XPath string-value of the node.
pub fn element_text(element: Element<'_>) -> String {
    let mut text = String::new();
    collect_text(element, &mut text);
    text
}

fn collect_text(element: Element<'_>, out: &mut String) {
    for child in element.children() {
        match child {
            ChildOfElement::Text(t) => out.push_str(t.text()),
            ChildOfElement::Element(e) => collect_text(e, out),
            _ => {}
        }
    }
}
