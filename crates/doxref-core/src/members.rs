//! Public member extraction from class detail documents.
//!
//! Only declarations under a `public` visibility qualifier are selected;
//! other visibilities are never listed. Each member's ordered child fields
//! are folded into a sparse [`MemberRecord`], skipping the final child,
//! which is a closing sentinel that never carries usable content.

use sxd_xpath::nodeset::Node;

use crate::error::{DocError, DocResult};
use crate::model::{MemberField, MemberRecord};
use crate::store::{element_text, select_nodes, XmlDocument};

/// Selector for publicly visible member declarations
const PUBLIC_MEMBERS: &str = "/doxygen/compounddef/sectiondef/memberdef[@prot='public']";

/// Extract every public member declaration, in document order.
///
/// A field is recorded only if its trimmed text content is non-empty; when
/// the same field kind occurs more than once the last occurrence wins.
pub fn extract_public_members(doc: &XmlDocument) -> DocResult<Vec<MemberRecord>> {
    let document = doc.document();
    let nodes = select_nodes(&document, doc.id(), PUBLIC_MEMBERS)?;

    let mut records = Vec::with_capacity(nodes.len());
    for node in nodes {
        let Node::Element(member) = node else {
            return Err(shape_error(doc, "member selector matched a non-element node"));
        };
        let id = member
            .attribute_value("id")
            .ok_or_else(|| shape_error(doc, "member declaration without an id attribute"))?;

        let mut record = MemberRecord::new(id);
        let children = member.children();
        // The final child is a closing sentinel; everything before it is a
        // candidate field.
        let field_count = children.len().saturating_sub(1);
        for child in &children[..field_count] {
            let Some(element) = child.element() else {
                continue;
            };
            let text = element_text(element);
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(field) = MemberField::from_tag(element.name().local_part()) {
                record.set(field, trimmed.to_string());
            }
        }
        records.push(record);
    }
    Ok(records)
}

fn shape_error(doc: &XmlDocument, message: &str) -> DocError {
    DocError::Query {
        doc: doc.id().to_string(),
        message: message.to_string(),
    }
}
