//! Index document resolution and subtree filtering.
//!
//! The root index lists every compound in the corpus. Only directory-like
//! compounds become module stubs; the one whose last path segment equals the
//! library's namespace token anchors the subtree filter and is itself
//! excluded from the output.

use sxd_xpath::nodeset::Node;

use crate::error::{DocError, DocResult};
use crate::model::CompoundRef;
use crate::store::{element_text, select_nodes, XmlDocument};

/// Selector for directory-like compounds in the index
const DIR_COMPOUNDS: &str = "/doxygenindex/compound[@kind='dir']";

/// List every directory compound the index declares, in document order.
///
/// Each stub carries the compound's `refid` and the text of its first
/// `name` child.
pub fn list_directory_compounds(index: &XmlDocument) -> DocResult<Vec<CompoundRef>> {
    let document = index.document();
    let nodes = select_nodes(&document, index.id(), DIR_COMPOUNDS)?;

    let mut stubs = Vec::with_capacity(nodes.len());
    for node in nodes {
        let Node::Element(compound) = node else {
            return Err(shape_error(index, "compound selector matched a non-element node"));
        };
        let refid = compound
            .attribute_value("refid")
            .ok_or_else(|| shape_error(index, "directory compound without a refid attribute"))?;
        let name = compound
            .children()
            .into_iter()
            .filter_map(|child| child.element())
            .find(|e| e.name().local_part() == "name")
            .ok_or_else(|| shape_error(index, "directory compound without a name element"))?;
        stubs.push(CompoundRef::new(refid, element_text(name)));
    }
    Ok(stubs)
}

/// Find the module stub representing the library's own root namespace: the
/// unique stub whose last `/`-delimited name segment equals `token`.
pub fn find_root_module<'a>(stubs: &'a [CompoundRef], token: &str) -> DocResult<&'a CompoundRef> {
    let matches: Vec<&CompoundRef> = stubs
        .iter()
        .filter(|stub| stub.name.rsplit('/').next() == Some(token))
        .collect();
    match matches.as_slice() {
        [root] => Ok(root),
        other => Err(DocError::RootModuleNotFound {
            token: token.to_string(),
            matches: other.len(),
        }),
    }
}

/// Keep the stubs lying under the root module's namespace, excluding the
/// root itself; input order is preserved.
///
/// Membership is literal substring containment of the root name, not
/// path-segment prefix matching: a sibling whose name embeds the root name
/// elsewhere is also kept. That is the selection rule of the corpus this
/// tool regenerates docs for, so it is preserved as-is.
pub fn filter_subtree(stubs: Vec<CompoundRef>, root_name: &str) -> Vec<CompoundRef> {
    stubs
        .into_iter()
        .filter(|stub| stub.name.contains(root_name) && stub.name != root_name)
        .collect()
}

fn shape_error(index: &XmlDocument, message: &str) -> DocError {
    DocError::Query {
        doc: index.id().to_string(),
        message: message.to_string(),
    }
}
