//! Orchestration of a full resolution run.
//!
//! Data flows strictly downward (index, modules, source files, classes,
//! members) and folds strictly upward: each stage returns its result to its
//! caller and nothing is accumulated through shared state. Modules complete
//! strictly one after another; within a module, source-file and class
//! expansion fan out concurrently and are folded back in document order.

use std::path::Path;

use futures_util::future::try_join_all;

use crate::error::DocResult;
use crate::expand::{self, ChildKind};
use crate::index;
use crate::members;
use crate::model::{Class, CompoundRef, Module};
use crate::store::{DocumentStore, INDEX_DOC};

/// Resolves a documentation corpus into an ordered list of fully populated
/// modules.
///
/// Any single failure (I/O, parse, missing resolve) aborts the entire run;
/// there is no partial-result mode.
#[derive(Debug, Clone)]
pub struct DocPipeline {
    store: DocumentStore,
    root_token: String,
}

impl DocPipeline {
    /// Create a pipeline over the corpus in `input_dir`, anchored at the
    /// library namespace named by `root_token`.
    pub fn new(input_dir: impl AsRef<Path>, root_token: impl Into<String>) -> Self {
        Self {
            store: DocumentStore::new(input_dir.as_ref()),
            root_token: root_token.into(),
        }
    }

    /// Resolve the whole corpus.
    ///
    /// Reads the index, identifies the root module, filters the stub list to
    /// the root's namespace subtree, and expands every surviving module down
    /// to its public members. The root module itself never appears in the
    /// result; it only anchors the filter.
    pub async fn resolve(&self) -> DocResult<Vec<Module>> {
        let index_doc = self.store.fetch(INDEX_DOC).await?;
        let stubs = index::list_directory_compounds(&index_doc)?;
        let root_name = index::find_root_module(&stubs, &self.root_token)?.name.clone();
        let stubs = index::filter_subtree(stubs, &root_name);

        // Sequential on purpose: module N+1 must not observably reorder
        // relative to module N in the output.
        let mut modules = Vec::with_capacity(stubs.len());
        for stub in stubs {
            modules.push(self.resolve_module(stub).await?);
        }
        Ok(modules)
    }

    async fn resolve_module(&self, stub: CompoundRef) -> DocResult<Module> {
        let doc = self.store.fetch(&stub.refid).await?;
        let source_files = expand::inner_refs(&doc, ChildKind::SourceFile)?;

        // Source files resolve concurrently; try_join_all folds the results
        // back in input order, and the first failure abandons the remaining
        // in-flight siblings.
        let class_lists =
            try_join_all(source_files.iter().map(|file| self.resolve_source_file(file))).await?;
        let classes = class_lists.into_iter().flatten().collect();

        Ok(Module {
            refid: stub.refid,
            name: stub.name,
            source_files,
            classes,
        })
    }

    async fn resolve_source_file(&self, file: &CompoundRef) -> DocResult<Vec<Class>> {
        let doc = self.store.fetch(&file.refid).await?;
        let class_refs = expand::inner_refs(&doc, ChildKind::InnerClass)?;
        try_join_all(class_refs.into_iter().map(|class_ref| self.resolve_class(class_ref))).await
    }

    async fn resolve_class(&self, class_ref: CompoundRef) -> DocResult<Class> {
        let doc = self.store.fetch(&class_ref.refid).await?;
        let members = members::extract_public_members(&doc)?;
        Ok(Class {
            refid: class_ref.refid,
            name: class_ref.name,
            members,
        })
    }
}
