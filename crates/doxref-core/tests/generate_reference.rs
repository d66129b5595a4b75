//! End-to-end tests for corpus resolution and rendering.
//!
//! Each test lays out a small on-disk corpus (an `index.xml` plus
//! refid-named detail documents) and runs the full pipeline over it.

use std::fs;
use std::path::Path;

use doxref_core::{DocError, DocPipeline, MarkdownGenerator};

fn write_doc(dir: &Path, refid: &str, xml: &str) {
    fs::write(dir.join(format!("{refid}.xml")), xml).unwrap();
}

/// Corpus: root `xlnt`, one submodule `xlnt/cell` with one source file
/// declaring one class with one public member, plus an unrelated module.
fn write_cell_corpus(dir: &Path) {
    write_doc(
        dir,
        "index",
        r#"<doxygenindex>
          <compound refid="dir_root" kind="dir"><name>xlnt</name></compound>
          <compound refid="dir_cell" kind="dir"><name>xlnt/cell</name></compound>
          <compound refid="dir_other" kind="dir"><name>other/thing</name></compound>
        </doxygenindex>"#,
    );
    write_doc(
        dir,
        "dir_cell",
        r#"<doxygen><compounddef id="dir_cell" kind="dir">
          <innerfile refid="f1">cell.hpp</innerfile>
        </compounddef></doxygen>"#,
    );
    write_doc(
        dir,
        "f1",
        r#"<doxygen><compounddef id="f1" kind="file">
          <innerclass refid="c_cell">xlnt::cell::cell</innerclass>
        </compounddef></doxygen>"#,
    );
    write_doc(
        dir,
        "c_cell",
        r#"<doxygen><compounddef id="c_cell" kind="class">
          <sectiondef kind="public-func">
            <memberdef kind="function" id="m_foo" prot="public">
              <type>void</type>
              <definition>void foo</definition>
              <argsstring>()</argsstring>
              <name>foo</name>
              <briefdescription></briefdescription>
              <location file="cell.hpp"/>
            </memberdef>
            <memberdef kind="function" id="m_secret" prot="private">
              <definition>void secret</definition>
              <argsstring>()</argsstring>
              <location file="cell.hpp"/>
            </memberdef>
          </sectiondef>
        </compounddef></doxygen>"#,
    );
}

#[tokio::test]
async fn resolves_and_renders_the_cell_corpus() {
    let dir = tempfile::tempdir().unwrap();
    write_cell_corpus(dir.path());

    let pipeline = DocPipeline::new(dir.path(), "xlnt");
    let modules = pipeline.resolve().await.unwrap();

    // Root and unrelated modules are excluded; only the subtree survives.
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].name, "xlnt/cell");
    assert_eq!(modules[0].classes.len(), 1);
    assert_eq!(modules[0].classes[0].members.len(), 1);

    // The private member never made it into the tree, the empty brief
    // description stayed absent, so no description line is rendered.
    let output = MarkdownGenerator::generate(&modules);
    assert_eq!(
        output,
        "# API Reference\n## Cell Module\n### cell\n#### `void foo()`\n"
    );
}

#[tokio::test]
async fn two_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    write_cell_corpus(dir.path());

    let pipeline = DocPipeline::new(dir.path(), "xlnt");
    let first = MarkdownGenerator::generate(&pipeline.resolve().await.unwrap());
    let second = MarkdownGenerator::generate(&pipeline.resolve().await.unwrap());
    assert_eq!(first, second);
}

#[tokio::test]
async fn class_order_follows_file_order_not_completion_order() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(
        dir.path(),
        "index",
        r#"<doxygenindex>
          <compound refid="dir_root" kind="dir"><name>xlnt</name></compound>
          <compound refid="dir_ws" kind="dir"><name>xlnt/worksheet</name></compound>
        </doxygenindex>"#,
    );
    write_doc(
        dir.path(),
        "dir_ws",
        r#"<doxygen><compounddef>
          <innerfile refid="f_a">a.hpp</innerfile>
          <innerfile refid="f_b">b.hpp</innerfile>
        </compounddef></doxygen>"#,
    );
    write_doc(
        dir.path(),
        "f_a",
        r#"<doxygen><compounddef>
          <innerclass refid="c_one">xlnt::one</innerclass>
          <innerclass refid="c_two">xlnt::two</innerclass>
        </compounddef></doxygen>"#,
    );
    write_doc(
        dir.path(),
        "f_b",
        r#"<doxygen><compounddef>
          <innerclass refid="c_three">xlnt::three</innerclass>
        </compounddef></doxygen>"#,
    );
    for refid in ["c_one", "c_two", "c_three"] {
        write_doc(
            dir.path(),
            refid,
            "<doxygen><compounddef><sectiondef/></compounddef></doxygen>",
        );
    }

    let pipeline = DocPipeline::new(dir.path(), "xlnt");
    let modules = pipeline.resolve().await.unwrap();

    let class_refids: Vec<&str> = modules[0]
        .classes
        .iter()
        .map(|class| class.refid.as_str())
        .collect();
    assert_eq!(class_refids, vec!["c_one", "c_two", "c_three"]);
    assert_eq!(modules[0].source_files.len(), 2);
}

#[tokio::test]
async fn missing_detail_document_fails_the_whole_run() {
    let dir = tempfile::tempdir().unwrap();
    write_cell_corpus(dir.path());
    // Break one leaf: the class detail document disappears.
    fs::remove_file(dir.path().join("c_cell.xml")).unwrap();

    let pipeline = DocPipeline::new(dir.path(), "xlnt");
    let err = pipeline.resolve().await.unwrap_err();
    assert!(matches!(err, DocError::Io { .. }));
}

#[tokio::test]
async fn missing_root_namespace_fails_before_any_expansion() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(
        dir.path(),
        "index",
        r#"<doxygenindex>
          <compound refid="dir_other" kind="dir"><name>other/thing</name></compound>
        </doxygenindex>"#,
    );

    let pipeline = DocPipeline::new(dir.path(), "xlnt");
    let err = pipeline.resolve().await.unwrap_err();
    assert!(matches!(
        err,
        DocError::RootModuleNotFound { ref token, matches: 0 } if token == "xlnt"
    ));
}

#[tokio::test]
async fn malformed_detail_document_fails_the_whole_run() {
    let dir = tempfile::tempdir().unwrap();
    write_cell_corpus(dir.path());
    fs::write(dir.path().join("f1.xml"), "<doxygen><unclosed>").unwrap();

    let pipeline = DocPipeline::new(dir.path(), "xlnt");
    let err = pipeline.resolve().await.unwrap_err();
    assert!(matches!(err, DocError::Parse { ref doc, .. } if doc == "f1"));
}
