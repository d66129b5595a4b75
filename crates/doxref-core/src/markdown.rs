//! Markdown rendering of the resolved module tree.
//!
//! Rendering is pure string templating into one buffer, so callers can
//! withhold output until the whole run has succeeded.

use std::fmt::Write;

use crate::model::{Class, MemberField, MemberRecord, Module};

/// Renders a resolved module list as one flattened Markdown reference
pub struct MarkdownGenerator;

impl MarkdownGenerator {
    /// Render the full reference: a title line, then per module a level-2
    /// heading, per class a level-3 heading, and per member a level-4
    /// heading with its code-formatted signature.
    pub fn generate(modules: &[Module]) -> String {
        let mut output = String::new();
        writeln!(output, "# API Reference").unwrap();
        for module in modules {
            Self::write_module(&mut output, module);
        }
        output
    }

    fn write_module(output: &mut String, module: &Module) {
        let name = module.name.rsplit('/').next().unwrap_or(&module.name);
        writeln!(output, "## {} Module", capitalize(name)).unwrap();
        for class in &module.classes {
            Self::write_class(output, class);
        }
    }

    fn write_class(output: &mut String, class: &Class) {
        let name = class.name.rsplit("::").next().unwrap_or(&class.name);
        writeln!(output, "### {name}").unwrap();
        for member in &class.members {
            Self::write_member(output, member);
        }
    }

    fn write_member(output: &mut String, member: &MemberRecord) {
        let definition = member.get(MemberField::Definition).unwrap_or("");
        let args = member.get(MemberField::ArgsString).unwrap_or("");
        writeln!(output, "#### `{definition}{args}`").unwrap();
        if let Some(brief) = member.get(MemberField::BriefDescription) {
            writeln!(output, "{brief}").unwrap();
        }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
