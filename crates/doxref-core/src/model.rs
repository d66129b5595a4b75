//! Resolved entity tree: modules, classes, and member records.
//!
//! Entities are constructed fresh per run and populated exactly once when
//! their fan-out folds; nothing mutates them afterwards. Ordering of
//! `source_files`, `classes`, and `members` always matches the order the
//! entities appear in their source document.

/// A lightweight reference to a compound: its cross-reference identifier and
/// display name.
///
/// Used for module stubs listed in the index, for a module's source files,
/// and for a source file's classes before their detail documents resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundRef {
    /// Opaque identifier resolving to a same-named detail document
    pub refid: String,
    /// Human-readable name; may contain `/` path or `::` scope separators
    pub name: String,
}

impl CompoundRef {
    /// Create a reference from its identifier and display name
    pub fn new(refid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            refid: refid.into(),
            name: name.into(),
        }
    }
}

/// A fully resolved namespace/directory-like compound
#[derive(Debug, Clone)]
pub struct Module {
    /// Identifier of the module's detail document
    pub refid: String,
    /// Path-like module name, e.g. `include/xlnt/cell`
    pub name: String,
    /// Source files listed by the module, in document order
    pub source_files: Vec<CompoundRef>,
    /// Flattened classes of all source files, in file order then class order
    pub classes: Vec<Class>,
}

/// A fully resolved type compound
#[derive(Debug, Clone)]
pub struct Class {
    /// Identifier of the class's detail document
    pub refid: String,
    /// Scoped name, e.g. `xlnt::cell::cell`; only the last segment is
    /// display-relevant downstream
    pub name: String,
    /// Public members in document order
    pub members: Vec<MemberRecord>,
}

/// The closed set of structured sub-fields a member declaration carries.
///
/// Derived from the `memberdef` schema of the source corpus; child elements
/// outside this set are ignored during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberField {
    Type,
    Definition,
    ArgsString,
    Name,
    QualifiedName,
    Param,
    EnumValue,
    Initializer,
    Exceptions,
    BriefDescription,
    DetailedDescription,
    InbodyDescription,
}

impl MemberField {
    /// Map a source element name to its field kind, if it is one
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "type" => Some(Self::Type),
            "definition" => Some(Self::Definition),
            "argsstring" => Some(Self::ArgsString),
            "name" => Some(Self::Name),
            "qualifiedname" => Some(Self::QualifiedName),
            "param" => Some(Self::Param),
            "enumvalue" => Some(Self::EnumValue),
            "initializer" => Some(Self::Initializer),
            "exceptions" => Some(Self::Exceptions),
            "briefdescription" => Some(Self::BriefDescription),
            "detaileddescription" => Some(Self::DetailedDescription),
            "inbodydescription" => Some(Self::InbodyDescription),
            _ => None,
        }
    }
}

/// A sparse record of one documented member declaration.
///
/// A field is populated only if the corresponding source element had
/// non-empty trimmed text content; `id` is always present. When the same
/// field kind occurs more than once, the last occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct MemberRecord {
    /// Unique member identifier, always present
    pub id: String,
    /// Return/value type
    pub member_type: Option<String>,
    /// Full declaration, e.g. `void xlnt::cell::foo`
    pub definition: Option<String>,
    /// Parenthesized argument string, e.g. `(int index)`
    pub args_string: Option<String>,
    /// Unqualified member name
    pub name: Option<String>,
    /// Fully qualified member name
    pub qualified_name: Option<String>,
    /// Parameter description (last one listed)
    pub param: Option<String>,
    /// Enumerator description (last one listed)
    pub enum_value: Option<String>,
    /// Initializer expression
    pub initializer: Option<String>,
    /// Declared exceptions
    pub exceptions: Option<String>,
    /// One-line description
    pub brief_description: Option<String>,
    /// Long-form description
    pub detailed_description: Option<String>,
    /// In-body description
    pub inbody_description: Option<String>,
}

impl MemberRecord {
    /// Create an empty record for the member with the given identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Record `value` under `field`, overwriting any earlier occurrence
    pub fn set(&mut self, field: MemberField, value: String) {
        let slot = self.slot(field);
        *slot = Some(value);
    }

    /// Look up the recorded value for `field`
    pub fn get(&self, field: MemberField) -> Option<&str> {
        match field {
            MemberField::Type => self.member_type.as_deref(),
            MemberField::Definition => self.definition.as_deref(),
            MemberField::ArgsString => self.args_string.as_deref(),
            MemberField::Name => self.name.as_deref(),
            MemberField::QualifiedName => self.qualified_name.as_deref(),
            MemberField::Param => self.param.as_deref(),
            MemberField::EnumValue => self.enum_value.as_deref(),
            MemberField::Initializer => self.initializer.as_deref(),
            MemberField::Exceptions => self.exceptions.as_deref(),
            MemberField::BriefDescription => self.brief_description.as_deref(),
            MemberField::DetailedDescription => self.detailed_description.as_deref(),
            MemberField::InbodyDescription => self.inbody_description.as_deref(),
        }
    }

    fn slot(&mut self, field: MemberField) -> &mut Option<String> {
        match field {
            MemberField::Type => &mut self.member_type,
            MemberField::Definition => &mut self.definition,
            MemberField::ArgsString => &mut self.args_string,
            MemberField::Name => &mut self.name,
            MemberField::QualifiedName => &mut self.qualified_name,
            MemberField::Param => &mut self.param,
            MemberField::EnumValue => &mut self.enum_value,
            MemberField::Initializer => &mut self.initializer,
            MemberField::Exceptions => &mut self.exceptions,
            MemberField::BriefDescription => &mut self.brief_description,
            MemberField::DetailedDescription => &mut self.detailed_description,
            MemberField::InbodyDescription => &mut self.inbody_description,
        }
    }
}
