use crate::ast::Value;
use std::path::PathBuf;

/// A fully loaded recipe: the output expression table plus the layout tree
/// that drives form rendering.
///
/// Recipes are read-only inputs. Once loaded they are never mutated and can
/// be shared freely across concurrent resolutions.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub display_name: String,
    pub version: String,
    /// Where the recipe was loaded from; stamped onto every document.
    pub source_path: PathBuf,
    /// Output field name to expression string, in declaration order.
    pub outputs: Vec<(String, String)>,
    pub layout: Vec<LayoutNode>,
}

/// One node of the rendering layout tree.
///
/// The group/field distinction is decided once at load time, so the render
/// walk never branches on raw property-list shapes.
#[derive(Debug, Clone)]
pub enum LayoutNode {
    Group {
        title: String,
        children: Vec<LayoutNode>,
    },
    Field(FieldDescriptor),
}

/// A single input field of the form.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub kind: FieldKind,
    pub key: String,
    pub title: String,
    pub required: bool,
    pub description: Option<String>,
    /// Selectable entries for `Choice` fields; empty for everything else.
    pub choices: Vec<ChoiceOption>,
    pub default: Option<Value>,
}

/// The declared input type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Boolean,
    Integer,
    Choice,
    /// Declared with a type this engine does not know. The field's chrome is
    /// still rendered, but no control is emitted for it.
    Unknown(String),
}

impl FieldKind {
    /// Maps a declared recipe type name onto a kind.
    pub fn from_type_name(name: &str) -> FieldKind {
        match name {
            "string" => FieldKind::Text,
            "boolean" => FieldKind::Boolean,
            "integer" => FieldKind::Integer,
            "list" => FieldKind::Choice,
            other => FieldKind::Unknown(other.to_string()),
        }
    }
}

/// One selectable entry of a choice field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: String,
    pub title: String,
}
