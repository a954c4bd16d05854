//! Loading and conversion of recipe property lists into the tagged model.
//!
//! Only the load boundary itself can fail: an unreadable or unparseable file
//! and missing top-level entries propagate as [`RecipeError`]. Past that,
//! malformed layout nodes are skipped silently and unknown field types are
//! kept as [`FieldKind::Unknown`], matching the engine's tolerance policy.

use super::definition::{ChoiceOption, FieldDescriptor, FieldKind, LayoutNode, Recipe};
use crate::ast::Value;
use crate::error::RecipeError;
use plist::{Dictionary, Value as PlistValue};
use std::io::Read;
use std::path::PathBuf;

/// Loads recipe property lists by name from a fixed base directory.
#[derive(Debug, Clone)]
pub struct RecipeLoader {
    base_dir: PathBuf,
}

impl RecipeLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Loads and converts the named recipe.
    pub fn load(&self, name: &str) -> Result<Recipe, RecipeError> {
        let path = self.base_dir.join(name);
        let root = PlistValue::from_file(&path).map_err(|source| RecipeError::Plist {
            path: path.display().to_string(),
            source,
        })?;
        Recipe::from_plist(path, root)
    }
}

impl Recipe {
    /// Parses an XML property list from a reader and converts it.
    /// `source_path` is recorded as the recipe's origin.
    pub fn from_reader<R: Read>(
        source_path: impl Into<PathBuf>,
        reader: R,
    ) -> Result<Recipe, RecipeError> {
        let source_path = source_path.into();
        let root = PlistValue::from_reader_xml(reader).map_err(|source| RecipeError::Plist {
            path: source_path.display().to_string(),
            source,
        })?;
        Recipe::from_plist(source_path, root)
    }

    /// Converts an already-parsed property list into a `Recipe`.
    pub fn from_plist(
        source_path: impl Into<PathBuf>,
        root: PlistValue,
    ) -> Result<Recipe, RecipeError> {
        let source_path = source_path.into();
        let path = source_path.display().to_string();

        let mut dict = root
            .into_dictionary()
            .ok_or(RecipeError::NotADictionary { path: path.clone() })?;

        let display_name = take_string(&mut dict, "display_name", &path)?;
        let version = take_string(&mut dict, "recipe_version", &path)?;

        let outputs_dict = dict
            .remove("outputs")
            .and_then(PlistValue::into_dictionary)
            .ok_or(RecipeError::MissingEntry {
                path: path.clone(),
                key: "outputs",
            })?;
        // Non-string expression entries are dropped, not rejected.
        let outputs = outputs_dict
            .into_iter()
            .filter_map(|(key, value)| {
                let expression = value.as_string()?.to_string();
                Some((key, expression))
            })
            .collect();

        let mut layout = Vec::new();
        if let Some(content) = dict.remove("content") {
            collect_nodes(&content, &mut layout);
        }

        Ok(Recipe {
            display_name,
            version,
            source_path,
            outputs,
            layout,
        })
    }
}

fn take_string(
    dict: &mut Dictionary,
    key: &'static str,
    path: &str,
) -> Result<String, RecipeError> {
    dict.remove(key)
        .and_then(|value| value.as_string().map(str::to_string))
        .ok_or(RecipeError::MissingEntry {
            path: path.to_string(),
            key,
        })
}

/// Walks an arbitrary property-list subtree, collecting every dictionary
/// that declares a `type`. Containers without a `type` are descended into;
/// scalars are ignored.
fn collect_nodes(value: &PlistValue, nodes: &mut Vec<LayoutNode>) {
    match value {
        PlistValue::Array(items) => {
            for item in items {
                collect_nodes(item, nodes);
            }
        }
        PlistValue::Dictionary(dict) => {
            if dict.get("type").is_some() {
                if let Some(node) = parse_node(dict) {
                    nodes.push(node);
                }
            } else {
                for child in dict.values() {
                    collect_nodes(child, nodes);
                }
            }
        }
        _ => {}
    }
}

/// Converts one typed dictionary into a layout node. Nodes missing their
/// key or title are malformed and yield `None`, dropping them silently.
fn parse_node(dict: &Dictionary) -> Option<LayoutNode> {
    let type_name = dict.get("type")?.as_string()?;

    if type_name == "group" {
        let title = dict.get("title")?.as_string()?.to_string();
        let mut children = Vec::new();
        if let Some(content) = dict.get("content") {
            collect_nodes(content, &mut children);
        }
        return Some(LayoutNode::Group { title, children });
    }

    let key = dict.get("key")?.as_string()?.to_string();
    let title = dict.get("title")?.as_string()?.to_string();
    let required = dict
        .get("required")
        .and_then(PlistValue::as_boolean)
        .unwrap_or(false);
    let description = dict
        .get("description")
        .and_then(|v| v.as_string())
        .map(str::to_string);
    let choices = dict.get("values").map(parse_choices).unwrap_or_default();
    let default = dict.get("default_value").and_then(field_value);

    Some(LayoutNode::Field(FieldDescriptor {
        kind: FieldKind::from_type_name(type_name),
        key,
        title,
        required,
        description,
        choices,
        default,
    }))
}

fn parse_choices(value: &PlistValue) -> Vec<ChoiceOption> {
    let Some(entries) = value.as_array() else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| {
            let dict = entry.as_dictionary()?;
            Some(ChoiceOption {
                value: dict.get("value")?.as_string()?.to_string(),
                title: dict.get("title")?.as_string()?.to_string(),
            })
        })
        .collect()
}

/// Converts a property-list scalar into a field value. Non-scalar defaults
/// yield `None`.
fn field_value(value: &PlistValue) -> Option<Value> {
    if let Some(s) = value.as_string() {
        return Some(Value::String(s.to_string()));
    }
    if let Some(b) = value.as_boolean() {
        return Some(Value::Bool(b));
    }
    value.as_signed_integer().map(Value::Integer)
}
