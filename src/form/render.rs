//! The render path: walks a recipe layout tree and emits HTML form markup.
//!
//! Rendering is a pure function of the layout tree, the external group list
//! and an optional saved-value lookup. Recipes are trusted, author-controlled
//! content; their titles and values are emitted as-is.

use crate::ast::Value;
use crate::recipe::{FieldDescriptor, FieldKind, LayoutNode, Recipe};
use ahash::AHashMap;
use itertools::Itertools;

/// Saved form state used to pre-fill controls when re-rendering after a
/// rejected submission. A fresh form renders without one.
pub type SavedValues = AHashMap<String, Value>;

/// Renders a recipe layout tree into an HTML form body.
pub struct FormRenderer<'a> {
    recipe: &'a Recipe,
    groups: &'a [String],
    saved: Option<&'a SavedValues>,
}

impl<'a> FormRenderer<'a> {
    pub fn new(recipe: &'a Recipe, groups: &'a [String]) -> Self {
        Self {
            recipe,
            groups,
            saved: None,
        }
    }

    /// Pre-fills controls from previously resolved form state.
    pub fn with_saved(mut self, saved: &'a SavedValues) -> Self {
        self.saved = Some(saved);
        self
    }

    /// Emits one fragment per markup element, depth-first over the layout
    /// tree, then the fixed group selector.
    pub fn render(&self) -> String {
        let mut fragments = Vec::new();
        for node in &self.recipe.layout {
            self.render_node(node, &mut fragments);
        }
        self.render_group_selector(&mut fragments);
        fragments.join("\n")
    }

    fn render_node(&self, node: &LayoutNode, fragments: &mut Vec<String>) {
        match node {
            LayoutNode::Group { title, children } => {
                fragments.push(format!("<fieldset><legend>{}</legend>", title));
                for child in children {
                    self.render_node(child, fragments);
                }
                fragments.push("</fieldset>".to_string());
            }
            LayoutNode::Field(field) => self.render_field(field, fragments),
        }
    }

    fn render_field(&self, field: &FieldDescriptor, fragments: &mut Vec<String>) {
        let boolean = field.kind == FieldKind::Boolean;
        fragments.push(r#"<div class="form-group">"#.to_string());

        // Boolean labels wrap the control; everything else labels it up front.
        if boolean {
            fragments.push("<label>".to_string());
        } else {
            fragments.push(format!(
                r#"<label for="{}">{}</label>"#,
                field.key, field.title
            ));
        }

        if let Some(description) = &field.description {
            fragments.push(format!(r#"<p class="help-block">{}</p>"#, description));
        }

        if let Some(control) = self.control_markup(field) {
            fragments.push(control);
        }

        if boolean {
            fragments.push(format!(" {}</label>", field.title));
        }
        fragments.push("</div>".to_string());
    }

    /// Emits the control itself, dispatched on the declared field kind.
    /// Unknown kinds produce nothing.
    fn control_markup(&self, field: &FieldDescriptor) -> Option<String> {
        match &field.kind {
            FieldKind::Text => Some(self.value_input(field, "text")),
            FieldKind::Integer => Some(self.value_input(field, "number")),
            FieldKind::Boolean => Some(self.checkbox(field)),
            FieldKind::Choice => Some(self.select(field)),
            FieldKind::Unknown(_) => None,
        }
    }

    fn saved_value(&self, key: &str) -> Option<&Value> {
        self.saved.and_then(|saved| saved.get(key))
    }

    fn value_input(&self, field: &FieldDescriptor, input_type: &str) -> String {
        // Saved value wins over the declared default.
        let value = self
            .saved_value(&field.key)
            .map(Value::to_string)
            .or_else(|| field.default.as_ref().map(Value::to_string))
            .unwrap_or_default();
        format!(
            r#"<input type="{input_type}" class="form-control" name="{name}"{required} value="{value}" id="{id}">"#,
            name = field.key,
            required = required_attr(field.required),
            id = field.key,
        )
    }

    fn checkbox(&self, field: &FieldDescriptor) -> String {
        // A saved value overrides the default even when it is false.
        let checked = match self.saved_value(&field.key) {
            Some(value) => value.is_truthy(),
            None => field.default.as_ref().is_some_and(Value::is_truthy),
        };
        format!(
            r#"<input type="checkbox" class="" name="{name}"{checked} value="True" id="{id}">"#,
            name = field.key,
            checked = if checked { " checked" } else { "" },
            id = field.key,
        )
    }

    fn select(&self, field: &FieldDescriptor) -> String {
        let saved = self.saved_value(&field.key).map(Value::to_string);
        let options = field
            .choices
            .iter()
            .map(|choice| {
                let selected = saved.as_deref() == Some(choice.value.as_str());
                format!(
                    r#"<option value="{}"{}>{}</option>"#,
                    choice.value,
                    if selected { " selected" } else { "" },
                    choice.title,
                )
            })
            .join("\n");
        format!(
            "<select class=\"form-control\" name=\"{name}\"{required} id=\"{id}\">\n{options}\n</select>",
            name = field.key,
            required = required_attr(field.required),
            id = field.key,
        )
    }

    /// The fixed extra control: a required selector for the target group,
    /// populated from the externally supplied group list.
    fn render_group_selector(&self, fragments: &mut Vec<String>) {
        fragments.push(r#"<div class="form-group">"#.to_string());
        fragments.push(r#"<label for="group_id">Applies to group</label>"#.to_string());
        fragments
            .push(r#"<select class="form-control" name="group_id" required id="group_id">"#.to_string());
        for group in self.groups {
            fragments.push(format!(r#"<option value="{group}">{group}</option>"#));
        }
        fragments.push("</select>".to_string());
        fragments.push("</div>".to_string());
    }
}

fn required_attr(required: bool) -> &'static str {
    if required { " required" } else { "" }
}
