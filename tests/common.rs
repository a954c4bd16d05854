//! Common test utilities for building recipes and submitted data.
use katachi::prelude::*;

/// A minimal recipe wrapping the given layout nodes, with no outputs.
#[allow(dead_code)]
pub fn recipe_with_layout(layout: Vec<LayoutNode>) -> Recipe {
    Recipe {
        display_name: "Screen Saver".to_string(),
        version: "1.2".to_string(),
        source_path: "recipes/screensaver.plist".into(),
        outputs: Vec::new(),
        layout,
    }
}

/// A recipe exercising every field kind and a conditional output table.
#[allow(dead_code)]
pub fn sample_recipe() -> Recipe {
    Recipe {
        display_name: "Screen Saver".to_string(),
        version: "1.2".to_string(),
        source_path: "recipes/screensaver.plist".into(),
        outputs: vec![
            ("idleTime".to_string(), "$idle_time".to_string()),
            (
                "askForPassword".to_string(),
                "$ask_for_password?(@1):(@0)".to_string(),
            ),
            ("modulePath".to_string(), "$module?".to_string()),
            ("managed".to_string(), "@true".to_string()),
        ],
        layout: vec![LayoutNode::Group {
            title: "General".to_string(),
            children: vec![
                LayoutNode::Field(FieldDescriptor {
                    kind: FieldKind::Integer,
                    key: "idle_time".to_string(),
                    title: "Idle time".to_string(),
                    required: true,
                    description: Some("Seconds before the screen saver starts".to_string()),
                    choices: Vec::new(),
                    default: Some(Value::Integer(600)),
                }),
                LayoutNode::Field(FieldDescriptor {
                    kind: FieldKind::Boolean,
                    key: "ask_for_password".to_string(),
                    title: "Ask for password".to_string(),
                    required: false,
                    description: None,
                    choices: Vec::new(),
                    default: Some(Value::Bool(true)),
                }),
                LayoutNode::Field(FieldDescriptor {
                    kind: FieldKind::Choice,
                    key: "module".to_string(),
                    title: "Module".to_string(),
                    required: false,
                    description: None,
                    choices: vec![
                        ChoiceOption {
                            value: "flurry".to_string(),
                            title: "Flurry".to_string(),
                        },
                        ChoiceOption {
                            value: "arabesque".to_string(),
                            title: "Arabesque".to_string(),
                        },
                    ],
                    default: None,
                }),
            ],
        }],
    }
}

/// Builds submitted data from string pairs.
#[allow(dead_code)]
pub fn form_data(pairs: &[(&str, &str)]) -> FormData {
    pairs.iter().copied().collect()
}
