//! Tests for the submission path: output resolution, document stamping,
//! serialization and the persistence seam.
mod common;
use common::{form_data, recipe_with_layout, sample_recipe};
use katachi::prelude::*;

#[test]
fn every_declared_output_is_populated() {
    let recipe = sample_recipe();
    // No module submitted: "modulePath" must still appear, as absent.
    let data = form_data(&[("idle_time", "300"), ("group_id", "engineering")]);
    let submission = resolve_submission(&recipe, &data);

    assert_eq!(submission.answers.len(), recipe.outputs.len());
    assert_eq!(submission.document.outputs().len(), recipe.outputs.len());
    assert_eq!(submission.answers["modulePath"], None);
    assert_eq!(
        submission.answers["idleTime"],
        Some("300".to_string())
    );
    assert_eq!(submission.answers["askForPassword"], Some("0".to_string()));
    assert_eq!(submission.answers["managed"], Some("true".to_string()));
}

#[test]
fn answers_mirror_document_outputs() {
    let recipe = sample_recipe();
    let data = form_data(&[("ask_for_password", "True"), ("group_id", "design")]);
    let submission = resolve_submission(&recipe, &data);

    for (key, value) in submission.document.outputs() {
        assert_eq!(&submission.answers[key], value);
    }
}

#[test]
fn identifiers_are_uppercase_and_distinct_per_submission() {
    let recipe = sample_recipe();
    let data = form_data(&[("group_id", "engineering")]);

    let first = resolve_submission(&recipe, &data);
    let second = resolve_submission(&recipe, &data);

    assert_ne!(first.document.uuid, second.document.uuid);
    assert_eq!(first.document.uuid, first.document.uuid.to_uppercase());
    assert_eq!(first.document.uuid.len(), 36);
}

#[test]
fn document_is_stamped_with_recipe_identity_and_group() {
    let recipe = sample_recipe();
    let data = form_data(&[("group_id", "engineering")]);
    let submission = resolve_submission(&recipe, &data);

    assert_eq!(submission.document.display_name, "Screen Saver");
    assert_eq!(submission.document.version, "1.2");
    assert_eq!(submission.document.file_location, "recipes/screensaver.plist");
    assert_eq!(
        submission.document.group_name,
        Some("engineering".to_string())
    );
}

#[test]
fn end_to_end_conditional_output() {
    let mut recipe = recipe_with_layout(Vec::new());
    recipe.outputs = vec![(
        "enabled".to_string(),
        "$flag?(@true):(@false)".to_string(),
    )];

    let data = form_data(&[("flag", "1"), ("group_id", "engineering")]);
    let submission = resolve_submission(&recipe, &data);

    assert_eq!(submission.document.output("enabled"), Some("true"));
    assert_eq!(
        submission.document.group_name,
        Some("engineering".to_string())
    );

    let data = form_data(&[("group_id", "engineering")]);
    let submission = resolve_submission(&recipe, &data);
    assert_eq!(submission.document.output("enabled"), Some("false"));
}

#[test]
fn xml_output_wraps_payload_content_and_omits_absent_outputs() {
    let recipe = sample_recipe();
    let data = form_data(&[("idle_time", "300"), ("group_id", "engineering")]);
    let submission = resolve_submission(&recipe, &data);

    let xml = submission.document.to_xml().unwrap();
    assert!(xml.contains("<key>payloadContent</key>"));
    assert!(xml.contains("<key>display_name</key>"));
    assert!(xml.contains("<key>idleTime</key>"));
    assert!(xml.contains("<string>300</string>"));
    assert!(xml.contains("<key>group_name</key>"));
    assert!(xml.contains(&submission.document.uuid));
    // Resolved-to-nothing outputs are omitted from the payload.
    assert!(!xml.contains("modulePath"));
}

#[test]
fn memory_store_accumulates_documents() {
    let recipe = sample_recipe();
    let data = form_data(&[("group_id", "engineering")]);

    let mut store = MemoryStore::new();
    store
        .save(resolve_submission(&recipe, &data).document)
        .unwrap();
    store
        .save(resolve_submission(&recipe, &data).document)
        .unwrap();

    assert_eq!(store.documents().len(), 2);
    assert_ne!(store.documents()[0].uuid, store.documents()[1].uuid);
}

#[test]
fn document_display_names_recipe_and_group() {
    let recipe = sample_recipe();
    let data = form_data(&[("group_id", "engineering")]);
    let submission = resolve_submission(&recipe, &data);
    assert_eq!(
        submission.document.to_string(),
        "Document Screen Saver for group engineering"
    );
}
