//! Tests for the interactive editing state container.
mod common;

use flowsheet::prelude::*;
use serde_yaml::Value;

#[test]
fn test_starter_pipeline_loads() {
    let editor = PipelineEditor::from_document(STARTER_PIPELINE).unwrap();
    assert_eq!(editor.graph().nodes.len(), 3);
    assert_eq!(editor.graph().edges.len(), 2);
}

#[test]
fn test_added_nodes_and_edges_reach_the_derived_document() {
    let mut editor = PipelineEditor::from_document(STARTER_PIPELINE).unwrap();
    editor.add_node("plot", Some("plot_series")).unwrap();
    editor.connect("rename_columns", "plot").unwrap();

    let yaml = editor.document();
    assert!(yaml.contains("plot:"));
    assert!(yaml.contains("function: plot_series"));
    assert!(yaml.contains("- rename_columns"));
}

#[test]
fn test_new_nodes_take_the_next_grid_slot() {
    let mut editor = PipelineEditor::new();
    editor.add_node("first", None).unwrap();
    editor.add_node("second", None).unwrap();
    editor.add_node("third", None).unwrap();
    editor.add_node("fourth", None).unwrap();

    let fourth = editor.graph().node("fourth").unwrap();
    assert_eq!((fourth.position.x, fourth.position.y), (50.0, 200.0));
}

#[test]
fn test_duplicate_node_ids_are_rejected() {
    let mut editor = PipelineEditor::new();
    editor.add_node("a", None).unwrap();
    assert_eq!(
        editor.add_node("a", None),
        Err(EditorError::DuplicateNode("a".to_string()))
    );
}

#[test]
fn test_connect_requires_both_endpoints() {
    let mut editor = PipelineEditor::new();
    editor.add_node("a", None).unwrap();
    assert_eq!(
        editor.connect("a", "ghost"),
        Err(EditorError::UnknownNode("ghost".to_string()))
    );
    assert!(editor.graph().edges.is_empty());
}

#[test]
fn test_removing_a_node_drops_incident_edges() {
    let mut editor = PipelineEditor::from_document(STARTER_PIPELINE).unwrap();
    editor.remove_node("drop_nulls").unwrap();
    assert_eq!(editor.graph().nodes.len(), 2);
    assert!(editor.graph().edges.is_empty());
}

#[test]
fn test_disconnect_removes_one_duplicate_at_a_time() {
    let mut editor = PipelineEditor::new();
    editor.add_node("a", None).unwrap();
    editor.add_node("b", None).unwrap();
    let id = editor.connect("a", "b").unwrap();
    assert_eq!(editor.connect("a", "b").unwrap(), id);
    assert_eq!(editor.graph().edges.len(), 2);

    editor.disconnect(&id).unwrap();
    assert_eq!(editor.graph().edges.len(), 1);
    editor.disconnect(&id).unwrap();
    assert!(editor.graph().edges.is_empty());
    assert_eq!(
        editor.disconnect(&id),
        Err(EditorError::UnknownEdge(id))
    );
}

#[test]
fn test_failed_load_keeps_previous_state() {
    let mut editor = PipelineEditor::from_document(STARTER_PIPELINE).unwrap();
    let before = editor.graph().clone();

    assert!(editor.load_document("nodes: [unterminated").is_err());
    assert_eq!(editor.graph(), &before);
}

#[test]
fn test_set_function_refreshes_the_label() {
    let mut editor = PipelineEditor::new();
    editor.add_node("step", None).unwrap();
    assert_eq!(editor.graph().node("step").unwrap().data.label, "step (N/A)");

    editor.set_function("step", Some("read_csv")).unwrap();
    let node = editor.graph().node("step").unwrap();
    assert_eq!(node.data.label, "step (read_csv)");
    assert_eq!(node.data.function.as_deref(), Some("read_csv"));

    editor.set_function("step", None).unwrap();
    assert_eq!(editor.graph().node("step").unwrap().data.label, "step (N/A)");
}

#[test]
fn test_parameter_edits_reach_the_derived_document() {
    let mut editor = PipelineEditor::new();
    editor.add_node("load", Some("read_csv")).unwrap();
    editor.set_param("load", "encoding", "utf-8").unwrap();
    editor.set_output_variable("load", "df").unwrap();

    let yaml = editor.document();
    assert!(yaml.contains("encoding: utf-8"));
    assert!(yaml.contains("vars: df"));

    let previous = editor.remove_param("load", "encoding").unwrap();
    assert_eq!(previous, Some(Value::from("utf-8")));
    assert!(!editor.document().contains("encoding"));
}

#[test]
fn test_moving_a_node_never_touches_the_document() {
    let mut editor = PipelineEditor::from_document(STARTER_PIPELINE).unwrap();
    let before = editor.document();

    editor
        .move_node("load_data", Position { x: 640.0, y: 480.0 })
        .unwrap();
    assert_eq!(editor.document(), before);
    assert_eq!(editor.graph().node("load_data").unwrap().position.x, 640.0);
}
