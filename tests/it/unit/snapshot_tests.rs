//! Snapshot tests using the insta crate.
//!
//! Host event logs are serialized to JSON and compared against inline
//! snapshots, so a change in callback order or payload shows up as a diff.
//!
//! To update snapshots after intentional changes:
//! ```bash
//! cargo insta test --accept
//! ```
//!
//! To review pending snapshot changes:
//! ```bash
//! cargo insta review
//! ```

use crate::helpers::TestGraphBuilder;
use nodeboard::input::Modifiers;

#[test]
fn snapshot_node_click_events() {
    let mut canvas = TestGraphBuilder::new().with_node_row(&["a", "b"]).build_canvas();
    canvas.click(50.0, 50.0);
    canvas.click(250.0, 50.0);

    insta::assert_json_snapshot!(canvas.events, @r#"
    [
      {
        "event": "node_clicked",
        "id": "a"
      },
      {
        "event": "node_clicked",
        "id": "b"
      }
    ]
    "#);
}

#[test]
fn snapshot_edge_create_request() {
    let mut canvas = TestGraphBuilder::new().with_node_row(&["a", "b"]).build_canvas();
    canvas.down(95.0, 50.0).move_to(250.0, 50.0).up(250.0, 50.0);

    insta::assert_json_snapshot!(canvas.events, @r#"
    [
      {
        "event": "edge_create_requested",
        "edge": {
          "id": "edge-a-b",
          "source": "a",
          "target": "b",
          "type": "default",
          "data": null
        }
      }
    ]
    "#);
}

#[test]
fn snapshot_click_then_delete() {
    let mut canvas = TestGraphBuilder::new()
        .with_node_row(&["a", "b", "c"])
        .with_edge("a", "b")
        .build_canvas();

    canvas.click(150.0, 50.0);
    canvas.state = canvas.controller.delete_selection(canvas.state.clone(), &mut canvas.events);
    canvas.click(50.0, 50.0);
    canvas.down_with(450.0, 50.0, Modifiers::shift()).up(450.0, 50.0);
    canvas.state = canvas.controller.delete_selection(canvas.state.clone(), &mut canvas.events);

    insta::assert_json_snapshot!(canvas.events, @r#"
    [
      {
        "event": "edge_clicked",
        "id": "edge-a-b"
      },
      {
        "event": "edges_deleted",
        "ids": [
          "edge-a-b"
        ]
      },
      {
        "event": "node_clicked",
        "id": "a"
      },
      {
        "event": "node_clicked",
        "id": "c"
      },
      {
        "event": "nodes_deleted",
        "ids": [
          "a",
          "c"
        ]
      }
    ]
    "#);
}
