//! Board Workflow Integration Tests

use crate::helpers::{TestGraphBuilder, assert_selected_nodes};
use nodeboard::input::{HostEvent, Modifiers, PointerEvent, WheelEvent};
use nodeboard::types::Edge;

#[test]
fn test_build_connect_move_delete() {
    let mut board = TestGraphBuilder::new().with_node_row(&["a", "b", "c"]).build_board();

    // Connect a -> b, then b -> c
    board.pointer_down(PointerEvent::at(95.0, 50.0)).unwrap();
    board.pointer_move(PointerEvent::at(250.0, 50.0)).unwrap();
    board.pointer_up(PointerEvent::at(250.0, 50.0)).unwrap();
    board.pointer_down(PointerEvent::at(295.0, 50.0)).unwrap();
    board.pointer_move(PointerEvent::at(450.0, 50.0)).unwrap();
    board.pointer_up(PointerEvent::at(450.0, 50.0)).unwrap();
    assert_eq!(board.graph().edges.len(), 2);

    // Drag "c" down
    board.pointer_down(PointerEvent::at(450.0, 50.0)).unwrap();
    board.pointer_move(PointerEvent::at(450.0, 250.0)).unwrap();
    assert!(board.gesture().unwrap().is_dragging_nodes());
    board.pointer_up(PointerEvent::at(450.0, 250.0)).unwrap();
    let c = board.graph().find_node("c").unwrap();
    assert_eq!((c.x, c.y), (400.0, 200.0));

    // Delete "b" and both of its edges go with it
    board.pointer_down(PointerEvent::at(250.0, 50.0)).unwrap();
    board.pointer_up(PointerEvent::at(250.0, 50.0)).unwrap();
    let events = board.delete_selection();
    assert!(matches!(events.as_slice(), [HostEvent::NodesDeleted { .. }]));
    assert_eq!(board.graph().nodes.len(), 2);
    assert!(board.graph().edges.is_empty());
    assert!(board.graph().validate().is_ok());
}

#[test]
fn test_reverse_connection_is_never_requested() {
    let mut board = TestGraphBuilder::new()
        .with_node_row(&["a", "b"])
        .with_edge("a", "b")
        .build_board();

    // From b's left border back to a
    board.pointer_down(PointerEvent::at(205.0, 50.0)).unwrap();
    board.pointer_move(PointerEvent::at(50.0, 50.0)).unwrap();
    let events = board.pointer_up(PointerEvent::at(50.0, 50.0)).unwrap();

    assert!(events.is_empty());
    assert_eq!(board.graph().edges, vec![Edge::between("a", "b")]);
}

#[test]
fn test_marquee_then_group_drag() {
    let mut board = TestGraphBuilder::new().with_node_row(&["a", "b", "c"]).build_board();

    board
        .pointer_down(PointerEvent::at(-10.0, 150.0).with_modifiers(Modifiers::shift()))
        .unwrap();
    board.pointer_move(PointerEvent::at(250.0, 90.0)).unwrap();
    board.pointer_up(PointerEvent::at(250.0, 90.0)).unwrap();
    assert_selected_nodes(board.selection(), &["a", "b"]);

    board.pointer_down(PointerEvent::at(250.0, 50.0)).unwrap();
    board.pointer_move(PointerEvent::at(260.0, 60.0)).unwrap();
    board.pointer_leave(PointerEvent::at(270.0, 70.0)).unwrap();

    let positions: Vec<_> = board.graph().nodes.iter().map(|n| (n.x, n.y)).collect();
    assert_eq!(positions, [(20.0, 20.0), (220.0, 20.0), (400.0, 0.0)]);
}

#[test]
fn test_navigation_round() {
    let mut board = TestGraphBuilder::new()
        .with_node("a", (0.0, 0.0))
        .with_node("b", (1500.0, 900.0))
        .build_board();

    let events = board.fit_to_content().unwrap();
    assert_eq!(events.len(), 1);
    let fitted = *board.viewport();
    assert!(fitted.zoom < 1.0);

    board.wheel(WheelEvent::at(400.0, 300.0, -200.0)).unwrap();
    assert!(board.viewport().zoom > fitted.zoom);

    board.zoom_out().unwrap();
    board.pointer_down(PointerEvent::at(700.0, 20.0)).unwrap();
    let events = board.pointer_move(PointerEvent::at(650.0, 20.0)).unwrap();
    assert!(matches!(events.as_slice(), [HostEvent::ViewportChanged { .. }]));
    board.pointer_up(PointerEvent::at(650.0, 20.0)).unwrap();

    // Navigation never touches the graph
    assert_eq!(board.graph().nodes[0].x, 0.0);
    assert!(board.gesture().is_none());
}

#[test]
fn test_select_all_and_delete_empties_board() {
    let mut board = TestGraphBuilder::new()
        .with_node_row(&["a", "b", "c"])
        .with_edge("a", "b")
        .with_edge("b", "c")
        .build_board();

    board.select_all();
    board.delete_selection();
    assert!(board.graph().nodes.is_empty());
    assert!(board.graph().edges.is_empty());

    // Nothing left to delete
    assert!(board.delete_selection().is_empty());
}
