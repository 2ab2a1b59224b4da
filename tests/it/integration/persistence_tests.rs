//! Persistence Integration Tests
//!
//! A board's graph and viewport survive a JSON round trip.

use crate::helpers::TestGraphBuilder;
use nodeboard::{Board, Graph};

#[test]
fn test_snapshot_round_trip() {
    let mut board = TestGraphBuilder::new()
        .with_node_row(&["a", "b"])
        .with_edge("a", "b")
        .build_board();
    board.zoom_in().unwrap();

    let json = serde_json::to_string_pretty(&board.snapshot()).unwrap();
    let restored: Graph = serde_json::from_str(&json).unwrap();
    assert!(restored.validate().is_ok());
    assert_eq!(restored, board.snapshot());

    let reopened = Board::restore(restored, 800.0, 600.0).unwrap();
    assert_eq!(reopened.viewport(), board.viewport());
    assert_eq!(reopened.graph().nodes, board.graph().nodes);
    assert_eq!(reopened.graph().edges, board.graph().edges);
}

#[test]
fn test_restore_without_saved_viewport() {
    let graph = TestGraphBuilder::new().with_node("a", (0.0, 0.0)).build();
    let board = Board::restore(graph, 1024.0, 768.0).unwrap();
    assert_eq!(board.viewport().zoom, 1.0);
    assert_eq!((board.viewport().x, board.viewport().y), (0.0, 0.0));
    assert_eq!(board.viewport().width, 1024.0);
}

#[test]
fn test_restore_rejects_bad_size() {
    let graph = TestGraphBuilder::new().build();
    assert!(Board::restore(graph, 0.0, 600.0).is_err());
}
