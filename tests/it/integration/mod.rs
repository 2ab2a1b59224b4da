//! Integration tests for nodeboard.
//!
//! These tests drive a `Board` end to end: input events go in, the graph
//! and canvas state that come out are checked.

mod board_workflow_tests;
mod persistence_tests;
