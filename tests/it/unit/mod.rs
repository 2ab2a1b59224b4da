//! Unit tests for nodeboard.

mod geometry_tests;
mod navigation_tests;
mod snapshot_tests;
