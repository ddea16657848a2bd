//! Tests for the editor operations
//!
//! These tests verify that every edit:
//! 1. Changes the world as requested, clipped to the world bounds
//! 2. Records exactly one undo level before touching anything
//! 3. Can be undone and redone

mod helpers;

mod clipboard_operations_tests;
mod history_operations_tests;
mod region_operations_tests;
