//! Property-based tests for SnipView core library

mod manifest_tests;
mod render_tests;
