//! Analyzer integration tests
//!
//! Each scenario parses C# sources held in memory, builds a semantic model
//! and checks the generated markup.

pub mod class_tests;
