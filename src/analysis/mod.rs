//! Markup generation from class declarations
//!
//! - [`filter`] decides which members are eligible
//! - [`classify`] buckets declared types and matches mapping type patterns
//! - [`template`] expands placeholders
//! - [`grouping`] wraps member output in a container
//! - [`inheritance`] collects members along the base chain
//! - [`mapping`] picks a template per member and recurses into sub-properties
//! - [`analyzer`] ties it together for a cursor position

pub mod analyzer;
pub mod classify;
pub mod filter;
pub mod grouping;
pub mod inheritance;
pub mod mapping;
pub mod template;

pub use analyzer::ClassAnalyzer;
pub use classify::{classify, MatchKind, TypeClass, TypePattern};
pub use filter::{is_accessible, MemberFilter};
pub use grouping::Grouping;
pub use inheritance::full_member_list;
pub use mapping::{MappingResolver, TemplateSlot};
pub use template::{Counters, Template};
