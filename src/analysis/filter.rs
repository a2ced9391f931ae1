//! Member eligibility

use crate::schema::{Accessibility, MemberDeclaration};

/// Whether a member can be bound from markup: public, instance and readable.
pub fn is_accessible(member: &MemberDeclaration) -> bool {
    member.accessibility == Accessibility::Public && !member.is_static && member.has_getter
}

/// Eligibility predicate with configurable exclusion markers
///
/// A member is eligible when [`is_accessible`] holds and it is neither
/// excluded by name nor carries an excluded attribute.
#[derive(Debug, Clone)]
pub struct MemberFilter {
    excluded_names: Vec<String>,
    excluded_attributes: Vec<String>,
}

impl Default for MemberFilter {
    fn default() -> Self {
        Self {
            // Design-time flag exposed by MVVM view-model base classes
            excluded_names: vec!["IsInDesignMode".to_string()],
            excluded_attributes: Vec::new(),
        }
    }
}

impl MemberFilter {
    /// Filter that only applies [`is_accessible`]
    pub fn accessibility_only() -> Self {
        Self {
            excluded_names: Vec::new(),
            excluded_attributes: Vec::new(),
        }
    }

    pub fn new(excluded_names: Vec<String>, excluded_attributes: Vec<String>) -> Self {
        Self {
            excluded_names,
            excluded_attributes: excluded_attributes
                .iter()
                .map(|a| normalize_attribute(a))
                .collect(),
        }
    }

    pub fn is_eligible(&self, member: &MemberDeclaration) -> bool {
        if !is_accessible(member) {
            return false;
        }

        if self.excluded_names.iter().any(|n| n == &member.name) {
            tracing::trace!("{} excluded by name", member.name);
            return false;
        }

        if member
            .attributes
            .iter()
            .any(|a| self.excluded_attributes.contains(&normalize_attribute(a)))
        {
            tracing::trace!("{} excluded by attribute", member.name);
            return false;
        }

        true
    }
}

/// `System.ComponentModel.BrowsableAttribute` -> `browsable`
fn normalize_attribute(name: &str) -> String {
    let simple = name.rsplit('.').next().unwrap_or(name);
    let simple = simple.strip_suffix("Attribute").unwrap_or(simple);
    simple.to_lowercase()
}
