//! Base-chain member collection

use std::collections::HashSet;

use crate::analysis::filter::MemberFilter;
use crate::model::SemanticModel;
use crate::schema::{ClassDeclaration, MemberDeclaration};

/// Eligible members of a class followed by those of each base class
///
/// The chain is walked iteratively. A base that cannot be resolved ends the
/// walk, and a base already visited (an inheritance cycle in broken code)
/// stops it as well. A base member overridden or hidden by a derived class
/// (same name) is listed once, from the most derived declaration.
pub fn full_member_list<'m>(
    model: &'m SemanticModel,
    class: &'m ClassDeclaration,
    filter: &MemberFilter,
) -> Vec<&'m MemberDeclaration> {
    let mut members = Vec::new();
    let mut visited = HashSet::new();
    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut current = Some(class);

    while let Some(decl) = current {
        if !visited.insert(decl.full_name.as_str()) {
            tracing::debug!("inheritance cycle at {}", decl.full_name);
            break;
        }

        for member in decl.members.iter().filter(|m| filter.is_eligible(m)) {
            if seen_names.insert(member.name.as_str()) {
                members.push(member);
            } else {
                tracing::trace!("{}.{} is overridden, skipped", decl.full_name, member.name);
            }
        }

        current = model.resolve_base(decl);
        if current.is_none() && !decl.bases.is_empty() {
            tracing::trace!("no resolvable base class for {}", decl.full_name);
        }
    }

    members
}
