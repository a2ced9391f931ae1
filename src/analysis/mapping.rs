//! Mapping resolution and sub-property recursion

use crate::analysis::classify::{classify, MatchKind, TypeClass};
use crate::analysis::filter::MemberFilter;
use crate::analysis::inheritance::full_member_list;
use crate::analysis::template::{Counters, Template};
use crate::model::SemanticModel;
use crate::profile::{CompiledMapping, CompiledProfile};
use crate::schema::{ClassDeclaration, MemberDeclaration, TypeDescriptor};

/// Which template family renders a member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSlot {
    /// Profile mappings, then the fallback
    Mappings,
    /// The profile's sub-property template, mappings ignored
    SubProperty,
}

/// Renders members through a compiled profile
pub struct MappingResolver<'a> {
    profile: &'a CompiledProfile,
    model: &'a SemanticModel,
    filter: &'a MemberFilter,
}

impl<'a> MappingResolver<'a> {
    pub fn new(
        profile: &'a CompiledProfile,
        model: &'a SemanticModel,
        filter: &'a MemberFilter,
    ) -> Self {
        Self {
            profile,
            model,
            filter,
        }
    }

    /// The mapping that applies to a member, if any
    ///
    /// Exact type matches are preferred over generic-shape matches; within
    /// each tier the first mapping in profile order wins.
    pub fn select(&self, member: &MemberDeclaration) -> Option<&'a CompiledMapping> {
        let mut by_shape = None;

        for mapping in &self.profile.mappings {
            if !mapping.accepts(&member.name, member.is_read_only) {
                continue;
            }
            match mapping.pattern.match_kind(&member.ty) {
                Some(MatchKind::Exact) => return Some(mapping),
                Some(MatchKind::Shape) if by_shape.is_none() => by_shape = Some(mapping),
                _ => {}
            }
        }

        by_shape
    }

    /// Render one member
    pub fn resolve(
        &self,
        member: &MemberDeclaration,
        slot: TemplateSlot,
        counters: &mut Counters,
    ) -> String {
        let mut expanding = Vec::new();
        self.render(member, slot, counters, &mut expanding)
    }

    /// Render one member of `owner`; `owner` counts as already being expanded
    pub fn resolve_in(
        &self,
        owner: &ClassDeclaration,
        member: &MemberDeclaration,
        slot: TemplateSlot,
        counters: &mut Counters,
    ) -> String {
        let mut expanding = vec![owner.full_name.clone()];
        self.render(member, slot, counters, &mut expanding)
    }

    fn template_for(&self, member: &MemberDeclaration, slot: TemplateSlot) -> &'a Template {
        match slot {
            TemplateSlot::SubProperty => &self.profile.sub_property,
            TemplateSlot::Mappings => match self.select(member) {
                Some(mapping) => {
                    tracing::trace!("{}: mapping #{} ({})", member.name, mapping.number, mapping.pattern.as_str());
                    &mapping.template
                }
                None => {
                    tracing::trace!("{}: fallback output for {}", member.name, member.ty);
                    &self.profile.fallback
                }
            },
        }
    }

    fn render(
        &self,
        member: &MemberDeclaration,
        slot: TemplateSlot,
        counters: &mut Counters,
        expanding: &mut Vec<String>,
    ) -> String {
        let template = self.template_for(member, slot);
        if template.uses_sub_properties() {
            tracing::trace!("expanding sub-properties of {}: {}", member.name, member.ty);
        }
        template.expand(member, counters, &mut |counters| {
            self.sub_properties(&member.ty, counters, expanding)
        })
    }

    /// Rendered members of the type behind `ty`, or its element type
    fn sub_properties(
        &self,
        ty: &TypeDescriptor,
        counters: &mut Counters,
        expanding: &mut Vec<String>,
    ) -> Vec<String> {
        let class = classify(ty);
        if !class.has_sub_properties() {
            return Vec::new();
        }
        let target = match class {
            TypeClass::Collection(element) => element,
            _ => ty.clone(),
        };
        if !matches!(classify(&target), TypeClass::Object) {
            return Vec::new();
        }

        let Some(class) = self.model.resolve(&target) else {
            tracing::debug!("unresolved type {}, no sub-properties", target);
            return Vec::new();
        };
        if expanding.iter().any(|name| name == &class.full_name) {
            tracing::debug!("{} is already being expanded", class.full_name);
            return Vec::new();
        }

        expanding.push(class.full_name.clone());
        let entries = full_member_list(self.model, class, self.filter)
            .into_iter()
            .map(|sub| self.render(sub, TemplateSlot::SubProperty, counters, expanding))
            .collect();
        expanding.pop();

        entries
    }
}
