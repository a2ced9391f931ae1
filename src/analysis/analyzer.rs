//! Class and property analysis entry points

use crate::analysis::filter::MemberFilter;
use crate::analysis::inheritance::full_member_list;
use crate::analysis::mapping::{MappingResolver, TemplateSlot};
use crate::analysis::template::Counters;
use crate::model::SemanticModel;
use crate::profile::CompiledProfile;
use crate::schema::{AnalyzerOutput, OutputType, NO_PROPERTIES_COMMENT};

/// Generates markup for the class or property at a cursor position
pub struct ClassAnalyzer<'p> {
    profile: &'p CompiledProfile,
    filter: MemberFilter,
}

impl<'p> ClassAnalyzer<'p> {
    pub fn new(profile: &'p CompiledProfile) -> Self {
        Self {
            profile,
            filter: MemberFilter::default(),
        }
    }

    pub fn with_filter(mut self, filter: MemberFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Markup for every eligible member of the class at `position`
    ///
    /// Returns [`AnalyzerOutput::empty`] when the position is outside every
    /// class in the primary file.
    pub fn analyze(&self, model: &SemanticModel, position: usize) -> AnalyzerOutput {
        let Some(class) = model.enclosing_class(position) else {
            tracing::debug!("no class at position {}", position);
            return AnalyzerOutput::empty();
        };

        let members = full_member_list(model, class, &self.filter);
        tracing::debug!("{}: {} eligible members", class.full_name, members.len());

        let entries: Vec<String> = if members.is_empty() {
            vec![NO_PROPERTIES_COMMENT.to_string()]
        } else {
            let resolver = MappingResolver::new(self.profile, model, &self.filter);
            let mut counters = Counters::new();
            members
                .iter()
                .map(|member| resolver.resolve_in(class, member, TemplateSlot::Mappings, &mut counters))
                .collect()
        };

        AnalyzerOutput {
            name: class.name.clone(),
            output: self.profile.grouping.wrap(&entries),
            output_type: OutputType::Class,
        }
    }

    /// Markup for the single property declared at `position`
    ///
    /// The property is rendered even if the member filter would exclude it
    /// from class output.
    pub fn analyze_property(&self, model: &SemanticModel, position: usize) -> AnalyzerOutput {
        let Some((class, member)) = model.primary().enclosing_member(position) else {
            tracing::debug!("no property at position {}", position);
            return AnalyzerOutput::empty();
        };

        let resolver = MappingResolver::new(self.profile, model, &self.filter);
        let output = resolver.resolve_in(class, member, TemplateSlot::Mappings, &mut Counters::new());

        AnalyzerOutput {
            name: member.name.clone(),
            output,
            output_type: OutputType::Property,
        }
    }
}
