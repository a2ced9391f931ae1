//! Class and property command implementation
//!
//! Loads the primary file, the additional files and libraries from the
//! command line and the configuration, then runs the analyzer.

use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::ClassAnalyzer;
use crate::cli::{AnalyzeArgs, OutputFormat};
use crate::error::{Result, XamlGenError};
use crate::model::{FileIndex, LibraryIndex, SemanticModel, WorkspaceIndex};
use crate::parsing::parse_and_extract_with_options;
use crate::profile::{CompiledProfile, Profile};
use crate::schema::{AnalyzerOutput, SymbolOrigin};
use crate::Lang;

use super::CommandContext;

/// Run the class command
pub fn run_class(ctx: &CommandContext, args: &AnalyzeArgs) -> Result<String> {
    run_analysis(ctx, args, |analyzer, model, position| {
        analyzer.analyze(model, position)
    })
}

/// Run the property command
pub fn run_property(ctx: &CommandContext, args: &AnalyzeArgs) -> Result<String> {
    run_analysis(ctx, args, |analyzer, model, position| {
        analyzer.analyze_property(model, position)
    })
}

fn run_analysis<F>(ctx: &CommandContext, args: &AnalyzeArgs, analyze: F) -> Result<String>
where
    F: Fn(&ClassAnalyzer<'_>, &SemanticModel, usize) -> AnalyzerOutput,
{
    let profile = load_profile(ctx, args)?;
    let (model, position) = build_model(ctx, args)?;

    let analyzer = ClassAnalyzer::new(&profile).with_filter(ctx.config.analysis.member_filter());
    let output = analyze(&analyzer, &model, position);

    if output.is_empty() {
        tracing::info!("Nothing to generate at {} in {}", args.at, args.file.display());
    } else {
        tracing::info!("Generated markup for {}", output.name);
    }

    format_output(ctx, &output)
}

/// The profile named on the command line, in the config, or the default
fn load_profile(ctx: &CommandContext, args: &AnalyzeArgs) -> Result<CompiledProfile> {
    let path = args.profile.as_ref().or(ctx.config.profile.path.as_ref());
    let profile = match path {
        Some(path) => {
            tracing::info!("Using profile {}", path.display());
            Profile::load(path)?
        }
        None => Profile::default(),
    };
    profile.compile()
}

fn build_model(ctx: &CommandContext, args: &AnalyzeArgs) -> Result<(SemanticModel, usize)> {
    let path = &args.file;
    if !path.exists() {
        return Err(XamlGenError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let lang = Lang::from_path(path)?;
    tracing::debug!("Analyzing {} as {}", path.display(), lang.name());
    let source = fs::read_to_string(path)?;
    let position = args.at.to_offset(&source)?;

    let types = parse_and_extract_with_options(
        path,
        &source,
        lang,
        SymbolOrigin::PrimaryFile,
        args.print_ast,
    )?;
    let primary = FileIndex::from_declarations(path, types);

    let source_files = merged_paths(&args.with_files, &ctx.config.references.source_files, path);
    let workspace = WorkspaceIndex::load(source_files);
    tracing::debug!("{} additional source files loaded", workspace.len());

    let mut builder = SemanticModel::builder(primary).with_workspace(workspace);
    for library in merged_paths(&args.libraries, &ctx.config.references.libraries, path) {
        builder = builder.with_library(LibraryIndex::load(&library)?);
    }

    let model = builder.build();
    tracing::debug!(
        "Model over {} built with {} additional sources",
        model.primary().path().display(),
        model.additional_sources()
    );
    Ok((model, position))
}

/// Command-line paths followed by configured paths, without duplicates or
/// the primary file
fn merged_paths(explicit: &[PathBuf], configured: &[PathBuf], primary: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = Vec::with_capacity(explicit.len() + configured.len());
    for path in explicit.iter().chain(configured) {
        if path != primary && !paths.contains(path) {
            paths.push(path.clone());
        }
    }
    paths
}

fn format_output(ctx: &CommandContext, output: &AnalyzerOutput) -> Result<String> {
    match ctx.format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(output)?)),
        OutputFormat::Text if output.is_empty() => Ok(String::new()),
        OutputFormat::Text => Ok(format!("{}\n", output.output)),
    }
}
