//! Profile command implementation

use crate::cli::{OutputFormat, ProfileArgs, ProfileOperation};
use crate::error::Result;
use crate::profile::Profile;

use super::CommandContext;

/// Run the profile command
pub fn run_profile(ctx: &CommandContext, args: &ProfileArgs) -> Result<String> {
    match &args.operation {
        ProfileOperation::ShowDefault => {
            let json = serde_json::to_string_pretty(&Profile::default())?;
            Ok(format!("{}\n", json))
        }
        ProfileOperation::Validate { path } => {
            let profile = Profile::load(path)?;
            let compiled = profile.compile()?;
            tracing::info!("{} is valid", path.display());

            match ctx.format {
                OutputFormat::Json => {
                    let summary = serde_json::json!({
                        "path": path.display().to_string(),
                        "name": compiled.name,
                        "grouping": compiled.grouping.to_string(),
                        "mappings": compiled.mappings.len(),
                        "valid": true,
                    });
                    Ok(format!("{}\n", serde_json::to_string_pretty(&summary)?))
                }
                OutputFormat::Text => Ok(format!(
                    "profile '{}' is valid ({} mappings)\n",
                    compiled.name,
                    compiled.mappings.len()
                )),
            }
        }
    }
}
