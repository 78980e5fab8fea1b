use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SuggestArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct Suggestion {
    #[serde(rename = "type")]
    portable_type: String,
    description: String,
}

#[derive(Debug, Serialize)]
struct SuggestResponse {
    input: String,
    /// Canonical type when the input resolves exactly.
    resolved: Option<String>,
    suggestions: Vec<Suggestion>,
}

/// Handle `atk suggest`.
pub fn handle(args: &SuggestArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = &ctx.registry;
    let response = SuggestResponse {
        input: args.input.clone(),
        resolved: registry
            .resolve(&args.input)
            .ok()
            .map(|m| m.portable_type.clone()),
        suggestions: registry
            .suggest(&args.input)
            .into_iter()
            .map(|name| Suggestion {
                description: registry.describe(&name).to_string(),
                portable_type: name,
            })
            .collect(),
    };

    if !flags.is_text() {
        return output(&response, flags.format);
    }

    if let Some(resolved) = &response.resolved {
        println!("✅ '{}' resolves to {resolved}", response.input);
    }
    if response.suggestions.is_empty() {
        println!("No assignment types match '{}'", response.input);
        println!("💡 Use 'atk types' to see all available types");
        return Ok(());
    }
    println!("📝 Did you mean one of these?");
    for suggestion in &response.suggestions {
        println!("  • {} - {}", suggestion.portable_type, suggestion.description);
    }
    Ok(())
}
