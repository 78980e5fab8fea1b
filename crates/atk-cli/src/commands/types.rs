use atk_types::{TypeCategory, TypeRegistry};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TypesArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TypeRow {
    #[serde(rename = "type")]
    portable_type: String,
    category: &'static str,
    lms_type: String,
    lms_subtype: String,
    description: String,
    aliases: Vec<String>,
}

/// Handle `atk types`.
pub fn handle(args: &TypesArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = type_rows(&ctx.registry);

    if !flags.is_text() {
        return output(&rows, flags.format);
    }

    println!("📋 Available Assignment Types");
    println!("{}\n", "=".repeat(51));
    for category in TypeCategory::ALL {
        let members: Vec<&TypeRow> = rows
            .iter()
            .filter(|row| row.category == category.label())
            .collect();
        if members.is_empty() {
            continue;
        }
        println!("{category}");
        println!("{}", "-".repeat(category.label().chars().count()));
        for row in members {
            let mapping = ctx.registry.resolve(&row.portable_type)?;
            println!(
                "  {:<26} {}",
                row.portable_type,
                TypeRegistry::describe_with_target(mapping)
            );
            if args.aliases && !row.aliases.is_empty() {
                println!("  {:<26} aliases: {}", "", row.aliases.join(", "));
            }
        }
        println!();
    }
    println!("💡 Usage: atk create <type> --title <title>");
    Ok(())
}

fn type_rows(registry: &TypeRegistry) -> Vec<TypeRow> {
    registry
        .mappings()
        .filter(|mapping| !mapping.deprecated)
        .map(|mapping| TypeRow {
            portable_type: mapping.portable_type.clone(),
            category: TypeCategory::of(&mapping.portable_type).label(),
            lms_type: mapping.lms_type.clone(),
            lms_subtype: mapping.lms_subtype.clone(),
            description: mapping.description.clone(),
            aliases: registry
                .aliases_for(&mapping.portable_type)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use atk_types::TypeRegistry;

    use super::type_rows;

    #[test]
    fn every_listed_type_resolves_to_itself() {
        let registry = TypeRegistry::builtin();
        for row in type_rows(&registry) {
            let mapping = registry.resolve(&row.portable_type).expect("listed type resolves");
            assert_eq!(mapping.portable_type, row.portable_type);
            assert_eq!(mapping.lms_type, row.lms_type);
        }
    }

    #[test]
    fn aliases_point_back_to_their_row() {
        let registry = TypeRegistry::builtin();
        let rows = type_rows(&registry);
        let mcq = rows
            .iter()
            .find(|row| row.portable_type == "multiple-choice")
            .expect("multiple-choice row");

        assert!(mcq.aliases.iter().any(|a| a == "mcq"));
        assert_eq!(mcq.category, "Quiz & Assessment");
        for alias in &mcq.aliases {
            assert_eq!(
                registry.resolve(alias).expect("alias resolves").portable_type,
                "multiple-choice"
            );
        }
    }
}
