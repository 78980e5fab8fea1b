use std::path::{Path, PathBuf};

use anyhow::Context;
use atk_config::{AssignmentDefaults, AtkConfig};
use atk_core::entities::{
    Assignment, AssignmentPackage, CodeSubmissionConfig, MatchingQuestion, MultipleChoiceQuestion,
    PackageMetadata, QuestionPayload, Template,
};
use atk_core::enums::Difficulty;
use atk_package::store::{package_file_name, save_package};
use atk_package::stamp_hash;
use atk_types::TypeRegistry;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CreateArgs;
use crate::commands::shared::{parse_pair, unknown_type_error};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CreateResponse {
    file: PathBuf,
    id: String,
    assignment_type: String,
    lms_type: String,
    lms_subtype: String,
    source_hash: String,
}

/// Handle `atk create`.
pub fn handle(args: &CreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mapping = ctx
        .registry
        .resolve(&args.assignment_type)
        .map_err(|error| unknown_type_error(&error, &ctx.registry))?;

    let file = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(package_file_name(&args.title)));
    if file.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            file.display()
        );
    }

    let base = match &args.template {
        Some(path) => load_template(path)?.instantiate(),
        None => fresh_assignment(&mapping.portable_type, &ctx.config.defaults),
    };

    let now = Utc::now();
    let package = build_package(args, base, &ctx.registry, &ctx.config, now)?;
    save_package(&package, &file)?;
    tracing::info!(file = %file.display(), id = %package.metadata.id, "package created");

    if flags.is_text() {
        if !flags.quiet {
            println!("Creating new {} assignment...", mapping.portable_type);
            if mapping.lms_type != mapping.portable_type {
                println!("📋 Will be imported to LMS as: {}", mapping.lms_label());
            }
        }
        println!("✅ Assignment created successfully: {}", file.display());
        return Ok(());
    }

    output(
        &CreateResponse {
            file,
            id: package.metadata.id.clone(),
            assignment_type: package.assignment.assignment_type.clone(),
            lms_type: mapping.lms_type.clone(),
            lms_subtype: mapping.lms_subtype.clone(),
            source_hash: package.metadata.source_hash,
        },
        flags.format,
    )
}

fn load_template(path: &Path) -> anyhow::Result<Template> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read template {}", path.display()))?;
    serde_yaml::from_str(&text).with_context(|| format!("malformed template {}", path.display()))
}

/// Body for a package created without a template, seeded from the config
/// defaults.
fn fresh_assignment(portable_type: &str, defaults: &AssignmentDefaults) -> Assignment {
    Assignment {
        points: defaults.points,
        auto_grade: defaults.auto_grade,
        published: defaults.published,
        quarter: defaults.quarter.clone(),
        ..Assignment::with_defaults(portable_type)
    }
}

/// Assemble a new package from the command line on top of `base`.
///
/// `base` already carries either the template's values or the config
/// defaults; only flags given on the command line override it. The stored
/// type is the canonical portable key, so aliases typed on the command line
/// never reach the file.
fn build_package(
    args: &CreateArgs,
    base: Assignment,
    registry: &TypeRegistry,
    config: &AtkConfig,
    now: DateTime<Utc>,
) -> anyhow::Result<AssignmentPackage> {
    let mapping = registry
        .resolve(&args.assignment_type)
        .map_err(|error| unknown_type_error(&error, registry))?;

    let mut assignment = Assignment {
        title: args.title.trim().to_string(),
        assignment_type: mapping.portable_type.clone(),
        ..base
    };
    if let Some(points) = args.points {
        assignment.points = points;
    }
    if let Some(description) = &args.description {
        assignment.description.clone_from(description);
    }
    if let Some(category) = &args.category {
        assignment.category.clone_from(category);
    }
    if let Some(raw) = &args.difficulty {
        assignment.difficulty = Some(raw.parse::<Difficulty>()?);
    }
    assignment.tags.extend(args.tag.iter().cloned());

    apply_payload(&mut assignment, args)?;

    let author = &config.author;
    let mut metadata = PackageMetadata::new(uuid::Uuid::new_v4().to_string(), &author.name, now);
    metadata.email = author.email();
    metadata.license = Some(author.license.clone()).filter(|l| !l.is_empty());
    metadata.language = Some(author.language.clone()).filter(|l| !l.is_empty());
    metadata.tags.clone_from(&assignment.tags);

    let mut package = AssignmentPackage::new(metadata, assignment);
    stamp_hash(&mut package, now)?;
    Ok(package)
}

fn apply_payload(assignment: &mut Assignment, args: &CreateArgs) -> anyhow::Result<()> {
    match assignment.assignment_type.as_str() {
        "multiple-choice" if args.question.is_some() || !args.options.is_empty() => {
            let correct_answer = match &args.correct {
                Some(correct) if !args.options.contains(correct) => {
                    anyhow::bail!("--correct '{correct}' is not one of the given options");
                }
                Some(correct) => correct.clone(),
                None => args.options.first().cloned().unwrap_or_default(),
            };
            assignment.questions = Some(QuestionPayload::MultipleChoice(MultipleChoiceQuestion {
                question: args.question.clone().unwrap_or_default(),
                options: args.options.clone(),
                correct_answer,
                explanation: args.explanation.clone().unwrap_or_default(),
            }));
        }
        "matching" if !args.pairs.is_empty() => {
            let (left_items, right_items) = args
                .pairs
                .iter()
                .map(String::as_str)
                .map(parse_pair)
                .collect::<anyhow::Result<Vec<_>>>()?
                .into_iter()
                .unzip();
            assignment.questions = Some(QuestionPayload::Matching(MatchingQuestion {
                left_items,
                right_items,
            }));
        }
        "writing-short" | "writing-long" | "essay" => {
            if let Some(instructions) = &args.instructions {
                assignment.instructions.clone_from(instructions);
            }
            if let Some(criteria) = &args.criteria {
                assignment.criteria.clone_from(criteria);
            }
            assignment.auto_grade = false;
        }
        "code-submission" => {
            let mut config = CodeSubmissionConfig::new(args.language.trim());
            if let Some(expected) = &args.expected_output {
                config.expected_output.clone_from(expected);
            }
            assignment.questions = Some(QuestionPayload::CodeSubmission(config));
            assignment.auto_grade = false;
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use atk_config::AtkConfig;
    use atk_core::entities::{Assignment, QuestionPayload, Template};
    use atk_package::{content_hash, validate};
    use atk_types::TypeRegistry;
    use chrono::{TimeZone, Utc};
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::{build_package, fresh_assignment};
    use crate::cli::root_commands::CreateArgs;
    use crate::cli::{Cli, Commands};

    fn create_args(argv: &[&str]) -> CreateArgs {
        let cli = Cli::try_parse_from(["atk", "create"].into_iter().chain(argv.iter().copied()))
            .expect("cli should parse");
        match cli.command {
            Commands::Create(args) => args,
            other => panic!("expected create, got {other:?}"),
        }
    }

    fn build_on(
        argv: &[&str],
        base: Assignment,
        config: &AtkConfig,
    ) -> anyhow::Result<atk_core::entities::AssignmentPackage> {
        let args = create_args(argv);
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 8, 0, 0).unwrap();
        build_package(&args, base, &TypeRegistry::builtin(), config, now)
    }

    fn build(argv: &[&str]) -> anyhow::Result<atk_core::entities::AssignmentPackage> {
        let config = AtkConfig::default();
        let base = fresh_assignment("placeholder", &config.defaults);
        build_on(argv, base, &config)
    }

    fn quiz_template() -> Template {
        Template {
            template: Assignment {
                points: 25,
                auto_grade: false,
                published: false,
                quarter: "Q3".into(),
                ..Assignment::with_defaults("multiple-choice")
            },
            ..Template::multiple_choice_starter()
        }
    }

    #[test]
    fn template_values_survive_config_defaults() {
        let mut config = AtkConfig::default();
        config.defaults.points = 7;
        config.defaults.quarter = "Q2".into();

        let pkg = build_on(
            &["mcq", "--title", "Colors", "--template", "quiz.yaml"],
            quiz_template().instantiate(),
            &config,
        )
        .expect("package should build");

        assert_eq!(pkg.assignment.points, 25);
        assert!(!pkg.assignment.auto_grade);
        assert!(!pkg.assignment.published);
        assert_eq!(pkg.assignment.quarter, "Q3");
        assert_eq!(pkg.assignment.title, "Colors");
    }

    #[test]
    fn points_flag_overrides_template() {
        let pkg = build_on(
            &["mcq", "--title", "Colors", "--points", "40"],
            quiz_template().instantiate(),
            &AtkConfig::default(),
        )
        .expect("package should build");

        assert_eq!(pkg.assignment.points, 40);
        assert_eq!(pkg.assignment.quarter, "Q3");
    }

    #[test]
    fn config_defaults_seed_untemplated_packages() {
        let mut config = AtkConfig::default();
        config.defaults.points = 7;
        config.defaults.published = false;
        config.defaults.quarter = "Q2".into();

        let base = fresh_assignment("multiple-choice", &config.defaults);
        let pkg = build_on(&["mcq", "--title", "Colors"], base, &config)
            .expect("package should build");

        assert_eq!(pkg.assignment.points, 7);
        assert!(!pkg.assignment.published);
        assert_eq!(pkg.assignment.quarter, "Q2");
    }

    #[test]
    fn alias_is_stored_as_portable_type() {
        let pkg = build(&[
            "mcq",
            "--title",
            "Colors",
            "--question",
            "Which is red?",
            "--option",
            "rojo",
            "--option",
            "azul",
            "--correct",
            "rojo",
        ])
        .expect("package should build");

        assert_eq!(pkg.assignment.assignment_type, "multiple-choice");
        let Some(QuestionPayload::MultipleChoice(q)) = &pkg.assignment.questions else {
            panic!("expected a multiple choice payload");
        };
        assert_eq!(q.correct_answer, "rojo");
        assert_eq!(q.options, ["rojo", "azul"]);
        assert!(validate(&pkg).is_valid);
    }

    #[test]
    fn metadata_comes_from_config_author() {
        let pkg = build(&["essay", "--title", "Reflection"]).expect("package should build");

        assert_eq!(pkg.metadata.author, "Unknown Author");
        assert_eq!(pkg.metadata.license.as_deref(), Some("CC-BY-SA-4.0"));
        assert_eq!(pkg.metadata.language.as_deref(), Some("en"));
        assert_eq!(pkg.metadata.email, None);
        assert!(uuid::Uuid::parse_str(&pkg.metadata.id).is_ok());
        assert_eq!(
            pkg.metadata.source_hash,
            content_hash(&pkg.assignment).expect("hash")
        );
    }

    #[test]
    fn writing_types_are_not_auto_graded() {
        let pkg = build(&[
            "essay",
            "--title",
            "Reflection",
            "--instructions",
            "Write 300 words",
            "--criteria",
            "Clarity",
        ])
        .expect("package should build");

        assert!(!pkg.assignment.auto_grade);
        assert_eq!(pkg.assignment.instructions, "Write 300 words");
        assert_eq!(pkg.assignment.criteria, "Clarity");
    }

    #[test]
    fn matching_pairs_become_parallel_lists() {
        let pkg = build(&[
            "match",
            "--title",
            "Capitals",
            "--pair",
            "France=Paris",
            "--pair",
            "Peru=Lima",
        ])
        .expect("package should build");

        let Some(QuestionPayload::Matching(m)) = &pkg.assignment.questions else {
            panic!("expected a matching payload");
        };
        assert_eq!(m.left_items, ["France", "Peru"]);
        assert_eq!(m.right_items, ["Paris", "Lima"]);
    }

    #[test]
    fn code_submission_uses_language_flag() {
        let pkg = build(&["code", "--title", "FizzBuzz", "--language", "rust"])
            .expect("package should build");

        let Some(QuestionPayload::CodeSubmission(c)) = &pkg.assignment.questions else {
            panic!("expected a code submission payload");
        };
        assert_eq!(c.language, "rust");
        assert!(!pkg.assignment.auto_grade);
    }

    #[test]
    fn correct_answer_must_be_an_option() {
        let err = build(&[
            "mcq",
            "--title",
            "Colors",
            "--question",
            "Which is red?",
            "--option",
            "rojo",
            "--correct",
            "verde",
        ])
        .expect_err("should fail");
        assert!(err.to_string().contains("--correct 'verde'"));
    }

    #[test]
    fn unknown_type_is_rejected_with_suggestions() {
        let err = build(&["drag", "--title", "Sort"]).expect_err("should fail");
        assert!(err.to_string().contains("Did you mean one of these?"));
    }

    #[test]
    fn bad_difficulty_is_rejected() {
        let err = build(&["essay", "--title", "X", "--difficulty", "expert"]).expect_err("should fail");
        assert!(err.to_string().contains("Invalid difficulty 'expert'"));
    }
}
