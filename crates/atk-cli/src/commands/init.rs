use std::path::{Path, PathBuf};

use anyhow::Context;
use atk_config::{AtkConfig, LOCAL_CONFIG_FILE};
use atk_core::entities::Template;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::output::output;

const WORKSPACE_DIRS: [&str; 3] = ["templates", "resources", "packages"];
const STARTER_TEMPLATE: &str = "templates/multiple-choice.yaml";

#[derive(Debug, Serialize)]
struct InitResponse {
    root: PathBuf,
    config: PathBuf,
    directories: Vec<PathBuf>,
    template: PathBuf,
}

/// Handle `atk init`.
pub fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = std::env::current_dir().context("failed to read current directory")?;
    let response = init_workspace(&root, args)?;

    if !flags.is_text() {
        return output(&response, flags.format);
    }

    println!("✅ Workspace initialized!");
    println!("   📁 Created directories: templates/, resources/, packages/");
    println!("   ⚙️  Created config: {LOCAL_CONFIG_FILE}");
    println!("   📝 Created sample template: {STARTER_TEMPLATE}");
    Ok(())
}

/// Lay out an assignment workspace under `root`.
///
/// The written config holds defaults plus the author given on the command
/// line; nothing from the environment is persisted.
fn init_workspace(root: &Path, args: &InitArgs) -> anyhow::Result<InitResponse> {
    let config_path = root.join(LOCAL_CONFIG_FILE);
    if config_path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    let mut directories = Vec::with_capacity(WORKSPACE_DIRS.len());
    for name in WORKSPACE_DIRS {
        let dir = root.join(name);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        directories.push(dir);
    }

    let mut config = AtkConfig::default();
    if let Some(author) = &args.author {
        config.author.name.clone_from(author);
    }
    if let Some(email) = &args.email {
        config.author.email.clone_from(email);
    }
    config.write_to(&config_path)?;

    let template_path = root.join(STARTER_TEMPLATE);
    if !template_path.exists() || args.force {
        let yaml = serde_yaml::to_string(&Template::multiple_choice_starter())
            .context("failed to encode starter template")?;
        std::fs::write(&template_path, yaml)
            .with_context(|| format!("failed to write {}", template_path.display()))?;
    }

    tracing::info!(root = %root.display(), "workspace initialized");
    Ok(InitResponse {
        root: root.to_path_buf(),
        config: config_path,
        directories,
        template: template_path,
    })
}
