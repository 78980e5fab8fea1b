use anyhow::Context;
use atk_lms::{LmsApi, LmsClient};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct AuthStatusResponse {
    endpoint: String,
    authenticated: bool,
    note: Option<String>,
}

/// Handle `atk auth`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lms = ctx.config.require_lms()?;
    let client = LmsClient::new(&lms.endpoint, &lms.api_key, lms.timeout())
        .context("failed to build LMS client")?;

    let spinner = Progress::spinner(&format!("Checking credentials with {}...", client.base_url()));
    let outcome = client.test_auth().await;
    spinner.finish_clear();

    let status = AuthStatusResponse {
        endpoint: client.base_url().to_string(),
        authenticated: outcome.is_ok(),
        note: outcome.as_ref().err().map(ToString::to_string),
    };

    if flags.is_text() {
        match &status.note {
            None => println!("✅ Authenticated with {}", status.endpoint),
            Some(note) => println!("❌ {note}"),
        }
    } else {
        output(&status, flags.format)?;
    }

    outcome.with_context(|| format!("authentication with {} failed", status.endpoint))
}
