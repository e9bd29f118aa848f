//! Show and validate pipeline rules

use anyhow::bail;

use crate::cli::session::Session;
use pipetrack::core::services::has_errors;
use pipetrack::output::{OutputMode, RulesReport};

/// Print the active rule tables, optionally with validation issues
pub fn rules(session: &Session, check: bool, mode: OutputMode) -> anyhow::Result<()> {
    if !check {
        let config = session.config()?;
        RulesReport {
            rules: config.pipeline,
            issues: None,
        }
        .render(mode);
        return Ok(());
    }

    let config = session.raw_config()?;
    let issues = config.pipeline.validate();
    let failed = has_errors(&issues);
    RulesReport {
        rules: config.pipeline,
        issues: Some(issues),
    }
    .render(mode);

    if failed {
        bail!("pipeline rules have errors");
    }
    Ok(())
}
