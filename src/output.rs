//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{
    DependencyRecord, DependencySource, EntityKind, PipelineRules, Severity, Task, Version,
};
use crate::core::services::RuleIssue;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Counts over a resolved dependency list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DependencySummary {
    /// All records
    pub total: usize,
    /// Records from upstream steps on the same entity
    pub upstream: usize,
    /// Records from a shot's linked assets
    pub asset: usize,
    /// Records with no usable version
    pub without_version: usize,
    /// Asset records resolved through a less-preferred step
    pub fallbacks: usize,
}

impl DependencySummary {
    /// Summarize a dependency list
    #[must_use]
    pub fn from_records(records: &[DependencyRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            match record.source {
                DependencySource::UpstreamTask => summary.upstream += 1,
                DependencySource::AssetDependency => summary.asset += 1,
            }
            if !record.has_version() {
                summary.without_version += 1;
            }
            if record.is_fallback() {
                summary.fallbacks += 1;
            }
        }
        summary
    }

    /// Whether every dependency has a usable version from its preferred step
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.without_version == 0 && self.fallbacks == 0
    }
}

/// Result of resolving a task's dependencies
#[derive(Debug, Serialize)]
pub struct DependencyReport {
    /// The task that was resolved
    pub task_id: i64,
    /// Counts over `dependencies`
    pub summary: DependencySummary,
    /// Resolved dependencies, upstream first
    pub dependencies: Vec<DependencyRecord>,
}

impl DependencyReport {
    /// Build a report with its summary
    #[must_use]
    pub fn new(task_id: i64, dependencies: Vec<DependencyRecord>) -> Self {
        Self {
            task_id,
            summary: DependencySummary::from_records(&dependencies),
            dependencies,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.dependencies.is_empty() {
            println!("Task {} has no dependencies.", self.task_id);
            return;
        }

        println!("Dependencies of task {}:\n", self.task_id);
        for dep in &self.dependencies {
            let step = dep.step.as_ref().and_then(|s| s.name.as_deref()).unwrap_or("?");
            let entity = dep.entity.as_ref().map_or_else(|| "?".to_string(), |e| e.label());
            let tag = match dep.source {
                DependencySource::UpstreamTask => "upstream",
                DependencySource::AssetDependency => "asset",
            };
            println!("  [{tag}] {} / {} (task {})", entity.bold(), step, dep.task.id);

            match &dep.version {
                Some(v) => {
                    let code = v.code.as_deref().unwrap_or("-");
                    let status = v.status.as_deref().unwrap_or("-");
                    println!("          version {} {code} [{status}]", v.id);
                    for file in &dep.published_files {
                        println!("            {}", file.label().dimmed());
                    }
                },
                None => println!("          {}", "no version".dimmed()),
            }
            if let Some(warning) = &dep.version_warning {
                println!("          {}", warning.yellow());
            }
            println!();
        }

        let s = &self.summary;
        let line = format!(
            "{} dependencies ({} upstream, {} asset), {} without version, {} fallback(s)",
            s.total, s.upstream, s.asset, s.without_version, s.fallbacks
        );
        if s.is_clean() {
            println!("{}", line.green());
        } else {
            println!("{}", line.yellow());
        }
    }
}

/// Valid versions of one task
#[derive(Debug, Serialize)]
pub struct VersionsReport {
    /// The task
    pub task_id: i64,
    /// Versions, newest first
    pub versions: Vec<Version>,
}

impl VersionsReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.versions.is_empty() {
            println!("No valid versions for task {}.", self.task_id);
            return;
        }

        println!("Versions of task {} (newest first):\n", self.task_id);
        for v in &self.versions {
            let created = v.created_at.map_or_else(|| "-".to_string(), |t| t.to_rfc3339());
            println!(
                "  {} {} [{}] {created}",
                v.id,
                v.code.as_deref().unwrap_or("-"),
                v.status.as_deref().unwrap_or("-")
            );
        }
    }
}

/// Tasks assigned to a user
#[derive(Debug, Serialize)]
pub struct TasksReport {
    /// The assignee
    pub user_id: i64,
    /// Assigned tasks in store order
    pub tasks: Vec<Task>,
}

impl TasksReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.tasks.is_empty() {
            println!("No tasks assigned to user {}.", self.user_id);
            return;
        }

        println!("Tasks assigned to user {}:\n", self.user_id);
        for t in &self.tasks {
            println!(
                "  {} {} ({} on {}) [{}]",
                t.id,
                t.content.as_deref().unwrap_or("-"),
                t.step_name().unwrap_or("-"),
                t.entity_name().unwrap_or("-"),
                t.status.as_deref().unwrap_or("-")
            );
        }
    }
}

/// Work-area path of a task
#[derive(Debug, Serialize)]
pub struct PathReport {
    /// The task
    pub task_id: i64,
    /// Work path, if every component is known
    pub path: Option<PathBuf>,
}

impl PathReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.path {
                Some(p) => println!("{}", p.display()),
                None => println!("No work path can be built for task {}.", self.task_id),
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Active rule tables and their validation issues
#[derive(Debug, Serialize)]
pub struct RulesReport {
    /// The rules
    pub rules: PipelineRules,
    /// Issues found, if validation ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<RuleIssue>>,
}

impl RulesReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        for kind in [EntityKind::Asset, EntityKind::Shot] {
            println!("{kind} steps:");
            for step in self.rules.steps(kind) {
                let upstream = self.rules.upstream_steps(kind, step);
                if upstream.is_empty() {
                    println!("  {step}");
                } else {
                    println!("  {step} <- {}", upstream.join(", "));
                }
            }
            println!();
        }
        println!("Shot asset preference: {}", self.rules.shot_asset_preference.join(" > "));
        println!(
            "Excluded version statuses: {}",
            self.rules.excluded_version_statuses.join(", ")
        );

        let Some(issues) = &self.issues else {
            return;
        };
        println!();
        if issues.is_empty() {
            println!("{}", "No issues found.".green());
            return;
        }
        for issue in issues {
            let line = issue.to_string();
            match issue.severity {
                Severity::Error => println!("{}", line.red()),
                Severity::Warn => println!("{}", line.yellow()),
                Severity::Info => println!("{line}"),
            }
        }
    }
}
