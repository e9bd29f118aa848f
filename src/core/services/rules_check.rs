//! Pipeline rule validation
//!
//! Rule tables come from config and are edited by hand per production.
//! This service finds the mistakes that would make the resolver return
//! surprising answers: cycles, self-references, undeclared steps.

use std::collections::HashMap;

use serde::Serialize;

use crate::core::models::{EntityKind, PipelineRules, Severity, StepTable};

/// A problem found in the rule tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleIssue {
    /// How serious the issue is
    pub severity: Severity,
    /// Table the issue was found in, if it is table-specific
    pub kind: Option<EntityKind>,
    /// Human-readable description
    pub message: String,
}

impl RuleIssue {
    const fn new(severity: Severity, kind: Option<EntityKind>, message: String) -> Self {
        Self {
            severity,
            kind,
            message,
        }
    }

    /// Whether this issue makes the rules unusable
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for RuleIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            Some(kind) => write!(f, "[{}] {kind}: {}", self.severity, self.message),
            None => write!(f, "[{}] {}", self.severity, self.message),
        }
    }
}

/// Whether any issue is an error
#[must_use]
pub fn has_errors(issues: &[RuleIssue]) -> bool {
    issues.iter().any(RuleIssue::is_error)
}

/// Validate all rule tables
///
/// Issues are ordered: asset table, shot table, then preference list.
#[must_use]
pub fn check_rules(rules: &PipelineRules) -> Vec<RuleIssue> {
    let mut issues = Vec::new();

    for kind in [EntityKind::Asset, EntityKind::Shot] {
        check_table(kind, rules.table(kind), &mut issues);
    }

    if rules.shot_asset_preference.is_empty() {
        issues.push(RuleIssue::new(
            Severity::Warn,
            None,
            "shot_asset_preference is empty; shot tasks will never resolve asset dependencies"
                .to_string(),
        ));
    }

    for step in &rules.shot_asset_preference {
        if !rules.asset.contains_key(step) {
            issues.push(RuleIssue::new(
                Severity::Info,
                Some(EntityKind::Asset),
                format!("preferred asset step '{step}' is not declared in the asset table"),
            ));
        }
    }

    issues
}

fn check_table(kind: EntityKind, table: &StepTable, issues: &mut Vec<RuleIssue>) {
    for (step, upstream) in table {
        for up in upstream {
            if up == step {
                issues.push(RuleIssue::new(
                    Severity::Error,
                    Some(kind),
                    format!("step '{step}' lists itself as upstream"),
                ));
            } else if !table.contains_key(up) {
                issues.push(RuleIssue::new(
                    Severity::Warn,
                    Some(kind),
                    format!("step '{step}' depends on undeclared step '{up}'"),
                ));
            }
        }
    }

    for cycle in find_cycles(table) {
        issues.push(RuleIssue::new(
            Severity::Error,
            Some(kind),
            format!("dependency cycle: {}", cycle.join(" -> ")),
        ));
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

/// Find cycles among distinct steps (self-references are reported separately)
///
/// Each returned path starts and ends on the same step.
fn find_cycles(table: &StepTable) -> Vec<Vec<String>> {
    let mut marks: HashMap<&str, Mark> = HashMap::new();
    let mut path: Vec<&str> = Vec::new();
    let mut cycles = Vec::new();

    for step in table.keys() {
        if !marks.contains_key(step.as_str()) {
            visit(step, table, &mut marks, &mut path, &mut cycles);
        }
    }

    cycles
}

fn visit<'a>(
    step: &'a str,
    table: &'a StepTable,
    marks: &mut HashMap<&'a str, Mark>,
    path: &mut Vec<&'a str>,
    cycles: &mut Vec<Vec<String>>,
) {
    marks.insert(step, Mark::Visiting);
    path.push(step);

    for up in table.get(step).into_iter().flatten() {
        let up = up.as_str();
        if up == step {
            continue;
        }
        match marks.get(up).copied() {
            Some(Mark::Visiting) => {
                if let Some(start) = path.iter().position(|s| *s == up) {
                    let mut cycle: Vec<String> =
                        path[start..].iter().map(|s| (*s).to_string()).collect();
                    cycle.push(up.to_string());
                    cycles.push(cycle);
                }
            },
            Some(Mark::Done) => {},
            None => visit(up, table, marks, path, cycles),
        }
    }

    path.pop();
    marks.insert(step, Mark::Done);
}
