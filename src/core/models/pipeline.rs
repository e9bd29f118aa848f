//! Pipeline rule tables
//!
//! Declarative studio policy: which steps feed which, per entity kind, which
//! asset steps a shot should pull from (in preference order), and which
//! version statuses never count as deliverable.
//!
//! The tables are data so a production can override them from config
//! without touching the resolver.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::EntityKind;
use crate::core::services::rules_check::{self, RuleIssue};

/// Step name -> ordered upstream step names
pub type StepTable = BTreeMap<String, Vec<String>>;

/// Pipeline rule tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineRules {
    /// Asset steps that must be tried, in order, for a shot's linked assets
    pub shot_asset_preference: Vec<String>,

    /// Version status codes excluded from "latest version" resolution
    pub excluded_version_statuses: Vec<String>,

    /// Upstream rules for asset tasks
    pub asset: StepTable,

    /// Upstream rules for shot tasks
    pub shot: StepTable,
}

const ASSET_STEPS: &[(&str, &[&str])] = &[
    ("Art", &[]),
    ("Model", &["Art"]),
    ("Rig", &["Model"]),
    ("Surfacing", &["Model"]),
    ("Texture", &["Model"]),
    ("Character FX", &["Rig"]),
    ("LightRig", &["Surfacing"]),
    ("Render", &["LightRig"]),
    ("Delivery", &["Render"]),
];

const SHOT_STEPS: &[(&str, &[&str])] = &[
    ("Layout", &[]),
    ("Animation", &["Layout"]),
    ("Lighting", &["Animation"]),
    ("Character FX", &["Animation"]),
    ("FX", &["Animation"]),
    ("Render", &["Lighting"]),
    ("Comp", &["Render"]),
];

fn table(rows: &[(&str, &[&str])]) -> StepTable {
    rows.iter()
        .map(|(step, upstream)| {
            ((*step).to_string(), upstream.iter().map(|s| (*s).to_string()).collect())
        })
        .collect()
}

impl Default for PipelineRules {
    fn default() -> Self {
        Self {
            shot_asset_preference: vec!["Rig".to_string(), "Model".to_string()],
            excluded_version_statuses: vec!["rej".to_string(), "omt".to_string()],
            asset: table(ASSET_STEPS),
            shot: table(SHOT_STEPS),
        }
    }
}

impl PipelineRules {
    /// Rule table for an entity kind
    #[must_use]
    pub const fn table(&self, kind: EntityKind) -> &StepTable {
        match kind {
            EntityKind::Asset => &self.asset,
            EntityKind::Shot => &self.shot,
        }
    }

    /// Upstream steps of `step`; unknown steps are pipeline roots
    #[must_use]
    pub fn upstream_steps(&self, kind: EntityKind, step: &str) -> &[String] {
        self.table(kind).get(step).map(Vec::as_slice).unwrap_or_default()
    }

    /// Steps that list `step` as one of their upstream steps
    #[must_use]
    pub fn downstream_steps(&self, kind: EntityKind, step: &str) -> Vec<&str> {
        self.table(kind)
            .iter()
            .filter(|(_, upstream)| upstream.iter().any(|u| u == step))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// All steps declared for an entity kind, in name order
    pub fn steps(&self, kind: EntityKind) -> impl Iterator<Item = &str> {
        self.table(kind).keys().map(String::as_str)
    }

    /// The step a shot prefers from its linked assets
    #[must_use]
    pub fn preferred_asset_step(&self) -> Option<&str> {
        self.shot_asset_preference.first().map(String::as_str)
    }

    /// Check the tables for cycles and other problems
    #[must_use]
    pub fn validate(&self) -> Vec<RuleIssue> {
        rules_check::check_rules(self)
    }
}
