//! Shot and asset models

use serde::{Deserialize, Serialize};

use super::EntityRef;

/// A shot record
///
/// Shots are the only entities that link to other entities as
/// dependencies: their `assets` list names the assets appearing in them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shot {
    /// Unique identifier
    pub id: i64,

    /// Shot code (e.g. "sq010_050")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Assets linked to this shot, in stored order
    #[serde(default)]
    pub assets: Vec<EntityRef>,
}

/// An asset record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique identifier
    pub id: i64,

    /// Asset code (e.g. "generic_prop_1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Asset type (Character, Environment, Prop, ...)
    #[serde(default, rename = "sg_asset_type", skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
}
