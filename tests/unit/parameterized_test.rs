//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use std::path::{Path, PathBuf};

use pipetrack::core::models::{EntityKind, EntityRef, EntityType, PipelineRules, Severity, Task};
use pipetrack::core::services::task_work_path;
use pipetrack::core::services::work_path::asset_type_folder;
use test_case::test_case;

// =============================================================================
// Default Rule Tables
// =============================================================================

#[test_case(EntityKind::Asset, "Art", &[] ; "art is an asset root")]
#[test_case(EntityKind::Asset, "Model", &["Art"] ; "model after art")]
#[test_case(EntityKind::Asset, "Rig", &["Model"] ; "rig after model")]
#[test_case(EntityKind::Asset, "Surfacing", &["Model"] ; "surfacing after model")]
#[test_case(EntityKind::Asset, "Texture", &["Model"] ; "texture after model")]
#[test_case(EntityKind::Asset, "Character FX", &["Rig"] ; "asset cfx after rig")]
#[test_case(EntityKind::Asset, "LightRig", &["Surfacing"] ; "lightrig after surfacing")]
#[test_case(EntityKind::Asset, "Render", &["LightRig"] ; "asset render after lightrig")]
#[test_case(EntityKind::Asset, "Delivery", &["Render"] ; "delivery after render")]
#[test_case(EntityKind::Shot, "Layout", &[] ; "layout is a shot root")]
#[test_case(EntityKind::Shot, "Animation", &["Layout"] ; "animation after layout")]
#[test_case(EntityKind::Shot, "Lighting", &["Animation"] ; "lighting after animation")]
#[test_case(EntityKind::Shot, "Character FX", &["Animation"] ; "shot cfx after animation")]
#[test_case(EntityKind::Shot, "FX", &["Animation"] ; "fx after animation")]
#[test_case(EntityKind::Shot, "Render", &["Lighting"] ; "shot render after lighting")]
#[test_case(EntityKind::Shot, "Comp", &["Render"] ; "comp after render")]
#[test_case(EntityKind::Shot, "Editorial", &[] ; "unknown step is a root")]
fn test_default_upstream(kind: EntityKind, step: &str, expected: &[&str]) {
    let rules = PipelineRules::default();
    assert_eq!(rules.upstream_steps(kind, step), expected);
}

#[test_case(EntityKind::Asset, "Model", &["Rig", "Surfacing", "Texture"] ; "model feeds three")]
#[test_case(EntityKind::Shot, "Animation", &["Character FX", "FX", "Lighting"] ; "animation feeds three")]
#[test_case(EntityKind::Shot, "Comp", &[] ; "comp is a leaf")]
fn test_default_downstream(kind: EntityKind, step: &str, expected: &[&str]) {
    let rules = PipelineRules::default();
    assert_eq!(rules.downstream_steps(kind, step), expected);
}

// =============================================================================
// Severity Parsing
// =============================================================================

#[test_case("info", Severity::Info ; "info")]
#[test_case("WARN", Severity::Warn ; "uppercase warn")]
#[test_case("Error", Severity::Error ; "mixed case error")]
fn test_severity_parse(input: &str, expected: Severity) {
    assert_eq!(input.parse::<Severity>().unwrap(), expected);
}

#[test_case("asset", EntityKind::Asset ; "asset")]
#[test_case("Shots", EntityKind::Shot ; "plural shots")]
fn test_entity_kind_parse(input: &str, expected: EntityKind) {
    assert_eq!(input.parse::<EntityKind>().unwrap(), expected);
}

// =============================================================================
// Work Paths
// =============================================================================

#[test_case("Character", Some("Characters") ; "character")]
#[test_case("Environment", Some("Environments") ; "environment")]
#[test_case("Prop", Some("Props") ; "prop")]
#[test_case("Vehicle", None ; "unmapped")]
fn test_asset_type_folder(asset_type: &str, expected: Option<&str>) {
    assert_eq!(asset_type_folder(asset_type), expected);
}

fn task(entity_type: EntityType, entity: &str, content: &str) -> Task {
    let mut task = Task::new(1);
    task.content = Some(content.to_string());
    task.entity = Some(EntityRef::named(entity_type, 2, entity));
    task.project = Some(EntityRef::named(EntityType::Project, 124, "SandBox"));
    task
}

#[test_case(EntityType::Asset, "cianlu", Some("Character"), Some("SandBox/ASSETS/Characters/cianlu/02_Rig") ; "character asset")]
#[test_case(EntityType::Asset, "forest", Some("Environment"), Some("SandBox/ASSETS/Environments/forest/02_Rig") ; "environment asset")]
#[test_case(EntityType::Shot, "sq010_050", None, Some("SandBox/SHOTS/sq010_050/02_Rig") ; "shot")]
#[test_case(EntityType::Asset, "cianlu", None, None ; "asset without type")]
#[test_case(EntityType::Sequence, "sq010", None, None ; "sequence has no path")]
fn test_work_path(
    entity_type: EntityType,
    entity: &str,
    asset_type: Option<&str>,
    expected: Option<&str>,
) {
    let task = task(entity_type, entity, "02_Rig");
    let path = task_work_path(Path::new("/work"), &task, asset_type);
    assert_eq!(path, expected.map(|p| PathBuf::from("/work").join(p)));
}
