//! Test fixtures and builders
//!
//! Provides convenient builders for creating studio data in a `MemoryStore`.

use pipetrack::adapters::memory::MemoryStore;
use pipetrack::core::models::{EntityRef, EntityType};
use pipetrack::core::ports::Record;
use serde_json::{Value, json};

/// Project every fixture lives in
pub const PROJECT_ID: i64 = 124;

const STEPS: &[&str] = &[
    "Art", "Model", "Rig", "Surfacing", "Texture", "Character FX", "LightRig", "Render", "Delivery",
    "Layout", "Animation", "Lighting", "FX", "Comp",
];

fn object(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        _ => panic!("fixture must be an object"),
    }
}

fn step_link(name: &str) -> Value {
    let id = STEPS.iter().position(|s| *s == name).map_or(999, |i| i as i64 + 1);
    json!({"type": "Step", "id": id, "name": name})
}

pub fn project() -> EntityRef {
    EntityRef::named(EntityType::Project, PROJECT_ID, "SandBox")
}

/// Builder for creating test tasks
pub struct TaskBuilder {
    id: i64,
    content: String,
    step: Option<String>,
    entity: Option<Value>,
    project: Option<Value>,
    assignees: Vec<i64>,
}

impl TaskBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            content: format!("task_{id}"),
            step: None,
            entity: None,
            project: Some(json!({"type": "Project", "id": PROJECT_ID, "name": "SandBox"})),
            assignees: Vec::new(),
        }
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    pub fn step(mut self, step: &str) -> Self {
        self.step = Some(step.to_string());
        self
    }

    pub fn on_asset(mut self, id: i64, name: &str) -> Self {
        self.entity = Some(json!({"type": "Asset", "id": id, "name": name}));
        self
    }

    pub fn on_shot(mut self, id: i64, name: &str) -> Self {
        self.entity = Some(json!({"type": "Shot", "id": id, "name": name}));
        self
    }

    pub fn on_entity(mut self, entity_type: &str, id: i64) -> Self {
        self.entity = Some(json!({"type": entity_type, "id": id, "name": format!("{entity_type}_{id}")}));
        self
    }

    pub fn in_project(mut self, id: i64) -> Self {
        self.project = Some(json!({"type": "Project", "id": id, "name": format!("project_{id}")}));
        self
    }

    pub fn no_project(mut self) -> Self {
        self.project = None;
        self
    }

    pub fn assigned_to(mut self, user_id: i64) -> Self {
        self.assignees.push(user_id);
        self
    }

    pub fn build(self) -> Record {
        let mut record = object(json!({"id": self.id, "content": self.content, "sg_status_list": "ip"}));
        if let Some(step) = &self.step {
            record.insert("step".into(), step_link(step));
        }
        if let Some(entity) = self.entity {
            record.insert("entity".into(), entity);
        }
        if let Some(project) = self.project {
            record.insert("project".into(), project);
        }
        let assignees: Vec<Value> =
            self.assignees.iter().map(|u| json!({"type": "HumanUser", "id": u})).collect();
        record.insert("task_assignees".into(), Value::Array(assignees));
        record
    }
}

/// Builder for creating test versions
pub struct VersionBuilder {
    id: i64,
    task_id: i64,
    status: String,
    created_at: String,
    files: Vec<(i64, String)>,
}

impl VersionBuilder {
    pub fn new(id: i64, task_id: i64) -> Self {
        Self {
            id,
            task_id,
            status: "apr".to_string(),
            created_at: "2025-01-01T00:00:00Z".to_string(),
            files: Vec::new(),
        }
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    /// Creation time as `day` days into January 2025
    pub fn day(mut self, day: u32) -> Self {
        self.created_at = format!("2025-01-{day:02}T12:00:00Z");
        self
    }

    /// Raw creation timestamp, as stored
    pub fn created_at(mut self, created_at: &str) -> Self {
        self.created_at = created_at.to_string();
        self
    }

    pub fn file(mut self, id: i64, name: &str) -> Self {
        self.files.push((id, name.to_string()));
        self
    }

    pub fn build(self) -> Record {
        let files: Vec<Value> = self
            .files
            .iter()
            .map(|(id, name)| json!({"type": "PublishedFile", "id": id, "name": name}))
            .collect();
        object(json!({
            "id": self.id,
            "code": format!("v{:03}", self.id),
            "sg_status_list": self.status,
            "created_at": self.created_at,
            "sg_task": {"type": "Task", "id": self.task_id},
            "published_files": files,
        }))
    }
}

/// Builder for a whole studio snapshot
#[derive(Default)]
pub struct StudioBuilder {
    store: MemoryStore,
}

impl StudioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task(mut self, task: TaskBuilder) -> Self {
        self.store.insert(EntityType::Task, task.build());
        self
    }

    pub fn version(mut self, version: VersionBuilder) -> Self {
        self.store.insert(EntityType::Version, version.build());
        self
    }

    /// A shot linking `assets` as `(id, name)`; an empty name omits it
    pub fn shot(mut self, id: i64, code: &str, assets: &[(i64, &str)]) -> Self {
        let links: Vec<Value> = assets
            .iter()
            .map(|(aid, name)| {
                if name.is_empty() {
                    json!({"type": "Asset", "id": aid})
                } else {
                    json!({"type": "Asset", "id": aid, "name": name})
                }
            })
            .collect();
        self.store
            .insert(EntityType::Shot, object(json!({"id": id, "code": code, "assets": links})));
        self
    }

    pub fn asset(mut self, id: i64, code: &str, asset_type: &str) -> Self {
        self.store.insert(
            EntityType::Asset,
            object(json!({"id": id, "code": code, "sg_asset_type": asset_type})),
        );
        self
    }

    pub fn build(self) -> MemoryStore {
        self.store
    }
}

/// A small production:
///
/// - asset 7 "cianlu": Model (10), Rig (11), Surfacing (12)
/// - asset 8 "sword": Model (20) only
/// - shot 1174 "sq010_050" linking both: Layout (30), Animation (31), Lighting (32)
pub fn sandbox() -> StudioBuilder {
    StudioBuilder::new()
        .asset(7, "cianlu", "Character")
        .asset(8, "sword", "Prop")
        .shot(1174, "sq010_050", &[(7, "cianlu"), (8, "sword")])
        .task(TaskBuilder::new(10).step("Model").on_asset(7, "cianlu"))
        .task(TaskBuilder::new(11).step("Rig").on_asset(7, "cianlu"))
        .task(TaskBuilder::new(12).step("Surfacing").on_asset(7, "cianlu"))
        .task(TaskBuilder::new(20).step("Model").on_asset(8, "sword"))
        .task(TaskBuilder::new(30).step("Layout").on_shot(1174, "sq010_050"))
        .task(TaskBuilder::new(31).step("Animation").on_shot(1174, "sq010_050"))
        .task(TaskBuilder::new(32).step("Lighting").on_shot(1174, "sq010_050"))
        .version(VersionBuilder::new(100, 10).day(1).file(1000, "cianlu_model.abc"))
        .version(VersionBuilder::new(110, 11).day(2).file(1100, "cianlu_rig.ma"))
        .version(VersionBuilder::new(300, 30).day(3).file(3000, "sq010_050_layout.ma"))
}
