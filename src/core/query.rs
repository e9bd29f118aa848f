//! Typed store queries
//!
//! Each entity category has a closed enumeration of the fields this crate
//! reads or filters on. A [`Query`] is built against one of those
//! enumerations, so a filter on a version field can never be sent to the
//! task table, and a misspelled field name does not compile.
//!
//! [`Query::build`] erases the field types into a [`StoreQuery`], the form
//! the [`EntityStore`](crate::core::ports::EntityStore) port receives.

use serde::Serialize;
use serde_json::Value;

use super::models::{EntityRef, EntityType};

/// A field of one entity category
pub trait Field: Copy {
    /// Category whose records carry this field
    const ENTITY: EntityType;

    /// Field name as the store knows it
    fn name(self) -> &'static str;
}

/// Task fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    /// `id`
    Id,
    /// `content` (task name)
    Content,
    /// `step` link
    Step,
    /// Code of the linked step, for filtering by step name
    StepCode,
    /// `entity` link (owning asset or shot)
    Entity,
    /// `project` link
    Project,
    /// `sg_status_list`
    Status,
    /// `task_assignees` multi-link
    Assignees,
}

impl Field for TaskField {
    const ENTITY: EntityType = EntityType::Task;

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Content => "content",
            Self::Step => "step",
            Self::StepCode => "step.Step.code",
            Self::Entity => "entity",
            Self::Project => "project",
            Self::Status => "sg_status_list",
            Self::Assignees => "task_assignees",
        }
    }
}

/// Version fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionField {
    /// `id`
    Id,
    /// `code`
    Code,
    /// `created_at`
    CreatedAt,
    /// `sg_status_list`
    Status,
    /// `sg_task` link
    Task,
    /// `published_files` multi-link
    PublishedFiles,
}

impl Field for VersionField {
    const ENTITY: EntityType = EntityType::Version;

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Code => "code",
            Self::CreatedAt => "created_at",
            Self::Status => "sg_status_list",
            Self::Task => "sg_task",
            Self::PublishedFiles => "published_files",
        }
    }
}

/// Shot fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotField {
    /// `id`
    Id,
    /// `code`
    Code,
    /// `assets` multi-link
    Assets,
}

impl Field for ShotField {
    const ENTITY: EntityType = EntityType::Shot;

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Code => "code",
            Self::Assets => "assets",
        }
    }
}

/// Asset fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetField {
    /// `id`
    Id,
    /// `code`
    Code,
    /// `sg_asset_type`
    AssetType,
}

impl Field for AssetField {
    const ENTITY: EntityType = EntityType::Asset;

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Code => "code",
            Self::AssetType => "sg_asset_type",
        }
    }
}

/// Filter operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Equality; links compare by `{type, id}`
    Is,
    /// Inequality
    IsNot,
    /// Membership in a list of values
    In,
    /// Exclusion from a list of values
    NotIn,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Is => write!(f, "is"),
            Self::IsNot => write!(f, "is_not"),
            Self::In => write!(f, "in"),
            Self::NotIn => write!(f, "not_in"),
        }
    }
}

/// One `(field, operator, value)` filter triple
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Predicate {
    /// Field name
    pub field: &'static str,
    /// Comparison operator
    pub operator: Operator,
    /// Scalar, link object, or list (for `in` / `not_in`)
    pub value: Value,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

/// Ordering directive `{field_name, direction}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderBy {
    /// Field to sort on
    pub field_name: &'static str,
    /// Sort direction
    pub direction: Direction,
}

/// A query in the form the store port receives
///
/// Predicates are AND-combined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreQuery {
    /// Category to search
    pub entity: EntityType,
    /// Filters, all of which must match
    pub filters: Vec<Predicate>,
    /// Fields to return; `type` and `id` are always returned
    pub fields: Vec<&'static str>,
    /// Sort order, applied in sequence
    pub order: Vec<OrderBy>,
}

/// Typed query builder for one entity category
#[derive(Debug, Clone)]
pub struct Query<F: Field> {
    filters: Vec<Predicate>,
    fields: Vec<F>,
    order: Vec<OrderBy>,
}

impl<F: Field> Default for Query<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Field> Query<F> {
    /// Start an unfiltered query
    #[must_use]
    pub const fn new() -> Self {
        Self {
            filters: Vec::new(),
            fields: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Add a filter
    #[must_use]
    pub fn filter(mut self, field: F, operator: Operator, value: impl Into<Value>) -> Self {
        self.filters.push(Predicate {
            field: field.name(),
            operator,
            value: value.into(),
        });
        self
    }

    /// `field is value`
    #[must_use]
    pub fn is(self, field: F, value: impl Into<Value>) -> Self {
        self.filter(field, Operator::Is, value)
    }

    /// `field is <link>`, comparing by link identity
    #[must_use]
    pub fn is_link(self, field: F, link: &EntityRef) -> Self {
        self.filter(field, Operator::Is, link.to_link_value())
    }

    /// `field in values`
    #[must_use]
    pub fn in_values<V: Into<Value>>(self, field: F, values: impl IntoIterator<Item = V>) -> Self {
        let list: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.filter(field, Operator::In, list)
    }

    /// `field not_in values`
    #[must_use]
    pub fn not_in<V: Into<Value>>(self, field: F, values: impl IntoIterator<Item = V>) -> Self {
        let list: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.filter(field, Operator::NotIn, list)
    }

    /// Request fields
    #[must_use]
    pub fn fields(mut self, fields: &[F]) -> Self {
        self.fields.extend_from_slice(fields);
        self
    }

    /// Append a sort directive
    #[must_use]
    pub fn order_by(mut self, field: F, direction: Direction) -> Self {
        self.order.push(OrderBy {
            field_name: field.name(),
            direction,
        });
        self
    }

    /// Erase field types for the store port
    #[must_use]
    pub fn build(self) -> StoreQuery {
        StoreQuery {
            entity: F::ENTITY,
            filters: self.filters,
            fields: self.fields.into_iter().map(Field::name).collect(),
            order: self.order,
        }
    }
}
