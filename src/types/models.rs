//! Model listing types

use super::object::{ListObject, ModelObject};
use serde::{Deserialize, Serialize};

/// Model information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub object: ModelObject,
    pub owned_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
}

impl Model {
    pub fn new(id: impl Into<String>, owned_by: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            object: ModelObject::Model,
            owned_by: owned_by.into(),
            created: None,
        }
    }

    pub fn with_created(mut self, created: i64) -> Self {
        self.created = Some(created);
        self
    }
}

/// List models response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelList {
    pub object: ListObject,
    pub data: Vec<Model>,
}

impl ModelList {
    pub fn new(models: Vec<Model>) -> Self {
        Self {
            object: ListObject::List,
            data: models,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Model> {
        self.data.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl FromIterator<Model> for ModelList {
    fn from_iter<I: IntoIterator<Item = Model>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
