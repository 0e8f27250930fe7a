//! Index domain types.

use serde::{Deserialize, Serialize};

use crate::IndexId;
use crate::error::{ValidationError, require};

/// A named grouping that jobs belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Index {
    pub id: IndexId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Add/edit form fields for an index. Also the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexForm {
    pub name: String,
    pub description: String,
}

impl IndexForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "Name")
    }
}

impl From<&Index> for IndexForm {
    fn from(index: &Index) -> Self {
        Self {
            name: index.name.clone(),
            description: index.description.clone(),
        }
    }
}
