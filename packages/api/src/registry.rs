//! Generic CRUD endpoints for registry screens.

use reqwest::Method;
use scheduler_core::view::{RegistryEntity, RegistryWrite};
use scheduler_core::{Index, TeamMember};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::SchedulerClient;
use crate::error::ApiError;

/// A registry entity with a REST collection.
pub trait RegistryEndpoint: RegistryEntity<Form: Serialize> + DeserializeOwned {
    /// Collection path with trailing slash, e.g. `/api/indexes/`.
    const PATH: &'static str;

    fn item_path(id: Self::Id) -> String {
        format!("{}{}/", Self::PATH, id)
    }
}

impl RegistryEndpoint for TeamMember {
    const PATH: &'static str = "/api/team-members/";
}

impl RegistryEndpoint for Index {
    const PATH: &'static str = "/api/indexes/";
}

impl SchedulerClient {
    pub async fn list_entries<E: RegistryEndpoint>(&self) -> Result<Vec<E>, ApiError> {
        self.get(E::PATH).await
    }

    /// POST a new record or PUT an edited one.
    pub async fn write_entry<E: RegistryEndpoint>(&self, write: &RegistryWrite<E>) -> Result<E, ApiError> {
        let request = match write {
            RegistryWrite::Create { form, key } => self.write(Method::POST, E::PATH, form, *key),
            RegistryWrite::Update { id, form, key } => {
                self.write(Method::PUT, &E::item_path(*id), form, *key)
            }
        };
        self.fetch(request).await
    }

    pub async fn delete_entry<E: RegistryEndpoint>(&self, id: E::Id) -> Result<(), ApiError> {
        self.delete(&E::item_path(id)).await
    }

    pub async fn list_team_members(&self) -> Result<Vec<TeamMember>, ApiError> {
        self.list_entries::<TeamMember>().await
    }

    pub async fn list_indexes(&self) -> Result<Vec<Index>, ApiError> {
        self.list_entries::<Index>().await
    }
}
