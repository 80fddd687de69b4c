//! `IdentityStore` implementations backed by the partition repositories.

use async_trait::async_trait;
use uuid::Uuid;

use fyphub_core::result::AppResult;
use fyphub_database::repositories::{AdminRepository, StudentRepository, SupervisorRepository};
use fyphub_entity::user::Identity;

use super::IdentityStore;

#[async_trait]
impl IdentityStore for AdminRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Identity>> {
        Ok(self.find_by_email(email).await?.map(Identity::Admin))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Identity>> {
        Ok(self.find_by_id(id).await?.map(Identity::Admin))
    }

    async fn store_refresh_token(&self, id: Uuid, token: Option<&str>) -> AppResult<()> {
        self.set_refresh_token(id, token).await
    }
}

#[async_trait]
impl IdentityStore for SupervisorRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Identity>> {
        Ok(self.find_by_email(email).await?.map(Identity::Supervisor))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Identity>> {
        Ok(self.find_by_id(id).await?.map(Identity::Supervisor))
    }

    async fn store_refresh_token(&self, id: Uuid, token: Option<&str>) -> AppResult<()> {
        self.set_refresh_token(id, token).await
    }
}

#[async_trait]
impl IdentityStore for StudentRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Identity>> {
        Ok(self.find_by_email(email).await?.map(Identity::Student))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Identity>> {
        Ok(self.find_by_id(id).await?.map(Identity::Student))
    }

    async fn store_refresh_token(&self, id: Uuid, token: Option<&str>) -> AppResult<()> {
        self.set_refresh_token(id, token).await
    }
}
