//! One call per operation: build, execute, parse.

use crate::client::UserClient;
use crate::config::HarnessConfig;
use crate::error::ApiError;
use crate::transport::{Transport, UreqTransport};
use crate::types::{User, UserData};

/// A `UserClient` paired with a transport that performs the round-trip.
#[derive(Debug, Clone)]
pub struct UserApi<T = UreqTransport> {
    client: UserClient,
    transport: T,
}

impl UserApi<UreqTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(UserClient::new(base_url), UreqTransport::new())
    }

    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new(&config.host)
    }
}

impl<T: Transport> UserApi<T> {
    pub fn with_transport(client: UserClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &UserClient {
        &self.client
    }

    pub fn create_user(&self, user: &UserData) -> Result<User, ApiError> {
        tracing::info!(first_name = %user.first_name, last_name = %user.last_name, "creating new user");
        let request = self.client.build_create_user(user)?;
        self.client.parse_create_user(self.transport.execute(request)?)
    }

    pub fn create_user_raw(&self, user: &UserData) -> Result<String, ApiError> {
        tracing::info!(first_name = %user.first_name, last_name = %user.last_name, "creating new user");
        let request = self.client.build_create_user(user)?;
        Ok(self.client.parse_create_user_raw(self.transport.execute(request)?))
    }

    pub fn list_users(&self) -> Result<Vec<User>, ApiError> {
        tracing::info!("listing users");
        let request = self.client.build_list_users();
        self.client.parse_list_users(self.transport.execute(request)?)
    }

    pub fn update_user(&self, id: i64, user: &UserData) -> Result<User, ApiError> {
        tracing::info!(id, "updating user");
        let request = self.client.build_update_user(id, user)?;
        self.client.parse_update_user(self.transport.execute(request)?)
    }

    pub fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        tracing::info!(id, "deleting user");
        let request = self.client.build_delete_user(id);
        self.client.parse_delete_user(self.transport.execute(request)?)
    }
}
