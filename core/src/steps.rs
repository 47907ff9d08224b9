//! Multi-call helpers shared by the scenarios.

use crate::api::UserApi;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{User, UserData};

/// Name lengths used for replacement data. They differ from the 8/10-letter
/// fixtures so the new names never equal the old ones.
pub const UPDATED_FIRST_NAME_LEN: usize = 9;
pub const UPDATED_LAST_NAME_LEN: usize = 11;

/// Replaces both names of user `id` with fresh random words.
pub fn update_created_user<T: Transport>(api: &UserApi<T>, id: i64) -> Result<User, ApiError> {
    let data = UserData::random(UPDATED_FIRST_NAME_LEN, UPDATED_LAST_NAME_LEN);
    api.update_user(id, &data)
}

/// Whether any listed user carries `first_name`.
pub fn is_listed<T: Transport>(api: &UserApi<T>, first_name: &str) -> Result<bool, ApiError> {
    Ok(api.list_users()?.iter().any(|u| u.first_name == first_name))
}
