use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};

/// Inclusive bounds on `firstName` length, counted in characters.
pub const FIRST_NAME_MIN: usize = 2;
pub const FIRST_NAME_MAX: usize = 15;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    users: BTreeMap<i64, User>,
}

impl Store {
    fn insert(&mut self, input: UserData) -> User {
        self.next_id += 1;
        let user = User {
            id: self.next_id,
            first_name: input.first_name,
            last_name: input.last_name,
        };
        self.users.insert(user.id, user.clone());
        user
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Rejects a first name outside the accepted length range with the same
/// field-keyed message body the public API returns.
fn validate(input: &UserData) -> Result<(), Response> {
    let len = input.first_name.chars().count();
    if (FIRST_NAME_MIN..=FIRST_NAME_MAX).contains(&len) {
        return Ok(());
    }
    tracing::warn!(first_name = %input.first_name, len, "rejecting user with invalid first name");
    let body = json!({
        "firstName": format!("size must be between {FIRST_NAME_MIN} and {FIRST_NAME_MAX}")
    });
    Err((StatusCode::BAD_REQUEST, Json(body)).into_response())
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    let store = db.read().await;
    Json(store.users.values().cloned().collect())
}

async fn create_user(
    State(db): State<Db>,
    Json(input): Json<UserData>,
) -> Result<(StatusCode, Json<User>), Response> {
    validate(&input)?;
    let user = db.write().await.insert(input);
    tracing::info!(id = user.id, first_name = %user.first_name, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_user(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<User>, StatusCode> {
    let store = db.read().await;
    store.users.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UserData>,
) -> Result<Json<User>, Response> {
    validate(&input)?;
    let mut store = db.write().await;
    let user = store
        .users
        .get_mut(&id)
        .ok_or_else(|| StatusCode::NOT_FOUND.into_response())?;
    user.first_name = input.first_name;
    user.last_name = input.last_name;
    tracing::info!(id, first_name = %user.first_name, "user updated");
    Ok(Json(user.clone()))
}

async fn delete_user(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    let mut store = db.write().await;
    match store.users.remove(&id) {
        Some(_) => {
            tracing::info!(id, "user deleted");
            StatusCode::ACCEPTED
        }
        None => StatusCode::NOT_FOUND,
    }
}
