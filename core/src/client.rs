//! Stateless HTTP request builder and response parser for the users API.
//!
//! # Design
//! `UserClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//!
//! List and delete require an exact status (200 and 202). Create and update
//! accept whatever body deserializes; the status only shapes the error when
//! it does not.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{User, UserData};

/// Collection path of the users resource.
pub const USERS_PATH: &str = "/users";

pub const STATUS_OK: u16 = 200;
pub const STATUS_ACCEPTED: u16 = 202;

/// Synchronous, stateless client for the users API.
#[derive(Debug, Clone)]
pub struct UserClient {
    base_url: String,
}

impl UserClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{USERS_PATH}", self.base_url)
    }

    fn member_url(&self, id: i64) -> String {
        format!("{}{USERS_PATH}/{id}", self.base_url)
    }

    pub fn build_create_user(&self, input: &UserData) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, self.collection_url(), input)
    }

    pub fn build_list_users(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_update_user(&self, id: i64, input: &UserData) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, self.member_url(id), input)
    }

    pub fn build_delete_user(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.member_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_create_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        parse_lenient(response)
    }

    /// The raw response body, whatever its status or shape.
    pub fn parse_create_user_raw(&self, response: HttpResponse) -> String {
        response.body
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        check_status(&response, STATUS_OK)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_update_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        parse_lenient(response)
    }

    pub fn parse_delete_user(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, STATUS_ACCEPTED)
    }
}

fn json_request<T: Serialize>(method: HttpMethod, path: String, input: &T) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

/// Deserialize the body regardless of status; fall back to a status error
/// only when the body is not the expected shape.
fn parse_lenient<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    match serde_json::from_str(&response.body) {
        Ok(value) => Ok(value),
        Err(_) if !response.is_success() => Err(status_error(response)),
        Err(e) => Err(ApiError::DeserializationError(e.to_string())),
    }
}

/// Map any status other than `expected` to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(status_error(response.clone()))
}

fn status_error(response: HttpResponse) -> ApiError {
    if response.status == 404 {
        return ApiError::NotFound;
    }
    ApiError::HttpError {
        status: response.status,
        body: response.body,
    }
}
