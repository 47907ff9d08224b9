//! Domain DTOs for the users API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently,
//! so the scenarios can also run against the public API. Field names are
//! camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::random::random_word;

/// A user record as returned by the API after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Request payload for creating a user or fully replacing an existing one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub first_name: String,
    pub last_name: String,
}

impl UserData {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Random lowercase names of the given lengths.
    pub fn random(first_len: usize, last_len: usize) -> Self {
        Self::new(random_word(first_len), random_word(last_len))
    }
}
