//! Account data models and API request types.
//!
//! This module defines:
//! - `Account`: Database entity and the JSON body returned to clients
//! - `NewAccount`: Field values for a row that has not been assigned an id yet
//! - `AccountPayload`: Validated request body for create and update

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `accounts` table. The `id` is assigned by the store on insert
/// and is never reused, even after the row is deleted.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "name": "Ann",
///   "email": "a@x.com",
///   "address": "1 Rd",
///   "phone_number": "555"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct Account {
    /// Server-assigned identifier
    pub id: i64,

    pub name: String,

    pub email: String,

    pub address: String,

    pub phone_number: String,
}

impl Account {
    /// Merge a payload into this account.
    ///
    /// Fields present in the payload overwrite the stored value, absent ones
    /// are kept. The id never changes.
    pub fn apply(&mut self, payload: &AccountPayload) {
        if let Some(name) = &payload.name {
            self.name.clone_from(name);
        }
        if let Some(email) = &payload.email {
            self.email.clone_from(email);
        }
        if let Some(address) = &payload.address {
            self.address.clone_from(address);
        }
        if let Some(phone_number) = &payload.phone_number {
            self.phone_number.clone_from(phone_number);
        }
    }
}

/// Field values of an account about to be inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
}

impl NewAccount {
    /// Attach a store-assigned id.
    pub fn with_id(self, id: i64) -> Account {
        Account {
            id,
            name: self.name,
            email: self.email,
            address: self.address,
            phone_number: self.phone_number,
        }
    }
}

/// Why a request body could not be turned into an [`AccountPayload`].
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("request body is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("field `{0}` must be a string")]
    WrongType(&'static str),

    #[error("request body carries no account fields")]
    Empty,
}

/// Request body for creating or updating an account.
///
/// `id` is not part of the payload: a client-supplied id is ignored. A field
/// that is missing or `null` is `None`.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Ann",
///   "email": "a@x.com"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccountPayload {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub phone_number: Option<String>,
}

const FIELDS: [&str; 4] = ["name", "email", "address", "phone_number"];

impl AccountPayload {
    /// Parse and validate a raw request body.
    ///
    /// # Errors
    ///
    /// - `Malformed` if the bytes are empty or not JSON
    /// - `NotAnObject` / `WrongType` as for [`AccountPayload::from_json`]
    pub fn from_slice(body: &[u8]) -> Result<Self, PayloadError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_json(value)
    }

    /// Validate a JSON value at the boundary.
    ///
    /// # Errors
    ///
    /// - `NotAnObject` if the value is not a JSON object
    /// - `WrongType` naming the first account field holding a non-string
    pub fn from_json(value: Value) -> Result<Self, PayloadError> {
        let Value::Object(map) = &value else {
            return Err(PayloadError::NotAnObject);
        };

        // Report the offending field by name.
        for field in FIELDS {
            match map.get(field) {
                None | Some(Value::Null) | Some(Value::String(_)) => {}
                Some(_) => return Err(PayloadError::WrongType(field)),
            }
        }

        Ok(serde_json::from_value(value)?)
    }

    /// True when no account field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.phone_number.is_none()
    }

    /// Values for a new row. Missing fields become empty strings.
    ///
    /// # Errors
    ///
    /// `Empty` if the payload sets no account field at all.
    pub fn into_new_account(self) -> Result<NewAccount, PayloadError> {
        if self.is_empty() {
            return Err(PayloadError::Empty);
        }

        Ok(NewAccount {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            phone_number: self.phone_number.unwrap_or_default(),
        })
    }
}
