//! User profile records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Profile as returned by `/users/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    /// snake_case on the wire, unlike every other field.
    #[serde(rename = "initial_capital", default)]
    pub initial_capital: Option<f64>,
}

/// PATCH body for `/users`. Mirrors the update form: identity fields are
/// required, the rest optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(rename = "initial_capital")]
    pub initial_capital: f64,
}

impl UserUpdate {
    /// Seed an update from the current profile; empty strings stand in for
    /// fields the profile has never set.
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone().unwrap_or_default(),
            mobile: user.mobile.clone().unwrap_or_default(),
            date_of_birth: user.date_of_birth,
            address_line1: user.address_line1.clone().unwrap_or_default(),
            address_line2: user.address_line2.clone(),
            city: user.city.clone().unwrap_or_default(),
            postal_code: user.postal_code.clone().unwrap_or_default(),
            country: user.country.clone().unwrap_or_default(),
            gender: user.gender.clone(),
            initial_capital: user.initial_capital.unwrap_or(0.0),
        }
    }
}
