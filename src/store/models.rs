//! Document types for the Guru collections, plus the request bodies the
//! handlers accept. Wire names are camelCase to match the frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Permission level stored on a user record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Instructor,
    Student,
    #[default]
    Unset,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDoc {
    pub id: String,
    pub name: String,
    /// Unique lookup key for the role and ownership gates.
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDoc {
    pub id: String,
    pub name: String,
    pub instructor_name: String,
    pub instructor_email: String,
    pub available_seats: i64,
    pub price: f64,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub feedback: Option<String>,
    /// Enrollment counter, bumped by exactly one per successful patch.
    #[serde(default)]
    pub enrolled: i64,
}

fn default_status() -> String {
    "pending".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDoc {
    pub id: String,
    pub class_id: String,
    /// Owner email; the ownership gate compares against this.
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDoc {
    pub id: String,
    pub email: String,
    pub transaction_id: String,
    pub price: f64,
    pub class_id: String,
    pub cart_id: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDoc {
    pub id: String,
    pub email: String,
    pub class_id: String,
    pub class_name: String,
    pub date: DateTime<Utc>,
}

// --- Request bodies ---

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClass {
    pub name: String,
    pub instructor_name: String,
    pub instructor_email: String,
    pub available_seats: i64,
    pub price: f64,
}

/// Partial update for a class: optional moderation fields. The enrollment
/// counter is not part of the body; the patch operation bumps it itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassPatch {
    pub status: Option<String>,
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RolePatch {
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCart {
    pub class_id: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub email: String,
    pub transaction_id: String,
    pub price: f64,
    pub class_id: String,
    pub cart_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEnrollment {
    pub email: String,
    pub class_id: String,
    pub class_name: String,
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
