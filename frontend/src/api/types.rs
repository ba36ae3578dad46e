use chrono::{DateTime, NaiveDate, Utc};
use leptos::{IntoView, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|priority| priority.as_str() == value)
            .ok_or_else(|| UnknownVariant {
                kind: "priority",
                value: value.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    InProgress,
    Completed,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 3] = [
        RequestStatus::Pending,
        RequestStatus::InProgress,
        RequestStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::InProgress => "IN_PROGRESS",
            RequestStatus::Completed => "COMPLETED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::InProgress => "In Progress",
            RequestStatus::Completed => "Completed",
        }
    }
}

impl Default for RequestStatus {
    fn default() -> Self {
        RequestStatus::Pending
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        RequestStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownVariant {
                kind: "status",
                value: value.to_string(),
            })
    }
}

/// An enum field as read from storage. Values outside the known set are kept
/// verbatim so one odd record never fails the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stored<T> {
    Known(T),
    Other(String),
}

impl<T: Copy> Stored<T> {
    pub fn known(&self) -> Option<T> {
        match self {
            Stored::Known(value) => Some(*value),
            Stored::Other(_) => None,
        }
    }
}

impl<T> From<T> for Stored<T> {
    fn from(value: T) -> Self {
        Stored::Known(value)
    }
}

impl Stored<Priority> {
    pub fn as_str(&self) -> &str {
        match self {
            Stored::Known(priority) => priority.as_str(),
            Stored::Other(raw) => raw,
        }
    }
}

impl Stored<RequestStatus> {
    pub fn as_str(&self) -> &str {
        match self {
            Stored::Known(status) => status.as_str(),
            Stored::Other(raw) => raw,
        }
    }
}

/// A facility service ticket as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityRequest {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub floor: String,
    pub room: String,
    pub block: String,
    pub guest_name: String,
    pub phone_number: String,
    pub service: String,
    pub department: String,
    pub priority: Stored<Priority>,
    #[serde(default)]
    pub status: Option<Stored<RequestStatus>>,
    pub created_on: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl FacilityRequest {
    pub fn location(&self) -> String {
        format!("{}-{}", self.block, self.room)
    }

    /// Requests stored without a status are treated as pending; an
    /// unrecognised stored value has no effective status.
    pub fn effective_status(&self) -> Option<RequestStatus> {
        match &self.status {
            None => Some(RequestStatus::default()),
            Some(stored) => stored.known(),
        }
    }

    pub fn short_id(&self) -> &str {
        let count = self.id.chars().count();
        if count <= 4 {
            return &self.id;
        }
        let start = self
            .id
            .char_indices()
            .nth(count - 4)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        &self.id[start..]
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.created_on.trim())
            .ok()
            .map(|value| value.with_timezone(&Utc))
    }

    pub fn created_date(&self) -> Option<NaiveDate> {
        self.created_at().map(|value| value.date_naive())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Multipart payload for `POST /requests`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRequest {
    pub floor: String,
    pub room: String,
    pub block: String,
    pub guest_name: String,
    pub phone_number: String,
    pub service: String,
    pub department: String,
    pub priority: Priority,
    pub status: RequestStatus,
    pub created_on: String,
    pub attachment: Option<Attachment>,
}

impl NewRequest {
    pub fn location(&self) -> String {
        format!("{}-{}", self.block, self.room)
    }

    /// Text parts of the multipart body, in submission order.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("floor", self.floor.clone()),
            ("room", self.room.clone()),
            ("block", self.block.clone()),
            ("location", self.location()),
            ("guestName", self.guest_name.clone()),
            ("phoneNumber", self.phone_number.clone()),
            ("service", self.service.clone()),
            ("department", self.department.clone()),
            ("priority", self.priority.as_str().to_string()),
            ("status", self.status.as_str().to_string()),
            ("createdOn", self.created_on.clone()),
        ]
    }
}

/// JSON body for `PATCH /requests/{id}`. Identity and creation time are immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestUpdate {
    pub floor: String,
    pub room: String,
    pub block: String,
    pub guest_name: String,
    pub phone_number: String,
    pub service: String,
    pub department: String,
    pub priority: Priority,
    pub status: RequestStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    #[serde(alias = "message")]
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn http_status(status: u16, method: &str, path: &str) -> Self {
        Self {
            error: format!("{} {} failed with status {}", method, path, status),
            code: format!("HTTP_{}", status),
            details: None,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.code == "VALIDATION_ERROR"
    }
}
