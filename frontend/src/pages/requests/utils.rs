use crate::api::{
    ApiError, Attachment, FacilityRequest, NewRequest, Priority, RequestStatus, RequestUpdate,
};
use crate::utils::time::parse_date_input;
use leptos::*;
use thiserror::Error;

use super::types::RequestFilter;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingFields(Vec<&'static str>),
    #[error("Invalid priority value")]
    InvalidPriority(String),
    #[error("Invalid status value")]
    InvalidStatus(String),
}

impl FormError {
    pub fn title(&self) -> &'static str {
        match self {
            FormError::MissingFields(_) => "Missing Fields",
            FormError::InvalidPriority(_) | FormError::InvalidStatus(_) => "Error",
        }
    }
}

impl From<FormError> for ApiError {
    fn from(err: FormError) -> Self {
        let mut api = ApiError::validation(err.to_string());
        api.details = Some(match &err {
            FormError::MissingFields(fields) => serde_json::json!({ "missing": fields }),
            FormError::InvalidPriority(value) => serde_json::json!({ "priority": value }),
            FormError::InvalidStatus(value) => serde_json::json!({ "status": value }),
        });
        api
    }
}

fn missing_fields(fields: &[(&'static str, String)]) -> Result<(), FormError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(FormError::MissingFields(missing))
    }
}

fn parse_priority(raw: &str) -> Result<Priority, FormError> {
    raw.trim()
        .parse()
        .map_err(|_| FormError::InvalidPriority(raw.to_string()))
}

fn parse_status(raw: &str) -> Result<RequestStatus, FormError> {
    raw.trim()
        .parse()
        .map_err(|_| FormError::InvalidStatus(raw.to_string()))
}

#[derive(Clone, Copy)]
pub struct NewRequestFormState {
    floor: RwSignal<String>,
    room: RwSignal<String>,
    block: RwSignal<String>,
    guest_name: RwSignal<String>,
    phone_number: RwSignal<String>,
    service: RwSignal<String>,
    department: RwSignal<String>,
    priority: RwSignal<String>,
    attachment: RwSignal<Option<Attachment>>,
    reading_attachment: RwSignal<bool>,
}

impl Default for NewRequestFormState {
    fn default() -> Self {
        Self {
            floor: create_rw_signal(String::new()),
            room: create_rw_signal(String::new()),
            block: create_rw_signal(String::new()),
            guest_name: create_rw_signal(String::new()),
            phone_number: create_rw_signal(String::new()),
            service: create_rw_signal(String::new()),
            department: create_rw_signal(String::new()),
            priority: create_rw_signal(Priority::default().as_str().to_string()),
            attachment: create_rw_signal(None),
            reading_attachment: create_rw_signal(false),
        }
    }
}

impl NewRequestFormState {
    pub fn floor_signal(&self) -> RwSignal<String> {
        self.floor
    }

    pub fn room_signal(&self) -> RwSignal<String> {
        self.room
    }

    pub fn block_signal(&self) -> RwSignal<String> {
        self.block
    }

    pub fn guest_name_signal(&self) -> RwSignal<String> {
        self.guest_name
    }

    pub fn phone_number_signal(&self) -> RwSignal<String> {
        self.phone_number
    }

    pub fn service_signal(&self) -> RwSignal<String> {
        self.service
    }

    pub fn department_signal(&self) -> RwSignal<String> {
        self.department
    }

    pub fn priority_signal(&self) -> RwSignal<String> {
        self.priority
    }

    pub fn attachment_signal(&self) -> RwSignal<Option<Attachment>> {
        self.attachment
    }

    /// True while a picked file is still being read into memory.
    pub fn reading_attachment_signal(&self) -> RwSignal<bool> {
        self.reading_attachment
    }

    pub fn reset(&self) {
        self.floor.set(String::new());
        self.room.set(String::new());
        self.block.set(String::new());
        self.guest_name.set(String::new());
        self.phone_number.set(String::new());
        self.service.set(String::new());
        self.department.set(String::new());
        self.priority.set(Priority::default().as_str().to_string());
        self.attachment.set(None);
        self.reading_attachment.set(false);
    }

    pub fn to_payload(self, created_on: String) -> Result<NewRequest, FormError> {
        let fields = [
            ("floor", self.floor.get()),
            ("room", self.room.get()),
            ("block", self.block.get()),
            ("guestName", self.guest_name.get()),
            ("phoneNumber", self.phone_number.get()),
            ("service", self.service.get()),
            ("department", self.department.get()),
        ];
        missing_fields(&fields)?;
        let priority = parse_priority(&self.priority.get())?;
        let [floor, room, block, guest_name, phone_number, service, department] =
            fields.map(|(_, value)| value.trim().to_string());
        Ok(NewRequest {
            floor,
            room,
            block,
            guest_name,
            phone_number,
            service,
            department,
            priority,
            status: RequestStatus::Pending,
            created_on,
            attachment: self.attachment.get(),
        })
    }
}

/// Editable copy of the selected request. Id and creation time are display-only.
#[derive(Clone, Copy)]
pub struct EditorDraftState {
    id: RwSignal<String>,
    created_on: RwSignal<String>,
    floor: RwSignal<String>,
    room: RwSignal<String>,
    block: RwSignal<String>,
    guest_name: RwSignal<String>,
    phone_number: RwSignal<String>,
    service: RwSignal<String>,
    department: RwSignal<String>,
    priority: RwSignal<String>,
    status: RwSignal<String>,
}

impl Default for EditorDraftState {
    fn default() -> Self {
        Self {
            id: create_rw_signal(String::new()),
            created_on: create_rw_signal(String::new()),
            floor: create_rw_signal(String::new()),
            room: create_rw_signal(String::new()),
            block: create_rw_signal(String::new()),
            guest_name: create_rw_signal(String::new()),
            phone_number: create_rw_signal(String::new()),
            service: create_rw_signal(String::new()),
            department: create_rw_signal(String::new()),
            priority: create_rw_signal(String::new()),
            status: create_rw_signal(String::new()),
        }
    }
}

impl EditorDraftState {
    pub fn id_signal(&self) -> RwSignal<String> {
        self.id
    }

    pub fn created_on_signal(&self) -> RwSignal<String> {
        self.created_on
    }

    pub fn floor_signal(&self) -> RwSignal<String> {
        self.floor
    }

    pub fn room_signal(&self) -> RwSignal<String> {
        self.room
    }

    pub fn block_signal(&self) -> RwSignal<String> {
        self.block
    }

    pub fn guest_name_signal(&self) -> RwSignal<String> {
        self.guest_name
    }

    pub fn phone_number_signal(&self) -> RwSignal<String> {
        self.phone_number
    }

    pub fn service_signal(&self) -> RwSignal<String> {
        self.service
    }

    pub fn department_signal(&self) -> RwSignal<String> {
        self.department
    }

    pub fn priority_signal(&self) -> RwSignal<String> {
        self.priority
    }

    pub fn status_signal(&self) -> RwSignal<String> {
        self.status
    }

    pub fn load_from_request(&self, request: &FacilityRequest) {
        self.id.set(request.id.clone());
        self.created_on.set(request.created_on.clone());
        self.floor.set(request.floor.clone());
        self.room.set(request.room.clone());
        self.block.set(request.block.clone());
        self.guest_name.set(request.guest_name.clone());
        self.phone_number.set(request.phone_number.clone());
        self.service.set(request.service.clone());
        self.department.set(request.department.clone());
        self.priority.set(request.priority.as_str().to_string());
        // A request stored without status must get one before it can be saved.
        self.status.set(
            request
                .status
                .as_ref()
                .map(|status| status.as_str().to_string())
                .unwrap_or_default(),
        );
    }

    pub fn reset(&self) {
        for signal in [
            self.id,
            self.created_on,
            self.floor,
            self.room,
            self.block,
            self.guest_name,
            self.phone_number,
            self.service,
            self.department,
            self.priority,
            self.status,
        ] {
            signal.set(String::new());
        }
    }

    pub fn to_payload(self) -> Result<(String, RequestUpdate), FormError> {
        let fields = [
            ("floor", self.floor.get()),
            ("room", self.room.get()),
            ("block", self.block.get()),
            ("guestName", self.guest_name.get()),
            ("phoneNumber", self.phone_number.get()),
            ("service", self.service.get()),
            ("department", self.department.get()),
            ("priority", self.priority.get()),
            ("status", self.status.get()),
        ];
        missing_fields(&fields)?;
        let [floor, room, block, guest_name, phone_number, service, department, priority, status] =
            fields.map(|(_, value)| value.trim().to_string());
        let priority = parse_priority(&priority)?;
        let status = parse_status(&status)?;
        Ok((
            self.id.get(),
            RequestUpdate {
                floor,
                room,
                block,
                guest_name,
                phone_number,
                service,
                department,
                priority,
                status,
            },
        ))
    }
}

#[derive(Clone, Copy)]
pub struct FilterFormState {
    search_term: RwSignal<String>,
    start_date: RwSignal<String>,
    status: RwSignal<String>,
    department: RwSignal<String>,
}

impl Default for FilterFormState {
    fn default() -> Self {
        Self {
            search_term: create_rw_signal(String::new()),
            start_date: create_rw_signal(String::new()),
            status: create_rw_signal(String::new()),
            department: create_rw_signal(String::new()),
        }
    }
}

impl FilterFormState {
    pub fn search_term_signal(&self) -> RwSignal<String> {
        self.search_term
    }

    pub fn start_date_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn status_signal(&self) -> RwSignal<String> {
        self.status
    }

    pub fn department_signal(&self) -> RwSignal<String> {
        self.department
    }

    /// Unparseable date or status input is treated as "no constraint".
    pub fn snapshot(&self) -> RequestFilter {
        RequestFilter {
            search_term: self.search_term.get().trim().to_string(),
            start_date: parse_date_input(&self.start_date.get()),
            status: self.status.get().parse().ok(),
            department: Some(self.department.get().trim().to_string())
                .filter(|dept| !dept.is_empty()),
        }
    }

    pub fn reset(&self) {
        self.search_term.set(String::new());
        self.start_date.set(String::new());
        self.status.set(String::new());
        self.department.set(String::new());
    }
}
