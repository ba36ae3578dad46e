use crate::api::{FacilityRequest, Priority, RequestStatus, Stored};
use crate::utils::{download::build_csv, time::format_created_on};
use chrono::NaiveDate;

pub const PAGE_SIZE: usize = 10;

pub type SelectOption = (&'static str, &'static str);

pub const FLOOR_OPTIONS: [SelectOption; 3] = [
    ("1", "Ground Floor"),
    ("2", "First Floor"),
    ("3", "Second Floor"),
];

pub const ROOM_OPTIONS: [SelectOption; 5] = [
    ("Emergency Room (ER)", "Emergency Room (ER)"),
    ("ICU", "ICU"),
    ("Laboratory", "Laboratory"),
    ("Pharmacy", "Pharmacy"),
    ("Radiology", "Radiology"),
];

pub const BLOCK_OPTIONS: [SelectOption; 4] = [
    ("Pediatric Ward", "Pediatric Ward"),
    ("Maternity", "Maternity"),
    ("Surgical Ward", "Surgical Ward"),
    ("Outpatient", "Outpatient"),
];

pub const SERVICE_OPTIONS: [SelectOption; 11] = [
    ("general_checkup", "General Check-up"),
    ("pediatrics", "Pediatrics"),
    ("cardiology", "Cardiology"),
    ("orthopedics", "Orthopedics"),
    ("dermatology", "Dermatology"),
    ("neurology", "Neurology"),
    ("emergency_services", "Emergency Services"),
    ("surgery", "Surgery"),
    ("radiology", "Radiology"),
    ("physiotherapy", "Physiotherapy"),
    ("pharmacy", "Pharmacy"),
];

pub const DEPARTMENT_OPTIONS: [SelectOption; 10] = [
    ("Pediatrics", "Pediatrics"),
    ("Radiology", "Radiology"),
    ("Cardiology", "Cardiology"),
    ("Orthopedics", "Orthopedics"),
    ("Neurology", "Neurology"),
    ("Pharmacy", "Pharmacy"),
    ("Dermatology", "Dermatology"),
    ("Oncology", "Oncology"),
    ("Anesthesiology", "Anesthesiology"),
    ("Geriatrics", "Geriatrics"),
];

pub const PRIORITY_OPTIONS: [SelectOption; 3] =
    [("HIGH", "High"), ("MEDIUM", "Medium"), ("LOW", "Low")];

pub const STATUS_OPTIONS: [SelectOption; 3] = [
    ("PENDING", "Pending"),
    ("IN_PROGRESS", "In Progress"),
    ("COMPLETED", "Completed"),
];

pub const ATTACHMENT_ACCEPT: &str = ".pdf,.doc,.docx";

/// Label for a stored option value; unknown values are shown as stored.
pub fn option_label<'a>(options: &[SelectOption], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

pub fn clamp_page(page: usize, len: usize) -> usize {
    page.clamp(1, total_pages(len))
}

/// Half-open index range shown on a 1-based `page`; empty when past the end.
pub fn page_bounds(page: usize, len: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(len);
    let end = start.saturating_add(PAGE_SIZE).min(len);
    (start, end)
}

pub fn page_slice<T: Clone>(items: &[T], page: usize) -> Vec<T> {
    let (start, end) = page_bounds(page, items.len());
    items[start..end].to_vec()
}

pub fn serial_number(page: usize, index: usize) -> usize {
    page.saturating_sub(1) * PAGE_SIZE + index + 1
}

/// Applied filter snapshot. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub search_term: String,
    pub start_date: Option<NaiveDate>,
    pub status: Option<RequestStatus>,
    pub department: Option<String>,
}

impl RequestFilter {
    pub fn is_empty(&self) -> bool {
        self.search_term.trim().is_empty()
            && self.start_date.is_none()
            && self.status.is_none()
            && self.department.is_none()
    }

    pub fn matches(&self, request: &FacilityRequest) -> bool {
        self.matches_search(request)
            && self.matches_start_date(request)
            && self
                .status
                .map_or(true, |status| request.effective_status() == Some(status))
            && self
                .department
                .as_deref()
                .map_or(true, |dept| request.department.eq_ignore_ascii_case(dept))
    }

    fn matches_search(&self, request: &FacilityRequest) -> bool {
        let needle = self.search_term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let location = request.location();
        [
            request.guest_name.as_str(),
            request.phone_number.as_str(),
            request.id.as_str(),
            request.service.as_str(),
            request.department.as_str(),
            location.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    // Requests with an unreadable timestamp never pass a date filter.
    fn matches_start_date(&self, request: &FacilityRequest) -> bool {
        match self.start_date {
            None => true,
            Some(start) => request.created_date().is_some_and(|day| day >= start),
        }
    }

    pub fn apply(&self, requests: &[FacilityRequest]) -> Vec<FacilityRequest> {
        requests
            .iter()
            .filter(|request| self.matches(request))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryCounters {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub high_priority: usize,
}

impl SummaryCounters {
    pub fn from_requests(requests: &[FacilityRequest]) -> Self {
        requests.iter().fold(
            Self {
                total: requests.len(),
                ..Self::default()
            },
            |mut acc, request| {
                match request.effective_status() {
                    Some(RequestStatus::Pending) => acc.pending += 1,
                    Some(RequestStatus::InProgress) => acc.in_progress += 1,
                    Some(RequestStatus::Completed) => acc.completed += 1,
                    None => {}
                }
                if request.priority.known() == Some(Priority::High) {
                    acc.high_priority += 1;
                }
                acc
            },
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

/// Single slot shared by every mutating operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingOperation(Option<Operation>);

impl PendingOperation {
    pub fn try_begin(&mut self, operation: Operation) -> bool {
        if self.0.is_some() {
            return false;
        }
        self.0 = Some(operation);
        true
    }

    pub fn finish(&mut self, operation: Operation) {
        if self.0 == Some(operation) {
            self.0 = None;
        }
    }

    pub fn current(&self) -> Option<Operation> {
        self.0
    }

    pub fn is_busy(&self) -> bool {
        self.0.is_some()
    }

    pub fn is_running(&self, operation: Operation) -> bool {
        self.0 == Some(operation)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorPhase {
    #[default]
    Closed,
    Open,
    Updating,
    ConfirmingDelete,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    Open,
    Close,
    SubmitUpdate,
    RequestDelete,
    ConfirmDelete,
    CancelDelete,
    Succeeded,
    Failed,
}

impl EditorPhase {
    /// Next phase, or `None` when `event` is not allowed from `self`.
    pub fn next(self, event: EditorEvent) -> Option<EditorPhase> {
        use EditorEvent as E;
        use EditorPhase as P;
        match (self, event) {
            (P::Closed, E::Open) | (P::Open, E::Open) => Some(P::Open),
            (P::Open, E::Close) => Some(P::Closed),
            (P::Open, E::SubmitUpdate) => Some(P::Updating),
            (P::Open, E::RequestDelete) => Some(P::ConfirmingDelete),
            (P::ConfirmingDelete, E::ConfirmDelete) => Some(P::Deleting),
            (P::ConfirmingDelete, E::CancelDelete) => Some(P::Open),
            (P::Updating, E::Succeeded) | (P::Deleting, E::Succeeded) => Some(P::Closed),
            (P::Updating, E::Failed) | (P::Deleting, E::Failed) => Some(P::Open),
            _ => None,
        }
    }

    pub fn is_visible(self) -> bool {
        self != EditorPhase::Closed
    }

    pub fn is_busy(self) -> bool {
        matches!(self, EditorPhase::Updating | EditorPhase::Deleting)
    }
}

/// Unrecognised stored statuses are shown as stored.
pub fn status_badge_label(status: Option<&Stored<RequestStatus>>) -> &str {
    match status {
        Some(Stored::Known(RequestStatus::InProgress)) => "IN PROGRESS",
        Some(stored) => stored.as_str(),
        None => "N/A",
    }
}

pub const CSV_HEADERS: [&str; 11] = [
    "SL No",
    "Request ID",
    "Guest Name",
    "Phone Number",
    "Created On",
    "Location",
    "Service",
    "Department",
    "Priority",
    "Status",
    "Floor",
];

pub const CSV_FILE_NAME: &str = "facility-requests.csv";

pub fn requests_csv(requests: &[FacilityRequest]) -> Result<String, String> {
    build_csv(
        &CSV_HEADERS,
        requests.iter().enumerate().map(|(index, request)| {
            vec![
                (index + 1).to_string(),
                request.id.clone(),
                request.guest_name.clone(),
                request.phone_number.clone(),
                format_created_on(&request.created_on),
                request.location(),
                option_label(&SERVICE_OPTIONS, &request.service).to_string(),
                request.department.clone(),
                request.priority.as_str().to_string(),
                status_badge_label(request.status.as_ref()).to_string(),
                option_label(&FLOOR_OPTIONS, &request.floor).to_string(),
            ]
        }),
    )
}
