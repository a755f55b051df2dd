use crate::{
    app_lib::{
        AppError,
        json::{id_or_document, string_or_number},
    },
    features::{
        auth::{role::Role, types::CurrentUser},
        users::types::{BLOOD_TYPES, contains_ignore_case},
    },
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const URGENCY_LEVELS: [&str; 2] = ["Urgent", "Regular"];
pub const TRANSPORTATION: [&str; 2] = ["provided", "not provided"];
/// Page size of the dashboard request table.
pub const REQUESTS_PER_PAGE: u32 = 12;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DoneStatus {
    Complete,
    #[default]
    NonComplete,
}

impl DoneStatus {
    pub const ALL: [DoneStatus; 2] = [DoneStatus::Complete, DoneStatus::NonComplete];

    pub fn as_str(self) -> &'static str {
        match self {
            DoneStatus::Complete => "complete",
            DoneStatus::NonComplete => "non complete",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DoneStatus::Complete => "Complete",
            DoneStatus::NonComplete => "Non Complete",
        }
    }

    /// Anything other than `complete` is still open.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case(DoneStatus::Complete.as_str()) {
            DoneStatus::Complete
        } else {
            DoneStatus::NonComplete
        }
    }
}

impl Serialize for DoneStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DoneStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(DoneStatus::parse(&string_or_number(deserializer)?))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BloodRequest {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub patient_name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub blood_type: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub quantity: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub urgency: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub request_date: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub donation_point: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub contact_number: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub hospital_name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub description: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub transportation: String,
    /// Owner id; the API sometimes populates the whole user document.
    #[serde(default, deserialize_with = "id_or_document")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub done_status: DoneStatus,
}

impl BloodRequest {
    pub fn is_complete(&self) -> bool {
        self.done_status == DoneStatus::Complete
    }

    /// `YYYY-MM-DD` part of an ISO timestamp.
    pub fn request_day(&self) -> &str {
        self.request_date.get(..10).unwrap_or(&self.request_date)
    }
}

/// Response of `GET /request`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RequestPage {
    #[serde(default)]
    pub requests: Vec<BloodRequest>,
    #[serde(rename = "totalRequests", default)]
    pub total_requests: u64,
}

impl RequestPage {
    /// Number of pages for `limit` rows per page, at least one.
    pub fn total_pages(&self, limit: u32) -> u64 {
        self.total_requests.div_ceil(u64::from(limit.max(1))).max(1)
    }
}

/// `GET /request/{id}` has answered with both `request` and `data` wrappers.
#[derive(Deserialize)]
pub(crate) struct RequestEnvelope {
    #[serde(default)]
    request: Option<BloodRequest>,
    #[serde(default)]
    data: Option<BloodRequest>,
}

impl RequestEnvelope {
    pub(crate) fn into_request(self) -> Result<BloodRequest, AppError> {
        self.request
            .or(self.data)
            .ok_or_else(|| AppError::Parse("Request not found in response.".to_string()))
    }
}

/// Server-side filters for `GET /request`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestQuery {
    pub page: u32,
    pub limit: u32,
    pub name: String,
    pub blood_type: String,
    pub location: String,
}

impl Default for RequestQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: REQUESTS_PER_PAGE,
            name: String::new(),
            blood_type: String::new(),
            location: String::new(),
        }
    }
}

/// Payload of the add and update forms.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RequestForm {
    pub patient_name: String,
    pub blood_type: String,
    pub quantity: String,
    pub urgency: String,
    pub request_date: String,
    pub donation_point: String,
    pub contact_number: String,
    pub hospital_name: String,
    pub email: String,
    pub description: String,
    pub transportation: String,
}

impl RequestForm {
    pub fn from_request(request: &BloodRequest) -> Self {
        Self {
            patient_name: request.patient_name.clone(),
            blood_type: request.blood_type.clone(),
            quantity: request.quantity.clone(),
            urgency: request.urgency.clone(),
            request_date: request.request_day().to_string(),
            donation_point: request.donation_point.clone(),
            contact_number: request.contact_number.clone(),
            hospital_name: request.hospital_name.clone(),
            email: request.email.clone(),
            description: request.description.clone(),
            transportation: request.transportation.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("Patient name", &self.patient_name),
            ("Blood type", &self.blood_type),
            ("Quantity", &self.quantity),
            ("Donation point", &self.donation_point),
            ("Contact number", &self.contact_number),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AppError::Config(format!("{field} is required.")));
        }
        if !BLOOD_TYPES.contains(&self.blood_type.as_str()) {
            return Err(AppError::Config(format!(
                "Unknown blood type {}.",
                self.blood_type
            )));
        }
        match self.quantity.trim().parse::<u32>() {
            Ok(units) if units > 0 => Ok(()),
            _ => Err(AppError::Config(
                "Quantity must be a whole number of units.".to_string(),
            )),
        }
    }
}

/// Admins manage every request; other users only their own.
pub fn can_manage_request(user: Option<&CurrentUser>, request: &BloodRequest) -> bool {
    user.is_some_and(|user| {
        user.role == Role::Admin || request.user_id.as_deref() == Some(user.id.as_str())
    })
}

/// Public board filter: donation point substring and blood type, both
/// case-insensitive; blank criteria match everything.
pub fn filter_requests(
    requests: &[BloodRequest],
    donation_point: &str,
    blood_type: &str,
) -> Vec<BloodRequest> {
    let blood_type = blood_type.trim();
    requests
        .iter()
        .filter(|request| {
            contains_ignore_case(&request.donation_point, donation_point)
                && (blood_type.is_empty() || request.blood_type.eq_ignore_ascii_case(blood_type))
        })
        .cloned()
        .collect()
}

/// The first `count` requests that are still open, in API order.
pub fn latest_open(requests: &[BloodRequest], count: usize) -> Vec<BloodRequest> {
    requests
        .iter()
        .filter(|request| !request.is_complete())
        .take(count)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        BloodRequest, DoneStatus, RequestForm, RequestPage, can_manage_request, filter_requests,
        latest_open,
    };
    use crate::features::auth::{role::Role, types::CurrentUser};

    fn request(id: &str, point: &str, blood_type: &str, owner: Option<&str>) -> BloodRequest {
        BloodRequest {
            id: id.to_string(),
            donation_point: point.to_string(),
            blood_type: blood_type.to_string(),
            user_id: owner.map(str::to_string),
            ..BloodRequest::default()
        }
    }

    fn viewer(id: &str, role: Role) -> CurrentUser {
        CurrentUser {
            id: id.to_string(),
            name: "Viewer".to_string(),
            role,
            email: None,
            phone_number: None,
            blood_type: None,
            address: None,
            status: None,
        }
    }

    #[test]
    fn decodes_numeric_quantity_and_populated_owner() {
        let parsed: BloodRequest = serde_json::from_str(
            r#"{
                "_id":"r1","patient_name":"Ali","blood_type":"O-","quantity":3,
                "user_id":{"_id":"u5","name":"Hospital"},"done_status":"complete",
                "request_date":"2025-04-02T10:00:00.000Z","contact_number":599111222
            }"#,
        )
        .expect("request");

        assert_eq!(parsed.quantity, "3");
        assert_eq!(parsed.contact_number, "599111222");
        assert_eq!(parsed.user_id.as_deref(), Some("u5"));
        assert!(parsed.is_complete());
        assert_eq!(parsed.request_day(), "2025-04-02");
    }

    #[test]
    fn unknown_done_status_is_open() {
        assert_eq!(DoneStatus::parse("pending"), DoneStatus::NonComplete);
        assert_eq!(DoneStatus::parse("Complete"), DoneStatus::Complete);
        assert_eq!(
            serde_json::to_value(DoneStatus::NonComplete).expect("json"),
            "non complete"
        );
    }

    #[test]
    fn admins_and_owners_manage_requests() {
        let owned = request("r1", "", "A+", Some("u1"));
        assert!(can_manage_request(Some(&viewer("u1", Role::Donor)), &owned));
        assert!(can_manage_request(Some(&viewer("u9", Role::Admin)), &owned));
        assert!(!can_manage_request(Some(&viewer("u9", Role::Hospital)), &owned));
        assert!(!can_manage_request(None, &owned));
        assert!(!can_manage_request(
            Some(&viewer("u1", Role::Patient)),
            &request("r2", "", "A+", None)
        ));
    }

    #[test]
    fn board_filter_is_case_insensitive() {
        let requests = vec![
            request("r1", "Rafidia Hospital", "AB+", None),
            request("r2", "Najah Hospital", "ab+", None),
            request("r3", "Rafidia Hospital", "O-", None),
        ];

        let ids: Vec<_> = filter_requests(&requests, "rafidia", "AB+")
            .into_iter()
            .map(|request| request.id)
            .collect();
        assert_eq!(ids, ["r1"]);
        assert_eq!(filter_requests(&requests, "", "ab+").len(), 2);
        assert_eq!(filter_requests(&requests, " ", "").len(), 3);
    }

    #[test]
    fn latest_open_skips_completed() {
        let mut done = request("r1", "", "A+", None);
        done.done_status = DoneStatus::Complete;
        let requests = vec![done, request("r2", "", "A+", None), request("r3", "", "B+", None)];

        let ids: Vec<_> = latest_open(&requests, 1).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["r2"]);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = RequestPage {
            requests: Vec::new(),
            total_requests: 25,
        };
        assert_eq!(page.total_pages(12), 3);
        assert_eq!(RequestPage::default().total_pages(12), 1);
    }

    #[test]
    fn form_validation_checks_quantity() {
        let mut form = RequestForm {
            patient_name: "Ali".to_string(),
            blood_type: "O-".to_string(),
            quantity: "2".to_string(),
            donation_point: "Rafidia".to_string(),
            contact_number: "0599".to_string(),
            ..RequestForm::default()
        };
        assert!(form.validate().is_ok());

        form.quantity = "two".to_string();
        assert!(form.validate().is_err());
        form.quantity = "0".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn form_prefill_trims_timestamp() {
        let mut existing = request("r1", "Rafidia", "A+", None);
        existing.request_date = "2025-05-01T00:00:00Z".to_string();
        assert_eq!(RequestForm::from_request(&existing).request_date, "2025-05-01");
    }
}
