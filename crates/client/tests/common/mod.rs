//! Shared fixtures for the client integration tests.
//!
//! [`RecordingBackend`] is an in-memory [`PortalBackend`] that records every
//! call; [`spawn_portal`] starts a small axum server that stands in for the
//! real REST backend.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use jobport_client::{ClientError, PortalBackend};
use jobport_core::endpoints::{
    ADD_ACADEME_PERSONAL_INFORMATION, CHECK_PERSONAL_INFORMATION_STATUS,
    GET_EMPLOYER_PERSONAL_INFORMATION, GET_JOBSEEKER_STUDENT_ALL_DATA, GET_USER_INFO,
};
use jobport_core::types::Payload;
use jobport_core::wizard::WizardSession;

pub const TOKEN: &str = "tok";

/// `Authorization` header reqwest sends for [`TOKEN`] with no password.
pub const EXPECTED_AUTH: &str = "Basic dG9rOg==";

// ---------------------------------------------------------------------------
// Form fixtures
// ---------------------------------------------------------------------------

pub fn payload(value: Value) -> Payload {
    value.as_object().cloned().expect("fixture must be an object")
}

/// Set every field of `fields` on the active step.
pub fn fill(session: &mut WizardSession, fields: Value) {
    for (field, value) in payload(fields) {
        session.set_field(&field, value).expect("session has steps");
    }
}

pub fn address() -> Value {
    json!({
        "country": "Philippines",
        "province": "Abra",
        "municipality": "Bangued",
        "barangay": "Calaba",
    })
}

fn merged(mut base: Value, extra: Value) -> Value {
    if let (Some(base), Value::Object(extra)) = (base.as_object_mut(), extra) {
        base.extend(extra);
    }
    base
}

pub fn jobseeker_personal_info() -> Value {
    merged(
        address(),
        json!({
            "first_name": "Ana",
            "last_name": "Reyes",
            "email": "ana@example.com",
            "contact_number": "09171234567",
            "date_of_birth": "1998-04-12",
            "sex": "Female",
            "civil_status": "Single",
            "employment_status": "Unemployed",
            "is_ofw": false,
        }),
    )
}

pub fn employer_personal_info() -> Value {
    merged(
        address(),
        json!({
            "first_name": "Ramon",
            "last_name": "Cruz",
            "email": "hr@acme.ph",
            "contact_number": "+639171234567",
            "company_name": "Acme Builders",
            "employer_type": "Private",
            "company_type": "Corporation",
            "industry": "Construction",
            "total_work_force": "Small (10-99)",
            "position": "HR Manager",
        }),
    )
}

pub fn academe_personal_info() -> Value {
    merged(
        address(),
        json!({
            "first_name": "Liza",
            "last_name": "Santos",
            "email": "registrar@asist.edu.ph",
            "contact_number": "09181234567",
            "institution_name": "Abra State Institute",
            "institution_type": "State University/College",
            "position": "Registrar",
        }),
    )
}

pub fn job_preference() -> Value {
    json!({
        "job_title": "Electrician",
        "preferred_country": "Philippines",
        "preferred_province": "Abra",
        "preferred_municipality": "Bangued",
        "salary_from": 15000,
        "salary_to": 20000,
    })
}

pub fn language_proficiency() -> Value {
    json!({
        "language": "Ilocano",
        "read": true,
        "write": true,
        "speak": true,
        "understand": true,
    })
}

pub fn educational_background() -> Value {
    json!({
        "education_level": "College",
        "school_name": "Abra State Institute",
        "course": "BS Electrical Engineering",
        "date_from": "2015-06-01",
        "date_to": "2019-04-30",
    })
}

pub fn other_skills() -> Value {
    json!({"skills": ["Electrician", "Driver"]})
}

// ---------------------------------------------------------------------------
// In-memory backend
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Recorded {
    responses: HashMap<String, Value>,
    failing: HashSet<String>,
    gets: Vec<String>,
    posts: Vec<(String, Payload)>,
}

/// In-memory backend recording every request.
///
/// Unconfigured `GET`s return `null`; the user-info and status endpoints
/// start out as an empty account.
#[derive(Clone)]
pub struct RecordingBackend {
    inner: Arc<Mutex<Recorded>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        let backend = Self {
            inner: Arc::default(),
        };
        backend
            .respond(GET_USER_INFO, json!({}))
            .respond(
                CHECK_PERSONAL_INFORMATION_STATUS,
                json!({"has_personal_info": false}),
            )
    }

    pub fn respond(self, path: &str, body: Value) -> Self {
        self.inner
            .lock()
            .unwrap()
            .responses
            .insert(path.to_string(), body);
        self
    }

    /// Make every call to `path` fail with a 503.
    pub fn fail(self, path: &str) -> Self {
        self.inner.lock().unwrap().failing.insert(path.to_string());
        self
    }

    pub fn recover(&self, path: &str) {
        self.inner.lock().unwrap().failing.remove(path);
    }

    pub fn gets(&self) -> Vec<String> {
        self.inner.lock().unwrap().gets.clone()
    }

    pub fn posts(&self) -> Vec<(String, Payload)> {
        self.inner.lock().unwrap().posts.clone()
    }

    pub fn post_paths(&self) -> Vec<String> {
        self.posts().into_iter().map(|(path, _)| path).collect()
    }

    fn unavailable() -> ClientError {
        ClientError::Api {
            status: 503,
            body: "service unavailable".to_string(),
        }
    }
}

impl PortalBackend for RecordingBackend {
    async fn get_json(&self, path: &str) -> Result<Value, ClientError> {
        let mut state = self.inner.lock().unwrap();
        state.gets.push(path.to_string());
        if state.failing.contains(path) {
            return Err(Self::unavailable());
        }
        Ok(state.responses.get(path).cloned().unwrap_or(Value::Null))
    }

    async fn post_json(&self, path: &str, payload: &Payload) -> Result<Value, ClientError> {
        let mut state = self.inner.lock().unwrap();
        state.posts.push((path.to_string(), payload.clone()));
        if state.failing.contains(path) {
            return Err(Self::unavailable());
        }
        Ok(json!({"message": "saved"}))
    }
}

// ---------------------------------------------------------------------------
// Fake HTTP portal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

struct PortalState {
    failing: Vec<&'static str>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl PortalState {
    fn record(&self, method: &Method, uri: &Uri, headers: &HeaderMap, body: Option<Value>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            authorization: headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body,
        });
    }
}

/// Handle to a running fake portal.
pub struct FakePortal {
    pub base_url: String,
    state: Arc<PortalState>,
}

impl FakePortal {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn user_info(
    State(portal): State<Arc<PortalState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Json<Value> {
    portal.record(&method, &uri, &headers, None);
    Json(json!({
        "personal_information": [{"id": 11, "first_name": "Ana", "last_name": "Reyes"}],
        "job_preference": [],
        "other_skills": [{"skills": ["Driver"]}],
    }))
}

async fn personal_info_status(
    State(portal): State<Arc<PortalState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Json<Value> {
    portal.record(&method, &uri, &headers, None);
    Json(json!({"has_personal_info": true}))
}

async fn all_data(
    State(portal): State<Arc<PortalState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Json<Value> {
    portal.record(&method, &uri, &headers, None);
    Json(json!({
        "personal_information": [{"first_name": "Ana", "is_ofw": false, "middle_name": null}],
        "other_skills": [{"skills": ["Driver", "Electrician"]}],
        "work_experience": [],
    }))
}

async fn not_json(
    State(portal): State<Arc<PortalState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> &'static str {
    portal.record(&method, &uri, &headers, None);
    "<html>maintenance</html>"
}

/// Every `POST` lands here. Paths listed as failing answer 500; the academe
/// endpoint acknowledges with an empty body.
async fn record_post(
    State(portal): State<Arc<PortalState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    portal.record(&method, &uri, &headers, Some(body));
    let path = uri.path();
    if portal.failing.iter().any(|failing| *failing == path) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response();
    }
    if path == ADD_ACADEME_PERSONAL_INFORMATION {
        return StatusCode::NO_CONTENT.into_response();
    }
    Json(json!({"message": "saved"})).into_response()
}

/// Start a fake portal on an ephemeral local port.
pub async fn spawn_portal(failing: &[&'static str]) -> FakePortal {
    let state = Arc::new(PortalState {
        failing: failing.to_vec(),
        requests: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route(GET_USER_INFO, get(user_info))
        .route(CHECK_PERSONAL_INFORMATION_STATUS, get(personal_info_status))
        .route(GET_JOBSEEKER_STUDENT_ALL_DATA, get(all_data))
        .route(GET_EMPLOYER_PERSONAL_INFORMATION, get(not_json))
        .fallback(record_post)
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake portal");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake portal");
    });

    FakePortal {
        base_url: format!("http://{addr}"),
        state,
    }
}
