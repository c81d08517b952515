//! Integration tests for the reqwest backend against a local fake portal.

mod common;

use assert_matches::assert_matches;
use serde_json::{json, Value};

use common::{fill, jobseeker_personal_info, payload, spawn_portal, EXPECTED_AUTH, TOKEN};
use jobport_client::{
    ClientError, HttpBackend, NextOutcome, PortalBackend, SubmissionGateway, WizardRunner,
};
use jobport_core::endpoints::{
    ADD_ACADEME_PERSONAL_INFORMATION, ADD_JOBSEEKER_STUDENT_PERSONAL_INFORMATION,
    ADD_JOB_PREFERENCE, GET_EMPLOYER_PERSONAL_INFORMATION, GET_USER_INFO,
};
use jobport_core::roles::Role;
use jobport_core::wizard::WizardSession;

fn backend(base_url: &str) -> HttpBackend {
    HttpBackend::new(base_url.to_string(), TOKEN.to_string())
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_sends_token_as_basic_auth() {
    let portal = spawn_portal(&[]).await;

    let info = backend(&portal.base_url).get_json(GET_USER_INFO).await.unwrap();
    assert_eq!(info["personal_information"][0]["first_name"], "Ana");

    let requests = portal.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].authorization.as_deref(), Some(EXPECTED_AUTH));
}

#[tokio::test]
async fn post_sends_payload_as_json() {
    let portal = spawn_portal(&[]).await;
    let data = payload(json!({"first_name": "Ana", "is_ofw": false}));

    let ack = backend(&portal.base_url)
        .post_json(ADD_JOBSEEKER_STUDENT_PERSONAL_INFORMATION, &data)
        .await
        .unwrap();
    assert_eq!(ack, json!({"message": "saved"}));

    let requests = portal.requests();
    assert_eq!(requests[0].path, ADD_JOBSEEKER_STUDENT_PERSONAL_INFORMATION);
    assert_eq!(requests[0].authorization.as_deref(), Some(EXPECTED_AUTH));
    assert_eq!(requests[0].body, Some(Value::Object(data)));
}

#[tokio::test]
async fn empty_acknowledgement_is_null() {
    let portal = spawn_portal(&[]).await;
    let ack = backend(&portal.base_url)
        .post_json(ADD_ACADEME_PERSONAL_INFORMATION, &payload(json!({})))
        .await
        .unwrap();
    assert_eq!(ack, Value::Null);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn error_status_keeps_status_and_body() {
    let portal = spawn_portal(&[ADD_JOB_PREFERENCE]).await;
    let result = backend(&portal.base_url)
        .post_json(ADD_JOB_PREFERENCE, &payload(json!({"job_title": "Welder"})))
        .await;
    assert_matches!(
        result,
        Err(ClientError::Api { status: 500, ref body }) if body == "database unavailable"
    );
}

#[tokio::test]
async fn html_body_is_a_decode_error() {
    let portal = spawn_portal(&[]).await;
    let result = backend(&portal.base_url)
        .get_json(GET_EMPLOYER_PERSONAL_INFORMATION)
        .await;
    assert_matches!(
        result,
        Err(ClientError::Decode { ref path, .. }) if path == GET_EMPLOYER_PERSONAL_INFORMATION
    );
}

#[tokio::test]
async fn unreachable_backend_is_a_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = backend(&format!("http://{addr}")).get_json(GET_USER_INFO).await;
    assert_matches!(result, Err(ClientError::Request(_)));
}

// ---------------------------------------------------------------------------
// Runner over HTTP
// ---------------------------------------------------------------------------

#[tokio::test]
async fn runner_prefills_and_stops_on_failed_write() {
    let portal = spawn_portal(&[ADD_JOB_PREFERENCE]).await;
    let gateway = SubmissionGateway::new(backend(&portal.base_url));
    let mut runner = WizardRunner::new(WizardSession::for_role(Role::Jobseeker), gateway);

    let report = runner.prefill().await.unwrap();
    assert!(report.has_personal_info);
    assert_eq!(
        runner.session().active_data().unwrap().get("first_name"),
        Some(&json!("Ana"))
    );

    fill(runner.session_mut(), jobseeker_personal_info());
    assert_eq!(runner.next().await.unwrap(), NextOutcome::Advanced { index: 1 });

    fill(runner.session_mut(), json!({"job_title": "Electrician", "preferred_country": "Japan"}));
    assert_matches!(runner.next().await, Err(ClientError::Api { status: 500, .. }));
    assert_eq!(runner.session().active_index(), 1);

    let posted: Vec<String> = portal
        .requests()
        .into_iter()
        .filter(|r| r.method == "POST")
        .map(|r| r.path)
        .collect();
    assert_eq!(
        posted,
        vec![ADD_JOBSEEKER_STUDENT_PERSONAL_INFORMATION, ADD_JOB_PREFERENCE]
    );
}
