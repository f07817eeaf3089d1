use assert_matches::assert_matches;
use serde_json::json;
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{method, path, header};

use auth_cell::{AuthController, Route};
use dashboard_cell::{Dashboard, Section};
use medication_cell::MedicationController;
use medsage_integration_tests::TestWorkspace;
use report_cell::ReportController;
use shared_models::AppError;
use shared_utils::test_utils::{MockApiResponses, TestSession};
use womens_health_cell::WomensHealthController;

#[tokio::test]
async fn test_login_track_medication_then_logout() {
    let mock_server = MockServer::start().await;
    let workspace = TestWorkspace::new(&mock_server.uri()).unwrap();

    let auth = MockApiResponses::auth_response("jane@example.com", "Jane Doe");
    let token = auth["token"].as_str().unwrap().to_string();
    let bearer = format!("Bearer {}", token);

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/medication/active"))
        .and(header("Authorization", bearer.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "medications": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/medication/add"))
        .and(header("Authorization", bearer.as_str()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "medication": MockApiResponses::medication("Metformin")
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Sign in and persist the session to disk.
    let mut sessions = workspace.sessions().unwrap();
    let mut login = AuthController::new(&workspace.config, workspace.toasts.clone());
    login.login_form.email = "jane@example.com".to_string();
    login.login_form.password = "password123".to_string();
    assert_eq!(login.submit(&mut sessions).await, Some(Route::Dashboard));
    assert_eq!(workspace.toast_messages(), vec!["Welcome back, Jane Doe!"]);

    // A later invocation finds the stored session.
    let restored = workspace.sessions().unwrap().bootstrap().expect("session on disk");
    assert_eq!(restored.token, token);

    let mut dashboard =
        Dashboard::open(workspace.config.clone(), Some(restored), workspace.toasts.clone()).unwrap();
    assert_eq!(dashboard.greeting(), "Welcome back, Jane Doe");

    let mut medications = MedicationController::new(dashboard.open_section(Section::Medications));
    medications.mount().await;
    medications.form.name = "Metformin".to_string();
    medications.form.dosage = "500mg".to_string();
    medications.form.frequency = "twice_daily".to_string();
    assert!(medications.submit().await);
    assert_eq!(medications.medications().len(), 1);

    // Logging out clears the file; the next run is signed out.
    let mut sessions = workspace.sessions().unwrap();
    assert_eq!(sessions.logout().unwrap(), Route::Login);

    let after = workspace.sessions().unwrap().bootstrap();
    assert!(after.is_none());
    assert_matches!(
        Dashboard::open(workspace.config.clone(), after, workspace.toasts.clone()),
        Err(AppError::NotSignedIn)
    );
}

#[tokio::test]
async fn test_rejected_file_never_reaches_server() {
    let mock_server = MockServer::start().await;
    let workspace = TestWorkspace::new(&mock_server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/report/upload"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut sessions = workspace.sessions().unwrap();
    sessions
        .persist(&TestSession::default().to_session())
        .unwrap();

    let mut dashboard = Dashboard::open(
        workspace.config.clone(),
        workspace.sessions().unwrap().bootstrap(),
        workspace.toasts.clone(),
    )
    .unwrap();

    let mut reports = ReportController::new(dashboard.open_section(Section::Reports));
    reports.form.name = "Setup script".to_string();
    assert!(!reports.select_file("install.exe", vec![0; 64]));
    assert!(!reports.submit().await);

    assert_eq!(
        workspace.toast_messages(),
        vec![
            "File type not allowed. Allowed: PDF, JPG, JPEG, PNG, BMP, TIFF, DOCX, DOC",
            "Please select a file",
        ]
    );
}

#[tokio::test]
async fn test_sections_share_one_session() {
    let mock_server = MockServer::start().await;
    let workspace = TestWorkspace::new(&mock_server.uri()).unwrap();
    let user = TestSession::default();

    for endpoint in ["/womens-health/periods", "/womens-health/symptoms"] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(header("Authorization", user.bearer().as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let mut dashboard =
        Dashboard::open(workspace.config.clone(), Some(user.to_session()), workspace.toasts.clone())
            .unwrap();

    let mut womens_health = WomensHealthController::new(dashboard.open_section(Section::WomensHealth));
    womens_health.mount().await;

    assert!(womens_health.periods().is_empty());
    assert!(womens_health.symptoms().is_empty());
    assert!(workspace.toast_messages().is_empty());
}
