use serde_json::json;
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{method, path, header, body_json};

use shared_utils::test_utils::{MockApiResponses, TestSession};
use womens_health_cell::{FlowLevel, WomensHealthController, WomensHealthTab};

#[tokio::test]
async fn test_mount_loads_both_histories() {
    let mock_server = MockServer::start().await;
    let user = TestSession::default();

    Mock::given(method("GET"))
        .and(path("/womens-health/periods"))
        .and(header("Authorization", user.bearer().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "periods": [
                MockApiResponses::period("2024-01-03"),
                MockApiResponses::period("2024-01-31")
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/womens-health/symptoms"))
        .and(header("Authorization", user.bearer().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "symptoms": [MockApiResponses::symptom("cramps", 6)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (ctx, toasts) = user.context(&mock_server.uri());
    let mut controller = WomensHealthController::new(ctx);
    controller.mount().await;

    assert_eq!(controller.periods().len(), 2);
    assert_eq!(controller.symptoms()[0].severity, 6);
    assert!(!controller.is_loading());
    assert!(toasts.is_empty());
}

#[tokio::test]
async fn test_one_failed_history_does_not_hide_the_other() {
    let mock_server = MockServer::start().await;
    let user = TestSession::default();

    Mock::given(method("GET"))
        .and(path("/womens-health/periods"))
        .respond_with(ResponseTemplate::new(500).set_body_json(
            MockApiResponses::error_response("database unavailable"),
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/womens-health/symptoms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "symptoms": [MockApiResponses::symptom("bloating", 3)]
        })))
        .mount(&mock_server)
        .await;

    let (ctx, toasts) = user.context(&mock_server.uri());
    let mut controller = WomensHealthController::new(ctx);
    controller.mount().await;

    assert!(controller.periods().is_empty());
    assert_eq!(controller.symptoms().len(), 1);
    let drained = toasts.drain();
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].message, "database unavailable");
}

#[tokio::test]
async fn test_period_logged() {
    let mock_server = MockServer::start().await;
    let user = TestSession::default();

    Mock::given(method("POST"))
        .and(path("/womens-health/period"))
        .and(body_json(json!({
            "start_date": "2024-03-01",
            "flow": "light"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "message": "Period logged successfully",
            "period": {
                "id": "p-1",
                "start_date": "2024-03-01",
                "end_date": null,
                "flow": "light",
                "notes": null,
                "logged_at": "2024-03-01T08:00:00"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (ctx, toasts) = user.context(&mock_server.uri());
    let mut controller = WomensHealthController::new(ctx);
    controller.period_form.start_date = "2024-03-01".to_string();
    controller.period_form.flow = "light".to_string();

    assert!(controller.submit_period().await);
    assert_eq!(controller.periods().len(), 1);
    assert_eq!(controller.periods()[0].flow, FlowLevel::Light);
    assert!(controller.period_form.start_date.is_empty());
    assert_eq!(toasts.last().unwrap().message, "Period logged successfully");
}

#[tokio::test]
async fn test_out_of_range_severity_is_not_sent() {
    let mock_server = MockServer::start().await;
    let user = TestSession::default();

    Mock::given(method("POST"))
        .and(path("/womens-health/symptom"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (ctx, toasts) = user.context(&mock_server.uri());
    let mut controller = WomensHealthController::new(ctx);
    controller.symptom_form.symptom_type = "fatigue".to_string();
    controller.symptom_form.severity = "12".to_string();

    assert!(!controller.submit_symptom().await);
    assert!(controller.symptoms().is_empty());
    assert!(toasts.last().unwrap().is_error());
    assert_eq!(controller.symptom_form.severity, "12");
}

#[tokio::test]
async fn test_symptom_draft_survives_tab_switch() {
    let mock_server = MockServer::start().await;
    let user = TestSession::default();

    Mock::given(method("POST"))
        .and(path("/womens-health/period"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "period": MockApiResponses::period("2024-04-02")
        })))
        .mount(&mock_server)
        .await;

    let (ctx, _) = user.context(&mock_server.uri());
    let mut controller = WomensHealthController::new(ctx);

    controller.switch_tab(WomensHealthTab::Symptoms);
    controller.symptom_form.symptom_type = "headache".to_string();
    controller.symptom_form.severity = "7".to_string();

    controller.switch_tab(WomensHealthTab::Period);
    controller.period_form.start_date = "2024-04-02".to_string();
    assert!(controller.submit_period().await);

    controller.switch_tab(WomensHealthTab::Symptoms);
    assert_eq!(controller.symptom_form.symptom_type, "headache");
    assert_eq!(controller.symptom_form.severity, "7");
}

#[tokio::test]
async fn test_symptom_logged() {
    let mock_server = MockServer::start().await;
    let user = TestSession::default();

    Mock::given(method("POST"))
        .and(path("/womens-health/symptom"))
        .and(body_json(json!({
            "symptom_type": "cramps",
            "severity": 8,
            "notes": "Mostly evenings"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "symptom": MockApiResponses::symptom("cramps", 8)
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (ctx, _) = user.context(&mock_server.uri());
    let mut controller = WomensHealthController::new(ctx);
    controller.symptom_form.symptom_type = "cramps".to_string();
    controller.symptom_form.severity = "8".to_string();
    controller.symptom_form.notes = "Mostly evenings".to_string();

    assert!(controller.submit_symptom().await);
    assert_eq!(controller.symptoms().len(), 1);
    assert_eq!(controller.symptom_form.severity, "5");
}
