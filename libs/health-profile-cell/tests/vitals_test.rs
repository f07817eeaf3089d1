use serde_json::json;
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{method, path, header, body_json, query_param};

use health_profile_cell::{VitalsController, VitalsTab};
use shared_models::ToastKind;
use shared_utils::test_utils::{MockApiResponses, TestSession};

#[tokio::test]
async fn test_mount_loads_vitals_and_score() {
    let mock_server = MockServer::start().await;
    let user = TestSession::default();

    Mock::given(method("GET"))
        .and(path("/health/vitals"))
        .and(query_param("days", "30"))
        .and(header("Authorization", user.bearer().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "vitals": [
                MockApiResponses::vital_signs("118/76", 64),
                {"blood_pressure": "130/85", "heart_rate": "88", "timestamp": "2024-03-02T08:00:00"}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/health/score"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "health_score": {"score": 78, "rating": "Good"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (ctx, toasts) = user.context(&mock_server.uri());
    let mut controller = VitalsController::new(ctx);
    controller.mount().await;

    assert!(toasts.is_empty());
    assert_eq!(controller.vitals().len(), 2);
    assert_eq!(controller.vitals()[1].heart_rate, Some(88.0));
    assert_eq!(controller.vitals()[1].recorded_at.as_deref(), Some("2024-03-02T08:00:00"));
    assert_eq!(controller.score().unwrap().score, Some(78.0));
}

#[tokio::test]
async fn test_score_failure_does_not_hide_vitals() {
    let mock_server = MockServer::start().await;
    let user = TestSession::default();

    Mock::given(method("GET"))
        .and(path("/health/vitals"))
        .and(query_param("days", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "vitals": [MockApiResponses::vital_signs("120/80", 70)]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/health/score"))
        .respond_with(ResponseTemplate::new(500).set_body_json(
            MockApiResponses::error_response("System not initialized"),
        ))
        .mount(&mock_server)
        .await;

    let (ctx, toasts) = user.context(&mock_server.uri());
    let mut controller = VitalsController::new(ctx).with_days(7);
    controller.mount().await;

    assert_eq!(controller.vitals().len(), 1);
    assert!(controller.score().is_none());
    let messages: Vec<_> = toasts.drain().into_iter().map(|t| t.message).collect();
    assert_eq!(messages, vec!["System not initialized"]);
}

#[tokio::test]
async fn test_record_vitals_then_refetch() {
    let mock_server = MockServer::start().await;
    let user = TestSession::default();

    Mock::given(method("POST"))
        .and(path("/health/vital-signs"))
        .and(header("Authorization", user.bearer().as_str()))
        .and(body_json(json!({
            "blood_pressure": "122/81",
            "heart_rate": 72,
            "temperature": null,
            "blood_sugar": 5.4,
            "bmi": null
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "message": "Vitals recorded"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/health/vitals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "vitals": [MockApiResponses::vital_signs("122/81", 72)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/health/score"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "health_score": 81
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (ctx, toasts) = user.context(&mock_server.uri());
    let mut controller = VitalsController::new(ctx);
    controller.form.blood_pressure = "122 / 81".to_string();
    controller.form.heart_rate = "72".to_string();
    controller.form.blood_sugar = "5.4".to_string();

    assert!(controller.submit().await);

    let toast = toasts.last().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, "Vitals recorded");
    assert_eq!(controller.form.heart_rate, "");
    assert_eq!(controller.active_tab(), VitalsTab::History);
    assert_eq!(controller.vitals().len(), 1);
    assert_eq!(controller.score().unwrap().score, Some(81.0));
}

#[tokio::test]
async fn test_malformed_blood_pressure_never_calls_server() {
    let mock_server = MockServer::start().await;
    let user = TestSession::default();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (ctx, toasts) = user.context(&mock_server.uri());
    let mut controller = VitalsController::new(ctx);
    controller.form.blood_pressure = "high".to_string();
    controller.form.heart_rate = "72".to_string();

    assert!(!controller.submit().await);
    assert_eq!(toasts.last().unwrap().message, "Blood pressure must look like 120/80");
    assert_eq!(controller.form.heart_rate, "72");
    assert_eq!(controller.active_tab(), VitalsTab::Record);
}
