use serde_json::json;
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{method, path, header, body_json};

use health_profile_cell::{ProfileController, ProfileTab};
use shared_models::ToastKind;
use shared_utils::test_utils::{MockApiResponses, TestSession};

#[tokio::test]
async fn test_mount_loads_profile() {
    let mock_server = MockServer::start().await;
    let user = TestSession::default();

    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .and(header("Authorization", user.bearer().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "profile": MockApiResponses::profile(&user.user_id, "female")
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (ctx, toasts) = user.context(&mock_server.uri());
    let mut controller = ProfileController::new(ctx);
    controller.mount().await;

    let profile = controller.profile().unwrap();
    assert_eq!(profile.user_id.as_deref(), Some(user.user_id.as_str()));
    assert_eq!(profile.personal_info.gender.as_deref(), Some("female"));
    assert_eq!(profile.personal_info.age, Some(34.0));
    assert!(toasts.is_empty());
    assert!(!controller.is_loading());
}

#[tokio::test]
async fn test_missing_profile_shows_server_error() {
    let mock_server = MockServer::start().await;
    let user = TestSession::default();

    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .respond_with(ResponseTemplate::new(404).set_body_json(
            MockApiResponses::error_response("Profile not found"),
        ))
        .mount(&mock_server)
        .await;

    let (ctx, toasts) = user.context(&mock_server.uri());
    let mut controller = ProfileController::new(ctx);
    controller.mount().await;

    assert!(controller.profile().is_none());
    let toast = toasts.last().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Profile not found");
}

#[tokio::test]
async fn test_submit_puts_changes_then_reloads() {
    let mock_server = MockServer::start().await;
    let user = TestSession::default();

    let mut updated = MockApiResponses::profile(&user.user_id, "male");
    updated["personal_info"]["blood_type"] = json!("B+");
    updated["personal_info"]["weight_kg"] = json!(82.5);

    Mock::given(method("PUT"))
        .and(path("/user/profile"))
        .and(header("Authorization", user.bearer().as_str()))
        .and(body_json(json!({
            "personal_info": {"blood_type": "B+", "weight_kg": 82.5},
            "lifestyle": {"exercise_frequency": "weekly"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Profile updated successfully"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "profile": updated
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (ctx, toasts) = user.context(&mock_server.uri());
    let mut controller = ProfileController::new(ctx);
    controller.switch_tab(ProfileTab::Edit);
    controller.form.blood_type = "B+".to_string();
    controller.form.weight_kg = "82.5".to_string();
    controller.form.exercise_frequency = "weekly".to_string();

    assert!(controller.submit().await);

    assert_eq!(toasts.drain()[0].message, "Profile updated successfully");
    assert_eq!(controller.form.blood_type, "");
    assert_eq!(controller.active_tab(), ProfileTab::View);
    let profile = controller.profile().unwrap();
    assert_eq!(profile.personal_info.blood_type.as_deref(), Some("B+"));
    assert_eq!(profile.personal_info.weight_kg, Some(82.5));
}

#[tokio::test]
async fn test_blank_form_never_calls_server() {
    let mock_server = MockServer::start().await;
    let user = TestSession::default();

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (ctx, toasts) = user.context(&mock_server.uri());
    let mut controller = ProfileController::new(ctx);
    controller.form.height_cm = "   ".to_string();

    assert!(!controller.submit().await);
    assert_eq!(toasts.last().unwrap().message, "No updates provided");
}

#[tokio::test]
async fn test_rejected_update_keeps_draft() {
    let mock_server = MockServer::start().await;
    let user = TestSession::default();

    Mock::given(method("PUT"))
        .and(path("/user/profile"))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            MockApiResponses::error_response("Profile update failed: read-only"),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (ctx, toasts) = user.context(&mock_server.uri());
    let mut controller = ProfileController::new(ctx);
    controller.switch_tab(ProfileTab::Edit);
    controller.form.allergies = "latex".to_string();

    assert!(!controller.submit().await);
    assert_eq!(toasts.last().unwrap().message, "Profile update failed: read-only");
    assert_eq!(controller.form.allergies, "latex");
    assert_eq!(controller.active_tab(), ProfileTab::Edit);
}
