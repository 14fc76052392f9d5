use super::*;

#[test]
fn task_status_round_trips_through_str() {
    for status in [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed] {
        let s = status.as_str();
        let back = TaskStatus::from_str(s).unwrap();
        assert_eq!(back, status);
    }
}

#[test]
fn task_status_from_str_rejects_unknown_values() {
    assert_eq!(TaskStatus::from_str("pending"), None);
    assert_eq!(TaskStatus::from_str("DONE"), None);
    assert_eq!(TaskStatus::from_str(""), None);
}

#[test]
fn task_status_serializes_screaming_snake_case() {
    assert_eq!(serde_json::to_string(&TaskStatus::Pending).unwrap(), r#""PENDING""#);
    assert_eq!(serde_json::to_string(&TaskStatus::InProgress).unwrap(), r#""IN_PROGRESS""#);
    assert_eq!(serde_json::to_string(&TaskStatus::Completed).unwrap(), r#""COMPLETED""#);
}

#[test]
fn task_response_uses_camel_case_field_names() {
    let task = TaskResponse {
        id: Uuid::new_v4(),
        user_id: "u-123".into(),
        title: "Test Task".into(),
        status: TaskStatus::Pending,
    };
    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json.get("userId").and_then(|v| v.as_str()), Some("u-123"));
    assert_eq!(json.get("status").and_then(|v| v.as_str()), Some("PENDING"));
    assert!(json.get("user_id").is_none());
}

#[test]
fn task_with_user_serializes_absent_user_as_null() {
    let task = TaskWithUserResponse {
        id: Uuid::new_v4(),
        user_id: "u-123".into(),
        title: "Test Task".into(),
        status: TaskStatus::Pending,
        user: None,
    };
    let json = serde_json::to_value(&task).unwrap();
    // The field must be present and explicitly null, not omitted.
    assert!(json.get("user").is_some());
    assert!(json.get("user").unwrap().is_null());
}

#[test]
fn task_with_user_embeds_user_object() {
    let task = TaskWithUserResponse {
        id: Uuid::new_v4(),
        user_id: "u-123".into(),
        title: "Test Task".into(),
        status: TaskStatus::Completed,
        user: Some(UserResponse { id: "u-123".into(), name: "John Doe".into(), email: None }),
    };
    let json = serde_json::to_value(&task).unwrap();
    let user = json.get("user").unwrap();
    assert_eq!(user.get("id").and_then(|v| v.as_str()), Some("u-123"));
    assert_eq!(user.get("name").and_then(|v| v.as_str()), Some("John Doe"));
    // Absent email is omitted from the embedded object.
    assert!(user.get("email").is_none());
}

#[test]
fn user_response_round_trips_with_and_without_email() {
    let with_email = UserResponse { id: "u-1".into(), name: "A".into(), email: Some("a@example.com".into()) };
    let json = serde_json::to_string(&with_email).unwrap();
    let back: UserResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(back, with_email);

    let bare: UserResponse = serde_json::from_str(r#"{"id":"u-2","name":"B"}"#).unwrap();
    assert_eq!(bare.email, None);
}

#[test]
fn register_request_deserializes_camel_case() {
    let req: RegisterRequest =
        serde_json::from_str(r#"{"userName":"alice","email":"alice@example.com","password":"secret"}"#).unwrap();
    assert_eq!(req.user_name, "alice");
    assert_eq!(req.email, "alice@example.com");
    assert_eq!(req.password, "secret");
}

#[test]
fn create_profile_request_serializes_camel_case() {
    let req = CreateProfileRequest { auth_id: "42".into(), username: "alice".into(), email: "a@example.com".into() };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json.get("authId").and_then(|v| v.as_str()), Some("42"));
    assert_eq!(json.get("username").and_then(|v| v.as_str()), Some("alice"));
}

#[test]
fn identity_response_has_no_password_field() {
    let identity = IdentityResponse { id: Uuid::new_v4(), user_name: "alice".into(), email: "a@example.com".into() };
    let json = serde_json::to_value(&identity).unwrap();
    assert!(json.get("password").is_none());
    assert_eq!(json.get("userName").and_then(|v| v.as_str()), Some("alice"));
}

#[test]
fn update_task_status_request_parses_status() {
    let req: UpdateTaskStatusRequest = serde_json::from_str(r#"{"status":"COMPLETED"}"#).unwrap();
    assert_eq!(req.status, TaskStatus::Completed);
}
