use super::*;

#[test]
fn profile_error_to_status_maps_not_found() {
    let err = ProfileError::NotFound("u-1".into());
    assert_eq!(profile_error_to_status(err), StatusCode::NOT_FOUND);
}

#[test]
fn profile_error_to_status_maps_validation() {
    let err = ProfileError::Validation("username must not be empty");
    assert_eq!(profile_error_to_status(err), StatusCode::BAD_REQUEST);
}

#[test]
fn profile_error_to_status_maps_db() {
    let err = ProfileError::Db(sqlx::Error::PoolClosed);
    assert_eq!(profile_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}
