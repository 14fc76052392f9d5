use super::*;

#[test]
fn registration_error_to_status_maps_validation() {
    let err = RegistrationError::Validation("userName must not be empty");
    assert_eq!(registration_error_to_status(err), StatusCode::BAD_REQUEST);
}

#[test]
fn registration_error_to_status_maps_db() {
    let err = RegistrationError::Db(sqlx::Error::PoolClosed);
    assert_eq!(registration_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}
