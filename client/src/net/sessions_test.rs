use super::*;

#[test]
fn session_endpoint_formats_expected_path() {
    assert_eq!(session_endpoint(999), "api/session/999");
}

#[test]
fn participate_endpoint_formats_expected_path() {
    assert_eq!(participate_endpoint(1, 13), "api/session/1/participate/13");
}
