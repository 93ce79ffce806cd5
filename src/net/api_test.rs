use super::*;

// =============================================================
// Base URL normalization
// =============================================================

#[test]
fn trailing_slashes_are_stripped() {
    assert_eq!(
        normalize_base_url("http://localhost:8080/api/v1/".to_owned()),
        "http://localhost:8080/api/v1"
    );
    assert_eq!(
        normalize_base_url("http://localhost:8080/api/v1//".to_owned()),
        "http://localhost:8080/api/v1"
    );
}

#[test]
fn clean_base_url_is_unchanged() {
    assert_eq!(
        normalize_base_url("https://plm.example.com/api/v1".to_owned()),
        "https://plm.example.com/api/v1"
    );
}

#[test]
fn joining_base_and_path_yields_one_slash() {
    let base = normalize_base_url("http://localhost:8080/api/v1/".to_owned());
    let url = format!("{base}{}", crate::config::paths::LOGIN);
    assert_eq!(url, "http://localhost:8080/api/v1/auth/login");
}
