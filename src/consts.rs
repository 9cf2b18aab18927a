//! Project-wide constants.

/// Reset endpoint of the local test server, used when no override is given.
pub const DEFAULT_RESET_URL: &str = "http://localhost:8080/test/reset";

/// Content type sent with every reset request.
pub const CONTENT_TYPE_JSON: &str = "application/json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_targets_the_local_test_server() {
        assert!(DEFAULT_RESET_URL.starts_with("http://localhost:8080"));
        assert!(DEFAULT_RESET_URL.ends_with("/test/reset"));
    }

    #[test]
    fn content_type_is_json() {
        assert_eq!(CONTENT_TYPE_JSON, "application/json");
    }
}
