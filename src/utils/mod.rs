//! Utility functions and helpers.

pub mod http;

use url::Url;

/// Extract the domain from a URL string.
pub fn get_domain(url_str: &str) -> Option<String> {
    Url::parse(url_str)
        .ok()
        .and_then(|u| u.host_str().map(|s| s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_domain() {
        assert_eq!(
            get_domain("https://unstop.com/hackathons/x"),
            Some("unstop.com".to_string())
        );
        assert_eq!(
            get_domain("https://sub.example.com:8080/path"),
            Some("sub.example.com".to_string())
        );
        assert_eq!(get_domain("not a url"), None);
    }
}
