use std::time::Duration;

use chrono::{DateTime, Datelike, Utc};

/// Stamped by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// How long the contact form pretends to be sending.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// How long the "message sent" notice stays up.
pub const NOTICE_DURATION: Duration = Duration::from_millis(5000);

pub fn build_time() -> Option<DateTime<Utc>> {
    parse_build_time(BUILD_TIME)
}

fn parse_build_time(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

pub fn copyright_year() -> Option<i32> {
    build_time().map(|t| t.year())
}

/// Address of the external chat assistant, baked in at compile time from
/// `PORTFOLIO_CHATBOT_URL`. Both the server and the WASM bundle must be
/// built with the same value so hydration matches.
pub fn chatbot_url() -> Option<&'static str> {
    option_env!("PORTFOLIO_CHATBOT_URL").filter(|url| !url.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_time_is_stamped() {
        let built = build_time().expect("build.rs should stamp an RFC 3339 time");
        assert!(built <= Utc::now());
        assert_eq!(copyright_year(), Some(built.year()));
    }

    #[test]
    fn test_parse_build_time() {
        let t = parse_build_time("2025-12-01T10:00:00+05:30").unwrap();
        assert_eq!(t.year(), 2025);
        assert!(parse_build_time("yesterday").is_none());
    }

    #[test]
    fn test_notice_outlasts_submit() {
        assert!(NOTICE_DURATION > SUBMIT_DELAY);
    }
}
