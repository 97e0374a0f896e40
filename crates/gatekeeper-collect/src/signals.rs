//! Headless-browser user-agent detection.

use std::sync::OnceLock;

use aho_corasick::AhoCorasick;

const HEADLESS_MARKERS: &[&str] = &["headless", "puppeteer", "playwright", "phantom"];

static HEADLESS_AC: OnceLock<AhoCorasick> = OnceLock::new();

fn headless_automaton() -> &'static AhoCorasick {
    HEADLESS_AC.get_or_init(|| {
        AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(HEADLESS_MARKERS)
            .expect("headless marker AC build failed")
    })
}

/// Case-insensitive match against known headless/automation browser names.
pub fn ua_contains_headless(user_agent: &str) -> bool {
    headless_automaton().is_match(user_agent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_headless_chrome() {
        assert!(ua_contains_headless(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) HeadlessChrome/120.0.0.0 Safari/537.36"
        ));
    }

    #[test]
    fn detects_each_marker_case_insensitively() {
        assert!(ua_contains_headless("PUPPETEER"));
        assert!(ua_contains_headless("something Playwright/1.40"));
        assert!(ua_contains_headless("PhantomJS/2.1.1"));
    }

    #[test]
    fn ordinary_browser_is_not_flagged() {
        assert!(!ua_contains_headless(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15"
        ));
        assert!(!ua_contains_headless(""));
    }
}
