//! Heuristic contact extraction. Pure and infallible; used when the LLM
//! cannot extract contact details.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::candidate::CandidateProfile;

/// Lines containing any of these are headings, not names.
const NAME_STOPLIST: &[&str] = &["resume", "cv", "curriculum vitae", "profile", "summary"];
const NAME_SCAN_LINES: usize = 5;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").expect("valid regex")
});

/// E.164 caps a full international number at 15 digits.
const MAX_PHONE_DIGITS: usize = 15;

/// Tried in order; the first pattern with a match wins.
static PHONE_RES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        // +1 555-123-4567, +44 20 7946 0958, +91 98765 43210
        Regex::new(r"\+\d{1,3}[\s.\-]?\(?\d{1,5}\)?(?:[\s.\-]?\d{2,5}){1,3}\b")
            .expect("valid regex"),
        // (555) 123-4567, 555.123.4567, 555-123-4567
        Regex::new(r"(?:\(\d{3}\)\s?|\b\d{3}[\s.\-])\d{3}[\s.\-]\d{4}\b").expect("valid regex"),
        Regex::new(r"\b\d{10}\b").expect("valid regex"),
    ]
});

pub fn extract_contact(text: &str) -> CandidateProfile {
    CandidateProfile {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
    }
}

/// First of the leading non-empty lines that looks like "Firstname Lastname".
pub fn extract_name(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(NAME_SCAN_LINES)
        .find(|line| looks_like_name(line))
        .map(str::to_string)
}

fn looks_like_name(line: &str) -> bool {
    let lower = line.to_lowercase();
    if NAME_STOPLIST.iter().any(|s| lower.contains(s)) {
        return false;
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    if !(2..=4).contains(&words.len()) {
        return false;
    }

    words
        .iter()
        .all(|w| w.chars().next().is_some_and(char::is_uppercase))
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RES
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| cap_phone_digits(m.as_str()).to_string())
}

/// Drops trailing digit groups until at most `MAX_PHONE_DIGITS` digits remain,
/// so a number written after the phone on the same line is not absorbed.
fn cap_phone_digits(phone: &str) -> &str {
    let mut digits = 0;
    let mut end = 0;
    let mut chars = phone.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !c.is_ascii_digit() {
            continue;
        }
        digits += 1;
        let group_ends = !chars.peek().is_some_and(|(_, next)| next.is_ascii_digit());
        if group_ends {
            if digits > MAX_PHONE_DIGITS {
                break;
            }
            end = i + c.len_utf8();
        }
    }
    &phone[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str =
        "John Smith\nSoftware Engineer\nEmail: j.smith@example.com\nPhone: 555-123-4567";

    #[test]
    fn test_sample_resume_header() {
        let profile = extract_contact(SAMPLE);
        assert_eq!(profile.name.as_deref(), Some("John Smith"));
        assert_eq!(profile.email.as_deref(), Some("j.smith@example.com"));
        assert_eq!(profile.phone.as_deref(), Some("555-123-4567"));
    }

    #[test]
    fn test_stoplist_lines_are_skipped() {
        let text = "Curriculum Vitae\nProfessional Summary\nMaria Garcia Lopez\n";
        assert_eq!(extract_name(text).as_deref(), Some("Maria Garcia Lopez"));
    }

    #[test]
    fn test_stoplist_is_substring_match() {
        // "Resume Of" contains "resume"; "Cvetan Ivanov" contains "cv".
        let text = "Resume Of\nCvetan Ivanov\nAlan Turing";
        assert_eq!(extract_name(text).as_deref(), Some("Alan Turing"));
    }

    #[test]
    fn test_name_only_scans_first_five_lines() {
        let text = "one\ntwo\nthree\nfour\nfive\nGrace Hopper";
        assert_eq!(extract_name(text), None);
    }

    #[test]
    fn test_blank_lines_do_not_count_toward_scan() {
        let text = "\n\n   \nlower case line\nGrace Hopper";
        assert_eq!(extract_name(text).as_deref(), Some("Grace Hopper"));
    }

    #[test]
    fn test_name_word_count_bounds() {
        assert_eq!(extract_name("Madonna"), None);
        assert_eq!(extract_name("A B C D E"), None);
        assert_eq!(
            extract_name("Ada King Lovelace Byron").as_deref(),
            Some("Ada King Lovelace Byron")
        );
    }

    #[test]
    fn test_lowercase_token_rejects_line() {
        assert_eq!(extract_name("Ludwig van Beethoven"), None);
    }

    #[test]
    fn test_name_is_returned_verbatim() {
        assert_eq!(extract_name("  JANE  DOE ").as_deref(), Some("JANE  DOE"));
    }

    #[test]
    fn test_international_phone_preferred() {
        let text = "Home: 555-123-4567\nMobile: +44 20 7946 0958";
        assert_eq!(extract_phone(text).as_deref(), Some("+44 20 7946 0958"));
    }

    #[test]
    fn test_parenthesized_domestic_phone() {
        assert_eq!(
            extract_phone("Call (555) 123-4567 today").as_deref(),
            Some("(555) 123-4567")
        );
    }

    #[test]
    fn test_bare_ten_digit_run() {
        assert_eq!(extract_phone("tel 5551234567").as_deref(), Some("5551234567"));
    }

    #[test]
    fn test_name_line_with_phone_is_not_a_name() {
        let text = "John Smith 555-123-4567\nEngineer";
        assert_eq!(extract_name(text), None);
        let text = "Jane Doe | 555-123-4567\nJane Doe\nEngineer";
        assert_eq!(extract_name(text).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_name_line_with_year_is_not_a_name() {
        assert_eq!(extract_name("John Smith | 2024\nEngineer"), None);
    }

    #[test]
    fn test_hyphen_and_apostrophe_names_accepted() {
        assert_eq!(
            extract_name("Mary-Jane O'Neil").as_deref(),
            Some("Mary-Jane O'Neil")
        );
    }

    #[test]
    fn test_international_phone_stops_before_trailing_number() {
        assert_eq!(
            extract_phone("Mobile: +44 20 7946 0958 2019 graduate").as_deref(),
            Some("+44 20 7946 0958")
        );
    }

    #[test]
    fn test_international_phone_respects_digit_cap() {
        assert_eq!(cap_phone_digits("+44 20 7946 0958 2019"), "+44 20 7946 0958");
        assert_eq!(cap_phone_digits("+1 555-123-4567"), "+1 555-123-4567");
    }

    #[test]
    fn test_domestic_phone_not_matched_inside_longer_digit_run() {
        let text = "Order 12555-123-45678, call 555-123-4567";
        assert_eq!(extract_phone(text).as_deref(), Some("555-123-4567"));
    }

    #[test]
    fn test_unseparated_ten_digits_use_bare_pattern() {
        assert!(PHONE_RES[1].find("tel 5551234567").is_none());
        assert!(PHONE_RES[2].find("tel 5551234567").is_some());
    }

    #[test]
    fn test_long_digit_run_is_not_a_phone() {
        assert_eq!(extract_phone("Account 123456789012345"), None);
    }

    #[test]
    fn test_missing_fields_are_none() {
        let profile = extract_contact("nothing useful here");
        assert_eq!(profile, CandidateProfile::default());
    }

    #[test]
    fn test_first_email_wins() {
        let text = "a@first.io and b@second.org";
        assert_eq!(extract_email(text).as_deref(), Some("a@first.io"));
    }
}
