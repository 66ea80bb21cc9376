//! Primitive field validators — reusable, pure, stateless rules that the
//! entity schemas compose.
//!
//! Absent optional fields are "not provided", never failures; empty strings
//! in optional fields are normalized to absent before any rule runs.

use chrono::NaiveDate;
use email_address::EmailAddress;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::FieldError;

// Field length bounds shared across entity schemas.
pub const MAX_NAME_LEN: usize = 80;
pub const MAX_TITLE_LEN: usize = 120;
pub const MAX_FIELD_LEN: usize = 160;
pub const MAX_BODY_LEN: usize = 2000;
pub const MAX_BULLET_LEN: usize = 300;
pub const MAX_BULLETS: usize = 20;
pub const MAX_TAG_LEN: usize = 60;
pub const MAX_TAGS: usize = 30;
pub const MAX_YEARS: u8 = 60;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").unwrap());

static SLUG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

/// Normalizes an optional field: trims, and treats empty as "not provided".
pub fn normalize_opt(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_valid_email(value: &str) -> bool {
    EmailAddress::is_valid(value.trim())
}

pub fn is_valid_url(value: &str) -> bool {
    URL_RE.is_match(value.trim())
}

pub fn is_valid_slug(value: &str) -> bool {
    SLUG_RE.is_match(value)
}

/// Loose phone check: at least 7 digits once formatting characters are
/// stripped, and nothing outside digits, whitespace, and `+ - ( ) .`.
pub fn is_valid_phone(value: &str) -> bool {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    let clean = value
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '-' | '(' | ')' | '.'));
    digits >= 7 && clean
}

/// Parses a CV date in `YYYY-MM` or `YYYY-MM-DD` form. Returns `None` for
/// anything else — callers report the error, parsing never fails loudly.
pub fn parse_cv_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok()
}

// ────────────────────────────────────────────────────────────────────────────
// Check helpers — push a FieldError and keep going
// ────────────────────────────────────────────────────────────────────────────

/// Required text field: non-empty after trimming, within `max` characters.
pub fn check_required_text(value: &str, max: usize, path: &str, errors: &mut Vec<FieldError>) {
    if is_blank(value) {
        errors.push(FieldError::new(path, "must not be empty"));
    } else {
        check_max_len(value, max, path, errors);
    }
}

pub fn check_max_len(value: &str, max: usize, path: &str, errors: &mut Vec<FieldError>) {
    if value.trim().chars().count() > max {
        errors.push(FieldError::new(
            path,
            format!("must be at most {max} characters"),
        ));
    }
}

/// Optional text field: only the length bound applies when provided.
pub fn check_opt_text(value: &Option<String>, max: usize, path: &str, errors: &mut Vec<FieldError>) {
    if let Some(text) = normalize_opt(value) {
        check_max_len(text, max, path, errors);
    }
}

pub fn check_email(value: &str, path: &str, errors: &mut Vec<FieldError>) {
    if is_blank(value) {
        errors.push(FieldError::new(path, "must not be empty"));
    } else if !is_valid_email(value) {
        errors.push(FieldError::new(path, "must be a valid email address"));
    }
}

pub fn check_opt_email(value: &Option<String>, path: &str, errors: &mut Vec<FieldError>) {
    if let Some(email) = normalize_opt(value) {
        if !is_valid_email(email) {
            errors.push(FieldError::new(path, "must be a valid email address"));
        }
    }
}

pub fn check_opt_url(value: &Option<String>, path: &str, errors: &mut Vec<FieldError>) {
    if let Some(url) = normalize_opt(value) {
        if !is_valid_url(url) {
            errors.push(FieldError::new(path, "must be a valid http(s) URL"));
        }
    }
}

pub fn check_opt_slug(value: &Option<String>, path: &str, errors: &mut Vec<FieldError>) {
    if let Some(slug) = normalize_opt(value) {
        if !is_valid_slug(slug) {
            errors.push(FieldError::new(
                path,
                "must contain only lowercase letters, digits, and hyphens",
            ));
        }
    }
}

pub fn check_opt_phone(value: &Option<String>, path: &str, errors: &mut Vec<FieldError>) {
    if let Some(phone) = normalize_opt(value) {
        if !is_valid_phone(phone) {
            errors.push(FieldError::new(path, "must be a valid phone number"));
        }
    }
}
