//! Synchronous form validation for create/update modals.
//!
//! Forms validate on submit attempt and report one message per field.
//! `can_submit` is a cheaper predicate used to enable the submit control;
//! it only checks required fields and can pass while `validate` fails.

pub mod category;
pub mod customer;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

pub use category::CategoryForm;
pub use customer::{CustomerField, CustomerForm};

/// Field key to message. Keys are the camelCase wire names.
pub type FieldErrors = BTreeMap<&'static str, String>;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static TIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{9}$").unwrap());

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Tax identification number: exactly nine digits.
pub fn is_valid_tin(value: &str) -> bool {
    TIN_PATTERN.is_match(value)
}

/// Length in characters, not bytes.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Trimmed value, or `None` when blank.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
