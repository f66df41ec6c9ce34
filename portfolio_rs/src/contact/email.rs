//! Email address check used by the contact form and the newsletter box.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Result of checking an email field.
///
/// An empty field is reported separately from a malformed one so the form
/// can say "required" instead of "invalid".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailCheck {
    Empty,
    Invalid,
    Valid,
}

impl EmailCheck {
    pub fn is_valid(self) -> bool {
        self == EmailCheck::Valid
    }
}

/// Checks `input` after trimming surrounding whitespace.
pub fn check_email(input: &str) -> EmailCheck {
    let input = input.trim();
    if input.is_empty() {
        EmailCheck::Empty
    } else if EMAIL_REGEX.is_match(input) {
        EmailCheck::Valid
    } else {
        EmailCheck::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_inputs() {
        assert_eq!(check_email("a@b.com"), EmailCheck::Valid);
        assert_eq!(check_email("a@b"), EmailCheck::Invalid);
        assert_eq!(check_email(""), EmailCheck::Empty);
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(check_email("   \t"), EmailCheck::Empty);
        assert_eq!(check_email("  jane@firm.co.ke  "), EmailCheck::Valid);
    }

    #[test]
    fn rejects_common_typos() {
        for input in [
            "jane.firm.com",
            "jane@",
            "@firm.com",
            "jane@@firm.com",
            "jane doe@firm.com",
            "jane@firm.",
        ] {
            assert_eq!(check_email(input), EmailCheck::Invalid, "{input}");
        }
    }
}
