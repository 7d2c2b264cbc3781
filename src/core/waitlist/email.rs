//! Client-side email check.
//!
//! Accepts anything shaped like `local@domain.tld`: one `@`, no whitespace, and a
//! `.` inside the domain with at least one character on each side. The server is
//! authoritative; this only catches obvious typos before a network round trip.

/// Email validation error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Please enter your email address")]
    Empty,

    #[error("Please enter a valid email address")]
    Malformed,
}

/// Validate an email address exactly as typed.
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.is_empty() {
        return Err(EmailError::Empty);
    }
    if is_email_shaped(email) {
        Ok(())
    } else {
        Err(EmailError::Malformed)
    }
}

/// Matches `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(is_pattern_space) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Some dot must have a non-empty label on both sides.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// The `\s` class of browser regular expressions. Differs from
/// [`char::is_whitespace`]: includes U+FEFF, excludes U+0085.
fn is_pattern_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
