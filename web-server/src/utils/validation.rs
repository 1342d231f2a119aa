//! Input validation helpers
//!
//! Centralized limits and checks for the contact form. Limits mirror the
//! editorial-side rules; the serving path revalidates because nothing
//! upstream guards a public form.

// ── Text length limits ──────────────────────────────────────────────

/// Minimum contact message length
pub const MIN_MESSAGE_LEN: usize = 10;

/// Maximum contact message length
pub const MAX_MESSAGE_LEN: usize = 5000;

// ── Validation helpers ──────────────────────────────────────────────

/// Required string: present after trimming.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Basic email shape check: `local@domain.tld` with non-empty parts and
/// no whitespace or second `@` anywhere. Same acceptance set as the
/// pattern `^[^\s@]+@[^\s@]+\.[^\s@]+$` - `foo@bar` fails (no TLD),
/// `foo@bar.com` passes.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Message length within the allowed window, in characters.
pub fn message_len_ok(message: &str) -> bool {
    let len = message.chars().count();
    (MIN_MESSAGE_LEN..=MAX_MESSAGE_LEN).contains(&len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_tld() {
        assert!(!is_valid_email("foo@bar"));
        assert!(is_valid_email("foo@bar.com"));
    }

    #[test]
    fn email_rejects_malformed() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("foo"));
        assert!(!is_valid_email("@bar.com"));
        assert!(!is_valid_email("foo@"));
        assert!(!is_valid_email("foo@bar."));
        assert!(!is_valid_email("foo@.com"));
        assert!(!is_valid_email("foo bar@baz.com"));
        assert!(!is_valid_email("foo@bar@baz.com"));
    }

    #[test]
    fn email_accepts_subdomains() {
        assert!(is_valid_email("hello@mail.emberandoak.coffee"));
    }

    #[test]
    fn message_length_window() {
        assert!(!message_len_ok(&"a".repeat(9)));
        assert!(message_len_ok(&"a".repeat(10)));
        assert!(message_len_ok(&"a".repeat(5000)));
        assert!(!message_len_ok(&"a".repeat(5001)));
    }

    #[test]
    fn presence_trims_whitespace() {
        assert!(!is_present("   "));
        assert!(is_present(" Maya "));
    }
}
