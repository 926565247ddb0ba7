use std::fmt;

pub const EMAIL_TLD_MIN: usize = 2;
pub const EMAIL_TLD_MAX: usize = 6;

pub const SUCCESS_NOTICE: &str = "Your message has been sent!";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Every failing rule, in field order. Submission proceeds only when
    /// the list comes back empty.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut failures = Vec::new();
        if self.name.trim().is_empty() {
            failures.push(FieldError::EmptyName);
        }
        if !is_valid_email(&self.email) {
            failures.push(FieldError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            failures.push(FieldError::EmptyMessage);
        }
        failures
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    EmptyName,
    InvalidEmail,
    EmptyMessage,
}

impl FieldError {
    pub fn notice(self) -> &'static str {
        match self {
            FieldError::EmptyName => "Please enter your name",
            FieldError::InvalidEmail => "Please enter a valid email address",
            FieldError::EmptyMessage => "Please enter a message",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notice())
    }
}

impl std::error::Error for FieldError {}

/// Shape check for `localpart@domain.tld`: localpart of letters, digits,
/// dots, underscores and dashes; domain of letters, digits, dots and
/// dashes; a final dot-separated segment of 2 to 6 ASCII letters.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || !local.chars().all(is_local_char) {
        return false;
    }
    let Some((head, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if head.is_empty() || !head.chars().all(is_domain_char) {
        return false;
    }
    if tld.len() < EMAIL_TLD_MIN || tld.len() > EMAIL_TLD_MAX {
        return false;
    }
    tld.chars().all(|ch| ch.is_ascii_alphabetic())
}

fn is_local_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-')
}

fn is_domain_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-')
}
