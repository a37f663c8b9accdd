/// Copy shown when the visitor submits without typing anything.
pub const EMPTY_EMAIL_MESSAGE: &str = "Please enter your email address.";

#[derive(Debug, Clone)]
pub struct SignupEmail(String);

impl SignupEmail {
    /// Trims surrounding whitespace and rejects empty input. Anything
    /// non-empty is accepted as-is; the backend owns real address checks.
    pub fn parse(s: String) -> Result<SignupEmail, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            Err(EMPTY_EMAIL_MESSAGE.to_string())
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn inner(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for SignupEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SignupEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
