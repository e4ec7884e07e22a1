use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::error::PikaApiError;

/// 3 to 16 characters of letters, digits and underscore, the Mojang
/// username rules both networks enforce.
static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{3,16}$").unwrap());

/// Collects every failing constraint of an options object before raising,
/// so the caller sees all problems at once instead of the first one.
#[derive(Debug, Default)]
pub(crate) struct Violations {
    messages: Vec<String>,
}

impl Violations {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn username(&mut self, field: &str, value: &str) {
        if !USERNAME_REGEX.is_match(value) {
            self.messages.push(format!(
                "{field} must be 3-16 letters, digits or underscores, got {value:?}"
            ));
        }
    }

    pub(crate) fn min(&mut self, field: &str, value: u32, min: u32) {
        if value < min {
            self.messages
                .push(format!("{field} must be at least {min}, got {value}"));
        }
    }

    pub(crate) fn uuid(&mut self, field: &str, value: &str) {
        if Uuid::try_parse(value).is_err() {
            self.messages
                .push(format!("{field} must be a valid UUID, got {value:?}"));
        }
    }

    pub(crate) fn non_empty(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.messages.push(format!("{field} must not be empty"));
        }
    }

    pub(crate) fn finish(self) -> Result<(), PikaApiError> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(PikaApiError::Validation(self.messages))
        }
    }
}
