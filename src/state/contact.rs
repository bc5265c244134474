//! Contact form state: draft autosave, character counter, and validation.
//!
//! DESIGN
//! ======
//! The form moves `Empty/Restored -> Editing -> Submitted`. A failed submit
//! leaves it in `Editing` with field errors set; the draft and inputs stay
//! as typed. Every edit overwrites the stored draft; a successful submit
//! deletes it.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::consts::{
    DRAFT_STORAGE_KEY, ERR_DOB, ERR_EMAIL, ERR_MESSAGE, ERR_NAME, MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS,
};
use crate::util::persistence::{KeyValueStore, load_json, save_json};

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$"));

/// The four contact inputs, as persisted in `localStorage`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub dob: String,
    pub message: String,
}

impl ContactDraft {
    /// Rebuild a draft from a stored JSON payload.
    ///
    /// Only an object restores; each string field is taken on its own, and
    /// absent, `null` or non-string fields stay empty.
    pub fn from_stored(value: &Value) -> Option<Self> {
        let Value::Object(fields) = value else {
            return None;
        };
        let text = |key: &str| fields.get(key).and_then(Value::as_str).unwrap_or_default().to_owned();
        Some(Self {
            name: text("name"),
            email: text("email"),
            dob: text("dob"),
            message: text("message"),
        })
    }
}

/// Identifies one input of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Dob,
    Message,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Dob, Self::Message];

    /// Element id of the input.
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Dob => "dob",
            Self::Message => "message",
        }
    }

    /// Element id of the inline error slot.
    pub fn error_id(self) -> &'static str {
        match self {
            Self::Name => "err-name",
            Self::Email => "err-email",
            Self::Dob => "err-dob",
            Self::Message => "err-message",
        }
    }
}

impl ContactDraft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Dob => &self.dob,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Dob => self.dob = value,
            Field::Message => self.message = value,
        }
    }
}

/// Per-field validation messages; `None` means the field passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub dob: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.dob.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Dob => self.dob,
            Field::Message => self.message,
        }
    }
}

/// `String.prototype.trim`: Unicode whitespace plus the BOM.
fn js_trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Length as the browser counts it (UTF-16 code units).
fn js_len(s: &str) -> usize {
    s.encode_utf16().count()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.as_ref().map_or(false, |re| re.is_match(email))
}

/// Check every field independently.
///
/// # Errors
///
/// Returns all failing fields at once.
pub fn validate(draft: &ContactDraft) -> Result<(), FieldErrors> {
    let errors = FieldErrors {
        name: js_trim(&draft.name).is_empty().then_some(ERR_NAME),
        email: (!is_valid_email(&draft.email)).then_some(ERR_EMAIL),
        dob: draft.dob.is_empty().then_some(ERR_DOB),
        message: (js_len(js_trim(&draft.message)) < MESSAGE_MIN_CHARS).then_some(ERR_MESSAGE),
    };
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Counter text shown next to the message field, e.g. `(42/500)`.
pub fn char_count_label(message: &str) -> String {
    format!("({}/{MESSAGE_MAX_CHARS})", js_len(message))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Empty,
    Restored,
    Editing,
    Submitted,
}

/// Result of a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are on the form and nothing was sent.
    Rejected,
    /// Validation passed; the draft was cleared and the form reset.
    Sent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub errors: FieldErrors,
    pub phase: FormPhase,
}

impl ContactForm {
    /// Start from the stored draft, or empty if there is none or it does not
    /// parse.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        let stored = load_json::<Value>(store, DRAFT_STORAGE_KEY);
        match stored.as_ref().and_then(ContactDraft::from_stored) {
            Some(draft) => Self {
                draft,
                errors: FieldErrors::default(),
                phase: FormPhase::Restored,
            },
            None => Self::default(),
        }
    }

    /// Apply one input change and persist the whole draft.
    pub fn edit(&mut self, store: &impl KeyValueStore, field: Field, value: String) {
        self.draft.set(field, value);
        self.phase = FormPhase::Editing;
        if let Err(e) = save_json(store, DRAFT_STORAGE_KEY, &self.draft) {
            log::warn!("contact draft not saved: {e}");
        }
    }

    pub fn char_count(&self) -> String {
        char_count_label(&self.draft.message)
    }

    /// Validate and, on success, clear the stored draft and reset the form.
    pub fn submit(&mut self, store: &impl KeyValueStore) -> SubmitOutcome {
        self.errors = FieldErrors::default();
        match validate(&self.draft) {
            Err(errors) => {
                log::debug!("contact submit rejected: {errors:?}");
                self.errors = errors;
                self.phase = FormPhase::Editing;
                SubmitOutcome::Rejected
            }
            Ok(()) => {
                store.remove(DRAFT_STORAGE_KEY);
                self.draft = ContactDraft::default();
                self.phase = FormPhase::Submitted;
                log::info!("contact form submitted");
                SubmitOutcome::Sent
            }
        }
    }
}
