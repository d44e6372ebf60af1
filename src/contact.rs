use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::LazyLock};
use thiserror::Error;

// same shape the browser accepts for <input type="email">
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in your {0}")]
    MissingField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Your message is already on its way")]
    InFlight,
}

/// What a finished submission carries to the next hop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Wire form of the message, as a mail relay endpoint would receive it.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub id: u64,
    pub sender: String,
}

/// Local state of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    submitting: bool,
    pending: Option<ContactMessage>,
    sent: u64,
}

impl ContactForm {
    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.get(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Start a submission. Nothing changes unless the form is valid.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, ContactError> {
        if self.submitting {
            return Err(ContactError::InFlight);
        }
        self.validate()?;
        let msg = ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        self.submitting = true;
        self.pending = Some(msg.clone());
        Ok(msg)
    }

    /// Finish the in-flight submission: clear the fields and hand back the
    /// single confirmation for it.
    pub fn complete(&mut self) -> Option<Confirmation> {
        let msg = self.pending.take()?;
        self.submitting = false;
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.sent += 1;
        Some(Confirmation {
            id: self.sent,
            sender: msg.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada Lovelace".to_string());
        form.set(Field::Email, "ada@example.com".to_string());
        form.set(Field::Message, "Hello there".to_string());
        form
    }

    #[test]
    fn test_starts_empty() {
        let form = ContactForm::default();
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
        assert!(!form.submitting());
    }

    #[test]
    fn test_submit_cycle() {
        let mut form = filled();
        let msg = form.begin_submit().expect("filled form should submit");
        assert!(form.submitting());
        assert_eq!(msg.email, "ada@example.com");

        let confirmation = form.complete().expect("should confirm");
        assert_eq!(confirmation.id, 1);
        assert_eq!(confirmation.sender, "Ada Lovelace");
        assert!(!form.submitting());
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");

        // exactly one notice per submission
        assert!(form.complete().is_none());
    }

    #[test]
    fn test_confirmation_ids_increase() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let first = form.complete().unwrap();

        form.set(Field::Name, "Grace Hopper".to_string());
        form.set(Field::Email, "grace@example.com".to_string());
        form.set(Field::Message, "Hi".to_string());
        form.begin_submit().unwrap();
        let second = form.complete().unwrap();
        assert_eq!(second.id, first.id + 1);
        assert_eq!(second.sender, "Grace Hopper");
    }

    #[test]
    fn test_missing_field_blocks_submit() {
        for field in [Field::Name, Field::Email, Field::Message] {
            let mut form = filled();
            form.set(field, String::new());
            assert_eq!(form.begin_submit(), Err(ContactError::MissingField(field)));
            assert!(!form.submitting());
            assert!(form.complete().is_none());
        }
    }

    #[test]
    fn test_blank_counts_as_missing() {
        let mut form = filled();
        form.set(Field::Message, "   \n".to_string());
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField(Field::Message))
        );
    }

    #[test]
    fn test_invalid_email() {
        let mut form = filled();
        for bad in ["ada", "ada@", "@example.com", "ada@@example.com", "ada @example.com"] {
            form.set(Field::Email, bad.to_string());
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
        form.set(Field::Email, "ada@localhost".to_string());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(ContactError::InFlight));
        assert!(form.complete().is_some());
    }

    #[test]
    fn test_message_is_trimmed() {
        let mut form = filled();
        form.set(Field::Name, "  Ada  ".to_string());
        let msg = form.begin_submit().unwrap();
        assert_eq!(msg.name, "Ada");
    }

    #[test]
    fn test_message_payload_json() {
        let msg = filled().begin_submit().unwrap();
        let json = msg.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Ada Lovelace");
        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["message"], "Hello there");

        let back: ContactMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingField(Field::Email).to_string(),
            "Please fill in your email"
        );
    }
}
