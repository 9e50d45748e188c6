use folio_core::{ContactDraft, ContactError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sent {
        name: String,
    },
    Invalid(ContactError),
}

impl ContactStatus {
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            ContactStatus::Idle => None,
            ContactStatus::Sent { name } => Some(format!("Thanks, {name}! Your message is ready.")),
            ContactStatus::Invalid(err) => Some(err.to_string()),
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            ContactStatus::Invalid(_) => "form-status error",
            _ => "form-status",
        }
    }
}

#[must_use]
pub fn submit_contact(draft: &ContactDraft) -> ContactStatus {
    match draft.validate() {
        Ok(message) => ContactStatus::Sent {
            name: message.name().to_string(),
        },
        Err(err) => ContactStatus::Invalid(err),
    }
}
