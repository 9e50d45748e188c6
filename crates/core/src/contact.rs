use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContactError {
    #[error("please enter your name")]
    EmptyName,
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("please enter a message")]
    EmptyMessage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactField {
    pub label: &'static str,
    pub name: &'static str,
    pub kind: FieldKind,
}

pub const CONTACT_FIELDS: [ContactField; 3] = [
    ContactField {
        label: "Name",
        name: "name",
        kind: FieldKind::Text,
    },
    ContactField {
        label: "Email",
        name: "email",
        kind: FieldKind::Text,
    },
    ContactField {
        label: "Message",
        name: "message",
        kind: FieldKind::TextArea,
    },
];

/// Raw form input, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A validated message. It stays on this machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

impl ContactDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> &str {
        match name {
            "name" => &self.name,
            "email" => &self.email,
            "message" => &self.message,
            _ => "",
        }
    }

    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = value,
            "email" => self.email = value,
            "message" => self.message = value,
            _ => {}
        }
    }

    /// Trim every field and check it is usable.
    ///
    /// # Errors
    ///
    /// Returns the first `ContactError` found, in form order.
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactError::EmptyName);
        }
        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        let message = self.message.trim();
        if message.is_empty() {
            return Err(ContactError::EmptyMessage);
        }

        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

impl ContactMessage {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}
