//! Contact form submission. Only presence is checked.
use serde::{Deserialize, Serialize};

use crate::error::{ContactError, ContactField};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Turn the draft into a message if every field has content.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::MissingFields`] listing every empty field.
    pub fn submit(&self) -> Result<ContactMessage, ContactError> {
        let missing: Vec<ContactField> = [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }
        Ok(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
