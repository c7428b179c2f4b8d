//! Contact form state.
//!
//! Three required fields, client-side only. Submission is simulated: the
//! browser default is suppressed, an acknowledgment notice is shown, and the
//! fields reset. No payload leaves the page.

/// The editable fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Update exactly one field, leaving the others untouched.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Clear all three fields, regardless of contents.
    pub fn reset(&mut self) {
        *self = ContactForm::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_touches_only_the_named_field() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Maria".into());
        assert_eq!(form.name, "Maria");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");

        form.set(Field::Message, "Hi there".into());
        assert_eq!(form.name, "Maria");
        assert_eq!(form.message, "Hi there");
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = ContactForm {
            name: "Maria".into(),
            email: "maria@example.com".into(),
            message: "Package question".into(),
        };
        assert!(!form.is_empty());
        form.reset();
        assert!(form.is_empty());
        assert_eq!(form, ContactForm::default());
    }
}
