//! Contact form model.
//!
//! The form is a placeholder: submitting it is intercepted and nothing is
//! sent anywhere.

/// Fields shown in the contact form, in display order
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Jane Doe",
            ContactField::Email => "jane@doe.dev",
            ContactField::Message => "Tell me about your project...",
        }
    }

    /// `type` attribute for `<input>` fields; `None` for the textarea
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            ContactField::Name => Some("text"),
            ContactField::Email => Some("email"),
            ContactField::Message => None,
        }
    }

    /// DOM id used to tie the label to its control
    pub fn dom_id(&self) -> &'static str {
        match self {
            ContactField::Name => "contact-name",
            ContactField::Email => "contact-email",
            ContactField::Message => "contact-message",
        }
    }
}

/// Rows for the message textarea
pub const MESSAGE_ROWS: u32 = 5;

/// Disclaimer shown under the submit control
pub const DISCLAIMER: &str = "This is a demo form. Hook it to your email or backend as needed.";

/// What a submission did
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitOutcome {
    /// Default navigation was suppressed and no request was made
    Suppressed,
}

/// Handles a form submission. Always [`SubmitOutcome::Suppressed`]; the
/// caller must also cancel the browser's default action.
pub fn submit() -> SubmitOutcome {
    tracing::debug!("contact form submitted; placeholder form, nothing sent");
    SubmitOutcome::Suppressed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_in_display_order() {
        let labels: Vec<_> = ContactField::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["Name", "Email", "Message"]);
    }

    #[test]
    fn email_field_uses_email_input() {
        assert_eq!(ContactField::Email.input_type(), Some("email"));
        assert_eq!(ContactField::Message.input_type(), None);
    }

    #[test]
    fn submit_is_always_suppressed() {
        for _ in 0..3 {
            assert_eq!(submit(), SubmitOutcome::Suppressed);
        }
    }
}
