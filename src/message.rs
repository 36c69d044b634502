use crate::error::ValidationError;

/// Message being composed in the profile modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDraft {
    /// Profile the composer was opened for.
    pub recipient: u32,
    pub subject: String,
    pub body: String,
}

/// A draft that passed validation, with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub recipient: u32,
    pub subject: String,
    pub body: String,
}

impl MessageDraft {
    pub fn new(recipient: u32) -> Self {
        Self {
            recipient,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<Message, ValidationError> {
        let subject = self.subject.trim();
        if subject.is_empty() {
            return Err(ValidationError::MissingSubject);
        }
        let body = self.body.trim();
        if body.is_empty() {
            return Err(ValidationError::MissingBody);
        }
        Ok(Message {
            recipient: self.recipient,
            subject: subject.to_string(),
            body: body.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", "hello", ValidationError::MissingSubject)]
    #[case("   ", "hello", ValidationError::MissingSubject)]
    #[case("Invite", "", ValidationError::MissingBody)]
    #[case("Invite", " \n ", ValidationError::MissingBody)]
    fn rejects_blank_fields(#[case] subject: &str, #[case] body: &str, #[case] expected: ValidationError) {
        let draft = MessageDraft {
            recipient: 3,
            subject: subject.into(),
            body: body.into(),
        };
        assert_eq!(draft.validate(), Err(expected));
    }

    #[test]
    fn trims_valid_message() {
        let draft = MessageDraft {
            recipient: 3,
            subject: " Invite ".into(),
            body: "Let's build something.\n".into(),
        };
        let msg = draft.validate().unwrap();
        assert_eq!(msg.subject, "Invite");
        assert_eq!(msg.body, "Let's build something.");
        assert_eq!(msg.recipient, 3);
    }
}
