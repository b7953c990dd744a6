//! Contact form model.
//!
//! The form validates into an [`Inquiry`] and hands it to an
//! [`InquirySink`]. Delivery to a real submission service is not wired up;
//! [`LogSink`] records the inquiry and drops it.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::ContactError;

// ASCII whitespace class: the workspace builds regex without Unicode tables.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^[:space:]@]+@[^[:space:]@]+\.[^[:space:]@]+$").expect("valid email regex")
});

/// Property category offered in the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum PropertyType {
    #[default]
    Residential,
    Commercial,
    Industrial,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [Self::Residential, Self::Commercial, Self::Industrial];

    pub fn label(self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Industrial => "Industrial",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PropertyType {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ContactError::UnknownPropertyType(s.to_string()))
    }
}

/// Raw form fields as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub property_type: PropertyType,
    pub message: String,
}

impl ContactForm {
    /// Trim and check the fields.
    ///
    /// Name is required, email must look like an address, message may be
    /// empty.
    pub fn validate(&self) -> Result<Inquiry, ContactError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !EMAIL_RE.is_match(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }

        Ok(Inquiry {
            name: name.to_string(),
            email: email.to_string(),
            property_type: self.property_type,
            message: self.message.trim().to_string(),
        })
    }
}

/// Validated consultation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub property_type: PropertyType,
    pub message: String,
}

/// Destination for validated inquiries.
pub trait InquirySink {
    fn submit(&self, inquiry: &Inquiry) -> Result<(), ContactError>;
}

/// Sink that logs the inquiry as JSON and sends nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl InquirySink for LogSink {
    fn submit(&self, inquiry: &Inquiry) -> Result<(), ContactError> {
        let json = serde_json::to_string(inquiry)
            .map_err(|err| ContactError::Unavailable(err.to_string()))?;
        log::info!("inquiry received: {json}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    fn form(name: &str, email: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let mut f = form("  John Doe ", " john@example.com ");
        f.property_type = PropertyType::Commercial;
        f.message = "\nFlat roof leaking\n".to_string();

        assert_eq!(
            f.validate(),
            Ok(Inquiry {
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                property_type: PropertyType::Commercial,
                message: "Flat roof leaking".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(
            form("   ", "john@example.com").validate(),
            Err(ContactError::MissingName)
        );
    }

    #[test]
    fn test_email_pattern_compiles() {
        assert!(EMAIL_RE.is_match("sue@example.com"));
        assert!(EMAIL_RE.is_match("sue.o'neill+survey@mail.example.co.uk"));
    }

    #[test]
    fn test_missing_email() {
        for email in ["", "   ", "\t\n"] {
            let err = form("John", email).validate().unwrap_err();
            assert_eq!(err, ContactError::MissingEmail);
            assert_eq!(err.to_string(), "please enter your email address");
        }
    }

    #[test]
    fn test_invalid_email() {
        for email in [
            "john",
            "john@",
            "john@example",
            "jo hn@example.com",
            "jo\thn@example.com",
            "a@b@c.com",
        ] {
            assert_eq!(
                form("John", email).validate(),
                Err(ContactError::InvalidEmail(email.trim().to_string())),
                "{email:?}"
            );
        }
    }

    #[test]
    fn test_property_type_parse() {
        assert_eq!("industrial".parse(), Ok(PropertyType::Industrial));
        assert_eq!("Residential".parse(), Ok(PropertyType::Residential));
        assert!("Agricultural".parse::<PropertyType>().is_err());
        assert_eq!(PropertyType::default(), PropertyType::Residential);
    }

    #[test]
    fn test_log_sink_accepts() {
        let inquiry = form("Sue", "sue@example.com").validate().unwrap();
        assert!(LogSink.submit(&inquiry).is_ok());
    }

    #[test]
    fn test_custom_sink_receives_inquiry() {
        struct Recording(RefCell<Vec<Inquiry>>);

        impl InquirySink for Recording {
            fn submit(&self, inquiry: &Inquiry) -> Result<(), ContactError> {
                self.0.borrow_mut().push(inquiry.clone());
                Ok(())
            }
        }

        let sink = Recording(RefCell::new(Vec::new()));
        let inquiry = form("Sue", "sue@example.com").validate().unwrap();
        sink.submit(&inquiry).unwrap();
        assert_eq!(sink.0.borrow().as_slice(), [inquiry]);
    }

    #[test]
    fn test_inquiry_json_shape() {
        let inquiry = form("Sue", "sue@example.com").validate().unwrap();
        let json = serde_json::to_value(&inquiry).unwrap();
        assert_eq!(json["property_type"], "Residential");
        assert_eq!(json["email"], "sue@example.com");
    }
}
