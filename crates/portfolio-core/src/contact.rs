//! Contact form mail handoff.
//!
//! Submitting the form composes a `mailto:` request addressed to a fixed
//! recipient with a fixed subject. The body carries the three fields as
//! `Field=value` lines, the way a `text/plain` form post encodes them.
//! Nothing is sent by this crate; the user's mail client takes over.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

use crate::content::profile::EMAIL;
use crate::error::Result;

pub const RECIPIENT: &str = EMAIL;
pub const SUBJECT: &str = "Portfolio Contact Form Submission";

/// Characters left as-is inside a mailto query value
const MAILTO_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'@');

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A required field was left blank
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Email does not look like `local@domain`
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

/// Values typed into the contact form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Same checks the browser enforces natively: every field required,
    /// email shaped like an address.
    pub fn validate(&self) -> std::result::Result<(), ContactError> {
        for (label, value) in self.fields() {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(label));
            }
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {}
            _ => return Err(ContactError::InvalidEmail(email.to_string())),
        }

        Ok(())
    }

    fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("Name", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Message", self.message.as_str()),
        ]
    }

    /// Validate and build the mail request
    pub fn to_request(&self) -> Result<MailtoRequest> {
        self.validate()?;
        Ok(MailtoRequest {
            recipient: RECIPIENT.to_string(),
            subject: SUBJECT.to_string(),
            fields: self
                .fields()
                .into_iter()
                .map(|(label, value)| (label.to_string(), value.trim().to_string()))
                .collect(),
        })
    }
}

/// A composed message ready to hand to the mail client
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailtoRequest {
    pub recipient: String,
    pub subject: String,
    pub fields: Vec<(String, String)>,
}

impl MailtoRequest {
    /// `Name=value` lines joined with CRLF
    pub fn body(&self) -> String {
        self.fields
            .iter()
            .map(|(label, value)| format!("{label}={value}"))
            .collect::<Vec<_>>()
            .join("\r\n")
    }

    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            utf8_percent_encode(&self.subject, MAILTO_VALUE),
            utf8_percent_encode(&self.body(), MAILTO_VALUE),
        )
    }
}

#[cfg(test)]
mod tests {
    use percent_encoding::percent_decode_str;

    use super::*;
    use crate::error::PortfolioError;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Loved the chat app & the weather one!".to_string(),
        }
    }

    #[test]
    fn request_carries_all_fields() {
        let request = filled().to_request().unwrap();
        assert_eq!(request.recipient, "princeik.akowe@gmail.com");
        assert_eq!(request.subject, "Portfolio Contact Form Submission");
        assert_eq!(
            request.body(),
            "Name=Ada Lovelace\r\nEmail=ada@example.com\r\nMessage=Loved the chat app & the weather one!"
        );
    }

    #[test]
    fn uri_is_percent_encoded() {
        let uri = filled().to_request().unwrap().to_uri();
        assert!(uri.starts_with(
            "mailto:princeik.akowe@gmail.com?subject=Portfolio%20Contact%20Form%20Submission&body="
        ));
        assert!(!uri.contains(' '));
        assert!(!uri.contains("& "));

        let body = uri.split_once("&body=").unwrap().1;
        let decoded = percent_decode_str(body).decode_utf8().unwrap();
        assert!(decoded.contains("Name=Ada Lovelace"));
        assert!(decoded.contains("Email=ada@example.com"));
        assert!(decoded.contains("Message=Loved the chat app & the weather one!"));
    }

    #[test]
    fn blank_field_rejected() {
        let mut form = filled();
        form.message = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactError::MissingField("Message")));

        assert_eq!(
            ContactForm::default().to_request(),
            Err(PortfolioError::Contact(ContactError::MissingField("Name")))
        );
    }

    #[test]
    fn malformed_email_rejected() {
        for bad in ["ada", "@example.com", "ada@", "a@b@c"] {
            let mut form = filled();
            form.email = bad.to_string();
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail(bad.to_string())));
        }

        let mut form = filled();
        form.email = "ada".to_string();
        let err = form.to_request().unwrap_err();
        assert_eq!(err.to_string(), "Contact form error: Invalid email address: ada");
        assert!(matches!(err, PortfolioError::Contact(ContactError::InvalidEmail(_))));
    }
}
