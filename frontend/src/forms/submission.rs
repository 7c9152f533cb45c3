use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GENERIC_FAILURE: &str = "Submission failed. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Registration,
    Sponsorship,
}

impl FormKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FormKind::Registration => "registration",
            FormKind::Sponsorship => "sponsorship",
        }
    }
}

/// Values typed into a lead form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fields {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub message: String,
}

impl Fields {
    /// Names the first required field left blank, if any.
    pub fn validate(&self, kind: FormKind) -> Result<(), SubmitError> {
        let mut required = vec![("Full name", &self.full_name), ("Email", &self.email)];
        if kind == FormKind::Sponsorship {
            required.push(("Company", &self.company));
            required.push(("Role", &self.role));
        }
        match required.into_iter().find(|(_, value)| value.trim().is_empty()) {
            Some((label, _)) => Err(SubmitError::Missing(label)),
            None => Ok(()),
        }
    }
}

/// Wire record posted to the intake endpoint.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub form_type: &'static str,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub submitted_at: String,
}

impl FormSubmission {
    pub fn new(kind: FormKind, fields: &Fields, at: DateTime<Utc>) -> Self {
        Self {
            form_type: kind.as_str(),
            full_name: fields.full_name.trim().to_string(),
            email: fields.email.trim().to_string(),
            company: non_empty(&fields.company),
            role: non_empty(&fields.role),
            message: non_empty(&fields.message),
            submitted_at: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    details: Option<String>,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("could not encode submission: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

impl SubmitError {
    /// Text shown inline under the form.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Missing(label) => format!("{} is required.", label),
            SubmitError::Encode(_) => GENERIC_FAILURE.to_string(),
            SubmitError::Network(_) => "Network error. Check your connection and try again.".to_string(),
            SubmitError::Rejected { message, .. } => message.clone(),
        }
    }
}

/// Maps a completed HTTP exchange onto the submission outcome.
pub fn interpret(status: u16, body: &str) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error, details: Some(details) }) if !details.is_empty() => {
            format!("{}: {}", error, details)
        }
        Ok(ErrorBody { error, .. }) if !error.is_empty() => error,
        _ => GENERIC_FAILURE.to_string(),
    };
    Err(SubmitError::Rejected { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 20, 14, 30, 5).unwrap()
    }

    fn registration_fields() -> Fields {
        Fields {
            full_name: "Jett Windwalker".into(),
            email: "agent@valorant.com".into(),
            ..Fields::default()
        }
    }

    #[test]
    fn registration_payload_omits_unused_fields() {
        let submission = FormSubmission::new(FormKind::Registration, &registration_fields(), at());
        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            json!({
                "formType": "registration",
                "fullName": "Jett Windwalker",
                "email": "agent@valorant.com",
                "submittedAt": "2026-01-20T14:30:05.000Z",
            })
        );
    }

    #[test]
    fn sponsorship_payload_carries_company_and_role() {
        let fields = Fields {
            full_name: " Sova ".into(),
            email: "sova@corp.lk".into(),
            company: "Corp".into(),
            role: "Marketing Lead".into(),
            message: "   ".into(),
        };
        let value = serde_json::to_value(FormSubmission::new(FormKind::Sponsorship, &fields, at())).unwrap();
        assert_eq!(value["formType"], "sponsorship");
        assert_eq!(value["fullName"], "Sova");
        assert_eq!(value["company"], "Corp");
        assert_eq!(value["role"], "Marketing Lead");
        assert!(value.get("message").is_none());
    }

    #[test]
    fn message_is_optional_but_company_is_not() {
        let mut fields = registration_fields();
        assert!(fields.validate(FormKind::Registration).is_ok());
        assert_eq!(
            fields.validate(FormKind::Sponsorship),
            Err(SubmitError::Missing("Company"))
        );
        fields.company = "Corp".into();
        fields.role = "CEO".into();
        assert!(fields.validate(FormKind::Sponsorship).is_ok());
    }

    #[test]
    fn blank_email_is_rejected() {
        let fields = Fields { email: "  ".into(), ..registration_fields() };
        assert_eq!(fields.validate(FormKind::Registration), Err(SubmitError::Missing("Email")));
    }

    #[test]
    fn any_2xx_is_success() {
        assert_eq!(interpret(200, ""), Ok(()));
        assert_eq!(interpret(204, "not json"), Ok(()));
    }

    #[test]
    fn error_and_details_are_joined() {
        let err = interpret(500, r#"{"error":"Bad input","details":"email invalid"}"#).unwrap_err();
        assert_eq!(err.user_message(), "Bad input: email invalid");
    }

    #[test]
    fn error_without_details() {
        let err = interpret(422, r#"{"error":"Duplicate entry"}"#).unwrap_err();
        assert_eq!(err.user_message(), "Duplicate entry");
    }

    #[test]
    fn unreadable_body_falls_back() {
        let err = interpret(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(
            err,
            SubmitError::Rejected { status: 502, message: GENERIC_FAILURE.into() }
        );
    }
}
