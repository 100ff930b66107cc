use crate::models::user::{UserDetails, UserDetailsForm};
use crate::quiz::QuizError;

const MISSING_DETAILS: &str = "Please fill in your Name and Class details to proceed.";

/// Checks the required user-detail fields and normalizes the rest.
///
/// Required: a non-blank name and a selected standard. Email is optional and
/// not format-checked. A stream is kept only for senior standards.
pub fn validate_user_details(form: &UserDetailsForm) -> Result<UserDetails, QuizError> {
    let name = form.name.trim();
    let standard = match form.standard {
        Some(standard) if !name.is_empty() => standard,
        _ => return Err(QuizError::Validation(MISSING_DETAILS.to_string())),
    };

    let email = form.email.trim();
    let stream = if standard.is_senior() { form.stream } else { None };

    Ok(UserDetails {
        name: name.to_string(),
        email: (!email.is_empty()).then(|| email.to_string()),
        standard,
        stream,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{Standard, Stream};

    fn form(name: &str, standard: Option<Standard>) -> UserDetailsForm {
        UserDetailsForm {
            name: name.to_string(),
            email: String::new(),
            standard,
            stream: None,
        }
    }

    #[test]
    fn test_empty_name_fails() {
        let err = validate_user_details(&form("", Some(Standard::Class9))).unwrap_err();
        assert!(matches!(err, QuizError::Validation(_)));
    }

    #[test]
    fn test_blank_name_fails() {
        assert!(validate_user_details(&form("   ", Some(Standard::Class9))).is_err());
    }

    #[test]
    fn test_missing_standard_fails() {
        assert!(validate_user_details(&form("Asha", None)).is_err());
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let mut f = form("  Asha  ", Some(Standard::Class10));
        f.email = " asha@example.com ".to_string();
        let details = validate_user_details(&f).unwrap();
        assert_eq!(details.name, "Asha");
        assert_eq!(details.email.as_deref(), Some("asha@example.com"));
    }

    #[test]
    fn test_blank_email_becomes_none() {
        let details = validate_user_details(&form("Asha", Some(Standard::Graduate))).unwrap();
        assert!(details.email.is_none());
    }

    #[test]
    fn test_email_is_not_format_checked() {
        let mut f = form("Asha", Some(Standard::Class8));
        f.email = "not-an-email".to_string();
        assert!(validate_user_details(&f).is_ok());
    }

    #[test]
    fn test_stream_kept_for_senior_standard() {
        let mut f = form("Ravi", Some(Standard::Class12));
        f.stream = Some(Stream::Commerce);
        assert_eq!(validate_user_details(&f).unwrap().stream, Some(Stream::Commerce));
    }

    #[test]
    fn test_stream_dropped_for_junior_standard() {
        let mut f = form("Ravi", Some(Standard::Class9));
        f.stream = Some(Stream::SciencePcm);
        assert_eq!(validate_user_details(&f).unwrap().stream, None);
    }
}
