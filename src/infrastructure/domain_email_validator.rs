use crate::{config::EmailSettings, domain::services::email_service::EmailValidator};

/// Format check plus the configured domain allow/deny lists
#[derive(Clone, Debug, Default)]
pub struct DomainEmailValidator {
    whitelist: Vec<String>,
    blacklist: Vec<String>,
}

impl DomainEmailValidator {
    pub fn new(whitelist: Vec<String>, blacklist: Vec<String>) -> Self {
        Self {
            whitelist: whitelist.into_iter().map(|d| d.to_ascii_lowercase()).collect(),
            blacklist: blacklist.into_iter().map(|d| d.to_ascii_lowercase()).collect(),
        }
    }

    pub fn from_settings(settings: &EmailSettings) -> Self {
        Self::new(
            settings.domain_whitelist.clone(),
            settings.domain_blacklist.clone(),
        )
    }

    fn is_domain_allowed(&self, domain: &str) -> bool {
        let domain = domain.to_ascii_lowercase();
        if !self.whitelist.is_empty() {
            return self.whitelist.contains(&domain);
        }
        !self.blacklist.contains(&domain)
    }
}

impl EmailValidator for DomainEmailValidator {
    fn validate_email(&self, email: &str) -> bool {
        match split_address(email) {
            Some((_, domain)) => self.is_domain_allowed(domain),
            None => false,
        }
    }
}

/// Split a syntactically plausible address into local part and domain
fn split_address(email: &str) -> Option<(&str, &str)> {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return None;
    }
    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.contains('@') {
        return None;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return None;
    }
    Some((local, domain))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("player@example.org")]
    #[case("first.last+tag@mail.example.co.uk")]
    #[case("asfd@lakjgre.lds")]
    fn test_valid_address_positive(#[case] email: &str) {
        assert!(DomainEmailValidator::default().validate_email(email));
    }

    #[rstest]
    #[case("")]
    #[case("invalid")]
    #[case("@example.org")]
    #[case("player@")]
    #[case("player@localhost")]
    #[case("player@example..org")]
    #[case("player@@example.org")]
    #[case("pla yer@example.org")]
    fn test_malformed_address_negative(#[case] email: &str) {
        assert!(!DomainEmailValidator::default().validate_email(email));
    }

    #[test]
    fn test_blacklisted_domain_negative() {
        let validator = DomainEmailValidator::new(Vec::new(), vec!["Spam.org".to_string()]);
        assert!(!validator.validate_email("bob@SPAM.org"));
        assert!(validator.validate_email("bob@example.org"));
    }

    #[test]
    fn test_whitelist_takes_precedence() {
        let validator = DomainEmailValidator::new(
            vec!["example.org".to_string()],
            vec!["example.org".to_string()],
        );
        assert!(validator.validate_email("bob@example.org"));
        assert!(!validator.validate_email("bob@other.org"));
    }
}
