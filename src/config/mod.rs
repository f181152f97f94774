//! Settings snapshot, read once at startup from the process environment
//! (and a `.env` file, if present).

use std::{net::SocketAddr, str::FromStr};

use thiserror::Error;

use crate::domain::models::registration::{HashAlgorithm, RegistrationArgumentType};

const LISTEN_ADDR: &str = "AUTH_LISTEN_ADDR";
const REGISTRATION_QUEUE_CAPACITY: &str = "AUTH_REGISTRATION_QUEUE_CAPACITY";
const PASSWORD_HASH: &str = "AUTH_PASSWORD_HASH";
const REGISTRATION_TYPE: &str = "AUTH_REGISTRATION_TYPE";
const RECOVERY_PASSWORD_LENGTH: &str = "AUTH_RECOVERY_PASSWORD_LENGTH";
const DOMAIN_WHITELIST: &str = "AUTH_EMAIL_DOMAIN_WHITELIST";
const DOMAIN_BLACKLIST: &str = "AUTH_EMAIL_DOMAIN_BLACKLIST";
const SMTP_HOST: &str = "AUTH_MAIL_SMTP_HOST";
const SMTP_PORT: &str = "AUTH_MAIL_SMTP_PORT";
const MAIL_ACCOUNT: &str = "AUTH_MAIL_ACCOUNT";
const MAIL_PASSWORD: &str = "AUTH_MAIL_PASSWORD";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub listen_addr: SocketAddr,
    pub registration_queue_capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecuritySettings {
    pub password_hash: HashAlgorithm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationSettings {
    pub registration_type: RegistrationArgumentType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSettings {
    pub recovery_password_length: usize,
    /// Lower-cased; empty means every domain is allowed
    pub domain_whitelist: Vec<String>,
    /// Lower-cased
    pub domain_blacklist: Vec<String>,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub mail_account: String,
    pub mail_password: String,
}

/// Immutable configuration shared as `Arc<Settings>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server: ServerSettings,
    pub security: SecuritySettings,
    pub registration: RegistrationSettings,
    pub email: EmailSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
                registration_queue_capacity: 64,
            },
            security: SecuritySettings {
                password_hash: HashAlgorithm::Bcrypt,
            },
            registration: RegistrationSettings {
                registration_type: RegistrationArgumentType::Password,
            },
            email: EmailSettings {
                recovery_password_length: 8,
                domain_whitelist: Vec::new(),
                domain_blacklist: Vec::new(),
                smtp_host: String::new(),
                smtp_port: 465,
                mail_account: String::new(),
                mail_password: String::new(),
            },
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; unset keys keep their default
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(value) = lookup(LISTEN_ADDR) {
            settings.server.listen_addr = parse(LISTEN_ADDR, &value)?;
        }
        if let Some(value) = lookup(REGISTRATION_QUEUE_CAPACITY) {
            settings.server.registration_queue_capacity =
                parse_positive(REGISTRATION_QUEUE_CAPACITY, &value)?;
        }
        if let Some(value) = lookup(PASSWORD_HASH) {
            settings.security.password_hash = parse(PASSWORD_HASH, &value)?;
        }
        if let Some(value) = lookup(REGISTRATION_TYPE) {
            settings.registration.registration_type = parse(REGISTRATION_TYPE, &value)?;
        }
        if let Some(value) = lookup(RECOVERY_PASSWORD_LENGTH) {
            settings.email.recovery_password_length =
                parse_positive(RECOVERY_PASSWORD_LENGTH, &value)?;
        }
        if let Some(value) = lookup(DOMAIN_WHITELIST) {
            settings.email.domain_whitelist = parse_domains(&value);
        }
        if let Some(value) = lookup(DOMAIN_BLACKLIST) {
            settings.email.domain_blacklist = parse_domains(&value);
        }
        if let Some(value) = lookup(SMTP_HOST) {
            settings.email.smtp_host = value;
        }
        if let Some(value) = lookup(SMTP_PORT) {
            settings.email.smtp_port = parse(SMTP_PORT, &value)?;
        }
        if let Some(value) = lookup(MAIL_ACCOUNT) {
            settings.email.mail_account = value;
        }
        if let Some(value) = lookup(MAIL_PASSWORD) {
            settings.email.mail_password = value;
        }

        Ok(settings)
    }
}

fn parse<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_positive(key: &'static str, value: &str) -> Result<usize, ConfigError> {
    let parsed: usize = parse(key, value)?;
    if parsed == 0 {
        return Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(parsed)
}

fn parse_domains(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|domain| domain.trim().to_ascii_lowercase())
        .filter(|domain| !domain.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let settings = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.security.password_hash, HashAlgorithm::Bcrypt);
        assert_eq!(
            settings.registration.registration_type,
            RegistrationArgumentType::Password
        );
        assert_eq!(settings.email.recovery_password_length, 8);
    }

    #[test]
    fn test_overrides_positive() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("AUTH_PASSWORD_HASH", "two_factor"),
            ("AUTH_REGISTRATION_TYPE", "EMAIL_WITH_CONFIRMATION"),
            ("AUTH_RECOVERY_PASSWORD_LENGTH", "12"),
            ("AUTH_EMAIL_DOMAIN_BLACKLIST", " Spam.org, ,mailinator.com"),
            ("AUTH_MAIL_SMTP_PORT", "587"),
            ("AUTH_LISTEN_ADDR", "127.0.0.1:9000"),
        ]))
        .unwrap();

        assert_eq!(settings.security.password_hash, HashAlgorithm::TwoFactor);
        assert_eq!(
            settings.registration.registration_type,
            RegistrationArgumentType::EmailWithConfirmation
        );
        assert_eq!(settings.email.recovery_password_length, 12);
        assert_eq!(
            settings.email.domain_blacklist,
            vec!["spam.org".to_string(), "mailinator.com".to_string()]
        );
        assert_eq!(settings.email.smtp_port, 587);
        assert_eq!(settings.server.listen_addr.port(), 9000);
    }

    #[rstest]
    #[case("AUTH_REGISTRATION_TYPE", "PIN")]
    #[case("AUTH_PASSWORD_HASH", "md4")]
    #[case("AUTH_RECOVERY_PASSWORD_LENGTH", "0")]
    #[case("AUTH_RECOVERY_PASSWORD_LENGTH", "-3")]
    #[case("AUTH_REGISTRATION_QUEUE_CAPACITY", "0")]
    #[case("AUTH_MAIL_SMTP_PORT", "70000")]
    fn test_invalid_value_negative(#[case] key: &str, #[case] value: &str) {
        let result = Settings::from_lookup(lookup_from(&[(key, value)]));
        match result {
            Err(ConfigError::Invalid { key: bad_key, .. }) => assert_eq!(bad_key, key),
            Ok(_) => panic!("expected {key}={value} to be rejected"),
        }
    }
}
