use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown value `{0}`")]
pub struct UnknownVariant(pub String);

/// Password hash algorithm configured for the server.
///
/// Only `TwoFactor` changes how registration commands are evaluated;
/// the rest are carried for configuration compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Argon2,
    Bcrypt,
    Pbkdf2,
    Sha256,
    TwoFactor,
}

impl FromStr for HashAlgorithm {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ARGON2" => Ok(Self::Argon2),
            "BCRYPT" => Ok(Self::Bcrypt),
            "PBKDF2" => Ok(Self::Pbkdf2),
            "SHA256" => Ok(Self::Sha256),
            "TWO_FACTOR" => Ok(Self::TwoFactor),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// Which arguments `/register` expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationArgumentType {
    Password,
    PasswordWithConfirmation,
    Email,
    EmailWithConfirmation,
}

impl RegistrationArgumentType {
    pub fn is_email(self) -> bool {
        matches!(self, Self::Email | Self::EmailWithConfirmation)
    }
}

impl FromStr for RegistrationArgumentType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PASSWORD" => Ok(Self::Password),
            "PASSWORD_WITH_CONFIRMATION" => Ok(Self::PasswordWithConfirmation),
            "EMAIL" => Ok(Self::Email),
            "EMAIL_WITH_CONFIRMATION" => Ok(Self::EmailWithConfirmation),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for RegistrationArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Password => "PASSWORD",
            Self::PasswordWithConfirmation => "PASSWORD_WITH_CONFIRMATION",
            Self::Email => "EMAIL",
            Self::EmailWithConfirmation => "EMAIL_WITH_CONFIRMATION",
        };
        f.write_str(name)
    }
}

/// Result of evaluating one `/register` invocation from a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Rejected(super::message::MessageKey),
    Accepted {
        password: String,
        email: String,
        force_login: bool,
    },
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("TWO_FACTOR", HashAlgorithm::TwoFactor)]
    #[case("bcrypt", HashAlgorithm::Bcrypt)]
    #[case(" Argon2 ", HashAlgorithm::Argon2)]
    fn test_parse_hash_algorithm(#[case] raw: &str, #[case] expected: HashAlgorithm) {
        assert_eq!(raw.parse::<HashAlgorithm>(), Ok(expected));
    }

    #[rstest]
    #[case("password_with_confirmation", RegistrationArgumentType::PasswordWithConfirmation)]
    #[case("EMAIL", RegistrationArgumentType::Email)]
    fn test_parse_registration_type(
        #[case] raw: &str,
        #[case] expected: RegistrationArgumentType,
    ) {
        assert_eq!(raw.parse::<RegistrationArgumentType>(), Ok(expected));
    }

    #[test]
    fn test_parse_unknown_registration_type_negative() {
        assert_eq!(
            "EMAIL_OPTIONAL".parse::<RegistrationArgumentType>(),
            Err(UnknownVariant("EMAIL_OPTIONAL".to_string()))
        );
    }
}
