use rand_core::{OsRng, RngCore, TryRngCore};

use crate::domain::services::recovery_password_service::RecoveryPasswordGenerator;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Lower-case alphanumeric passwords from the OS random source
#[derive(Clone, Default)]
pub struct RandomRecoveryPassword;

impl RandomRecoveryPassword {
    pub fn new() -> Self {
        Self
    }
}

impl RecoveryPasswordGenerator for RandomRecoveryPassword {
    fn generate(&self, length: usize) -> String {
        let mut rng = OsRng.unwrap_err();
        // reject the top of the range so every character is equally likely
        let zone = u32::MAX - (u32::MAX % ALPHABET.len() as u32);

        let mut password = String::with_capacity(length);
        while password.len() < length {
            let value = rng.next_u32();
            if value >= zone {
                continue;
            }
            password.push(ALPHABET[(value % ALPHABET.len() as u32) as usize] as char);
        }
        password
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(7)]
    #[case(64)]
    fn test_exact_length(#[case] length: usize) {
        let password = RandomRecoveryPassword::new().generate(length);
        assert_eq!(password.chars().count(), length);
    }

    #[test]
    fn test_alphabet_only() {
        let password = RandomRecoveryPassword::new().generate(256);
        assert!(
            password
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }

    #[test]
    fn test_successive_passwords_differ() {
        let generator = RandomRecoveryPassword::new();
        assert_ne!(generator.generate(16), generator.generate(16));
    }
}
