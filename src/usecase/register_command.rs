use tracing::{debug, info};

use crate::{
    config::Settings,
    domain::{
        models::{
            message::MessageKey,
            player::CommandSender,
            registration::{HashAlgorithm, RegistrationArgumentType, RegistrationOutcome},
        },
        services::{
            email_service::{EmailValidator, MailService},
            messaging_service::Messenger,
            recovery_password_service::RecoveryPasswordGenerator,
            registration_executor::RegistrationExecutor,
        },
    },
};

/// Sent verbatim to anything that is not a player
pub const PLAYER_ONLY: &str = "Player only!";

/// The `/register` command.
///
/// Decides whether a player's arguments are acceptable for the configured
/// registration type and forwards accepted registrations to the executor.
/// Every invocation ends with exactly one message or exactly one dispatch.
pub struct RegisterCommand<M, V, S, G, E>
where
    M: Messenger,
    V: EmailValidator,
    S: MailService,
    G: RecoveryPasswordGenerator,
    E: RegistrationExecutor,
{
    messenger: M,
    email_validator: V,
    mail_service: S,
    password_generator: G,
    executor: E,
}

impl<M, V, S, G, E> RegisterCommand<M, V, S, G, E>
where
    M: Messenger,
    V: EmailValidator,
    S: MailService,
    G: RecoveryPasswordGenerator,
    E: RegistrationExecutor,
{
    pub fn new(
        messenger: M,
        email_validator: V,
        mail_service: S,
        password_generator: G,
        executor: E,
    ) -> Self {
        Self {
            messenger,
            email_validator,
            mail_service,
            password_generator,
            executor,
        }
    }

    pub fn execute_command(&self, sender: &dyn CommandSender, args: &[String], settings: &Settings) {
        let Some(player) = sender.as_player() else {
            debug!(sender = sender.name(), "register refused for non-player sender");
            sender.send_message(PLAYER_ONLY);
            return;
        };

        match self.evaluate(args, settings) {
            RegistrationOutcome::Rejected(key) => {
                debug!(player = player.name(), message = key.key(), "registration rejected");
                self.messenger.send(sender, key);
            }
            RegistrationOutcome::Accepted {
                password,
                email,
                force_login,
            } => {
                info!(
                    player = player.name(),
                    by_email = !email.is_empty(),
                    "registration accepted"
                );
                self.executor
                    .perform_register(player, password, email, force_login);
            }
        }
    }

    /// Evaluate the arguments of a player's `/register` against the settings.
    ///
    /// Check order: two-factor override, mail readiness (email types only),
    /// argument count, email format, confirmation.
    pub fn evaluate(&self, args: &[String], settings: &Settings) -> RegistrationOutcome {
        if settings.security.password_hash == HashAlgorithm::TwoFactor {
            return accepted(String::new(), String::new());
        }

        let registration_type = settings.registration.registration_type;
        if registration_type.is_email() && !self.mail_service.has_all_information() {
            return RegistrationOutcome::Rejected(MessageKey::IncompleteEmailSettings);
        }

        match (registration_type, args) {
            (RegistrationArgumentType::Password, [password]) => {
                accepted(password.clone(), String::new())
            }
            (RegistrationArgumentType::PasswordWithConfirmation, [password, confirmation]) => {
                if password == confirmation {
                    accepted(password.clone(), String::new())
                } else {
                    RegistrationOutcome::Rejected(MessageKey::PasswordMatchError)
                }
            }
            (RegistrationArgumentType::Email, [email]) => self.email_registration(email, None, settings),
            (RegistrationArgumentType::EmailWithConfirmation, [email, confirmation]) => {
                self.email_registration(email, Some(confirmation.as_str()), settings)
            }
            _ => RegistrationOutcome::Rejected(MessageKey::UsageRegister),
        }
    }

    fn email_registration(
        &self,
        email: &str,
        confirmation: Option<&str>,
        settings: &Settings,
    ) -> RegistrationOutcome {
        if !self.email_validator.validate_email(email) {
            return RegistrationOutcome::Rejected(MessageKey::InvalidEmail);
        }
        // a mismatched email confirmation only gets the usage hint
        if confirmation.is_some_and(|confirmation| confirmation != email) {
            return RegistrationOutcome::Rejected(MessageKey::UsageRegister);
        }

        let password = self
            .password_generator
            .generate(settings.email.recovery_password_length);
        accepted(password, email.to_string())
    }
}

fn accepted(password: String, email: String) -> RegistrationOutcome {
    RegistrationOutcome::Accepted {
        password,
        email,
        force_login: true,
    }
}
