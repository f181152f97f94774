use crate::{config::EmailSettings, domain::services::email_service::MailService};

/// SMTP connection settings; only used to tell whether mail can be sent
#[derive(Clone, Debug)]
pub struct SmtpMailSettings {
    host: String,
    port: u16,
    account: String,
    password: String,
}

impl SmtpMailSettings {
    pub fn new(host: String, port: u16, account: String, password: String) -> Self {
        Self {
            host,
            port,
            account,
            password,
        }
    }

    pub fn from_settings(settings: &EmailSettings) -> Self {
        Self::new(
            settings.smtp_host.clone(),
            settings.smtp_port,
            settings.mail_account.clone(),
            settings.mail_password.clone(),
        )
    }
}

impl MailService for SmtpMailSettings {
    fn has_all_information(&self) -> bool {
        self.port != 0
            && !self.host.trim().is_empty()
            && !self.account.trim().is_empty()
            && !self.password.trim().is_empty()
    }
}
