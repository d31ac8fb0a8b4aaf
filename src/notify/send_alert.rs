use anyhow::{Context, Result};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::EmailConfig;
use crate::notify::compose_alert::AlertMessage;

#[allow(async_fn_in_trait)]
pub trait SendAlert {
    async fn send_alert(&self, alert: &AlertMessage) -> Result<()>;
}

/// Delivers alerts through an authenticated SMTP relay, upgrading the connection with STARTTLS.
pub struct SmtpNotifier {
    email: EmailConfig,
}

impl SmtpNotifier {
    pub fn new(email: EmailConfig) -> Self {
        SmtpNotifier { email }
    }

    pub fn build_message(&self, alert: &AlertMessage) -> Result<Message> {
        let from: Mailbox = self
            .email
            .sender
            .parse()
            .with_context(|| format!("Invalid sender address: {}", self.email.sender))?;
        let to: Mailbox = self
            .email
            .receiver
            .parse()
            .with_context(|| format!("Invalid receiver address: {}", self.email.receiver))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(alert.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(alert.body.clone())
            .context("Failed to build alert email")
    }
}

impl SendAlert for SmtpNotifier {
    async fn send_alert(&self, alert: &AlertMessage) -> Result<()> {
        let message = self.build_message(alert)?;

        let credentials = Credentials::new(self.email.sender.clone(), self.email.password.clone());
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.email.smtp_host)
            .with_context(|| format!("Failed to set up SMTP relay {}", self.email.smtp_host))?
            .port(self.email.smtp_port)
            .credentials(credentials)
            .build();

        mailer
            .send(message)
            .await
            .context("Failed to send alert email")?;

        Ok(())
    }
}
