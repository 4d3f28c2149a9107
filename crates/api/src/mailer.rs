//! Welcome email delivery via SMTP.
//!
//! [`Mailer`] wraps the `lettre` async SMTP transport to send the plain-text
//! welcome message after registration. Construction is gated on
//! [`EmailConfig`](crate::config::EmailConfig) being present; when SMTP is
//! not configured the server runs without a mailer and signup skips the
//! message. Delivery failures are logged by the caller, never surfaced to
//! the registering user.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::EmailConfig;

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

/// Sends transactional emails via SMTP.
pub struct Mailer {
    config: EmailConfig,
}

impl Mailer {
    /// Create a new mailer with the given SMTP configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Send the post-registration welcome email.
    pub async fn send_welcome_email(
        &self,
        to_email: &str,
        first_name: &str,
    ) -> Result<(), MailError> {
        let subject = "Welcome to Skybook!";
        let body = format!(
            "Hi {first_name},\n\n\
             Congratulations, you have successfully registered!\n\n\
             You can now search flights and book tickets.\n"
        );

        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(to_email.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| MailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_username, &self.config.smtp_password)
        {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(to = to_email, "Welcome email sent");
        Ok(())
    }
}
