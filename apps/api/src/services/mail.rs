//! Transactional email for Nosh Eats
//!
//! Sends the email verification message issued on signup and on email
//! change, using the SMTP settings from the shared configuration. When
//! SMTP is not configured the service logs and skips sending, so account
//! flows never fail because of the mailer.

use anyhow::Result;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use nosh_shared_config::SmtpConfig;

/// Service for sending transactional emails
#[derive(Clone)]
pub struct MailService {
    config: Option<SmtpConfig>,
}

impl MailService {
    /// Create a new mail service
    pub fn new(config: Option<SmtpConfig>) -> Self {
        Self { config }
    }

    /// Check if email sending is configured and enabled
    pub fn is_enabled(&self) -> bool {
        self.config
            .as_ref()
            .map(|c| c.is_configured())
            .unwrap_or(false)
    }

    /// Send the email verification message carrying the given code
    pub async fn send_verification_email(&self, to_email: &str, code: &str) -> Result<()> {
        if !self.is_enabled() {
            tracing::warn!(
                "Email not configured, skipping verification email to {}",
                to_email
            );
            return Ok(());
        }

        let subject = "Verify your email for Nosh Eats";
        let html_body = render_verification_html(to_email, code);
        let text_body = render_verification_text(to_email, code);

        self.send_email(to_email, subject, &html_body, &text_body)
            .await
    }

    /// Send an email with HTML and plain text versions
    async fn send_email(
        &self,
        to_email: &str,
        subject: &str,
        html_body: &str,
        text_body: &str,
    ) -> Result<()> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("SMTP not configured"))?;

        let from: Mailbox = config.from_mailbox().parse()?;
        let to: Mailbox = to_email.parse()?;

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )?;

        build_transport(config)?.send(email).await?;

        tracing::info!(
            to = %to_email,
            subject = %subject,
            "Email sent successfully"
        );

        Ok(())
    }
}

/// Build the SMTP transport from configuration
pub(crate) fn build_transport(config: &SmtpConfig) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
    let mailer = if config.tls {
        AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
    } else {
        AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
    }
    .port(config.port);

    let mailer = if let (Some(username), Some(password)) = (&config.username, &config.password) {
        mailer.credentials(Credentials::new(username.clone(), password.clone()))
    } else {
        mailer
    };

    Ok(mailer.build())
}

/// Render the HTML version of the verification email
fn render_verification_html(to_email: &str, code: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Verify Your Email</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            margin: 0;
            padding: 0;
            background-color: #f5f5f5;
        }}
        .container {{
            max-width: 560px;
            margin: 0 auto;
            padding: 40px 20px;
        }}
        .card {{
            background-color: #ffffff;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0, 0, 0, 0.06);
            overflow: hidden;
        }}
        .header {{
            background: linear-gradient(135deg, #10b981 0%, #059669 100%);
            color: white;
            padding: 32px 24px;
            text-align: center;
        }}
        .header h1 {{
            margin: 0;
            font-size: 24px;
            font-weight: 600;
        }}
        .content {{
            padding: 32px 24px;
        }}
        .content p {{
            margin: 0 0 16px;
            color: #374151;
            line-height: 1.6;
        }}
        .code {{
            background-color: #f3f4f6;
            border-radius: 6px;
            padding: 16px;
            margin: 20px 0;
            text-align: center;
            font-family: 'SF Mono', 'Fira Code', Menlo, monospace;
            font-size: 18px;
            letter-spacing: 1px;
            color: #111827;
        }}
        .note {{
            color: #6b7280;
            font-size: 13px;
            text-align: center;
            margin-top: 24px;
        }}
        .footer {{
            padding: 24px;
            text-align: center;
            color: #9ca3af;
            font-size: 12px;
            border-top: 1px solid #f3f4f6;
        }}
    </style>
</head>
<body>
    <div class="container">
        <div class="card">
            <div class="header">
                <h1>Verify Your Email</h1>
            </div>
            <div class="content">
                <p>Hi there,</p>
                <p>Thanks for signing up for <strong>Nosh Eats</strong> with <strong>{to_email}</strong>. Enter this code in the app to confirm your email address:</p>

                <div class="code">{code}</div>

                <p class="note">If you didn't create a Nosh Eats account, you can safely ignore this email.</p>
            </div>
            <div class="footer">
                <p>Sent by Nosh Eats - Food from your neighborhood, delivered</p>
            </div>
        </div>
    </div>
</body>
</html>"#,
        to_email = html_escape(to_email),
        code = html_escape(code),
    )
}

/// Render the plain text version of the verification email
fn render_verification_text(to_email: &str, code: &str) -> String {
    format!(
        r#"Verify Your Email

Hi there,

Thanks for signing up for Nosh Eats with {to_email}. Enter this code in the app to confirm your email address:

{code}

If you didn't create a Nosh Eats account, you can safely ignore this email.

---
Sent by Nosh Eats - Food from your neighborhood, delivered"#,
        to_email = to_email,
        code = code,
    )
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_render_verification_text() {
        let text = render_verification_text("diner@example.com", "3d41c0de");
        assert!(text.contains("diner@example.com"));
        assert!(text.contains("3d41c0de"));
        assert!(text.contains("Nosh Eats"));
    }

    #[test]
    fn test_render_verification_html() {
        let html = render_verification_html("diner@example.com", "3d41c0de");
        assert!(html.contains("diner@example.com"));
        assert!(html.contains("3d41c0de"));
        assert!(html.contains("<!DOCTYPE html>"));
    }

    #[test]
    fn test_disabled_without_config() {
        let service = MailService::new(None);
        assert!(!service.is_enabled());
    }

    #[tokio::test]
    async fn test_send_skips_when_disabled() {
        let service = MailService::new(None);
        let result = service
            .send_verification_email("diner@example.com", "3d41c0de")
            .await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_build_transport_plaintext() {
        let mut config = SmtpConfig::new("localhost", "noreply@nosh.example");
        config.tls = false;
        config.port = 1025;
        assert!(build_transport(&config).is_ok());
    }
}
