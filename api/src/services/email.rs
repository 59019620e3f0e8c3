//! SMTP notification sender built on `lettre`.
//!
//! Configured through `SMTP_HOST`, `SMTP_USERNAME`, `SMTP_PASSWORD`,
//! `EMAIL_FROM_NAME` and `EMAIL_FROM_ADDRESS`. When no SMTP username is
//! configured the sender is disabled and every send becomes a logged no-op,
//! so local and test runs never need a mail account.
//!
//! Send failures are reported to the caller; callers log and swallow them.
//! A reservation must never fail because the confirmation mail did.

use chrono::NaiveDate;
use common::config::Config;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{
    AsyncTransport, Tokio1Executor,
    message::{Message, MultiPart, SinglePart, header},
    transport::smtp::{AsyncSmtpTransport, authentication::Credentials},
};
use once_cell::sync::Lazy;

type SendError = Box<dyn std::error::Error + Send + Sync>;

/// Global SMTP client, built once from config. `None` when sending is
/// disabled.
static SMTP_CLIENT: Lazy<Option<AsyncSmtpTransport<Tokio1Executor>>> = Lazy::new(|| {
    let cfg = Config::get();
    if cfg.smtp_username.is_empty() {
        return None;
    }

    let tls_parameters =
        TlsParameters::new(cfg.smtp_host.clone()).expect("Failed to create TLS parameters");

    let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&cfg.smtp_host)
        .expect("Failed to create SMTP transport")
        .port(587)
        .tls(Tls::Required(tls_parameters))
        .credentials(Credentials::new(
            cfg.smtp_username.clone(),
            cfg.smtp_password.clone(),
        ))
        .build();

    Some(transport)
});

pub struct EmailService;

impl EmailService {
    /// Sends the booking confirmation for a session reservation.
    pub async fn send_reservation_confirmation(
        to_email: &str,
        full_name: &str,
        arrival_date: NaiveDate,
        shift_name: &str,
    ) -> Result<(), SendError> {
        let Some(client) = SMTP_CLIENT.as_ref() else {
            log::debug!("SMTP disabled, skipping confirmation email to {to_email}");
            return Ok(());
        };

        let cfg = Config::get();
        let email = Message::builder()
            .from(format!("{} <{}>", cfg.email_from_name, cfg.email_from_address).parse()?)
            .to(to_email.parse()?)
            .subject("Your Reading Session Is Booked")
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_PLAIN)
                            .body(format!(
                                "Hello {full_name},\n\n\
                                Your reading session on {arrival_date} (shift {shift_name}) is confirmed.\n\n\
                                Please arrive a few minutes before your shift starts.\n\n\
                                Best regards,\n\
                                {}",
                                cfg.email_from_name
                            )),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(format!(
                                "<html>\
                                <body>\
                                <p>Hello {full_name},</p>\
                                <p>Your reading session on <b>{arrival_date}</b> (shift <b>{shift_name}</b>) is confirmed.</p>\
                                <p>Please arrive a few minutes before your shift starts.</p>\
                                <p>Best regards,<br>\
                                {}</p>\
                                </body>\
                                </html>",
                                cfg.email_from_name
                            )),
                    ),
            )?;

        client.send(email).await?;
        Ok(())
    }
}
