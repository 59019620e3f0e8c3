//! External service integrations.
//!
//! Currently only the SMTP notification sender.

pub mod email;
