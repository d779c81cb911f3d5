//! Contact form submission
//!
//! Validates a contact form and posts it to the Web3Forms API.

mod client;
mod notification;

pub use client::{ContactClient, ContactError, ContactResult, SubmitOutcome, Web3FormsResponse};
pub use notification::{Notification, NotificationKind, MSG_SEND_FAILED, MSG_SENT};
