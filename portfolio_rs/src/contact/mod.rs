//! Contact flow helpers: email checks, outbound mail/calendar links and the
//! small state machines behind the contact section.

mod compose;
mod dialog;
mod email;

pub use compose::{
    ContactForm, FormError, calendar_url, consultation_slot, mailto, newsletter_mailto,
    schedule_mailto,
};
pub use dialog::{DialogEvent, DialogMode, ScheduleMethod, StatusBoard, StatusKind, StatusMessage};
pub use email::{EmailCheck, check_email};
