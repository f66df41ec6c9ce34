//! Outbound message composition: `mailto:` URIs and calendar links.
//!
//! Nothing here talks to a server. The browser opens the produced URI in a
//! new browsing context and delivery is up to the visitor's own client.

use super::email::{EmailCheck, check_email};
use crate::config::CalendarConfig;
use chrono::{DateTime, Days, Duration, TimeZone, Utc};
use thiserror::Error;

const GENERAL_INQUIRY: &str = "General Inquiry";
const CALENDAR_BASE: &str = "https://calendar.google.com/calendar/render";

/// Builds `mailto:<recipient>?subject=..&body=..` with encoded components.
pub fn mailto(recipient: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// First problem found in a contact form submission.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Please tell me your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("That email address doesn't look right. Please check it and try again.")]
    InvalidEmail,
    #[error("Please add a few details about your project.")]
    MissingMessage,
}

/// Field values of the "Send Me a Message" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        match check_email(&self.email) {
            EmailCheck::Empty => return Err(FormError::MissingEmail),
            EmailCheck::Invalid => return Err(FormError::InvalidEmail),
            EmailCheck::Valid => {}
        }
        if self.message.trim().is_empty() {
            return Err(FormError::MissingMessage);
        }
        Ok(())
    }

    fn service_or_default(&self) -> &str {
        non_empty(&self.service).unwrap_or(GENERAL_INQUIRY)
    }

    pub fn subject(&self) -> String {
        format!("Contact Form: {}", self.service_or_default())
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nCompany: {}\nService Interest: {}\n\nMessage:\n{}\n",
            self.name.trim(),
            self.email.trim(),
            non_empty(&self.company).unwrap_or("Not specified"),
            self.service_or_default(),
            self.message.trim(),
        )
    }

    /// Validates the form and builds the `mailto:` URI addressed to `recipient`.
    pub fn to_mailto(&self, recipient: &str) -> Result<String, FormError> {
        self.validate()?;
        Ok(mailto(recipient, &self.subject(), &self.body()))
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// Pre-filled email asking for a consultation slot.
pub fn schedule_mailto(recipient: &str) -> String {
    const BODY: &str = "Hi Phinidy,

I would like to schedule a 30-minute consultation to discuss my project needs.

My preferred times are:
- [Please specify your preferred dates and times]
- [Alternative option 1]
- [Alternative option 2]

My timezone: [Your timezone]

Looking forward to hearing from you!

Best regards,
[Your name]";
    mailto(recipient, "Schedule Consultation Meeting", BODY)
}

/// Newsletter sign-up request for the blog section.
pub fn newsletter_mailto(recipient: &str, subscriber: &str) -> Result<String, FormError> {
    match check_email(subscriber) {
        EmailCheck::Empty => Err(FormError::MissingEmail),
        EmailCheck::Invalid => Err(FormError::InvalidEmail),
        EmailCheck::Valid => Ok(mailto(
            recipient,
            "Newsletter Subscription",
            &format!(
                "Please add {} to the insights newsletter.",
                subscriber.trim()
            ),
        )),
    }
}

/// Proposed consultation slot: tomorrow at `start_hour` in the visitor's
/// timezone, lasting `duration_minutes`, returned in UTC.
///
/// `None` when the local time does not exist (a DST gap) or the hour is out
/// of range.
pub fn consultation_slot<Tz: TimeZone>(
    now: &DateTime<Tz>,
    start_hour: u32,
    duration_minutes: u32,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let tomorrow = now.date_naive().checked_add_days(Days::new(1))?;
    let local_start = tomorrow.and_hms_opt(start_hour, 0, 0)?;
    let start = now
        .timezone()
        .from_local_datetime(&local_start)
        .earliest()?
        .with_timezone(&Utc);
    let end = start + Duration::minutes(i64::from(duration_minutes));
    Some((start, end))
}

fn calendar_stamp(at: &DateTime<Utc>) -> String {
    at.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Google Calendar "create event" link for the given slot.
pub fn calendar_url(
    calendar: &CalendarConfig,
    start: &DateTime<Utc>,
    end: &DateTime<Utc>,
) -> String {
    format!(
        "{CALENDAR_BASE}?action=TEMPLATE&text={}&dates={}/{}&details={}&location={}&sf=true&output=xml",
        urlencoding::encode(&calendar.title),
        calendar_stamp(start),
        calendar_stamp(end),
        urlencoding::encode(&calendar.details),
        urlencoding::encode(&calendar.location),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Amina Otieno".into(),
            email: "amina@lipa.co.ke".into(),
            company: String::new(),
            service: "API Development".into(),
            message: "We need a reconciliation API.".into(),
        }
    }

    #[test]
    fn validation_reports_first_problem() {
        let mut form = filled();
        assert_eq!(form.validate(), Ok(()));

        form.message = "  ".into();
        assert_eq!(form.validate(), Err(FormError::MissingMessage));

        form.email = "amina@lipa".into();
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));

        form.email.clear();
        assert_eq!(form.validate(), Err(FormError::MissingEmail));

        form.name.clear();
        assert_eq!(form.validate(), Err(FormError::MissingName));
    }

    #[test]
    fn body_fills_optional_fields() {
        let mut form = filled();
        form.service.clear();

        assert_eq!(form.subject(), "Contact Form: General Inquiry");
        assert_eq!(
            form.body(),
            "Name: Amina Otieno\nEmail: amina@lipa.co.ke\nCompany: Not specified\n\
             Service Interest: General Inquiry\n\nMessage:\nWe need a reconciliation API.\n"
        );
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let uri = filled().to_mailto("owner@example.com").unwrap();
        assert!(uri.starts_with("mailto:owner@example.com?subject=Contact%20Form%3A%20API%20Development&body="));
        assert!(uri.contains("Name%3A%20Amina%20Otieno%0AEmail%3A%20amina%40lipa.co.ke"));
        assert!(!uri.contains(' '));
        assert!(!uri.contains('\n'));
    }

    #[test]
    fn invalid_form_has_no_mailto() {
        let mut form = filled();
        form.email = "nope".into();
        assert_eq!(form.to_mailto("owner@example.com"), Err(FormError::InvalidEmail));
    }

    #[test]
    fn newsletter_uses_email_check() {
        assert_eq!(newsletter_mailto("o@example.com", ""), Err(FormError::MissingEmail));
        assert_eq!(newsletter_mailto("o@example.com", "x@y"), Err(FormError::InvalidEmail));
        let uri = newsletter_mailto("o@example.com", " reader@mail.com ").unwrap();
        assert!(uri.contains("subject=Newsletter%20Subscription"));
        assert!(uri.contains("reader%40mail.com%20to"));
    }

    #[test]
    fn schedule_mail_is_prefilled() {
        let uri = schedule_mailto("o@example.com");
        assert!(uri.starts_with("mailto:o@example.com?subject=Schedule%20Consultation%20Meeting&body=Hi%20Phinidy%2C"));
    }

    #[test]
    fn slot_is_tomorrow_local_converted_to_utc() {
        let nairobi = FixedOffset::east_opt(3 * 3600).unwrap();
        let now = nairobi.with_ymd_and_hms(2025, 3, 31, 22, 15, 0).unwrap();

        let (start, end) = consultation_slot(&now, 10, 30).unwrap();

        assert_eq!(calendar_stamp(&start), "20250401T070000Z");
        assert_eq!(calendar_stamp(&end), "20250401T073000Z");
    }

    #[test]
    fn slot_rejects_bad_hour() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(consultation_slot(&now, 24, 30), None);
    }

    #[test]
    fn calendar_url_shape() {
        let calendar = CalendarConfig::default();
        let start = Utc.with_ymd_and_hms(2025, 4, 1, 7, 0, 0).unwrap();
        let end = start + Duration::minutes(30);

        let url = calendar_url(&calendar, &start, &end);

        assert!(url.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE"));
        assert!(url.contains("&text=Consultation%20with%20Phinidy%20George&"));
        assert!(url.contains("&dates=20250401T070000Z/20250401T073000Z&"));
        assert!(url.contains("&location=Video%20Call%20%28Link%20to%20be%20provided%29&"));
        assert!(url.ends_with("&sf=true&output=xml"));
    }
}
