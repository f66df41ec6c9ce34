//! Contact section flows driven through the public API.

use chrono::{FixedOffset, TimeZone};
use portfolio::SiteConfig;
use portfolio::contact::{
    ContactForm, DialogEvent, DialogMode, EmailCheck, FormError, StatusBoard, StatusKind,
    calendar_url, check_email, consultation_slot, schedule_mailto,
};
use portfolio::content::services::SERVICE_INTERESTS;
use pretty_assertions::assert_eq;

#[test]
fn submit_form_with_every_service_interest() {
    let config = SiteConfig::embedded().unwrap();
    for service in SERVICE_INTERESTS {
        let form = ContactForm {
            name: "Wanjiru".into(),
            email: "wanjiru@pesa.io".into(),
            company: "Pesa Ltd".into(),
            service: (*service).into(),
            message: "Looking for help with reporting.".into(),
        };
        let uri = form.to_mailto(&config.contact.recipient).unwrap();
        let encoded = urlencoding::encode(service);
        assert!(uri.contains(&format!("subject=Contact%20Form%3A%20{encoded}&")), "{uri}");
        assert!(uri.contains("Company%3A%20Pesa%20Ltd"));
    }
}

#[test]
fn failed_submission_shows_error_then_success_replaces_it() {
    let mut board = StatusBoard::default();
    let mut form = ContactForm {
        name: "Otieno".into(),
        email: "otieno@".into(),
        message: "Hi".into(),
        ..ContactForm::default()
    };

    let err = form.validate().unwrap_err();
    assert_eq!(err, FormError::InvalidEmail);
    let first = board.show(StatusKind::Error, "Error", err.to_string());

    form.email = "otieno@mail.com".into();
    assert!(form.validate().is_ok());
    let second = board.show(StatusKind::Success, "Message Prepared!", "");

    // the first message's timer fires late
    assert!(!board.dismiss(first));
    assert_eq!(board.current().unwrap().kind, StatusKind::Success);
    assert!(board.dismiss(second));
}

#[test]
fn scheduling_by_calendar_or_blocked_popup() {
    let config = SiteConfig::default();
    let calendar = &config.contact.calendar;
    let eat = FixedOffset::east_opt(3 * 3600).unwrap();
    let now = eat.with_ymd_and_hms(2025, 12, 31, 9, 0, 0).unwrap();

    let mode = DialogMode::default().next(DialogEvent::Open);
    let (start, end) =
        consultation_slot(&now, calendar.start_hour, calendar.duration_minutes).unwrap();
    let url = calendar_url(calendar, &start, &end);
    assert!(url.contains("dates=20260101T070000Z/20260101T073000Z"));

    assert_eq!(mode.next(DialogEvent::Launched { opened: true }), DialogMode::Closed);

    let blocked = mode.next(DialogEvent::Launched { opened: false });
    assert_eq!(blocked, DialogMode::ShowingDetails);
    assert!(blocked.is_open());
    assert!(
        schedule_mailto(&config.contact.recipient).contains("Schedule%20Consultation%20Meeting")
    );
}

#[test]
fn email_reference_inputs() {
    assert_eq!(check_email("a@b.com"), EmailCheck::Valid);
    assert_eq!(check_email("a@b"), EmailCheck::Invalid);
    assert_eq!(check_email(""), EmailCheck::Empty);
}
