//! Contact section: message form, scheduling dialog and direct details.
//!
//! Nothing is sent from the page. The form and the dialog build `mailto:`
//! or calendar links and open them in a new browsing context; every
//! failure ends on a path where the visitor can still reach out by hand.

use leptos::ev::{self, SubmitEvent};
use leptos::prelude::*;
use portfolio::contact::{
    ContactForm, DialogEvent, DialogMode, ScheduleMethod, calendar_url, consultation_slot,
    schedule_mailto,
};
use portfolio::content::{IconKind, SOCIAL_LINKS, contact, services::SERVICE_INTERESTS};
use portfolio::{Result, SectionId, SiteConfig, SiteError};

use crate::components::{CopyButton, Icon, Notifier, StatusLine};
use crate::dom;

/// Link for the chosen scheduling method.
fn schedule_link(config: &SiteConfig, method: ScheduleMethod) -> Result<String> {
    match method {
        ScheduleMethod::Email => Ok(schedule_mailto(&config.contact.recipient)),
        ScheduleMethod::Calendar => {
            let calendar = &config.contact.calendar;
            let now = chrono::Local::now();
            let (start, end) =
                consultation_slot(&now, calendar.start_hour, calendar.duration_minutes)
                    .ok_or_else(|| SiteError::browser("no valid consultation slot for tomorrow"))?;
            Ok(calendar_url(calendar, &start, &end))
        }
    }
}

#[derive(Clone, Copy)]
struct FormFields {
    name: RwSignal<String>,
    email: RwSignal<String>,
    company: RwSignal<String>,
    service: RwSignal<String>,
    message: RwSignal<String>,
}

impl FormFields {
    fn new() -> Self {
        FormFields {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            company: RwSignal::new(String::new()),
            service: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
        }
    }

    fn snapshot(&self) -> ContactForm {
        ContactForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            company: self.company.get_untracked(),
            service: self.service.get_untracked(),
            message: self.message.get_untracked(),
        }
    }

    fn reset(&self) {
        for field in [self.name, self.email, self.company, self.service, self.message] {
            field.set(String::new());
        }
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let notifier = Notifier::new(config.contact.status_dismiss_ms);
    let fields = FormFields::new();
    let dialog = RwSignal::new(DialogMode::Closed);
    let recipient = StoredValue::new(config.contact.recipient.clone());

    let send_dialog = move |event: DialogEvent| dialog.update(|mode| *mode = mode.next(event));

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let uri = match fields.snapshot().to_mailto(&recipient.get_value()) {
            Ok(uri) => uri,
            Err(e) => {
                notifier.error("Error", e.to_string());
                return;
            }
        };
        match dom::open_external(&uri) {
            Ok(()) => {
                tracing::info!("contact email prepared");
                fields.reset();
                notifier.success(
                    "Message Prepared!",
                    "Your email client should open with the message ready to send.",
                );
            }
            Err(e) => {
                tracing::warn!(%e, "could not open contact email");
                notifier.error(
                    "Couldn't Open Your Mail App",
                    "Use the contact details below to reach me directly.",
                );
                send_dialog(DialogEvent::ShowDetails);
            }
        }
    };

    let launch_config = config.clone();
    let launch = move |method: ScheduleMethod| {
        let opened = match schedule_link(&launch_config, method)
            .and_then(|url| dom::open_external(&url))
        {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(%e, ?method, "scheduling link not opened, showing details");
                false
            }
        };
        send_dialog(DialogEvent::Launched { opened });
    };

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && dialog.get_untracked().is_open() {
            send_dialog(DialogEvent::Close);
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <section id=SectionId::CONTACT.as_str() class="contact">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        {contact::HEADLINE}
                        " "
                        <span class="gradient-text">{contact::HEADLINE_ACCENT}</span>
                    </h2>
                    <p class="section-description">{contact::INTRO}</p>
                </div>

                <div class="contact-grid">
                    <form class="card contact-form" on:submit=submit novalidate=true>
                        <h3>"Send Me a Message"</h3>
                        <div class="form-row">
                            <TextField label="Full Name *" kind="text" value=fields.name />
                            <TextField label="Email Address *" kind="email" value=fields.email />
                        </div>
                        <div class="form-row">
                            <TextField label="Company" kind="text" value=fields.company />
                            <label class="field">
                                <span>"Service Interest"</span>
                                <select
                                    prop:value=move || fields.service.get()
                                    on:change=move |ev| fields.service.set(event_target_value(&ev))
                                >
                                    <option value="">"Select a service"</option>
                                    {SERVICE_INTERESTS.iter().map(|service| {
                                        view! { <option value=*service>{*service}</option> }
                                    }).collect::<Vec<_>>()}
                                </select>
                            </label>
                        </div>
                        <label class="field">
                            <span>"Project Details *"</span>
                            <textarea
                                rows="5"
                                placeholder="Tell me about your project, goals, and timeline..."
                                prop:value=move || fields.message.get()
                                on:input=move |ev| fields.message.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <button type="submit" class="btn btn-primary btn-block">"Send Message"</button>
                        <StatusLine notifier=notifier />
                    </form>

                    <aside class="contact-side">
                        <div class="card">
                            <h3>"Get In Touch"</h3>
                            <ul class="contact-details">
                                {contact::DETAILS.iter().map(|detail| {
                                    let value = match detail.href {
                                        Some(href) => view! { <a href=href>{detail.value}</a> }.into_any(),
                                        None => view! { <span>{detail.value}</span> }.into_any(),
                                    };
                                    view! {
                                        <li>
                                            <Icon kind=detail.icon size="18" />
                                            <div>
                                                <span class="detail-label">{detail.label}</span>
                                                {value}
                                            </div>
                                        </li>
                                    }
                                }).collect::<Vec<_>>()}
                            </ul>
                            <div class="social-links">
                                {SOCIAL_LINKS.iter().map(|link| {
                                    view! {
                                        <a href=link.href target="_blank" rel="noopener noreferrer" aria-label=link.label>
                                            <Icon kind=link.icon size="20" />
                                        </a>
                                    }
                                }).collect::<Vec<_>>()}
                            </div>
                        </div>

                        <div class="card schedule-card">
                            <h3>"Book a Free Consultation"</h3>
                            <p>"30 minutes to discuss your goals and how I can help."</p>
                            <button
                                type="button"
                                class="btn btn-primary btn-block"
                                on:click=move |_| send_dialog(DialogEvent::Open)
                            >
                                <Icon kind=IconKind::Calendar size="18" />
                                " Schedule Meeting"
                            </button>
                        </div>

                        <div class="trust-signals">
                            {contact::TRUST_SIGNALS.iter().map(|signal| {
                                view! {
                                    <div class="trust-signal">
                                        <h4>{signal.title}</h4>
                                        <p>{signal.description}</p>
                                    </div>
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    </aside>
                </div>
            </div>

            <ScheduleDialog
                mode=dialog
                on_event=Callback::new(send_dialog)
                on_launch=Callback::new(launch)
                email=config.contact.recipient.clone()
                phone=config.contact.phone.clone()
            />
        </section>
    }
}

#[component]
fn TextField(label: &'static str, kind: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="field">
            <span>{label}</span>
            <input
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
fn ScheduleDialog(
    mode: RwSignal<DialogMode>,
    on_event: Callback<DialogEvent>,
    on_launch: Callback<ScheduleMethod>,
    email: String,
    phone: String,
) -> impl IntoView {
    let close = move |_| on_event.run(DialogEvent::Close);

    let choose = move || {
        view! {
            <h3>"Schedule a Consultation"</h3>
            <p>"How would you like to book your 30-minute call?"</p>
            <div class="dialog-actions">
                <button type="button" class="btn btn-primary" on:click=move |_| on_launch.run(ScheduleMethod::Calendar)>
                    "Add to Google Calendar"
                </button>
                <button type="button" class="btn btn-outline" on:click=move |_| on_launch.run(ScheduleMethod::Email)>
                    "Request by Email"
                </button>
                <button type="button" class="btn btn-link" on:click=move |_| on_event.run(DialogEvent::ShowDetails)>
                    "Show contact details"
                </button>
            </div>
        }
    };

    let details = move || {
        let (email, phone) = (email.clone(), phone.clone());
        view! {
            <h3>"Contact Me Directly"</h3>
            <p>"Reach out using either of these and I'll reply within 24 hours."</p>
            <dl class="dialog-details">
                <div class="detail-row">
                    <dt>"Email"</dt>
                    <dd>{email.clone()}</dd>
                    <CopyButton text=email label="Copy email" />
                </div>
                <div class="detail-row">
                    <dt>"Phone"</dt>
                    <dd>{phone.clone()}</dd>
                    <CopyButton text=phone label="Copy phone" />
                </div>
            </dl>
        }
    };

    move || match mode.get() {
        DialogMode::Closed => None,
        open => {
            let body = match open {
                DialogMode::ShowingDetails => details().into_any(),
                _ => choose().into_any(),
            };
            Some(view! {
                <div class="dialog-backdrop" on:click=close>
                    <div
                        class="dialog"
                        role="dialog"
                        aria-modal="true"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <button type="button" class="dialog-close" aria-label="Close" on:click=close>"✕"</button>
                        {body}
                    </div>
                </div>
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_scheduling_link_is_a_mailto() {
        let config = SiteConfig::default();
        let link = schedule_link(&config, ScheduleMethod::Email).unwrap();
        assert!(link.starts_with("mailto:phinidygeorge01@gmail.com?subject=Schedule"));
    }

    #[test]
    fn calendar_scheduling_link_targets_google_calendar() {
        let config = SiteConfig::default();
        let link = schedule_link(&config, ScheduleMethod::Calendar).unwrap();
        assert!(link.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE"));
    }
}
