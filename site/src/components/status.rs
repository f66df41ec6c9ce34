use std::time::Duration;

use leptos::prelude::*;
use portfolio::contact::{StatusBoard, StatusKind};

/// Handle for showing transient status messages in one section.
#[derive(Clone, Copy)]
pub struct Notifier {
    board: RwSignal<StatusBoard>,
    dismiss_after: Duration,
}

impl Notifier {
    pub fn new(dismiss_ms: u64) -> Self {
        Notifier {
            board: RwSignal::new(StatusBoard::default()),
            dismiss_after: Duration::from_millis(dismiss_ms),
        }
    }

    pub fn show(&self, kind: StatusKind, title: impl Into<String>, detail: impl Into<String>) {
        let (title, detail) = (title.into(), detail.into());
        let Some(id) = self.board.try_update(|board| board.show(kind, title, detail)) else {
            return;
        };
        let board = self.board;
        set_timeout(
            move || {
                board.update(|board| {
                    board.dismiss(id);
                });
            },
            self.dismiss_after,
        );
    }

    pub fn success(&self, title: impl Into<String>, detail: impl Into<String>) {
        self.show(StatusKind::Success, title, detail);
    }

    pub fn error(&self, title: impl Into<String>, detail: impl Into<String>) {
        self.show(StatusKind::Error, title, detail);
    }
}

pub fn status_class(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Success => "status status-success",
        StatusKind::Error => "status status-error",
    }
}

/// Renders the current message of `notifier`, if any.
#[component]
pub fn StatusLine(notifier: Notifier) -> impl IntoView {
    move || {
        notifier.board.with(|board| {
            board.current().map(|message| {
                let (title, detail) = (message.title.clone(), message.detail.clone());
                view! {
                    <div class=status_class(message.kind) role="status">
                        <strong>{title}</strong>
                        <span>{detail}</span>
                    </div>
                }
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes_differ_by_kind() {
        assert_ne!(status_class(StatusKind::Success), status_class(StatusKind::Error));
        assert!(status_class(StatusKind::Error).contains("status-error"));
    }
}
