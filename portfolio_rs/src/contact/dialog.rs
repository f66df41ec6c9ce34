//! View state for the contact section: the scheduling dialog and the
//! transient status line.

/// Which part of the scheduling dialog is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogMode {
    #[default]
    Closed,
    /// Asking whether to book through the calendar or by email.
    ChoosingMethod,
    /// Showing the address and phone number for manual contact.
    ShowingDetails,
}

/// How the visitor wants to book a consultation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleMethod {
    Calendar,
    Email,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogEvent {
    Open,
    /// The chosen method's link was opened (`true`) or the popup was blocked.
    Launched { opened: bool },
    ShowDetails,
    Close,
}

impl DialogMode {
    pub fn next(self, event: DialogEvent) -> DialogMode {
        match (self, event) {
            (_, DialogEvent::Close) => DialogMode::Closed,
            (_, DialogEvent::ShowDetails) => DialogMode::ShowingDetails,
            (DialogMode::Closed, DialogEvent::Open) => DialogMode::ChoosingMethod,
            (mode, DialogEvent::Open) => mode,
            (_, DialogEvent::Launched { opened: true }) => DialogMode::Closed,
            (_, DialogEvent::Launched { opened: false }) => DialogMode::ShowingDetails,
        }
    }

    pub fn is_open(self) -> bool {
        self != DialogMode::Closed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// One inline status message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub id: u64,
    pub kind: StatusKind,
    pub title: String,
    pub detail: String,
}

/// Holds at most one status message; each message gets a fresh id so a
/// pending dismissal timer cannot remove a newer message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusBoard {
    current: Option<StatusMessage>,
    next_id: u64,
}

impl StatusBoard {
    /// Shows a message, replacing any previous one. Returns its id for the
    /// dismissal timer.
    pub fn show(
        &mut self,
        kind: StatusKind,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(StatusMessage {
            id,
            kind,
            title: title.into(),
            detail: detail.into(),
        });
        id
    }

    /// Clears the message only if it is still the one with `id`.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|message| message.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduling_flow() {
        let mode = DialogMode::default();
        assert!(!mode.is_open());

        let mode = mode.next(DialogEvent::Open);
        assert_eq!(mode, DialogMode::ChoosingMethod);
        assert_eq!(mode.next(DialogEvent::Launched { opened: true }), DialogMode::Closed);
        assert_eq!(
            mode.next(DialogEvent::Launched { opened: false }),
            DialogMode::ShowingDetails
        );
    }

    #[test]
    fn open_does_not_reset_details_view() {
        let mode = DialogMode::ShowingDetails.next(DialogEvent::Open);
        assert_eq!(mode, DialogMode::ShowingDetails);
        assert_eq!(mode.next(DialogEvent::Close), DialogMode::Closed);
        assert_eq!(DialogMode::Closed.next(DialogEvent::ShowDetails), DialogMode::ShowingDetails);
    }

    #[test]
    fn stale_dismissal_keeps_newer_message() {
        let mut board = StatusBoard::default();
        let first = board.show(StatusKind::Error, "Error", "bad email");
        let second = board.show(StatusKind::Success, "Message Prepared!", "check your mail client");

        assert!(!board.dismiss(first));
        assert_eq!(board.current().map(|m| m.id), Some(second));
        assert!(board.dismiss(second));
        assert!(board.current().is_none());
        assert!(!board.dismiss(second));
    }
}
