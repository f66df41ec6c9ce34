// Reusable view pieces

mod copy_button;
mod icons;
mod status;

pub use copy_button::CopyButton;
pub use icons::Icon;
pub use status::{Notifier, StatusLine};
