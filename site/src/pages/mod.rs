// Routed pages

mod legal;
mod main_page;
mod not_found;

pub use legal::{PrivacyPage, TermsPage};
pub use main_page::MainPage;
pub use not_found::NotFound;
