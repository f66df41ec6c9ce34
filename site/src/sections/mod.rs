// Main-page sections plus the chrome around them

mod about;
mod blog;
mod contact;
mod footer;
mod home;
mod nav;
mod projects;
mod services;

pub use about::AboutSection;
pub use blog::BlogSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use home::HomeSection;
pub use nav::Nav;
pub use projects::PortfolioSection;
pub use services::ServicesSection;
