//! Site chrome: the composition root, header, page frame, footer and the
//! floating mail button.

mod app;
mod footer;
mod navbar;
mod page;
mod quick_contact;

pub use app::RootApp;
pub use footer::Footer;
pub use navbar::{NavLinks, Navbar};
pub use page::PageFrame;
pub use quick_contact::QuickContact;
