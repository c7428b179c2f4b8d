//! Shared UI crate for the Galo Logistics site. Views and cross-platform logic live here.

pub mod core;
pub mod views;

pub mod components {
    // Fixed scroll-aware navigation bar (components/navbar.rs)
    pub mod navbar;
    pub use navbar::Navbar;

    // Site footer (components/footer.rs)
    pub mod footer;
    pub use footer::Footer;
}
