#![cfg(test)]
/*!
Theme selector lint for the web build.

The Rust components reference CSS classes by string, so a stylesheet refactor
can silently strip the styling from a live section. This test embeds both
stylesheets at compile time and asserts that every class the components rely
on is still present. If you intentionally rename a selector, update the
component markup and this list together.
*/

const MAIN_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));
const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

/// Selectors the page components render against.
const REQUIRED_MAIN_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".section-header",
    ".badge",
    // Hero
    ".hero {",
    ".hero__background",
    ".hero__cta--primary",
    ".hero__scroll-hint",
    // About
    ".about__stats",
    ".stat-card {",
    ".stat-card--skeleton",
    ".about__coverage",
    // Gallery
    ".gallery__grid",
    ".gallery-card",
    ".gallery-card__play",
    ".impact-card",
    ".testimonial-card",
    ".testimonial-card__stars",
    // Contact
    ".contact__form",
    ".contact__ack",
    ".contact__submit",
    ".contact-card",
    ".faq-item",
    ".faq-item--open",
    // Footer
    ".footer {",
    ".footer__link",
    ".footer__legal",
];

const REQUIRED_NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar--scrolled",
    ".navbar__brand",
    ".navbar__link",
    ".navbar__link--active",
    ".navbar__cta",
    ".navbar__toggle",
    ".navbar-menu__backdrop",
    ".navbar-menu__panel",
    ".navbar-menu__link--active",
];

#[test]
fn main_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_MAIN_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !MAIN_CSS.contains(sel))
        .collect();
    assert!(
        missing.is_empty(),
        "main.css is missing selectors: {missing:?}"
    );
}

#[test]
fn navbar_stylesheet_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_NAVBAR_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !NAVBAR_CSS.contains(sel))
        .collect();
    assert!(
        missing.is_empty(),
        "navbar.css is missing selectors: {missing:?}"
    );
}
