use dioxus::prelude::*;

use crate::core::content;
use crate::core::scroll::{self, SectionId};

// Navbar stylesheet (shared by the fixed bar and the mobile menu)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Sections that get a plain nav link; Contact is rendered as the CTA button.
const NAV_SECTIONS: [SectionId; 3] = [SectionId::Home, SectionId::About, SectionId::Gallery];

/// Fixed navigation bar.
///
/// Owns the page scroll listener: attached when the component mounts and
/// detached when it unmounts, because the `EventListener` stored by
/// `use_hook` is dropped with the component and its `Drop` impl removes the
/// DOM handler. No free-standing global listener survives the view.
///
/// Every scroll tick re-reads the live section geometry and derives:
/// - `scrolled`: past the 50px threshold, switches the bar to its solid look;
/// - `active`: the section under the probe point, highlighted in the links.
///   Ticks where no section matches keep the previous highlight.
#[component]
pub fn Navbar() -> Element {
    let mut scrolled = use_signal(|| false);
    let mut active = use_signal(|| SectionId::Home);
    let mut menu_open = use_signal(|| false);

    #[cfg(target_arch = "wasm32")]
    use_hook(|| {
        use std::rc::Rc;
        web_sys::window().map(|window| {
            Rc::new(gloo_events::EventListener::new(
                &window,
                "scroll",
                move |_| {
                    let offset = scroll::scroll_offset();

                    let now_scrolled = scroll::is_scrolled(offset);
                    if *scrolled.peek() != now_scrolled {
                        scrolled.set(now_scrolled);
                    }

                    // Geometry is captured fresh on every tick, never cached.
                    let bounds = scroll::capture_bounds();
                    if let Some(section) = scroll::active_section(offset, &bounds) {
                        if *active.peek() != section {
                            active.set(section);
                        }
                    }
                },
            ))
        })
    });

    let mut go_to = move |section: SectionId| {
        scroll::scroll_to(section);
        menu_open.set(false);
    };

    let bar_class = if scrolled() {
        "navbar navbar--scrolled"
    } else {
        "navbar"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "{bar_class}",
            div { class: "navbar__inner",
                // Brand
                div {
                    class: "navbar__brand",
                    onclick: move |_| go_to(SectionId::Home),
                    span { class: "navbar__brand-mark", "GL" }
                    div { class: "navbar__brand-text",
                        span { class: "navbar__brand-name", {content::COMPANY_NAME.to_uppercase()} }
                        span { class: "navbar__brand-subtitle", "{content::COMPANY_TAGLINE}" }
                    }
                }

                // Desktop links
                nav { class: "navbar__links",
                    for section in NAV_SECTIONS {
                        button {
                            key: "{section.anchor()}",
                            r#type: "button",
                            class: if active() == section {
                                "navbar__link navbar__link--active"
                            } else {
                                "navbar__link"
                            },
                            onclick: move |_| go_to(section),
                            {section.label()}
                        }
                    }
                    button {
                        r#type: "button",
                        class: "navbar__cta",
                        onclick: move |_| go_to(SectionId::Contact),
                        {SectionId::Contact.label()}
                    }
                }

                // Mobile menu toggle
                button {
                    r#type: "button",
                    class: "navbar__toggle",
                    aria_label: "Toggle navigation menu",
                    aria_expanded: menu_open(),
                    onclick: move |_| {
                        let open = *menu_open.peek();
                        menu_open.set(!open);
                    },
                    if menu_open() { "✕" } else { "☰" }
                }
            }
        }

        if menu_open() {
            div { class: "navbar-menu",
                div {
                    class: "navbar-menu__backdrop",
                    onclick: move |_| menu_open.set(false),
                }
                div { class: "navbar-menu__panel",
                    for section in NAV_SECTIONS {
                        button {
                            key: "{section.anchor()}",
                            r#type: "button",
                            class: if active() == section {
                                "navbar-menu__link navbar-menu__link--active"
                            } else {
                                "navbar-menu__link"
                            },
                            onclick: move |_| go_to(section),
                            {section.label()}
                        }
                    }
                    button {
                        r#type: "button",
                        class: "navbar-menu__cta",
                        onclick: move |_| go_to(SectionId::Contact),
                        {SectionId::Contact.label()}
                    }
                }
            }
        }
    }
}
