use dioxus::prelude::*;

use crate::core::content;
use crate::core::scroll::{self, SectionId};

const HERO_BACKGROUND: &str = "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80";

/// Full-height landing section. The background div carries the id the
/// parallax listener in [`crate::views::Home`] looks up on each scroll tick.
#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section { id: "hero", class: "hero",
            div {
                id: "hero-bg",
                class: "hero__background",
                style: "background-image: linear-gradient(rgba(15, 31, 61, 0.7), rgba(15, 31, 61, 0.5)), url('{HERO_BACKGROUND}');",
            }

            div { class: "hero__content",
                span { class: "hero__kicker", {content::COMPANY_NAME.to_uppercase()} }
                h1 { class: "hero__title",
                    "Reliable. Local. "
                    span { class: "hero__title-accent", "Amazon DSP" }
                    " You Can Count On."
                }
                p { class: "hero__subtitle",
                    "Serving {content::SERVICE_AREA} with excellence, speed, and dedication. "
                    "Your packages delivered with care by your local neighbors."
                }
                div { class: "hero__actions",
                    button {
                        r#type: "button",
                        class: "hero__cta hero__cta--primary",
                        onclick: move |_| scroll::scroll_to(SectionId::Contact),
                        "Get In Touch"
                    }
                    button {
                        r#type: "button",
                        class: "hero__cta hero__cta--secondary",
                        onclick: move |_| scroll::scroll_to(SectionId::About),
                        "Learn More"
                    }
                }
            }

            button {
                r#type: "button",
                class: "hero__scroll-hint",
                aria_label: "Scroll to the about section",
                onclick: move |_| scroll::scroll_to(SectionId::About),
                "⌄"
            }
        }
    }
}
