use dioxus::prelude::*;

use crate::core::content;
use crate::core::scroll::{self, SectionId};

/// Site footer: brand, quick links back to the page sections, contact block.
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    span { class: "footer__brand-mark", "GL" }
                    div {
                        p { class: "footer__brand-name", "{content::COMPANY_NAME}" }
                        p { class: "footer__brand-subtitle", "{content::COMPANY_TAGLINE}" }
                    }
                    p { class: "footer__blurb",
                        "Delivering for our South Florida neighbors, one package at a time."
                    }
                }

                div { class: "footer__links",
                    h4 { "Quick Links" }
                    for section in SectionId::ALL {
                        button {
                            key: "{section.anchor()}",
                            r#type: "button",
                            class: "footer__link",
                            onclick: move |_| scroll::scroll_to(section),
                            {section.label()}
                        }
                    }
                }

                div { class: "footer__contact",
                    h4 { "Contact" }
                    p { "{content::COMPANY_PHONE}" }
                    p { "{content::COMPANY_EMAIL}" }
                    p { "{content::SERVICE_AREA}" }
                }
            }

            div { class: "footer__legal",
                p { "© {current_year()} {content::COMPANY_NAME}. All rights reserved." }
            }
        }
    }
}

fn current_year() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().get_full_year()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        2026
    }
}
