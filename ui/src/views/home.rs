use dioxus::prelude::*;

use crate::components::{Footer, Navbar};
use crate::views::{AboutSection, ContactSection, GallerySection, HeroSection};

/// The single page: fixed navbar, the four anchored sections, footer.
///
/// This view owns the parallax scroll listener for the hero background. Like
/// the navbar's listener, it is attached on mount and dropped with the view,
/// so nothing keeps firing after navigation tears the page down.
#[component]
pub fn Home() -> Element {
    #[cfg(target_arch = "wasm32")]
    use_hook(|| {
        use std::rc::Rc;
        use wasm_bindgen::JsCast;

        web_sys::window().map(|window| {
            Rc::new(gloo_events::EventListener::new(
                &window,
                "scroll",
                move |_| {
                    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                        return;
                    };
                    let Some(background) = document
                        .get_element_by_id("hero-bg")
                        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
                    else {
                        return;
                    };
                    // Background drifts at half scroll speed, opposite direction.
                    let rate = crate::core::scroll::scroll_offset() * -0.5;
                    let _ = background
                        .style()
                        .set_property("transform", &format!("translate3d(0, {rate}px, 0)"));
                },
            ))
        })
    });

    rsx! {
        div { class: "page page-home",
            Navbar {}
            main {
                HeroSection {}
                AboutSection {}
                GallerySection {}
                ContactSection {}
            }
            Footer {}
        }
    }
}
