use dioxus::prelude::*;

use crate::core::content::{self, MediaKind};
use crate::core::model::Testimonial;
use crate::core::remote::{self, RemoteData};

/// Gallery section: the photo grid and daily-impact strip are static content;
/// the testimonial cards are remotely sourced with the same one-shot
/// fetch-or-fallback contract as the about stats. A response with `n` entries
/// renders exactly `n` cards, in response order.
#[component]
pub fn GallerySection() -> Element {
    let mut testimonials = use_signal(|| RemoteData::<Vec<Testimonial>>::Loading);

    use_future(move || async move {
        let result = remote::fetch_json::<Vec<Testimonial>>("testimonials").await;
        testimonials.set(RemoteData::settle(
            result,
            content::FALLBACK_TESTIMONIALS.clone(),
        ));
    });

    let snapshot = testimonials();

    rsx! {
        section { id: "gallery", class: "gallery",
            div { class: "gallery__inner",
                div { class: "section-header",
                    h2 { "A Day in the Life of Our DSP Team" }
                    p {
                        "See how we deliver excellence, one package at a time. From dawn "
                        "to dusk, our dedicated team works tirelessly to serve our South "
                        "Florida community."
                    }
                }

                div { class: "gallery__grid",
                    for item in content::GALLERY_ITEMS.iter() {
                        figure { key: "{item.title}", class: "gallery-card",
                            div { class: "gallery-card__media",
                                img { src: "{item.src}", alt: "{item.title}", loading: "lazy" }
                                if item.kind == MediaKind::Video {
                                    span { class: "gallery-card__play", "▶" }
                                }
                            }
                            figcaption { class: "gallery-card__body",
                                h3 { {item.title} }
                                p { {item.description} }
                                div { class: "gallery-card__tags",
                                    for tag in item.tags {
                                        span { key: "{tag}", class: "badge badge--tag", {*tag} }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "gallery__impact",
                    h3 { "Our Daily Impact" }
                    div { class: "gallery__impact-grid",
                        for stat in content::DAILY_IMPACT.iter() {
                            div { key: "{stat.label}", class: "impact-card",
                                span { class: "impact-card__value", {stat.value} }
                                span { class: "impact-card__label", {stat.label} }
                            }
                        }
                    }
                }

                div { class: "gallery__testimonials",
                    h3 { "What Our Community Says" }
                    if snapshot.is_loading() {
                        p { class: "gallery__testimonials-loading", "Loading testimonials…" }
                    }
                    if let Some(entries) = snapshot.value() {
                        div { class: "gallery__testimonial-grid",
                            for entry in entries.iter() {
                                TestimonialCard {
                                    key: "{entry.name}",
                                    testimonial: entry.clone(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> Element {
    let stars = "★".repeat(usize::from(testimonial.rating.clamp(1, 5)));

    rsx! {
        blockquote { class: "testimonial-card",
            span { class: "testimonial-card__stars", "{stars}" }
            p { class: "testimonial-card__quote", "“{testimonial.quote}”" }
            footer {
                span { class: "testimonial-card__name", "{testimonial.name}" }
                span { class: "testimonial-card__location", "{testimonial.location}" }
            }
        }
    }
}
