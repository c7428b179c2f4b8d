use dioxus::prelude::*;

use crate::core::content;
use crate::core::model::CompanyStats;
use crate::core::remote::{self, RemoteData};

/// About section: remotely sourced headline stats, mission copy, coverage map.
///
/// The stats strip follows the resilient-loader contract: one fetch when the
/// view mounts (`use_future` does not re-run on re-renders), skeleton cards
/// while loading, and the baked-in fallback figures if the request fails for
/// any reason. The visitor never sees an error state.
#[component]
pub fn AboutSection() -> Element {
    let mut stats = use_signal(|| RemoteData::<CompanyStats>::Loading);

    use_future(move || async move {
        let result = remote::fetch_json::<CompanyStats>("stats").await;
        stats.set(RemoteData::settle(result, content::FALLBACK_STATS.clone()));
    });

    let snapshot = stats();

    rsx! {
        section { id: "about", class: "about",
            div { class: "about__inner",
                div { class: "section-header",
                    h2 { "About {content::COMPANY_NAME}" }
                    p {
                        "Born and raised in South Florida, we understand the pulse of our "
                        "community. As a proud DSP partner, we deliver more than packages – "
                        "we deliver trust."
                    }
                }

                div { class: "about__stats",
                    if snapshot.is_loading() {
                        for slot in 0..4 {
                            div { key: "{slot}", class: "stat-card stat-card--skeleton",
                                div { class: "stat-card__value-skeleton" }
                                div { class: "stat-card__label-skeleton" }
                            }
                        }
                    }
                    if let Some(figures) = snapshot.value() {
                        for (label , value) in content::stat_cards(figures) {
                            div { key: "{label}", class: "stat-card",
                                div { class: "stat-card__value", "{value}" }
                                div { class: "stat-card__label", "{label}" }
                            }
                        }
                    }
                }

                div { class: "about__mission",
                    div { class: "about__mission-copy",
                        h3 { "Our Mission" }
                        p {
                            "At {content::COMPANY_NAME}, we're not just delivering packages – "
                            "we're connecting families, supporting local businesses, and "
                            "building stronger communities throughout South Florida."
                        }
                        p {
                            "Our team of dedicated drivers knows every street, every "
                            "neighborhood, and treats every delivery with the care it "
                            "deserves. We're your neighbors, delivering for neighbors."
                        }
                        ul { class: "about__credentials",
                            li { "Family-owned and operated since 2019" }
                            li { "Fully licensed and insured DSP" }
                            li { "Top-rated delivery service partner" }
                        }
                    }
                    div { class: "about__mission-badge",
                        span { class: "about__mission-badge-value", "5+" }
                        span { "Years Serving" }
                        span { "South Florida" }
                    }
                }

                div { class: "about__coverage",
                    div {
                        h3 { "Our Coverage Area" }
                        p {
                            "Proudly serving the heart of Palm Beach County with reliable, "
                            "fast, and friendly delivery services."
                        }
                        div { class: "about__coverage-grid",
                            for area in content::COVERAGE_AREAS {
                                span { key: "{area}", class: "badge", "{area}" }
                            }
                        }
                    }
                    div { class: "about__coverage-card",
                        span { class: "about__coverage-card-title", "Complete Coverage" }
                        span { "From Boca Raton to West Palm Beach, we've got you covered" }
                    }
                }
            }
        }
    }
}
