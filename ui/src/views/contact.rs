use dioxus::prelude::*;

use crate::core::content;
use crate::core::form::{ContactForm, Field};

/// Contact section: the message form, contact info cards, and the FAQ
/// accordion.
///
/// Form submission is simulated. The browser default is suppressed, an
/// acknowledgment notice appears (and auto-dismisses a few seconds later),
/// and all three fields reset to empty — no request is made, and the only
/// validation is the inputs' native `required` attribute.
#[component]
pub fn ContactSection() -> Element {
    let mut form = use_signal(ContactForm::default);
    let mut acknowledged = use_signal(|| false);
    let mut open_faq = use_signal(|| Option::<usize>::None);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        form.write().reset();
        acknowledged.set(true);

        #[cfg(target_arch = "wasm32")]
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(6_000).await;
            acknowledged.set(false);
        });
    };

    let current = form();

    rsx! {
        section { id: "contact", class: "contact",
            div { class: "contact__inner",
                div { class: "section-header",
                    h2 { "Get In Touch" }
                    p {
                        "Have questions about our services? Need to report a delivery "
                        "issue? We're here to help and always happy to hear from our "
                        "community."
                    }
                }

                div { class: "contact__columns",
                    div { class: "contact__form-card",
                        h3 { "Send Us a Message" }

                        if acknowledged() {
                            div { class: "contact__ack", role: "status",
                                strong { "{content::CONTACT_ACK_TITLE}" }
                                p { "{content::CONTACT_ACK_BODY}" }
                            }
                        }

                        form { class: "contact__form", onsubmit: on_submit,
                            label { r#for: "contact-name", "Full Name" }
                            input {
                                id: "contact-name",
                                name: "name",
                                r#type: "text",
                                required: true,
                                placeholder: "Enter your full name",
                                value: "{current.name}",
                                oninput: move |evt| form.write().set(Field::Name, evt.value()),
                            }

                            label { r#for: "contact-email", "Email Address" }
                            input {
                                id: "contact-email",
                                name: "email",
                                r#type: "email",
                                required: true,
                                placeholder: "Enter your email address",
                                value: "{current.email}",
                                oninput: move |evt| form.write().set(Field::Email, evt.value()),
                            }

                            label { r#for: "contact-message", "Message" }
                            textarea {
                                id: "contact-message",
                                name: "message",
                                required: true,
                                rows: 5,
                                placeholder: "How can we help you today?",
                                value: "{current.message}",
                                oninput: move |evt| form.write().set(Field::Message, evt.value()),
                            }

                            button { r#type: "submit", class: "contact__submit", "Send Message" }
                        }
                    }

                    div { class: "contact__cards",
                        for card in content::CONTACT_CARDS.iter() {
                            div { key: "{card.title}", class: "contact-card",
                                h4 { {card.title} }
                                p { class: "contact-card__details", {card.details} }
                                p { class: "contact-card__subtext", {card.subtext} }
                            }
                        }
                    }
                }

                div { class: "contact__faq",
                    h3 { "Frequently Asked Questions" }
                    div { class: "faq-list",
                        for (index , faq) in content::FAQS.iter().enumerate() {
                            div {
                                key: "{faq.question}",
                                class: if open_faq() == Some(index) {
                                    "faq-item faq-item--open"
                                } else {
                                    "faq-item"
                                },
                                button {
                                    r#type: "button",
                                    class: "faq-item__question",
                                    aria_expanded: open_faq() == Some(index),
                                    onclick: move |_| {
                                        let next = if *open_faq.peek() == Some(index) {
                                            None
                                        } else {
                                            Some(index)
                                        };
                                        open_faq.set(next);
                                    },
                                    {faq.question}
                                }
                                if open_faq() == Some(index) {
                                    p { class: "faq-item__answer", {faq.answer} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
