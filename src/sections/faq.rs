//! Frequently asked questions as a single-open accordion.
//!
//! [`Accordion`] holds the one open item id. The rendered markup reflects it
//! (`aria-expanded`, `is-open`, a collapsed height on closed answers) and
//! `site.js` performs the same transitions on click, measuring the answer's
//! height for the slide animation.

use crate::components::icons::Icon;
use crate::components::section::{Background, SectionWrapper};
use crate::sections::{list_or, markdown, section_header, text_or};
use crate::types::{Business, FaqItem};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HEADLINE: &str = "Frequently Asked Questions";

pub fn default_subheadline(business_name: &str) -> String {
    format!("Got questions? We've got answers. Here are some of the most common questions we receive about {business_name}.")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaqProps {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub faqs: Vec<FaqItem>,
}

pub fn default_faqs() -> Vec<FaqItem> {
    [
        (
            "What areas do you service?",
            "We proudly serve the greater metropolitan area and surrounding communities within a 50-mile radius. If you're unsure whether we cover your location, please give us a call and we'll be happy to help.",
        ),
        (
            "Do you offer free estimates?",
            "Yes! We provide free, no-obligation estimates for all our services. Our technician will assess your needs, explain the options, and provide a detailed quote before any work begins.",
        ),
        (
            "Are you licensed and insured?",
            "Absolutely. We are fully licensed, bonded, and insured. We maintain all required certifications and carry comprehensive liability insurance for your protection and peace of mind.",
        ),
        (
            "What payment methods do you accept?",
            "We accept all major credit cards, debit cards, checks, and cash. For larger projects, we also offer financing options with approved credit. Payment is due upon completion of work.",
        ),
        (
            "Do you offer emergency services?",
            "Yes, we offer 24/7 emergency services for urgent situations. Our emergency response team is always ready to help, day or night. Additional fees may apply for after-hours calls.",
        ),
        (
            "What is your warranty policy?",
            "We stand behind our work with a comprehensive warranty. Parts are covered by manufacturer warranties, and our labor is guaranteed for a minimum of one year. Specific warranty terms vary by service.",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (question, answer))| FaqItem {
        id: (i + 1).to_string(),
        question: question.into(),
        answer: answer.into(),
    })
    .collect()
}

/// Which FAQ item, if any, is expanded. At most one is open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<String>,
}

impl Accordion {
    /// Open `id`, closing any other item; toggling the open item closes it.
    pub fn toggle(&mut self, id: &str) {
        if self.open.as_deref() == Some(id) {
            self.open = None;
        } else {
            self.open = Some(id.to_string());
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open.as_deref()
    }
}

pub fn render_faq(business: &Business, props: &FaqProps, accordion: &Accordion) -> Markup {
    let faqs = list_or(&props.faqs, default_faqs);
    let headline = text_or(props.headline.as_deref(), || DEFAULT_HEADLINE.into());
    let subheadline = text_or(props.subheadline.as_deref(), || default_subheadline(&business.name));

    SectionWrapper::new("faq", Background::White).render(html! {
        div.faq-column {
            (section_header("FAQ", &headline, &subheadline))
            div.faq-list data-accordion {
                @for faq in faqs.iter() {
                    (faq_item(faq, accordion.is_open(&faq.id)))
                }
            }
            div.section-footer {
                p { "Still have questions?" }
                a.text-link href="#contact" tabindex="0" {
                    "Contact us directly"
                    (Icon::ArrowRight.svg("icon icon-sm"))
                }
            }
        }
    })
}

fn faq_item(faq: &FaqItem, open: bool) -> Markup {
    let answer_id = format!("faq-answer-{}", faq.id);
    let expanded = if open { "true" } else { "false" };
    html! {
        div.faq-item.is-open[open] data-faq-item=(faq.id) {
            button.faq-question type="button" aria-expanded=(expanded)
                aria-controls=(answer_id) tabindex="0" {
                span.faq-question-text { (faq.question) }
                span.faq-chevron { (Icon::ChevronDown.svg("icon icon-sm")) }
            }
            div.faq-answer id=(answer_id) role="region" style=[(!open).then_some("height: 0px")] {
                div.faq-answer-inner { (markdown(&faq.answer)) }
            }
        }
    }
}
