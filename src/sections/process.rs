//! Numbered "how it works" timeline.

use crate::components::icons::Icon;
use crate::components::section::{Background, SectionWrapper};
use crate::sections::{list_or, section_header, text_or};
use crate::types::{Business, ProcessStep};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HEADLINE: &str = "How It Works";

pub fn default_subheadline(business_name: &str) -> String {
    format!("Working with {business_name} is simple and straightforward. Here's what you can expect.")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessProps {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub steps: Vec<ProcessStep>,
}

pub fn default_steps() -> Vec<ProcessStep> {
    [
        (
            "Contact Us",
            "Reach out by phone or through our online form. We'll respond promptly to discuss your needs.",
            Icon::Phone,
        ),
        (
            "Free Estimate",
            "We'll assess your situation and provide a detailed, no-obligation quote with transparent pricing.",
            Icon::ClipboardList,
        ),
        (
            "Schedule Service",
            "Choose a time that works best for you. We offer flexible scheduling to fit your busy life.",
            Icon::Calendar,
        ),
        (
            "Job Complete",
            "Our experts complete the work to the highest standards. We clean up and ensure your satisfaction.",
            Icon::CheckCircle,
        ),
    ]
    .into_iter()
    .zip(1u32..)
    .map(|((title, description, icon), number)| ProcessStep {
        id: number.to_string(),
        number,
        title: title.into(),
        description: description.into(),
        icon: Some(icon),
    })
    .collect()
}

pub fn render_process(business: &Business, props: &ProcessProps) -> Markup {
    let steps = list_or(&props.steps, default_steps);
    let headline = text_or(props.headline.as_deref(), || DEFAULT_HEADLINE.into());
    let subheadline = text_or(props.subheadline.as_deref(), || default_subheadline(&business.name));
    let last = steps.len().saturating_sub(1);

    SectionWrapper::new("process", Background::Light).render(html! {
        (section_header("Our Process", &headline, &subheadline))
        ol.process-steps {
            @for (index, step) in steps.iter().enumerate() {
                li.process-step.process-step--last[index == last] {
                    div.step-circle {
                        @if let Some(icon) = step.icon {
                            (icon.svg("icon icon-lg"))
                        } @else {
                            span.step-circle-number { (step.number) }
                        }
                        span.step-badge aria-hidden="true" { (step.number) }
                    }
                    @if index != last {
                        div.step-connector aria-hidden="true" {}
                    }
                    div.step-body {
                        h3.step-title { (step.title) }
                        p.step-text { (step.description) }
                    }
                }
            }
        }
    })
}
