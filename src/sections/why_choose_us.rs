//! Selling points laid out as icon cards.

use crate::components::icons::Icon;
use crate::components::section::{Background, SectionWrapper};
use crate::sections::{list_or, section_header, text_or};
use crate::types::{Business, Feature};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HEADLINE: &str = "Why Choose Us";

pub fn default_subheadline(business_name: &str) -> String {
    format!("Discover what sets {business_name} apart and why our customers trust us with their most important projects.")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WhyChooseUsProps {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub features: Vec<Feature>,
}

pub fn default_features() -> Vec<Feature> {
    [
        (
            Icon::ShieldCheck,
            "Licensed & Insured",
            "Fully licensed, bonded, and insured for your complete peace of mind. We meet all industry standards.",
        ),
        (
            Icon::Clock,
            "Fast Response Times",
            "We respect your time. Expect prompt arrivals, efficient work, and minimal disruption to your day.",
        ),
        (
            Icon::Cash,
            "Transparent Pricing",
            "No hidden fees or surprises. We provide detailed quotes upfront so you know exactly what to expect.",
        ),
        (
            Icon::Smile,
            "Satisfaction Guaranteed",
            "Your happiness is our priority. We stand behind our work with a 100% satisfaction guarantee.",
        ),
        (
            Icon::Beaker,
            "Expert Technicians",
            "Our team undergoes continuous training to stay current with the latest techniques and technologies.",
        ),
        (
            Icon::Phone,
            "24/7 Availability",
            "Emergencies don't wait, and neither do we. Available around the clock when you need us most.",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (icon, title, description))| Feature {
        id: (i + 1).to_string(),
        icon,
        title: title.into(),
        description: description.into(),
    })
    .collect()
}

pub fn render_why_choose_us(business: &Business, props: &WhyChooseUsProps) -> Markup {
    let features = list_or(&props.features, default_features);
    let headline = text_or(props.headline.as_deref(), || DEFAULT_HEADLINE.into());
    let subheadline = text_or(props.subheadline.as_deref(), || default_subheadline(&business.name));
    let label = format!("The {} Difference", business.name);

    SectionWrapper::new("why-us", Background::White)
        .class(Some("why-us"))
        .render(html! {
            div.why-us-pattern aria-hidden="true" {}
            (section_header(&label, &headline, &subheadline))
            div.features-grid {
                @for feature in features.iter() {
                    article.card.feature-card {
                        div.card-icon { (feature.icon.svg("icon icon-lg")) }
                        h3.card-title { (feature.title) }
                        p.card-text { (feature.description) }
                    }
                }
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::escaped;

    #[test]
    fn default_features_render() {
        let html = render_why_choose_us(&Business::named("Acme"), &WhyChooseUsProps::default())
            .into_string();
        assert!(html.contains(&escaped("Licensed & Insured")));
        assert!(html.contains(&escaped(
            "Emergencies don't wait, and neither do we. Available around the clock when you need us most."
        )));
        assert_eq!(html.matches("feature-card").count(), 6);
    }

    #[test]
    fn header_interpolates_name() {
        let html = render_why_choose_us(&Business::named("Acme"), &WhyChooseUsProps::default())
            .into_string();
        assert!(html.contains("The Acme Difference"));
        assert!(html.contains("Why Choose Us"));
        assert!(html.contains(
            "Discover what sets Acme apart and why our customers trust us with their most important projects."
        ));
        assert!(html.contains(r#"id="why-us""#));
    }

    #[test]
    fn custom_features_replace_defaults() {
        let props = WhyChooseUsProps {
            features: vec![Feature {
                id: "a".into(),
                icon: Icon::Star,
                title: "Family owned".into(),
                description: "Since 1998.".into(),
            }],
            ..Default::default()
        };
        let html = render_why_choose_us(&Business::named("Acme"), &props).into_string();
        assert!(html.contains("Family owned"));
        assert!(!html.contains("Transparent Pricing"));
    }
}
