//! Side-by-side pricing plans with an optional "Most Popular" highlight.

use crate::components::button::{Button, Size, Variant};
use crate::components::icons::Icon;
use crate::components::section::{Background, SectionWrapper, class_list};
use crate::sections::{list_or, section_header, text_or};
use crate::types::PricingPlan;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HEADLINE: &str = "Simple, Transparent Pricing";
pub const DEFAULT_CTA_TEXT: &str = "Get Started";
pub const DEFAULT_CTA_HREF: &str = "#contact";
pub const DEFAULT_SUBHEADLINE: &str =
    "Choose the plan that works best for you. All plans include our commitment to quality service.";
pub const DEFAULT_NOTE: &str =
    "Prices shown are starting prices. Final pricing may vary based on your specific needs.";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingProps {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub plans: Vec<PricingPlan>,
    pub note: Option<String>,
}

pub fn default_plans() -> Vec<PricingPlan> {
    let plan = |id: &str,
                name: &str,
                description: &str,
                price: &str,
                period: &str,
                features: &[&str],
                popular: bool,
                cta_text: &str| PricingPlan {
        id: id.into(),
        name: name.into(),
        description: Some(description.into()),
        price: price.into(),
        period: Some(period.into()),
        features: features.iter().map(|f| f.to_string()).collect(),
        popular,
        cta_text: Some(cta_text.into()),
        cta_href: Some("#contact".into()),
    };
    vec![
        plan(
            "basic",
            "Basic",
            "Essential coverage for routine needs",
            "$99",
            "per visit",
            &[
                "Standard service call",
                "Basic diagnostics",
                "Parts at retail price",
                "30-day labor warranty",
                "Mon-Fri scheduling",
            ],
            false,
            "Get Started",
        ),
        plan(
            "premium",
            "Premium",
            "Most popular for homeowners",
            "$49",
            "per month",
            &[
                "Priority scheduling",
                "Annual maintenance included",
                "15% discount on parts",
                "1-year labor warranty",
                "24/7 emergency support",
                "No overtime charges",
            ],
            true,
            "Choose Premium",
        ),
        plan(
            "commercial",
            "Commercial",
            "Tailored solutions for businesses",
            "Custom",
            "pricing",
            &[
                "Dedicated account manager",
                "Same-day service guarantee",
                "20% discount on all services",
                "Extended warranties available",
                "Quarterly system reviews",
                "Priority emergency response",
                "Flexible billing options",
            ],
            false,
            "Contact Sales",
        ),
    ]
}

/// Grid modifier for the number of plans: two and three plans are centred
/// in a narrower grid, anything else uses the full four-column width.
fn grid_class(count: usize) -> &'static str {
    match count {
        2 => "pricing-grid pricing-grid--two",
        3 => "pricing-grid pricing-grid--three",
        _ => "pricing-grid pricing-grid--four",
    }
}

pub fn render_pricing(props: &PricingProps) -> Markup {
    let plans = list_or(&props.plans, default_plans);
    let headline = text_or(props.headline.as_deref(), || DEFAULT_HEADLINE.into());
    let subheadline = text_or(props.subheadline.as_deref(), || DEFAULT_SUBHEADLINE.into());
    let note = text_or(props.note.as_deref(), || DEFAULT_NOTE.into());

    SectionWrapper::new("pricing", Background::Light).render(html! {
        (section_header("Pricing Plans", &headline, &subheadline))
        div class=(grid_class(plans.len())) {
            @for plan in plans.iter() {
                (pricing_card(plan))
            }
        }
        div.section-footer {
            p.pricing-note { (note) }
            p {
                "Have questions? "
                a href="#contact" tabindex="0" { "Contact us" }
                " for a custom quote."
            }
        }
    })
}

fn pricing_card(plan: &PricingPlan) -> Markup {
    let class = class_list(&[
        "pricing-card",
        if plan.popular { "pricing-card--popular" } else { "" },
    ]);
    let cta_text = text_or(plan.cta_text.as_deref(), || DEFAULT_CTA_TEXT.into());
    let variant = if plan.popular {
        Variant::Secondary
    } else {
        Variant::Primary
    };
    let href = plan.cta_href.as_deref().filter(|h| !h.is_empty()).unwrap_or(DEFAULT_CTA_HREF);

    html! {
        article class=(class) {
            @if plan.popular {
                div.pricing-badge { "Most Popular" }
            }
            div.pricing-body {
                h3.pricing-name { (plan.name) }
                @if let Some(description) = &plan.description {
                    p.pricing-description { (description) }
                }
                div.pricing-price {
                    span.pricing-amount { (plan.price) }
                    @if let Some(period) = &plan.period {
                        span.pricing-period { "/" (period) }
                    }
                }
                ul.pricing-features {
                    @for feature in &plan.features {
                        li {
                            (Icon::Check.svg("icon icon-md"))
                            span { (feature) }
                        }
                    }
                }
                (Button::new(&cta_text)
                    .variant(variant)
                    .size(Size::Lg)
                    .href(href)
                    .class("btn--block"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plans_render() {
        let html = render_pricing(&PricingProps::default()).into_string();
        assert!(html.contains("Simple, Transparent Pricing"));
        assert!(html.contains("Pricing Plans"));
        assert!(html.contains(DEFAULT_SUBHEADLINE));
        assert!(html.contains(DEFAULT_NOTE));
        for name in ["Basic", "Premium", "Commercial"] {
            assert!(html.contains(name), "{name}");
        }
        assert!(html.contains("Choose Premium"));
        assert!(html.contains("Contact Sales"));
        assert!(html.contains("/per month"));
        assert!(html.contains("pricing-grid--three"));
    }

    #[test]
    fn popular_badge_appears_once() {
        let html = render_pricing(&PricingProps::default()).into_string();
        assert_eq!(html.matches("Most Popular").count(), 1);
        assert_eq!(html.matches("pricing-card--popular").count(), 1);
    }

    #[test]
    fn no_popular_plan_no_badge() {
        let mut plans = default_plans();
        plans.iter_mut().for_each(|p| p.popular = false);
        let html = render_pricing(&PricingProps {
            plans,
            ..Default::default()
        })
        .into_string();
        assert!(!html.contains("Most Popular"));
    }

    #[test]
    fn cta_defaults_and_missing_period() {
        let plan = PricingPlan {
            id: "x".into(),
            name: "Solo".into(),
            description: None,
            price: "$5".into(),
            period: None,
            features: vec![],
            popular: false,
            cta_text: None,
            cta_href: None,
        };
        let html = render_pricing(&PricingProps {
            plans: vec![plan.clone(), PricingPlan { id: "y".into(), ..plan }],
            ..Default::default()
        })
        .into_string();
        assert_eq!(html.matches(">Get Started</span>").count(), 2);
        assert!(!html.contains("pricing-period"));
        assert!(!html.contains("pricing-description"));
        assert!(html.contains("pricing-grid--two"));
    }

    #[test]
    fn grid_width_follows_plan_count() {
        assert_eq!(grid_class(1), "pricing-grid pricing-grid--four");
        assert_eq!(grid_class(4), "pricing-grid pricing-grid--four");
    }
}
