//! Company story with a photo, headline figures and a call to action.

use crate::components::button::{Button, Size, Variant};
use crate::components::icons::Icon;
use crate::components::section::{Background, SectionWrapper};
use crate::sections::{list_or, markdown, text_or};
use crate::types::{Business, Stat};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MISSION: &str = "We believe in honest pricing, quality workmanship, and treating every customer like family. Our team of certified professionals brings expertise, reliability, and a genuine care for your satisfaction to every job.";
pub const DEFAULT_CTA_TEXT: &str = "Learn More About Us";
pub const DEFAULT_CTA_HREF: &str = "#contact";

pub fn default_headline(business_name: &str) -> String {
    format!("About {business_name}")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AboutProps {
    pub headline: Option<String>,
    /// Markdown.
    pub story: Option<String>,
    /// Markdown.
    pub mission: Option<String>,
    pub image: Option<String>,
    pub stats: Vec<Stat>,
    pub cta_text: Option<String>,
    pub cta_href: Option<String>,
}

pub fn default_stats() -> Vec<Stat> {
    [
        ("15+", "Years Experience"),
        ("5,000+", "Projects Completed"),
        ("98%", "Customer Satisfaction"),
        ("24/7", "Support Available"),
    ]
    .into_iter()
    .map(|(value, label)| Stat {
        value: value.into(),
        label: label.into(),
    })
    .collect()
}

pub fn default_story(business_name: &str) -> String {
    format!(
        "Founded with a commitment to excellence, {business_name} has been serving our community with pride for over 15 years. What started as a small family operation has grown into a trusted name in the industry, but our core values remain unchanged."
    )
}

pub fn render_about(business: &Business, props: &AboutProps) -> Markup {
    let stats = list_or(&props.stats, default_stats);
    let headline = text_or(props.headline.as_deref(), || default_headline(&business.name));
    let story = text_or(props.story.as_deref(), || default_story(&business.name));
    let mission = text_or(props.mission.as_deref(), || DEFAULT_MISSION.into());
    let cta_text = text_or(props.cta_text.as_deref(), || DEFAULT_CTA_TEXT.into());
    let cta_href = text_or(props.cta_href.as_deref(), || DEFAULT_CTA_HREF.into());

    SectionWrapper::new("about", Background::Light).render(html! {
        div.about-grid {
            div.about-media {
                div.about-frame {
                    @if let Some(src) = props.image.as_deref().filter(|s| !s.is_empty()) {
                        img.about-image src=(src) alt=(format!("{} team", business.name));
                    } @else {
                        div.about-placeholder {
                            (Icon::UserGroup.svg("about-placeholder-icon"))
                            p { "Our Team" }
                        }
                    }
                }
                div.about-deco.about-deco--square aria-hidden="true" {}
                div.about-deco.about-deco--outline aria-hidden="true" {}
            }

            div.about-body {
                p.section-label { "Our Story" }
                h2.section-title { (headline) }
                div.about-story { (markdown(&story)) }
                div.about-mission { (markdown(&mission)) }
                div.about-stats {
                    @for stat in stats.iter() {
                        div.about-stat {
                            span.about-stat-value { (stat.value) }
                            span.about-stat-label { (stat.label) }
                        }
                    }
                }
                (Button::new(&cta_text)
                    .variant(Variant::Primary)
                    .size(Size::Md)
                    .href(&*cta_href)
                    .trailing(Icon::ArrowRight.svg("btn-icon")))
            }
        }
    })
}
