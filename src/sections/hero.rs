//! Full-height opening banner.
//!
//! Two looks: over a background photo with a brand-tinted overlay (light
//! text, secondary and ghost buttons), or on a pale abstract backdrop (dark
//! text, primary and outline buttons).

use crate::components::button::{Button, Size, Variant};
use crate::components::icons::Icon;
use crate::sections::text_or;
use crate::types::Business;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUBHEADLINE: &str =
    "Professional services you can trust. Quality workmanship and exceptional customer care.";
pub const DEFAULT_CTA_TEXT: &str = "Get Started";
pub const DEFAULT_CTA_HREF: &str = "#contact";

pub fn default_headline(business_name: &str) -> String {
    format!("Welcome to {business_name}")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroProps {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub cta_text: Option<String>,
    pub cta_href: Option<String>,
    pub secondary_cta_text: Option<String>,
    pub secondary_cta_href: Option<String>,
    pub background_image: Option<String>,
}

pub fn render_hero(business: &Business, props: &HeroProps) -> Markup {
    let headline = text_or(props.headline.as_deref(), || default_headline(&business.name));
    let subheadline = text_or(props.subheadline.as_deref(), || DEFAULT_SUBHEADLINE.into());
    let cta_text = text_or(props.cta_text.as_deref(), || DEFAULT_CTA_TEXT.into());
    let cta_href = text_or(props.cta_href.as_deref(), || DEFAULT_CTA_HREF.into());
    let photo = props.background_image.as_deref().filter(|s| !s.is_empty());
    let (primary, secondary) = if photo.is_some() {
        (Variant::Secondary, Variant::Ghost)
    } else {
        (Variant::Primary, Variant::Outline)
    };

    html! {
        section.hero.hero--photo[photo.is_some()] id="hero" {
            div.hero-backdrop aria-hidden="true" {
                @if let Some(src) = photo {
                    img.hero-image src=(src) alt="";
                    div.hero-overlay {}
                } @else {
                    div.hero-shape.hero-shape--skew {}
                    div.hero-shape.hero-shape--blob {}
                    div.hero-shape.hero-shape--glow {}
                }
            }

            div.hero-content {
                div.hero-accent aria-hidden="true" {}
                p.hero-business { (business.name) }
                h1.hero-headline { (headline) }
                p.hero-subheadline { (subheadline) }
                div.hero-actions {
                    (Button::new(&cta_text)
                        .variant(primary)
                        .size(Size::Lg)
                        .href(&*cta_href)
                        .trailing(Icon::ArrowRight.svg("btn-icon")))
                    @if let Some(text) = props.secondary_cta_text.as_deref().filter(|s| !s.is_empty()) {
                        (Button::new(text)
                            .variant(secondary)
                            .size(Size::Lg)
                            .href(props.secondary_cta_href.as_deref()))
                    }
                }
            }

            div.hero-wave aria-hidden="true" {
                svg viewBox="0 0 1440 74" fill="currentColor" preserveAspectRatio="none" {
                    path d="M0,37 C240,74 480,74 720,37 C960,0 1200,0 1440,37 L1440,74 L0,74 Z" {}
                }
            }
        }
    }
}
