//! Full-width call-to-action strip in one of three looks.

use crate::components::button::{Button, Size, Variant};
use crate::components::icons::Icon;
use crate::sections::text_or;
use crate::types::Business;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CTA_TEXT: &str = "Contact Us";
pub const DEFAULT_CTA_HREF: &str = "#contact";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BannerVariant {
    /// Red banner with a pulsing "24/7" badge and a call button in place of
    /// the primary link.
    Emergency,
    Promo,
    #[default]
    Default,
}

impl BannerVariant {
    fn class(self) -> &'static str {
        match self {
            BannerVariant::Emergency => "cta-banner cta-banner--emergency",
            BannerVariant::Promo => "cta-banner cta-banner--promo",
            BannerVariant::Default => "cta-banner",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CtaBannerProps {
    /// Required; the site loader rejects a banner without one.
    pub headline: String,
    pub subheadline: Option<String>,
    pub cta_text: Option<String>,
    pub cta_href: Option<String>,
    pub secondary_cta_text: Option<String>,
    pub secondary_cta_href: Option<String>,
    /// Falls back to the business phone.
    pub phone: Option<String>,
    pub variant: BannerVariant,
}

pub fn render_cta_banner(business: &Business, props: &CtaBannerProps) -> Markup {
    let emergency = props.variant == BannerVariant::Emergency;
    let cta_text = text_or(props.cta_text.as_deref(), || DEFAULT_CTA_TEXT.into());
    let cta_href = text_or(props.cta_href.as_deref(), || DEFAULT_CTA_HREF.into());
    let phone = props.phone.as_deref().or(business.phone.as_deref());

    html! {
        section class=(props.variant.class()) {
            div.cta-banner-pattern aria-hidden="true" {}
            div.cta-banner-inner {
                div.cta-banner-copy {
                    @match props.variant {
                        BannerVariant::Emergency => {
                            div.cta-badge {
                                span.cta-badge-pulse aria-hidden="true" {}
                                "24/7 Emergency Service"
                            }
                        }
                        BannerVariant::Promo => {
                            div.cta-badge {
                                (Icon::Gift.svg("icon icon-sm"))
                                "Limited Time Offer"
                            }
                        }
                        BannerVariant::Default => {}
                    }
                    h2.cta-banner-title { (props.headline) }
                    @if let Some(subheadline) = &props.subheadline {
                        p.cta-banner-text { (subheadline) }
                    }
                }
                div.cta-banner-actions {
                    @if emergency {
                        @if let Some(phone) = phone {
                            a.cta-phone href=(format!("tel:{phone}")) tabindex="0" {
                                (Icon::Phone.svg("icon icon-md"))
                                (phone)
                            }
                        }
                    } @else {
                        (Button::new(&cta_text)
                            .variant(Variant::Secondary)
                            .size(Size::Lg)
                            .href(&*cta_href)
                            .class("cta-banner-primary")
                            .trailing(Icon::ArrowRight.svg("btn-icon")))
                    }
                    @if let Some(text) = props.secondary_cta_text.as_deref().filter(|s| !s.is_empty()) {
                        (Button::new(text)
                            .variant(Variant::Outline)
                            .size(Size::Lg)
                            .href(props.secondary_cta_href.as_deref())
                            .class("cta-banner-secondary"))
                    }
                }
            }
        }
    }
}
