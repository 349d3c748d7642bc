//! Licences, memberships and accreditations as a badge grid.

use crate::components::icons::Icon;
use crate::components::section::{Background, SectionWrapper};
use crate::sections::{list_or, section_header, text_or};
use crate::types::{Business, Certification};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

/// Stock badges for certifications without a logo, cycled by position.
pub const BADGE_ICONS: [Icon; 6] = [
    Icon::ShieldCheck,
    Icon::BadgeCheck,
    Icon::Star,
    Icon::Sparkles,
    Icon::CheckCircle,
    Icon::Beaker,
];

pub const DEFAULT_HEADLINE: &str = "Certifications & Credentials";

pub fn default_subheadline(business_name: &str) -> String {
    format!("{business_name} maintains the highest standards of professionalism and compliance.")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CertificationsProps {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub certifications: Vec<Certification>,
}

pub fn default_certifications() -> Vec<Certification> {
    [
        "Licensed & Bonded",
        "Fully Insured",
        "BBB Accredited",
        "EPA Certified",
        "OSHA Compliant",
        "Manufacturer Certified",
    ]
    .into_iter()
    .enumerate()
    .map(|(i, name)| Certification {
        id: (i + 1).to_string(),
        name: name.into(),
        logo: None,
        href: None,
    })
    .collect()
}

pub fn render_certifications(business: &Business, props: &CertificationsProps) -> Markup {
    let certifications = list_or(&props.certifications, default_certifications);
    let headline = text_or(props.headline.as_deref(), || DEFAULT_HEADLINE.into());
    let subheadline = text_or(props.subheadline.as_deref(), || default_subheadline(&business.name));

    SectionWrapper::new("certifications", Background::Light).render(html! {
        (section_header("Trusted & Verified", &headline, &subheadline))
        div.certifications-grid {
            @for (index, certification) in certifications.iter().enumerate() {
                (badge(certification, index))
            }
        }
        div.section-footer {
            p.section-note { "All certifications and licenses are current and verifiable upon request." }
        }
    })
}

fn badge(certification: &Certification, index: usize) -> Markup {
    let content = html! {
        div.cert-badge {
            @if let Some(logo) = &certification.logo {
                img.cert-logo src=(logo) alt=(certification.name);
            } @else {
                span.cert-icon { (BADGE_ICONS[index % BADGE_ICONS.len()].svg("icon icon-xl")) }
            }
            span.cert-name { (certification.name) }
        }
    };
    html! {
        @if let Some(href) = &certification.href {
            a.cert-item.cert-link href=(href) target="_blank" rel="noopener noreferrer" tabindex="0"
                aria-label=(format!("View {} certification", certification.name)) {
                (content)
            }
        } @else {
            div.cert-item { (content) }
        }
    }
}
