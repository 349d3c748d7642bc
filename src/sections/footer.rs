//! Site footer: brand blurb, quick links, contact details and copyright.

use crate::components::icons::Icon;
use crate::components::section::{Background, SectionWrapper, Tag};
use crate::sections::contact::{DEFAULT_ADDRESS, DEFAULT_EMAIL, DEFAULT_PHONE};
use crate::sections::list_or;
use crate::types::{Business, NavLink};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterProps {
    /// Falls back to the business tagline.
    pub description: Option<String>,
    pub links: Vec<NavLink>,
    /// Replaces the generated "© {year} {name}. All rights reserved." line.
    pub copyright: Option<String>,
}

pub fn default_links() -> Vec<NavLink> {
    [
        ("Services", "#services"),
        ("About", "#about"),
        ("Reviews", "#reviews"),
        ("FAQ", "#faq"),
        ("Contact", "#contact"),
    ]
    .into_iter()
    .map(|(label, href)| NavLink {
        label: label.into(),
        href: href.into(),
        secondary: false,
    })
    .collect()
}

pub fn copyright_line(business_name: &str, year: i32) -> String {
    format!("\u{a9} {year} {business_name}. All rights reserved.")
}

/// `year` is the copyright year; the page generator passes the current one.
pub fn render_footer(business: &Business, props: &FooterProps, year: i32) -> Markup {
    let links = list_or(&props.links, default_links);
    let description = props
        .description
        .as_deref()
        .or(business.tagline.as_deref())
        .filter(|d| !d.is_empty());
    let phone = business.phone.as_deref().unwrap_or(DEFAULT_PHONE);
    let email = business.email.as_deref().unwrap_or(DEFAULT_EMAIL);
    let address = business.address.as_deref().unwrap_or(DEFAULT_ADDRESS);
    let copyright = match props.copyright.as_deref().filter(|c| !c.is_empty()) {
        Some(custom) => custom.to_string(),
        None => copyright_line(&business.name, year),
    };

    SectionWrapper::new("footer", Background::Dark)
        .tag(Tag::Footer)
        .animate(false)
        .render(html! {
            div.footer-grid {
                div.footer-brand {
                    p.footer-name { (business.name) }
                    @if let Some(description) = description {
                        p.footer-description { (description) }
                    }
                }
                nav.footer-links aria-label="Footer" {
                    h3.footer-heading { "Quick Links" }
                    ul {
                        @for link in links.iter() {
                            li { a href=(link.href) { (link.label) } }
                        }
                    }
                }
                div.footer-contact {
                    h3.footer-heading { "Contact" }
                    ul {
                        li {
                            (Icon::Phone.svg("icon icon-sm"))
                            a href=(format!("tel:{phone}")) { (phone) }
                        }
                        li {
                            (Icon::Mail.svg("icon icon-sm"))
                            a href=(format!("mailto:{email}")) { (email) }
                        }
                        li {
                            (Icon::MapPin.svg("icon icon-sm"))
                            span { (address) }
                        }
                    }
                }
            }
            div.footer-bottom {
                p.footer-copyright { (copyright) }
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_uses_year_and_name() {
        assert_eq!(
            copyright_line("Acme", 2026),
            "\u{a9} 2026 Acme. All rights reserved."
        );
    }

    #[test]
    fn default_footer() {
        let html = render_footer(&Business::named("Acme"), &FooterProps::default(), 2026).into_string();
        assert!(html.starts_with("<footer"));
        assert!(html.contains("2026 Acme. All rights reserved."));
        assert!(html.contains(r##"href="#services""##));
        assert!(html.contains(DEFAULT_EMAIL));
        assert!(!html.contains("fade-in"));
        assert!(!html.contains("footer-description"));
    }

    #[test]
    fn tagline_and_custom_copyright() {
        let business = Business {
            tagline: Some("Pipes done right.".into()),
            ..Business::named("Acme")
        };
        let props = FooterProps {
            copyright: Some("Acme Ltd".into()),
            ..Default::default()
        };
        let html = render_footer(&business, &props, 2026).into_string();
        assert!(html.contains("Pipes done right."));
        assert!(html.contains(r#"<p class="footer-copyright">Acme Ltd</p>"#));
    }
}
