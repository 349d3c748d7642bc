//! Sticky site header.
//!
//! On narrow screens the link row collapses behind a menu button. The button
//! flips `aria-expanded` and the `is-open` class on the header; following any
//! link in the open menu closes it again.

use crate::components::button::{Button, Size, Variant};
use crate::components::icons::Icon;
use crate::types::{Logo, NavLink};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavbarProps {
    pub logo: Option<Logo>,
    pub links: Vec<NavLink>,
    pub cta: Option<NavLink>,
}

/// Open/closed state of the collapsed mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A link inside the menu was followed.
    pub fn follow_link(&mut self) {
        self.open = false;
    }
}

pub fn render_navbar(props: &NavbarProps, menu: MobileMenu) -> Markup {
    let (label, expanded) = if menu.is_open() {
        ("Close menu", "true")
    } else {
        ("Open menu", "false")
    };
    html! {
        nav.navbar.is-open[menu.is_open()] data-navbar {
            div.navbar-inner {
                div.navbar-brand {
                    @if let Some(logo) = &props.logo {
                        (render_logo(logo))
                    }
                }

                button.navbar-toggle type="button" aria-controls="navbar-menu"
                    aria-expanded=(expanded) aria-label=(label) data-menu-toggle {
                    @if menu.is_open() {
                        (Icon::Close.svg("icon icon-md"))
                    } @else {
                        (Icon::Menu.svg("icon icon-md"))
                    }
                }

                div.navbar-links id="navbar-menu" {
                    @for link in &props.links {
                        a.navbar-link.navbar-link--secondary[link.secondary] href=(link.href) {
                            (link.label)
                        }
                    }
                }

                @if let Some(cta) = &props.cta {
                    (Button::new(&cta.label)
                        .variant(Variant::Secondary)
                        .size(Size::Sm)
                        .href(cta.href.as_str())
                        .class("navbar-cta"))
                } @else {
                    div.navbar-spacer {}
                }
            }
        }
    }
}

fn render_logo(logo: &Logo) -> Markup {
    let initial: Option<String> = logo
        .text
        .as_deref()
        .and_then(|t| t.chars().next())
        .map(String::from);
    html! {
        a.navbar-logo href=(logo.href.as_deref().unwrap_or("#")) {
            @if let Some(src) = &logo.src {
                img.navbar-logo-image src=(src) alt=(logo.alt.as_deref().unwrap_or("Logo"));
            } @else {
                span.navbar-logo-badge { @if let Some(i) = initial { (i) } }
            }
            @if let Some(text) = &logo.text {
                span.navbar-logo-text { (text) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> NavbarProps {
        NavbarProps {
            logo: Some(Logo {
                text: Some("Acme Plumbing".into()),
                ..Default::default()
            }),
            links: vec![
                NavLink {
                    label: "Services".into(),
                    href: "#services".into(),
                    secondary: false,
                },
                NavLink {
                    label: "FAQ".into(),
                    href: "#faq".into(),
                    secondary: true,
                },
            ],
            cta: Some(NavLink {
                label: "Call Now".into(),
                href: "tel:555".into(),
                secondary: false,
            }),
        }
    }

    #[test]
    fn toggle_opens_and_closes() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn following_a_link_closes_the_menu() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.follow_link();
        assert!(!menu.is_open());
        // Closed stays closed.
        menu.follow_link();
        assert!(!menu.is_open());
    }

    #[test]
    fn closed_menu_markup() {
        let html = render_navbar(&props(), MobileMenu::default()).into_string();
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"aria-label="Open menu""#));
        assert!(!html.contains("is-open"));
    }

    #[test]
    fn open_menu_markup() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        let html = render_navbar(&props(), menu).into_string();
        assert!(html.contains(r#"class="navbar is-open""#));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains(r#"aria-label="Close menu""#));
    }

    #[test]
    fn logo_without_image_shows_initial() {
        let html = render_navbar(&props(), MobileMenu::default()).into_string();
        assert!(html.contains(r#"<span class="navbar-logo-badge">A</span>"#));
        assert!(html.contains("Acme Plumbing"));
        assert!(html.contains(r##"href="#""##));
    }

    #[test]
    fn logo_image_defaults_alt() {
        let mut p = props();
        p.logo = Some(Logo {
            src: Some("/logo.png".into()),
            ..Default::default()
        });
        let html = render_navbar(&p, MobileMenu::default()).into_string();
        assert!(html.contains(r#"alt="Logo""#));
        assert!(!html.contains("navbar-logo-badge"));
    }

    #[test]
    fn secondary_links_are_muted() {
        let html = render_navbar(&props(), MobileMenu::default()).into_string();
        assert_eq!(html.matches("navbar-link--secondary").count(), 1);
        assert!(html.contains(r##"href="#services""##));
    }

    #[test]
    fn spacer_replaces_missing_cta() {
        let mut p = props();
        p.cta = None;
        let html = render_navbar(&p, MobileMenu::default()).into_string();
        assert!(html.contains("navbar-spacer"));
        assert!(!html.contains("navbar-cta"));
    }
}
