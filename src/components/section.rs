//! Layout shell shared by the content sections.
//!
//! A wrapper picks the outer element, the background scheme and the padded
//! inner container. When animated, the inner container starts hidden and is
//! revealed once by `site.js` the first time a quarter of it scrolls into
//! view; [`FadeIn`] is the same one-way transition expressed in Rust.

use maud::{Markup, html};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Background {
    #[default]
    White,
    Light,
    Dark,
    Primary,
    Gradient,
}

impl Background {
    fn class(self) -> &'static str {
        match self {
            Background::White => "bg-white",
            Background::Light => "bg-light",
            Background::Dark => "bg-dark",
            Background::Primary => "bg-primary",
            Background::Gradient => "bg-gradient",
        }
    }
}

/// The outer element a wrapper renders as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tag {
    #[default]
    Section,
    Footer,
    Header,
    Div,
}

/// Share of the section that must be visible before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.25;

/// One-shot visibility state of an animated section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeIn {
    /// Not animated: always visible.
    Static,
    /// Waiting for the first intersection.
    Hidden,
    /// Revealed. Terminal.
    Visible,
}

impl FadeIn {
    pub fn new(animate: bool) -> Self {
        if animate { FadeIn::Hidden } else { FadeIn::Static }
    }

    /// Feed one viewport observation. Returns `true` if this call revealed
    /// the section, which is when the browser disconnects its observer.
    pub fn observe(&mut self, intersection_ratio: f64) -> bool {
        if *self == FadeIn::Hidden && intersection_ratio >= REVEAL_THRESHOLD {
            *self = FadeIn::Visible;
            return true;
        }
        false
    }

    pub fn is_visible(self) -> bool {
        !matches!(self, FadeIn::Hidden)
    }

    fn classes(self) -> &'static str {
        match self {
            FadeIn::Static => "",
            FadeIn::Hidden => "fade-in",
            FadeIn::Visible => "fade-in is-visible",
        }
    }
}

/// Builder for the section shell.
#[derive(Debug, Clone, Default)]
pub struct SectionWrapper<'a> {
    pub id: Option<&'a str>,
    pub background: Background,
    pub tag: Tag,
    pub class: Option<&'a str>,
    pub inner_class: Option<&'a str>,
    pub no_padding: bool,
    /// `None` means animated, matching the component default.
    pub fade: Option<FadeIn>,
}

impl<'a> SectionWrapper<'a> {
    pub fn new(id: &'a str, background: Background) -> Self {
        Self {
            id: Some(id),
            background,
            ..Default::default()
        }
    }

    pub fn class(mut self, class: Option<&'a str>) -> Self {
        self.class = class;
        self
    }

    pub fn inner_class(mut self, class: &'a str) -> Self {
        self.inner_class = Some(class);
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.tag = tag;
        self
    }

    pub fn no_padding(mut self) -> Self {
        self.no_padding = true;
        self
    }

    pub fn animate(mut self, animate: bool) -> Self {
        self.fade = Some(FadeIn::new(animate));
        self
    }

    pub fn fade(mut self, fade: FadeIn) -> Self {
        self.fade = Some(fade);
        self
    }

    pub fn render(&self, content: Markup) -> Markup {
        let fade = self.fade.unwrap_or(FadeIn::Hidden);
        let outer = class_list(&["section", self.background.class(), self.class.unwrap_or("")]);
        let inner = class_list(&[
            "section-inner",
            if self.no_padding { "" } else { "section-padded" },
            fade.classes(),
            self.inner_class.unwrap_or(""),
        ]);
        let animated = fade != FadeIn::Static;

        let body = html! {
            div class=(inner) data-fade-in[animated] { (content) }
        };
        match self.tag {
            Tag::Section => html! { section id=[self.id] class=(outer) { (body) } },
            Tag::Footer => html! { footer id=[self.id] class=(outer) { (body) } },
            Tag::Header => html! { header id=[self.id] class=(outer) { (body) } },
            Tag::Div => html! { div id=[self.id] class=(outer) { (body) } },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DividerDirection {
    Up,
    #[default]
    Down,
}

/// Decorative wave separating two sections.
pub fn section_divider(direction: DividerDirection, fill: &str) -> Markup {
    let class = match direction {
        DividerDirection::Down => "section-divider section-divider--down",
        DividerDirection::Up => "section-divider section-divider--up",
    };
    html! {
        div class=(class) aria-hidden="true" {
            svg viewBox="0 0 1200 120" preserveAspectRatio="none" fill=(fill) {
                path d="M0,0V46.29c47.79,22.2,103.59,32.17,158,28,70.36-5.37,136.33-33.31,206.8-37.5C438.64,32.43,512.34,53.67,583,72.05c69.27,18,138.3,24.88,209.4,13.08,36.15-6,69.85-17.84,104.45-29.34C989.49,25,1113-14.29,1200,52.47V0Z" {}
            }
        }
    }
}

/// Join the non-empty class names with single spaces.
pub fn class_list(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_in_reveals_once() {
        let mut fade = FadeIn::new(true);
        assert!(!fade.is_visible());
        assert!(!fade.observe(0.1));
        assert!(fade.observe(0.3));
        assert!(fade.is_visible());
        // Already revealed: later observations are ignored.
        assert!(!fade.observe(0.9));
    }

    #[test]
    fn fade_in_never_reverts() {
        let mut fade = FadeIn::new(true);
        fade.observe(1.0);
        fade.observe(0.0);
        assert_eq!(fade, FadeIn::Visible);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut fade = FadeIn::new(true);
        assert!(fade.observe(REVEAL_THRESHOLD));
    }

    #[test]
    fn unanimated_section_starts_visible() {
        let mut fade = FadeIn::new(false);
        assert!(fade.is_visible());
        assert!(!fade.observe(1.0));
        assert_eq!(fade, FadeIn::Static);
    }

    #[test]
    fn wrapper_renders_section_with_id_and_background() {
        let html = SectionWrapper::new("faq", Background::Light)
            .render(html! { p { "hi" } })
            .into_string();
        assert!(html.starts_with(r#"<section id="faq" class="section bg-light">"#));
        assert!(html.contains("<p>hi</p>"));
    }

    #[test]
    fn animated_by_default() {
        let html = SectionWrapper::new("x", Background::White)
            .render(html! {})
            .into_string();
        assert!(html.contains(r#"class="section-inner section-padded fade-in""#));
        assert!(html.contains("data-fade-in"));
    }

    #[test]
    fn animation_can_be_disabled() {
        let html = SectionWrapper::new("x", Background::White)
            .animate(false)
            .render(html! {})
            .into_string();
        assert!(!html.contains("fade-in"));
    }

    #[test]
    fn visible_state_renders_revealed() {
        let html = SectionWrapper::new("x", Background::White)
            .fade(FadeIn::Visible)
            .render(html! {})
            .into_string();
        assert!(html.contains("fade-in is-visible"));
    }

    #[test]
    fn footer_tag_without_padding() {
        let html = SectionWrapper::new("footer", Background::Dark)
            .tag(Tag::Footer)
            .no_padding()
            .render(html! {})
            .into_string();
        assert!(html.starts_with("<footer"));
        assert!(!html.contains("section-padded"));
    }

    #[test]
    fn divider_direction_class() {
        let up = section_divider(DividerDirection::Up, "#fff").into_string();
        assert!(up.contains("section-divider--up"));
        assert!(up.contains(r##"fill="#fff""##));
    }

    #[test]
    fn class_list_skips_empty_parts() {
        assert_eq!(class_list(&["a", "", "b"]), "a b");
        assert_eq!(class_list(&["", ""]), "");
    }
}
