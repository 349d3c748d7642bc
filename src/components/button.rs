//! The template's call-to-action button.
//!
//! One component renders both links and form buttons: with an `href` the
//! output is an `<a>`, without one it is a `<button>`. Styling is expressed
//! through `btn--{variant}` and `btn--{size}` modifier classes that read the
//! `--template-*` colour variables.

use maud::{Markup, Render, html};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl Variant {
    fn class(self) -> &'static str {
        match self {
            Variant::Primary => "btn--primary",
            Variant::Secondary => "btn--secondary",
            Variant::Outline => "btn--outline",
            Variant::Ghost => "btn--ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    fn class(self) -> &'static str {
        match self {
            Size::Sm => "btn--sm",
            Size::Md => "btn--md",
            Size::Lg => "btn--lg",
        }
    }
}

/// Builder for a link or button.
///
/// ```
/// use shopfront::components::button::{Button, Size, Variant};
/// use shopfront::components::icons::Icon;
/// use maud::Render;
///
/// let html = Button::new("Get Started")
///     .variant(Variant::Secondary)
///     .size(Size::Lg)
///     .href("#contact")
///     .trailing(Icon::ArrowRight.svg("btn-icon"))
///     .render()
///     .into_string();
/// assert!(html.starts_with("<a"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Button<'a> {
    label: &'a str,
    variant: Variant,
    size: Size,
    href: Option<&'a str>,
    class: Option<&'a str>,
    button_type: Option<&'static str>,
    disabled: bool,
    leading: Option<Markup>,
    trailing: Option<Markup>,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            ..Default::default()
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Render as a link. `None` keeps the `<button>` form.
    pub fn href(mut self, href: impl Into<Option<&'a str>>) -> Self {
        self.href = href.into();
        self
    }

    /// Extra classes appended after the variant and size modifiers.
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    /// `type` attribute of the `<button>` form (`"submit"`, `"button"`).
    pub fn button_type(mut self, button_type: &'static str) -> Self {
        self.button_type = Some(button_type);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn leading(mut self, markup: Markup) -> Self {
        self.leading = Some(markup);
        self
    }

    pub fn trailing(mut self, markup: Markup) -> Self {
        self.trailing = Some(markup);
        self
    }

    fn classes(&self) -> String {
        let mut classes = vec!["btn", self.variant.class(), self.size.class()];
        if let Some(extra) = self.class {
            classes.push(extra);
        }
        classes.join(" ")
    }

    /// Screen readers get the label verbatim only when it is the whole
    /// content; decorated buttons already expose their text node.
    fn aria_label(&self) -> Option<&'a str> {
        (self.leading.is_none() && self.trailing.is_none()).then_some(self.label)
    }
}

impl Render for Button<'_> {
    fn render(&self) -> Markup {
        let content = html! {
            @if let Some(leading) = &self.leading { (leading) }
            span.btn-label { (self.label) }
            @if let Some(trailing) = &self.trailing { (trailing) }
        };

        match self.href {
            Some(href) => html! {
                a class=(self.classes()) href=(href) tabindex="0" aria-label=[self.aria_label()] {
                    (content)
                }
            },
            None => html! {
                button class=(self.classes()) type=[self.button_type] tabindex="0"
                    aria-label=[self.aria_label()] disabled[self.disabled] {
                    (content)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::icons::Icon;

    #[test]
    fn link_when_href_given() {
        let html = Button::new("Call").href("tel:555").render().into_string();
        assert!(html.starts_with("<a "));
        assert!(html.contains(r#"href="tel:555""#));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn button_when_no_href() {
        let html = Button::new("Send")
            .button_type("submit")
            .render()
            .into_string();
        assert!(html.starts_with("<button "));
        assert!(html.contains(r#"type="submit""#));
    }

    #[test]
    fn defaults_to_primary_medium() {
        let html = Button::new("Go").render().into_string();
        assert!(html.contains(r#"class="btn btn--primary btn--md""#));
    }

    #[test]
    fn variant_size_and_extra_class() {
        let html = Button::new("Go")
            .variant(Variant::Ghost)
            .size(Size::Sm)
            .class("cta-inline")
            .render()
            .into_string();
        assert!(html.contains(r#"class="btn btn--ghost btn--sm cta-inline""#));
    }

    #[test]
    fn plain_label_is_mirrored_to_aria_label() {
        let html = Button::new("Contact Sales").render().into_string();
        assert!(html.contains(r#"aria-label="Contact Sales""#));
    }

    #[test]
    fn decorated_button_has_no_aria_label() {
        let html = Button::new("Get Started")
            .trailing(Icon::ArrowRight.svg("btn-icon"))
            .render()
            .into_string();
        assert!(!html.contains("aria-label"));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn disabled_only_when_requested() {
        let enabled = Button::new("Send").render().into_string();
        assert!(!enabled.contains("disabled"));
        let disabled = Button::new("Send").disabled(true).render().into_string();
        assert!(disabled.contains("disabled"));
    }

    #[test]
    fn label_is_escaped() {
        let html = Button::new("<b>Bold</b>").render().into_string();
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
    }
}
