//! Content sections of the marketing page.
//!
//! Every section is a render function of the shared
//! [`Business`](crate::types::Business) record, its
//! own props struct and, for the interactive ones, an explicit state value.
//! Props deserialize from the section's table in `site.toml`; anything left
//! out falls back to the built-in copy defined next to each renderer.

pub mod about;
pub mod certifications;
pub mod contact;
pub mod cta_banner;
pub mod faq;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod map;
pub mod pricing;
pub mod process;
pub mod reviews;
pub mod service_areas;
pub mod services;
pub mod why_choose_us;

use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Event, Parser};
use std::borrow::Cow;

/// The configured text, or the default when absent or empty.
pub fn text_or<'a>(value: Option<&'a str>, default: impl FnOnce() -> String) -> Cow<'a, str> {
    match value {
        Some(v) if !v.is_empty() => Cow::Borrowed(v),
        _ => Cow::Owned(default()),
    }
}

/// The configured list, or the built-in one when absent or empty.
pub fn list_or<'a, T: Clone>(items: &'a [T], default: impl FnOnce() -> Vec<T>) -> Cow<'a, [T]> {
    if items.is_empty() {
        Cow::Owned(default())
    } else {
        Cow::Borrowed(items)
    }
}

/// Eyebrow label, title and lead paragraph that open most sections.
pub fn section_header(label: &str, title: &str, subtitle: &str) -> Markup {
    html! {
        div.section-header {
            p.section-label { (label) }
            h2.section-title { (title) }
            p.section-subtitle { (subtitle) }
        }
    }
}

/// Render a markdown fragment. Raw HTML in the source is escaped rather
/// than passed through.
pub fn markdown(source: &str) -> Markup {
    let parser = Parser::new(source).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    pulldown_cmark::html::push_html(&mut out, parser);
    PreEscaped(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_or_treats_empty_as_missing() {
        assert_eq!(text_or(Some("Hi"), || "x".into()), "Hi");
        assert_eq!(text_or(Some(""), || "x".into()), "x");
        assert_eq!(text_or(None, || "x".into()), "x");
    }

    #[test]
    fn list_or_falls_back_when_empty() {
        let empty: Vec<u8> = vec![];
        assert_eq!(&*list_or(&empty, || vec![1, 2]), &[1, 2]);
        assert_eq!(&*list_or(&[3], || vec![1, 2]), &[3]);
    }

    #[test]
    fn plain_text_becomes_one_paragraph() {
        assert_eq!(markdown("Yes, we do.").into_string(), "<p>Yes, we do.</p>\n");
    }

    #[test]
    fn markdown_emphasis_and_lists() {
        let html = markdown("We take **cash**.\n\n- checks\n- cards").into_string();
        assert!(html.contains("<strong>cash</strong>"));
        assert!(html.contains("<li>checks</li>"));
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = markdown("<script>alert(1)</script>").into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn header_markup() {
        let html = section_header("FAQ", "Questions", "Ask away").into_string();
        assert!(html.contains(r#"<p class="section-label">FAQ</p>"#));
        assert!(html.contains(r#"<h2 class="section-title">Questions</h2>"#));
    }
}
