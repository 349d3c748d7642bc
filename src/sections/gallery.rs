//! Project portfolio with a category filter and a lightbox.
//!
//! Every image is rendered; the ones outside the active category carry the
//! `hidden` attribute so `site.js` can filter without a round trip. The
//! lightbox is a single dialog filled from the clicked card's `data-*`
//! attributes.

use crate::components::icons::Icon;
use crate::components::section::{Background, SectionWrapper};
use crate::sections::{list_or, section_header, text_or};
use crate::types::{Business, GalleryImage};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

/// Placeholder gradients, cycled by position among the displayed images.
pub const PLACEHOLDER_COLORS: [&str; 6] = ["blue", "emerald", "amber", "rose", "violet", "cyan"];

pub const DEFAULT_HEADLINE: &str = "Our Work";

pub fn default_subheadline(business_name: &str) -> String {
    format!("Browse through our portfolio of completed projects and see the quality craftsmanship {business_name} delivers.")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryProps {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub images: Vec<GalleryImage>,
    /// Filter buttons. Derived from the images when absent.
    pub categories: Option<Vec<String>>,
}

pub fn default_images() -> Vec<GalleryImage> {
    [
        "Residential",
        "Commercial",
        "Residential",
        "Renovation",
        "Commercial",
        "Renovation",
    ]
    .into_iter()
    .enumerate()
    .map(|(i, category)| GalleryImage {
        id: (i + 1).to_string(),
        src: String::new(),
        alt: format!("Project {}", i + 1),
        category: Some(category.into()),
        before_src: None,
    })
    .collect()
}

/// Filter categories: the explicit list, or else each image category once in
/// first-seen order.
pub fn categories(images: &[GalleryImage], explicit: Option<&[String]>) -> Vec<String> {
    if let Some(explicit) = explicit {
        return explicit.to_vec();
    }
    let mut seen: Vec<String> = Vec::new();
    for category in images.iter().filter_map(|i| i.category.as_deref()) {
        if !category.is_empty() && !seen.iter().any(|c| c == category) {
            seen.push(category.to_string());
        }
    }
    seen
}

/// Active category filter and lightbox selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryView {
    category: Option<String>,
    selected: Option<String>,
}

impl GalleryView {
    /// `None` is "All Projects".
    pub fn select_category(&mut self, category: Option<&str>) {
        self.category = category.map(String::from);
    }

    pub fn active_category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Images shown under the active filter, by exact category match.
    pub fn visible<'a>(&self, images: &'a [GalleryImage]) -> Vec<&'a GalleryImage> {
        images.iter().filter(|image| self.shows(image)).collect()
    }

    fn shows(&self, image: &GalleryImage) -> bool {
        match &self.category {
            None => true,
            Some(active) => image.category.as_deref() == Some(active.as_str()),
        }
    }

    pub fn open(&mut self, image_id: &str) {
        self.selected = Some(image_id.to_string());
    }

    /// Close button, backdrop click or Escape.
    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected<'a>(&self, images: &'a [GalleryImage]) -> Option<&'a GalleryImage> {
        let id = self.selected.as_deref()?;
        images.iter().find(|image| image.id == id)
    }
}

pub fn render_gallery(business: &Business, props: &GalleryProps, view: &GalleryView) -> Markup {
    let images = list_or(&props.images, default_images);
    let categories = categories(&images, props.categories.as_deref());
    let headline = text_or(props.headline.as_deref(), || DEFAULT_HEADLINE.into());
    let subheadline = text_or(props.subheadline.as_deref(), || default_subheadline(&business.name));
    let active = view.active_category();
    let mut position = 0;
    let cards: Vec<Markup> = images
        .iter()
        .map(|image| {
            let shown = view.shows(image);
            let card = image_card(image, position, shown);
            if shown {
                position += 1;
            }
            card
        })
        .collect();

    SectionWrapper::new("gallery", Background::Light).render(html! {
        (section_header("Portfolio", &headline, &subheadline))

        @if !categories.is_empty() {
            div.gallery-filters role="group" aria-label="Filter projects" {
                button.filter-pill.is-active[active.is_none()] type="button" data-filter="" tabindex="0" {
                    "All Projects"
                }
                @for category in &categories {
                    button.filter-pill.is-active[active == Some(category.as_str())]
                        type="button" data-filter=(category) tabindex="0" { (category) }
                }
            }
        }

        div.gallery-grid data-gallery {
            @for card in &cards {
                (card)
            }
        }

        (lightbox(view.selected(&images)))
    })
}

fn placeholder(index: usize, label: &str, class: &str) -> Markup {
    let color = PLACEHOLDER_COLORS[index % PLACEHOLDER_COLORS.len()];
    html! {
        div class=(format!("{class} placeholder--{color}")) data-placeholder {
            div.placeholder-content {
                (Icon::Photo.svg("placeholder-icon"))
                span { (label) }
            }
        }
    }
}

fn image_card(image: &GalleryImage, index: usize, shown: bool) -> Markup {
    html! {
        button.gallery-card type="button" tabindex="0" hidden[!shown]
            aria-label=(format!("View {}", image.alt))
            data-gallery-item=(image.id)
            data-category=[image.category.as_deref()]
            data-src=(image.src)
            data-alt=(image.alt)
            data-before-src=[image.before_src.as_deref()] {
            @if image.src.is_empty() {
                (placeholder(index, image.category.as_deref().unwrap_or("Project"), "gallery-placeholder"))
            } @else {
                img.gallery-image src=(image.src) alt=(image.alt) loading="lazy";
            }
            div.gallery-overlay {
                span.gallery-caption { (image.alt) }
                span.gallery-zoom { (Icon::ZoomIn.svg("icon icon-sm")) }
            }
            @if let Some(category) = &image.category {
                span.gallery-badge { (category) }
            }
        }
    }
}

fn lightbox(selected: Option<&GalleryImage>) -> Markup {
    html! {
        div.lightbox role="dialog" aria-modal="true" aria-label="Image preview"
            hidden[selected.is_none()] data-lightbox {
            button.lightbox-close type="button" aria-label="Close preview" tabindex="0" data-lightbox-close {
                (Icon::Close.svg("icon icon-md"))
            }
            div.lightbox-frame data-lightbox-frame {
                @if let Some(image) = selected {
                    (lightbox_body(image))
                }
            }
            template data-template="lightbox-placeholder" {
                (placeholder_icon())
            }
        }
    }
}

fn lightbox_body(image: &GalleryImage) -> Markup {
    html! {
        @if let Some(before) = image.before_src.as_deref().filter(|s| !s.is_empty()) {
            div.lightbox-compare {
                figure {
                    img src=(before) alt=(format!("{} (before)", image.alt));
                    figcaption { "Before" }
                }
                figure {
                    (lightbox_image(image))
                    figcaption { "After" }
                }
            }
        } @else {
            (lightbox_image(image))
        }
        div.lightbox-caption {
            p.lightbox-title { (image.alt) }
            @if let Some(category) = &image.category {
                p.lightbox-category { (category) }
            }
        }
    }
}

/// Shared with the script through the lightbox `<template>`.
fn placeholder_icon() -> Markup {
    Icon::Photo.svg("placeholder-icon")
}

fn lightbox_image(image: &GalleryImage) -> Markup {
    html! {
        @if image.src.is_empty() {
            div.lightbox-placeholder {
                (placeholder_icon())
                p { (image.alt) }
            }
        } @else {
            img.lightbox-image src=(image.src) alt=(image.alt);
        }
    }
}
