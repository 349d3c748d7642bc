//! Outline SVG icons (24×24 viewBox, stroked with `currentColor`).
//!
//! Content files refer to icons by kebab-case name (`icon = "shield-check"`),
//! so the set is closed: an unknown name fails deserialization instead of
//! rendering a broken glyph.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ArrowRight,
    ArrowRightLong,
    BadgeCheck,
    Beaker,
    Building,
    Calendar,
    Cash,
    Check,
    CheckCircle,
    ChevronDown,
    ClipboardCheck,
    ClipboardList,
    Clock,
    Close,
    ExternalLink,
    Gift,
    Info,
    Mail,
    Map,
    MapPin,
    Menu,
    Phone,
    Photo,
    ShieldCheck,
    Smile,
    Sparkles,
    Star,
    Template,
    UserGroup,
    ZoomIn,
}

impl Icon {
    /// Path data for the glyph. Most icons are a single path.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::ArrowRight => &["M17 8l4 4m0 0l-4 4m4-4H3"],
            Icon::ArrowRightLong => &["M14 5l7 7m0 0l-7 7m7-7H3"],
            Icon::BadgeCheck => &[
                "M9 12l2 2 4-4M7.835 4.697a3.42 3.42 0 001.946-.806 3.42 3.42 0 014.438 0 3.42 3.42 0 001.946.806 3.42 3.42 0 013.138 3.138 3.42 3.42 0 00.806 1.946 3.42 3.42 0 010 4.438 3.42 3.42 0 00-.806 1.946 3.42 3.42 0 01-3.138 3.138 3.42 3.42 0 00-1.946.806 3.42 3.42 0 01-4.438 0 3.42 3.42 0 00-1.946-.806 3.42 3.42 0 01-3.138-3.138 3.42 3.42 0 00-.806-1.946 3.42 3.42 0 010-4.438 3.42 3.42 0 00.806-1.946 3.42 3.42 0 013.138-3.138z",
            ],
            Icon::Beaker => &[
                "M19.428 15.428a2 2 0 00-1.022-.547l-2.387-.477a6 6 0 00-3.86.517l-.318.158a6 6 0 01-3.86.517L6.05 15.21a2 2 0 00-1.806.547M8 4h8l-1 1v5.172a2 2 0 00.586 1.414l5 5c1.26 1.26.367 3.414-1.415 3.414H4.828c-1.782 0-2.674-2.154-1.414-3.414l5-5A2 2 0 009 10.172V5L8 4z",
            ],
            Icon::Building => &[
                "M19 21V5a2 2 0 00-2-2H7a2 2 0 00-2 2v16m14 0h2m-2 0h-5m-9 0H3m2 0h5M9 7h1m-1 4h1m4-4h1m-1 4h1m-5 10v-5a1 1 0 011-1h2a1 1 0 011 1v5m-4 0h4",
            ],
            Icon::Calendar => &[
                "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z",
            ],
            Icon::Cash => &[
                "M17 9V7a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2m2 4h10a2 2 0 002-2v-6a2 2 0 00-2-2H9a2 2 0 00-2 2v6a2 2 0 002 2zm7-5a2 2 0 11-4 0 2 2 0 014 0z",
            ],
            Icon::Check => &["M5 13l4 4L19 7"],
            Icon::CheckCircle => &["M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"],
            Icon::ChevronDown => &["M19 9l-7 7-7-7"],
            Icon::ClipboardCheck => &[
                "M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2m-6 9l2 2 4-4",
            ],
            Icon::ClipboardList => &[
                "M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2m-3 7h3m-3 4h3m-6-4h.01M9 16h.01",
            ],
            Icon::Clock => &["M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z"],
            Icon::Close => &["M6 18L18 6M6 6l12 12"],
            Icon::ExternalLink => &[
                "M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14",
            ],
            Icon::Gift => &[
                "M12 8v13m0-13V6a2 2 0 112 2h-2zm0 0V5.5A2.5 2.5 0 109.5 8H12zm-7 4h14M5 12a2 2 0 110-4h14a2 2 0 110 4M5 12v7a2 2 0 002 2h10a2 2 0 002-2v-7",
            ],
            Icon::Info => &["M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"],
            Icon::Mail => &[
                "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
            ],
            Icon::Map => &[
                "M9 20l-5.447-2.724A1 1 0 013 16.382V5.618a1 1 0 011.447-.894L9 7m0 13l6-3m-6 3V7m6 10l4.553 2.276A1 1 0 0021 18.382V7.618a1 1 0 00-.553-.894L15 4m0 13V4m0 0L9 7",
            ],
            Icon::MapPin => &[
                "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z",
                "M15 11a3 3 0 11-6 0 3 3 0 016 0z",
            ],
            Icon::Menu => &["M4 6h16M4 12h16M4 18h16"],
            Icon::Phone => &[
                "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z",
            ],
            Icon::Photo => &[
                "M4 16l4.586-4.586a2 2 0 012.828 0L16 16m-2-2l1.586-1.586a2 2 0 012.828 0L20 14m-6-6h.01M6 20h12a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v12a2 2 0 002 2z",
            ],
            Icon::ShieldCheck => &[
                "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z",
            ],
            Icon::Smile => &[
                "M14.828 14.828a4 4 0 01-5.656 0M9 10h.01M15 10h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
            ],
            Icon::Sparkles => &[
                "M5 3v4M3 5h4M6 17v4m-2-2h4m5-16l2.286 6.857L21 12l-5.714 2.143L13 21l-2.286-6.857L5 12l5.714-2.143L13 3z",
            ],
            Icon::Star => &[
                "M11.049 2.927c.3-.921 1.603-.921 1.902 0l1.519 4.674a1 1 0 00.95.69h4.915c.969 0 1.371 1.24.588 1.81l-3.976 2.888a1 1 0 00-.363 1.118l1.518 4.674c.3.922-.755 1.688-1.538 1.118l-3.976-2.888a1 1 0 00-1.176 0l-3.976 2.888c-.783.57-1.838-.197-1.538-1.118l1.518-4.674a1 1 0 00-.363-1.118l-3.976-2.888c-.784-.57-.38-1.81.588-1.81h4.914a1 1 0 00.951-.69l1.519-4.674z",
            ],
            Icon::Template => &[
                "M4 5a1 1 0 011-1h14a1 1 0 011 1v2a1 1 0 01-1 1H5a1 1 0 01-1-1V5zM4 13a1 1 0 011-1h6a1 1 0 011 1v6a1 1 0 01-1 1H5a1 1 0 01-1-1v-6zM16 13a1 1 0 011-1h2a1 1 0 011 1v6a1 1 0 01-1 1h-2a1 1 0 01-1-1v-6z",
            ],
            Icon::UserGroup => &[
                "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z",
            ],
            Icon::ZoomIn => &[
                "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0zM10 7v3m0 0v3m0-3h3m-3 0H7",
            ],
        }
    }

    /// Interface glyphs (arrows, chevrons, close) are drawn heavier than
    /// content illustrations.
    fn stroke_width(self) -> &'static str {
        match self {
            Icon::ArrowRight
            | Icon::ArrowRightLong
            | Icon::Check
            | Icon::ChevronDown
            | Icon::Close
            | Icon::ExternalLink
            | Icon::Gift
            | Icon::Map
            | Icon::Menu
            | Icon::ZoomIn => "2",
            Icon::Photo | Icon::UserGroup => "1",
            _ => "1.5",
        }
    }

    /// Render the icon as an inline, decorative `<svg>`.
    pub fn svg(self, class: &str) -> Markup {
        html! {
            svg class=(class) fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true" {
                @for d in self.paths() {
                    path stroke-linecap="round" stroke-linejoin="round" stroke-width=(self.stroke_width()) d=(d) {}
                }
            }
        }
    }
}

/// Monochrome Google "G" used on review cards and links.
pub fn google_logo(class: &str) -> Markup {
    const PATHS: [&str; 4] = [
        "M22.56 12.25c0-.78-.07-1.53-.2-2.25H12v4.26h5.92c-.26 1.37-1.04 2.53-2.21 3.31v2.77h3.57c2.08-1.92 3.28-4.74 3.28-8.09z",
        "M12 23c2.97 0 5.46-.98 7.28-2.66l-3.57-2.77c-.98.66-2.23 1.06-3.71 1.06-2.86 0-5.29-1.93-6.16-4.53H2.18v2.84C3.99 20.53 7.7 23 12 23z",
        "M5.84 14.09c-.22-.66-.35-1.36-.35-2.09s.13-1.43.35-2.09V7.07H2.18C1.43 8.55 1 10.22 1 12s.43 3.45 1.18 4.93l2.85-2.22.81-.62z",
        "M12 5.38c1.62 0 3.06.56 4.21 1.64l3.15-3.15C17.45 2.09 14.97 1 12 1 7.7 1 3.99 3.47 2.18 7.07l3.66 2.84c.87-2.6 3.3-4.53 6.16-4.53z",
    ];
    html! {
        svg class=(class) viewBox="0 0 24 24" aria-hidden="true" {
            @for d in PATHS {
                path fill="currentColor" d=(d) {}
            }
        }
    }
}

/// Indeterminate progress spinner for the contact form's sending state.
pub fn spinner(class: &str) -> Markup {
    html! {
        svg class=(class) fill="none" viewBox="0 0 24 24" aria-hidden="true" {
            circle.spinner-track cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" {}
            path.spinner-head fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z" {}
        }
    }
}
