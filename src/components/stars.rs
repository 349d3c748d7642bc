//! Five-star rating display.

use crate::components::icons::Icon;
use maud::{Markup, html};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    fn class(self) -> &'static str {
        match self {
            Star::Full => "star star--full",
            Star::Half => "star star--half",
            Star::Empty => "star star--empty",
        }
    }
}

/// Split a rating into five stars. Ratings are clamped to `0..=5`; a
/// fractional part of one half or more draws a half star.
pub fn stars(rating: f64) -> [Star; 5] {
    let rating = if rating.is_nan() { 0.0 } else { rating.clamp(0.0, 5.0) };
    let full = rating.floor() as usize;
    let half = rating - rating.floor() >= 0.5;
    std::array::from_fn(|i| {
        if i < full {
            Star::Full
        } else if i == full && half {
            Star::Half
        } else {
            Star::Empty
        }
    })
}

pub fn render_star_rating(rating: f64) -> Markup {
    let label = format!("Rated {rating} out of 5");
    html! {
        span.star-rating role="img" aria-label=(label) {
            @for star in stars(rating) {
                span class=(star.class()) { (Icon::Star.svg("icon icon-sm")) }
            }
        }
    }
}
