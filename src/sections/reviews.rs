//! Customer testimonials with an overall Google rating.
//!
//! Long reviews are cut at [`TRUNCATE_AT`] characters with a per-review
//! "Read more" toggle. Both the short and the full text are rendered; the
//! `is-expanded` class on the card decides which one shows.

use crate::components::button::{Button, Size, Variant};
use crate::components::icons::{Icon, google_logo};
use crate::components::section::{Background, SectionWrapper};
use crate::components::stars::render_star_rating;
use crate::sections::{list_or, section_header};
use crate::types::{Business, Review};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use url::Url;

pub const TRUNCATE_AT: usize = 180;
/// Cards shown regardless of how many reviews are configured.
pub const MAX_SHOWN: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReviewsProps {
    pub google_business_url: Option<String>,
    pub reviews: Vec<Review>,
    pub average_rating: f64,
    pub total_reviews: u32,
}

impl Default for ReviewsProps {
    fn default() -> Self {
        Self {
            google_business_url: None,
            reviews: Vec::new(),
            average_rating: 4.8,
            total_reviews: 127,
        }
    }
}

pub fn default_reviews() -> Vec<Review> {
    [
        (
            "Sarah M.",
            5.0,
            "Absolutely outstanding service! They arrived on time, were incredibly professional, and the quality of work exceeded my expectations. I've already recommended them to all my neighbors.",
            "2 weeks ago",
        ),
        (
            "James K.",
            5.0,
            "I've used many services over the years, but this company stands out. Fair pricing, excellent communication, and they left my property spotless. Will definitely use again.",
            "1 month ago",
        ),
        (
            "Maria L.",
            4.0,
            "Very happy with the work done. The team was friendly and knowledgeable. They took the time to explain everything and made sure I was satisfied before leaving.",
            "1 month ago",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (author, rating, text, date))| Review {
        id: (i + 1).to_string(),
        author: author.into(),
        rating,
        text: text.into(),
        date: date.into(),
        profile_photo: None,
    })
    .collect()
}

/// The review text cut to [`TRUNCATE_AT`] characters plus `...`, or `None`
/// when it already fits.
pub fn truncated(text: &str) -> Option<String> {
    let mut chars = text.char_indices();
    let (cut, _) = chars.nth(TRUNCATE_AT)?;
    Some(format!("{}...", &text[..cut]))
}

/// Link to the business's Google reviews, or a search for them.
pub fn reviews_link(business_name: &str, google_business_url: Option<&str>) -> String {
    if let Some(url) = google_business_url.filter(|u| !u.is_empty()) {
        return url.to_string();
    }
    let query = format!("{business_name} reviews");
    match Url::parse_with_params("https://www.google.com/search", [("q", query.as_str())]) {
        Ok(url) => url.into(),
        Err(_) => "https://www.google.com/search".to_string(),
    }
}

/// Reviews whose full text is shown. Each review toggles independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewExpansion {
    expanded: BTreeSet<String>,
}

impl ReviewExpansion {
    pub fn toggle(&mut self, review_id: &str) {
        if !self.expanded.remove(review_id) {
            self.expanded.insert(review_id.to_string());
        }
    }

    pub fn is_expanded(&self, review_id: &str) -> bool {
        self.expanded.contains(review_id)
    }
}

pub fn render_reviews(business: &Business, props: &ReviewsProps, expansion: &ReviewExpansion) -> Markup {
    let reviews = list_or(&props.reviews, default_reviews);
    let subheadline = format!(
        "Don't just take our word for it. Here's what {} customers have to say about their experience.",
        business.name
    );
    let link = reviews_link(&business.name, props.google_business_url.as_deref());

    SectionWrapper::new("reviews", Background::Light).render(html! {
        (section_header("Testimonials", "What Our Customers Say", &subheadline))
        div.rating-summary {
            (google_logo("icon icon-lg"))
            div {
                div.rating-summary-score {
                    span.rating-average { (props.average_rating) }
                    (render_star_rating(props.average_rating))
                }
                p.rating-summary-label {
                    "Google Rating · " (props.total_reviews) " reviews"
                }
            }
        }

        div.reviews-grid {
            @for review in reviews.iter().take(MAX_SHOWN) {
                (review_card(review, expansion.is_expanded(&review.id)))
            }
        }

        div.section-footer {
            (Button::new("View More Reviews on Google")
                .variant(Variant::Outline)
                .size(Size::Md)
                .href(link.as_str())
                .leading(google_logo("btn-icon"))
                .trailing(Icon::ExternalLink.svg("btn-icon")))
        }
    })
}

fn review_card(review: &Review, expanded: bool) -> Markup {
    let short = truncated(&review.text);
    let initial: String = review
        .author
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();
    html! {
        article.card.review-card.is-expanded[expanded] data-review=(review.id) {
            header.review-header {
                @if let Some(photo) = &review.profile_photo {
                    img.review-avatar src=(photo) alt=(review.author);
                } @else {
                    div.review-avatar.review-avatar--initial aria-hidden="true" { (initial) }
                }
                div.review-meta {
                    p.review-author { (review.author) }
                    div.review-rating {
                        (render_star_rating(review.rating))
                        span.review-date { (review.date) }
                    }
                }
                span.review-source title="Google Review" { (google_logo("icon icon-md")) }
            }

            @if let Some(short) = &short {
                p.review-text.review-text--short { (short) }
                p.review-text.review-text--full { (review.text) }
                button.review-toggle type="button" tabindex="0"
                    aria-expanded=(if expanded { "true" } else { "false" }) data-review-toggle {
                    (if expanded { "Show less" } else { "Read more" })
                }
            } @else {
                p.review-text { (review.text) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::escaped;

    fn long_review(id: &str) -> Review {
        Review {
            id: id.into(),
            author: "ann".into(),
            rating: 5.0,
            text: "x".repeat(200),
            date: "today".into(),
            profile_photo: None,
        }
    }

    #[test]
    fn truncates_after_180_characters() {
        assert_eq!(truncated(&"a".repeat(180)), None);
        let cut = truncated(&"a".repeat(181)).unwrap();
        assert_eq!(cut, format!("{}...", "a".repeat(180)));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "é".repeat(200);
        let cut = truncated(&text).unwrap();
        assert_eq!(cut.chars().count(), 183);
    }

    #[test]
    fn expansion_is_per_review() {
        let mut expansion = ReviewExpansion::default();
        expansion.toggle("1");
        expansion.toggle("2");
        expansion.toggle("1");
        assert!(!expansion.is_expanded("1"));
        assert!(expansion.is_expanded("2"));
    }

    #[test]
    fn default_reviews_render() {
        let html = render_reviews(&Business::named("Acme"), &ReviewsProps::default(), &ReviewExpansion::default())
            .into_string();
        for review in default_reviews() {
            assert!(html.contains(&escaped(&review.author)));
            assert!(html.contains(&escaped(&review.text)));
        }
        assert!(html.contains("What Our Customers Say"));
        assert!(html.contains(&escaped(
            "Don't just take our word for it. Here's what Acme customers have to say about their experience."
        )));
        assert!(html.contains("4.8"));
        assert!(html.contains("127 reviews"));
        // Only the first default review runs past the cut.
        assert_eq!(html.matches("Read more").count(), 1);
    }

    #[test]
    fn average_rating_shown_as_configured() {
        let render = |average_rating| {
            let props = ReviewsProps {
                average_rating,
                ..Default::default()
            };
            render_reviews(&Business::named("Acme"), &props, &ReviewExpansion::default())
                .into_string()
        };
        assert!(render(4.75).contains(r#"<span class="rating-average">4.75</span>"#));
        assert!(render(5.0).contains(r#"<span class="rating-average">5</span>"#));
        assert!(render(4.8).contains(r#"<span class="rating-average">4.8</span>"#));
    }

    #[test]
    fn at_most_three_cards() {
        let props = ReviewsProps {
            reviews: (1..=5).map(|i| long_review(&i.to_string())).collect(),
            ..Default::default()
        };
        let html = render_reviews(&Business::named("Acme"), &props, &ReviewExpansion::default())
            .into_string();
        assert_eq!(html.matches("<article").count(), 3);
        assert_eq!(html.matches("Read more").count(), 3);
    }

    #[test]
    fn expanded_review_shows_show_less() {
        let props = ReviewsProps {
            reviews: vec![long_review("a"), long_review("b")],
            ..Default::default()
        };
        let mut expansion = ReviewExpansion::default();
        expansion.toggle("b");
        let html = render_reviews(&Business::named("Acme"), &props, &expansion).into_string();
        assert_eq!(html.matches("Show less").count(), 1);
        assert_eq!(html.matches("Read more").count(), 1);
        assert_eq!(html.matches("review-card is-expanded").count(), 1);
    }

    #[test]
    fn avatar_initial_is_uppercase() {
        let props = ReviewsProps {
            reviews: vec![long_review("a")],
            ..Default::default()
        };
        let html = render_reviews(&Business::named("Acme"), &props, &ReviewExpansion::default())
            .into_string();
        assert!(html.contains(r#"aria-hidden="true">A</div>"#));
    }

    #[test]
    fn reviews_link_defaults_to_search() {
        assert_eq!(
            reviews_link("Acme Plumbing", None),
            "https://www.google.com/search?q=Acme+Plumbing+reviews"
        );
        assert_eq!(
            reviews_link("Acme", Some("https://g.page/acme")),
            "https://g.page/acme"
        );
    }

    #[test]
    fn reviews_link_escapes_ampersand() {
        assert_eq!(
            reviews_link("Smith & Sons", None),
            "https://www.google.com/search?q=Smith+%26+Sons+reviews"
        );
    }
}
