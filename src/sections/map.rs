//! Embedded Google map with a "Visit Us" card.

use crate::components::button::{Button, Size, Variant};
use crate::components::icons::Icon;
use crate::sections::contact::{DEFAULT_ADDRESS, DEFAULT_PHONE};
use crate::types::Business;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LATITUDE: f64 = 40.7128;
pub const DEFAULT_LONGITUDE: f64 = -74.006;
/// Street-level zoom for the location map.
pub const LOCATION_ZOOM: u8 = 15;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapProps {
    /// Replaces the computed directions link.
    pub google_maps_url: Option<String>,
}

/// The business coordinates, or the default location.
pub fn coordinates(business: &Business) -> (f64, f64) {
    (
        business.latitude.unwrap_or(DEFAULT_LATITUDE),
        business.longitude.unwrap_or(DEFAULT_LONGITUDE),
    )
}

pub fn embed_url(latitude: f64, longitude: f64, zoom: u8) -> String {
    format!("https://www.google.com/maps?q={latitude},{longitude}&z={zoom}&output=embed")
}

pub fn directions_url(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps/dir/?api=1&destination={latitude},{longitude}")
}

/// Lazy, borderless Google Maps iframe.
pub fn map_frame(src: &str, title: &str, class: &str) -> Markup {
    html! {
        iframe class=(class) src=(src) title=(title) loading="lazy" allowfullscreen
            referrerpolicy="no-referrer-when-downgrade" {}
    }
}

pub fn render_map(business: &Business, props: &MapProps) -> Markup {
    let (latitude, longitude) = coordinates(business);
    let address = business.address.as_deref().unwrap_or(DEFAULT_ADDRESS);
    let phone = business.phone.as_deref().unwrap_or(DEFAULT_PHONE);
    let directions = match props.google_maps_url.as_deref().filter(|u| !u.is_empty()) {
        Some(url) => url.to_string(),
        None => directions_url(latitude, longitude),
    };
    let title = format!("{} location on Google Maps", business.name);

    html! {
        section.map-section id="location" {
            div.map-canvas {
                (map_frame(&embed_url(latitude, longitude, LOCATION_ZOOM), &title, "map-frame"))
                div.map-shade aria-hidden="true" {}
            }
            div.map-card {
                div.map-card-accent aria-hidden="true" {}
                p.section-label { "Visit Us" }
                h2.map-card-title { (business.name) }
                div.map-detail {
                    span.map-detail-icon { (Icon::MapPin.svg("icon icon-md")) }
                    div {
                        p.map-detail-label { "Address" }
                        p { (address) }
                    }
                }
                div.map-detail {
                    span.map-detail-icon { (Icon::Phone.svg("icon icon-md")) }
                    div {
                        p.map-detail-label { "Phone" }
                        a href=(format!("tel:{phone}")) tabindex="0" { (phone) }
                    }
                }
                (Button::new("Get Directions")
                    .variant(Variant::Primary)
                    .size(Size::Md)
                    .href(directions.as_str())
                    .leading(Icon::Map.svg("btn-icon")))
            }
            div.map-accent-line aria-hidden="true" {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_use_plain_coordinates() {
        assert_eq!(
            embed_url(40.7128, -74.006, 15),
            "https://www.google.com/maps?q=40.7128,-74.006&z=15&output=embed"
        );
        assert_eq!(
            directions_url(40.7128, -74.006),
            "https://www.google.com/maps/dir/?api=1&destination=40.7128,-74.006"
        );
    }

    #[test]
    fn default_location() {
        let html = render_map(&Business::named("Acme"), &MapProps::default()).into_string();
        assert!(html.contains("q=40.7128,-74.006&amp;z=15&amp;output=embed"));
        assert!(html.contains("destination=40.7128,-74.006"));
        assert!(html.contains(r#"title="Acme location on Google Maps""#));
        assert!(html.contains("Visit Us"));
        assert!(html.contains(DEFAULT_ADDRESS));
        assert!(html.contains("Get Directions"));
    }

    #[test]
    fn business_coordinates_and_override() {
        let business = Business {
            latitude: Some(51.5),
            longitude: Some(-0.12),
            ..Business::named("Acme")
        };
        let props = MapProps {
            google_maps_url: Some("https://maps.app.goo.gl/xyz".into()),
        };
        let html = render_map(&business, &props).into_string();
        assert!(html.contains("q=51.5,-0.12"));
        assert!(html.contains(r#"href="https://maps.app.goo.gl/xyz""#));
        assert!(!html.contains("destination="));
    }
}
