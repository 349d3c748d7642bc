//! Regions and towns covered, next to a wide-zoom map.

use crate::components::button::{Button, Size, Variant};
use crate::components::icons::Icon;
use crate::components::section::{Background, SectionWrapper};
use crate::sections::map::{coordinates, embed_url, map_frame};
use crate::sections::{list_or, text_or};
use crate::types::{Business, ServiceArea};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

/// Regional zoom for the coverage map.
pub const COVERAGE_ZOOM: u8 = 11;
pub const DEFAULT_NOTE: &str =
    "Don't see your area? Give us a call \u{2014} we may still be able to help!";

pub const DEFAULT_HEADLINE: &str = "Areas We Serve";

pub fn default_subheadline(business_name: &str) -> String {
    format!("{business_name} proudly serves customers throughout the greater metropolitan area and surrounding communities.")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceAreasProps {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub areas: Vec<ServiceArea>,
    pub note: Option<String>,
}

pub fn default_areas() -> Vec<ServiceArea> {
    [
        ("North County", ["Riverside", "Northville", "Lakewood", "Pine Valley", "Oak Ridge"]),
        ("Central District", ["Downtown", "Midtown", "Eastside", "Westgate", "University Heights"]),
        ("South County", ["Southport", "Harbor View", "Bayshore", "Greenfield", "Sunset Hills"]),
        ("East County", ["Eastlake", "Mountain View", "Valley Center", "Ridgemont", "Fairview"]),
    ]
    .into_iter()
    .map(|(region, cities)| ServiceArea {
        region: Some(region.into()),
        cities: cities.iter().map(|c| c.to_string()).collect(),
    })
    .collect()
}

pub fn render_service_areas(business: &Business, props: &ServiceAreasProps) -> Markup {
    let areas = list_or(&props.areas, default_areas);
    let headline = text_or(props.headline.as_deref(), || DEFAULT_HEADLINE.into());
    let subheadline = text_or(props.subheadline.as_deref(), || default_subheadline(&business.name));
    let note = text_or(props.note.as_deref(), || DEFAULT_NOTE.into());
    let (latitude, longitude) = coordinates(business);
    let title = format!("{} service area map", business.name);

    SectionWrapper::new("service-areas", Background::White).render(html! {
        div.areas-layout {
            div.areas-intro {
                p.section-label { "Service Coverage" }
                h2.section-title { (headline) }
                p.section-subtitle { (subheadline) }
                div.areas-map {
                    (map_frame(&embed_url(latitude, longitude, COVERAGE_ZOOM), &title, "map-frame"))
                }
            }
            div.areas-list {
                div.areas-grid {
                    @for area in areas.iter() {
                        div.area-card {
                            @if let Some(region) = &area.region {
                                h3.area-region { (region) }
                            }
                            ul.area-cities {
                                @for city in &area.cities {
                                    li {
                                        (Icon::Check.svg("icon icon-sm"))
                                        (city)
                                    }
                                }
                            }
                        }
                    }
                }
                div.areas-note {
                    (Icon::Info.svg("icon icon-md"))
                    div {
                        p { (note) }
                        (Button::new("Contact Us")
                            .variant(Variant::Ghost)
                            .size(Size::Sm)
                            .href("#contact")
                            .trailing(Icon::ArrowRight.svg("btn-icon")))
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::escaped;

    #[test]
    fn default_regions_and_cities() {
        let html = render_service_areas(&Business::named("Acme"), &ServiceAreasProps::default())
            .into_string();
        for region in ["North County", "Central District", "South County", "East County"] {
            assert!(html.contains(region), "{region}");
        }
        assert!(html.contains("University Heights"));
        assert_eq!(html.matches("<li>").count(), 20);
    }

    #[test]
    fn header_and_note_defaults() {
        let html = render_service_areas(&Business::named("Acme"), &ServiceAreasProps::default())
            .into_string();
        assert!(html.contains("Service Coverage"));
        assert!(html.contains("Areas We Serve"));
        assert!(html.contains(
            "Acme proudly serves customers throughout the greater metropolitan area and surrounding communities."
        ));
        assert!(html.contains(&escaped(DEFAULT_NOTE)));
        assert!(html.contains(r#"title="Acme service area map""#));
        assert!(html.contains("&amp;z=11&amp;"));
    }

    #[test]
    fn region_is_optional() {
        let props = ServiceAreasProps {
            areas: vec![ServiceArea {
                region: None,
                cities: vec!["Springfield".into()],
            }],
            ..Default::default()
        };
        let html = render_service_areas(&Business::named("Acme"), &props).into_string();
        assert!(html.contains("Springfield"));
        assert!(!html.contains("area-region"));
    }
}
