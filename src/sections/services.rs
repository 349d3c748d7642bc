//! Grid of service cards.

use crate::components::button::{Button, Size, Variant};
use crate::components::icons::Icon;
use crate::components::section::{Background, SectionWrapper};
use crate::sections::{list_or, section_header, text_or};
use crate::types::{Business, Service};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HEADLINE: &str = "Our Services";

pub fn default_subheadline(business_name: &str) -> String {
    format!("{business_name} offers a comprehensive range of professional services to meet all your needs.")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServicesProps {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub services: Vec<Service>,
}

pub fn default_services() -> Vec<Service> {
    let service = |id: &str, icon, title: &str, description: &str, price: Option<&str>| Service {
        id: id.into(),
        icon,
        title: title.into(),
        description: description.into(),
        price: price.map(String::from),
        href: None,
    };
    vec![
        service(
            "1",
            Icon::Beaker,
            "Residential Services",
            "Complete home solutions from routine maintenance to emergency repairs. We handle it all with care and expertise.",
            Some("From $99"),
        ),
        service(
            "2",
            Icon::Building,
            "Commercial Services",
            "Keep your business running smoothly with our professional commercial services. Minimal downtime guaranteed.",
            Some("Custom Quote"),
        ),
        service(
            "3",
            Icon::Clock,
            "Emergency Services",
            "Available 24/7 for urgent situations. Fast response times and reliable solutions when you need them most.",
            Some("Call Now"),
        ),
        service(
            "4",
            Icon::ShieldCheck,
            "Maintenance Plans",
            "Preventive care to keep everything running perfectly. Save money and avoid unexpected breakdowns.",
            Some("From $29/mo"),
        ),
        service(
            "5",
            Icon::Template,
            "Installation",
            "Professional installation of new systems and equipment. Done right the first time, every time.",
            None,
        ),
        service(
            "6",
            Icon::ClipboardCheck,
            "Inspections",
            "Thorough inspections to identify potential issues before they become costly problems.",
            None,
        ),
    ]
}

pub fn render_services(business: &Business, props: &ServicesProps) -> Markup {
    let services = list_or(&props.services, default_services);
    let headline = text_or(props.headline.as_deref(), || DEFAULT_HEADLINE.into());
    let subheadline = text_or(props.subheadline.as_deref(), || default_subheadline(&business.name));

    SectionWrapper::new("services", Background::White).render(html! {
        (section_header("What We Offer", &headline, &subheadline))
        div.services-grid {
            @for service in services.iter() {
                (service_card(service))
            }
        }
        div.section-footer {
            p { "Not sure what you need? We're happy to help." }
            (Button::new("Get a Free Consultation")
                .variant(Variant::Outline)
                .size(Size::Md)
                .href("#contact"))
        }
    })
}

fn service_card(service: &Service) -> Markup {
    html! {
        article.card.service-card {
            div.card-icon { (service.icon.svg("icon icon-lg")) }
            h3.card-title { (service.title) }
            p.card-text { (service.description) }
            div.service-card-footer {
                @if let Some(price) = &service.price {
                    span.service-price { (price) }
                }
                @if let Some(href) = &service.href {
                    a.service-link href=(href) tabindex="0" {
                        "Learn More"
                        (Icon::ArrowRightLong.svg("icon icon-sm"))
                    }
                } @else {
                    (Icon::ArrowRightLong.svg("icon icon-sm service-arrow"))
                }
            }
        }
    }
}
