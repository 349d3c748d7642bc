//! Site content loaded from `site.toml`.
//!
//! One file describes the whole page: the business record shared by every
//! section, the order sections appear in, and one optional table of props
//! per section. Anything left out renders the built-in copy.
//!
//! ```toml
//! sections = ["hero", "services", "reviews", "contact"]
//!
//! [business]
//! name = "Acme Plumbing"
//! phone = "(555) 987-6543"
//!
//! [hero]
//! headline = "Plumbing done right"
//!
//! [[services.services]]
//! id = "drains"
//! icon = "sparkles"
//! title = "Drain Cleaning"
//! description = "Same-day service."
//! ```
//!
//! The navbar and footer are always rendered; `sections` controls the rest.

use crate::components::navbar::NavbarProps;
use crate::sections::about::{self, AboutProps};
use crate::sections::certifications::{self, CertificationsProps};
use crate::sections::contact::{self, ContactProps};
use crate::sections::cta_banner::{self, CtaBannerProps};
use crate::sections::faq::{self, FaqProps};
use crate::sections::footer::{self, FooterProps};
use crate::sections::gallery::{self, GalleryProps};
use crate::sections::hero::{self, HeroProps};
use crate::sections::map::MapProps;
use crate::sections::pricing::{self, PricingProps};
use crate::sections::process::{self, ProcessProps};
use crate::sections::reviews::{self, ReviewsProps};
use crate::sections::service_areas::{self, ServiceAreasProps};
use crate::sections::services::{self, ServicesProps};
use crate::sections::why_choose_us::{self, WhyChooseUsProps};
use crate::types::Business;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Site validation error: {0}")]
    Validation(String),
}

/// A page section that can be placed in the `sections` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Hero,
    About,
    Services,
    WhyChooseUs,
    Pricing,
    Faq,
    Gallery,
    Reviews,
    Contact,
    Map,
    ServiceAreas,
    Process,
    CtaBanner,
    Certifications,
}

impl SectionKind {
    /// Order used when `sections` is absent or empty. The CTA banner has no
    /// default copy and is only shown when listed explicitly.
    pub const DEFAULT_ORDER: [SectionKind; 13] = [
        SectionKind::Hero,
        SectionKind::Services,
        SectionKind::WhyChooseUs,
        SectionKind::About,
        SectionKind::Process,
        SectionKind::Gallery,
        SectionKind::Reviews,
        SectionKind::Pricing,
        SectionKind::Certifications,
        SectionKind::ServiceAreas,
        SectionKind::Faq,
        SectionKind::Contact,
        SectionKind::Map,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Services => "services",
            SectionKind::WhyChooseUs => "why-choose-us",
            SectionKind::Pricing => "pricing",
            SectionKind::Faq => "faq",
            SectionKind::Gallery => "gallery",
            SectionKind::Reviews => "reviews",
            SectionKind::Contact => "contact",
            SectionKind::Map => "map",
            SectionKind::ServiceAreas => "service-areas",
            SectionKind::Process => "process",
            SectionKind::CtaBanner => "cta-banner",
            SectionKind::Certifications => "certifications",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Site {
    pub business: Business,
    #[serde(default)]
    pub sections: Vec<SectionKind>,
    #[serde(default)]
    pub navbar: NavbarProps,
    #[serde(default)]
    pub hero: HeroProps,
    #[serde(default)]
    pub about: AboutProps,
    #[serde(default)]
    pub services: ServicesProps,
    #[serde(default)]
    pub why_choose_us: WhyChooseUsProps,
    #[serde(default)]
    pub pricing: PricingProps,
    #[serde(default)]
    pub faq: FaqProps,
    #[serde(default)]
    pub gallery: GalleryProps,
    #[serde(default)]
    pub reviews: ReviewsProps,
    #[serde(default)]
    pub contact: ContactProps,
    #[serde(default)]
    pub map: MapProps,
    #[serde(default)]
    pub service_areas: ServiceAreasProps,
    #[serde(default)]
    pub process: ProcessProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_banner: Option<CtaBannerProps>,
    #[serde(default)]
    pub certifications: CertificationsProps,
    #[serde(default)]
    pub footer: FooterProps,
}

impl Site {
    /// Sections in render order.
    pub fn section_order(&self) -> &[SectionKind] {
        if self.sections.is_empty() {
            &SectionKind::DEFAULT_ORDER[..]
        } else {
            self.sections.as_slice()
        }
    }

    /// Whether `site.toml` sets any props for `kind`, as opposed to the
    /// section rendering entirely from built-in copy.
    pub fn is_customized(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::Hero => self.hero != HeroProps::default(),
            SectionKind::About => self.about != AboutProps::default(),
            SectionKind::Services => self.services != ServicesProps::default(),
            SectionKind::WhyChooseUs => self.why_choose_us != WhyChooseUsProps::default(),
            SectionKind::Pricing => self.pricing != PricingProps::default(),
            SectionKind::Faq => self.faq != FaqProps::default(),
            SectionKind::Gallery => self.gallery != GalleryProps::default(),
            SectionKind::Reviews => self.reviews != ReviewsProps::default(),
            SectionKind::Contact => self.contact != ContactProps::default(),
            SectionKind::Map => self.map != MapProps::default(),
            SectionKind::ServiceAreas => self.service_areas != ServiceAreasProps::default(),
            SectionKind::Process => self.process != ProcessProps::default(),
            SectionKind::CtaBanner => self.cta_banner.is_some(),
            SectionKind::Certifications => self.certifications != CertificationsProps::default(),
        }
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        if self.business.name.trim().is_empty() {
            return Err(invalid("business.name must not be empty"));
        }
        if let Some(lat) = self.business.latitude
            && !(-90.0..=90.0).contains(&lat)
        {
            return Err(invalid(format!("business.latitude {lat} is outside -90..90")));
        }
        if let Some(lon) = self.business.longitude
            && !(-180.0..=180.0).contains(&lon)
        {
            return Err(invalid(format!("business.longitude {lon} is outside -180..180")));
        }

        let mut seen = BTreeSet::new();
        for kind in &self.sections {
            if !seen.insert(*kind) {
                return Err(invalid(format!("section '{kind}' is listed more than once")));
            }
        }

        unique_ids("services.services", self.services.services.iter().map(|s| &s.id))?;
        unique_ids("why_choose_us.features", self.why_choose_us.features.iter().map(|f| &f.id))?;
        unique_ids("pricing.plans", self.pricing.plans.iter().map(|p| &p.id))?;
        unique_ids("faq.faqs", self.faq.faqs.iter().map(|f| &f.id))?;
        unique_ids("gallery.images", self.gallery.images.iter().map(|i| &i.id))?;
        unique_ids("reviews.reviews", self.reviews.reviews.iter().map(|r| &r.id))?;
        unique_ids("process.steps", self.process.steps.iter().map(|s| &s.id))?;
        unique_ids(
            "certifications.certifications",
            self.certifications.certifications.iter().map(|c| &c.id),
        )?;

        check_rating("reviews.average_rating", self.reviews.average_rating)?;
        for review in &self.reviews.reviews {
            check_rating(&format!("rating of review '{}'", review.id), review.rating)?;
        }

        match &self.cta_banner {
            Some(banner) if banner.headline.trim().is_empty() => {
                Err(invalid("cta_banner.headline must not be empty"))
            }
            None if self.sections.contains(&SectionKind::CtaBanner) => Err(invalid(
                "section 'cta-banner' is listed but there is no [cta_banner] table",
            )),
            _ => Ok(()),
        }
    }

    /// Copy of the site with every built-in default written out, as the page
    /// will show it. Used by `check --json`. The footer copyright stays unset
    /// because it depends on the build year.
    pub fn with_defaults(&self) -> Site {
        let mut site = self.clone();
        let name = site.business.name.clone();
        site.sections = self.section_order().to_vec();

        let hero_props = &mut site.hero;
        fill_text(&mut hero_props.headline, || hero::default_headline(&name));
        fill_text(&mut hero_props.subheadline, || hero::DEFAULT_SUBHEADLINE.into());
        fill_text(&mut hero_props.cta_text, || hero::DEFAULT_CTA_TEXT.into());
        fill_text(&mut hero_props.cta_href, || hero::DEFAULT_CTA_HREF.into());

        let about_props = &mut site.about;
        fill_text(&mut about_props.headline, || about::default_headline(&name));
        fill_text(&mut about_props.story, || about::default_story(&name));
        fill_text(&mut about_props.mission, || about::DEFAULT_MISSION.into());
        fill_text(&mut about_props.cta_text, || about::DEFAULT_CTA_TEXT.into());
        fill_text(&mut about_props.cta_href, || about::DEFAULT_CTA_HREF.into());
        fill_list(&mut about_props.stats, about::default_stats);

        fill_headings(
            &mut site.services.headline,
            &mut site.services.subheadline,
            services::DEFAULT_HEADLINE,
            services::default_subheadline(&name),
        );
        fill_list(&mut site.services.services, services::default_services);

        fill_headings(
            &mut site.why_choose_us.headline,
            &mut site.why_choose_us.subheadline,
            why_choose_us::DEFAULT_HEADLINE,
            why_choose_us::default_subheadline(&name),
        );
        fill_list(&mut site.why_choose_us.features, why_choose_us::default_features);

        let pricing_props = &mut site.pricing;
        fill_text(&mut pricing_props.headline, || pricing::DEFAULT_HEADLINE.into());
        fill_text(&mut pricing_props.subheadline, || pricing::DEFAULT_SUBHEADLINE.into());
        fill_text(&mut pricing_props.note, || pricing::DEFAULT_NOTE.into());
        fill_list(&mut pricing_props.plans, pricing::default_plans);
        for plan in &mut pricing_props.plans {
            fill_text(&mut plan.cta_text, || pricing::DEFAULT_CTA_TEXT.into());
            fill_text(&mut plan.cta_href, || pricing::DEFAULT_CTA_HREF.into());
        }

        fill_headings(
            &mut site.faq.headline,
            &mut site.faq.subheadline,
            faq::DEFAULT_HEADLINE,
            faq::default_subheadline(&name),
        );
        fill_list(&mut site.faq.faqs, faq::default_faqs);

        fill_headings(
            &mut site.gallery.headline,
            &mut site.gallery.subheadline,
            gallery::DEFAULT_HEADLINE,
            gallery::default_subheadline(&name),
        );
        fill_list(&mut site.gallery.images, gallery::default_images);
        if site.gallery.categories.is_none() {
            site.gallery.categories = Some(gallery::categories(&site.gallery.images, None));
        }

        fill_list(&mut site.reviews.reviews, reviews::default_reviews);
        fill_list(&mut site.contact.business_hours, contact::default_hours);

        fill_headings(
            &mut site.service_areas.headline,
            &mut site.service_areas.subheadline,
            service_areas::DEFAULT_HEADLINE,
            service_areas::default_subheadline(&name),
        );
        fill_text(&mut site.service_areas.note, || service_areas::DEFAULT_NOTE.into());
        fill_list(&mut site.service_areas.areas, service_areas::default_areas);

        fill_headings(
            &mut site.process.headline,
            &mut site.process.subheadline,
            process::DEFAULT_HEADLINE,
            process::default_subheadline(&name),
        );
        fill_list(&mut site.process.steps, process::default_steps);

        if let Some(banner) = &mut site.cta_banner {
            fill_text(&mut banner.cta_text, || cta_banner::DEFAULT_CTA_TEXT.into());
            fill_text(&mut banner.cta_href, || cta_banner::DEFAULT_CTA_HREF.into());
        }

        fill_headings(
            &mut site.certifications.headline,
            &mut site.certifications.subheadline,
            certifications::DEFAULT_HEADLINE,
            certifications::default_subheadline(&name),
        );
        fill_list(&mut site.certifications.certifications, certifications::default_certifications);

        if let Some(tagline) = site.business.tagline.clone() {
            fill_text(&mut site.footer.description, || tagline);
        }
        fill_list(&mut site.footer.links, footer::default_links);
        site
    }
}

fn invalid(message: impl Into<String>) -> SiteError {
    SiteError::Validation(message.into())
}

fn unique_ids<'a>(list: &str, ids: impl Iterator<Item = &'a String>) -> Result<(), SiteError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(invalid(format!("duplicate id '{id}' in {list}")));
        }
    }
    Ok(())
}

fn check_rating(what: &str, rating: f64) -> Result<(), SiteError> {
    if (0.0..=5.0).contains(&rating) {
        Ok(())
    } else {
        Err(invalid(format!("{what} must be between 0 and 5, got {rating}")))
    }
}

fn fill_text(slot: &mut Option<String>, default: impl FnOnce() -> String) {
    if slot.as_deref().is_none_or(str::is_empty) {
        *slot = Some(default());
    }
}

fn fill_headings(
    headline: &mut Option<String>,
    subheadline: &mut Option<String>,
    default_headline: &str,
    default_subheadline: String,
) {
    fill_text(headline, || default_headline.into());
    fill_text(subheadline, || default_subheadline);
}

fn fill_list<T>(slot: &mut Vec<T>, default: impl FnOnce() -> Vec<T>) {
    if slot.is_empty() {
        *slot = default();
    }
}

/// Parse and validate a `site.toml` document.
pub fn parse_site(content: &str) -> Result<Site, SiteError> {
    let site: Site = toml::from_str(content)?;
    site.validate()?;
    Ok(site)
}

/// Load and validate `site.toml` from the given path.
pub fn load_site(path: &Path) -> Result<Site, SiteError> {
    let content = fs::read_to_string(path)?;
    let site = parse_site(&content)?;
    debug!(
        path = %path.display(),
        sections = site.section_order().len(),
        explicit_order = !site.sections.is_empty(),
        "loaded site"
    );
    Ok(site)
}

/// A commented starter `site.toml`.
///
/// Used by the `gen-site` CLI command.
pub fn stock_site_toml() -> &'static str {
    r##"# Shopfront Site Content
# ======================
# Only [business].name is required. Every section falls back to built-in
# placeholder copy, so start small and replace the defaults as you go.

# Sections in page order. Leave out to use the default order:
#   hero, services, why-choose-us, about, process, gallery, reviews,
#   pricing, certifications, service-areas, faq, contact, map
# "cta-banner" is only shown when listed and a [cta_banner] table exists.
sections = [
    "hero",
    "services",
    "why-choose-us",
    "about",
    "reviews",
    "cta-banner",
    "faq",
    "contact",
    "map",
]

# ---------------------------------------------------------------------------
# Business: shared by every section
# ---------------------------------------------------------------------------
[business]
name = "Acme Plumbing"
phone = "(555) 987-6543"
email = "hello@acmeplumbing.example"
address = "42 Water Lane, Springfield, ST 54321"
# Map pin. Defaults to New York City.
latitude = 40.7128
longitude = -74.006
tagline = "Family-owned plumbers serving Springfield since 2008."

# ---------------------------------------------------------------------------
# Navbar
# ---------------------------------------------------------------------------
[navbar]
cta = { label = "Call Now", href = "tel:5559876543" }

[navbar.logo]
text = "Acme Plumbing"
# src = "/assets/logo.svg"

[[navbar.links]]
label = "Services"
href = "#services"

[[navbar.links]]
label = "About"
href = "#about"

[[navbar.links]]
label = "Reviews"
href = "#reviews"

[[navbar.links]]
label = "Contact"
href = "#contact"

# ---------------------------------------------------------------------------
# Sections: every key below is optional
# ---------------------------------------------------------------------------
[hero]
headline = "Plumbing Done Right, the First Time"
# subheadline = "..."
cta_text = "Get a Free Quote"
cta_href = "#contact"
secondary_cta_text = "Our Services"
secondary_cta_href = "#services"
# background_image = "/assets/hero.jpg"

# [about]
# story = "Markdown is supported here."
# image = "/assets/team.jpg"

# Lists replace the defaults entirely. Icons come from a fixed set:
# arrow-right, badge-check, building, calendar, check-circle, clock,
# shield-check, sparkles, star, user-group, ...
# [[services.services]]
# id = "drains"
# icon = "sparkles"
# title = "Drain Cleaning"
# description = "Same-day service for blocked drains."
# price = "From $89"

[reviews]
# google_business_url = "https://g.page/r/..."
average_rating = 4.9
total_reviews = 212

[cta_banner]
headline = "Burst pipe? We answer 24/7."
subheadline = "A licensed plumber at your door within the hour."
# emergency | promo | default
variant = "emergency"

[contact]
# POST the form values as JSON to this URL.
# endpoint = "https://forms.example.com/acme"

[footer]
# copyright = "© Acme Plumbing LLC"
"##
}
