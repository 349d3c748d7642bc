//! HTML page generation.
//!
//! Reads `site.toml` and `config.toml` from the content directory and writes
//! a single static page.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html            # Navbar, configured sections, footer
//! ├── site-1a2b3c4d.css     # Theme variables + base styles
//! ├── site-5e6f7a8b.js      # Progressive enhancement for the widgets
//! └── assets/               # content/assets/, copied verbatim
//! ```
//!
//! With `build.fingerprint_assets = false` the stylesheet and script are
//! written as `site.css` and `site.js`. Stylesheets and scripts left over
//! from earlier builds are removed.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colours injected from config)
//! - `static/site.js`: Fade-in, mobile menu, accordion, gallery, reviews, contact form
//!
//! Every interaction also works as server-rendered markup: the page is
//! readable with scripts disabled, and the Rust state types render any
//! state the script can reach.

use crate::components::navbar::{MobileMenu, NavbarProps, render_navbar};
use crate::config::{self, ConfigError, SiteConfig};
use crate::sections::about::render_about;
use crate::sections::certifications::render_certifications;
use crate::sections::contact::{ContactForm, render_contact};
use crate::sections::cta_banner::render_cta_banner;
use crate::sections::faq::{Accordion, render_faq};
use crate::sections::footer::render_footer;
use crate::sections::gallery::{GalleryView, render_gallery};
use crate::sections::hero::render_hero;
use crate::sections::map::render_map;
use crate::sections::pricing::render_pricing;
use crate::sections::process::render_process;
use crate::sections::reviews::{ReviewExpansion, render_reviews};
use crate::sections::service_areas::render_service_areas;
use crate::sections::services::render_services;
use crate::sections::why_choose_us::render_why_choose_us;
use crate::site::{self, SectionKind, Site, SiteError};
use crate::types::{Logo, NavLink};
use chrono::Datelike;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Site(#[from] SiteError),
}

impl From<walkdir::Error> for GenerateError {
    fn from(err: walkdir::Error) -> Self {
        GenerateError::Io(err.into())
    }
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// Hex digits of the content hash kept in asset names.
const FINGERPRINT_LEN: usize = 8;

/// What a build wrote, for [`crate::output::format_build_output`].
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub business: String,
    pub sections: Vec<SectionKind>,
    pub stylesheet: String,
    pub script: String,
    /// Copied files, relative to `content/assets/`.
    pub assets: Vec<PathBuf>,
}

/// Load the content directory and write the site.
pub fn generate(source: &Path, output_dir: &Path) -> Result<BuildReport, GenerateError> {
    let Resolved { config, site } = check(source)?;
    let year = chrono::Local::now().year();
    write_site(&site, &config, &source.join("assets"), output_dir, year)
}

/// Resolved content of a source directory, as printed by `check --json`.
#[derive(Debug, Serialize)]
pub struct Resolved {
    pub config: SiteConfig,
    pub site: Site,
}

/// Load and validate the content directory without writing anything.
pub fn check(source: &Path) -> Result<Resolved, GenerateError> {
    let config = config::load_config(source)?;
    let site = site::load_site(&source.join("site.toml"))?;
    Ok(Resolved { config, site })
}

impl Resolved {
    /// Pretty JSON with every built-in default written out.
    pub fn to_json(&self) -> Result<String, GenerateError> {
        let resolved = Resolved {
            config: self.config.clone(),
            site: self.site.with_defaults(),
        };
        Ok(serde_json::to_string_pretty(&resolved)?)
    }
}

/// Write `index.html`, the stylesheet, the script and any assets.
pub fn write_site(
    site: &Site,
    config: &SiteConfig,
    assets_dir: &Path,
    output_dir: &Path,
    year: i32,
) -> Result<BuildReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let css = format!("{}\n\n{}", config::generate_theme_css(&config.theme), CSS_STATIC);
    let fingerprint = config.build.fingerprint_assets;
    let stylesheet = asset_name("css", &css, fingerprint);
    let script = asset_name("js", JS, fingerprint);

    remove_stale_assets(output_dir, &[&stylesheet, &script])?;
    fs::write(output_dir.join(&stylesheet), &css)?;
    fs::write(output_dir.join(&script), JS)?;
    debug!(%stylesheet, %script, "wrote static assets");

    let page = render_page(site, config, &stylesheet, &script, year);
    fs::write(output_dir.join("index.html"), page.into_string())?;
    info!(output = %output_dir.display(), "wrote index.html");

    let assets = copy_assets(assets_dir, &output_dir.join("assets"))?;

    Ok(BuildReport {
        output_dir: output_dir.to_path_buf(),
        business: site.business.name.clone(),
        sections: site.section_order().to_vec(),
        stylesheet,
        script,
        assets,
    })
}

/// `site-<hash>.<ext>`, or `site.<ext>` without fingerprinting.
pub fn asset_name(ext: &str, content: &str, fingerprint: bool) -> String {
    if fingerprint {
        format!("site-{}.{ext}", content_hash(content))
    } else {
        format!("site.{ext}")
    }
}

/// Leading hex digits of the SHA-256 of `content`.
pub fn content_hash(content: &str) -> String {
    let digest = format!("{:x}", Sha256::digest(content.as_bytes()));
    digest[..FINGERPRINT_LEN].to_string()
}

fn is_generated_asset(name: &str) -> bool {
    let Some(stem) = name
        .strip_suffix(".css")
        .or_else(|| name.strip_suffix(".js"))
    else {
        return false;
    };
    match stem.strip_prefix("site-") {
        Some(hash) => hash.len() == FINGERPRINT_LEN && hash.chars().all(|c| c.is_ascii_hexdigit()),
        None => stem == "site",
    }
}

fn remove_stale_assets(output_dir: &Path, keep: &[&str]) -> std::io::Result<()> {
    for entry in fs::read_dir(output_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if entry.file_type()?.is_file() && is_generated_asset(name) && !keep.contains(&name) {
            fs::remove_file(entry.path())?;
            debug!(file = name, "removed stale asset");
        }
    }
    Ok(())
}

/// Copy every file under `src` into `dst`, keeping the layout. A missing
/// `src` copies nothing.
fn copy_assets(src: &Path, dst: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    if !src.is_dir() {
        return Ok(Vec::new());
    }
    let mut copied = Vec::new();
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            debug!(asset = %relative.display(), "copied");
            copied.push(relative.to_path_buf());
        }
    }
    Ok(copied)
}

// ============================================================================
// Page
// ============================================================================

/// Render the full page for `site`, linking the given stylesheet and script.
pub fn render_page(site: &Site, config: &SiteConfig, css_href: &str, js_href: &str, year: i32) -> Markup {
    let title = config
        .build
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(&site.business.name);
    let navbar = navbar_props(site);

    let content = html! {
        (render_navbar(&navbar, MobileMenu::default()))
        main {
            @for kind in site.section_order() {
                (render_section(site, *kind))
            }
        }
        (render_footer(&site.business, &site.footer, year))
    };
    base_document(
        &config.build.lang,
        title,
        site.business.tagline.as_deref(),
        css_href,
        js_href,
        content,
    )
}

/// One section in its initial state: menus closed, nothing expanded,
/// no filter, empty form.
fn render_section(site: &Site, kind: SectionKind) -> Markup {
    let business = &site.business;
    match kind {
        SectionKind::Hero => render_hero(business, &site.hero),
        SectionKind::About => render_about(business, &site.about),
        SectionKind::Services => render_services(business, &site.services),
        SectionKind::WhyChooseUs => render_why_choose_us(business, &site.why_choose_us),
        SectionKind::Pricing => render_pricing(&site.pricing),
        SectionKind::Faq => render_faq(business, &site.faq, &Accordion::default()),
        SectionKind::Gallery => render_gallery(business, &site.gallery, &GalleryView::default()),
        SectionKind::Reviews => render_reviews(business, &site.reviews, &ReviewExpansion::default()),
        SectionKind::Contact => render_contact(business, &site.contact, &ContactForm::default()),
        SectionKind::Map => render_map(business, &site.map),
        SectionKind::ServiceAreas => render_service_areas(business, &site.service_areas),
        SectionKind::Process => render_process(business, &site.process),
        SectionKind::CtaBanner => match &site.cta_banner {
            Some(banner) => render_cta_banner(business, banner),
            None => html! {},
        },
        SectionKind::Certifications => render_certifications(business, &site.certifications),
    }
}

/// The configured navbar, with a text logo of the business name and links
/// to the shown sections filled in when left out.
fn navbar_props(site: &Site) -> NavbarProps {
    let mut props = site.navbar.clone();
    if props.logo.is_none() {
        props.logo = Some(Logo {
            text: Some(site.business.name.clone()),
            ..Default::default()
        });
    }
    if props.links.is_empty() {
        props.links = section_links(site.section_order());
    }
    props
}

fn section_links(order: &[SectionKind]) -> Vec<NavLink> {
    order
        .iter()
        .filter_map(|kind| {
            let (label, href) = match kind {
                SectionKind::Services => ("Services", "#services"),
                SectionKind::About => ("About", "#about"),
                SectionKind::Gallery => ("Our Work", "#gallery"),
                SectionKind::Pricing => ("Pricing", "#pricing"),
                SectionKind::Reviews => ("Reviews", "#reviews"),
                SectionKind::Faq => ("FAQ", "#faq"),
                SectionKind::Contact => ("Contact", "#contact"),
                _ => return None,
            };
            Some(NavLink {
                label: label.into(),
                href: href.into(),
                secondary: false,
            })
        })
        .collect()
}

/// Renders the base HTML document structure
fn base_document(
    lang: &str,
    title: &str,
    description: Option<&str>,
    css_href: &str,
    js_href: &str,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if let Some(description) = description {
                    meta name="description" content=(description);
                }
                link rel="stylesheet" href=(css_href);
                noscript {
                    style { (PreEscaped(".fade-in { opacity: 1; transform: none; }")) }
                }
                script src=(js_href) defer {}
            }
            body {
                (content)
            }
        }
    }
}
