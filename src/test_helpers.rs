//! Shared test utilities for the shopfront test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let html = render_page(&sample_site(), ...).into_string();
//! assert!(html.contains(&escaped("Acme Plumbing & Heating")));
//!
//! let tmp = write_content(SAMPLE_SITE_TOML, Some("[build]\nlang = \"fr\"\n"));
//! let report = generate(tmp.path(), &tmp.path().join("dist")).unwrap();
//! ```

use crate::site::{Site, parse_site};
use std::fs;
use tempfile::TempDir;

// =========================================================================
// Markup
// =========================================================================

/// `text` as maud writes it into HTML, so assertions can look for copy
/// containing `&`, quotes or angle brackets.
pub fn escaped(text: &str) -> String {
    maud::html! { (text) }.into_string()
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Smallest useful `site.toml`. The ampersand in the name exercises
/// escaping wherever the name is interpolated.
pub const SAMPLE_SITE_TOML: &str = r#"
[business]
name = "Acme Plumbing & Heating"
phone = "(555) 987-6543"
email = "hello@acme.example"
tagline = "Warm homes, dry basements."
"#;

pub fn sample_site() -> Site {
    parse_site(SAMPLE_SITE_TOML).unwrap()
}

/// A temp content directory holding `site.toml` and, when given,
/// `config.toml`.
pub fn write_content(site_toml: &str, config_toml: Option<&str>) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("site.toml"), site_toml).unwrap();
    if let Some(config) = config_toml {
        fs::write(tmp.path().join("config.toml"), config).unwrap();
    }
    tmp
}

#[test]
fn sample_site_is_valid() {
    let site = sample_site();
    assert_eq!(site.business.name, "Acme Plumbing & Heating");
    assert!(site.validate().is_ok());
}

#[test]
fn escaped_matches_maud() {
    assert_eq!(escaped("a & <b>"), "a &amp; &lt;b&gt;");
    assert_eq!(escaped("plain"), "plain");
}
