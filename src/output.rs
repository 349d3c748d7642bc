//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Acme Plumbing
//!     Phone: (555) 987-6543
//!     Email: hello@acmeplumbing.example
//!
//! Sections
//! 001 hero
//! 002 services (defaults)
//! 003 cta-banner
//!
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! ## Build
//!
//! ```text
//! Sections
//! 001 hero
//! 002 services
//!
//! Assets
//!     site-1a2b3c4d.css
//!     site-5e6f7a8b.js
//!     assets/favicon.ico
//!
//! Generated index.html with 2 sections, 1 asset → dist
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::generate::BuildReport;
use crate::site::{SectionKind, Site};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn section_lines(kinds: &[SectionKind], site: Option<&Site>) -> Vec<String> {
    kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let defaults = site.is_some_and(|s| !s.is_customized(*kind));
            let marker = if defaults { " (defaults)" } else { "" };
            format!("{} {}{}", format_index(i + 1), kind, marker)
        })
        .collect()
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format `check` output: business identity, section plan, and which
/// optional content files were found.
///
/// `has_config` and `has_assets` describe the source directory; the caller
/// does the filesystem lookups.
pub fn format_check_output(site: &Site, has_config: bool, has_assets: bool) -> Vec<String> {
    let mut lines = vec![site.business.name.clone()];
    let business = &site.business;
    for (label, value) in [
        ("Phone", &business.phone),
        ("Email", &business.email),
        ("Address", &business.address),
    ] {
        if let Some(value) = value {
            lines.push(format!("    {label}: {value}"));
        }
    }

    lines.push(String::new());
    lines.push("Sections".to_string());
    lines.extend(section_lines(site.section_order(), Some(site)));

    lines.push(String::new());
    lines.push("Config".to_string());
    if has_config {
        lines.push("    config.toml".to_string());
    } else {
        lines.push("    (stock defaults)".to_string());
    }
    if has_assets {
        lines.push("    assets/".to_string());
    }
    lines
}

/// Print check output to stdout.
pub fn print_check_output(site: &Site, source_root: &Path) {
    let has_config = source_root.join("config.toml").exists();
    let has_assets = source_root.join("assets").is_dir();
    for line in format_check_output(site, has_config, has_assets) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format build output: rendered sections, written assets, and a summary.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];
    lines.extend(section_lines(&report.sections, None));

    lines.push(String::new());
    lines.push("Assets".to_string());
    lines.push(format!("    {}", report.stylesheet));
    lines.push(format!("    {}", report.script));
    for asset in &report.assets {
        lines.push(format!("    assets/{}", asset.display()));
    }

    lines.push(String::new());
    let mut summary = format!(
        "Generated index.html with {}",
        plural(report.sections.len(), "section")
    );
    if !report.assets.is_empty() {
        summary.push_str(&format!(", {}", plural(report.assets.len(), "asset")));
    }
    summary.push_str(&format!(" → {}", report.output_dir.display()));
    lines.push(summary);
    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::parse_site;
    use std::path::PathBuf;

    fn report() -> BuildReport {
        BuildReport {
            output_dir: PathBuf::from("dist"),
            business: "Acme".into(),
            sections: vec![SectionKind::Hero, SectionKind::Faq],
            stylesheet: "site-1a2b3c4d.css".into(),
            script: "site-5e6f7a8b.js".into(),
            assets: vec![PathBuf::from("favicon.ico")],
        }
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn build_output_lists_sections_and_assets() {
        let lines = format_build_output(&report());
        assert_eq!(
            lines,
            vec![
                "Sections",
                "001 hero",
                "002 faq",
                "",
                "Assets",
                "    site-1a2b3c4d.css",
                "    site-5e6f7a8b.js",
                "    assets/favicon.ico",
                "",
                "Generated index.html with 2 sections, 1 asset → dist",
            ]
        );
    }

    #[test]
    fn build_summary_without_assets() {
        let mut r = report();
        r.assets.clear();
        r.sections.truncate(1);
        let lines = format_build_output(&r);
        assert_eq!(
            lines.last().unwrap(),
            "Generated index.html with 1 section → dist"
        );
    }

    #[test]
    fn check_output_marks_default_sections() {
        let site = parse_site(
            r#"
sections = ["hero", "faq"]

[business]
name = "Acme"
phone = "555"

[hero]
headline = "Hi"
"#,
        )
        .unwrap();
        let lines = format_check_output(&site, false, false);
        assert_eq!(
            lines,
            vec![
                "Acme",
                "    Phone: 555",
                "",
                "Sections",
                "001 hero",
                "002 faq (defaults)",
                "",
                "Config",
                "    (stock defaults)",
            ]
        );
    }

    #[test]
    fn check_output_lists_config_and_assets() {
        let site = parse_site("[business]\nname = \"Acme\"\n").unwrap();
        let lines = format_check_output(&site, true, true);
        let tail: Vec<&str> = lines.iter().rev().take(2).map(String::as_str).collect();
        assert_eq!(tail, vec!["    assets/", "    config.toml"]);
        assert_eq!(
            lines.iter().filter(|l| l.ends_with("(defaults)")).count(),
            SectionKind::DEFAULT_ORDER.len()
        );
    }
}
