//! # Shopfront
//!
//! A static page generator for small-business marketing sites. One TOML file
//! describes the business and its page; the output is a single HTML page
//! with a stylesheet and a small script.
//!
//! # Architecture
//!
//! ```text
//! content/site.toml    ─┐
//! content/config.toml  ─┼─ check ──▶ Site + SiteConfig ── render ──▶ dist/index.html
//! content/assets/      ─┘                                            dist/site-<hash>.css
//!                                                                    dist/site-<hash>.js
//!                                                                    dist/assets/
//! ```
//!
//! Every section is a pure render function of the shared
//! [`types::Business`] record, its own props struct and, for interactive
//! sections, an explicit state value. The shipped JavaScript drives the
//! same state machines in the browser.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | `site.toml` model: section order, per-section props, validation |
//! | [`config`] | `config.toml` loading, merging over stock defaults, theme CSS |
//! | [`generate`] | Renders the page, fingerprints and writes assets |
//! | [`components`] | Button, icons, navbar, section wrapper, star rating |
//! | [`sections`] | Hero, About, Services, ... Footer |
//! | [`types`] | Display records shared by the sections |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Design Decisions
//!
//! ## Defaults Everywhere
//!
//! A site with only a business name renders a complete page. Every section
//! falls back to built-in placeholder copy, some of it interpolating the
//! business name, so owners can replace content one section at a time.
//!
//! ## Closed Icon Set
//!
//! Content names icons from the [`components::icons::Icon`] enum rather than
//! embedding SVG, so `site.toml` never carries raw markup. Markdown fields
//! escape inline HTML for the same reason.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a build error and all interpolation is auto-escaped.

pub mod components;
pub mod config;
pub mod generate;
pub mod logging;
pub mod output;
pub mod sections;
pub mod site;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
