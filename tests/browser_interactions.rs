//! Browser tests for the page interactions driven by `site.js`.
//!
//! Run with: `cargo test --test browser_interactions -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use serde_json::Value;
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};
use std::thread::sleep;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/browser/generated")
}

fn ensure_fixture_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let bin = env!("CARGO_BIN_EXE_shopfront");
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

        let output_dir = generated_dir();
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir).expect("failed to clean output dir");
        }

        let status = Command::new(bin)
            .args([
                "build",
                "--source",
                root.join("fixtures/browser-site").to_str().unwrap(),
                "--output",
                output_dir.to_str().unwrap(),
            ])
            .status()
            .expect("failed to run shopfront");
        assert!(status.success(), "fixture generation failed");
    });
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn load_index() -> Arc<Tab> {
    ensure_fixture_built();
    let tab = browser().new_tab().unwrap();
    let file = generated_dir().join("index.html");
    assert!(file.exists(), "missing: {}", file.display());

    tab.navigate_to(&format!("file://{}", file.display()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    tab
}

fn eval(tab: &Tab, js: &str) -> Value {
    tab.evaluate(js, false)
        .expect("failed to evaluate JS")
        .value
        .unwrap_or(Value::Null)
}

fn click(tab: &Tab, selector: &str) {
    let js = format!("document.querySelector({selector:?}).click()");
    eval(tab, &js);
}

// ---------------------------------------------------------------------------
// Navbar
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn menu_toggle_opens_and_link_closes() {
    let tab = load_index();
    click(&tab, "[data-menu-toggle]");
    assert_eq!(
        eval(&tab, "document.querySelector('[data-navbar]').classList.contains('is-open')"),
        Value::Bool(true)
    );
    assert_eq!(
        eval(&tab, "document.querySelector('[data-menu-toggle]').getAttribute('aria-expanded')"),
        Value::from("true")
    );

    click(&tab, ".navbar-links a");
    assert_eq!(
        eval(&tab, "document.querySelector('[data-navbar]').classList.contains('is-open')"),
        Value::Bool(false)
    );
}

// ---------------------------------------------------------------------------
// FAQ
// ---------------------------------------------------------------------------

const OPEN_FAQS: &str =
    "Array.from(document.querySelectorAll('[data-faq-item].is-open')).map(i => i.dataset.faqItem)";

#[test]
#[ignore]
fn accordion_keeps_at_most_one_open() {
    let tab = load_index();
    assert_eq!(eval(&tab, OPEN_FAQS), serde_json::json!([]));

    click(&tab, "[data-faq-item='licensed'] .faq-question");
    assert_eq!(eval(&tab, OPEN_FAQS), serde_json::json!(["licensed"]));

    click(&tab, "[data-faq-item='hours'] .faq-question");
    assert_eq!(eval(&tab, OPEN_FAQS), serde_json::json!(["hours"]));

    click(&tab, "[data-faq-item='hours'] .faq-question");
    assert_eq!(eval(&tab, OPEN_FAQS), serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

const VISIBLE_CARDS: &str =
    "Array.from(document.querySelectorAll('[data-gallery-item]')).filter(c => !c.hidden).length";

#[test]
#[ignore]
fn gallery_filter_hides_other_categories() {
    let tab = load_index();
    assert_eq!(eval(&tab, VISIBLE_CARDS), Value::from(3));

    click(&tab, "[data-filter='Commercial']");
    assert_eq!(eval(&tab, VISIBLE_CARDS), Value::from(1));
    // The only shown card takes the first placeholder colour
    assert_eq!(
        eval(
            &tab,
            "document.querySelector('[data-gallery-item]:not([hidden]) [data-placeholder]').classList.contains('placeholder--blue')"
        ),
        Value::Bool(true)
    );

    click(&tab, "[data-filter='']");
    assert_eq!(eval(&tab, VISIBLE_CARDS), Value::from(3));
}

#[test]
#[ignore]
fn lightbox_opens_and_closes_on_escape() {
    let tab = load_index();
    let hidden = "document.querySelector('[data-lightbox]').hidden";
    assert_eq!(eval(&tab, hidden), Value::Bool(true));

    click(&tab, "[data-gallery-item]");
    assert_eq!(eval(&tab, hidden), Value::Bool(false));
    assert_eq!(
        eval(&tab, "document.querySelector('.lightbox-title').textContent"),
        Value::from("Panel upgrade")
    );

    eval(
        &tab,
        "document.dispatchEvent(new KeyboardEvent('keydown', { key: 'Escape' }))",
    );
    assert_eq!(eval(&tab, hidden), Value::Bool(true));
}

#[test]
#[ignore]
fn lightbox_shows_before_and_after() {
    let tab = load_index();
    click(&tab, "[data-gallery-item][data-before-src]");
    assert_eq!(
        eval(&tab, "document.querySelectorAll('.lightbox-compare figure').length"),
        Value::from(2)
    );
}

#[test]
#[ignore]
fn lightbox_placeholder_carries_icon() {
    let tab = load_index();
    eval(
        &tab,
        "document.querySelector('[data-gallery-item]').dataset.src = ''",
    );
    click(&tab, "[data-gallery-item]");
    assert_eq!(
        eval(&tab, "!!document.querySelector('[data-lightbox-frame] .lightbox-placeholder svg.placeholder-icon')"),
        Value::Bool(true)
    );
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn long_review_expands_and_collapses() {
    let tab = load_index();
    click(&tab, "[data-review-toggle]");
    assert_eq!(
        eval(&tab, "document.querySelector('[data-review]').classList.contains('is-expanded')"),
        Value::Bool(true)
    );
    assert_eq!(
        eval(&tab, "document.querySelector('[data-review-toggle]').textContent"),
        Value::from("Show less")
    );

    click(&tab, "[data-review-toggle]");
    assert_eq!(
        eval(&tab, "document.querySelector('[data-review-toggle]').textContent"),
        Value::from("Read more")
    );
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn contact_form_shows_sending_then_success() {
    let tab = load_index();
    eval(
        &tab,
        r#"(function() {
            const form = document.querySelector('[data-contact-form]');
            form.elements.name.value = 'Jo';
            form.elements.email.value = 'jo@example.com';
            form.elements.message.value = 'Outlet sparks';
            form.dispatchEvent(new Event('submit', { cancelable: true }));
        })()"#,
    );
    assert_eq!(
        eval(&tab, "document.querySelector('[data-form-actions] button').disabled"),
        Value::Bool(true)
    );

    sleep(Duration::from_millis(1500));
    assert_eq!(
        eval(&tab, "!!document.querySelector('[data-form-actions] .form-success')"),
        Value::Bool(true)
    );
    assert_eq!(
        eval(&tab, "document.querySelector('[data-contact-form]').elements.name.value"),
        Value::from("")
    );
}

// ---------------------------------------------------------------------------
// Fade-in
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn sections_fade_in_when_scrolled_into_view() {
    let tab = load_index();
    let contact = "document.querySelector('#contact [data-fade-in]')";
    assert_eq!(
        eval(&tab, &format!("{contact}.classList.contains('is-visible')")),
        Value::Bool(false)
    );

    eval(&tab, &format!("{contact}.scrollIntoView()"));
    sleep(Duration::from_millis(500));
    assert_eq!(
        eval(&tab, &format!("{contact}.classList.contains('is-visible')")),
        Value::Bool(true)
    );
}
