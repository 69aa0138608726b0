//! End-to-end flow: load data, measure, interact, render.

use appton_core::{Command, Event, Key, MouseButton, Point, Size, Widget};
use appton_data::Catalog;
use appton_site::{Site, SiteMessage};

const SITE: &str = r#"{
    "name": "Appton LLC",
    "tagline": "We create apps that make life simpler, smarter, and more playful",
    "logo": "logo_appton.png",
    "contactEmail": "contact@appton.io",
    "address": {
        "street": "701 Tillery Street Unit 12 Suite 3028",
        "locality": "Austin",
        "region": "TX",
        "postalCode": "78702",
        "country": "US"
    },
    "social": ["https://linkedin.com/company/appton"]
}"#;

const APPS: &str = r#"[
    {"name": "Lumen", "subtitle": "Light journal", "description": "Mood tracking with light.",
     "image": "apps/lumen.png", "link": "https://appton.io/lumen",
     "appStoreLink": "https://apps.apple.com/app/id1",
     "playStoreLink": "https://play.google.com/1"},
    {"name": "Drift", "subtitle": "Sleep sounds", "description": "Generative soundscapes.",
     "image": "apps/drift.png", "link": "https://appton.io/drift",
     "appStoreLink": "https://apps.apple.com/app/id2"},
    {"name": "Pantry", "subtitle": "Groceries", "description": "Less food waste.",
     "image": "apps/pantry.png", "link": "https://appton.io/pantry",
     "playStoreLink": "https://play.google.com/3"},
    {"name": "Tidal", "subtitle": "Budgets", "description": "Calm finance.",
     "image": "apps/tidal.png", "link": "https://appton.io/tidal",
     "published": false}
]"#;

const MEMBERS: &str = r#"[
    {"name": "Maya Lindholm", "title": "Founder", "image": "team/maya.png",
     "link": "https://linkedin.com/in/maya-lindholm"},
    {"name": "Tomas Rivera", "title": "Engineering", "image": "team/tomas.png",
     "link": "https://linkedin.com/in/tomas-rivera"}
]"#;

fn site() -> Site {
    Site::new(Catalog::from_json_strs(SITE, APPS, MEMBERS).expect("valid data"))
}

fn measured_site(width: f32, height: f32) -> Site {
    let mut site = site();
    site.handle(&Event::Resize { width, height });
    site
}

#[test]
fn first_frame_waits_for_measurement() {
    let site = site();
    assert!(site.render().is_empty());
    assert!(site.snapshot().is_err());
}

#[test]
fn full_page_renders_after_measurement() {
    let site = measured_site(1280.0, 720.0);
    let frame = site.render();

    assert!(frame.is_finite());
    assert_eq!(frame.viewport, Size::new(1280.0, 720.0));

    // Every section contributes: navbar links, hero tagline, showcase
    // detail, team roster, footer contact line.
    assert_eq!(frame.count_text_containing("OUR APPS"), 1);
    assert_eq!(frame.count_text_containing("simpler, smarter"), 1);
    assert_eq!(frame.count_text_containing("Light journal"), 1);
    assert_eq!(frame.count_text_containing("Maya Lindholm"), 1);
    assert_eq!(frame.count_text_containing("contact@appton.io"), 1);
}

#[test]
fn orbit_tier_follows_resizes() {
    let mut site = measured_site(350.0, 700.0);
    assert_eq!(
        site.state().breakpoint(),
        Some(appton_layout::Breakpoint::Small)
    );

    site.handle(&Event::Resize {
        width: 1024.0,
        height: 700.0,
    });
    assert_eq!(
        site.state().breakpoint(),
        Some(appton_layout::Breakpoint::Large)
    );

    // Synchronous recomputation: the next frame already uses the new tier.
    let frame = site.render();
    assert!(frame.is_finite());
}

#[test]
fn selecting_an_app_updates_model_page_and_frame() {
    let mut site = measured_site(1000.0, 800.0);

    let cmd = site.apply([SiteMessage::AppSelected { index: 2 }]);
    assert!(cmd.is_none());
    assert_eq!(site.state().selected_app(), 2);
    assert_eq!(site.page().showcase().selected(), 2);

    let frame = site.render();
    assert_eq!(frame.count_text_containing("Pantry"), 1);
    assert_eq!(frame.count_text_containing("Light journal"), 0);
}

#[test]
fn reselecting_the_active_app_changes_nothing() {
    let mut site = measured_site(1000.0, 800.0);
    site.apply([SiteMessage::AppSelected { index: 1 }]);
    let before = site.render();

    let cmd = site.apply([SiteMessage::AppSelected { index: 1 }]);
    assert!(cmd.is_none());
    assert_eq!(site.render(), before);
}

#[test]
fn unpublished_app_shows_coming_soon_in_context() {
    let mut site = measured_site(1000.0, 800.0);
    site.apply([SiteMessage::AppSelected { index: 3 }]);

    let frame = site.render();
    assert_eq!(frame.count_text_containing("Coming soon"), 1);
    assert_eq!(frame.count_text_containing("App Store"), 0);
}

#[test]
fn keyboard_navigation_wraps_and_emits_nothing_external() {
    let mut site = measured_site(1000.0, 800.0);

    for _ in 0..4 {
        let cmd = site.handle(&Event::KeyDown {
            key: Key::ArrowRight,
        });
        assert!(cmd.is_none());
    }
    // Four apps: four steps wrap back to the start.
    assert_eq!(site.state().selected_app(), 0);
}

#[test]
fn logo_click_opens_the_app_link() {
    let mut site = measured_site(1000.0, 800.0);

    // First orbit item anchors at (90%, 45%) of the orbit section, which
    // spans y = 64..484 after the navbar.
    let orbit_bounds = site.page().orbit().bounds();
    let target = Point::new(
        orbit_bounds.x + 0.90 * orbit_bounds.width,
        orbit_bounds.y + 0.45 * orbit_bounds.height,
    );
    let cmd = site.handle(&Event::MouseDown {
        position: target,
        button: MouseButton::Left,
    });
    assert_eq!(
        cmd,
        Command::OpenUrl {
            url: "https://appton.io/lumen".to_string()
        }
    );
}

#[test]
fn snapshot_contains_every_section() {
    let mut site = measured_site(1280.0, 720.0);
    site.tick(0.5);

    let svg = site.snapshot().expect("measured site must snapshot");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("OUR APPS"));
    assert!(svg.contains("apps/lumen.png"));
    assert!(svg.contains("Maya Lindholm"));
    assert!(svg.contains("\u{a9} Appton LLC"));
}

#[test]
fn animation_ticks_never_break_the_frame() {
    let mut site = measured_site(800.0, 600.0);
    for _ in 0..100 {
        site.tick(0.016);
        let frame = site.render();
        assert!(frame.is_finite());
        assert!(!frame.is_empty());
    }
}
