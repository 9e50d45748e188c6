use folio_core::{MenuState, SiteConfig};

use super::test_harness::setup_view_harness;

#[tokio::test(flavor = "current_thread")]
async fn portfolio_smoke_renders_every_section() {
    let harness = setup_view_harness(SiteConfig::default());
    let html = harness.render();

    for expected in [
        "Tyson Skakun",
        "Skills",
        "Languages",
        "Projects",
        "Contact me",
        "Front-end",
        "width: 90%",
        "Submit",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn stage_smoke_uses_scene_config() {
    let mut config = SiteConfig::default();
    config.scene.background = "#101010".to_string();
    let harness = setup_view_harness(config);
    let html = harness.render();

    assert!(html.contains("background: #101010"), "missing background in {html}");
    assert!(html.contains("data-section=\"0\""), "missing section marker in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn menu_smoke_toggles_open_and_closed() {
    let mut harness = setup_view_harness(SiteConfig::default());
    assert!(!harness.render().contains("menu menu-open"));

    harness.update(|site| site.toggle_menu());
    let html = harness.render();
    assert!(html.contains("menu menu-open"), "menu not open in {html}");
    assert!(html.contains("aria-expanded=\"true\""), "toggle not expanded in {html}");

    harness.update(|site| site.toggle_menu());
    assert!(!harness.render().contains("menu menu-open"));
}

#[tokio::test(flavor = "current_thread")]
async fn section_change_closes_menu_and_moves_highlight() {
    let mut harness = setup_view_harness(SiteConfig::default());
    harness.update(|site| site.toggle_menu());

    harness.update(|site| {
        site.observe(0.3);
    });

    let html = harness.render();
    assert!(!html.contains("menu menu-open"), "menu still open in {html}");
    assert!(html.contains("data-section=\"1\""), "stage not on skills in {html}");
    assert!(html.contains("translateY(-120.00vh)"), "overlay not scrolled in {html}");
    let highlighted = html.find("menu-item active").expect("an active menu item");
    let after = &html[highlighted..];
    assert!(
        matches!(
            (after.find("Skills"), after.find("Projects")),
            (Some(skills), Some(projects)) if skills < projects
        ),
        "skills not highlighted in {html}"
    );
    assert_eq!(harness.read(|site| site.menu_state()), MenuState::Closed);
}

#[tokio::test(flavor = "current_thread")]
async fn menu_selection_closes_and_starts_jump() {
    let mut harness = setup_view_harness(SiteConfig::default());
    harness.update(|site| site.toggle_menu());

    harness.update(|site| {
        site.select_section(3).expect("valid section");
    });

    assert!(!harness.render().contains("menu menu-open"));
    let (animating, section) = harness.read(|site| (site.is_animating(), site.section().value()));
    assert!(animating);
    assert_eq!(section, 0);

    harness.update(|site| {
        while site.is_animating() {
            site.frame(1.0 / 60.0);
        }
    });
    let html = harness.render();
    assert!(html.contains("data-section=\"3\""), "stage not on contact in {html}");
    assert!(html.contains("translateY(-300.00vh)"), "overlay not scrolled in {html}");
}
