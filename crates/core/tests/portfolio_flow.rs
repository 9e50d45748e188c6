use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{MenuState, Portfolio, Section, SectionError, SiteConfig};

const FRAME: f64 = 1.0 / 60.0;

fn run_until_settled(site: &mut Portfolio) {
    let mut frames = 0;
    while site.is_animating() {
        site.frame(FRAME);
        frames += 1;
        assert!(frames < 1_000, "scroll animation never settled");
    }
}

#[test]
fn scroll_then_jump_scenario() {
    let mut site = Portfolio::new(SiteConfig::default());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    site.subscribe(move |change| sink.borrow_mut().push(change.current.value()));

    assert!(site.observe(0.0).is_none());
    assert_eq!(site.section().value(), 0);

    site.observe(0.26);
    assert_eq!(site.section().value(), 1);

    site.observe(0.1);
    assert_eq!(site.section().value(), 0);

    site.toggle_menu();
    site.jump_to(3).unwrap();
    assert_eq!(site.section().value(), 0, "jump is asynchronous");
    run_until_settled(&mut site);

    assert_eq!(site.active_section(), Some(Section::Contact));
    assert_eq!(site.menu_state(), MenuState::Closed);
    assert_eq!(*seen.borrow(), vec![1, 0, 1, 2, 3]);
}

#[test]
fn crossing_a_boundary_closes_the_menu() {
    let mut site = Portfolio::default();
    site.toggle_menu();
    assert!(site.menu_open());

    site.observe(0.3);

    assert_eq!(site.section().value(), 1);
    assert!(!site.menu_open());
}

#[test]
fn menu_selection_closes_before_the_jump_lands() {
    let mut site = Portfolio::default();
    site.toggle_menu();

    let target = site.select_section(2).unwrap();

    assert_eq!(target.value(), 2);
    assert!(!site.menu_open());
    assert_eq!(site.section().value(), 0);

    site.toggle_menu();
    run_until_settled(&mut site);
    assert_eq!(site.section().value(), 2);
    assert!(!site.menu_open(), "section change closes a reopened menu");
}

#[test]
fn out_of_range_requests_are_rejected() {
    let mut site = Portfolio::default();
    site.observe(0.55);

    for bad in [-1, 4] {
        assert_eq!(
            site.jump_to(bad),
            Err(SectionError::InvalidSection { index: bad, pages: 4 })
        );
        assert!(site.set_section(bad).is_err());
        assert!(site.select_section(bad).is_err());
    }

    assert_eq!(site.section().value(), 2);
    assert!(!site.is_animating());
}

#[test]
fn subscribers_see_the_stored_value() {
    let mut site = Portfolio::default();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let id = site.subscribe(move |change| {
        sink.borrow_mut()
            .push((change.previous.value(), change.current.value()));
    });

    site.set_section(2).unwrap();
    site.set_section(2).unwrap();
    assert!(site.unsubscribe(id));
    site.set_section(1).unwrap();

    assert_eq!(*log.borrow(), vec![(0, 2)]);
}

#[test]
fn rapid_jumps_follow_the_last_request() {
    let mut site = Portfolio::default();
    site.jump_to(3).unwrap();
    site.frame(FRAME);
    site.jump_to(0).unwrap();
    site.frame(FRAME);
    site.jump_to(2).unwrap();
    run_until_settled(&mut site);

    assert_eq!(site.section().value(), 2);
    assert!(site.scroll().pending_jump().is_none());
}

#[test]
fn jump_starts_from_observed_progress() {
    let mut site = Portfolio::default();
    site.observe(0.6);
    assert_eq!(site.progress(), 0.6);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    site.subscribe(move |change| sink.borrow_mut().push(change.current.value()));
    site.toggle_menu();

    site.jump_to(3).unwrap();
    run_until_settled(&mut site);

    assert_eq!(*seen.borrow(), vec![3]);
    assert_eq!(site.menu_state(), MenuState::Closed);
}

#[test]
fn wheel_continues_from_observed_progress() {
    let mut site = Portfolio::default();
    site.observe(0.6);

    site.wheel(10.0);
    run_until_settled(&mut site);

    assert_eq!(site.active_section(), Some(Section::Projects));
    assert!(site.progress() > 0.6);
}
