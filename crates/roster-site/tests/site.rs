//! Action dispatch across the drawer, counters, and directory.

use roster_directory::MemberBuilder;
use roster_ingest::TextSource;
use roster_site::drawer::OPEN_CLASS;
use roster_site::{CounterBoard, DomEffect, DrawerElements, Effect, Element, Site, UiAction};

const SHEET: &str = "Nom,Rôle,Ville\nAwa Koné,Présidente,Abidjan\nYao Koffi,Trésorier,Bouaké\n";

fn site() -> Site {
    let mut site = Site::new(
        DrawerElements::complete(),
        CounterBoard::from_attributes(&[Some("1250"), Some("12")], false),
    )
    .with_directory(MemberBuilder::new());
    site.directory_mut()
        .expect("directory page")
        .load(&TextSource::new(SHEET));
    site
}

#[test]
fn menu_actions_toggle_the_drawer() {
    let mut site = site();
    let effects = site.handle(UiAction::OpenMenu);
    assert!(effects.contains(&Effect::Dom(DomEffect::AddClass {
        target: Element::Body,
        class: OPEN_CLASS,
    })));
    assert!(site.drawer().is_open());
    site.handle(UiAction::OverlayClicked);
    assert!(!site.drawer().is_open());
}

#[test]
fn escape_closes_modal_before_drawer() {
    let mut site = site();
    site.handle(UiAction::OpenMenu);
    assert_eq!(
        site.handle(UiAction::OpenMember("m1".to_string())),
        vec![Effect::ShowModal]
    );

    assert_eq!(site.handle(UiAction::Escape), vec![Effect::HideModal]);
    assert!(site.drawer().is_open());

    let effects = site.handle(UiAction::Escape);
    assert_eq!(effects.last(), Some(&Effect::Dom(DomEffect::Focus(Element::MenuButton))));
    assert!(!site.drawer().is_open());
    assert!(site.handle(UiAction::Escape).is_empty());
}

#[test]
fn unknown_member_does_not_open_modal() {
    let mut site = site();
    assert!(site.handle(UiAction::OpenMember("m42".to_string())).is_empty());
    assert!(site.directory().unwrap().modal().is_none());
}

#[test]
fn filter_actions_rerender() {
    let mut site = site();
    assert_eq!(
        site.handle(UiAction::SearchInput("bouaké".to_string())),
        vec![Effect::RenderDirectory]
    );
    site.handle(UiAction::RoleChanged("Trésorier".to_string()));
    let page = site.directory().unwrap();
    assert_eq!(page.cards().len(), 1);
    assert_eq!(page.status_text(), "1 membre sur 2");
}

#[test]
fn counters_animate_then_stop_requesting_frames() {
    let mut site = site();
    assert!(site.handle(UiAction::AnimationFrame { now_ms: 0.0 }).is_empty());
    assert_eq!(
        site.handle(UiAction::CounterVisible {
            index: 0,
            ratio: 0.5,
            now_ms: 0.0,
        }),
        vec![Effect::RequestFrame]
    );

    let mid = site.handle(UiAction::AnimationFrame { now_ms: 450.0 });
    assert_eq!(mid.last(), Some(&Effect::RequestFrame));

    let end = site.handle(UiAction::AnimationFrame { now_ms: 900.0 });
    assert_eq!(
        end,
        vec![Effect::CounterText {
            index: 0,
            text: "1\u{202f}250".to_string(),
        }]
    );
}

#[test]
fn pages_without_directory_ignore_directory_actions() {
    let mut site = Site::new(DrawerElements::missing(), CounterBoard::default());
    assert!(site.handle(UiAction::SearchInput("x".to_string())).is_empty());
    assert!(site.handle(UiAction::OpenMenu).is_empty());
    assert!(site.handle(UiAction::Escape).is_empty());
}
