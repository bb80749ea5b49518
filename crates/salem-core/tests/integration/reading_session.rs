//! End-to-end reading sessions driven through intent dispatch.

use crate::common::Session;
use salem_core::render::render_state;
use salem_core::{CultureBanner, Intent, Page, RecipeId, Section, ViewState};

#[test]
fn test_landing_on_cover_then_opening_recipe() {
    let mut session = Session::new();

    let state = session.run([Intent::Navigate(String::new())]);
    assert_eq!(state.view, Some(ViewState::Cover));

    let state = session.run([
        Intent::ToggleNav,
        Intent::FilterNav("turkish".into()),
        Intent::SelectRecipe(RecipeId::new(3)),
    ]);
    assert_eq!(state.view, Some(ViewState::RecipeDetail(RecipeId::new(3))));
    assert_eq!(state.servings, 12);
    assert!(!state.nav_open);
}

#[test]
fn test_scaling_session_renders_scaled_amounts() {
    let mut session = Session::new();
    session.run([
        Intent::Navigate("1".into()),
        Intent::ChangeServings(1),
    ]);

    // Shakshuka is authored for 2; at 3 servings 4 eggs become 6
    let text = render_state(&session.state, &session.book).unwrap();
    assert!(text.contains("Servings: 3"));
    assert!(text.contains("• 6 eggs"));
    assert!(text.contains("• ¾ tsp ground cumin"));
    assert!(text.contains("• 2¼ tbsp olive oil"));
}

#[test]
fn test_hand_edited_fragment_keeps_view() {
    let mut session = Session::new();
    session.run([Intent::Navigate("2".into())]);
    let before = session.state.clone();

    session.run([Intent::Navigate("42".into()), Intent::Navigate("dessert".into())]);
    assert_eq!(session.state, before);
}

#[test]
fn test_anchor_navigation_and_sections() {
    let mut session = Session::new();
    session.run([
        Intent::GoToPage(Page::Recipes),
        Intent::ToggleSection(Section::Instructions),
        Intent::Navigate("instructions-section".into()),
    ]);

    assert_eq!(
        session.state.view,
        Some(ViewState::SectionAnchor("instructions-section".into()))
    );
    let text = render_state(&session.state, &session.book).unwrap();
    assert!(text.contains("Blend the base"));
}

#[test]
fn test_culture_banner_round_trip() {
    let mut session = Session::new();
    session.run([
        Intent::GoToPage(Page::Recipes),
        Intent::CultureRequested,
        Intent::CultureLoaded("Jollof is a celebration dish.".into()),
    ]);
    assert_eq!(
        session.state.culture,
        CultureBanner::Shown("Jollof is a celebration dish.".into())
    );

    let text = render_state(&session.state, &session.book).unwrap();
    assert!(text.contains("🌍 Jollof is a celebration dish."));
}
