//! Application state and intent dispatch.
//!
//! The front end owns no mutable globals. It holds an [`AppState`] value,
//! turns each user event into an [`Intent`], and replaces its state with the
//! result of [`dispatch`]. Handlers are plain functions from the current
//! state to the next one.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::dataset::RecipeBook;
use crate::index::{CategoryGroup, build_index};
use crate::route::{RouteOutcome, resolve};
use crate::types::{Page, Recipe, RecipeId, Section, ViewState};

/// Serving count used before any recipe has been opened.
pub const DEFAULT_SERVINGS: u32 = 4;

/// State of the cultural-fact banner for the current recipe.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "text")]
pub enum CultureBanner {
    /// Request button shown, no fact yet.
    #[default]
    Hidden,
    /// A request is in flight.
    Loading,
    /// The fact (or its fallback) is displayed.
    Shown(String),
}

/// Everything the views need to know besides the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppState {
    /// Active view, `None` until the first navigation
    pub view: Option<ViewState>,
    /// Recipe shown on the recipes page
    pub current_recipe: Option<RecipeId>,
    /// Serving count the ingredient amounts are scaled to, at least 1
    pub servings: u32,
    /// Whether the navigation panel is open
    pub nav_open: bool,
    /// Search text applied to the navigation index
    pub nav_filter: String,
    /// Sections the reader has collapsed
    pub collapsed: BTreeSet<Section>,
    /// Cultural-fact banner
    pub culture: CultureBanner,
}

impl AppState {
    /// The state before any event: first recipe selected, nothing shown.
    pub fn initial(book: &RecipeBook) -> Self {
        let first = book.first();
        Self {
            view: None,
            current_recipe: first.map(|r| r.id),
            servings: first.map_or(DEFAULT_SERVINGS, |r| r.base_servings),
            nav_open: false,
            nav_filter: String::new(),
            collapsed: BTreeSet::new(),
            culture: CultureBanner::Hidden,
        }
    }

    /// The recipe on the recipes page, if any.
    pub fn recipe<'a>(&self, book: &'a RecipeBook) -> Option<&'a Recipe> {
        self.current_recipe.and_then(|id| book.get(id))
    }

    /// Whether a view is already showing.
    pub fn has_active_view(&self) -> bool {
        self.view.is_some()
    }

    /// Whether `section` is expanded.
    pub fn is_open(&self, section: Section) -> bool {
        !self.collapsed.contains(&section)
    }

    /// The navigation index for the current filter and recipe.
    pub fn index(&self, book: &RecipeBook) -> Vec<CategoryGroup> {
        build_index(book.recipes(), &self.nav_filter, self.current_recipe)
    }
}

/// A user intent, decoupled from whatever event produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A book tab was clicked.
    GoToPage(Page),
    /// A recipe was picked from the navigation panel.
    SelectRecipe(RecipeId),
    /// The servings control was pressed.
    ChangeServings(i32),
    /// The navigation panel button was pressed.
    ToggleNav,
    /// The navigation search text changed.
    FilterNav(String),
    /// A section header was clicked.
    ToggleSection(Section),
    /// The URL fragment changed.
    Navigate(String),
    /// The cultural-fact button was pressed.
    CultureRequested,
    /// The cultural-fact request finished.
    CultureLoaded(String),
}

impl Intent {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::GoToPage(_) => "go_to_page",
            Intent::SelectRecipe(_) => "select_recipe",
            Intent::ChangeServings(_) => "change_servings",
            Intent::ToggleNav => "toggle_nav",
            Intent::FilterNav(_) => "filter_nav",
            Intent::ToggleSection(_) => "toggle_section",
            Intent::Navigate(_) => "navigate",
            Intent::CultureRequested => "culture_requested",
            Intent::CultureLoaded(_) => "culture_loaded",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Applies an intent to a state, returning the next state.
pub fn dispatch(state: &AppState, book: &RecipeBook, intent: Intent) -> AppState {
    tracing::debug!(intent = %intent, "Dispatching intent");

    match intent {
        Intent::GoToPage(page) => go_to_page(state, book, page),
        Intent::SelectRecipe(id) => select_recipe(state, book, id),
        Intent::ChangeServings(delta) => change_servings(state, delta),
        Intent::ToggleNav => toggle_nav(state),
        Intent::FilterNav(text) => filter_nav(state, text),
        Intent::ToggleSection(section) => toggle_section(state, section),
        Intent::Navigate(fragment) => navigate(state, book, &fragment),
        Intent::CultureRequested => culture_requested(state),
        Intent::CultureLoaded(text) => culture_loaded(state, text),
    }
}

fn go_to_page(state: &AppState, book: &RecipeBook, page: Page) -> AppState {
    match page {
        Page::Cover => show(state, ViewState::Cover),
        Page::Index => show(state, ViewState::Index),
        Page::Recipes => match state.recipe(book) {
            Some(recipe) => open_recipe(state, recipe),
            None => state.clone(),
        },
    }
}

fn select_recipe(state: &AppState, book: &RecipeBook, id: RecipeId) -> AppState {
    let Some(recipe) = book.get(id) else {
        tracing::warn!(recipe_id = %id, "Ignoring selection of unknown recipe");
        return state.clone();
    };

    tracing::info!(recipe_id = %id, title = %recipe.title, "Recipe selected");
    let next = open_recipe(state, recipe);
    toggle_nav(&next)
}

fn change_servings(state: &AppState, delta: i32) -> AppState {
    let servings = (i64::from(state.servings) + i64::from(delta)).clamp(1, i64::from(u32::MAX));
    AppState {
        servings: u32::try_from(servings).unwrap_or(u32::MAX),
        ..state.clone()
    }
}

fn toggle_nav(state: &AppState) -> AppState {
    let nav_open = !state.nav_open;
    AppState {
        nav_open,
        // Opening rebuilds the panel unfiltered
        nav_filter: if nav_open {
            String::new()
        } else {
            state.nav_filter.clone()
        },
        ..state.clone()
    }
}

fn filter_nav(state: &AppState, text: String) -> AppState {
    AppState {
        nav_filter: text,
        ..state.clone()
    }
}

fn toggle_section(state: &AppState, section: Section) -> AppState {
    let mut collapsed = state.collapsed.clone();
    if !collapsed.remove(&section) {
        collapsed.insert(section);
    }
    AppState {
        collapsed,
        ..state.clone()
    }
}

fn navigate(state: &AppState, book: &RecipeBook, fragment: &str) -> AppState {
    let outcome = resolve(
        fragment,
        &book.recipe_ids(),
        &Section::anchors(),
        state.has_active_view(),
    );

    match outcome {
        RouteOutcome::Navigate(ViewState::RecipeDetail(id)) => match book.get(id) {
            Some(recipe) => open_recipe(state, recipe),
            None => state.clone(),
        },
        RouteOutcome::Navigate(ViewState::SectionAnchor(anchor)) => {
            let mut next = show(state, ViewState::SectionAnchor(anchor.clone()));
            // Scrolling to a collapsed section opens it
            if let Some(section) = Section::from_anchor(&anchor) {
                next.collapsed.remove(&section);
            }
            next
        }
        RouteOutcome::Navigate(view) => show(state, view),
        RouteOutcome::NoChange => state.clone(),
    }
}

fn culture_requested(state: &AppState) -> AppState {
    if state.current_recipe.is_none() {
        return state.clone();
    }
    AppState {
        culture: CultureBanner::Loading,
        ..state.clone()
    }
}

fn culture_loaded(state: &AppState, text: String) -> AppState {
    // A reply for a recipe the reader already left is dropped
    if state.culture != CultureBanner::Loading {
        tracing::debug!("Discarding stale cultural fact");
        return state.clone();
    }
    AppState {
        culture: CultureBanner::Shown(text),
        ..state.clone()
    }
}

fn show(state: &AppState, view: ViewState) -> AppState {
    AppState {
        view: Some(view),
        ..state.clone()
    }
}

/// Rendering a recipe resets servings, sections, and the culture banner.
fn open_recipe(state: &AppState, recipe: &Recipe) -> AppState {
    AppState {
        view: Some(ViewState::RecipeDetail(recipe.id)),
        current_recipe: Some(recipe.id),
        servings: recipe.base_servings,
        collapsed: BTreeSet::new(),
        culture: CultureBanner::Hidden,
        ..state.clone()
    }
}
