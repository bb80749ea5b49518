//! Fragment routing.
//!
//! Maps the URL fragment to the view the book should show. Resolution is a
//! pure function of the fragment, the known recipe ids, the known section
//! anchors, and whether a view is already active; an unrecognized fragment
//! is a normal condition (a stale or hand-edited URL) and leaves the current
//! view alone.

use std::collections::HashSet;

use crate::types::{RecipeId, ViewState};

/// Result of resolving a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Switch to the given view.
    Navigate(ViewState),

    /// Keep whatever view is currently shown.
    NoChange,
}

impl RouteOutcome {
    /// Returns the target view, or `None` for [`RouteOutcome::NoChange`].
    pub fn into_view(self) -> Option<ViewState> {
        match self {
            RouteOutcome::Navigate(view) => Some(view),
            RouteOutcome::NoChange => None,
        }
    }

    /// Returns `true` if the outcome leaves the current view in place.
    pub fn is_no_change(&self) -> bool {
        matches!(self, RouteOutcome::NoChange)
    }
}

/// Resolves a URL fragment to a view.
///
/// Rules, first match wins:
/// 1. a non-empty all-digit fragment naming a known recipe id → recipe detail
/// 2. a non-empty fragment naming a known anchor → section anchor
/// 3. an empty fragment with no active view → cover
/// 4. anything else → no change
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use salem_core::route::{RouteOutcome, resolve};
/// use salem_core::{RecipeId, ViewState};
///
/// let ids: HashSet<RecipeId> = (0..4).map(RecipeId::new).collect();
/// let anchors = HashSet::new();
///
/// assert_eq!(
///     resolve("3", &ids, &anchors, true),
///     RouteOutcome::Navigate(ViewState::RecipeDetail(RecipeId::new(3)))
/// );
/// assert_eq!(resolve("99", &ids, &anchors, true), RouteOutcome::NoChange);
/// ```
pub fn resolve(
    fragment: &str,
    known_ids: &HashSet<RecipeId>,
    known_anchors: &HashSet<String>,
    has_active_view: bool,
) -> RouteOutcome {
    if fragment.is_empty() {
        return if has_active_view {
            RouteOutcome::NoChange
        } else {
            RouteOutcome::Navigate(ViewState::Cover)
        };
    }

    if let Some(id) = parse_recipe_id(fragment) {
        if known_ids.contains(&id) {
            return RouteOutcome::Navigate(ViewState::RecipeDetail(id));
        }
    }

    if known_anchors.contains(fragment) {
        return RouteOutcome::Navigate(ViewState::SectionAnchor(fragment.to_string()));
    }

    tracing::debug!(fragment, "Fragment matched no recipe or anchor");
    RouteOutcome::NoChange
}

/// Parses a fragment made only of ASCII digits into a recipe id.
///
/// Signs, whitespace, and values beyond `u32` are rejected.
pub fn parse_recipe_id(fragment: &str) -> Option<RecipeId> {
    if fragment.is_empty() || !fragment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    fragment.parse::<u32>().ok().map(RecipeId::new)
}

/// Extracts the fragment from a location string: the text after the first
/// `#`, or the empty string when there is none.
pub fn fragment_of(location: &str) -> &str {
    location
        .split_once('#')
        .map(|(_, fragment)| fragment)
        .unwrap_or("")
}

/// Returns the fragment that addresses a view, the inverse of [`resolve`].
///
/// The cover and the index have no fragment of their own.
pub fn fragment_for(view: &ViewState) -> String {
    match view {
        ViewState::Cover | ViewState::Index => String::new(),
        ViewState::RecipeDetail(id) => id.to_string(),
        ViewState::SectionAnchor(name) => name.clone(),
    }
}
