//! View states, pages, and recipe sections.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::types::RecipeId;

/// The screen the application is displaying.
///
/// Derived from the URL fragment on every navigation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "view", content = "target")]
pub enum ViewState {
    /// The book cover.
    Cover,

    /// The category index.
    Index,

    /// The detail view of one recipe.
    RecipeDetail(RecipeId),

    /// A named section of the current recipe, scrolled into view.
    SectionAnchor(String),
}

impl ViewState {
    /// Returns the page that hosts this view.
    pub fn page(&self) -> Page {
        match self {
            ViewState::Cover => Page::Cover,
            ViewState::Index => Page::Index,
            ViewState::RecipeDetail(_) | ViewState::SectionAnchor(_) => Page::Recipes,
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewState::Cover => write!(f, "cover"),
            ViewState::Index => write!(f, "index"),
            ViewState::RecipeDetail(id) => write!(f, "recipe {id}"),
            ViewState::SectionAnchor(name) => write!(f, "section {name}"),
        }
    }
}

/// A top-level page of the book, selected by the book tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Cover page
    Cover,
    /// Category index page
    Index,
    /// Recipe page, showing the current recipe
    Recipes,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Cover => write!(f, "cover"),
            Page::Index => write!(f, "index"),
            Page::Recipes => write!(f, "recipes"),
        }
    }
}

impl std::str::FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "cover" => Ok(Page::Cover),
            "index" => Ok(Page::Index),
            "recipes" => Ok(Page::Recipes),
            other => Err(format!("unknown page '{other}'")),
        }
    }
}

/// A collapsible section of the recipe view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Ingredient list with the servings control
    Ingredients,
    /// Numbered instructions
    Instructions,
    /// Kitchen tips
    Tips,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 3] = [Section::Ingredients, Section::Instructions, Section::Tips];

    /// Fragment anchor that scrolls to this section.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Ingredients => "ingredients-section",
            Section::Instructions => "instructions-section",
            Section::Tips => "tips-section",
        }
    }

    /// Short key used by the collapse toggles.
    pub fn key(self) -> &'static str {
        match self {
            Section::Ingredients => "ing",
            Section::Instructions => "inst",
            Section::Tips => "tips",
        }
    }

    /// Heading shown above the section body.
    pub fn heading(self) -> &'static str {
        match self {
            Section::Ingredients => "🥄 Ingredients",
            Section::Instructions => "📝 Instructions",
            Section::Tips => "✨ Kitchen Secrets",
        }
    }

    /// Looks up a section by its fragment anchor.
    pub fn from_anchor(anchor: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    /// The set of all known section anchors, as the router expects them.
    pub fn anchors() -> HashSet<String> {
        Section::ALL
            .iter()
            .map(|s| s.anchor().to_string())
            .collect()
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    /// Accepts either the toggle key (`ing`) or the anchor
    /// (`ingredients-section`).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.key() == s || section.anchor() == s)
            .ok_or_else(|| format!("unknown section '{s}'"))
    }
}
