//! Plain-text rendering of the book's views.

use std::fmt::Write;

use crate::dataset::RecipeBook;
use crate::error::Result;
use crate::index::CategoryGroup;
use crate::scale::scale;
use crate::state::{AppState, CultureBanner};
use crate::types::{Ingredient, Recipe, Section, ViewState};

/// Renders whatever the state says is on screen, plus the navigation panel
/// when it is open.
pub fn render_state(state: &AppState, book: &RecipeBook) -> Result<String> {
    let mut out = String::new();

    match &state.view {
        None | Some(ViewState::Cover) => write_cover(&mut out, book)?,
        Some(ViewState::Index) => out.push_str(&render_index(&state.index(book))?),
        Some(ViewState::RecipeDetail(_)) => {
            if let Some(recipe) = state.recipe(book) {
                out.push_str(&render_recipe(recipe, state)?);
            }
        }
        Some(ViewState::SectionAnchor(anchor)) => {
            if let (Some(recipe), Some(section)) = (state.recipe(book), Section::from_anchor(anchor))
            {
                write_section(&mut out, recipe, section, state)?;
            }
        }
    }

    if state.nav_open {
        writeln!(out)?;
        writeln!(out, "── Recipes ──")?;
        if !state.nav_filter.is_empty() {
            writeln!(out, "(filter: {})", state.nav_filter)?;
        }
        out.push_str(&render_index(&state.index(book))?);
    }

    Ok(out)
}

/// Renders the full recipe page for the state's servings and sections.
pub fn render_recipe(recipe: &Recipe, state: &AppState) -> Result<String> {
    let mut out = String::new();

    write_title_card(&mut out, recipe)?;
    write_meta_row(&mut out, recipe)?;
    write_nutrition(&mut out, recipe)?;
    for section in Section::ALL {
        write_section(&mut out, recipe, section, state)?;
    }
    write_culture(&mut out, &state.culture)?;

    Ok(out)
}

/// Renders one ingredient line, scaled from the recipe's base servings.
///
/// ```
/// use salem_core::Ingredient;
/// use salem_core::render::render_ingredient;
///
/// let flour = Ingredient { amount: 1.0, unit: "cup".into(), name: "flour".into() };
/// assert_eq!(render_ingredient(&flour, 4, 6).unwrap(), "1½ cup flour");
/// ```
pub fn render_ingredient(ingredient: &Ingredient, base_servings: u32, servings: u32) -> Result<String> {
    let amount = scale(ingredient.amount, base_servings, servings)?;
    let parts = [amount.as_str(), ingredient.unit.as_str(), ingredient.name.as_str()];
    Ok(parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" "))
}

/// Renders the category index, marking the active recipe with `▸`.
pub fn render_index(groups: &[CategoryGroup]) -> Result<String> {
    let mut out = String::new();

    if groups.is_empty() {
        writeln!(out, "No recipes match.")?;
        return Ok(out);
    }

    for group in groups {
        writeln!(out, "{}", group.category)?;
        for entry in &group.entries {
            let marker = if entry.active { "▸" } else { " " };
            writeln!(
                out,
                "  {marker} [{}] {}  ({})",
                entry.id, entry.title, entry.subtitle
            )?;
        }
    }

    Ok(out)
}

fn write_cover(out: &mut String, book: &RecipeBook) -> Result<()> {
    let title = if book.title().is_empty() {
        "Recipe Book"
    } else {
        book.title()
    };
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "═".repeat(title.chars().count()))?;
    writeln!(out, "{} recipes", book.len())?;
    Ok(())
}

fn write_title_card(out: &mut String, recipe: &Recipe) -> Result<()> {
    writeln!(out, "{}", recipe.title)?;
    writeln!(out, "{}", recipe.category)?;
    if !recipe.dietary.is_empty() {
        let tags: Vec<String> = recipe.dietary.iter().map(|t| format!("[{t}]")).collect();
        writeln!(out, "{}", tags.join(" "))?;
    }
    if let Some(image) = &recipe.image {
        writeln!(out, "Image: {image}")?;
    }
    if !recipe.story.is_empty() {
        writeln!(out, "📖 {}", recipe.story)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_meta_row(out: &mut String, recipe: &Recipe) -> Result<()> {
    writeln!(
        out,
        "Prep: {} | Cook: {} | Difficulty: {}",
        recipe.prep_time, recipe.cook_time, recipe.difficulty
    )?;
    Ok(())
}

fn write_nutrition(out: &mut String, recipe: &Recipe) -> Result<()> {
    let n = &recipe.nutrition;
    writeln!(
        out,
        "Nutrition (per serving): {} Calories | {} Protein | {} Carbs | {} Fat",
        n.calories, n.protein, n.carbs, n.fat
    )?;
    writeln!(out)?;
    Ok(())
}

fn write_section(out: &mut String, recipe: &Recipe, section: Section, state: &AppState) -> Result<()> {
    let open = state.is_open(section);
    writeln!(out, "{} {}", if open { "▾" } else { "▸" }, section.heading())?;
    if !open {
        return Ok(());
    }

    match section {
        Section::Ingredients => {
            writeln!(out, "  Servings: {}", state.servings)?;
            for ingredient in &recipe.ingredients {
                let line = render_ingredient(ingredient, recipe.base_servings, state.servings)?;
                writeln!(out, "  • {line}")?;
            }
        }
        Section::Instructions => {
            for step in &recipe.instructions {
                if step.title.is_empty() {
                    writeln!(out, "  {}. {}", step.step, step.text)?;
                } else {
                    writeln!(out, "  {}. {}: {}", step.step, step.title, step.text)?;
                }
            }
        }
        Section::Tips => {
            for tip in &recipe.tips {
                writeln!(out, "  ✨ {tip}")?;
            }
        }
    }
    writeln!(out)?;
    Ok(())
}

fn write_culture(out: &mut String, banner: &CultureBanner) -> Result<()> {
    match banner {
        CultureBanner::Hidden => writeln!(out, "[Cultural note available]")?,
        CultureBanner::Loading => writeln!(out, "Loading…")?,
        CultureBanner::Shown(text) => writeln!(out, "🌍 {text}")?,
    }
    Ok(())
}
