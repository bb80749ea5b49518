//! Subcommand handlers.
//!
//! Each handler returns the text to print so it can be tested without a
//! terminal; [`run`] does the printing.

use std::path::Path;
use std::sync::Arc;

use salem_client::{AnthropicFactSource, CultureConfig, CultureService};
use salem_core::render::{render_index, render_recipe};
use salem_core::route::fragment_of;
use salem_core::index::build_index;
use salem_core::{
    AppState, Intent, RecipeBook, RecipeId, RouteOutcome, Section, dispatch, resolve, scale,
};

use crate::browse;
use crate::cli::{Args, Command};
use crate::config::SalemConfig;
use crate::config_handlers::handle_config_command;
use crate::error::Result;

/// Shown when the dataset cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str =
    "Error Loading Recipes\nPlease ensure data/recipes.json exists";

/// Runs the parsed command line.
pub async fn run(args: Args, config: SalemConfig) -> Result<()> {
    let config_path = args.config.as_deref();
    let dataset = args.dataset.clone().unwrap_or_else(|| config.dataset.clone());

    match args.command {
        Command::Config { action } => handle_config_command(config_path, action),
        Command::Scale {
            amount,
            base,
            target,
        } => {
            println!("{}", cmd_scale(amount, base, target)?);
            Ok(())
        }
        Command::List { filter } => {
            let book = load_book(&dataset)?;
            print!("{}", cmd_list(&book, &filter)?);
            Ok(())
        }
        Command::Show { id, servings } => {
            let book = load_book(&dataset)?;
            print!("{}", cmd_show(&book, RecipeId::new(id), servings)?);
            Ok(())
        }
        Command::Route { fragment, active } => {
            let book = load_book(&dataset)?;
            println!("{}", cmd_route(&book, &fragment, active));
            Ok(())
        }
        Command::Fact { id } => {
            let book = load_book(&dataset)?;
            let service = culture_service(&config.culture)?;
            println!("{}", cmd_fact(&book, RecipeId::new(id), &service).await?);
            Ok(())
        }
        Command::Browse => {
            let book = load_book(&dataset)?;
            let service = culture_service(&config.culture)?;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            browse::run_session(&book, &service, stdin, &mut stdout).await
        }
    }
}

/// Loads the dataset, printing the reader-facing failure notice on error.
pub fn load_book(path: &Path) -> Result<RecipeBook> {
    match RecipeBook::load(path) {
        Ok(book) => Ok(book),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to load recipes");
            eprintln!("{LOAD_FAILURE_MESSAGE}");
            Err(e.into())
        }
    }
}

/// Builds the cultural-fact service from configuration.
pub fn culture_service(config: &CultureConfig) -> Result<CultureService> {
    let source = AnthropicFactSource::new(config.clone())?;
    Ok(CultureService::new(Arc::new(source)))
}

/// Renders the category index, optionally filtered.
pub fn cmd_list(book: &RecipeBook, filter: &str) -> Result<String> {
    let groups = build_index(book.recipes(), filter, None);
    Ok(render_index(&groups)?)
}

/// Renders one recipe at `servings`, or at its own base servings.
pub fn cmd_show(book: &RecipeBook, id: RecipeId, servings: Option<u32>) -> Result<String> {
    let recipe = book.require(id)?;
    let mut state = dispatch(
        &AppState::initial(book),
        book,
        Intent::Navigate(id.to_string()),
    );
    if let Some(servings) = servings {
        state.servings = servings.max(1);
    }
    Ok(render_recipe(recipe, &state)?)
}

/// Scales a single amount.
pub fn cmd_scale(amount: f64, base: u32, target: u32) -> Result<String> {
    Ok(scale(amount, base, target)?)
}

/// Describes where a fragment (or a URL carrying one) leads.
pub fn cmd_route(book: &RecipeBook, input: &str, active: bool) -> String {
    let fragment = if input.contains('#') {
        fragment_of(input)
    } else {
        input
    };

    match resolve(fragment, &book.recipe_ids(), &Section::anchors(), active) {
        RouteOutcome::Navigate(view) => format!("navigate: {view}"),
        RouteOutcome::NoChange => "no change".to_string(),
    }
}

/// Fetches a cultural note for a recipe.
pub async fn cmd_fact(book: &RecipeBook, id: RecipeId, service: &CultureService) -> Result<String> {
    let recipe = book.require(id)?;
    let fact = service.fact_for(recipe).await;
    tracing::debug!(origin = %fact.origin, "Cultural fact ready");
    Ok(format!("🌍 {}", fact.text))
}
