//! Line-driven reading session.
//!
//! Each input line becomes an [`Intent`] for the core dispatcher and the
//! resulting state is re-rendered. The cultural-fact request is the only
//! asynchronous step: `fact` marks the banner as loading, awaits the
//! service, then feeds the reply back in as another intent.

use salem_client::CultureService;
use salem_core::render::render_state;
use salem_core::route::fragment_of;
use salem_core::{AppState, Intent, Page, RecipeBook, RecipeId, Section, dispatch};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::Result;

/// Help text for the session.
pub const HELP: &str = "\
Commands:
  open <id>           open a recipe by id
  select <id>         pick a recipe from the navigation panel
  go <fragment|url>   follow a URL fragment (a recipe id or a section anchor)
  page <name>         switch to cover, index, or recipes
  + / - / +N / -N     change servings
  toggle <section>    collapse or expand ing, inst, or tips
  nav                 open or close the navigation panel
  filter [text]       filter the navigation panel
  fact                request a cultural note for the current recipe
  help                show this help
  quit                leave
";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Feed an intent to the dispatcher
    Apply(Intent),
    /// Request a cultural note
    Fact,
    /// Print help
    Help,
    /// End the session
    Quit,
}

/// Parses one input line.
///
/// Returns `Ok(None)` for blank lines and `Err` with a message for input
/// that is not understood.
pub fn parse_command(line: &str) -> std::result::Result<Option<BrowseCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "quit" | "exit" | "q" => BrowseCommand::Quit,
        "help" | "?" => BrowseCommand::Help,
        "fact" => BrowseCommand::Fact,
        "nav" => BrowseCommand::Apply(Intent::ToggleNav),
        "filter" => BrowseCommand::Apply(Intent::FilterNav(rest.to_string())),
        "open" => BrowseCommand::Apply(Intent::Navigate(parse_id(rest)?.to_string())),
        "select" => BrowseCommand::Apply(Intent::SelectRecipe(parse_id(rest)?)),
        "go" => {
            let fragment = if rest.contains('#') {
                fragment_of(rest)
            } else {
                rest
            };
            BrowseCommand::Apply(Intent::Navigate(fragment.to_string()))
        }
        "page" => BrowseCommand::Apply(Intent::GoToPage(rest.parse::<Page>()?)),
        "toggle" => BrowseCommand::Apply(Intent::ToggleSection(rest.parse::<Section>()?)),
        "+" if rest.is_empty() => BrowseCommand::Apply(Intent::ChangeServings(1)),
        "-" if rest.is_empty() => BrowseCommand::Apply(Intent::ChangeServings(-1)),
        delta if delta.starts_with('+') || delta.starts_with('-') => {
            let delta = delta
                .parse::<i32>()
                .map_err(|_| format!("not a servings change: '{delta}'"))?;
            BrowseCommand::Apply(Intent::ChangeServings(delta))
        }
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };

    Ok(Some(command))
}

fn parse_id(text: &str) -> std::result::Result<RecipeId, String> {
    text.parse::<RecipeId>()
        .map_err(|_| format!("not a recipe id: '{text}'"))
}

/// Applies a parsed command to `state`, awaiting the culture service when
/// asked for a fact. Returns `None` when the session should end.
pub async fn step(
    state: &AppState,
    book: &RecipeBook,
    service: &CultureService,
    command: BrowseCommand,
) -> Option<AppState> {
    match command {
        BrowseCommand::Quit => None,
        BrowseCommand::Help => Some(state.clone()),
        BrowseCommand::Apply(intent) => Some(dispatch(state, book, intent)),
        BrowseCommand::Fact => {
            let loading = dispatch(state, book, Intent::CultureRequested);
            let Some(recipe) = loading.recipe(book) else {
                return Some(loading);
            };
            let fact = service.fact_for(recipe).await;
            Some(dispatch(&loading, book, Intent::CultureLoaded(fact.text)))
        }
    }
}

/// Runs a session until `quit` or end of input.
pub async fn run_session<R, W>(
    book: &RecipeBook,
    service: &CultureService,
    input: R,
    output: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    // The empty fragment on first load shows the cover
    let mut state = dispatch(&AppState::initial(book), book, Intent::Navigate(String::new()));
    output.write_all(render_state(&state, book)?.as_bytes()).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                output.write_all(format!("{message}\n").as_bytes()).await?;
                continue;
            }
        };

        if command == BrowseCommand::Help {
            output.write_all(HELP.as_bytes()).await?;
            continue;
        }

        match step(&state, book, service, command).await {
            Some(next) => state = next,
            None => break,
        }
        output.write_all(b"\n").await?;
        output.write_all(render_state(&state, book)?.as_bytes()).await?;
    }

    output.flush().await?;
    tracing::debug!("Browse session ended");
    Ok(())
}
