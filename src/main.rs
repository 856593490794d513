use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use slicebox::config::Config;
use slicebox::counter::{counter_slice, CounterState, CounterView};
use slicebox::logging::init_tracing;
use slicebox::posts::{InMemoryPostSource, JsonFilePostSource, NewPost, PostSource};
use slicebox::store::{Action, Dispatched, Store};
use slicebox::ui::app::App;
use slicebox::ui::runtime;
use slicebox::view::RenderPolicy;

#[derive(Debug, Parser)]
#[command(name = "slicebox", version, about = "Counter slice demo with a terminal UI")]
struct Cli {
    /// Config file (default: ~/.config/slicebox/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the counter's initial value
    #[arg(long, global = true, allow_hyphen_values = true)]
    initial: Option<i64>,

    /// Override when bound views re-render
    #[arg(long, value_enum)]
    render_policy: Option<RenderPolicy>,

    /// JSON file with posts for the posts panel
    #[arg(long, global = true)]
    posts: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive terminal UI (default)
    Tui,
    /// Dispatch actions against a fresh counter and print the final state
    Apply {
        /// Action types, applied in order
        actions: Vec<String>,
    },
    /// List the counter's action types
    Actions,
    /// Append a post to the posts file and print it as JSON
    AddPost {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        #[arg(long, default_value_t = 1)]
        user_id: u64,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    if let Some(initial) = cli.initial {
        config.counter.initial = initial;
    }
    if let Some(policy) = cli.render_policy {
        config.view.render_policy = policy;
    }
    if let Some(path) = cli.posts.clone() {
        config.posts.path = Some(path);
    }

    let store = Rc::new(Store::new(counter_slice(CounterState::new(
        config.counter.initial,
    ))));

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => run_tui(store, &config),
        Command::Apply { actions } => apply(&store, &actions),
        Command::Actions => {
            for kind in store.action_types() {
                println!("{kind}");
            }
            Ok(())
        }
        Command::AddPost {
            title,
            body,
            user_id,
        } => add_post(
            &config,
            NewPost {
                user_id,
                title,
                body,
            },
        ),
    }
}

fn apply(store: &Store<CounterState>, actions: &[String]) -> Result<()> {
    for kind in actions {
        let outcome = store
            .dispatch(&Action::new(kind.as_str()))
            .with_context(|| format!("Failed to apply '{kind}'"))?;
        if outcome == Dispatched::Ignored {
            info!(action = %kind, "unknown action ignored");
        }
    }
    println!("{}", serde_json::to_string(&*store.state())?);
    Ok(())
}

fn add_post(config: &Config, post: NewPost) -> Result<()> {
    let path = config
        .posts
        .path
        .as_ref()
        .context("No posts file configured (use --posts or [posts] path)")?;
    let mut source = JsonFilePostSource::new(path);
    let created = source
        .create_post(post)
        .with_context(|| format!("Failed to add post to '{}'", path.display()))?;
    info!(id = created.id, "post added");
    println!("{}", serde_json::to_string(&created)?);
    Ok(())
}

fn run_tui(store: Rc<Store<CounterState>>, config: &Config) -> Result<()> {
    let posts: Box<dyn PostSource> = match &config.posts.path {
        Some(path) => Box::new(JsonFilePostSource::new(path)),
        None => Box::new(InMemoryPostSource::sample()),
    };
    let view = CounterView::attach(&store, config.view.render_policy);
    let app = App::new(view, posts);
    runtime::run(app, Duration::from_millis(config.view.tick_rate_ms))
        .context("Terminal UI failed")?;
    Ok(())
}
