//! ghsearch: terminal front-end for ghsearch-rs

mod cli;
mod render;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use ghsearch_rs::{
    config::{self, Settings},
    network::HttpClient,
    Aggregator, GitHub, GitHubApi, RepositoryBrowser, SearchSession, SearchState,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    info!("Starting ghsearch v{}", ghsearch_rs::VERSION);

    let settings = config::load(cli.config.as_deref())?;

    // one client for the whole process
    let client = HttpClient::with_settings(&settings)?;
    let api: Arc<dyn GitHubApi> = Arc::new(GitHub::with_settings(client, &settings)?);
    debug!("Using API at {}", settings.api.base_url);

    match cli.command {
        Commands::Search { query, json } => run_search(api, &settings, &query, json).await,
        Commands::Browse {
            owner,
            repo,
            path,
            json,
        } => run_browse(api, &owner, &repo, &path, json).await,
        Commands::Interactive => run_interactive(api, &settings).await,
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn session(api: Arc<dyn GitHubApi>, settings: &Settings) -> SearchSession {
    SearchSession::with_settings(Aggregator::new(api), &settings.search)
}

async fn run_search(
    api: Arc<dyn GitHubApi>,
    settings: &Settings,
    query: &str,
    json: bool,
) -> Result<()> {
    let state = session(api, settings).search(query).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        let min = settings.search.min_query_length;
        println!("{}", render::render_state(&state, min));
    }

    if let SearchState::Error { message, .. } = state {
        bail!(message);
    }
    Ok(())
}

async fn run_browse(
    api: Arc<dyn GitHubApi>,
    owner: &str,
    repo: &str,
    path: &str,
    json: bool,
) -> Result<()> {
    let browser = RepositoryBrowser::open_at(api, owner, repo, path)
        .await
        .with_context(|| format!("Failed to load {}/{}", owner, repo))?;

    if json {
        println!("{}", serde_json::to_string_pretty(browser.entries())?);
    } else {
        print_listing(&browser);
    }
    Ok(())
}

fn print_listing(browser: &RepositoryBrowser) {
    println!("{}", render::render_entries(&browser.title(), browser.entries()));
}

const REPL_HELP: &str = "Type a query to search. \
    Commands: :retry, :open <n>, :cd <dir>, :back, :refresh, :help, :quit";

async fn run_interactive(api: Arc<dyn GitHubApi>, settings: &Settings) -> Result<()> {
    let session = session(api.clone(), settings);
    let min = settings.search.min_query_length;
    let mut browser: Option<RepositoryBrowser> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", REPL_HELP);
    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end();
        let (command, arg) = match line.strip_prefix(':') {
            Some(rest) => {
                let mut parts = rest.splitn(2, ' ');
                (parts.next().unwrap_or(""), parts.next().unwrap_or("").trim())
            }
            None => ("", line),
        };

        match command {
            "" => {
                browser = None;
                println!("{}", render::render_state(&session.search(arg).await, min));
            }
            "retry" => println!("{}", render::render_state(&session.retry_now().await, min)),
            "open" => {
                let state = session.state();
                let repo = arg
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| state.items().get(i))
                    .and_then(|item| item.as_repository());

                let Some(repo) = repo else {
                    println!("No repository at position '{}'", arg);
                    continue;
                };
                match RepositoryBrowser::open(api.clone(), &repo.owner.login, &repo.name).await {
                    Ok(opened) => {
                        print_listing(&opened);
                        browser = Some(opened);
                    }
                    Err(e) => println!("Failed to load {}: {}", repo.full_name(), e),
                }
            }
            "cd" => match browser.as_mut() {
                Some(current) => match current.enter(arg).await {
                    Ok(()) => print_listing(current),
                    Err(e) => println!("{}", e),
                },
                None => println!("Open a repository first with :open <n>"),
            },
            "refresh" => match browser.as_mut() {
                Some(current) => match current.refresh().await {
                    Ok(()) => print_listing(current),
                    Err(e) => println!("Failed to reload {}: {}", current.title(), e),
                },
                None => println!("Open a repository first with :open <n>"),
            },
            "back" => {
                let stepped = browser.as_mut().map_or(false, |current| current.back());
                if stepped {
                    if let Some(current) = &browser {
                        print_listing(current);
                    }
                } else {
                    // leaving the root returns to the result list
                    browser = None;
                    println!("{}", render::render_state(&session.state(), min));
                }
            }
            "help" => println!("{}", REPL_HELP),
            "quit" | "q" => break,
            other => println!("Unknown command ':{}'. {}", other, REPL_HELP),
        }
    }

    Ok(())
}
