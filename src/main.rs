mod app;
mod config;
mod error;
mod event;
mod github;
mod logging;
mod projects;
#[cfg(test)]
mod test_utils;
mod ui;

use app::App;
use clap::Parser;
use config::{Config, Overrides};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use event::AppEvent;
use futures::StreamExt;
use github::{aggregator, client::GitHubClient};
use projects::FetchTicket;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "folio", about = "Terminal portfolio with featured GitHub projects")]
struct Cli {
    #[arg(long, help = "GitHub account that owns the featured repositories")]
    owner: Option<String>,

    #[arg(long, help = "Base URL of the GitHub REST API")]
    api_url: Option<String>,

    #[arg(long = "repo", help = "Featured repository name (repeatable, replaces the configured list)")]
    repos: Vec<String>,

    #[arg(long, help = "Print the effective configuration as TOML and exit")]
    print_config: bool,
}

// One thread: the fetch task and the UI loop interleave cooperatively
#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&logging::log_path()) {
        eprintln!("warning: file logging disabled: {e}");
    }

    let config = Config::load(Overrides {
        owner: cli.owner,
        api_url: cli.api_url,
        repos: cli.repos,
    });

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let client = match GitHubClient::new(
        &config.api_url,
        &config.owner,
        config.github_token.as_deref(),
    ) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(?config, "starting folio");

    // Install panic hook before entering raw mode so terminal is restored on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    let input_tx = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Resize(_, _) => Some(AppEvent::Resize),
                _ => None,
            };
            if let Some(e) = app_event {
                if input_tx.send(e).is_err() {
                    break;
                }
            }
        }
    });

    let mut app = App::new(config);
    app.mount();

    loop {
        if let Some(ticket) = app.take_fetch_request() {
            spawn_fetch(&client, &app.config.featured_repos, ticket, tx.clone());
        }

        terminal.draw(|f| app.render(f))?;

        let first = match rx.recv().await {
            Some(e) => e,
            None => break,
        };
        app.handle_event(first);
        while let Ok(pending) = rx.try_recv() {
            app.handle_event(pending);
        }

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn spawn_fetch(
    client: &GitHubClient,
    repos: &[String],
    ticket: FetchTicket,
    tx: mpsc::UnboundedSender<AppEvent>,
) {
    let client = client.clone();
    let repos = repos.to_vec();
    tokio::spawn(async move {
        let status = aggregator::fetch_featured(&client, &repos).await;
        let _ = tx.send(AppEvent::ProjectsLoaded { ticket, status });
    });
}
