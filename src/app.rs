use crate::config::Config;
use crate::event::AppEvent;
use crate::projects::{FetchTicket, ProjectsState};
use crate::ui::{
    header_bar::HeaderBar,
    help_panel::HelpPanel,
    input::{self, Action},
    page::PortfolioPage,
    sections::SECTION_TITLES,
    status_bar::StatusBar,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub struct App {
    pub config: Config,
    pub projects: ProjectsState,
    pub scroll: usize,
    pub viewport_height: usize,
    pub content_height: usize,
    pub show_help: bool,
    pub should_quit: bool,
    fetch_request: Option<FetchTicket>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            projects: ProjectsState::new(),
            scroll: 0,
            viewport_height: 0,
            content_height: 0,
            show_help: false,
            should_quit: false,
            fetch_request: None,
        }
    }

    /// Queues the initial fetch. Subsequent calls are no-ops.
    pub fn mount(&mut self) {
        if let Some(ticket) = self.projects.mount() {
            self.fetch_request = Some(ticket);
        }
    }

    /// The fetch the event loop should start next, if any.
    pub fn take_fetch_request(&mut self) -> Option<FetchTicket> {
        self.fetch_request.take()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => {
                let action = input::map_key(key, self.show_help);
                self.handle_action(action);
            }
            AppEvent::Resize => {}
            AppEvent::ProjectsLoaded { ticket, status } => {
                if !self.projects.complete(ticket, status) {
                    tracing::debug!(?ticket, "discarding stale projects result");
                }
            }
        }
    }

    fn handle_action(&mut self, action: Action) {
        let page = self.viewport_height.max(1);
        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.scroll_to(self.scroll.saturating_add(1)),
            Action::ScrollUp => self.scroll_to(self.scroll.saturating_sub(1)),
            Action::PageDown => self.scroll_to(self.scroll.saturating_add(page)),
            Action::PageUp => self.scroll_to(self.scroll.saturating_sub(page)),
            Action::Top => self.scroll = 0,
            Action::Bottom => self.scroll_to(usize::MAX),
            Action::Retry => {
                if let Some(ticket) = self.projects.retry() {
                    tracing::info!("retrying featured projects fetch");
                    self.fetch_request = Some(ticket);
                }
            }
            Action::Help => self.show_help = true,
            Action::ClosePopup => self.show_help = false,
            Action::None => {}
        }
    }

    fn max_scroll(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    fn scroll_to(&mut self, target: usize) {
        self.scroll = target.min(self.max_scroll());
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(size);

        let profile = &self.config.profile;
        frame.render_widget(
            HeaderBar {
                name: &profile.name,
                sections: SECTION_TITLES,
            },
            chunks[0],
        );

        let body = chunks[1];
        self.viewport_height = body.height as usize;
        self.content_height = PortfolioPage {
            profile,
            projects: self.projects.status(),
            scroll: 0,
        }
        .height(body.width);
        self.scroll = self.scroll.min(self.max_scroll());

        frame.render_widget(
            PortfolioPage {
                profile: &self.config.profile,
                projects: self.projects.status(),
                scroll: self.scroll,
            },
            body,
        );

        frame.render_widget(
            StatusBar {
                owner: &self.config.owner,
                repo_count: self.config.featured_repos.len(),
                status: self.projects.status(),
                last_fetched: self.projects.last_fetched,
            },
            chunks[2],
        );

        if self.show_help {
            frame.render_widget(HelpPanel, size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::types::FetchStatus;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn test_mount_requests_one_fetch() {
        let mut app = App::new(Config::default());
        app.mount();
        app.mount();
        assert!(app.take_fetch_request().is_some());
        assert!(app.take_fetch_request().is_none());
    }

    #[test]
    fn test_retry_key_only_after_failure() {
        let mut app = App::new(Config::default());
        app.mount();
        let ticket = app.take_fetch_request().unwrap();

        press(&mut app, KeyCode::Char('r'));
        assert!(app.take_fetch_request().is_none());

        app.handle_event(AppEvent::ProjectsLoaded {
            ticket,
            status: FetchStatus::Failed("HTTP error! status: 404".to_string()),
        });
        press(&mut app, KeyCode::Char('r'));

        assert!(app.projects.status().is_pending());
        let retry = app.take_fetch_request().unwrap();
        assert_ne!(retry, ticket);
    }

    #[test]
    fn test_render_and_scroll_bounds() {
        let mut app = App::new(Config::default());
        app.mount();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        assert_eq!(app.viewport_height, 18);
        assert!(app.content_height > app.viewport_height);

        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.scroll, app.content_height - app.viewport_height);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.scroll, app.content_height - app.viewport_height);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.scroll, 0);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_help_and_quit() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
