use crate::github::types::{FetchStatus, RepositorySummary};
use crate::ui::{fit_to_width, theme, wrap_words};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

pub const LOADING_TEXT: &str = "Loading projects...";
pub const NO_DESCRIPTION: &str = "No description available";
pub const FAILURE_TITLE: &str = "Oops! Something went wrong";
pub const RETRY_LABEL: &str = "Try Again";

/// Featured-projects section: one view per `FetchStatus` variant.
pub struct ProjectsPanel<'a> {
    pub status: &'a FetchStatus,
}

impl<'a> ProjectsPanel<'a> {
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        match self.status {
            FetchStatus::Pending => vec![Line::from(Span::styled(
                format!("  {LOADING_TEXT}"),
                Style::default().fg(theme::DIM_TEXT),
            ))],
            FetchStatus::Succeeded(repos) => {
                let mut lines = Vec::new();
                for repo in repos {
                    lines.extend(ProjectCard { repo }.lines(width));
                }
                lines
            }
            FetchStatus::Failed(message) => vec![
                Line::from(Span::styled(
                    format!("  {FAILURE_TITLE}"),
                    Style::default()
                        .fg(theme::ERROR_FG)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::raw(format!("  Error: {message}"))),
                Line::default(),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("[r] {RETRY_LABEL}"),
                        Style::default()
                            .fg(theme::KEY_FG)
                            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                    ),
                ]),
            ],
        }
    }
}

pub struct ProjectCard<'a> {
    pub repo: &'a RepositorySummary,
}

impl<'a> ProjectCard<'a> {
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let border = Style::default().fg(theme::CARD_BORDER);
        let inner_w = (width as usize).saturating_sub(6).max(8);

        let title = fit_to_width(self.repo.display_name(), inner_w);
        let mut lines = vec![Line::from(vec![
            Span::styled("  \u{250c} ", border),
            Span::styled(
                title,
                Style::default()
                    .fg(theme::CARD_TITLE_FG)
                    .add_modifier(Modifier::BOLD),
            ),
        ])];

        let side = || Span::styled("  \u{2502} ", border);

        match self.repo.description() {
            Some(desc) => {
                for chunk in wrap_words(desc, inner_w) {
                    lines.push(Line::from(vec![side(), Span::raw(chunk)]));
                }
            }
            None => lines.push(Line::from(vec![
                side(),
                Span::styled(NO_DESCRIPTION, Style::default().fg(theme::DIM_TEXT)),
            ])),
        }

        let counters = [
            (
                format!("\u{2605} {} stars", self.repo.stargazers_count),
                Style::default().fg(theme::STAR_FG),
            ),
            (
                format!("\u{2442} {} forks", self.repo.forks_count),
                Style::default().fg(theme::DIM_TEXT),
            ),
            (
                format!("\u{25c9} {} watchers", self.repo.watchers_count),
                Style::default().fg(theme::DIM_TEXT),
            ),
        ];
        let one_line: usize = counters.iter().map(|(t, _)| t.width() + 2).sum();
        if one_line <= inner_w {
            let mut spans = vec![side()];
            for (i, (text, style)) in counters.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("  "));
                }
                spans.push(Span::styled(text, style));
            }
            lines.push(Line::from(spans));
        } else {
            for (text, style) in counters {
                lines.push(Line::from(vec![side(), Span::styled(text, style)]));
            }
        }

        let url = fit_to_width(&self.repo.html_url, inner_w.saturating_sub(16));
        lines.push(Line::from(vec![
            Span::styled("  \u{2514} ", border),
            Span::styled("View on GitHub ", Style::default().fg(theme::ACCENT)),
            Span::styled(
                url,
                Style::default()
                    .fg(theme::LINK_FG)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
        lines.push(Line::default());
        lines
    }
}
