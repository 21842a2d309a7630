use crate::github::types::FetchStatus;
use crate::ui::theme;
use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    pub owner: &'a str,
    pub repo_count: usize,
    pub status: &'a FetchStatus,
    pub last_fetched: Option<DateTime<Local>>,
}

impl<'a> StatusBar<'a> {
    fn fetch_label(&self) -> (String, Style) {
        let base = Style::default().bg(theme::STATUS_BG);
        match self.status {
            FetchStatus::Pending => ("loading".to_string(), base.fg(theme::DIM_TEXT)),
            FetchStatus::Succeeded(repos) => (format!("{} loaded", repos.len()), base),
            FetchStatus::Failed(_) => (
                "failed, r to retry".to_string(),
                base.fg(theme::ERROR_FG).add_modifier(Modifier::BOLD),
            ),
        }
    }
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::STATUS_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let sep = || {
            Span::styled(
                "\u{2502}",
                Style::default().fg(theme::SEPARATOR).bg(theme::STATUS_BG),
            )
        };

        let (label, label_style) = self.fetch_label();
        let mut spans = vec![
            Span::styled(format!(" github.com/{} ", self.owner), bg),
            sep(),
            Span::styled(format!(" {} featured ", self.repo_count), bg),
            sep(),
            Span::styled(format!(" {label} "), label_style),
        ];

        if let Some(at) = self.last_fetched {
            spans.push(sep());
            spans.push(Span::styled(
                format!(" fetched: {} ", at.format("%H:%M:%S")),
                bg,
            ));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
