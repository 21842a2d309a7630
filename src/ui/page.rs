use crate::config::Profile;
use crate::github::types::FetchStatus;
use crate::ui::projects_panel::ProjectsPanel;
use crate::ui::sections;
use ratatui::{buffer::Buffer as Buf, layout::Rect, text::Line, widgets::Widget};

/// The whole portfolio as one scrollable column.
pub struct PortfolioPage<'a> {
    pub profile: &'a Profile,
    pub projects: &'a FetchStatus,
    pub scroll: usize,
}

impl<'a> PortfolioPage<'a> {
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = vec![Line::default()];
        lines.extend(sections::about_lines(self.profile, width));
        lines.extend(sections::skills_lines(self.profile, width));
        lines.extend(sections::heading("Featured Projects", width));
        lines.extend(ProjectsPanel { status: self.projects }.lines(width));
        lines.push(Line::default());
        lines.extend(sections::achievements_lines(self.profile, width));
        lines.extend(sections::contact_lines(self.profile, width));
        lines
    }

    pub fn height(&self, width: u16) -> usize {
        self.lines(width).len()
    }
}

impl<'a> Widget for PortfolioPage<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let lines = self.lines(area.width);
        for (i, line) in lines
            .iter()
            .skip(self.scroll)
            .take(area.height as usize)
            .enumerate()
        {
            buf.set_line(area.x, area.y + i as u16, line, area.width);
        }
    }
}
