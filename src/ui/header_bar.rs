use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

pub struct HeaderBar<'a> {
    pub name: &'a str,
    pub sections: &'a [&'a str],
}

impl<'a> Widget for HeaderBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::HEADER_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let left = Line::from(Span::styled(
            format!(" {}", self.name),
            Style::default()
                .fg(theme::ACCENT)
                .bg(theme::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ));
        buf.set_line(area.x, area.y, &left, area.width);

        // Right zone: section labels, dropped when they would overlap the name
        let right = format!("{}  ? help ", self.sections.join("  "));
        let right_w = UnicodeWidthStr::width(right.as_str());
        let left_w = left.width() + 2;
        let area_w = area.width as usize;

        if area_w > right_w + left_w {
            let right_x = area.x + (area_w - right_w) as u16;
            let right_span = Span::styled(
                right,
                Style::default().fg(theme::DIM_TEXT).bg(theme::HEADER_BG),
            );
            buf.set_line(right_x, area.y, &Line::from(right_span), right_w as u16);
        }
    }
}
