use crate::config::Profile;
use crate::ui::{fit_to_width, theme, wrap_words};
use itertools::Itertools;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

pub const SECTION_TITLES: &[&str] = &["About", "Skills", "Projects", "Achievements", "Contact"];

pub fn heading(title: &str, width: u16) -> Vec<Line<'static>> {
    let rule_w = (width as usize).saturating_sub(UnicodeWidthStr::width(title) + 3);
    vec![
        Line::from(vec![
            Span::styled(
                format!(" {title} "),
                Style::default()
                    .fg(theme::SECTION_HEADER_FG)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "\u{2500}".repeat(rule_w),
                Style::default().fg(theme::SEPARATOR),
            ),
        ]),
        Line::default(),
    ]
}

fn indented(text: &str, width: u16) -> Vec<Line<'static>> {
    wrap_words(text, (width as usize).saturating_sub(4))
        .into_iter()
        .map(|l| Line::from(Span::raw(format!("  {l}"))))
        .collect()
}

pub fn about_lines(profile: &Profile, width: u16) -> Vec<Line<'static>> {
    let mut lines = heading("About Me", width);
    lines.extend(indented(&profile.about, width));
    lines.push(Line::default());
    lines
}

/// Skills laid out as a grid of equal-width cells.
pub fn skills_lines(profile: &Profile, width: u16) -> Vec<Line<'static>> {
    let mut lines = heading("Skills", width);
    let cell_w = profile
        .skills
        .iter()
        .map(|s| UnicodeWidthStr::width(s.as_str()))
        .max()
        .unwrap_or(0)
        + 4;
    let per_row = ((width as usize).saturating_sub(2) / cell_w).max(1);

    for row in &profile.skills.iter().chunks(per_row) {
        let text = row
            .map(|skill| {
                let pad = cell_w - 2 - UnicodeWidthStr::width(skill.as_str());
                format!("\u{2022} {skill}{}", " ".repeat(pad))
            })
            .join("");
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                fit_to_width(text.trim_end(), (width as usize).saturating_sub(2)),
                Style::default().fg(theme::SKILL_FG),
            ),
        ]));
    }
    lines.push(Line::default());
    lines
}

pub fn achievements_lines(profile: &Profile, width: u16) -> Vec<Line<'static>> {
    let mut lines = heading("Achievements", width);
    for achievement in &profile.achievements {
        lines.push(Line::from(Span::styled(
            format!("  {}", fit_to_width(&achievement.title, (width as usize).saturating_sub(2))),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(indented(&achievement.description, width));
        lines.push(Line::default());
    }
    lines
}

pub fn contact_lines(profile: &Profile, width: u16) -> Vec<Line<'static>> {
    let mut lines = heading("Contact Me", width);
    let label_w = profile
        .contacts
        .iter()
        .map(|c| UnicodeWidthStr::width(c.label.as_str()))
        .max()
        .unwrap_or(0);
    for contact in &profile.contacts {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<label_w$}  ", contact.label),
                Style::default().fg(theme::DIM_TEXT),
            ),
            Span::styled(
                fit_to_width(&contact.url, (width as usize).saturating_sub(label_w + 4)),
                Style::default()
                    .fg(theme::LINK_FG)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }
    lines.push(Line::default());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::line_text;

    fn joined(lines: &[Line]) -> String {
        lines.iter().map(line_text).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_skills_grid_contains_every_skill() {
        let profile = Profile::default();
        let lines = skills_lines(&profile, 60);
        let text = joined(&lines);
        for skill in &profile.skills {
            assert!(text.contains(skill.as_str()), "missing {skill}");
        }
        for line in &lines {
            assert!(line.width() <= 60);
        }
    }

    #[test]
    fn test_narrow_skills_one_per_row() {
        let profile = Profile::default();
        let lines = skills_lines(&profile, 12);
        // heading + blank + one row per skill + trailing blank
        assert_eq!(lines.len(), profile.skills.len() + 3);
    }

    #[test]
    fn test_achievements_and_contacts() {
        let profile = Profile::default();
        let text = joined(&achievements_lines(&profile, 80));
        assert!(text.contains("Smart India Hackathon Winner"));
        assert!(text.contains("Tech Talk Speaker"));

        let text = joined(&contact_lines(&profile, 80));
        assert!(text.contains("https://github.com/Vaibhavkulshrestha12"));
        assert!(text.contains("mailto:vaibhav@example.com"));
    }
}
