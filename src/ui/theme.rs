use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(170, 120, 230);
pub const HEADER_BG: Color = Color::Rgb(25, 20, 40);
pub const STATUS_BG: Color = Color::Rgb(30, 25, 45);
pub const SEPARATOR: Color = Color::Rgb(70, 55, 95);
pub const DIM_TEXT: Color = Color::Rgb(120, 115, 140);
pub const SECTION_HEADER_FG: Color = Color::White;
pub const CARD_TITLE_FG: Color = Color::Rgb(236, 110, 200);
pub const CARD_BORDER: Color = Color::Rgb(90, 70, 120);
pub const LINK_FG: Color = Color::Cyan;
pub const SKILL_FG: Color = Color::Rgb(200, 190, 230);
pub const STAR_FG: Color = Color::Yellow;
pub const ERROR_FG: Color = Color::LightRed;
pub const KEY_FG: Color = Color::Cyan;
