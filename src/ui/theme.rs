use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SECTION_TITLE: Color = Color::Rgb(0xf5, 0xc2, 0x42);
pub const COUNT_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const LOADING_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
