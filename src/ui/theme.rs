use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x1d, 0xb9, 0x54);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const PRIMARY_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SECONDARY_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SWITCH_OFF: Color = Color::Rgb(0x4b, 0x55, 0x63);
pub const LARGE_SWITCH_OFF: Color = Color::Rgb(0x37, 0x41, 0x51);
pub const INVERSE_TEXT: Color = Color::Rgb(0x11, 0x11, 0x11);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
