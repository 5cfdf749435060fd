use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub number: Color,
    pub identifier: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub operator: Color,
    pub type_name: Color, // Cyan for type names
    /// Background colors cycled over the operands of the selected operator
    pub operand_bg: [Color; 3],
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    identifier: Color::Rgb(205, 214, 244),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    operator: Color::Rgb(249, 226, 175),       // Yellow for operators
    type_name: Color::Rgb(148, 226, 213),      // Cyan/teal for type names
    operand_bg: [
        Color::Rgb(49, 80, 120),
        Color::Rgb(60, 100, 70),
        Color::Rgb(110, 70, 100),
    ],
};
