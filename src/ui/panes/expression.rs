//! Expression pane rendering
//!
//! Shows the expression in the current rendering. Every visible block becomes
//! one span styled by its kind; the selected operator is inverted and each of
//! its operands gets its own background.

use crate::blocks::render::pieces;
use crate::blocks::{self, OperandKind};
use crate::ui::app::{App, Highlight};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Base style of a block, before highlighting
pub fn block_style(block: &blocks::Block) -> Style {
    let fg = match block {
        blocks::Block::Delimiter { optional: true, .. } => DEFAULT_THEME.comment,
        blocks::Block::Delimiter { optional: false, .. } => DEFAULT_THEME.secondary,
        blocks::Block::Operand { kind, .. } => match kind {
            OperandKind::Integer | OperandKind::Float => DEFAULT_THEME.number,
            OperandKind::Identifier => DEFAULT_THEME.identifier,
            OperandKind::Type => DEFAULT_THEME.type_name,
        },
        blocks::Block::Operator { .. } => DEFAULT_THEME.operator,
    };
    Style::default().fg(fg)
}

fn highlighted(style: Style, highlight: Highlight) -> Style {
    match highlight {
        Highlight::Selected => style
            .bg(DEFAULT_THEME.border_focused)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        Highlight::Operand(n) => {
            style.bg(DEFAULT_THEME.operand_bg[n % DEFAULT_THEME.operand_bg.len()])
        }
        Highlight::Plain => style,
    }
}

/// Spans of the expression line for the app's current rendering
pub fn expression_line(app: &App) -> Line<'_> {
    let mut spans = Vec::new();
    for piece in pieces(&app.blocks, app.parens) {
        if piece.spaced {
            spans.push(Span::raw(" "));
        }
        let style = block_style(&app.blocks[piece.index]);
        spans.push(Span::styled(piece.text, highlighted(style, app.highlight(piece.index))));
    }
    Line::from(spans)
}

/// Render the expression pane
pub fn render_expression_pane(frame: &mut Frame, area: Rect, app: &App) {
    let border = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused))
        .title(format!(" {} ", app.parens.label()));

    let paragraph = Paragraph::new(expression_line(app)).block(border);
    frame.render_widget(paragraph, area);
}
