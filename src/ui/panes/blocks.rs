//! Block list pane
//!
//! One row per generated block: its index, text, description and, for
//! operators, the operand ranges. Rows hidden in the current rendering are
//! dimmed, and rows belonging to the selected operator are highlighted.

use crate::blocks::{self, Parens};
use crate::ui::app::{App, Highlight};
use crate::ui::panes::block_style;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Format operand ranges as `[0..1, 2..7]`
pub fn format_ranges(block: &blocks::Block) -> String {
    let ranges: Vec<String> = block
        .operands()
        .iter()
        .map(|r| format!("{}..{}", r.start, r.end))
        .collect();
    if ranges.is_empty() {
        String::new()
    } else {
        format!("[{}]", ranges.join(", "))
    }
}

fn block_line(app: &App, index: usize, block: &blocks::Block) -> Line<'static> {
    let highlight = app.highlight(index);
    let hidden = !block.is_visible(app.parens);

    let row_style = match highlight {
        Highlight::Selected => Style::default().bg(DEFAULT_THEME.current_line_bg),
        Highlight::Operand(n) => {
            Style::default().bg(DEFAULT_THEME.operand_bg[n % DEFAULT_THEME.operand_bg.len()])
        }
        Highlight::Plain => Style::default(),
    };
    let text_style = if hidden {
        Style::default().fg(DEFAULT_THEME.comment).add_modifier(Modifier::CROSSED_OUT)
    } else {
        block_style(block).add_modifier(Modifier::BOLD)
    };

    Line::from(vec![
        Span::styled(format!("{:>4} ", index), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(format!("{:<16}", format!("'{}'", block.text())), text_style),
        Span::styled(
            format!("{:<44}", block.description()),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled(format_ranges(block), Style::default().fg(DEFAULT_THEME.primary)),
    ])
    .style(row_style)
}

/// Render the block list pane, scrolled so the selected operator stays visible
pub fn render_block_pane(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .blocks
        .iter()
        .enumerate()
        .map(|(index, block)| block_line(app, index, block))
        .collect();

    let hidden = app
        .blocks
        .iter()
        .filter(|b| !b.is_visible(app.parens))
        .count();
    let title = match app.parens {
        Parens::Full => format!(" Blocks ({}) ", app.blocks.len()),
        Parens::Minimal => format!(" Blocks ({}, {} hidden) ", app.blocks.len(), hidden),
    };

    // Keep the selected row inside the pane's inner height
    let visible_rows = area.height.saturating_sub(2) as usize;
    let selected_row = app.operators.get(app.selected).copied().unwrap_or(0);
    let scroll = (selected_row + 1).saturating_sub(visible_rows);

    let border = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .title(title);

    let paragraph = Paragraph::new(lines)
        .block(border)
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);
}
