//! Main TUI application state and logic

use crate::blocks::{Block, Parens};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::Duration;

/// How a block relates to the selected operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Part of the selected operator
    Selected,
    /// Inside the n-th operand of the selected operator
    Operand(usize),
    Plain,
}

/// The main application state
pub struct App {
    /// The expression as typed
    pub source: String,

    /// Annotated blocks of the expression
    pub blocks: Vec<Block>,

    /// Index of the first block of every operator, in text order
    pub operators: Vec<usize>,

    /// Position in `operators` of the selected operator
    pub selected: usize,

    /// Rendering currently shown
    pub parens: Parens,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app for an already generated block sequence
    pub fn new(source: String, blocks: Vec<Block>, parens: Parens) -> Self {
        let mut operators: Vec<usize> = Vec::new();
        for (index, block) in blocks.iter().enumerate() {
            let seen = operators.iter().any(|&first| same_operator(&blocks[first], block));
            if block.is_operator() && !seen {
                operators.push(index);
            }
        }

        let status_message = match operators.first() {
            Some(&first) => blocks[first].description().to_string(),
            None => String::from("No operators"),
        };

        App {
            source,
            blocks,
            operators,
            selected: 0,
            parens,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// The selected operator's first block
    pub fn selected_block(&self) -> Option<&Block> {
        self.operators
            .get(self.selected)
            .and_then(|&index| self.blocks.get(index))
    }

    /// Relation of block `index` to the selected operator
    pub fn highlight(&self, index: usize) -> Highlight {
        let (Some(selected), Some(block)) = (self.selected_block(), self.blocks.get(index)) else {
            return Highlight::Plain;
        };
        if same_operator(selected, block) {
            return Highlight::Selected;
        }
        selected
            .operands()
            .iter()
            .position(|range| range.contains(&index))
            .map_or(Highlight::Plain, Highlight::Operand)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Expression on top, block list below, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_expression_pane(frame, chunks[0], self);
        super::panes::render_block_pane(frame, chunks[1], self);
        super::panes::render_status_bar(frame, chunks[2], &self.status_message, self.parens);
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => self.select_previous(),
            KeyCode::Right | KeyCode::Tab => self.select_next(),
            KeyCode::Home => self.select(0),
            KeyCode::End => self.select(self.operators.len().saturating_sub(1)),
            KeyCode::Char('m') | KeyCode::Char('M') => {
                self.parens = self.parens.toggled();
                self.status_message = format!("Showing {}", self.parens.label());
            }
            _ => {}
        }
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.operators.len() {
            self.select(self.selected + 1);
        }
    }

    fn select_previous(&mut self) {
        if self.selected > 0 {
            self.select(self.selected - 1);
        }
    }

    fn select(&mut self, position: usize) {
        if position >= self.operators.len() {
            return;
        }
        self.selected = position;
        if let Some(block) = self.selected_block() {
            self.status_message = block.description().to_string();
        }
    }
}

/// Parts of one operator (`?` and `:`, or the parentheses and commas of a
/// call) are separate blocks sharing kind and operand ranges.
fn same_operator(a: &Block, b: &Block) -> bool {
    match (a, b) {
        (
            Block::Operator {
                kind: kind_a,
                operands: operands_a,
                ..
            },
            Block::Operator {
                kind: kind_b,
                operands: operands_b,
                ..
            },
        ) => kind_a == kind_b && operands_a == operands_b,
        _ => false,
    }
}
