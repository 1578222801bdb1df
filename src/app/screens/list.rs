//! List screen implementation
//!
//! Shows the todo items with a "+" affordance in the title bar, row
//! selection for deletion, and a loading indicator until the store is seeded.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::TodoItem;

/// List screen component with row selection
#[derive(Debug)]
pub struct ListScreen {
    selected_index: usize,
    list_state: ListState,
    accent: Color,
    show_help: bool,
}

impl ListScreen {
    pub fn new(accent: Color, show_help: bool) -> Self {
        Self {
            selected_index: 0,
            list_state: ListState::default(),
            accent,
            show_help,
        }
    }

    /// Index of the highlighted row
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Id of the highlighted item, if any
    pub fn selected_id(&self, items: &[TodoItem]) -> Option<u64> {
        items.get(self.selected_index).map(|t| t.id)
    }

    /// Move selection up, wrapping to the last row
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = len - 1;
        }
    }

    /// Move selection down, wrapping to the first row
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if self.selected_index < len - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }

    /// Keep the selection inside the list after it shrinks
    pub fn clamp(&mut self, len: usize) {
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Render the list screen
    pub fn render(&mut self, f: &mut Frame, items: &[TodoItem], ready: bool) {
        let size = f.size();

        let help_height = if self.show_help { 3 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),           // Title and "+"
                Constraint::Min(3),              // Items
                Constraint::Length(help_height), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        if ready {
            self.render_items(f, chunks[1], items);
        } else {
            self.render_loading(f, chunks[1]);
        }
        if self.show_help {
            self.render_help(f, chunks[2]);
        }
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let accent = Style::default().fg(self.accent).add_modifier(Modifier::BOLD);
        let title = Paragraph::new("Todos")
            .style(accent)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Title::from(Span::styled(" + ", accent)).alignment(Alignment::Right)),
            );
        f.render_widget(title, area);
    }

    fn render_loading(&self, f: &mut Frame, area: Rect) {
        let loading = Paragraph::new("Loading...")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(loading, area);
    }

    fn render_items(&mut self, f: &mut Frame, area: Rect, items: &[TodoItem]) {
        let rows: Vec<ListItem> = if items.is_empty() {
            vec![ListItem::new("Nothing to do. Press + to add a todo.")]
        } else {
            items
                .iter()
                .map(|todo| {
                    ListItem::new(vec![
                        Line::from(Span::styled(
                            todo.title.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        )),
                        Line::from(Span::styled(
                            todo.description.clone(),
                            Style::default().fg(Color::Gray),
                        )),
                    ])
                })
                .collect()
        };

        let list = List::new(rows)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().bg(self.accent).fg(Color::White))
            .highlight_symbol(">> ");

        self.clamp(items.len());
        self.list_state
            .select((!items.is_empty()).then_some(self.selected_index));
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key = Style::default().fg(self.accent).add_modifier(Modifier::BOLD);
        let help_text = Line::from(vec![
            Span::styled("+", key),
            Span::raw(" Add  "),
            Span::styled("↑↓", key),
            Span::raw(" Navigate  "),
            Span::styled("d", key),
            Span::raw(" Delete  "),
            Span::styled("q", key),
            Span::raw(" Quit"),
        ]);

        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, area);
    }
}

impl Default for ListScreen {
    fn default() -> Self {
        Self::new(Color::Blue, true)
    }
}
