//! Add screen implementation
//!
//! Modal form drawn over the list with title and description inputs,
//! an "Add" button and a "Cancel" affordance.

use ratatui::{
    prelude::*,
    widgets::{block::Title, Block, Borders, Clear, Paragraph},
};

use crate::app::mode::{Draft, DraftField};

const MODAL_WIDTH_PERCENT: u16 = 60;
const MODAL_HEIGHT: u16 = 15;

/// Add form component
#[derive(Debug)]
pub struct AddScreen {
    accent: Color,
}

impl AddScreen {
    pub fn new(accent: Color) -> Self {
        Self { accent }
    }

    /// Render the modal form over whatever is already in the frame
    pub fn render(&self, frame: &mut Frame, draft: &Draft) {
        let area = centered_rect(MODAL_WIDTH_PERCENT, MODAL_HEIGHT, frame.size());
        frame.render_widget(Clear, area);

        let accent = Style::default().fg(self.accent).add_modifier(Modifier::BOLD);
        let modal = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent))
            .title(
                Title::from(Span::styled(" Cancel (Esc) ", accent)).alignment(Alignment::Right),
            );
        let inner = modal.inner(area);
        frame.render_widget(modal, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Heading
                Constraint::Length(3), // Title input
                Constraint::Length(3), // Description input
                Constraint::Length(3), // Add button
                Constraint::Min(0),
            ])
            .split(inner);

        let heading = Paragraph::new("Add Todo")
            .style(accent)
            .alignment(Alignment::Center);
        frame.render_widget(heading, chunks[0]);

        self.render_input(
            frame,
            chunks[1],
            "Title",
            &draft.title,
            draft.focus == DraftField::Title,
        );
        self.render_input(
            frame,
            chunks[2],
            "Description",
            &draft.description,
            draft.focus == DraftField::Description,
        );
        self.render_button(frame, chunks[3]);

        let focused = match draft.focus {
            DraftField::Title => (chunks[1], &draft.title),
            DraftField::Description => (chunks[2], &draft.description),
        };
        let (x, y) = cursor_position(focused.0, focused.1);
        frame.set_cursor(x, y);
    }

    fn render_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        placeholder: &str,
        value: &str,
        focused: bool,
    ) {
        let border = if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(Color::Gray)
        };
        let content = if value.is_empty() {
            Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(value.to_string())
        };
        let input = Paragraph::new(Line::from(content))
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(input, area);
    }

    fn render_button(&self, frame: &mut Frame, area: Rect) {
        let button_area = centered_rect(30, 3, area);
        let button = Paragraph::new("Add (Enter)")
            .style(Style::default().fg(Color::White).bg(self.accent))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, button_area);
    }
}

impl Default for AddScreen {
    fn default() -> Self {
        Self::new(Color::Blue)
    }
}

/// Cursor cell just after the text inside a bordered input
fn cursor_position(area: Rect, value: &str) -> (u16, u16) {
    let max_x = area.right().saturating_sub(2);
    let len = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
    let x = area.x.saturating_add(1).saturating_add(len);
    (x.min(max_x), area.y.saturating_add(1))
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
