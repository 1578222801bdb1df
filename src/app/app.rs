//! Main application controller
//!
//! Manages the TUI, screen state, and rendering loop. The screen state
//! notifies a single render callback which marks the next frame dirty.

use std::{cell::Cell, cell::RefCell, rc::Rc};

use crossterm::event::KeyEvent;
use ratatui::Frame;
use tracing::{debug, info};

use crate::{
    app::{
        dispatcher::Change,
        mode::ViewMode,
        screens::{AddScreen, ListScreen},
        state::{NavigationAction, ScreenState},
        tui::{TermEvent, Tui},
    },
    config::UiConfig,
    Result,
};

/// TUI application controller
pub struct App {
    /// Single owner of the todo store and view mode
    state: ScreenState,
    /// Screen components
    list_screen: ListScreen,
    add_screen: AddScreen,
    /// Set by the render callback, cleared after drawing
    needs_redraw: Rc<Cell<bool>>,
    should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &UiConfig) -> Result<Self> {
        config.validate()?;
        let accent = config.accent_color()?;

        let needs_redraw = Rc::new(Cell::new(true));
        let mut state = ScreenState::new();
        let flag = needs_redraw.clone();
        state.subscribe(Rc::new(RefCell::new(move |change: &Change| {
            debug!(?change, "state changed");
            flag.set(true);
        })));

        Ok(Self {
            state,
            list_screen: ListScreen::new(accent, config.show_help),
            add_screen: AddScreen::new(accent),
            needs_redraw,
            should_quit: false,
        })
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn list_screen(&self) -> &ListScreen {
        &self.list_screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw.get()
    }

    /// Seed the store; the frame drawn before this shows the loading indicator
    pub fn load_initial(&mut self) -> bool {
        self.state.load_initial()
    }

    /// Run the main application loop
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        self.draw(tui)?;
        self.load_initial();

        while !self.should_quit {
            if self.needs_redraw.replace(false) {
                self.draw(tui)?;
            }
            match tui.next_event()? {
                Some(TermEvent::Key(key)) => self.handle_key(key),
                Some(TermEvent::Resize) => self.needs_redraw.set(true),
                None => {}
            }
        }

        info!(items = self.state.items().len(), "leaving todo screen");
        Ok(())
    }

    fn draw(&mut self, tui: &mut Tui) -> Result<()> {
        tui.draw(|f| self.render(f))?;
        Ok(())
    }

    /// Draw the list, with the add form on top while it is open
    pub fn render(&mut self, f: &mut Frame) {
        self.list_screen
            .render(f, self.state.items(), self.state.is_ready());
        if self.state.mode() == ViewMode::Add {
            self.add_screen.render(f, self.state.draft());
        }
    }

    /// Handle a key press and update state
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = ScreenState::key_to_navigation(self.state.mode(), key);
        let len = self.state.items().len();

        match action {
            NavigationAction::Quit => self.should_quit = true,
            NavigationAction::Up => {
                self.list_screen.select_previous(len);
                self.needs_redraw.set(true);
            }
            NavigationAction::Down => {
                self.list_screen.select_next(len);
                self.needs_redraw.set(true);
            }
            NavigationAction::Open => {
                self.state.press_plus();
            }
            NavigationAction::Delete => {
                if let Some(id) = self.list_screen.selected_id(self.state.items()) {
                    self.state.press_delete(id);
                    self.list_screen.clamp(self.state.items().len());
                }
            }
            NavigationAction::Submit => {
                self.state.press_add();
            }
            NavigationAction::Back => {
                self.state.press_cancel();
            }
            NavigationAction::NextField => {
                self.state.focus_next_field();
            }
            NavigationAction::Input(c) => {
                self.state.type_char(c);
            }
            NavigationAction::Erase => {
                self.state.backspace();
            }
            NavigationAction::None => {}
        }
    }
}
