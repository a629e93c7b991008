use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{
    Component, EventResult, sidebar::Sidebar, status_bar::StatusBar, tab_bar::TabBar,
};
use crate::data::config_data::AppConfig;
use crate::data::storage::DataDirectory;
use crate::screens::{
    about::AboutScreen, calculator::CalculatorScreen, sensitivity::SensitivityScreen,
    theory::TheoryScreen,
};
use crate::state::{AppState, TabId};

const SIDEBAR_WIDTH: u16 = 44;

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    sidebar: Sidebar,
    calculator_screen: CalculatorScreen,
    sensitivity_screen: SensitivityScreen,
    theory_screen: TheoryScreen,
    about_screen: AboutScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::from_state(AppState::default())
    }
}

impl App {
    pub fn new(config: AppConfig, docs_root: PathBuf, storage: Option<DataDirectory>) -> Self {
        Self::from_state(AppState::new(config, docs_root, storage))
    }

    fn from_state(state: AppState) -> Self {
        Self {
            state,
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            sidebar: Sidebar::new(),
            calculator_screen: CalculatorScreen::new(),
            sensitivity_screen: SensitivityScreen::new(),
            theory_screen: TheoryScreen::new(),
            about_screen: AboutScreen::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl App {
    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!("Starting dashboard");
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn save_defaults(&mut self) {
        match self.state.save_defaults() {
            Ok(()) => self.state.set_status("Saved current inputs as defaults".to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to save defaults");
                self.state.set_error(format!("Failed to save: {}", e));
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Create main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(chunks[1]);

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.sidebar.render(frame, content[0], &self.state);
        self.render_active_screen(frame, content[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Calculator => self.calculator_screen.render(frame, area, &self.state),
            TabId::Sensitivity => self.sensitivity_screen.render(frame, area, &self.state),
            TabId::Theory => self.theory_screen.render(frame, area, &self.state),
            TabId::About => self.about_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Status messages last until the next key press
        self.state.status_message = None;

        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('s') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.save_defaults();
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        // Try tab bar first
        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        // Sidebar inputs are live on every tab
        let result = self.sidebar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        // Then try active screen
        let result = match self.state.active_tab {
            TabId::Calculator => self
                .calculator_screen
                .handle_key(key_event, &mut self.state),
            TabId::Sensitivity => self
                .sensitivity_screen
                .handle_key(key_event, &mut self.state),
            TabId::Theory => self.theory_screen.handle_key(key_event, &mut self.state),
            TabId::About => self.about_screen.handle_key(key_event, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use tempfile::tempdir;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn render_to_string(app: &mut App) -> String {
        let backend = TestBackend::new(140, 50);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_every_tab_renders() {
        let dir = tempdir().unwrap();
        let mut app = App::new(AppConfig::default(), dir.path().to_path_buf(), None);

        let screen = render_to_string(&mut app);
        assert!(screen.contains("Security+ ROI Sandbox"));
        assert!(screen.contains("Adjust assumptions"));

        press(&mut app, KeyCode::Char('2'));
        assert!(render_to_string(&mut app).contains("Lever to vary"));

        press(&mut app, KeyCode::Char('3'));
        assert!(render_to_string(&mut app).contains("Could not find"));

        press(&mut app, KeyCode::Char('4'));
        assert!(render_to_string(&mut app).contains("About this companion"));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.state().exit);

        let mut app = App::default();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.state().exit);
    }

    #[test]
    fn test_sidebar_keys_work_on_any_tab() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.state().scenario.platform_cost, 750_000.0);
        assert_eq!(app.state().active_tab, TabId::Sensitivity);
    }

    #[test]
    fn test_escape_clears_error_and_keys_clear_status() {
        let mut app = App::default();
        // No data directory, so export fails
        press(&mut app, KeyCode::Char('e'));
        assert!(app.state().error_message.is_some());

        press(&mut app, KeyCode::Esc);
        assert!(app.state().error_message.is_none());

        press(&mut app, KeyCode::Char('m'));
        assert!(app.state().status_message.is_some());
        press(&mut app, KeyCode::Char('j'));
        assert!(app.state().status_message.is_none());
    }

    #[test]
    fn test_export_from_calculator_tab() {
        let dir = tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());
        let mut app = App::new(AppConfig::default(), dir.path().to_path_buf(), Some(storage));

        press(&mut app, KeyCode::Char('e'));

        let path = app.state().calculator_state.last_export.clone().unwrap();
        let csv = std::fs::read_to_string(path).unwrap();
        assert!(csv.starts_with("Baseline cost,New cost,Savings"));
        assert!(render_to_string(&mut app).contains("Last export"));
    }
}
