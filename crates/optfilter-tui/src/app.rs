use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use optfilter_core::{
    activate_in, ControlHost, FilterBar, FilterSettings, OptionList, Page, SelectControl,
    PLACEHOLDER_INDEX,
};

#[derive(Debug, Clone)]
pub struct App {
    pub page: Page,
    pub container: String,
    pub settings: FilterSettings,
    pub bar: Option<FilterBar>,
    /// Button under the keyboard focus; distinct from the active one.
    pub focus: usize,
    /// Row in the list of visible options.
    pub cursor: usize,
    pub show_help: bool,
    pub should_quit: bool,
    pub status: Option<String>,
    pub warning: Option<String>,
}

impl App {
    pub fn new(mut page: Page, container: String, settings: FilterSettings) -> Self {
        let (bar, warning) = match activate_in(&mut page, &container, &settings) {
            Ok(activation) => (Some(activation.bar), None),
            Err(err) => (None, Some(err.to_string())),
        };
        Self {
            page,
            container,
            settings,
            bar,
            focus: 0,
            cursor: 0,
            show_help: false,
            should_quit: false,
            status: None,
            warning,
        }
    }

    pub fn control(&self) -> Option<&OptionList> {
        self.page.control(&self.container)
    }

    pub fn visible_options(&self) -> Vec<(usize, &str)> {
        self.control()
            .map(|control| {
                control
                    .visible()
                    .map(|(index, option)| (index, option.label.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.control().map(|control| control.selected_index())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Left | KeyCode::Char('h') => self.move_focus(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_focus(1),
            KeyCode::Enter => self.click_focused(),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Home | KeyCode::Char('g') => self.cursor = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.cursor = self.visible_options().len().saturating_sub(1);
            }
            KeyCode::Char(' ') => self.select_under_cursor(),
            _ => {}
        }
    }

    fn move_focus(&mut self, delta: isize) {
        let Some(bar) = &self.bar else {
            return;
        };
        let last = bar.len().saturating_sub(1);
        self.focus = self.focus.saturating_add_signed(delta).min(last);
    }

    fn move_cursor(&mut self, delta: isize) {
        let last = self.visible_options().len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    fn click_focused(&mut self) {
        let Some(bar) = self.bar.as_mut() else {
            return;
        };
        let Some(control) = self.page.find_control(&self.container) else {
            return;
        };
        if let Some(button) = bar.click(self.focus, control, &self.settings.normalizer) {
            self.status = Some(format!("Filter: {}", button.caption));
        }
        self.cursor = 0;
    }

    fn select_under_cursor(&mut self) {
        let Some(&(index, _)) = self.visible_options().get(self.cursor) else {
            return;
        };
        if let Some(control) = self.page.find_control(&self.container) {
            control.set_selected_index(index);
        }
        if index == PLACEHOLDER_INDEX {
            self.status = None;
        } else {
            self.status = Some(format!("Selected option {}", index));
        }
    }
}
