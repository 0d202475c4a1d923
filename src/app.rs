use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::actions::QuickAction;
use crate::config::Config;
use crate::stats::TaskStats;
use crate::task_store::TaskStore;
use crate::view::{filter_and_sort, SortKey, StatusFilter, TaskListing};

/// Source of "today" for due-date urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// Session state: the task store plus the current control selections.
#[derive(Debug)]
pub struct App {
    pub config: Config,
    pub store: TaskStore,
    pub clock: Clock,
    pub filter: StatusFilter,
    pub sort: SortKey,
    pub selected_task: usize,
    pub focused_action: usize,
    pub message: Option<QuickAction>,
}

impl App {
    pub fn new(config: Config, store: TaskStore, clock: Clock) -> Self {
        Self {
            config,
            store,
            clock,
            filter: StatusFilter::default(),
            sort: SortKey::default(),
            selected_task: 0,
            focused_action: 0,
            message: None,
        }
    }

    pub fn with_controls(mut self, filter: StatusFilter, sort: SortKey) -> Self {
        self.filter = filter;
        self.sort = sort;
        self
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::compute(self.store.tasks())
    }

    pub fn listing(&self) -> TaskListing<'_> {
        filter_and_sort(self.store.tasks(), self.filter, self.sort)
    }

    pub fn focused(&self) -> QuickAction {
        QuickAction::ALL[self.focused_action % QuickAction::ALL.len()]
    }

    pub fn press(&mut self, action: QuickAction) {
        info!(action = action.label(), "quick action pressed");
        self.message = Some(action);
    }

    fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.selected_task = 0;
        debug!(filter = %self.filter, sort = %self.sort, "controls changed");
    }

    fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.selected_task = 0;
        debug!(filter = %self.filter, sort = %self.sort, "controls changed");
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }
        let buttons = QuickAction::ALL.len();
        match key.code {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char('f') => self.set_filter(self.filter.next()),
            KeyCode::Char('F') => self.set_filter(self.filter.prev()),
            KeyCode::Char('s') => self.set_sort(self.sort.next()),
            KeyCode::Char('S') => self.set_sort(self.sort.prev()),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_task = self.selected_task.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_task + 1 < self.listing().len() {
                    self.selected_task += 1;
                }
            }
            KeyCode::Left | KeyCode::BackTab => {
                self.focused_action = (self.focused_action + buttons - 1) % buttons;
            }
            KeyCode::Right | KeyCode::Tab => {
                self.focused_action = (self.focused_action + 1) % buttons;
            }
            KeyCode::Enter => self.press(self.focused()),
            KeyCode::Char(c) => {
                if let Some(action) = QuickAction::from_shortcut(c) {
                    self.focused_action = QuickAction::ALL
                        .iter()
                        .position(|a| *a == action)
                        .unwrap_or(0);
                    self.press(action);
                }
            }
            KeyCode::Esc => self.message = None,
            _ => {}
        }
        Action::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Status;

    fn app() -> App {
        let today = NaiveDate::from_ymd_opt(2024, 8, 20).unwrap();
        App::new(Config::default(), TaskStore::sample().unwrap(), Clock::Fixed(today))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(app.handle_key(key(KeyCode::Char('c'))), Action::Continue);
    }

    #[test]
    fn filter_key_cycles_and_resets_selection() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selected_task, 2);
        app.handle_key(key(KeyCode::Char('f')));
        assert_eq!(app.filter, StatusFilter::Only(Status::Pending));
        assert_eq!(app.selected_task, 0);
        assert_eq!(app.listing().len(), 3);
        app.handle_key(key(KeyCode::Char('F')));
        assert_eq!(app.filter, StatusFilter::All);
    }

    #[test]
    fn sort_key_cycles() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.sort, SortKey::Priority);
        app.handle_key(key(KeyCode::Char('S')));
        app.handle_key(key(KeyCode::Char('S')));
        assert_eq!(app.sort, SortKey::Status);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = app().with_controls(StatusFilter::Only(Status::Completed), SortKey::DueDate);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selected_task, 0);
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.selected_task, 0);
    }

    #[test]
    fn buttons_show_message_without_touching_tasks() {
        let mut app = app();
        let before = app.store.tasks().to_vec();
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.message, Some(QuickAction::AskForHelp));
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.message, Some(QuickAction::ViewProfile));
        assert_eq!(app.focused(), QuickAction::ViewProfile);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.message, None);
        assert_eq!(app.store.tasks(), before.as_slice());
    }

    #[test]
    fn focus_wraps_around() {
        let mut app = app();
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.focused(), QuickAction::ViewProfile);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focused(), QuickAction::SubmitWork);
    }
}
