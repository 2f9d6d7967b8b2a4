use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, info};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::AppConfig;
use crate::model::task::TaskId;
use crate::ops::row_ops::{CommitOutcome, TaskRow, TaskRows};
use crate::ops::task_ops::TaskList;
use crate::ops::text_input::{NewTaskInput, TextBuffer, single_line};

use super::input;
use super::render;
use super::theme::Theme;

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The new-task input field
    Input,
    /// The task list
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Transient message shown in the status row until the next key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Main application state
pub struct App {
    /// Canonical task collection
    pub tasks: TaskList,
    /// Per-row view state, rebuilt from `tasks` on change
    pub rows: TaskRows,
    pub input: NewTaskInput,
    pub focus: Focus,
    /// Cursor index into `rows`
    pub cursor: usize,
    /// First visible row in the list
    pub scroll_offset: usize,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub show_help: bool,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let tasks = TaskList::new();
        let mut rows = TaskRows::new(config.list.resync);
        rows.sync_if_stale(&tasks);
        App {
            tasks,
            rows,
            input: NewTaskInput::default(),
            focus: Focus::Input,
            cursor: 0,
            scroll_offset: 0,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            show_help: false,
            status: None,
            should_quit: false,
        }
    }

    /// Add initial tasks; blank titles are skipped. Line breaks become
    /// spaces, as they do in the input field.
    pub fn seed<S: AsRef<str>>(&mut self, titles: &[S]) {
        for title in titles {
            let title = single_line(title.as_ref());
            let title = title.trim();
            if !title.is_empty() {
                self.tasks.add_task(title);
            }
        }
        self.sync();
    }

    /// Bring rows up to date with the task list and keep the cursor in range.
    pub fn sync(&mut self) {
        self.rows.sync_if_stale(&self.tasks);
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
    }

    pub fn selected_row(&self) -> Option<&TaskRow> {
        self.rows.rows().get(self.cursor)
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        self.selected_row().map(|r| r.id)
    }

    /// Whether the row under the cursor is in edit mode
    pub fn cursor_row_editing(&self) -> bool {
        self.selected_row().is_some_and(TaskRow::is_editing)
    }

    /// Header label, e.g. "3 tasks"
    pub fn count_label(&self) -> String {
        match self.tasks.len() {
            1 => "1 task".to_string(),
            n => format!("{} tasks", n),
        }
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind: StatusKind::Error,
        });
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind: StatusKind::Info,
        });
    }

    // -----------------------------------------------------------------------
    // Event handlers

    /// Add a task from the input field. Blank input never reaches the list.
    pub fn submit_new_task(&mut self) -> Option<TaskId> {
        let Some(title) = self.input.submit() else {
            self.set_error("title cannot be empty");
            return None;
        };
        let id = self.tasks.add_task(title);
        self.sync();
        self.cursor = self.rows.len().saturating_sub(1);
        Some(id)
    }

    /// Toggle the row under the cursor. Only available on display rows.
    pub fn toggle_at_cursor(&mut self) -> bool {
        let Some(id) = self.display_row_id() else {
            return false;
        };
        let changed = self.tasks.toggle_done(id);
        self.sync();
        changed
    }

    /// Delete the row under the cursor. Only available on display rows.
    pub fn remove_at_cursor(&mut self) -> bool {
        let Some(id) = self.display_row_id() else {
            return false;
        };
        let changed = self.tasks.remove_task(id);
        self.sync();
        if changed {
            self.set_info("task deleted");
        }
        changed
    }

    /// Open the row under the cursor for editing.
    pub fn edit_at_cursor(&mut self) -> bool {
        match self.display_row_id() {
            Some(id) => self.rows.begin_edit(id),
            None => false,
        }
    }

    /// Apply a change to the draft of the row under the cursor.
    pub fn edit_draft_at_cursor(&mut self, f: impl FnOnce(&mut TextBuffer)) -> bool {
        match self.selected_id() {
            Some(id) => self.rows.update_draft(id, f),
            None => false,
        }
    }

    /// Save the draft of the row under the cursor.
    pub fn commit_at_cursor(&mut self) -> CommitOutcome {
        let Some(id) = self.selected_id() else {
            return CommitOutcome::NotEditing;
        };
        let outcome = self.rows.commit_edit(id, &mut self.tasks);
        if outcome == CommitOutcome::Rejected {
            self.set_error("title cannot be empty");
        }
        self.sync();
        outcome
    }

    /// Close the editor on the row under the cursor without saving.
    pub fn cancel_at_cursor(&mut self) -> bool {
        match self.selected_id() {
            Some(id) => self.rows.cancel_edit(id, &self.tasks),
            None => false,
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            self.cursor = 0;
            return;
        }
        let max = self.rows.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(max);
    }

    pub fn cursor_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_bottom(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
    }

    /// Adjust `scroll_offset` so the cursor row is inside a window of `height` rows.
    pub fn scroll_to_cursor(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
        let max_offset = self.rows.len().saturating_sub(height);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    fn display_row_id(&self) -> Option<TaskId> {
        self.selected_row()
            .filter(|r| !r.is_editing())
            .map(|r| r.id)
    }
}

/// Startup options for the TUI
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config: AppConfig,
    /// Titles to add before the first frame
    pub seed: Vec<String>,
}

/// Run the TUI application
pub fn run(options: RunOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(&options.config);
    app.seed(&options.seed);
    info!(
        "event=tui_start tasks={} resync={}",
        app.tasks.len(),
        app.rows.policy()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    info!("event=tui_exit tasks={}", app.tasks.len());
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            let started = Instant::now();
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
            debug!("event=input_handled micros={}", started.elapsed().as_micros());
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::ResyncPolicy;
    use crate::ops::row_ops::RowMode;

    fn app_with(titles: &[&str]) -> App {
        let mut app = App::new(&AppConfig::default());
        app.seed(titles);
        app
    }

    fn titles(app: &App) -> Vec<String> {
        app.tasks.tasks().iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn seed_skips_blank_titles() {
        let app = app_with(&["a", "  ", "", "b"]);
        assert_eq!(titles(&app), vec!["a", "b"]);
        assert_eq!(app.rows.len(), 2);
    }

    #[test]
    fn seed_flattens_line_breaks() {
        let mut app = app_with(&["a\nb", "c\r\nd"]);
        assert_eq!(titles(&app), vec!["a b", "c d"]);

        // an untouched edit saves the same title back
        let rev = app.tasks.revision();
        assert!(app.edit_at_cursor());
        let draft = app.selected_row().unwrap().draft().unwrap().text().to_string();
        assert_eq!(draft, app.tasks.tasks()[0].title);
        assert_eq!(app.commit_at_cursor(), CommitOutcome::Committed);
        assert_eq!(app.tasks.tasks()[0].title, "a b");
        assert_eq!(app.tasks.revision(), rev + 1);
    }

    #[test]
    fn submit_adds_and_selects_new_task() {
        let mut app = app_with(&["a"]);
        app.input.buffer.insert_str("Buy milk");
        let id = app.submit_new_task().unwrap();
        assert_eq!(titles(&app), vec!["a", "Buy milk"]);
        assert_eq!(app.selected_id(), Some(id));
        assert_eq!(app.input.buffer.text(), "");
        assert!(app.status.is_none());
    }

    #[test]
    fn blank_submit_is_rejected_with_message() {
        let mut app = app_with(&[]);
        app.input.buffer.insert_str("   ");
        assert!(app.submit_new_task().is_none());
        assert!(app.tasks.is_empty());
        assert_eq!(
            app.status.as_ref().map(|s| s.kind),
            Some(StatusKind::Error)
        );
    }

    #[test]
    fn count_label_pluralizes() {
        let mut app = app_with(&[]);
        assert_eq!(app.count_label(), "0 tasks");
        app.seed(&["a"]);
        assert_eq!(app.count_label(), "1 task");
        app.seed(&["b"]);
        assert_eq!(app.count_label(), "2 tasks");
    }

    #[test]
    fn buy_milk_scenario() {
        let mut app = app_with(&[]);
        app.input.buffer.insert_str("Buy milk");
        let id = app.submit_new_task().unwrap();
        assert!(!app.tasks.get(id).unwrap().done);

        assert!(app.toggle_at_cursor());
        assert!(app.tasks.get(id).unwrap().done);

        assert!(app.edit_at_cursor());
        app.edit_draft_at_cursor(|d| {
            d.clear();
            d.insert_str("Buy oat milk");
        });
        assert_eq!(app.commit_at_cursor(), CommitOutcome::Committed);
        let task = app.tasks.get(id).unwrap();
        assert_eq!(task.title, "Buy oat milk");
        assert!(task.done);

        assert!(app.remove_at_cursor());
        assert!(app.tasks.is_empty());
        assert!(app.rows.is_empty());
    }

    #[test]
    fn display_controls_are_unavailable_while_editing() {
        let mut app = app_with(&["a"]);
        app.edit_at_cursor();
        assert!(!app.toggle_at_cursor());
        assert!(!app.remove_at_cursor());
        assert!(!app.edit_at_cursor());
        assert_eq!(app.tasks.len(), 1);
        assert!(!app.tasks.tasks()[0].done);
    }

    #[test]
    fn toggling_another_row_resets_open_edit() {
        let mut app = app_with(&["A", "B"]);
        app.edit_at_cursor();
        app.edit_draft_at_cursor(|d| d.insert_str(" unsaved"));
        app.move_cursor(1);
        assert!(app.toggle_at_cursor());
        let row_a = &app.rows.rows()[0];
        assert_eq!(row_a.mode, RowMode::Display);
        assert_eq!(row_a.title, "A");
    }

    #[test]
    fn keep_drafts_policy_from_config() {
        let mut config = AppConfig::default();
        config.list.resync = ResyncPolicy::KeepDrafts;
        let mut app = App::new(&config);
        app.seed(&["A", "B"]);
        app.edit_at_cursor();
        app.move_cursor(1);
        app.toggle_at_cursor();
        assert!(app.rows.rows()[0].is_editing());
    }

    #[test]
    fn cancel_restores_title() {
        let mut app = app_with(&["A"]);
        app.edit_at_cursor();
        app.edit_draft_at_cursor(|d| d.insert_str("zzz"));
        assert!(app.cancel_at_cursor());
        assert_eq!(app.rows.rows()[0].title, "A");
        assert!(!app.cursor_row_editing());
    }

    #[test]
    fn blank_commit_keeps_editing() {
        let mut app = app_with(&["A"]);
        app.edit_at_cursor();
        app.edit_draft_at_cursor(TextBuffer::clear);
        assert_eq!(app.commit_at_cursor(), CommitOutcome::Rejected);
        assert!(app.cursor_row_editing());
        assert_eq!(app.tasks.tasks()[0].title, "A");
    }

    #[test]
    fn cursor_clamps_after_removal() {
        let mut app = app_with(&["a", "b", "c"]);
        app.cursor_to_bottom();
        assert_eq!(app.cursor, 2);
        app.remove_at_cursor();
        assert_eq!(app.cursor, 1);
        app.move_cursor(-5);
        assert_eq!(app.cursor, 0);
        app.move_cursor(10);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn scroll_follows_cursor() {
        let titles: Vec<String> = (0..10).map(|i| format!("task {}", i)).collect();
        let mut app = App::new(&AppConfig::default());
        app.seed(&titles);
        app.cursor = 7;
        app.scroll_to_cursor(3);
        assert_eq!(app.scroll_offset, 5);
        app.cursor = 2;
        app.scroll_to_cursor(3);
        assert_eq!(app.scroll_offset, 2);
        app.scroll_to_cursor(20);
        assert_eq!(app.scroll_offset, 0);
    }
}
