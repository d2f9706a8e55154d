//! Main application state and logic.

pub mod input;

use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures::StreamExt;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;

use satchel_core::{format_file_size, stage_file, Session, StagedFile};
use satchel_preview::{save_copy, PagerEvent};

use crate::event::KeyAction;
use crate::preview::PreviewState;
use crate::theme::Theme;
use crate::ui::{self, AppLayout};
use crate::TuiConfig;

use self::input::{InputResult, InputState};

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// Event loop tick interval in milliseconds.
const TICK_INTERVAL_MS: u64 = 50;

/// Page units scrolled per preview-scroll keypress.
const PREVIEW_SCROLL_STEP: u16 = 4;

/// Application mode representing the current UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    /// Adding a file (path input mode).
    Adding,
    Help,
    Quit,
}

/// Main application state.
pub struct App {
    /// Staged files and the active preview selection.
    session: Session,
    /// Current mode.
    mode: AppMode,
    /// Color theme.
    theme: Theme,
    /// Cursor row in the file list.
    cursor: usize,
    /// Preview pane state.
    preview: PreviewState,
    /// Channel for the in-flight page-count resolution, if any.
    pager_rx: Option<mpsc::Receiver<PagerEvent>>,
    /// Input state for the add-file prompt.
    input: Option<InputState>,
    /// Last operation result message (success flag, text).
    status: Option<(bool, String)>,
    /// Session configuration.
    config: TuiConfig,
    /// Flag indicating UI needs redraw.
    needs_redraw: bool,
}

impl App {
    /// Create a new application with files already staged.
    pub fn new(staged: Vec<StagedFile>) -> Self {
        Self::with_config(staged, TuiConfig::default())
    }

    /// Create a new application with custom config.
    pub fn with_config(staged: Vec<StagedFile>, config: TuiConfig) -> Self {
        let mut session = Session::new();
        session.add_files(staged);

        Self {
            session,
            mode: AppMode::default(),
            theme: Theme::dark(),
            cursor: 0,
            preview: PreviewState::new(),
            pager_rx: None,
            input: None,
            status: None,
            config,
            needs_redraw: true,
        }
    }

    /// Run the application with async event loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        let period = Duration::from_millis(TICK_INTERVAL_MS);
        let mut interval = tokio::time::interval(period);
        let mut events = EventStream::new();

        while self.mode != AppMode::Quit {
            if self.needs_redraw {
                terminal.draw(|frame| self.render(frame))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                Some(Ok(event)) = events.next() => {
                    if let Event::Key(key_event) = event {
                        if key_event.kind == crossterm::event::KeyEventKind::Press {
                            self.handle_key(key_event);
                        }
                    }
                    self.needs_redraw = true;
                }

                Some(event) = async {
                    if let Some(rx) = &mut self.pager_rx {
                        rx.recv().await
                    } else {
                        std::future::pending().await
                    }
                } => {
                    self.handle_pager_event(event);
                    self.needs_redraw = true;
                }

                _ = interval.tick() => {
                    // Periodic tick for background updates
                }
            }
        }

        // Best-effort teardown: release every still-live blob.
        self.session.close();
        Ok(())
    }

    /// Dispatch a key event according to the current mode.
    fn handle_key(&mut self, key_event: KeyEvent) {
        match self.mode {
            AppMode::Adding => self.handle_add_input(key_event),
            AppMode::Help => {
                match KeyAction::from_key_event(key_event) {
                    KeyAction::Quit | KeyAction::ForceQuit => self.mode = AppMode::Quit,
                    KeyAction::None => {}
                    _ => self.mode = AppMode::Normal,
                }
            }
            _ => {
                let action = KeyAction::from_key_event(key_event);
                self.handle_action(action);
            }
        }
    }

    /// Handle an action in normal mode.
    fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            KeyAction::MoveDown => {
                if self.cursor + 1 < self.session.len() {
                    self.cursor += 1;
                }
            }
            KeyAction::JumpToTop => self.cursor = 0,
            KeyAction::JumpToBottom => self.cursor = self.session.len().saturating_sub(1),

            KeyAction::ScrollPreviewUp => self.preview.scroll_up(PREVIEW_SCROLL_STEP),
            KeyAction::ScrollPreviewDown => self.preview.scroll_down(PREVIEW_SCROLL_STEP),

            KeyAction::View => self.view_under_cursor(),
            KeyAction::Delete => self.delete_under_cursor(),
            KeyAction::Add => {
                self.input = Some(InputState::new());
                self.mode = AppMode::Adding;
            }
            KeyAction::Save => self.save_active_copy(),

            KeyAction::ToggleTheme => self.theme = self.theme.toggle(),
            KeyAction::ToggleHelp => self.mode = AppMode::Help,
            KeyAction::Cancel => self.close_preview(),

            KeyAction::Quit | KeyAction::ForceQuit => self.mode = AppMode::Quit,
            KeyAction::None => {}
        }
    }

    /// Promote the file under the cursor to the active preview.
    fn view_under_cursor(&mut self) {
        let Some(id) = self.session.handle_at(self.cursor).map(|h| h.id) else {
            return;
        };
        if !self.session.select(id) {
            return;
        }
        let Some(payload) = self.session.open_blob(id) else {
            return;
        };
        let Some(handle) = self.session.get(id) else {
            return;
        };
        self.pager_rx = self.preview.open(handle, payload, &self.config.preview);
    }

    /// Delete the file under the cursor, clearing the preview when it was
    /// the one on display.
    fn delete_under_cursor(&mut self) {
        let Some(handle) = self.session.handle_at(self.cursor) else {
            return;
        };
        let id = handle.id;
        let name = handle.name.clone();
        let was_active = self.session.active() == Some(id);

        if !self.session.delete_file(id) {
            return;
        }
        if was_active {
            self.preview.close();
            self.pager_rx = None;
        }
        if self.cursor >= self.session.len() {
            self.cursor = self.session.len().saturating_sub(1);
        }
        self.status = Some((true, format!("Removed {name}")));
    }

    /// Close the preview and clear the active selection.
    fn close_preview(&mut self) {
        self.session.clear_selection();
        self.preview.close();
        self.pager_rx = None;
    }

    /// Save a copy of the viewed file under its original name.
    fn save_active_copy(&mut self) {
        let Some(handle) = self.session.active_handle() else {
            self.status = Some((false, "Nothing is being viewed".to_string()));
            return;
        };
        let id = handle.id;
        let name = handle.name.clone();
        let Some(payload) = self.session.open_blob(id) else {
            return;
        };

        let dir = self
            .config
            .preview
            .save_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        match save_copy(&name, &payload, &dir) {
            Ok(path) => self.status = Some((true, format!("Saved {}", path.display()))),
            Err(e) => self.status = Some((false, e.to_string())),
        }
    }

    /// Handle a key in the add-file prompt.
    fn handle_add_input(&mut self, key_event: KeyEvent) {
        let Some(input) = self.input.as_mut() else {
            self.mode = AppMode::Normal;
            return;
        };

        match input.handle_key(key_event) {
            InputResult::Continue => {}
            InputResult::Cancel => {
                self.input = None;
                self.mode = AppMode::Normal;
            }
            InputResult::Submit(path) => {
                if let Err(e) = input.validate_path() {
                    input.set_error(e);
                    return;
                }
                match stage_file(Path::new(path.trim())) {
                    Ok(staged) => {
                        let name = staged.name.clone();
                        self.session.add_files(vec![staged]);
                        self.status = Some((true, format!("Added {name}")));
                        self.input = None;
                        self.mode = AppMode::Normal;
                    }
                    Err(e) => input.set_error(e.to_string()),
                }
            }
        }
    }

    /// Apply a pager event; the preview drops stale generations itself.
    fn handle_pager_event(&mut self, event: PagerEvent) {
        self.preview.apply_pager_event(event);
        // Single round of resolution per request.
        self.pager_rx = None;
    }

    /// Render the whole application.
    fn render(&mut self, frame: &mut Frame) {
        let layout = AppLayout::new(frame.area());

        self.render_header(frame, layout.header);
        ui::render_file_list(frame, layout.list, &self.session, self.cursor, &self.theme);
        ui::render_preview(frame, layout.preview, &mut self.preview.content, &self.theme);
        self.render_footer(frame, layout.footer);

        if self.mode == AppMode::Help {
            ui::render_help_overlay(frame, frame.area(), &self.theme);
        }
        if self.mode == AppMode::Adding {
            self.render_add_prompt(frame, frame.area());
        }
    }

    fn render_header(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let total: u64 = self.session.handles().map(|h| h.size_bytes).sum();
        let text = format!(
            " satchel · {} file{} · {}",
            self.session.len(),
            if self.session.len() == 1 { "" } else { "s" },
            format_file_size(total)
        );
        frame.render_widget(Paragraph::new(text).style(self.theme.header), area);
    }

    fn render_footer(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let line = match &self.status {
            Some((ok, message)) => {
                let color = if *ok { self.theme.success } else { self.theme.error };
                Line::styled(format!(" {message}"), Style::new().fg(color))
            }
            None => Line::styled(
                " Enter view · a add · x delete · Esc close · s save · ? help · q quit",
                self.theme.footer,
            ),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_add_prompt(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let Some(input) = &self.input else { return };

        let popup = ui::centered_rect(area, 60, 5);
        frame.render_widget(Clear, popup);

        let buffer = input.buffer();
        let cursor = input.cursor();
        let (before, after) = buffer.split_at(cursor.min(buffer.len()));
        let (at, rest) = match after.char_indices().nth(1) {
            Some((i, _)) => after.split_at(i),
            None => (after, ""),
        };

        let mut lines = vec![Line::from(vec![
            Span::styled("> ", self.theme.title),
            Span::raw(before.to_string()),
            Span::styled(
                if at.is_empty() { " ".to_string() } else { at.to_string() },
                Style::new().add_modifier(ratatui::style::Modifier::REVERSED),
            ),
            Span::raw(rest.to_string()),
        ])];
        if let Some(error) = input.error() {
            lines.push(Line::styled(error.to_string(), Style::new().fg(self.theme.error)));
        } else {
            lines.push(Line::styled(
                "Enter to stage · Esc to cancel",
                self.theme.help_desc,
            ));
        }

        let block = Block::bordered()
            .border_style(self.theme.border)
            .title(Line::styled(" Add file ", self.theme.title));
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }
}

#[cfg(test)]
mod tests {
    use satchel_preview::PreviewConfigBuilder;

    use super::*;
    use crate::preview::PreviewContent;

    fn staged(name: &str, media_type: &str, size: usize) -> StagedFile {
        StagedFile::new(name, media_type, vec![0u8; size])
    }

    fn pdf_bytes() -> Vec<u8> {
        b"%PDF-stub".to_vec()
    }

    #[test]
    fn test_new_app_stages_initial_files() {
        let app = App::new(vec![
            staged("a.png", "image/png", 10),
            staged("b.pdf", "application/pdf", 10),
        ]);
        assert_eq!(app.session.len(), 2);
        assert_eq!(app.cursor, 0);
        assert!(matches!(app.preview.content, PreviewContent::Empty));
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = App::new(vec![staged("a.txt", "text/plain", 1)]);

        app.handle_action(KeyAction::MoveDown);
        assert_eq!(app.cursor, 0);
        app.handle_action(KeyAction::MoveUp);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_view_selects_download_card() {
        let mut app = App::new(vec![staged(
            "slides.pptx",
            "application/vnd.ms-powerpoint",
            32,
        )]);

        app.handle_action(KeyAction::View);
        assert!(app.session.active().is_some());
        assert!(matches!(app.preview.content, PreviewContent::Download { .. }));
        assert!(app.pager_rx.is_none());
    }

    #[tokio::test]
    async fn test_view_pdf_starts_pager() {
        let mut app = App::new(vec![StagedFile::new(
            "doc.pdf",
            "application/pdf",
            pdf_bytes(),
        )]);

        app.handle_action(KeyAction::View);
        assert!(app.pager_rx.is_some());
        assert!(matches!(
            app.preview.content,
            PreviewContent::PagedDocument {
                page_count: None,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_delete_active_clears_preview_and_discards_late_count() {
        let mut app = App::new(vec![
            StagedFile::new("doc.pdf", "application/pdf", pdf_bytes()),
            staged("b.png", "image/png", 4),
        ]);

        app.handle_action(KeyAction::View);
        let request_generation = app.preview.generation();

        app.handle_action(KeyAction::Delete);
        assert_eq!(app.session.active(), None);
        assert!(app.pager_rx.is_none());
        assert!(matches!(app.preview.content, PreviewContent::Empty));
        assert_eq!(app.session.len(), 1);

        // A page count landing after the delete must not resurrect the view.
        app.handle_pager_event(PagerEvent {
            generation: request_generation,
            outcome: Ok(42),
        });
        assert!(matches!(app.preview.content, PreviewContent::Empty));
    }

    #[test]
    fn test_close_preview_keeps_registry() {
        let mut app = App::new(vec![staged("slides.pptx", "application/vnd.ms-powerpoint", 8)]);

        app.handle_action(KeyAction::View);
        app.handle_action(KeyAction::Cancel);

        assert_eq!(app.session.active(), None);
        assert!(matches!(app.preview.content, PreviewContent::Empty));
        assert_eq!(app.session.len(), 1);
    }

    #[test]
    fn test_delete_clamps_cursor() {
        let mut app = App::new(vec![
            staged("a.txt", "text/plain", 1),
            staged("b.txt", "text/plain", 1),
        ]);

        app.handle_action(KeyAction::MoveDown);
        assert_eq!(app.cursor, 1);

        app.handle_action(KeyAction::Delete);
        assert_eq!(app.cursor, 0);
        assert_eq!(app.session.len(), 1);
    }

    #[test]
    fn test_save_copy_writes_next_to_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::default().with_preview(
            PreviewConfigBuilder::default()
                .save_dir(Some(dir.path().to_path_buf()))
                .build()
                .unwrap(),
        );
        let mut app = App::with_config(
            vec![staged("notes.txt", "text/plain", 16)],
            config,
        );

        app.handle_action(KeyAction::View);
        app.handle_action(KeyAction::Save);

        assert!(dir.path().join("notes.txt").exists());
        assert!(matches!(app.status, Some((true, _))));
    }

    #[test]
    fn test_save_without_active_selection_reports() {
        let mut app = App::new(vec![staged("a.txt", "text/plain", 1)]);
        app.handle_action(KeyAction::Save);
        assert!(matches!(app.status, Some((false, _))));
    }
}
