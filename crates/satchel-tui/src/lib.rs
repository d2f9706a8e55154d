//! Terminal user interface for satchel.
//!
//! An interactive stash for local files: add files, list them, and preview
//! the selected one inline - images drawn in the terminal, PDFs as a
//! paginated view, everything else as a save-a-copy card.
//!
//! # Keyboard
//!
//! - `j`/`k` - Move down/up the file list
//! - `Enter` - View the file under the cursor
//! - `Esc` - Close the preview
//! - `x`/`Del` - Delete the file under the cursor
//! - `a` - Add a file by path
//! - `s` - Save a copy of the viewed file
//! - `t` - Toggle dark/light theme
//! - `?` - Help
//! - `q` - Quit

pub mod app;
mod event;
mod image_view;
mod preview;
mod theme;
mod ui;

use satchel_core::StagedFile;
use satchel_preview::PreviewConfig;

pub use app::{App, AppResult};
pub use theme::Theme;

/// Configuration for a TUI session.
#[derive(Debug, Clone, Default)]
pub struct TuiConfig {
    /// Preview collaborator configuration (decode limits, save directory).
    pub preview: PreviewConfig,
}

impl TuiConfig {
    /// Create a default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the preview configuration.
    pub fn with_preview(mut self, preview: PreviewConfig) -> Self {
        self.preview = preview;
        self
    }
}

/// Run the TUI with files already staged.
pub fn run(staged: Vec<StagedFile>) -> AppResult<()> {
    run_with_config(staged, TuiConfig::default())
}

/// Run the TUI with a custom config.
pub fn run_with_config(staged: Vec<StagedFile>, config: TuiConfig) -> AppResult<()> {
    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new()?;

    let terminal = ratatui::init();
    let result = rt.block_on(App::with_config(staged, config).run(terminal));
    ratatui::restore();

    // Shutdown runtime immediately to cancel background tasks
    rt.shutdown_timeout(std::time::Duration::from_millis(100));

    result
}
