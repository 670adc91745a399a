//! Per-document progress bars with a batch bar for large runs

use std::path::Path;
use std::sync::LazyLock;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;

/// Progress of one document: display name, grids done, grids total
#[derive(Debug, Clone, Default)]
struct DocumentState {
    name: String,
    done: usize,
    total: usize,
}

/// Coordinates progress display for a batch of documents
///
/// Shows one bar per recent document (the last few stay visible) and adds a
/// batch bar once the document count exceeds what individual bars can show.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    document_bars: Vec<ProgressBar>,
    states: Vec<DocumentState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static DOCUMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.green/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Documents: [{bar:40.green/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a progress manager with no bars yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            document_bars: Vec::new(),
            states: Vec::new(),
        }
    }

    /// Create the bars for `document_count` documents
    pub fn initialize(&mut self, document_count: usize) {
        if document_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(document_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..document_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(DOCUMENT_STYLE.clone());
            self.document_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Register a document holding `grids` grids to process
    pub fn start_document(&mut self, index: usize, path: &Path, grids: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.states.len() {
            self.states.resize(index + 1, DocumentState::default());
        }
        if let Some(state) = self.states.get_mut(index) {
            *state = DocumentState {
                name,
                done: 0,
                total: grids,
            };
        }
        self.refresh();
    }

    /// Report that one more grid of the document is done
    pub fn advance(&mut self, index: usize) {
        if let Some(state) = self.states.get_mut(index) {
            state.done = (state.done + 1).min(state.total);
        }
        self.refresh();
    }

    /// Mark a document finished
    pub fn complete_document(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.states.get_mut(index) {
            state.name = format!("✓ {}", state.name);
            state.done = state.total;
        }
        self.refresh();
    }

    /// Clear all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All documents processed");
        }
        let _ = self.multi_progress.clear();
    }

    // Shows the most recently started documents on the available bars
    fn refresh(&self) {
        let started: Vec<&DocumentState> =
            self.states.iter().filter(|state| !state.name.is_empty()).collect();
        let first_visible = started.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = started.get(first_visible..).unwrap_or(&[]);

        for (slot, bar) in self.document_bars.iter().enumerate() {
            match visible.get(slot) {
                Some(state) => {
                    bar.set_length(state.total as u64);
                    bar.set_position(state.done as u64);
                    bar.set_message(format!("{}/{}", state.done, state.total));
                    bar.set_prefix(state.name.clone());
                }
                None => {
                    bar.set_length(0);
                    bar.set_position(0);
                    bar.set_message(String::new());
                    bar.set_prefix(String::new());
                }
            }
        }
    }
}
