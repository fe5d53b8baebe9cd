// src/config/state.rs
use super::options::AppOptions;
use crate::geometry::Orientation;
use crate::records::JobSchema;
use crate::search::JobQuery;

/// Job explorer: query, selection and which job CSV is shown.
#[derive(Clone, Debug)]
pub struct ExplorerState {
    pub query: JobQuery,
    /// Title of the selected job; survives re-sorting and filtering.
    pub selected: Option<String>,
    pub schema: JobSchema,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self {
            query: JobQuery::default(),
            selected: None,
            schema: JobSchema::JobData,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    pub explorer: ExplorerState,

    /// Domains page -> sector bars direction
    pub bar_orientation: Orientation,

    /// Domains page -> id of the clicked bubble
    pub selected_bubble: Option<String>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1200,
            window_h: 800,
            current_page_index: 0,
            explorer: ExplorerState::default(),
            bar_orientation: Orientation::Vertical,
            selected_bubble: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
