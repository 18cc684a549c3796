//! Application State: zentrale Datenhaltung.

mod app_state;
mod editor;
mod view;

pub use app_state::AppState;
pub use editor::{EditorTool, EditorToolState};
pub use view::ViewState;
