mod graph_path;
mod state;
mod state_data;
mod state_editor;
mod state_error;

pub use graph_path::{GraphPath, RentalEpisode};
pub use state::State;
pub use state_data::StateData;
pub use state_editor::StateEditor;
pub use state_error::StateError;
