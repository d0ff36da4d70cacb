//! Handler modules for managing user input, game state, and history views.

mod game_handler;
mod history_handler;
mod input_handler;

pub use game_handler::GameHandler;
pub use history_handler::HistoryHandler;
pub use input_handler::InputHandler;
pub(in crate::ui) use input_handler::input_status;
