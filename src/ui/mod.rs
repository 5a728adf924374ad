//! Plain-text rendering for terminal front ends.

mod display;
mod history;
mod settings;

pub use display::render_display;
pub use history::render_history;
pub use settings::render_settings;
