pub mod controls;
pub mod game_app;
pub mod high_scores;
pub mod stats;
pub mod styles;

pub use game_app::App;
