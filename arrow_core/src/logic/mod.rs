pub mod direction;
pub mod game;
pub mod high_scores;
pub mod konami;
pub mod level;
pub mod scoring;
pub mod sequence;
pub mod timer;
