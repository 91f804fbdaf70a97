pub mod app;
pub mod board;
pub mod controls_panel;
pub mod game_over_overlay;
pub mod settings_modal;
pub mod stats_panel;
pub mod time_display;

pub use app::App;
