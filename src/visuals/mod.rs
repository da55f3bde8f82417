pub mod score_display;
pub mod sprite_store;
pub mod tui;
pub mod tui_app;
