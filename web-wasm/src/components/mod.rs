pub mod drop_zone;
pub mod header;
pub mod loading_overlay;
pub mod progress_bar;
pub mod results_panel;
