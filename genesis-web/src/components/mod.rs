pub mod error_panel;
pub mod footer;
pub mod header;
pub mod loading_panel;
pub mod quest_card;
pub mod trigger_button;
