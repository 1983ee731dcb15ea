// UI module
// Contains layout, components, and the actions the UI hands back to the controller

pub mod components;
pub mod layout;

pub use components::*;
pub use layout::render_app_layout;

/// Something the user asked for during a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Submit the company form
    Calculate,
    /// Request security recommendations
    FetchRecommendations,
    /// Send a chat message
    SendChat(String),
    /// Close the blocking alert
    DismissAlert,
}
