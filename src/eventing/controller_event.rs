//! ControllerEvent - Requests Emitted to the Host
//!
//! The page controller never navigates by itself; it hands these to whatever
//! hosts the page (browser shell, CLI, test).

use crate::app::ModalRequest;

/// Navigation requests for the host
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerEvent {
    /// Open a modal dialog
    OpenModal(ModalRequest),

    /// Replace the current view with another page
    GoToPage { url: String },
}

impl ControllerEvent {
    /// Create a navigation event
    pub fn go_to_page(url: impl Into<String>) -> Self {
        Self::GoToPage { url: url.into() }
    }

    /// Target URL of the request
    pub fn url(&self) -> &str {
        match self {
            Self::OpenModal(request) => &request.url,
            Self::GoToPage { url } => url,
        }
    }
}
