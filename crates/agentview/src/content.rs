//! Demo screen list

use serde::{Deserialize, Serialize};

/// One captured screen of an agent run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    pub id: String,
    pub title: String,
    pub url: String,
    /// Action the agent took on this screen
    pub label: String,
}

impl Screen {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            label: label.into(),
        }
    }
}

/// The five-step demo workflow
pub fn default_screens() -> Vec<Screen> {
    [
        ("screen-1", "Dashboard", "app.stackbirds.io/dashboard", "Loaded"),
        ("screen-2", "User Profile", "app.stackbirds.io/profile", "Clicked"),
        ("screen-3", "Settings", "app.stackbirds.io/settings", "Navigated"),
        ("screen-4", "Notifications", "app.stackbirds.io/notifications", "Opened"),
        ("screen-5", "Checkout", "app.stackbirds.io/checkout", "Completed"),
    ]
    .into_iter()
    .map(|(id, title, url, label)| Screen::new(id, title, url, label))
    .collect()
}
