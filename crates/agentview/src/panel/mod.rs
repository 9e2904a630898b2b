//! Floating panels
//!
//! Two panels float over the carousel: the agent status panel and the
//! playback control bar. Both dock through a [`DockTracker`](crate::dock::DockTracker)
//! and differ only in configuration.

mod floating;

pub use floating::FloatingPanel;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownPanel;

/// Opacity of a dimmed panel
pub const DIMMED_OPACITY: f32 = 0.15;

/// Which floating panel an operation targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelKind {
    Agent,
    ControlBar,
}

impl PanelKind {
    pub const ALL: [PanelKind; 2] = [PanelKind::Agent, PanelKind::ControlBar];

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelKind::Agent => "agent",
            PanelKind::ControlBar => "control-bar",
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelKind {
    type Err = UnknownPanel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanelKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownPanel(s.to_string()))
    }
}
