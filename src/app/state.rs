//! Application state definitions

use ring_progress::{RingProgress, Settings};

/// Main application state
pub struct App {
    pub settings: Settings,
    /// The hosted ring; mutated only from `update`
    pub ring: RingProgress,
    /// Raw contents of the target text field
    pub target_input: String,
    pub input_error: Option<String>,
    /// Last settings save outcome shown under the controls
    pub status: Option<String>,
}

impl App {
    pub fn with_ring(settings: Settings, ring: RingProgress) -> Self {
        Self {
            settings,
            ring,
            target_input: String::new(),
            input_error: None,
            status: None,
        }
    }
}
