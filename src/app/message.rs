//! Application messages

use ring_progress::ProgressUpdate;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Progress ============
    /// Animate the ring toward a target
    SetProgress(i32),
    /// Target text field edited
    TargetInputChanged(String),
    /// Target text field submitted
    SubmitTarget,
    /// Animation tick posted by a worker
    ProgressUpdated(ProgressUpdate),

    // ============ Settings ============
    /// Switch between dark and light theme
    ToggleDarkMode,
    /// Persist current settings
    SaveSettings,
}
