//! Ring settings persistence
//!
//! Handles the ring's styling attributes and animation tuning, saved as
//! JSON in the platform config directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default progress arc color (teal-green)
pub const DEFAULT_PROGRESS_COLOR: ArgbColor = ArgbColor(0xFF28C996);
/// Default track color (neutral gray)
pub const DEFAULT_BACKGROUND_COLOR: ArgbColor = ArgbColor(0xFFC9C9C9);
/// Default ring stroke width in logical pixels
pub const DEFAULT_STROKE_WIDTH: f32 = 15.0;

/// A color packed as `0xAARRGGBB`
///
/// Serialized as a `"#AARRGGBB"` string. `"#RRGGBB"` is accepted on input
/// and treated as fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArgbColor(pub u32);

impl ArgbColor {
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl std::str::FromStr for ArgbColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError(s.to_string()))?;
        let value = u32::from_str_radix(hex, 16).map_err(|_| ColorParseError(s.to_string()))?;
        match hex.len() {
            8 => Ok(Self(value)),
            6 => Ok(Self(0xFF00_0000 | value)),
            _ => Err(ColorParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for ArgbColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ArgbColor> for String {
    fn from(color: ArgbColor) -> Self {
        color.to_string()
    }
}

impl std::fmt::Display for ArgbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl From<ArgbColor> for iced::Color {
    fn from(color: ArgbColor) -> Self {
        iced::Color::from_rgba8(
            color.red(),
            color.green(),
            color.blue(),
            color.alpha() as f32 / 255.0,
        )
    }
}

/// Invalid color string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(pub String);

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid color {:?}, expected #AARRGGBB or #RRGGBB", self.0)
    }
}

impl std::error::Error for ColorParseError {}

/// Styling attributes of the ring, resolved once at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingStyle {
    /// Color of the progress arc
    #[serde(default = "default_progress_color")]
    pub progress_color: ArgbColor,
    /// Color of the full background track
    #[serde(default = "default_background_color")]
    pub background_color: ArgbColor,
    /// Stroke width of both arcs
    #[serde(default = "default_stroke_width")]
    pub width: f32,
}

fn default_progress_color() -> ArgbColor {
    DEFAULT_PROGRESS_COLOR
}

fn default_background_color() -> ArgbColor {
    DEFAULT_BACKGROUND_COLOR
}

fn default_stroke_width() -> f32 {
    DEFAULT_STROKE_WIDTH
}

impl Default for RingStyle {
    fn default() -> Self {
        Self {
            progress_color: DEFAULT_PROGRESS_COLOR,
            background_color: DEFAULT_BACKGROUND_COLOR,
            width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl RingStyle {
    /// Replace a non-positive or non-finite stroke width with the default
    pub fn sanitized(mut self) -> Self {
        if !self.width.is_finite() || self.width <= 0.0 {
            tracing::warn!(
                "Invalid ring width {}, using {}",
                self.width,
                DEFAULT_STROKE_WIDTH
            );
            self.width = DEFAULT_STROKE_WIDTH;
        }
        self
    }
}

/// What happens to a running animation when a new target arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Cancel the running animation before starting the new one
    #[default]
    CancelPrevious,
    /// Leave running animations alone; the pool's discard-oldest queue
    /// bounds how many survive
    Enqueue,
}

/// Worker pool sizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolSettings {
    /// Workers kept alive while idle
    pub core_workers: usize,
    /// Upper bound on live workers
    pub max_workers: usize,
    /// Jobs waiting for a worker
    pub queue_capacity: usize,
    /// Idle time before a non-core worker exits
    pub keep_alive_ms: u64,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            core_workers: 1,
            max_workers: 3,
            queue_capacity: 1,
            keep_alive_ms: 60,
        }
    }
}

impl PoolSettings {
    pub fn keep_alive(&self) -> Duration {
        Duration::from_millis(self.keep_alive_ms)
    }
}

/// Animation tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationSettings {
    /// Time between two ramp ticks
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default)]
    pub overlap: OverlapPolicy,
    #[serde(default)]
    pub pool: PoolSettings,
}

fn default_tick_interval_ms() -> u64 {
    1000
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            overlap: OverlapPolicy::default(),
            pool: PoolSettings::default(),
        }
    }
}

impl AnimationSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Display settings for the demo window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub dark_mode: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Ring styling attributes
    #[serde(default)]
    pub ring: RingStyle,
    /// Animation cadence and worker pool
    #[serde(default)]
    pub animation: AnimationSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "ring-progress", "RingProgress")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring settings at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        let mut settings: Self =
            serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))?;
        settings.ring = settings.ring.sanitized();
        Ok(settings)
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parsing() {
        assert_eq!("#FF28C996".parse::<ArgbColor>(), Ok(ArgbColor(0xFF28C996)));
        assert_eq!("#c9c9c9".parse::<ArgbColor>(), Ok(ArgbColor(0xFFC9C9C9)));
        assert!("FF28C996".parse::<ArgbColor>().is_err());
        assert!("#12345".parse::<ArgbColor>().is_err());
        assert!("#GG28C996".parse::<ArgbColor>().is_err());
    }

    #[test]
    fn test_color_display_and_channels() {
        let color = ArgbColor(0x8028C996);
        assert_eq!(color.to_string(), "#8028C996");
        assert_eq!(color.alpha(), 0x80);
        assert_eq!(color.red(), 0x28);
        assert_eq!(color.green(), 0xC9);
        assert_eq!(color.blue(), 0x96);
    }

    #[test]
    fn test_defaults() {
        let style = RingStyle::default();
        assert_eq!(style.progress_color, ArgbColor(0xFF28C996));
        assert_eq!(style.background_color, ArgbColor(0xFFC9C9C9));
        assert_eq!(style.width, 15.0);

        let animation = AnimationSettings::default();
        assert_eq!(animation.tick_interval(), Duration::from_secs(1));
        assert_eq!(animation.overlap, OverlapPolicy::CancelPrevious);
        assert_eq!(animation.pool.core_workers, 1);
        assert_eq!(animation.pool.max_workers, 3);
        assert_eq!(animation.pool.queue_capacity, 1);
    }

    #[test]
    fn test_partial_style_uses_defaults() {
        let style: RingStyle = serde_json::from_str(r##"{"progressColor":"#FF0000FF"}"##)
            .expect("style should parse");
        assert_eq!(style.progress_color, ArgbColor(0xFF0000FF));
        assert_eq!(style.background_color, DEFAULT_BACKGROUND_COLOR);
        assert_eq!(style.width, DEFAULT_STROKE_WIDTH);
    }

    #[test]
    fn test_invalid_width_is_sanitized() {
        let style = RingStyle {
            width: -3.0,
            ..Default::default()
        };
        assert_eq!(style.sanitized().width, DEFAULT_STROKE_WIDTH);

        let style = RingStyle {
            width: f32::NAN,
            ..Default::default()
        };
        assert_eq!(style.sanitized().width, DEFAULT_STROKE_WIDTH);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.ring.width = 8.0;
        settings.ring.progress_color = ArgbColor(0xFF112233);
        settings.animation.tick_interval_ms = 250;
        settings.animation.overlap = OverlapPolicy::Enqueue;
        settings.save_to_file(&path).expect("save");

        let loaded = Settings::load_from_file(&path).expect("load");
        assert_eq!(loaded.ring, settings.ring);
        assert_eq!(loaded.animation, settings.animation);

        let raw = std::fs::read_to_string(&path).expect("read");
        assert!(raw.contains("\"#FF112233\""));
    }

    #[test]
    fn test_load_rejects_bad_color() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"ring":{"progressColor":"teal"}}"#).expect("write");

        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_partial_pool_keeps_ring_style() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r##"{"ring":{"width":6.0},"animation":{"pool":{"max_workers":2}}}"##,
        )
        .expect("write");

        let settings = Settings::load_from_file(&path).expect("load");
        assert_eq!(settings.ring.width, 6.0);
        assert_eq!(settings.animation.pool.max_workers, 2);
        assert_eq!(settings.animation.pool.core_workers, 1);
        assert_eq!(settings.animation.pool.queue_capacity, 1);
        assert_eq!(settings.animation.pool.keep_alive_ms, 60);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(
            Settings::load_from_file(&dir.path().join("missing.json")),
            Err(SettingsError::Io(_))
        ));
    }
}
