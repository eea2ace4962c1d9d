use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme name ("dark" or "light")
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Base event poll interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub rail: RailConfig,
    #[serde(default)]
    pub reader: ReaderConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            tick_rate_ms: default_tick_rate(),
            scroll: ScrollConfig::default(),
            rail: RailConfig::default(),
            reader: ReaderConfig::default(),
        }
    }
}

/// Smooth scrolling parameters shared by the deck and reader views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate programmatic scrolls instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Scroll animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve for scroll animations
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while an animation is active
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
    /// Extra time after the animation before passive tracking resumes
    #[serde(default = "default_settle_grace")]
    pub settle_grace_ms: u64,
    /// Wheel idle time before the deck view snaps to the nearest section
    #[serde(default = "default_snap_idle")]
    pub snap_idle_ms: u64,
    /// Rows scrolled per wheel event
    #[serde(default = "default_wheel_lines")]
    pub wheel_lines: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
            settle_grace_ms: default_settle_grace(),
            snap_idle_ms: default_snap_idle(),
            wheel_lines: default_wheel_lines(),
        }
    }
}

/// Dot rail animation timings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RailConfig {
    /// Total draw-in + fade-out time of the transition trail
    #[serde(default = "default_trail_duration")]
    pub trail_duration_ms: u64,
    /// Lifetime of the press ripple on an indicator
    #[serde(default = "default_ripple_duration")]
    pub ripple_duration_ms: u64,
}

impl Default for RailConfig {
    fn default() -> Self {
        Self {
            trail_duration_ms: default_trail_duration(),
            ripple_duration_ms: default_ripple_duration(),
        }
    }
}

/// Reader-view observation band for the active table-of-contents entry.
///
/// The band covers the upper-middle of the viewport: `band_top_pct` is cut
/// off the top and `band_bottom_pct` off the bottom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderConfig {
    #[serde(default = "default_band_top")]
    pub band_top_pct: u16,
    #[serde(default = "default_band_bottom")]
    pub band_bottom_pct: u16,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            band_top_pct: default_band_top(),
            band_bottom_pct: default_band_bottom(),
        }
    }
}

/// Easing curve applied to scroll animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// Jump at the end, no interpolation
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

impl EasingType {
    /// Map progress `t` in [0, 1] to an eased value in [0, 1].
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            EasingType::Quintic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv * inv * inv
            }
            EasingType::EaseOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
        }
    }
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

fn default_animation_duration() -> u64 {
    150
}

fn default_animation_fps() -> u16 {
    60
}

fn default_settle_grace() -> u64 {
    100
}

fn default_snap_idle() -> u64 {
    150
}

fn default_wheel_lines() -> u16 {
    3
}

fn default_trail_duration() -> u64 {
    500
}

fn default_ripple_duration() -> u64 {
    600
}

fn default_band_top() -> u16 {
    20
}

fn default_band_bottom() -> u16 {
    60
}

impl AppConfig {
    /// Load configuration from file or return defaults.
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Configuration file path: ~/.config/snapdeck/config.toml on all platforms.
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("snapdeck")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scroll_config() {
        let config = ScrollConfig::default();
        assert!(config.smooth_enabled);
        assert_eq!(config.animation_duration_ms, 150);
        assert_eq!(config.easing, EasingType::Cubic);
        assert_eq!(config.animation_fps, 60);
        assert_eq!(config.settle_grace_ms, 100);
    }

    #[test]
    fn test_default_rail_config() {
        let config = RailConfig::default();
        assert_eq!(config.trail_duration_ms, 500);
        assert_eq!(config.ripple_duration_ms, 600);
    }

    #[test]
    fn test_default_reader_band() {
        let config = ReaderConfig::default();
        assert_eq!(config.band_top_pct, 20);
        assert_eq!(config.band_bottom_pct, 60);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.ui.scroll.animation_duration_ms, 150);
        assert_eq!(parsed.ui.rail.trail_duration_ms, 500);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: AppConfig = toml::from_str(
            r#"
            [ui]
            theme = "light"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.ui.theme, "light");
        assert_eq!(parsed.ui.tick_rate_ms, 100);
        assert!(parsed.ui.scroll.smooth_enabled);
    }

    #[test]
    fn test_easing_boundaries() {
        for easing in [
            EasingType::None,
            EasingType::Linear,
            EasingType::Cubic,
            EasingType::Quintic,
            EasingType::EaseOut,
        ] {
            if easing != EasingType::None {
                assert!((easing.apply(0.0)).abs() < 0.001, "{:?} at t=0", easing);
            }
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in [
            EasingType::Linear,
            EasingType::Cubic,
            EasingType::Quintic,
            EasingType::EaseOut,
        ] {
            let mut prev = 0.0;
            for i in 0..=10 {
                let t = i as f64 / 10.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }
}
