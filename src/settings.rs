//! Game configuration
//!
//! Fixed at startup and never mutated during a run. Natively it may be read
//! from the JSON file named by `BUBBLE_POP_CONFIG`; on the web from LocalStorage.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SimError, SimResult};

/// Launch-time game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    /// Screen width in pixels
    pub screen_w: f32,
    /// Screen height in pixels
    pub screen_h: f32,
    /// HUD bar height along the top edge
    pub ui_bar_height: f32,
    /// Play area inset from every edge
    pub margin: f32,

    // === Bubbles ===
    /// Milliseconds between spawns
    pub spawn_interval_ms: u32,
    /// Radius at which a bubble starts shrinking
    pub max_radius: f32,
    /// Radius change per tick
    pub growth_rate: f32,

    // === Session ===
    /// Misses allowed before the run ends
    pub lives: u32,
    /// RNG seed for spawn positions (None = seed from the clock)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_w: SCREEN_W,
            screen_h: SCREEN_H,
            ui_bar_height: UI_BAR_HEIGHT,
            margin: MARGIN,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            max_radius: MAX_RADIUS,
            growth_rate: GROWTH_RATE,

            lives: LIVES,
            seed: None,
        }
    }
}

/// Axis-aligned rectangle bubbles may spawn in (inclusive bounds)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub min: Vec2,
    pub max: Vec2,
}

impl PlayArea {
    /// Check if a point lies inside the area (edges included)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

impl GameConfig {
    /// The spawnable rectangle: inset by `margin`, below the HUD bar
    pub fn play_area(&self) -> PlayArea {
        PlayArea {
            min: Vec2::new(self.margin, self.margin + self.ui_bar_height),
            max: Vec2::new(self.screen_w - self.margin, self.screen_h - self.margin),
        }
    }

    /// Spawn interval in seconds
    pub fn spawn_interval_secs(&self) -> f32 {
        self.spawn_interval_ms as f32 / 1000.0
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> SimResult<()> {
        positive("screen_w", self.screen_w)?;
        positive("screen_h", self.screen_h)?;
        non_negative("ui_bar_height", self.ui_bar_height)?;
        non_negative("margin", self.margin)?;
        positive("max_radius", self.max_radius)?;
        positive("growth_rate", self.growth_rate)?;

        if self.spawn_interval_ms == 0 {
            return Err(SimError::InvalidConfig {
                name: "spawn_interval_ms",
                value: 0.0,
                expected: "[1, ∞)",
            });
        }
        if self.lives == 0 {
            return Err(SimError::InvalidConfig {
                name: "lives",
                value: 0.0,
                expected: "[1, ∞)",
            });
        }

        let area = self.play_area();
        if area.min.x > area.max.x {
            return Err(SimError::InvalidConfig {
                name: "margin",
                value: self.margin,
                expected: "margin <= screen_w / 2",
            });
        }
        if area.min.y > area.max.y {
            return Err(SimError::InvalidConfig {
                name: "ui_bar_height",
                value: self.ui_bar_height,
                expected: "2 * margin + ui_bar_height <= screen_h",
            });
        }
        // Spawns land on whole pixels, so each axis needs one in range
        if area.min.x.ceil() > area.max.x.floor() {
            return Err(SimError::InvalidConfig {
                name: "margin",
                value: self.margin,
                expected: "a whole pixel between margin and screen_w - margin",
            });
        }
        if area.min.y.ceil() > area.max.y.floor() {
            return Err(SimError::InvalidConfig {
                name: "ui_bar_height",
                value: self.ui_bar_height,
                expected: "a whole pixel between the HUD bar and screen_h - margin",
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config (missing keys take defaults)
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }

    /// Environment variable naming the native config file
    pub const CONFIG_ENV: &'static str = "BUBBLE_POP_CONFIG";

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bubble_pop_config";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Load config from the file named by `BUBBLE_POP_CONFIG` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::CONFIG_ENV) else {
            log::info!("Using default config");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path);
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring config {}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read config {}: {}", path, e);
                Self::default()
            }
        }
    }
}

fn positive(name: &'static str, value: f32) -> SimResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig {
            name,
            value,
            expected: "(0.0, ∞)",
        })
    }
}

fn non_negative(name: &'static str, value: f32) -> SimResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig {
            name,
            value,
            expected: "[0.0, ∞)",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_layout() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());

        let area = config.play_area();
        assert_eq!(area.min, Vec2::new(35.0, 90.0));
        assert_eq!(area.max, Vec2::new(765.0, 565.0));
        assert!((config.spawn_interval_secs() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_play_area_contains_edges() {
        let area = GameConfig::default().play_area();
        assert!(area.contains(area.min));
        assert!(area.contains(area.max));
        assert!(!area.contains(Vec2::new(10.0, 100.0)));
        assert!(!area.contains(Vec2::new(100.0, 60.0)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = GameConfig {
            lives: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidConfig { name: "lives", .. })
        ));

        let config = GameConfig {
            growth_rate: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            margin: 500.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidConfig { name: "margin", .. })
        ));

        let config = GameConfig {
            ui_bar_height: 560.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidConfig {
                name: "ui_bar_height",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_area_without_whole_pixel() {
        // 400.1..=400.3 is not empty but holds no integer x
        let config = GameConfig {
            screen_w: 800.4,
            screen_h: 1000.0,
            margin: 400.1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidConfig { name: "margin", .. })
        ));

        let config = GameConfig {
            screen_h: 200.6,
            margin: 10.0,
            ui_bar_height: 180.3,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidConfig {
                name: "ui_bar_height",
                ..
            })
        ));

        // A single-pixel column is still playable
        let config = GameConfig {
            screen_w: 800.5,
            margin: 400.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = GameConfig::from_json(r#"{ "lives": 2, "seed": 7 }"#).unwrap();
        assert_eq!(config.lives, 2);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_radius, MAX_RADIUS);

        assert!(GameConfig::from_json(r#"{ "lives": 0 }"#).is_err());
        assert!(GameConfig::from_json("not json").is_err());
    }
}
