use crate::error::StageError;

/// Tuning knobs for the scroll stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageConfig {
    /// Pixels of scrolling the stage stays pinned for.
    pub scroll_distance: f64,
    /// Seconds the rendered playhead takes to catch up with the scrollbar.
    pub scrub_seconds: f64,
    /// Auto-scroll speed in pixels per second.
    pub autoplay_speed: f64,
    /// Playback refuses to start when closer than this to the bottom.
    pub min_autoplay_distance: f64,
    pub replay_seconds: f64,
    pub jump_seconds: f64,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            scroll_distance: 8000.0,
            scrub_seconds: 1.0,
            autoplay_speed: 500.0,
            min_autoplay_distance: 50.0,
            replay_seconds: 2.0,
            jump_seconds: 2.5,
        }
    }
}

impl StageConfig {
    /// Applies overrides looked up by `get`. Bad values are reported back
    /// alongside the config so the caller can log them; the default stays
    /// in place for those keys.
    pub fn with_overrides<F>(mut self, get: F) -> (Self, Vec<StageError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();
        let fields: [(&str, &mut f64); 3] = [
            ("speed", &mut self.autoplay_speed),
            ("scrub", &mut self.scrub_seconds),
            ("distance", &mut self.scroll_distance),
        ];
        for (key, slot) in fields {
            let Some(raw) = get(key) else { continue };
            match raw.trim().parse::<f64>() {
                Ok(value) if value.is_finite() && value > 0.0 => *slot = value,
                _ => errors.push(StageError::InvalidConfig {
                    key: key.to_string(),
                    value: raw,
                }),
            }
        }
        (self, errors)
    }

    /// Reads overrides from the page's query string, e.g. `?speed=800`.
    pub fn from_location() -> Self {
        let params = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok());
        let Some(params) = params else {
            return Self::default();
        };
        let (config, errors) = Self::default().with_overrides(|key| params.get(key));
        for e in errors {
            log::warn!("Ignoring query override: {}", e);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_the_authored_page() {
        let config = StageConfig::default();
        assert_eq!(config.scroll_distance, 8000.0);
        assert_eq!(config.autoplay_speed, 500.0);
        assert_eq!(config.min_autoplay_distance, 50.0);
    }

    #[test]
    fn valid_overrides_apply() {
        let (config, errors) =
            StageConfig::default().with_overrides(lookup(&[("speed", "800"), ("scrub", "0.5")]));
        assert!(errors.is_empty());
        assert_eq!(config.autoplay_speed, 800.0);
        assert_eq!(config.scrub_seconds, 0.5);
        assert_eq!(config.scroll_distance, 8000.0);
    }

    #[test]
    fn invalid_overrides_keep_defaults() {
        let (config, errors) = StageConfig::default()
            .with_overrides(lookup(&[("speed", "fast"), ("distance", "-10")]));
        assert_eq!(errors.len(), 2);
        assert_eq!(config, StageConfig::default());
    }
}
