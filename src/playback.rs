//! Keyboard-driven auto-scroll through the stage.
//!
//! The controller owns at most one scroll tween at a time. Starting a new
//! motion always kills the previous one first, and any manual wheel or touch
//! input kills whatever is running.

use crate::anim::ease::Ease;
use crate::config::StageConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    TogglePlayback,
    Replay,
}

impl Shortcut {
    /// Maps a `KeyboardEvent.code` to a shortcut.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Space" => Some(Shortcut::TogglePlayback),
            "KeyR" => Some(Shortcut::Replay),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Linear run to the bottom of the page.
    Playback,
    /// Eased return to the top.
    Replay,
    /// Eased jump to a labelled phase.
    Jump,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTween {
    pub motion: Motion,
    from: f64,
    to: f64,
    duration: f64,
    ease: Ease,
    elapsed: f64,
}

impl ScrollTween {
    fn new(motion: Motion, from: f64, to: f64, duration: f64, ease: Ease) -> Self {
        Self { motion, from, to, duration, ease, elapsed: 0.0 }
    }

    #[cfg(test)]
    fn target(&self) -> f64 {
        self.to
    }

    #[cfg(test)]
    fn duration(&self) -> f64 {
        self.duration
    }

    fn position(&self) -> f64 {
        let progress = if self.duration > 0.0 {
            self.elapsed / self.duration
        } else {
            1.0
        };
        self.from + (self.to - self.from) * self.ease.apply(progress)
    }

    fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[derive(Debug, Clone)]
pub struct AutoScroll {
    speed: f64,
    min_distance: f64,
    replay_seconds: f64,
    jump_seconds: f64,
    active: Option<ScrollTween>,
    playing: bool,
}

impl AutoScroll {
    pub fn new(config: &StageConfig) -> Self {
        Self {
            speed: config.autoplay_speed,
            min_distance: config.min_autoplay_distance,
            replay_seconds: config.replay_seconds,
            jump_seconds: config.jump_seconds,
            active: None,
            playing: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn active(&self) -> Option<&ScrollTween> {
        self.active.as_ref()
    }

    /// Kills the running tween. Returns whether anything was running.
    pub fn stop(&mut self) -> bool {
        let was_active = self.active.take().is_some();
        self.playing = false;
        was_active
    }

    /// Space: pause if something is running, otherwise play to `max_y`.
    /// Returns `true` when playback started.
    pub fn toggle(&mut self, current_y: f64, max_y: f64) -> bool {
        if self.active.is_some() {
            self.stop();
            return false;
        }
        let distance = max_y - current_y;
        if distance < self.min_distance {
            return false;
        }
        self.active = Some(ScrollTween::new(
            Motion::Playback,
            current_y,
            max_y,
            distance / self.speed,
            Ease::Linear,
        ));
        self.playing = true;
        true
    }

    pub fn replay(&mut self, current_y: f64) {
        self.stop();
        self.active = Some(ScrollTween::new(
            Motion::Replay,
            current_y,
            0.0,
            self.replay_seconds,
            Ease::PowerInOut(3),
        ));
    }

    pub fn jump_to(&mut self, current_y: f64, target_y: f64) {
        self.stop();
        self.active = Some(ScrollTween::new(
            Motion::Jump,
            current_y,
            target_y,
            self.jump_seconds,
            Ease::PowerInOut(3),
        ));
        self.playing = true;
    }

    /// Manual wheel or touch input.
    pub fn interrupt(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        self.stop()
    }

    /// Advances the running tween by `dt` seconds and returns the scroll
    /// position to apply, if any.
    pub fn tick(&mut self, dt: f64) -> Option<f64> {
        let tween = self.active.as_mut()?;
        tween.elapsed += dt.max(0.0);
        let position = tween.position();
        if tween.finished() {
            log::debug!("{:?} finished at {:.0}px", tween.motion, position);
            self.active = None;
            self.playing = false;
        }
        Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> AutoScroll {
        AutoScroll::new(&StageConfig::default())
    }

    fn run_to_end(auto: &mut AutoScroll) -> Option<f64> {
        let mut last = None;
        for _ in 0..10_000 {
            match auto.tick(1.0 / 60.0) {
                Some(y) => last = Some(y),
                None => break,
            }
        }
        last
    }

    #[test]
    fn shortcuts_map_from_key_codes() {
        assert_eq!(Shortcut::from_code("Space"), Some(Shortcut::TogglePlayback));
        assert_eq!(Shortcut::from_code("KeyR"), Some(Shortcut::Replay));
        assert_eq!(Shortcut::from_code("KeyA"), None);
    }

    #[test]
    fn space_while_idle_starts_playback() {
        let mut auto = controller();
        assert!(auto.toggle(0.0, 8000.0));
        assert!(auto.is_playing());
        let tween = auto.active().unwrap();
        assert_eq!(tween.motion, Motion::Playback);
        assert_eq!(tween.duration(), 16.0);
    }

    #[test]
    fn space_while_active_cancels() {
        let mut auto = controller();
        auto.toggle(0.0, 8000.0);
        auto.tick(0.5);
        assert!(!auto.toggle(250.0, 8000.0));
        assert!(!auto.is_playing());
        assert!(auto.active().is_none());
        assert_eq!(auto.tick(0.5), None);
    }

    #[test]
    fn space_near_bottom_does_nothing() {
        let mut auto = controller();
        assert!(!auto.toggle(7960.0, 8000.0));
        assert!(auto.active().is_none());
        assert!(!auto.is_playing());
    }

    #[test]
    fn playback_moves_linearly_and_finishes() {
        let mut auto = controller();
        auto.toggle(1000.0, 2000.0);
        let y = auto.tick(1.0).unwrap();
        assert!((y - 1500.0).abs() < 1e-9);
        assert_eq!(auto.tick(1.0), Some(2000.0));
        assert!(!auto.is_playing());
        assert!(auto.active().is_none());
    }

    #[test]
    fn replay_always_ends_at_top() {
        for start in [0.0, 123.0, 8000.0] {
            let mut auto = controller();
            auto.toggle(start, 8000.0);
            auto.replay(start);
            assert!(!auto.is_playing());
            assert_eq!(run_to_end(&mut auto), Some(0.0));
        }
    }

    #[test]
    fn manual_input_cancels_motion() {
        let mut auto = controller();
        assert!(!auto.interrupt());
        auto.toggle(0.0, 8000.0);
        assert!(auto.interrupt());
        assert!(!auto.is_playing());
        assert!(auto.active().is_none());

        auto.replay(4000.0);
        assert!(auto.interrupt());
        assert!(auto.active().is_none());
    }

    #[test]
    fn jump_replaces_running_tween() {
        let mut auto = controller();
        auto.toggle(0.0, 8000.0);
        auto.jump_to(100.0, 2000.0);
        assert!(auto.is_playing());
        let tween = auto.active().unwrap();
        assert_eq!(tween.motion, Motion::Jump);
        assert_eq!(tween.target(), 2000.0);
        assert_eq!(run_to_end(&mut auto), Some(2000.0));
        assert!(!auto.is_playing());
    }

    #[test]
    fn space_during_replay_stops_it() {
        let mut auto = controller();
        auto.replay(5000.0);
        assert!(!auto.toggle(5000.0, 8000.0));
        assert!(auto.active().is_none());
    }
}
