//! Scripted pointer sessions for driving the frame update in tests.
//!
//! A script is a list of frames; each frame lists the pointer events
//! delivered before that step. `repeat` runs the frame again that many times
//! in total, with the events delivered only on the first run, which is how
//! long idle stretches (waiting out a roll) are written.

use dice_core::{DiceState, FrameEffect, MouseBtn, PointerEvent, Roller};
use glam::Vec2;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct ReplaySequence {
    pub frames: Vec<ReplayFrame>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReplayFrame {
    #[serde(default)]
    pub events: Vec<ReplayEvent>,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReplayButton {
    #[default]
    Left,
    Right,
    Middle,
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplayEvent {
    Move {
        x: f32,
        y: f32,
    },
    Press {
        x: f32,
        y: f32,
        #[serde(default)]
        button: ReplayButton,
    },
    Release {
        x: f32,
        y: f32,
        #[serde(default)]
        button: ReplayButton,
    },
}

impl From<ReplayButton> for MouseBtn {
    fn from(button: ReplayButton) -> Self {
        match button {
            ReplayButton::Left => MouseBtn::Left,
            ReplayButton::Right => MouseBtn::Right,
            ReplayButton::Middle => MouseBtn::Middle,
        }
    }
}

impl From<ReplayEvent> for PointerEvent {
    fn from(event: ReplayEvent) -> Self {
        match event {
            ReplayEvent::Move { x, y } => PointerEvent::Moved {
                position: Vec2::new(x, y),
            },
            ReplayEvent::Press { x, y, button } => PointerEvent::Pressed {
                button: button.into(),
                position: Vec2::new(x, y),
            },
            ReplayEvent::Release { x, y, button } => PointerEvent::Released {
                button: button.into(),
                position: Vec2::new(x, y),
            },
        }
    }
}

impl ReplaySequence {
    /// One entry per simulation step.
    pub fn expanded_steps(&self) -> Vec<Vec<PointerEvent>> {
        let mut out = Vec::new();
        for frame in &self.frames {
            out.push(frame.events.iter().copied().map(PointerEvent::from).collect());
            for _ in 1..frame.repeat.max(1) {
                out.push(Vec::new());
            }
        }
        out
    }

    pub fn run<R: Roller>(
        &self,
        mut state: DiceState,
        roller: &mut R,
    ) -> (DiceState, Vec<FrameEffect>) {
        let mut effects = Vec::new();
        for events in self.expanded_steps() {
            let (next, step_effects) = state.update(events, roller);
            state = next;
            effects.extend(step_effects);
        }
        (state, effects)
    }
}

pub fn load_replay_from_path(path: &Path) -> Result<ReplaySequence, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let replay: ReplaySequence = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse replay JSON {}: {e}", path.display()))?;
    validate_replay(&replay)?;
    Ok(replay)
}

fn validate_replay(replay: &ReplaySequence) -> Result<(), String> {
    if replay.frames.is_empty() {
        return Err("Replay validation failed: frames list is empty".to_string());
    }
    for (i, frame) in replay.frames.iter().enumerate() {
        for event in &frame.events {
            let (x, y) = match *event {
                ReplayEvent::Move { x, y }
                | ReplayEvent::Press { x, y, .. }
                | ReplayEvent::Release { x, y, .. } => (x, y),
            };
            if !x.is_finite() || !y.is_finite() {
                return Err(format!(
                    "Replay validation failed: frame {} has a non-finite position",
                    i
                ));
            }
        }
    }
    Ok(())
}

const fn default_repeat() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use dice_core::{DiceLayout, DieValue, RngRoller, RollPhase, RollTiming};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file_path(name_hint: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "dice_replay_test_{}_{}_{}.json",
            name_hint,
            std::process::id(),
            nanos
        ))
    }

    fn load(name_hint: &str, json: &str) -> ReplaySequence {
        let path = temp_file_path(name_hint);
        fs::write(&path, json).expect("write temp file");
        let replay = load_replay_from_path(&path).expect("should parse");
        let _ = fs::remove_file(path);
        replay
    }

    fn fresh() -> DiceState {
        DiceState::new(&DiceLayout::default(), RollTiming::default())
    }

    fn seeded() -> RngRoller<StdRng> {
        RngRoller::new(StdRng::seed_from_u64(0xD1CE))
    }

    fn rolls(effects: &[FrameEffect]) -> usize {
        effects
            .iter()
            .filter(|e| matches!(e, FrameEffect::RollStarted(_)))
            .count()
    }

    #[test]
    fn click_on_button_rolls_once() {
        let replay = load(
            "click",
            r#"
            {
              "frames": [
                { "events": [ { "kind": "move", "x": 150, "y": 275 } ] },
                { "events": [ { "kind": "press", "x": 150, "y": 275 } ] },
                { "events": [ { "kind": "release", "x": 150, "y": 275 } ] }
              ]
            }
            "#,
        );
        let (state, effects) = replay.run(fresh(), &mut seeded());
        assert_eq!(rolls(&effects), 1);
        assert!(state.die().is_some());
        assert_eq!(state.phase(), RollPhase::Rolling);
        assert!(state.button().is_hovered());
        assert!(!state.button().is_pressed());
    }

    #[test]
    fn drag_off_before_release_still_rolls_from_the_press_only() {
        // Holding the button starts a roll; releasing outside is not a click.
        let replay = load(
            "drag_off",
            r#"
            {
              "frames": [
                { "events": [ { "kind": "press", "x": 100, "y": 270 } ] },
                { "events": [
                    { "kind": "move", "x": 100, "y": 100 },
                    { "kind": "release", "x": 100, "y": 100 }
                ] }
              ]
            }
            "#,
        );
        let (state, effects) = replay.run(fresh(), &mut seeded());
        assert_eq!(rolls(&effects), 1);
        assert!(!state.button().is_pressed());
        assert!(!state.button().is_hovered());
    }

    #[test]
    fn clicks_outside_and_right_clicks_never_roll() {
        let replay = load(
            "outside",
            r#"
            {
              "frames": [
                { "events": [
                    { "kind": "press", "x": 150, "y": 150 },
                    { "kind": "release", "x": 150, "y": 150 }
                ] },
                { "events": [
                    { "kind": "press", "x": 150, "y": 275, "button": "right" },
                    { "kind": "release", "x": 150, "y": 275, "button": "right" }
                ], "repeat": 10 }
              ]
            }
            "#,
        );
        let (state, effects) = replay.run(fresh(), &mut seeded());
        assert!(effects.is_empty());
        assert_eq!(state.die(), None);
    }

    #[test]
    fn full_roll_cycle_then_reroll() {
        let replay = load(
            "cycle",
            r#"
            {
              "frames": [
                { "events": [
                    { "kind": "press", "x": 150, "y": 275 },
                    { "kind": "release", "x": 150, "y": 275 }
                ], "repeat": 301 },
                { "events": [
                    { "kind": "press", "x": 150, "y": 275 },
                    { "kind": "release", "x": 150, "y": 275 }
                ] }
              ]
            }
            "#,
        );
        let (_, effects) = replay.run(fresh(), &mut seeded());
        assert_eq!(effects.len(), 3);
        let FrameEffect::RollStarted(first) = effects[0] else {
            panic!("expected a roll first, got {:?}", effects[0]);
        };
        assert_eq!(effects[1], FrameEffect::RollFinished(first));
        assert!(matches!(effects[2], FrameEffect::RollStarted(_)));
    }

    #[test]
    fn same_seed_same_session() {
        let replay = load(
            "determinism",
            r#"
            {
              "frames": [
                { "events": [
                    { "kind": "press", "x": 150, "y": 275 },
                    { "kind": "release", "x": 150, "y": 275 }
                ], "repeat": 301 },
                { "events": [
                    { "kind": "press", "x": 150, "y": 275 },
                    { "kind": "release", "x": 150, "y": 275 }
                ], "repeat": 301 },
                { "events": [
                    { "kind": "press", "x": 150, "y": 275 },
                    { "kind": "release", "x": 150, "y": 275 }
                ] }
              ]
            }
            "#,
        );
        let (a_state, a_effects) = replay.run(fresh(), &mut seeded());
        let (b_state, b_effects) = replay.run(fresh(), &mut seeded());
        assert_eq!(a_effects, b_effects);
        assert_eq!(a_state.die(), b_state.die());
        assert_eq!(rolls(&a_effects), 3);
        assert!(a_state.die().is_some_and(|v| DieValue::ALL.contains(&v)));
    }

    #[test]
    fn repeat_expands_to_idle_steps() {
        let replay = load(
            "repeat",
            r#"{ "frames": [ { "events": [ { "kind": "move", "x": 1, "y": 2 } ], "repeat": 3 }, {} ] }"#,
        );
        let steps = replay.expanded_steps();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].len(), 1);
        assert!(steps[1..].iter().all(Vec::is_empty));
    }

    #[test]
    fn empty_replay_is_rejected() {
        let path = temp_file_path("empty");
        fs::write(&path, r#"{ "frames": [] }"#).expect("write temp file");
        let err = load_replay_from_path(&path).expect_err("empty replay should fail");
        assert!(err.contains("frames list is empty"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn unknown_event_kind_is_rejected() {
        let path = temp_file_path("bad_kind");
        fs::write(
            &path,
            r#"{ "frames": [ { "events": [ { "kind": "scroll", "x": 0, "y": 0 } ] } ] }"#,
        )
        .expect("write temp file");
        let err = load_replay_from_path(&path).expect_err("unknown kind should fail");
        assert!(err.contains("Failed to parse replay JSON"));
        let _ = fs::remove_file(path);
    }
}
