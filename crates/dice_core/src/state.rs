//! Per-frame application state and its update rule.
//!
//! [`DiceState`] is moved into [`DiceState::update`] and handed back with the
//! effects the frame produced. The caller (the windowing shell) owns the only
//! copy between frames and is the one that turns effects into sound and logs.

use crate::animation::{RollAnimation, RollTiming};
use crate::button::{Button, ButtonEvent};
use crate::die::DieValue;
use crate::input::PointerEvent;
use crate::layout::DiceLayout;
use crate::roller::Roller;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollPhase {
    Idle,
    Rolling,
}

/// Side effects requested by one frame update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEffect {
    /// A new value was picked; the shell plays the roll sound.
    RollStarted(DieValue),
    /// The rolling counter ran out and re-rolling is allowed again.
    RollFinished(DieValue),
}

#[derive(Debug, Clone)]
pub struct DiceState {
    die: Option<DieValue>,
    animation: RollAnimation,
    button: Button,
}

impl DiceState {
    pub fn new(layout: &DiceLayout, timing: RollTiming) -> Self {
        Self {
            die: None,
            animation: RollAnimation::new(timing),
            button: Button::new(
                layout.button_rect,
                layout.button_label.clone(),
                layout.button_style,
            ),
        }
    }

    /// One fixed step: dispatch pointer events, start a roll if asked and
    /// allowed, then advance the rolling counter.
    ///
    /// A roll starts on a completed click or while the button is held down,
    /// but never while another roll is still counting.
    pub fn update<I, R>(mut self, events: I, roller: &mut R) -> (Self, Vec<FrameEffect>)
    where
        I: IntoIterator<Item = PointerEvent>,
        R: Roller + ?Sized,
    {
        let mut effects = Vec::new();

        for event in events {
            if let Some(ButtonEvent::Clicked) = self.button.handle_event(&event) {
                self.try_start_roll(roller, &mut effects);
            }
        }

        if self.button.is_pressed() {
            self.try_start_roll(roller, &mut effects);
        }

        if self.animation.advance() {
            if let Some(value) = self.die {
                effects.push(FrameEffect::RollFinished(value));
            }
        }

        (self, effects)
    }

    fn try_start_roll<R: Roller + ?Sized>(
        &mut self,
        roller: &mut R,
        effects: &mut Vec<FrameEffect>,
    ) {
        if self.animation.is_rolling() {
            return;
        }
        let value = roller.roll();
        self.die = Some(value);
        self.animation.start();
        effects.push(FrameEffect::RollStarted(value));
    }

    pub fn die(&self) -> Option<DieValue> {
        self.die
    }

    pub fn phase(&self) -> RollPhase {
        if self.animation.is_rolling() {
            RollPhase::Rolling
        } else {
            RollPhase::Idle
        }
    }

    pub fn is_rolling(&self) -> bool {
        self.animation.is_rolling()
    }

    pub fn button(&self) -> &Button {
        &self.button
    }
}
