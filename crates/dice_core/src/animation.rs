//! Frame-counted roll animation.
//!
//! The counter only gates re-rolls. The die face is chosen when the roll
//! starts and stays fixed while the counter runs, so nothing visible changes
//! between the first and the last rolling frame.
//!
//! Counting is in whole fixed simulation steps, never wall-clock time, which
//! keeps the rolling interval identical on every machine.

/// Counter bounds for one roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollTiming {
    /// Counter value right after a roll starts.
    pub start_frame: u32,
    /// Rolling ends on the first advance that takes the counter past this.
    pub end_frame: u32,
}

impl RollTiming {
    /// Number of `advance` calls between starting a roll and going idle.
    pub fn rolling_advances(&self) -> u32 {
        self.end_frame.saturating_sub(self.start_frame) + 1
    }
}

impl Default for RollTiming {
    fn default() -> Self {
        Self {
            start_frame: 100,
            end_frame: 400,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RollAnimation {
    timing: RollTiming,
    rolling: bool,
    frame: u32,
}

impl RollAnimation {
    pub fn new(timing: RollTiming) -> Self {
        Self {
            timing,
            rolling: false,
            frame: 0,
        }
    }

    /// Enter the rolling state and reset the counter. Restarting while
    /// already rolling is allowed here; callers decide whether to gate it.
    pub fn start(&mut self) {
        self.rolling = true;
        self.frame = self.timing.start_frame;
    }

    /// Advance one step. Returns `true` on the step that ends the roll.
    pub fn advance(&mut self) -> bool {
        if !self.rolling {
            return false;
        }
        self.frame += 1;
        if self.frame > self.timing.end_frame {
            self.rolling = false;
            return true;
        }
        false
    }

    pub fn is_rolling(&self) -> bool {
        self.rolling
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }
}
