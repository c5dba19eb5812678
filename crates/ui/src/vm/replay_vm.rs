pub const NO_REPLAYS_MESSAGE: &str = "No more replays available";

/// Client-side replay allowance for an audio clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayVm {
    remaining: u32,
    exhausted: bool,
}

impl ReplayVm {
    #[must_use]
    pub fn new(max_replays: u32) -> Self {
        Self {
            remaining: max_replays,
            exhausted: false,
        }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the player should be hidden.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Count one finished playback and return the remaining replays.
    pub fn record_playback(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.exhausted = true;
        }
        self.remaining
    }
}
