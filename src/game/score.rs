//! Score and multiplier bookkeeping

pub const MIN_MULTIPLIER: u32 = 1;
pub const MAX_MULTIPLIER: u32 = 30;

/// Accumulated score and the multiplier applied to new points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTracker {
    score: u64,
    multiplier: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self {
            score: 0,
            multiplier: MIN_MULTIPLIER,
        }
    }

    /// Start from an arbitrary multiplier, clamped into range
    pub fn with_multiplier(multiplier: u32) -> Self {
        Self {
            score: 0,
            multiplier: multiplier.clamp(MIN_MULTIPLIER, MAX_MULTIPLIER),
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// Add `point` scaled by the multiplier in effect now
    pub fn add_points(&mut self, point: u32) -> u64 {
        let gained = u64::from(point) * u64::from(self.multiplier);
        self.score = self.score.saturating_add(gained);
        self.score
    }

    /// Step the multiplier by one and clamp
    pub fn change_multiplier(&mut self, is_increment: bool) -> u32 {
        let stepped = if is_increment {
            self.multiplier.saturating_add(1)
        } else {
            self.multiplier.saturating_sub(1)
        };
        self.multiplier = stepped.clamp(MIN_MULTIPLIER, MAX_MULTIPLIER);
        self.multiplier
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new()
    }
}
