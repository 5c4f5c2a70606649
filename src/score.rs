//! Current and best score bookkeeping
//!
//! The current score follows the board every tick. A new best is only
//! committed once the round is over, so "beating your best" stays visible
//! for the whole round.

/// Score shown on the HUD
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    current: u32,
    best: u32,
}

impl ScoreTracker {
    /// Start with a previously saved best
    pub fn new(best: u32) -> Self {
        Self { current: 0, best }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Whether the running score beats the saved best
    pub fn is_record(&self) -> bool {
        self.current > self.best
    }

    /// Record this frame's score. Returns the new best when one was committed
    /// and needs saving.
    pub fn observe(&mut self, score: u32, game_over: bool) -> Option<u32> {
        self.current = score;
        if game_over && self.is_record() {
            self.best = self.current;
            return Some(self.best);
        }
        None
    }

    /// Text for the best score line
    pub fn best_label(&self) -> String {
        format!("Your Best: {}", self.best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_committed_only_when_round_over() {
        let mut scores = ScoreTracker::new(5);
        for s in 0..=7 {
            assert_eq!(scores.observe(s, false), None);
        }
        assert!(scores.is_record());
        assert_eq!(scores.best(), 5);

        assert_eq!(scores.observe(7, true), Some(7));
        assert_eq!(scores.best(), 7);
        // Later frames of the same game over do not commit again
        assert_eq!(scores.observe(7, true), None);
    }

    #[test]
    fn test_lower_round_commits_nothing() {
        let mut scores = ScoreTracker::new(7);
        assert_eq!(scores.observe(3, false), None);
        assert_eq!(scores.observe(3, true), None);
        assert_eq!(scores.best(), 7);
        assert_eq!(scores.current(), 3);
    }

    #[test]
    fn test_best_label() {
        assert_eq!(ScoreTracker::default().best_label(), "Your Best: 0");
        assert_eq!(ScoreTracker::new(12).best_label(), "Your Best: 12");
    }
}
