//! Simulated microphone level meter.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Infinite, restartable sequence of level meter frames.
///
/// Each frame holds one bar height per bar, drawn from `range`. Restarting
/// replays the same frames from the beginning.
#[derive(Debug, Clone)]
pub struct LevelMeter {
    seed: u64,
    rng: StdRng,
    bars: usize,
    range: Range<u8>,
}

impl LevelMeter {
    /// An empty `range` is widened to a single value.
    pub fn new(bars: usize, range: Range<u8>, seed: u64) -> Self {
        let range = if range.start < range.end {
            range
        } else {
            let start = range.start.min(u8::MAX - 1);
            start..start + 1
        };
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            bars,
            range,
        }
    }

    pub fn from_entropy(bars: usize, range: Range<u8>) -> Self {
        Self::new(bars, range, rand::random())
    }

    pub fn restart(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn bars(&self) -> usize {
        self.bars
    }

    pub fn range(&self) -> Range<u8> {
        self.range.clone()
    }
}

impl Iterator for LevelMeter {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = (0..self.bars)
            .map(|_| self.rng.gen_range(self.range.clone()))
            .collect();
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_have_one_level_per_bar() {
        let mut meter = LevelMeter::new(15, 5..35, 7);
        let frame = meter.next().unwrap();
        assert_eq!(frame.len(), 15);
    }

    #[test]
    fn levels_stay_in_range() {
        let meter = LevelMeter::new(15, 5..35, 1234);
        for frame in meter.take(200) {
            assert!(frame.iter().all(|level| (5..35).contains(level)));
        }
    }

    #[test]
    fn sequence_never_ends() {
        let meter = LevelMeter::new(3, 5..35, 0);
        assert_eq!(meter.take(10_000).count(), 10_000);
    }

    #[test]
    fn restart_replays_the_same_frames() {
        let mut meter = LevelMeter::new(15, 5..35, 99);
        let first: Vec<_> = meter.by_ref().take(5).collect();
        meter.restart();
        let second: Vec<_> = meter.by_ref().take(5).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn same_seed_same_frames() {
        let a: Vec<_> = LevelMeter::new(15, 5..35, 42).take(3).collect();
        let b: Vec<_> = LevelMeter::new(15, 5..35, 42).take(3).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_range_is_widened() {
        let mut meter = LevelMeter::new(4, 10..10, 1);
        assert_eq!(meter.range(), 10..11);
        assert_eq!(meter.next().unwrap(), vec![10, 10, 10, 10]);

        let meter = LevelMeter::new(1, 255..255, 1);
        assert_eq!(meter.range(), 254..255);
    }

    #[test]
    fn zero_bars_yields_empty_frames() {
        let mut meter = LevelMeter::new(0, 5..35, 1);
        assert_eq!(meter.next(), Some(Vec::new()));
    }
}
