//! Synthetic tick generation
//!
//! Expands one historical candle into an ordered intra-candle price
//! sequence. The path is deterministic: open → high → low → close with
//! linear interpolation between the anchors.

use crate::feed::Candle;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Generates synthetic intra-candle tick sequences
#[derive(Debug, Clone, Copy, Default)]
pub struct TickGenerator;

impl TickGenerator {
    /// Create a new tick generator
    pub fn new() -> Self {
        Self
    }

    /// Expand a candle into exactly `tick_count` synthetic prices.
    ///
    /// The first tick is the candle's open, the last its close, and the
    /// sequence passes through the high and the low in between. A
    /// `tick_count` of zero is treated as one.
    pub fn generate(&self, candle: &Candle, tick_count: usize) -> Vec<Decimal> {
        let count = tick_count.max(1);
        if count == 1 {
            return vec![candle.close];
        }

        let anchors = [candle.open, candle.high, candle.low, candle.close];
        let segments = Decimal::from(anchors.len() - 1);
        let last = Decimal::from(count - 1);

        let mut ticks = Vec::with_capacity(count);
        for i in 0..count {
            // Map tick index onto the three anchor-to-anchor segments
            let t = Decimal::from(i) * segments / last;
            let segment = t
                .floor()
                .to_usize()
                .unwrap_or(0)
                .min(anchors.len() - 2);
            let u = t - Decimal::from(segment);
            let start = anchors[segment];
            let end = anchors[segment + 1];
            ticks.push(start + (end - start) * u);
        }
        ticks
    }
}

/// Derive how many ticks one candle expands into at the given speed.
///
/// Higher speed factors compress a candle into fewer ticks; the count
/// never drops below 1.
pub fn ticks_per_candle(base_ticks_per_minute: u32, speed_factor: u32) -> usize {
    let speed = speed_factor.max(1);
    ((base_ticks_per_minute / speed) as usize).max(1)
}
