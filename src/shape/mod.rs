pub mod pulse;
pub mod sawtooth;
pub mod sine;
pub mod sine_table;
pub mod triangle;

use std::fmt::Debug;

use crate::engine::parameters::WaveformParams;
use crate::types::waveform::Waveform;

pub use pulse::Pulse;
pub use sawtooth::Sawtooth;
pub use sine::Sine;
pub use triangle::Triangle;

/// Sampling strategy for one waveform shape
///
/// An engine is generic over its shape. The shape owns nothing at runtime:
/// derived quantities live next to the parameters inside the engine lock,
/// so a tick always sees a period paired with the values derived from it.
pub trait Shape: Send + Sync + 'static {
    /// Quantities precomputed from the parameters (on-time, half period, ...)
    type Derived: Copy + Debug + Default + PartialEq + Send;

    const WAVEFORM: Waveform;

    /// Recompute derived quantities after a parameter change
    fn recompute_derived(params: &WaveformParams) -> Self::Derived;

    /// Sample value at `cur_time_ms` into the period
    /// Must be total: zero periods and zero divisors are handled, not propagated
    fn sample(params: &WaveformParams, derived: &Self::Derived, cur_time_ms: u32) -> u32;
}

/// `amplitude * num / den` without intermediate overflow, clamped to `amplitude`
pub(crate) fn scale_linear(amplitude: u16, num: u32, den: u32) -> u32 {
    debug_assert!(den != 0);
    let value = amplitude as u64 * num as u64 / den as u64;
    value.min(amplitude as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_linear_clamps() {
        assert_eq!(scale_linear(1000, 0, 10), 0);
        assert_eq!(scale_linear(1000, 5, 10), 500);
        assert_eq!(scale_linear(1000, 10, 10), 1000);
        assert_eq!(scale_linear(1000, 20, 10), 1000);
        assert_eq!(scale_linear(0xFFFF, 60_000, 60_000), 0xFFFF);
    }
}
