use super::{Shape, scale_linear};
use crate::engine::parameters::WaveformParams;
use crate::types::waveform::Waveform;

/// Rising ramp that reaches full amplitude on the last millisecond of the period
#[derive(Debug, Clone, Copy, Default)]
pub struct Sawtooth;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SawtoothTiming {
    /// `period_ms - 1`, the time at which the ramp peaks
    pub period_max_ms: u32,
}

impl Shape for Sawtooth {
    type Derived = SawtoothTiming;

    const WAVEFORM: Waveform = Waveform::Sawtooth;

    fn recompute_derived(params: &WaveformParams) -> SawtoothTiming {
        SawtoothTiming {
            period_max_ms: params.period_ms.saturating_sub(1),
        }
    }

    fn sample(params: &WaveformParams, derived: &SawtoothTiming, cur_time_ms: u32) -> u32 {
        // one-millisecond period: every tick is the peak
        if derived.period_max_ms == 0 {
            return params.amplitude as u32;
        }
        scale_linear(params.amplitude, cur_time_ms, derived.period_max_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(period_ms: u32) -> WaveformParams {
        WaveformParams {
            period_ms,
            ..WaveformParams::default()
        }
    }

    #[test]
    fn test_endpoints() {
        for period_ms in [2, 3, 100, 999, 60_000] {
            let p = params(period_ms);
            let d = Sawtooth::recompute_derived(&p);
            assert_eq!(Sawtooth::sample(&p, &d, 0), 0);
            assert_eq!(Sawtooth::sample(&p, &d, period_ms - 1), 0xFFFF);
        }
    }

    #[test]
    fn test_monotonic_ramp() {
        let p = params(100);
        let d = Sawtooth::recompute_derived(&p);
        let samples: Vec<u32> = (0..100).map(|t| Sawtooth::sample(&p, &d, t)).collect();
        assert!(samples.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_degenerate_periods() {
        let p = params(1);
        let d = Sawtooth::recompute_derived(&p);
        assert_eq!(d.period_max_ms, 0);
        assert_eq!(Sawtooth::sample(&p, &d, 0), 0xFFFF);

        let p = params(0);
        let d = Sawtooth::recompute_derived(&p);
        assert_eq!(d.period_max_ms, 0);
        assert_eq!(Sawtooth::sample(&p, &d, 0), 0xFFFF);
    }
}
