use super::{Shape, scale_linear};
use crate::engine::parameters::WaveformParams;
use crate::types::waveform::Waveform;

/// Linear rise to full amplitude at half period, then linear fall back to zero
#[derive(Debug, Clone, Copy, Default)]
pub struct Triangle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriangleTiming {
    pub half_period_ms: u32,
}

impl Shape for Triangle {
    type Derived = TriangleTiming;

    const WAVEFORM: Waveform = Waveform::Triangle;

    fn recompute_derived(params: &WaveformParams) -> TriangleTiming {
        TriangleTiming {
            half_period_ms: params.period_ms >> 1,
        }
    }

    fn sample(params: &WaveformParams, derived: &TriangleTiming, cur_time_ms: u32) -> u32 {
        let half = derived.half_period_ms;
        // period of 0 or 1: only t == 0 exists and it is the apex
        if half == 0 {
            return params.amplitude as u32;
        }

        if cur_time_ms <= half {
            scale_linear(params.amplitude, cur_time_ms, half)
        } else {
            let remaining = params.period_ms.saturating_sub(cur_time_ms);
            scale_linear(params.amplitude, remaining, half)
        }
    }
}
