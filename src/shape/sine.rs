use super::Shape;
use super::sine_table::{SINE_TABLE, SINE_TABLE_LEN};
use crate::engine::parameters::WaveformParams;
use crate::types::fixed_point::AMPLITUDE_FULL_SCALE;
use crate::types::waveform::Waveform;

/// Table-driven sine wave, 1000 samples per cycle
#[derive(Debug, Clone, Copy, Default)]
pub struct Sine;

impl Shape for Sine {
    type Derived = ();

    const WAVEFORM: Waveform = Waveform::Sine;

    fn recompute_derived(_params: &WaveformParams) {}

    fn sample(params: &WaveformParams, _derived: &(), cur_time_ms: u32) -> u32 {
        let idx = table_index(cur_time_ms, params.period_ms);
        params.amplitude as u32 * SINE_TABLE[idx] as u32 / AMPLITUDE_FULL_SCALE
    }
}

/// `cur_time_ms * 1000 / period_ms`, pinned inside the table
pub fn table_index(cur_time_ms: u32, period_ms: u32) -> usize {
    if period_ms == 0 {
        return 0;
    }
    let idx = cur_time_ms as u64 * SINE_TABLE_LEN as u64 / period_ms as u64;
    (idx as usize).min(SINE_TABLE_LEN - 1)
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
    fn test_quarter_points_full_amplitude() {
        let p = params(1000);
        assert_eq!(Sine::sample(&p, &(), 0), 0x8000);
        assert_eq!(Sine::sample(&p, &(), 250), 0xFFFF);
        assert_eq!(Sine::sample(&p, &(), 750), 0);
    }

    #[test]
    fn test_index_scales_with_period() {
        assert_eq!(table_index(0, 100), 0);
        assert_eq!(table_index(25, 100), 250);
        assert_eq!(table_index(99, 100), 990);
        assert_eq!(table_index(1, 3), 333);
        assert_eq!(table_index(5, 0), 0);
        assert_eq!(table_index(200, 100), 999);
    }

    #[test]
    fn test_amplitude_scaling() {
        let p = WaveformParams {
            amplitude: 0x8000,
            period_ms: 100,
            ..WaveformParams::default()
        };
        assert_eq!(Sine::sample(&p, &(), 25), 0x8000);
        assert_eq!(Sine::sample(&p, &(), 75), 0);
    }
}
