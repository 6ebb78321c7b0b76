use super::Shape;
use crate::engine::parameters::WaveformParams;
use crate::types::waveform::Waveform;

/// Pulse (PWM) wave: full amplitude for the on-time, zero for the rest of the period
#[derive(Debug, Clone, Copy, Default)]
pub struct Pulse;

/// Derived pulse timing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PulseTiming {
    pub on_time_ms: u32,
}

impl Shape for Pulse {
    type Derived = PulseTiming;

    const WAVEFORM: Waveform = Waveform::Pulse;

    fn recompute_derived(params: &WaveformParams) -> PulseTiming {
        PulseTiming {
            on_time_ms: on_time_ms(params.period_ms, params.duty_cycle_q10),
        }
    }

    fn sample(params: &WaveformParams, derived: &PulseTiming, cur_time_ms: u32) -> u32 {
        if cur_time_ms < derived.on_time_ms {
            params.amplitude as u32
        } else {
            0
        }
    }
}

/// `period_ms * duty_cycle_q10 >> 10`
pub fn on_time_ms(period_ms: u32, duty_cycle_q10: u16) -> u32 {
    ((period_ms as u64 * duty_cycle_q10 as u64) >> 10) as u32
}
