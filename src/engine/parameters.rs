use crate::types::fixed_point::{scale_amplitude, scale_duty_cycle};

/// Startup amplitude in percent
pub const DEFAULT_AMPLITUDE_PERCENT: u32 = 100;
/// Startup period in milliseconds
pub const DEFAULT_PERIOD_MS: u32 = 100;
/// Startup duty cycle in percent (pulse only)
pub const DEFAULT_DUTY_CYCLE_PERCENT: u32 = 50;

/// Per-engine waveform parameters
/// Only ever mutated under the engine lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveformParams {
    /// Fixed-point fraction of full scale (0-65535)
    pub amplitude: u16,
    /// Period in milliseconds, kept >= 1 by the engine
    pub period_ms: u32,
    /// Q0.10 duty cycle (0-1024), only read by the pulse shape
    pub duty_cycle_q10: u16,
    pub running: bool,
}

impl WaveformParams {
    pub fn new() -> Self {
        Self {
            amplitude: scale_amplitude(DEFAULT_AMPLITUDE_PERCENT),
            period_ms: DEFAULT_PERIOD_MS,
            duty_cycle_q10: scale_duty_cycle(DEFAULT_DUTY_CYCLE_PERCENT),
            running: false,
        }
    }
}

impl Default for WaveformParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Milliseconds elapsed within the current period
/// Owned by the tick handler, reset on enable, disable and period wrap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElapsedTime {
    cur_time_ms: u32,
}

impl ElapsedTime {
    pub fn new() -> Self {
        Self { cur_time_ms: 0 }
    }

    #[cfg(test)]
    pub fn get(&self) -> u32 {
        self.cur_time_ms
    }

    /// Wrap back to zero once the period has elapsed, returning the time to sample at
    pub fn wrap(&mut self, period_ms: u32) -> u32 {
        if self.cur_time_ms >= period_ms {
            self.cur_time_ms = 0;
        }
        self.cur_time_ms
    }

    pub fn advance(&mut self) {
        self.cur_time_ms = self.cur_time_ms.wrapping_add(1);
    }

    pub fn reset(&mut self) {
        self.cur_time_ms = 0;
    }
}
