/// Full-scale amplitude value (16-bit output port)
pub const AMPLITUDE_FULL_SCALE: u32 = 0xFFFF;

/// Full-scale duty cycle in Q0.10
pub const DUTY_CYCLE_FULL_SCALE: u32 = 1024;

/// Convert a user-facing percentage (0-100) to a fixed-point amplitude (0-65535)
/// Performs no clamping - callers validate the range first
pub fn scale_amplitude(percent: u32) -> u16 {
    debug_assert!(percent <= 100, "amplitude percent out of range: {percent}");
    (percent * AMPLITUDE_FULL_SCALE / 100) as u16
}

/// Convert a user-facing percentage (0-100) to a Q0.10 duty cycle (0-1024)
pub fn scale_duty_cycle(percent: u32) -> u16 {
    debug_assert!(percent <= 100, "duty cycle percent out of range: {percent}");
    (percent * DUTY_CYCLE_FULL_SCALE / 100) as u16
}

/// Convert a fixed-point amplitude back to a percentage, rounding to nearest
pub fn amplitude_to_percent(amplitude: u16) -> u32 {
    (amplitude as u32 * 100 + 0x7FFF) / AMPLITUDE_FULL_SCALE
}

/// Convert a Q0.10 duty cycle back to a percentage, rounding to nearest
pub fn duty_cycle_to_percent(duty_cycle_q10: u16) -> u32 {
    (duty_cycle_q10 as u32 * 100 + 512) / DUTY_CYCLE_FULL_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_endpoints() {
        assert_eq!(scale_amplitude(0), 0);
        assert_eq!(scale_amplitude(100), 0xFFFF);
        assert_eq!(scale_amplitude(50), 32767);
        assert_eq!(scale_duty_cycle(0), 0);
        assert_eq!(scale_duty_cycle(50), 512);
        assert_eq!(scale_duty_cycle(100), 1024);
    }

    #[test]
    fn test_amplitude_round_trip() {
        for percent in 0..=100 {
            let back = amplitude_to_percent(scale_amplitude(percent));
            assert!(back.abs_diff(percent) <= 1, "{percent} -> {back}");
        }
    }

    #[test]
    fn test_duty_cycle_round_trip() {
        for percent in 0..=100 {
            let back = duty_cycle_to_percent(scale_duty_cycle(percent));
            assert!(back.abs_diff(percent) <= 1, "{percent} -> {back}");
        }
    }

    #[test]
    fn test_inverse_rounding_is_bit_exact() {
        // (amp * 100 + 0x7FFF) / 0xFFFF
        assert_eq!(amplitude_to_percent(327), 0);
        assert_eq!(amplitude_to_percent(328), 1);
        assert_eq!(amplitude_to_percent(0xFFFF), 100);
        // (dc * 100 + 512) / 1024
        assert_eq!(duty_cycle_to_percent(5), 0);
        assert_eq!(duty_cycle_to_percent(6), 1);
        assert_eq!(duty_cycle_to_percent(1024), 100);
    }
}
