use std::fmt;
use std::str::FromStr;

/// The four waveform engines of the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waveform {
    Pulse,
    Sawtooth,
    Triangle,
    Sine,
}

impl Waveform {
    /// All waveforms in bank order
    pub const ALL: [Waveform; 4] = [
        Waveform::Pulse,
        Waveform::Sawtooth,
        Waveform::Triangle,
        Waveform::Sine,
    ];

    /// Lowercase display name
    pub fn name(self) -> &'static str {
        match self {
            Waveform::Pulse => "pulse",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Triangle => "triangle",
            Waveform::Sine => "sine",
        }
    }

    /// Position of this waveform in `ALL`
    pub fn index(self) -> usize {
        match self {
            Waveform::Pulse => 0,
            Waveform::Sawtooth => 1,
            Waveform::Triangle => 2,
            Waveform::Sine => 3,
        }
    }

    /// Whether this waveform has a duty cycle parameter
    pub fn has_duty_cycle(self) -> bool {
        matches!(self, Waveform::Pulse)
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Waveform {
    type Err = String;

    /// Accepts full names plus the short aliases used at the console
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pulse" | "pwm" | "square" => Ok(Waveform::Pulse),
            "sawtooth" | "saw" => Ok(Waveform::Sawtooth),
            "triangle" | "tri" => Ok(Waveform::Triangle),
            "sine" | "sin" => Ok(Waveform::Sine),
            other => Err(other.to_string()),
        }
    }
}
