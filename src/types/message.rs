use std::fmt;
use std::str::FromStr;

/// Parameters that can be read back from an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Amplitude,
    Period,
    DutyCycle,
    Enable,
}

impl ParamKind {
    pub fn name(self) -> &'static str {
        match self {
            ParamKind::Amplitude => "amplitude",
            ParamKind::Period => "period",
            ParamKind::DutyCycle => "duty",
            ParamKind::Enable => "enable",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "amp" | "amplitude" => Ok(ParamKind::Amplitude),
            "period" | "period_ms" => Ok(ParamKind::Period),
            "duty" | "duty_cycle" | "dutycycle" => Ok(ParamKind::DutyCycle),
            "enable" | "enabled" | "running" => Ok(ParamKind::Enable),
            other => Err(other.to_string()),
        }
    }
}

/// Configuration message sent to an engine's inbox
/// Owned by value, consumed exactly once by the command loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigMessage {
    /// Amplitude in percent (0-100)
    Amplitude(u32),
    /// Period in milliseconds
    Period(u32),
    /// Duty cycle in percent (0-100), pulse only
    DutyCycle(u32),
    /// Non-zero toggles the running state, zero forces it off
    Enable(u32),
    /// Read a parameter back through the response channel
    Query(ParamKind),
}

impl ConfigMessage {
    /// Toggle the running state
    pub fn toggle() -> Self {
        ConfigMessage::Enable(1)
    }

    /// Force the engine off
    pub fn disable() -> Self {
        ConfigMessage::Enable(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_kind_parse() {
        assert_eq!("amp".parse::<ParamKind>(), Ok(ParamKind::Amplitude));
        assert_eq!("PERIOD".parse::<ParamKind>(), Ok(ParamKind::Period));
        assert_eq!("duty".parse::<ParamKind>(), Ok(ParamKind::DutyCycle));
        assert_eq!("enable".parse::<ParamKind>(), Ok(ParamKind::Enable));
        assert!("phase".parse::<ParamKind>().is_err());
    }

    #[test]
    fn test_enable_helpers() {
        assert_eq!(ConfigMessage::toggle(), ConfigMessage::Enable(1));
        assert_eq!(ConfigMessage::disable(), ConfigMessage::Enable(0));
    }
}
