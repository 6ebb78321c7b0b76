pub mod fixed_point;
pub mod message;
pub mod waveform;
