use std::sync::{Mutex, MutexGuard, PoisonError};

use super::error::EngineError;
use super::parameters::{ElapsedTime, WaveformParams};
use super::sink::OutputSink;
use crate::shape::Shape;
use crate::types::fixed_point::{
    amplitude_to_percent, duty_cycle_to_percent, scale_amplitude, scale_duty_cycle,
};
use crate::types::message::{ConfigMessage, ParamKind};

/// Reply to a parameter query
pub type QueryResponse = Result<u32, EngineError>;

/// Everything the tick handler and the command loop share
/// Guarded as a unit so a tick never pairs an old period with a new derived value
struct EngineState<S: Shape, O> {
    params: WaveformParams,
    derived: S::Derived,
    elapsed: ElapsedTime,
    sink: O,
}

/// Result of applying one configuration message
/// Returned to the command loop so timer control and logging happen outside the lock
#[derive(Debug)]
pub enum Applied {
    Amplitude(u16),
    Period { period_ms: u32, clamped: bool },
    DutyCycle(u16),
    /// Duty cycle sent to a shape without one
    IgnoredDutyCycle,
    Started,
    Stopped,
    Reply(QueryResponse),
}

/// Consistent copy of an engine's state
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<D> {
    pub params: WaveformParams,
    pub derived: D,
    pub cur_time_ms: u32,
}

/// One waveform engine: parameters, elapsed time and output sink behind one lock
///
/// `tick` is the real-time path and `apply` is the configuration path.
/// Both hold the lock for a bounded, allocation-free section.
pub struct Engine<S: Shape, O: OutputSink> {
    state: Mutex<EngineState<S, O>>,
}

impl<S: Shape, O: OutputSink> Engine<S, O> {
    /// Create a disabled engine with default parameters
    pub fn new(sink: O) -> Self {
        let params = WaveformParams::new();
        Self {
            state: Mutex::new(EngineState {
                derived: S::recompute_derived(&params),
                params,
                elapsed: ElapsedTime::new(),
                sink,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, EngineState<S, O>> {
        // State is plain data, a panic elsewhere cannot leave it half-written
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Periodic tick: sample the waveform at the current time and write it out
    pub fn tick(&self) {
        let mut state = self.lock();
        if !state.params.running {
            return;
        }

        let period_ms = state.params.period_ms;
        let cur_time_ms = state.elapsed.wrap(period_ms);
        let sample = S::sample(&state.params, &state.derived, cur_time_ms);
        state.sink.write_sample(sample.min(u16::MAX as u32) as u16);
        state.elapsed.advance();
    }

    /// Apply one configuration message under the lock
    pub fn apply(&self, message: ConfigMessage) -> Applied {
        let mut state = self.lock();
        let state = &mut *state;

        match message {
            ConfigMessage::Amplitude(percent) => {
                state.params.amplitude = scale_amplitude(percent);
                Applied::Amplitude(state.params.amplitude)
            }
            ConfigMessage::Period(period_ms) => {
                let clamped = period_ms == 0;
                state.params.period_ms = period_ms.max(1);
                state.derived = S::recompute_derived(&state.params);
                Applied::Period {
                    period_ms: state.params.period_ms,
                    clamped,
                }
            }
            ConfigMessage::DutyCycle(percent) => {
                if !S::WAVEFORM.has_duty_cycle() {
                    return Applied::IgnoredDutyCycle;
                }
                state.params.duty_cycle_q10 = scale_duty_cycle(percent);
                state.derived = S::recompute_derived(&state.params);
                Applied::DutyCycle(state.params.duty_cycle_q10)
            }
            ConfigMessage::Enable(value) => {
                state.params.running = value != 0 && !state.params.running;
                state.elapsed.reset();
                if state.params.running {
                    Applied::Started
                } else {
                    state.sink.write_sample(0);
                    Applied::Stopped
                }
            }
            ConfigMessage::Query(param) => Applied::Reply(read_param::<S>(&state.params, param)),
        }
    }

    /// Copy of the current state, taken under the lock
    #[cfg(test)]
    pub fn snapshot(&self) -> Snapshot<S::Derived> {
        let state = self.lock();
        Snapshot {
            params: state.params,
            derived: state.derived,
            cur_time_ms: state.elapsed.get(),
        }
    }
}

/// Read a parameter in user-facing units
fn read_param<S: Shape>(params: &WaveformParams, param: ParamKind) -> QueryResponse {
    match param {
        ParamKind::Amplitude => Ok(amplitude_to_percent(params.amplitude)),
        ParamKind::Period => Ok(params.period_ms),
        ParamKind::DutyCycle if S::WAVEFORM.has_duty_cycle() => {
            Ok(duty_cycle_to_percent(params.duty_cycle_q10))
        }
        ParamKind::DutyCycle => Err(EngineError::UnsupportedParam {
            waveform: S::WAVEFORM,
            param,
        }),
        ParamKind::Enable => Ok(params.running as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::sink::RecordingSink;
    use crate::shape::{Pulse, Sawtooth, Sine, Triangle};

    fn engine<S: Shape>() -> (Engine<S, RecordingSink>, RecordingSink) {
        let sink = RecordingSink::new();
        (Engine::new(sink.clone()), sink)
    }

    fn query<S: Shape>(engine: &Engine<S, RecordingSink>, param: ParamKind) -> QueryResponse {
        match engine.apply(ConfigMessage::Query(param)) {
            Applied::Reply(response) => response,
            other => panic!("expected reply, got {:?}", other),
        }
    }

    #[test]
    fn test_disabled_engine_writes_nothing() {
        let (engine, sink) = engine::<Pulse>();
        for _ in 0..10 {
            engine.tick();
        }
        assert!(sink.take().is_empty());
    }

    #[test]
    fn test_pulse_default_scenario() {
        let (engine, sink) = engine::<Pulse>();
        assert!(matches!(engine.apply(ConfigMessage::toggle()), Applied::Started));

        for _ in 0..200 {
            engine.tick();
        }
        let samples = sink.take();
        assert_eq!(samples.len(), 200);
        for cycle in samples.chunks(100) {
            assert!(cycle[..50].iter().all(|&s| s == 0xFFFF));
            assert!(cycle[50..].iter().all(|&s| s == 0));
        }
    }

    #[test]
    fn test_disable_writes_zero_and_stops_ticks() {
        let (engine, sink) = engine::<Pulse>();
        engine.apply(ConfigMessage::toggle());
        for _ in 0..10 {
            engine.tick();
        }
        assert!(matches!(engine.apply(ConfigMessage::disable()), Applied::Stopped));
        for _ in 0..10 {
            engine.tick();
        }

        let samples = sink.take();
        assert_eq!(samples.len(), 11);
        assert_eq!(samples.last(), Some(&0));
        assert_eq!(engine.snapshot().cur_time_ms, 0);
    }

    #[test]
    fn test_toggle_twice_stops() {
        let (engine, sink) = engine::<Sine>();
        assert!(matches!(engine.apply(ConfigMessage::Enable(7)), Applied::Started));
        engine.tick();
        assert!(matches!(engine.apply(ConfigMessage::Enable(1)), Applied::Stopped));
        assert_eq!(sink.take(), vec![0x8000, 0]);
        assert_eq!(query(&engine, ParamKind::Enable).unwrap(), 0);
    }

    #[test]
    fn test_reenable_restarts_from_zero() {
        let (engine, sink) = engine::<Sawtooth>();
        engine.apply(ConfigMessage::toggle());
        for _ in 0..30 {
            engine.tick();
        }
        engine.apply(ConfigMessage::disable());
        sink.take();

        engine.apply(ConfigMessage::toggle());
        engine.tick();
        engine.tick();
        assert_eq!(sink.take(), vec![0, (0xFFFF / 99) as u16]);
    }

    #[test]
    fn test_period_change_updates_derived_together() {
        let (engine, _sink) = engine::<Triangle>();
        engine.apply(ConfigMessage::Period(200));
        let snap = engine.snapshot();
        assert_eq!(snap.params.period_ms, 200);
        assert_eq!(snap.derived.half_period_ms, 100);
    }

    #[test]
    fn test_zero_period_clamped() {
        let (engine, sink) = engine::<Sawtooth>();
        match engine.apply(ConfigMessage::Period(0)) {
            Applied::Period { period_ms, clamped } => {
                assert_eq!(period_ms, 1);
                assert!(clamped);
            }
            other => panic!("unexpected {:?}", other),
        }
        engine.apply(ConfigMessage::toggle());
        engine.tick();
        engine.tick();
        assert_eq!(sink.take(), vec![0xFFFF, 0xFFFF]);
    }

    #[test]
    fn test_shrinking_period_wraps_elapsed() {
        let (engine, sink) = engine::<Sawtooth>();
        engine.apply(ConfigMessage::toggle());
        for _ in 0..80 {
            engine.tick();
        }
        sink.take();
        engine.apply(ConfigMessage::Period(10));
        engine.tick();
        assert_eq!(sink.take(), vec![0]);
    }

    #[test]
    fn test_query_read_back() {
        let (engine, _sink) = engine::<Pulse>();
        engine.apply(ConfigMessage::Amplitude(37));
        engine.apply(ConfigMessage::Period(250));
        engine.apply(ConfigMessage::DutyCycle(33));

        assert_eq!(query(&engine, ParamKind::Amplitude).unwrap(), 37);
        assert_eq!(query(&engine, ParamKind::Period).unwrap(), 250);
        assert_eq!(query(&engine, ParamKind::DutyCycle).unwrap(), 33);
        assert_eq!(query(&engine, ParamKind::Enable).unwrap(), 0);
    }

    #[test]
    fn test_duty_cycle_recomputes_on_time() {
        let (engine, _sink) = engine::<Pulse>();
        engine.apply(ConfigMessage::DutyCycle(25));
        assert_eq!(engine.snapshot().derived.on_time_ms, 25);
        engine.apply(ConfigMessage::Period(1000));
        assert_eq!(engine.snapshot().derived.on_time_ms, 250);
    }

    #[test]
    fn test_duty_cycle_unsupported_on_other_shapes() {
        let (engine, _sink) = engine::<Triangle>();
        assert!(matches!(
            engine.apply(ConfigMessage::DutyCycle(10)),
            Applied::IgnoredDutyCycle
        ));
        assert!(matches!(
            query(&engine, ParamKind::DutyCycle),
            Err(EngineError::UnsupportedParam { .. })
        ));
    }
}
