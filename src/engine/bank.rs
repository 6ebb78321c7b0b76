use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::{info, warn};

use super::command::{EngineHandle, spawn_engine};
use super::error::EngineError;
use super::sink::{OutputPort, PortSink};
use crate::config::{GeneratorConfig, WaveConfig};
use crate::shape::{Pulse, Sawtooth, Sine, Triangle};
use crate::types::message::ConfigMessage;
use crate::types::waveform::Waveform;

/// One running engine together with the port it drives
pub struct EngineSlot {
    pub handle: EngineHandle,
    pub port: Arc<OutputPort>,
    thread: Option<JoinHandle<()>>,
}

/// The four waveform engines, each with its own lock, threads and output port
pub struct WaveformBank {
    slots: Vec<EngineSlot>,
}

impl WaveformBank {
    /// Spawn all engines, disabled and with default parameters
    pub fn spawn(interval: Duration) -> Result<Self, EngineError> {
        let mut slots = Vec::with_capacity(Waveform::ALL.len());

        for waveform in Waveform::ALL {
            let port = Arc::new(OutputPort::new());
            let sink = PortSink::new(port.clone());
            let (handle, thread) = match waveform {
                Waveform::Pulse => spawn_engine::<Pulse, _>(sink, interval)?,
                Waveform::Sawtooth => spawn_engine::<Sawtooth, _>(sink, interval)?,
                Waveform::Triangle => spawn_engine::<Triangle, _>(sink, interval)?,
                Waveform::Sine => spawn_engine::<Sine, _>(sink, interval)?,
            };
            slots.push(EngineSlot {
                handle,
                port,
                thread: Some(thread),
            });
        }

        info!(engines = slots.len(), tick_us = interval.as_micros() as u64, "waveform bank started");
        Ok(Self { slots })
    }

    pub fn slot(&self, waveform: Waveform) -> &EngineSlot {
        &self.slots[waveform.index()]
    }

    pub fn handle(&self, waveform: Waveform) -> &EngineHandle {
        &self.slot(waveform).handle
    }

    pub fn port(&self, waveform: Waveform) -> &OutputPort {
        &self.slot(waveform).port
    }

    /// Push startup settings through the regular configuration channel
    pub fn apply_config(&self, config: &GeneratorConfig) -> Result<(), EngineError> {
        for waveform in Waveform::ALL {
            apply_wave_config(self.handle(waveform), config.wave(waveform))?;
        }
        Ok(())
    }

    /// Drop every handle and wait for the engine threads to finish
    pub fn shutdown(mut self) {
        self.stop_all();
    }

    fn stop_all(&mut self) {
        if self.slots.is_empty() {
            return;
        }
        for slot in &self.slots {
            // Zero the port before the engine goes away
            let _ = slot.handle.send_config(ConfigMessage::disable());
        }
        let threads: Vec<_> = self
            .slots
            .drain(..)
            .filter_map(|slot| slot.thread.map(|thread| (slot.handle.waveform(), thread)))
            .collect();

        for (waveform, thread) in threads {
            if thread.join().is_err() {
                warn!(%waveform, "engine thread panicked");
            }
        }
        info!("waveform bank stopped");
    }
}

impl Drop for WaveformBank {
    fn drop(&mut self) {
        self.stop_all();
    }
}

fn apply_wave_config(handle: &EngineHandle, wave: &WaveConfig) -> Result<(), EngineError> {
    handle.send_config(ConfigMessage::Amplitude(wave.amplitude))?;
    handle.send_config(ConfigMessage::Period(wave.period_ms))?;
    if let Some(duty_cycle) = wave.duty_cycle {
        handle.send_config(ConfigMessage::DutyCycle(duty_cycle))?;
    }
    if wave.enabled {
        // Engines start disabled, so one toggle turns the output on
        handle.send_config(ConfigMessage::toggle())?;
    }
    Ok(())
}
