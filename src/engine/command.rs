use crossbeam_channel::{Receiver, Sender, bounded};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::error::EngineError;
use super::sink::OutputSink;
use super::state::{Applied, Engine, QueryResponse};
use super::timer::{ThreadTicker, TickTimer};
use crate::shape::Shape;
use crate::types::message::{ConfigMessage, ParamKind};
use crate::types::waveform::Waveform;

/// Depth of each engine's configuration inbox
pub const INBOX_CAPACITY: usize = 8;

/// Caller-side handle to an engine's configuration and query channels
/// Cheap to clone; the engine shuts down once every handle is dropped
#[derive(Debug, Clone)]
pub struct EngineHandle {
    waveform: Waveform,
    inbox: Sender<ConfigMessage>,
    responses: Arc<Mutex<Receiver<QueryResponse>>>,
}

impl EngineHandle {
    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Enqueue a configuration change without waiting for it to be applied
    /// Blocks only while the inbox is full. Queries must go through `query_param`.
    pub fn send_config(&self, message: ConfigMessage) -> Result<(), EngineError> {
        if let ConfigMessage::Query(param) = message {
            return Err(EngineError::UnpairedQuery {
                waveform: self.waveform,
                param,
            });
        }
        self.enqueue(message)
    }

    fn enqueue(&self, message: ConfigMessage) -> Result<(), EngineError> {
        self.inbox
            .send(message)
            .map_err(|_| EngineError::Disconnected(self.waveform))
    }

    /// Read a parameter back in user-facing units, blocking until the engine replies
    ///
    /// Messages are processed in order, so the reply reflects every change
    /// sent before the query.
    pub fn query_param(&self, param: ParamKind) -> Result<u32, EngineError> {
        // Held across enqueue and receive so concurrent callers never take each other's reply
        let responses = self.responses.lock().unwrap_or_else(PoisonError::into_inner);
        self.enqueue(ConfigMessage::Query(param))?;
        responses
            .recv()
            .map_err(|_| EngineError::Disconnected(self.waveform))?
    }
}

/// Create the inbox and response channels for one engine
pub fn channels(waveform: Waveform) -> (EngineHandle, Receiver<ConfigMessage>, Sender<QueryResponse>) {
    let (inbox_tx, inbox_rx) = bounded(INBOX_CAPACITY);
    let (response_tx, response_rx) = bounded(1);

    let handle = EngineHandle {
        waveform,
        inbox: inbox_tx,
        responses: Arc::new(Mutex::new(response_rx)),
    };
    (handle, inbox_rx, response_tx)
}

/// Drain the inbox, applying each message in arrival order
/// Returns once every `EngineHandle` has been dropped
pub fn run_command_loop<S, O, T>(
    engine: &Engine<S, O>,
    inbox: Receiver<ConfigMessage>,
    responses: Sender<QueryResponse>,
    timer: T,
) where
    S: Shape,
    O: OutputSink,
    T: TickTimer,
{
    let waveform = S::WAVEFORM;
    debug!(%waveform, "command loop started");

    while let Ok(message) = inbox.recv() {
        match engine.apply(message) {
            Applied::Amplitude(amplitude) => debug!(%waveform, amplitude, "amplitude updated"),
            Applied::Period { period_ms, clamped } => {
                if clamped {
                    warn!(%waveform, "zero period requested, using 1 ms");
                }
                debug!(%waveform, period_ms, "period updated");
            }
            Applied::DutyCycle(duty_cycle_q10) => {
                debug!(%waveform, duty_cycle_q10, "duty cycle updated")
            }
            Applied::IgnoredDutyCycle => debug!(%waveform, "duty cycle ignored"),
            Applied::Started => {
                timer.start();
                info!(%waveform, "output enabled");
            }
            Applied::Stopped => {
                timer.stop();
                info!(%waveform, "output disabled");
            }
            Applied::Reply(response) => {
                if let Err(err) = &response {
                    debug!(%waveform, %err, "query rejected");
                }
                // The querying caller is already waiting, so the slot is always free
                if responses.try_send(response).is_err() {
                    warn!(%waveform, "query reply dropped");
                }
            }
        }
    }

    timer.stop();
    debug!(%waveform, "command loop exiting");
}

/// Spawn an engine with its own command thread and tick thread
pub fn spawn_engine<S, O>(sink: O, interval: Duration) -> Result<(EngineHandle, JoinHandle<()>), EngineError>
where
    S: Shape,
    O: OutputSink,
{
    let waveform = S::WAVEFORM;
    let spawn_error = |source| EngineError::Spawn { waveform, source };

    let engine = Arc::new(Engine::<S, O>::new(sink));
    let (handle, inbox, responses) = channels(waveform);

    let ticking = engine.clone();
    let timer = ThreadTicker::spawn(waveform.name(), interval, move || ticking.tick())
        .map_err(spawn_error)?;

    let thread = thread::Builder::new()
        .name(format!("{waveform}-cmd"))
        .spawn(move || run_command_loop(&*engine, inbox, responses, timer))
        .map_err(spawn_error)?;

    Ok((handle, thread))
}
