use crossbeam_channel::{Sender, never, select, tick, unbounded};
use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::debug;

/// Tick interval of every engine
pub const TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Periodic tick source an engine can arm and disarm
pub trait TickTimer: Send + 'static {
    /// Start (or restart) periodic ticks
    fn start(&self);
    /// Stop periodic ticks, idempotent
    fn stop(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickerCommand {
    Start,
    Stop,
}

/// Dedicated thread invoking a callback at a fixed interval while armed
///
/// Ticks that cannot be delivered on time are dropped rather than queued,
/// so a stalled callback never causes a burst of catch-up ticks.
pub struct ThreadTicker {
    control: Option<Sender<TickerCommand>>,
    thread: Option<JoinHandle<()>>,
}

impl ThreadTicker {
    /// Spawn the ticker thread, initially disarmed
    pub fn spawn<F>(name: &str, interval: Duration, mut on_tick: F) -> io::Result<Self>
    where
        F: FnMut() + Send + 'static,
    {
        let (control, control_rx) = unbounded::<TickerCommand>();
        let label = name.to_string();

        let thread = thread::Builder::new()
            .name(format!("{name}-tick"))
            .spawn(move || {
                let mut ticks = never::<Instant>();
                loop {
                    // None means a tick fired
                    let command = select! {
                        recv(control_rx) -> command => Some(command),
                        recv(ticks) -> _ => None,
                    };
                    match command {
                        None => on_tick(),
                        Some(Ok(TickerCommand::Start)) => ticks = tick(interval),
                        Some(Ok(TickerCommand::Stop)) => ticks = never(),
                        Some(Err(_)) => break,
                    }
                }
                debug!(ticker = %label, "ticker thread exiting");
            })?;

        Ok(Self {
            control: Some(control),
            thread: Some(thread),
        })
    }

    fn send(&self, command: TickerCommand) {
        if let Some(control) = &self.control {
            // Only fails once the thread is gone, at which point there is nothing to control
            let _ = control.send(command);
        }
    }
}

impl TickTimer for ThreadTicker {
    fn start(&self) {
        self.send(TickerCommand::Start);
    }

    fn stop(&self) {
        self.send(TickerCommand::Stop);
    }
}

impl Drop for ThreadTicker {
    fn drop(&mut self) {
        // Disconnecting the control channel ends the thread loop
        self.control.take();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Timer that only records what it was asked to do, for driving ticks by hand
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    pub armed: std::sync::Arc<std::sync::atomic::AtomicBool>,
    pub starts: std::sync::Arc<std::sync::atomic::AtomicUsize>,
}

#[cfg(test)]
impl TickTimer for ManualTimer {
    fn start(&self) {
        use std::sync::atomic::Ordering;
        self.armed.store(true, Ordering::SeqCst);
        self.starts.fetch_add(1, Ordering::SeqCst);
    }

    fn stop(&self) {
        self.armed.store(false, std::sync::atomic::Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_ticker_idle_until_started() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let ticker = ThreadTicker::spawn("idle", TICK_INTERVAL, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), 0);
        drop(ticker);
    }

    #[test]
    fn test_ticker_start_stop() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let ticker = ThreadTicker::spawn("startstop", TICK_INTERVAL, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        ticker.start();
        thread::sleep(Duration::from_millis(50));
        ticker.stop();
        thread::sleep(Duration::from_millis(10));

        let after_stop = count.load(Ordering::SeqCst);
        assert!(after_stop > 0, "ticker never fired");

        thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn test_drop_joins_thread() {
        let ticker = ThreadTicker::spawn("drop", TICK_INTERVAL, || {}).unwrap();
        ticker.start();
        drop(ticker);
    }
}
