use std::sync::Arc;
use std::sync::atomic::{AtomicU16, AtomicU64, Ordering};

/// Destination for generated samples
/// Called from the tick path with the engine lock held - must not block or allocate
pub trait OutputSink: Send + 'static {
    fn write_sample(&mut self, value: u16);
}

/// Parallel output port shared between an engine and observers
/// Lock-free so status readers never contend with the tick handler
#[derive(Debug, Default)]
pub struct OutputPort {
    value: AtomicU16,
    writes: AtomicU64,
}

impl OutputPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last sample written to the port
    pub fn value(&self) -> u16 {
        self.value.load(Ordering::Relaxed)
    }

    /// Number of samples written since startup
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }
}

/// Sink that writes into a shared `OutputPort`
#[derive(Debug, Clone)]
pub struct PortSink {
    port: Arc<OutputPort>,
}

impl PortSink {
    pub fn new(port: Arc<OutputPort>) -> Self {
        Self { port }
    }
}

impl OutputSink for PortSink {
    fn write_sample(&mut self, value: u16) {
        self.port.value.store(value, Ordering::Relaxed);
        self.port.writes.fetch_add(1, Ordering::Relaxed);
    }
}

/// Sink recording every sample, for tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub samples: Arc<std::sync::Mutex<Vec<u16>>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<u16> {
        std::mem::take(&mut *self.samples.lock().unwrap())
    }
}

#[cfg(test)]
impl OutputSink for RecordingSink {
    fn write_sample(&mut self, value: u16) {
        self.samples.lock().unwrap().push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_sink_updates_port() {
        let port = Arc::new(OutputPort::new());
        let mut sink = PortSink::new(port.clone());

        assert_eq!(port.writes(), 0);
        sink.write_sample(1234);
        sink.write_sample(42);

        assert_eq!(port.value(), 42);
        assert_eq!(port.writes(), 2);
    }
}
