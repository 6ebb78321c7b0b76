use thiserror::Error;

use crate::types::message::ParamKind;
use crate::types::waveform::Waveform;

/// Errors surfaced by an engine handle
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine's command loop has exited
    #[error("{0} engine is no longer running")]
    Disconnected(Waveform),

    /// The engine has no such parameter (duty cycle on a non-pulse shape)
    #[error("{waveform} engine has no {param} parameter")]
    UnsupportedParam { waveform: Waveform, param: ParamKind },

    /// Queries carry a reply and must be issued with `query_param`
    #[error("{param} query on {waveform} engine sent without waiting for a reply")]
    UnpairedQuery { waveform: Waveform, param: ParamKind },

    #[error("failed to spawn {waveform} engine thread")]
    Spawn {
        waveform: Waveform,
        #[source]
        source: std::io::Error,
    },
}
