//! Fatal check errors
//!
//! Every variant ends the check as UNKNOWN. Probe internals work with
//! `anyhow::Error`; the runner flattens the whole context chain into the
//! message here so the single output line carries the underlying cause.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{0}")]
    LinkProbe(String),

    #[error("{0}")]
    CounterRead(String),

    #[error("Interrupted while sampling {interface}")]
    Interrupted { interface: String },
}

impl CheckError {
    pub fn link_probe(err: anyhow::Error) -> Self {
        CheckError::LinkProbe(format!("{:#}", err))
    }

    pub fn counter_read(err: anyhow::Error) -> Self {
        CheckError::CounterRead(format!("{:#}", err))
    }
}
