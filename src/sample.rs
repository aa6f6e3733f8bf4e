//! Drawing per-trial variable bindings from the external sampling subsystem.

use crate::value::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A capability that produces one concrete numeric value on demand, supplied
/// by the external sampling subsystem.
pub trait SamplingSet: fmt::Debug + Send + Sync {
    /// Draws one concrete value.
    fn gen_sample(&self) -> Value;
}

/// Draws `samples` independent variable bindings.
///
/// Each returned map binds every name in `symbols` to a value drawn from the
/// matching entry of `sampling_sets`. The maps come back in trial order and are
/// intended to be short-lived: one per trial, discarded after evaluation.
///
/// Every symbol must have an entry in `sampling_sets`; a missing entry is a
/// bug in the caller and panics on lookup rather than being validated here.
pub fn gen_symbols_samples(
    symbols: &[String],
    samples: usize,
    sampling_sets: &HashMap<String, Arc<dyn SamplingSet>>,
) -> Vec<HashMap<String, Value>> {
    (0..samples)
        .map(|_| {
            symbols
                .iter()
                .map(|symbol| (symbol.clone(), sampling_sets[symbol.as_str()].gen_sample()))
                .collect()
        })
        .collect()
}
