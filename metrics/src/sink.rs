//! The emission seam between the engine and whatever records metrics.

use crate::MetricValue;

/// Consumer of named metric values.
///
/// Emission is infallible; a panic inside `emit` propagates to the caller.
pub trait MetricSink {
    /// Records one metric value under `key`.
    fn emit(&mut self, key: &str, value: MetricValue);
}

impl<S: MetricSink + ?Sized> MetricSink for &mut S {
    fn emit(&mut self, key: &str, value: MetricValue) {
        (**self).emit(key, value);
    }
}

/// A sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl MetricSink for NullSink {
    fn emit(&mut self, _key: &str, _value: MetricValue) {}
}

/// Adapts a closure into a [`MetricSink`].
#[derive(Debug, Clone, Copy)]
pub struct FnSink<F>(pub F);

impl<F> MetricSink for FnSink<F>
where
    F: FnMut(&str, MetricValue),
{
    fn emit(&mut self, key: &str, value: MetricValue) {
        (self.0)(key, value);
    }
}
