/// A named source of a single numeric reading, polled on demand.
pub trait GaugeSource {
    fn name(&self) -> &str;

    /// `None` means the source has nothing to report on this poll.
    fn read(&mut self) -> Option<f64>;
}

/// Adapts a closure into a gauge, for computed metrics that live in the
/// surrounding loop.
pub struct FnGauge<F> {
    name: String,
    read_fn: F,
}

impl<F: FnMut() -> f64> FnGauge<F> {
    pub fn new(name: impl Into<String>, read_fn: F) -> Self {
        Self {
            name: name.into(),
            read_fn,
        }
    }
}

impl<F: FnMut() -> f64> GaugeSource for FnGauge<F> {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&mut self) -> Option<f64> {
        Some((self.read_fn)())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fn_gauge_reports_the_closure_value() {
        let mut calls = 0.0;
        let mut gauge = FnGauge::new("calls", move || {
            calls += 1.0;
            calls
        });

        assert_eq!(gauge.name(), "calls");
        assert_eq!(gauge.read(), Some(1.0));
        assert_eq!(gauge.read(), Some(2.0));
    }
}
