use crate::gamepad::{GamepadAxis, GamepadAxisSource, GamepadHandle};
use crate::gauge::GaugeSource;
use crate::sampling::SamplingSource;

/// Destination for sampled readings. The network reporting backend plugs in
/// here; tests and the exec binary use closures.
pub trait SampleSink {
    fn write_sample(&mut self, name: &str, value: f64) -> anyhow::Result<()>;
}

impl<F: FnMut(&str, f64) -> anyhow::Result<()>> SampleSink for F {
    fn write_sample(&mut self, name: &str, value: f64) -> anyhow::Result<()> {
        self(name, value)
    }
}

/// Polls a set of gauge sources and forwards their readings to a sink.
pub struct MetricsSampler<S> {
    sources: Vec<Box<dyn GaugeSource>>,
    sink: S,
}

impl<S: SampleSink> MetricsSampler<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sources: Vec::new(),
            sink,
        }
    }

    pub fn add_source(&mut self, source: impl GaugeSource + 'static) {
        self.sources.push(Box::new(source));
    }

    /// Registers a source decimated to report on the first poll and then
    /// every `frequency`th poll.
    pub fn add_sampled_source(
        &mut self,
        source: impl GaugeSource + 'static,
        frequency: u64,
    ) -> anyhow::Result<()> {
        let sampled = SamplingSource::new(source, frequency)?;
        self.add_source(sampled);
        Ok(())
    }

    /// Registers one gauge per axis of the gamepad, named
    /// `<name>-<axis>`.
    pub fn add_gamepad(&mut self, name: &str, gamepad: &GamepadHandle) {
        for axis in GamepadAxis::ALL {
            self.add_source(GamepadAxisSource::new(name, axis, gamepad.clone()));
        }
    }

    /// Polls every source once, in registration order. Sources with nothing
    /// to report are skipped; a sink error aborts the rest of the pass.
    pub fn sample_all(&mut self) -> anyhow::Result<()> {
        for source in &mut self.sources {
            if let Some(value) = source.read() {
                self.sink.write_sample(source.name(), value)?;
            }
        }

        Ok(())
    }
}
