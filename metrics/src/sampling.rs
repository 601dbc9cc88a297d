use anyhow::bail;

use crate::gauge::GaugeSource;

/// An adapter that reads the wrapped gauge's real value every "n"th time and
/// reports nothing in between.
pub struct SamplingSource<S> {
    source: S,
    sample_frequency: u64,
    sample_count: u64,
}

impl<S: GaugeSource> SamplingSource<S> {
    pub fn new(source: S, sample_frequency: u64) -> anyhow::Result<Self> {
        if sample_frequency == 0 {
            bail!("sample frequency must be positive");
        }

        Ok(Self {
            source,
            sample_frequency,
            sample_count: 0,
        })
    }
}

impl<S: GaugeSource> GaugeSource for SamplingSource<S> {
    fn name(&self) -> &str {
        self.source.name()
    }

    fn read(&mut self) -> Option<f64> {
        self.sample_count += 1;

        // Always report the first value
        if self.sample_count == 1 {
            return self.source.read();
        }

        if self.sample_count % self.sample_frequency == 0 {
            return self.source.read();
        }

        None
    }
}
