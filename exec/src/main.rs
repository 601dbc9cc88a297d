use std::thread;
use std::time::Duration;

use common::controller::GamepadState;
use metrics::gamepad::GamepadHandle;
use metrics::gauge::FnGauge;
use metrics::sampler::MetricsSampler;

const POLL_PERIOD: Duration = Duration::from_millis(20);

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Stdout)
        .init();

    let gamepad = GamepadHandle::default();

    let mut sampler = MetricsSampler::new(|name: &str, value: f64| -> anyhow::Result<()> {
        log::info!("{}: {:.3}", name, value);
        Ok(())
    });

    sampler.add_gamepad("driver", &gamepad);

    let mut ticks = 0u64;
    sampler.add_sampled_source(
        FnGauge::new("loop-tick", move || {
            ticks += 1;
            ticks as f64
        }),
        50,
    )?;

    // Stand-in for a real battery sensor until one is wired up
    let mut charge = 100.0;
    sampler.add_sampled_source(
        FnGauge::new("battery-charge", move || {
            charge -= 0.001;
            charge
        }),
        250,
    )?;

    log::info!("polling every {:?}", POLL_PERIOD);

    let mut t = 0.0f32;
    loop {
        // Sweep the sticks so the gauges have something to show
        t += POLL_PERIOD.as_secs_f32();
        gamepad.update(GamepadState {
            left_x: common::clamp_axis(t.sin()),
            left_y: common::clamp_axis(t.cos()),
            right_x: common::clamp_axis((t * 0.5).sin()),
            right_y: 0.0,
            left_trigger: t.sin().abs(),
            right_trigger: 0.0,
        });

        sampler.sample_all()?;

        thread::sleep(POLL_PERIOD);
    }
}
