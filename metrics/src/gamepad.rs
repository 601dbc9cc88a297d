use std::sync::{Arc, Mutex};

use common::controller::GamepadState;

use crate::gauge::GaugeSource;

/// Stick readings below this are treated as a resting stick.
const STICK_DEADBAND: f32 = 0.05;

/// Shared snapshot of a gamepad. The input loop writes it, the per-axis gauge
/// sources read it.
#[derive(Clone, Default)]
pub struct GamepadHandle(Arc<Mutex<GamepadState>>);

impl GamepadHandle {
    pub fn update(&self, state: GamepadState) {
        *self.0.lock().unwrap() = state;
    }

    pub fn get(&self) -> GamepadState {
        *self.0.lock().unwrap()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum GamepadAxis {
    LeftX,
    LeftY,
    RightX,
    RightY,
    LeftTrigger,
    RightTrigger,
}

impl GamepadAxis {
    pub const ALL: [GamepadAxis; 6] = [
        GamepadAxis::LeftX,
        GamepadAxis::LeftY,
        GamepadAxis::RightX,
        GamepadAxis::RightY,
        GamepadAxis::LeftTrigger,
        GamepadAxis::RightTrigger,
    ];

    fn suffix(&self) -> &'static str {
        match self {
            GamepadAxis::LeftX => "left-x",
            GamepadAxis::LeftY => "left-y",
            GamepadAxis::RightX => "right-x",
            GamepadAxis::RightY => "right-y",
            GamepadAxis::LeftTrigger => "left-trigger",
            GamepadAxis::RightTrigger => "right-trigger",
        }
    }

    fn extract(&self, state: &GamepadState) -> f32 {
        match self {
            GamepadAxis::LeftX => common::deadband(state.left_x, STICK_DEADBAND),
            GamepadAxis::LeftY => common::deadband(state.left_y, STICK_DEADBAND),
            GamepadAxis::RightX => common::deadband(state.right_x, STICK_DEADBAND),
            GamepadAxis::RightY => common::deadband(state.right_y, STICK_DEADBAND),
            // Triggers rest at zero mechanically, no deadband needed
            GamepadAxis::LeftTrigger => state.left_trigger,
            GamepadAxis::RightTrigger => state.right_trigger,
        }
    }
}

/// Exposes one axis of a shared gamepad as a gauge.
pub struct GamepadAxisSource {
    name: String,
    axis: GamepadAxis,
    gamepad: GamepadHandle,
}

impl GamepadAxisSource {
    pub fn new(gamepad_name: &str, axis: GamepadAxis, gamepad: GamepadHandle) -> Self {
        Self {
            name: format!("{}-{}", gamepad_name, axis.suffix()),
            axis,
            gamepad,
        }
    }
}

impl GaugeSource for GamepadAxisSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&mut self) -> Option<f64> {
        let state = self.gamepad.get();
        Some(self.axis.extract(&state) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_sources_snapshot_the_shared_state() {
        let gamepad = GamepadHandle::default();
        let mut source = GamepadAxisSource::new("driver", GamepadAxis::LeftX, gamepad.clone());

        assert_eq!(source.read(), Some(0.0));

        gamepad.update(GamepadState {
            left_x: 0.5,
            ..Default::default()
        });
        assert_eq!(source.read(), Some(0.5));
    }

    #[test]
    fn stick_axes_apply_the_deadband() {
        let gamepad = GamepadHandle::default();
        gamepad.update(GamepadState {
            right_y: 0.02,
            ..Default::default()
        });

        let mut source = GamepadAxisSource::new("driver", GamepadAxis::RightY, gamepad);
        assert_eq!(source.read(), Some(0.0));
    }

    #[test]
    fn triggers_report_raw_values() {
        let gamepad = GamepadHandle::default();
        gamepad.update(GamepadState {
            left_trigger: 0.02,
            ..Default::default()
        });

        let mut source = GamepadAxisSource::new("driver", GamepadAxis::LeftTrigger, gamepad);
        assert_eq!(source.read(), Some(0.02f32 as f64));
    }

    #[test]
    fn sources_are_named_after_the_gamepad_and_axis() {
        let gamepad = GamepadHandle::default();
        let source = GamepadAxisSource::new("operator", GamepadAxis::RightX, gamepad);

        assert_eq!(source.name(), "operator-right-x");
    }
}
