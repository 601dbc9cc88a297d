use serde::{Serialize, Deserialize};

/// Snapshot of a driver gamepad. Stick axes are in [-1, 1], triggers in [0, 1].
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct GamepadState {
    pub left_x: f32,
    pub left_y: f32,
    pub right_x: f32,
    pub right_y: f32,
    pub left_trigger: f32,
    pub right_trigger: f32,
}
