//! Movement domain: the signals the controller consumes.
//!
//! The controller never samples the world or the keyboard itself. Callers
//! hand it a [`CollisionSensor`] and an [`InputSource`] on every perception
//! tick; both are borrowed for the duration of the call only.

/// Ground and wall contact, sampled once per perception tick.
pub trait CollisionSensor {
    fn is_grounded(&self) -> bool;
    fn is_wall_detected(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Jump,
    /// Dev trigger that knocks the character back.
    DebugKnockBack,
}

/// Logical axes in [-1, 1] and press edges (true only on the tick the key
/// went down).
pub trait InputSource {
    fn axis(&self, axis: Axis) -> f32;
    fn edge(&self, edge: Edge) -> bool;
}

/// One frame of input with axes clamped into range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSample {
    pub horizontal: f32,
    pub vertical: f32,
    pub jump: bool,
    pub debug_knock_back: bool,
}

impl InputSample {
    pub fn read(source: &impl InputSource) -> Self {
        Self {
            horizontal: clamp_axis(source.axis(Axis::Horizontal)),
            vertical: clamp_axis(source.axis(Axis::Vertical)),
            jump: source.edge(Edge::Jump),
            debug_knock_back: source.edge(Edge::DebugKnockBack),
        }
    }
}

fn clamp_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}
