//! Frame-driven input for the geometric core. The windowing layer polls the
//! platform however it likes and hands this module one [`FrameInput`] sample
//! per frame; nothing here knows about the underlying input API.

pub mod arcball;

pub use self::arcball::{screen_to_sphere, ArcballHandler};

/// One frame's pointer sample, threaded explicitly through the update call
/// instead of living in process-wide state.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Whether the rotation button is held this frame.
    pub button_down: bool,
    /// Cursor position in pixels, origin at the top-left of the viewport.
    pub cursor_x: f64,
    pub cursor_y: f64,
}
