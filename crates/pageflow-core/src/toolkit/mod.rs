//! Boundary to the rendering toolkit.

mod easing;
pub mod scene;

pub use easing::Easing;

use core::fmt::Debug;

use crate::transition::TransitionToken;

/// Display resolution in pixels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Resolution {
    pub width: i32,
    pub height: i32,
}

impl Resolution {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Coordinate driven by a tween.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    X,
    Y,
}

/// Numeric animation of one object coordinate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tween {
    pub axis: Axis,
    pub from: i32,
    pub to: i32,
    pub duration_ms: u16,
    pub easing: Easing,
}

impl Tween {
    /// Value at `elapsed_ms` into the tween.
    pub fn value_at(&self, elapsed_ms: u64) -> i32 {
        let duration = self.duration_ms as u64;
        if duration == 0 || elapsed_ms >= duration {
            return self.to;
        }

        let step = self.easing.step(elapsed_ms, duration) as i64;
        let span = (self.to as i64) - (self.from as i64);
        (self.from as i64 + ((span * step) >> easing::STEP_SHIFT)) as i32
    }
}

/// Object and animation primitives the navigator needs from a GUI toolkit.
///
/// All calls happen on the render-loop thread. A tween started with
/// [`Toolkit::animate`] runs across several loop ticks; once it has applied its
/// final value the toolkit hands its token back through [`Toolkit::poll_ready`].
pub trait Toolkit {
    type Object: Copy + Eq + Debug;
    type Error: Debug;

    fn resolution(&self) -> Resolution;

    /// Creates a container on the active screen.
    fn create_object(&mut self) -> Result<Self::Object, Self::Error>;

    fn set_hidden(&mut self, obj: Self::Object, hidden: bool);
    fn set_x(&mut self, obj: Self::Object, x: i32);
    fn set_y(&mut self, obj: Self::Object, y: i32);
    fn set_size(&mut self, obj: Self::Object, width: i32, height: i32);
    fn set_radius(&mut self, obj: Self::Object, radius: i32);
    fn set_border_width(&mut self, obj: Self::Object, width: i32);
    fn set_pad_all(&mut self, obj: Self::Object, pad: i32);

    /// Deletes every child of `obj`, keeping `obj` itself.
    fn clean(&mut self, obj: Self::Object);

    fn animate(
        &mut self,
        obj: Self::Object,
        tween: Tween,
        token: TransitionToken,
    ) -> Result<(), Self::Error>;

    /// Next finished tween, in completion order.
    fn poll_ready(&mut self) -> Option<TransitionToken>;

    fn set_root_scrollable(&mut self, _scrollable: bool) {}
}

/// Clears border, corner radius, and padding so a page fills the display edge to edge.
pub fn reset_style<T: Toolkit>(toolkit: &mut T, obj: T::Object) {
    toolkit.set_border_width(obj, 0);
    toolkit.set_radius(obj, 0);
    toolkit.set_pad_all(obj, 0);
}
