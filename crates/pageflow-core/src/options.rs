//! Options attached to a page when it is opened.

/// Transition style.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AnimationKind {
    #[default]
    None,
    Slide,
    /// Reserved. Completes immediately, like `None`.
    SlideScale,
    Popup,
}

/// How a forward navigation affects history.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Target {
    /// Push on top of the current page.
    #[default]
    New,
    /// Replace the current page; its contents are unloaded once it has left.
    Replace,
    /// Reserved. Pushes like `New`.
    Reset,
}

/// Direction requested by the caller.
///
/// Stored with the options but not used by motion planning, which follows the
/// back-flag instead.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Direction {
    #[default]
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OpenOptions {
    pub animation: AnimationKind,
    pub target: Target,
    pub direction: Direction,
}

impl OpenOptions {
    pub const fn new(animation: AnimationKind, target: Target) -> Self {
        Self {
            animation,
            target,
            direction: Direction::Top,
        }
    }

    pub const fn slide() -> Self {
        Self::new(AnimationKind::Slide, Target::New)
    }

    pub const fn popup() -> Self {
        Self::new(AnimationKind::Popup, Target::New)
    }

    pub const fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub const fn is_animated(&self) -> bool {
        matches!(self.animation, AnimationKind::Slide | AnimationKind::Popup)
    }
}
