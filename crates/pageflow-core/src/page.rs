//! Navigable pages and their lifecycle hooks.

use crate::{options::OpenOptions, toolkit::Toolkit, transition::TransitionToken};

pub type PageId = u8;

/// Lifecycle hook. Receives the toolkit and the page's object.
pub type Hook<T> = fn(&mut T, <T as Toolkit>::Object);

fn noop<T: Toolkit>(_toolkit: &mut T, _obj: T::Object) {}

/// Lifecycle hooks of a page.
///
/// `on_load` and `un_load` always run, so they are plain fn references that
/// default to no-ops. The other four are skipped when absent.
pub struct Hooks<T: Toolkit> {
    pub on_load: Hook<T>,
    pub will_appear: Option<Hook<T>>,
    pub did_appear: Option<Hook<T>>,
    pub will_disappear: Option<Hook<T>>,
    pub did_disappear: Option<Hook<T>>,
    pub un_load: Hook<T>,
}

impl<T: Toolkit> Default for Hooks<T> {
    fn default() -> Self {
        Self {
            on_load: noop::<T>,
            will_appear: None,
            did_appear: None,
            will_disappear: None,
            did_disappear: None,
            un_load: noop::<T>,
        }
    }
}

impl<T: Toolkit> Clone for Hooks<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Toolkit> Copy for Hooks<T> {}

/// Where a page is in its transition lifecycle.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PageState {
    #[default]
    Idle,
    Appearing(TransitionToken),
    Disappearing(TransitionToken),
}

impl PageState {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn token(self) -> Option<TransitionToken> {
        match self {
            Self::Idle => None,
            Self::Appearing(token) | Self::Disappearing(token) => Some(token),
        }
    }
}

pub struct Page<T: Toolkit> {
    object: T::Object,
    pub hooks: Hooks<T>,
    options: OpenOptions,
    back: bool,
    state: PageState,
}

impl<T: Toolkit> Page<T> {
    pub(crate) fn new(object: T::Object) -> Self {
        Self {
            object,
            hooks: Hooks::default(),
            options: OpenOptions::default(),
            back: false,
            state: PageState::Idle,
        }
    }

    pub fn object(&self) -> T::Object {
        self.object
    }

    /// Options from the last open that supplied any.
    pub fn options(&self) -> OpenOptions {
        self.options
    }

    /// Whether the latest transition of this page belongs to a back navigation.
    pub fn is_back(&self) -> bool {
        self.back
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn with_hooks(&mut self, hooks: Hooks<T>) -> &mut Self {
        self.hooks = hooks;
        self
    }

    pub(crate) fn set_options(&mut self, options: OpenOptions) {
        self.options = options;
    }

    pub(crate) fn set_back(&mut self, back: bool) {
        self.back = back;
    }

    pub(crate) fn set_state(&mut self, state: PageState) {
        self.state = state;
    }

    /// Returns to `Idle` if `token` is the page's latest transition.
    pub(crate) fn settle(&mut self, token: TransitionToken) -> bool {
        if self.state.token() == Some(token) {
            self.state = PageState::Idle;
            true
        } else {
            false
        }
    }
}
