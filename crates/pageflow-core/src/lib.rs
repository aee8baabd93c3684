#![cfg_attr(not(test), no_std)]

//! Page navigation controller for embedded GUIs.
//!
//! A bounded page history, ordered lifecycle hooks, and animated appear/disappear
//! transitions driven from the toolkit's render loop. Nothing here allocates.

pub mod history;
pub mod navigator;
pub mod options;
pub mod page;
pub mod router;
pub mod toolkit;
pub mod transition;

pub use navigator::Navigator;
pub use options::{AnimationKind, Direction, OpenOptions, Target};
pub use page::{Hook, Hooks, Page, PageId, PageState};
pub use toolkit::{Axis, Easing, Resolution, Toolkit, Tween};
pub use transition::{TransitionConfig, TransitionToken};

/// Page capacity used when none is given.
pub const DEFAULT_PAGE_CAPACITY: usize = 10;

/// Page manager version as `(major, minor, patch)`.
pub const VERSION: (u8, u8, u8) = (0, 1, 1);

/// Navigation errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavError {
    /// No page was created at the requested ID.
    PageNotRegistered,
    /// History already holds `N` entries.
    HistoryFull,
    /// The toolkit could not create the page object.
    Allocation,
    /// ID is outside `0..N`.
    InvalidPageId,
    /// A live page already occupies the ID.
    PageAlreadyRegistered,
    /// A page this call would animate is still mid-transition.
    TransitionPending,
}

pub type NavResult<T = ()> = Result<T, NavError>;
