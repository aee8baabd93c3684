//! Forward/back navigation over the router, history, and transition engine.
//!
//! Every entry point runs on the render-loop thread. A call returns as soon as
//! its transitions are started; the rest of the lifecycle runs from
//! [`Navigator::process_ready`] once the toolkit reports the tweens finished.

use log::{debug, warn};

use crate::{
    DEFAULT_PAGE_CAPACITY, NavError, NavResult,
    history::History,
    options::{AnimationKind, OpenOptions, Target},
    page::{Page, PageId, PageState},
    router::Router,
    toolkit::Toolkit,
    transition::{
        Completion, Phase, Started, TransitionConfig, TransitionContext, TransitionEngine,
    },
};

pub struct Navigator<T: Toolkit, const N: usize = DEFAULT_PAGE_CAPACITY> {
    toolkit: T,
    router: Router<T, N>,
    history: History<N>,
    engine: TransitionEngine<N>,
}

impl<T: Toolkit, const N: usize> Navigator<T, N> {
    pub fn new(toolkit: T) -> Self {
        Self::with_config(toolkit, TransitionConfig::default())
    }

    pub fn with_config(toolkit: T, config: TransitionConfig) -> Self {
        Self {
            toolkit,
            router: Router::new(),
            history: History::new(),
            engine: TransitionEngine::new(config),
        }
    }

    /// Unregisters all pages, empties history, and stops root screen scrolling.
    pub fn init(&mut self) -> NavResult {
        self.history.clear();
        self.router.clear();
        self.engine.clear();
        self.toolkit.set_root_scrollable(false);
        debug!("pm-nav: init capacity={}", N);
        Ok(())
    }

    pub fn create_page(&mut self, id: PageId) -> NavResult<&mut Page<T>> {
        self.router.create_page(&mut self.toolkit, id)
    }

    pub fn page(&self, id: PageId) -> NavResult<&Page<T>> {
        self.router.get(id)
    }

    pub fn page_mut(&mut self, id: PageId) -> NavResult<&mut Page<T>> {
        self.router.get_mut(id)
    }

    pub fn history(&self) -> &[PageId] {
        self.history.as_slice()
    }

    pub fn current_page(&self) -> Option<PageId> {
        self.history.top()
    }

    /// No transition is in flight.
    pub fn is_idle(&self) -> bool {
        self.engine.in_flight() == 0
    }

    pub fn config(&self) -> &TransitionConfig {
        self.engine.config()
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    pub fn toolkit_mut(&mut self) -> &mut T {
        &mut self.toolkit
    }

    /// Drains finished tweens from the toolkit and runs their completions.
    ///
    /// Returns the number of transitions completed.
    pub fn process_ready(&mut self) -> usize {
        let mut completed = 0;
        while let Some(token) = self.toolkit.poll_ready() {
            let Some(context) = self.engine.complete(token) else {
                continue;
            };

            if let Ok(page) = self.router.get_mut(context.page) {
                page.settle(token);
            }
            self.finish(context);
            completed += 1;
        }
        completed
    }

    fn ensure_idle(&self, id: PageId) -> NavResult {
        let state = self.router.get(id)?.state();
        if state.is_idle() {
            Ok(())
        } else {
            debug!("pm-nav: page={} busy state={:?}", id, state);
            Err(NavError::TransitionPending)
        }
    }

    /// Starts the transition described by `completion` on page `id`, or runs its
    /// completion right away when nothing gets animated.
    fn start_transition(&mut self, id: PageId, completion: Completion, options: OpenOptions) {
        let Ok(page) = self.router.get(id) else {
            warn!("pm-nav: transition for unregistered page={}", id);
            return;
        };
        let obj = page.object();
        let back = page.is_back();
        let context = TransitionContext {
            page: id,
            completion,
            options,
        };

        let started = match completion.phase() {
            Phase::Appear => self
                .engine
                .start_appear(&mut self.toolkit, obj, back, context),
            Phase::Disappear => self
                .engine
                .start_disappear(&mut self.toolkit, obj, back, context),
        };

        match started {
            Started::Pending(token) => {
                let state = match completion.phase() {
                    Phase::Appear => PageState::Appearing(token),
                    Phase::Disappear => PageState::Disappearing(token),
                };
                if let Ok(page) = self.router.get_mut(id) {
                    page.set_state(state);
                }
            }
            Started::Immediate(context) => self.finish(context),
        }
    }
}

include!("open.rs");
include!("back.rs");
include!("completion.rs");

#[cfg(test)]
mod tests;
