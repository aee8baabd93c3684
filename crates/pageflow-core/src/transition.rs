//! Appear/disappear transitions and their per-transition contexts.
//!
//! Every started transition owns one arena slot until its ready event is
//! consumed. Tokens carry the slot generation, so a late or duplicated ready
//! event can never complete a context twice or complete a newer occupant of the
//! same slot.

use log::{debug, warn};

use crate::{
    options::{AnimationKind, OpenOptions},
    page::PageId,
    toolkit::{Axis, Easing, Resolution, Toolkit, Tween},
};

/// Timing and geometry shared by all transitions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransitionConfig {
    pub duration_ms: u16,
    pub easing: Easing,
    /// Resting Y offset of a popup page.
    pub popup_top_offset: i32,
    /// Travel of the small bounce used when a popup is revealed by `back`.
    pub popup_bounce: i32,
    pub popup_radius: i32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: 500,
            easing: Easing::EaseOut,
            popup_top_offset: 15,
            popup_bounce: 5,
            popup_radius: 10,
        }
    }
}

/// Handle returned by the toolkit when a tween finishes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransitionToken {
    slot: u8,
    generation: u16,
}

impl TransitionToken {
    pub const fn slot(self) -> u8 {
        self.slot
    }

    pub const fn generation(self) -> u16 {
        self.generation
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Appear,
    Disappear,
}

/// Work left to do once a transition has finished.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Completion {
    /// Forward open: `didAppear`.
    Appear,
    /// Forward open, previous page: hide unless popup, `didDisappear`, unload on `Replace`.
    Disappear,
    /// Revealed by `back`: `didAppear`.
    BackAppear,
    /// Left by `back`: hide, `didDisappear`, unload.
    BackDisappear,
}

impl Completion {
    pub const fn phase(self) -> Phase {
        match self {
            Self::Appear | Self::BackAppear => Phase::Appear,
            Self::Disappear | Self::BackDisappear => Phase::Disappear,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransitionContext {
    pub page: PageId,
    pub completion: Completion,
    pub options: OpenOptions,
}

/// Outcome of starting a transition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Started {
    /// Running; the context is released when the token comes back.
    Pending(TransitionToken),
    /// Nothing to animate, or no room to; the caller must complete it now.
    Immediate(TransitionContext),
}

/// Visual effect of one transition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Motion {
    pub tween: Tween,
    pub radius: Option<i32>,
}

/// Computes the motion for `kind`, or `None` when the kind does not animate.
pub fn plan_motion(
    config: &TransitionConfig,
    kind: AnimationKind,
    phase: Phase,
    back: bool,
    resolution: Resolution,
) -> Option<Motion> {
    let width = resolution.width;
    let height = resolution.height;

    let (axis, from, to, radius) = match (kind, phase, back) {
        (AnimationKind::Slide, Phase::Appear, false) => (Axis::X, width, 0, None),
        (AnimationKind::Slide, Phase::Appear, true) => (Axis::X, -width, 0, None),
        (AnimationKind::Slide, Phase::Disappear, false) => (Axis::X, 0, -width, None),
        (AnimationKind::Slide, Phase::Disappear, true) => (Axis::X, 0, width, None),
        (AnimationKind::Popup, Phase::Appear, false) => (
            Axis::Y,
            height,
            config.popup_top_offset,
            Some(config.popup_radius),
        ),
        (AnimationKind::Popup, Phase::Appear, true) => (Axis::Y, config.popup_bounce, 0, Some(0)),
        (AnimationKind::Popup, Phase::Disappear, false) => {
            (Axis::Y, 0, config.popup_bounce, Some(config.popup_radius))
        }
        (AnimationKind::Popup, Phase::Disappear, true) => {
            (Axis::Y, config.popup_top_offset, height, Some(0))
        }
        (AnimationKind::None | AnimationKind::SlideScale, _, _) => return None,
    };

    Some(Motion {
        tween: Tween {
            axis,
            from,
            to,
            duration_ms: config.duration_ms,
            easing: config.easing,
        },
        radius,
    })
}

#[derive(Clone, Copy, Debug)]
struct Slot {
    generation: u16,
    context: Option<TransitionContext>,
}

impl Slot {
    const EMPTY: Self = Self {
        generation: 0,
        context: None,
    };
}

/// Arena of in-flight transitions, at most `N` at once.
#[derive(Debug)]
pub struct TransitionEngine<const N: usize> {
    slots: [Slot; N],
    config: TransitionConfig,
}

impl<const N: usize> TransitionEngine<N> {
    pub const fn new(config: TransitionConfig) -> Self {
        Self {
            slots: [Slot::EMPTY; N],
            config,
        }
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    pub fn in_flight(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.context.is_some())
            .count()
    }

    /// Drops every pending context. Ready events that arrive later are ignored.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            if slot.context.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
        }
    }

    pub fn start_appear<T: Toolkit>(
        &mut self,
        toolkit: &mut T,
        obj: T::Object,
        back: bool,
        context: TransitionContext,
    ) -> Started {
        self.start(toolkit, obj, back, context)
    }

    pub fn start_disappear<T: Toolkit>(
        &mut self,
        toolkit: &mut T,
        obj: T::Object,
        back: bool,
        context: TransitionContext,
    ) -> Started {
        self.start(toolkit, obj, back, context)
    }

    fn start<T: Toolkit>(
        &mut self,
        toolkit: &mut T,
        obj: T::Object,
        back: bool,
        context: TransitionContext,
    ) -> Started {
        let phase = context.completion.phase();
        let Some(motion) = plan_motion(
            &self.config,
            context.options.animation,
            phase,
            back,
            toolkit.resolution(),
        ) else {
            return Started::Immediate(context);
        };

        let Some(token) = self.allocate(context) else {
            warn!(
                "pm-anim: no free transition slot page={} phase={:?}; completing now",
                context.page, phase
            );
            return Started::Immediate(context);
        };

        debug!(
            "pm-anim: start page={} phase={:?} back={} axis={:?} {}->{} slot={}",
            context.page,
            phase,
            back,
            motion.tween.axis,
            motion.tween.from,
            motion.tween.to,
            token.slot
        );

        if let Err(err) = toolkit.animate(obj, motion.tween, token) {
            warn!(
                "pm-anim: tween rejected page={} phase={:?} err={:?}; completing now",
                context.page, phase, err
            );
            self.release(token);
            return Started::Immediate(context);
        }

        if let Some(radius) = motion.radius {
            toolkit.set_radius(obj, radius);
        }

        Started::Pending(token)
    }

    /// Takes the context for `token` out of the arena. Returns `None` for a
    /// token that was already completed or never issued.
    pub fn complete(&mut self, token: TransitionToken) -> Option<TransitionContext> {
        let Some(slot) = self.slots.get_mut(token.slot as usize) else {
            warn!("pm-anim: ready event for unknown slot={}", token.slot);
            return None;
        };

        if slot.generation != token.generation {
            warn!(
                "pm-anim: stale ready event slot={} generation={} current={}",
                token.slot, token.generation, slot.generation
            );
            return None;
        }

        let context = slot.context.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        Some(context)
    }

    /// Frees the slot behind a token that never reached the toolkit.
    fn release(&mut self, token: TransitionToken) {
        if let Some(slot) = self.slots.get_mut(token.slot as usize)
            && slot.generation == token.generation
            && slot.context.take().is_some()
        {
            slot.generation = slot.generation.wrapping_add(1);
        }
    }

    fn allocate(&mut self, context: TransitionContext) -> Option<TransitionToken> {
        let (index, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| slot.context.is_none())?;
        let slot_index = u8::try_from(index).ok()?;

        slot.context = Some(context);
        Some(TransitionToken {
            slot: slot_index,
            generation: slot.generation,
        })
    }
}
