//! Integer easing curves.

pub(crate) const STEP_SHIFT: u32 = 10;
const STEP_MAX: u64 = 1 << STEP_SHIFT;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Easing {
    Linear,
    /// Cubic bezier through (0, 900, 950, 1024): fast start, gentle stop.
    #[default]
    EaseOut,
}

impl Easing {
    /// Progress in `0..=1024` after `elapsed` out of `duration`.
    pub fn step(self, elapsed: u64, duration: u64) -> u64 {
        if duration == 0 || elapsed >= duration {
            return STEP_MAX;
        }

        let t = elapsed * STEP_MAX / duration;
        match self {
            Self::Linear => t,
            Self::EaseOut => bezier3(t, 0, 900, 950, STEP_MAX),
        }
    }
}

fn bezier3(t: u64, u0: u64, u1: u64, u2: u64, u3: u64) -> u64 {
    let t_rem = STEP_MAX - t;
    let t_rem2 = (t_rem * t_rem) >> STEP_SHIFT;
    let t_rem3 = (t_rem2 * t_rem) >> STEP_SHIFT;
    let t2 = (t * t) >> STEP_SHIFT;
    let t3 = (t2 * t) >> STEP_SHIFT;

    let v1 = (t_rem3 * u0) >> STEP_SHIFT;
    let v2 = (3 * t_rem2 * t * u1) >> (2 * STEP_SHIFT);
    let v3 = (3 * t_rem * t2 * u2) >> (2 * STEP_SHIFT);
    let v4 = (t3 * u3) >> STEP_SHIFT;

    v1 + v2 + v3 + v4
}
