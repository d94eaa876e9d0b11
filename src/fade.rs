//! Interruptible alpha/scale fade transitions.
//!
//! A fade always starts from the alpha it interrupted (a new fade-in over a
//! half-finished fade-out picks up mid-way), and the controller only runs
//! completion effects when the final alpha matches the fade target, which
//! guards against a stale fade-out completing under a newer fade-in.

use instant::Instant;

/// Scale the panel pops in from and shrinks out to.
pub(crate) const PRESENT_SCALE: f32 = 1.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FadeDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Fade {
    pub direction: FadeDirection,
    started: Instant,
    duration: f32,
    from_alpha: f32,
}

impl Fade {
    pub fn fade_in(now: Instant, duration: f32, from_alpha: f32) -> Self {
        Self {
            direction: FadeDirection::In,
            started: now,
            duration,
            from_alpha,
        }
    }

    pub fn fade_out(now: Instant, duration: f32, from_alpha: f32) -> Self {
        Self {
            direction: FadeDirection::Out,
            started: now,
            duration,
            from_alpha,
        }
    }

    fn progress(&self, now: Instant) -> f32 {
        // A non-positive duration is already done
        if self.duration <= 0.0 {
            return 1.0;
        }
        if now <= self.started {
            return 0.0;
        }
        ((now - self.started).as_secs_f32() / self.duration).min(1.0)
    }

    pub fn finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Current alpha: ease-in towards 1 when appearing, ease-out towards 0
    /// when disappearing.
    pub fn alpha_at(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        match self.direction {
            FadeDirection::In => {
                // Exact endpoint; the controller compares against 1.0
                if t >= 1.0 {
                    return 1.0;
                }
                let eased = t * t;
                self.from_alpha + (1.0 - self.from_alpha) * eased
            }
            FadeDirection::Out => {
                let eased = 1.0 - (1.0 - t) * (1.0 - t);
                self.from_alpha * (1.0 - eased)
            }
        }
    }

    /// Panel scale: pops from [`PRESENT_SCALE`] down to 1 on the way in, and
    /// shrinks back towards `1 / PRESENT_SCALE` on the way out.
    pub fn scale_at(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        match self.direction {
            FadeDirection::In => PRESENT_SCALE + (1.0 - PRESENT_SCALE) * t,
            FadeDirection::Out => 1.0 + (1.0 / PRESENT_SCALE - 1.0) * t,
        }
    }
}
