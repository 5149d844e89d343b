//! Damped spring animation primitive.
//!
//! An [`Animator`] drives one scalar toward a target with a spring-damper
//! integrator. Each started animation gets a fresh [`AnimationId`] and ends
//! with exactly one [`AnimationEnd`]:
//!
//! - `finished = true` when the spring settles on its own
//! - `finished = false` when a newer animation or a drag supersedes it
//!
//! Callers compare the id against the animation they still care about before
//! reacting to a completion.

/// Spring stiffness used when the configuration does not override it.
pub const DEFAULT_STIFFNESS: f64 = 180.0;
/// Damping coefficient used when the configuration does not override it.
pub const DEFAULT_DAMPING: f64 = 24.0;

/// Largest `dt` accepted per frame; longer gaps are treated as a 50 ms frame.
pub const MAX_FRAME_SECS: f64 = 0.05;

/// Integration sub-step, keeps stiff springs stable at low frame rates.
const MAX_STEP_SECS: f64 = 1.0 / 120.0;

/// Animations that have not settled by now snap to their target.
const MAX_DURATION_SECS: f64 = 3.0;

/// Distance from target (in rows) considered at rest.
const REST_DISTANCE: f64 = 0.001;
/// Speed (rows/s) considered at rest.
const REST_VELOCITY: f64 = 0.001;

/// Spring-damper coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Higher = snappier.
    pub stiffness: f64,
    /// Higher = less bouncy.
    pub damping: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
        }
    }
}

/// Identity of one started animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationId(u64);

/// Completion notification of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationEnd {
    /// Which animation ended.
    pub id: AnimationId,
    /// `true` if it reached its target, `false` if it was superseded.
    pub finished: bool,
}

#[derive(Debug, Clone, Copy)]
struct Motion {
    id: AnimationId,
    target: f64,
    velocity: f64,
    elapsed: f64,
}

/// Spring driver for a single bounded scalar.
///
/// The animated value itself is owned by the caller and passed into
/// [`Animator::advance`]; every write is clamped to the animator's bounds.
#[derive(Debug, Clone)]
pub struct Animator {
    config: SpringConfig,
    lower: f64,
    upper: f64,
    next_id: u64,
    motion: Option<Motion>,
}

impl Animator {
    /// Creates an idle animator whose writes are clamped to `[a, b]` (in
    /// either order).
    #[must_use]
    pub fn new(config: SpringConfig, a: f64, b: f64) -> Self {
        Self {
            config,
            lower: a.min(b),
            upper: a.max(b),
            next_id: 0,
            motion: None,
        }
    }

    /// Starts animating toward `target`, superseding any running animation.
    ///
    /// The velocity of a superseded animation carries over so the value does
    /// not jerk. Returns the id of the new animation and, if one was running,
    /// the `finished = false` completion of the old one.
    pub fn start(&mut self, target: f64) -> (AnimationId, Option<AnimationEnd>) {
        let interrupted = self.motion.take();
        let id = AnimationId(self.next_id);
        self.next_id += 1;

        self.motion = Some(Motion {
            id,
            target: target.clamp(self.lower, self.upper),
            velocity: interrupted.map_or(0.0, |m| m.velocity),
            elapsed: 0.0,
        });

        let end = interrupted.map(|m| AnimationEnd {
            id: m.id,
            finished: false,
        });
        (id, end)
    }

    /// Stops the running animation, if any, and reports it as unfinished.
    pub fn cancel(&mut self) -> Option<AnimationEnd> {
        self.motion.take().map(|m| AnimationEnd {
            id: m.id,
            finished: false,
        })
    }

    /// Whether an animation is in flight.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.motion.is_some()
    }

    /// Advances the running animation by `dt` seconds, writing into `value`.
    ///
    /// Returns the `finished = true` completion when the spring settles (or
    /// runs out of time) during this step.
    pub fn advance(&mut self, value: &mut f64, dt: f64) -> Option<AnimationEnd> {
        let motion = self.motion.as_mut()?;

        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_SECS)
        } else {
            0.0
        };

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            remaining -= h;

            let spring_force = self.config.stiffness * (motion.target - *value);
            let damping_force = -self.config.damping * motion.velocity;
            motion.velocity += (spring_force + damping_force) * h;
            *value += motion.velocity * h;

            // Hitting either bound stops the motion dead rather than bouncing.
            if *value <= self.lower {
                *value = self.lower;
                motion.velocity = motion.velocity.max(0.0);
            } else if *value >= self.upper {
                *value = self.upper;
                motion.velocity = motion.velocity.min(0.0);
            }
        }
        motion.elapsed += dt;

        let at_rest = (motion.target - *value).abs() < REST_DISTANCE
            && motion.velocity.abs() < REST_VELOCITY;
        let timed_out = motion.elapsed >= MAX_DURATION_SECS;

        if at_rest || timed_out {
            if !at_rest {
                tracing::debug!(goal = motion.target, value = *value, "spring timed out, snapping");
            }
            *value = motion.target;
            let id = motion.id;
            self.motion = None;
            return Some(AnimationEnd { id, finished: true });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(animator: &mut Animator, value: &mut f64) -> (AnimationEnd, usize) {
        for frame in 1..=1_000 {
            if let Some(end) = animator.advance(value, 1.0 / 60.0) {
                return (end, frame);
            }
        }
        panic!("spring never settled");
    }

    #[test]
    fn settles_on_target_and_reports_finished() {
        let mut animator = Animator::new(SpringConfig::default(), 0.0, 10.0);
        let mut value = 10.0;
        let (id, interrupted) = animator.start(0.0);
        assert!(interrupted.is_none());

        let (end, _) = run_to_end(&mut animator, &mut value);
        assert_eq!(end, AnimationEnd { id, finished: true });
        assert!((value - 0.0).abs() < f64::EPSILON);
        assert!(!animator.is_running());
    }

    #[test]
    fn stays_within_bounds_every_frame() {
        let loose = SpringConfig {
            stiffness: 400.0,
            damping: 2.0,
        };
        let mut animator = Animator::new(loose, 0.0, 10.0);
        let mut value = 10.0;
        animator.start(0.0);
        while animator.advance(&mut value, 1.0 / 30.0).is_none() {
            assert!((0.0..=10.0).contains(&value), "value escaped: {value}");
        }
    }

    #[test]
    fn superseding_reports_old_animation_unfinished() {
        let mut animator = Animator::new(SpringConfig::default(), 0.0, 10.0);
        let mut value = 0.0;
        let (first, _) = animator.start(10.0);
        animator.advance(&mut value, 1.0 / 60.0);

        let (second, interrupted) = animator.start(0.0);
        assert_ne!(first, second);
        assert_eq!(
            interrupted,
            Some(AnimationEnd {
                id: first,
                finished: false
            })
        );
    }

    #[test]
    fn superseding_keeps_value_continuous() {
        let mut animator = Animator::new(SpringConfig::default(), 0.0, 10.0);
        let mut value = 10.0;
        animator.start(0.0);
        for _ in 0..5 {
            animator.advance(&mut value, 1.0 / 60.0);
        }
        let before = value;
        animator.start(10.0);
        animator.advance(&mut value, 0.0);
        assert!((value - before).abs() < 1e-9);
    }

    #[test]
    fn cancel_returns_unfinished_end() {
        let mut animator = Animator::new(SpringConfig::default(), 0.0, 10.0);
        let (id, _) = animator.start(5.0);
        assert_eq!(
            animator.cancel(),
            Some(AnimationEnd {
                id,
                finished: false
            })
        );
        assert_eq!(animator.cancel(), None);
    }

    #[test]
    fn already_at_target_finishes_on_first_frame() {
        let mut animator = Animator::new(SpringConfig::default(), 0.0, 10.0);
        let mut value = 0.0;
        let (id, _) = animator.start(0.0);
        assert_eq!(
            animator.advance(&mut value, 1.0 / 60.0),
            Some(AnimationEnd { id, finished: true })
        );
    }

    #[test]
    fn sluggish_spring_snaps_after_timeout() {
        let sluggish = SpringConfig {
            stiffness: 0.01,
            damping: 50.0,
        };
        let mut animator = Animator::new(sluggish, 0.0, 10.0);
        let mut value = 10.0;
        animator.start(0.0);
        let (end, frames) = run_to_end(&mut animator, &mut value);
        assert!(end.finished);
        assert!(frames <= 200);
        assert!((value - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn advance_without_motion_is_noop() {
        let mut animator = Animator::new(SpringConfig::default(), 0.0, 10.0);
        let mut value = 3.0;
        assert!(animator.advance(&mut value, 1.0).is_none());
        assert!((value - 3.0).abs() < f64::EPSILON);
    }
}
