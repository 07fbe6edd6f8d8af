//! Floyd cycle detection over in-place state transitions, and projection of
//! a state far along its trajectory.
//!
//! States are advanced by a caller-supplied `step: FnMut(&mut S)`. The step
//! must be deterministic and the trajectory eventually periodic; neither is
//! checked, and detection never returns if the trajectory does not repeat.

use tracing::{debug, trace};

/// A state known to lie on the cycle, found by the tortoise and hare meeting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Representative<S> {
    /// Steps needed to return to an equal state.
    pub length: u64,
    /// The meeting state.
    pub state: S,
    /// Steps from the initial state to `state`. Always a positive multiple of
    /// `length`, at or past the pre-period.
    pub steps: u64,
}

/// Shape of a trajectory: `preperiod` steps lead onto a loop of `length`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cycle {
    pub preperiod: u64,
    pub length: u64,
}

/// How `project` reaches the target step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Projection {
    /// Find the pre-period and replay from the initial state. Exact for every
    /// target.
    #[default]
    Exact,
    /// Advance the meeting state by `target % length`. Only matches a literal
    /// replay when `target` is at least the pre-period; cheaper because the
    /// pre-period search is skipped.
    Representative,
}

/// Advance tortoise by one and hare by two until they agree.
/// Returns the meeting state pair and the tortoise's step count.
fn meet<S, F, E>(initial: &S, step: &mut F, eq: &E) -> (S, S, u64)
where
    S: Clone,
    F: FnMut(&mut S),
    E: Fn(&S, &S) -> bool,
{
    let mut tortoise = initial.clone();
    let mut hare = initial.clone();
    let mut steps = 0u64;
    loop {
        step(&mut tortoise);
        step(&mut hare);
        step(&mut hare);
        steps += 1;
        if eq(&tortoise, &hare) {
            return (tortoise, hare, steps);
        }
    }
}

/// Walk `hare` around the loop until it equals `tortoise` again.
fn loop_length<S, F, E>(tortoise: &S, hare: &mut S, step: &mut F, eq: &E) -> u64
where
    F: FnMut(&mut S),
    E: Fn(&S, &S) -> bool,
{
    step(hare);
    let mut length = 1u64;
    while !eq(tortoise, hare) {
        step(hare);
        length += 1;
    }
    length
}

/// Find the cycle length and a state on the cycle, comparing states with `eq`.
pub fn detect_cycle_by<S, F, E>(initial: &S, mut step: F, eq: E) -> Representative<S>
where
    S: Clone,
    F: FnMut(&mut S),
    E: Fn(&S, &S) -> bool,
{
    let (tortoise, mut hare, steps) = meet(initial, &mut step, &eq);
    let length = loop_length(&tortoise, &mut hare, &mut step, &eq);
    debug!(length, steps, "cycle detected");
    Representative {
        length,
        state: hare,
        steps,
    }
}

pub fn detect_cycle<S, F>(initial: &S, step: F) -> Representative<S>
where
    S: Clone + PartialEq,
    F: FnMut(&mut S),
{
    detect_cycle_by(initial, step, |a: &S, b: &S| a == b)
}

/// Find both the pre-period and the cycle length, comparing states with `eq`.
pub fn find_cycle_by<S, F, E>(initial: &S, mut step: F, eq: E) -> Cycle
where
    S: Clone,
    F: FnMut(&mut S),
    E: Fn(&S, &S) -> bool,
{
    let (meeting, _, _) = meet(initial, &mut step, &eq);

    // The distance from the start to the loop entry equals the distance from
    // the meeting point to the loop entry, modulo the loop length.
    let mut tortoise = initial.clone();
    let mut hare = meeting;
    let mut preperiod = 0u64;
    while !eq(&tortoise, &hare) {
        step(&mut tortoise);
        step(&mut hare);
        preperiod += 1;
    }

    let mut lap = tortoise.clone();
    let length = loop_length(&tortoise, &mut lap, &mut step, &eq);
    debug!(preperiod, length, "cycle measured");
    Cycle { preperiod, length }
}

pub fn find_cycle<S, F>(initial: &S, step: F) -> Cycle
where
    S: Clone + PartialEq,
    F: FnMut(&mut S),
{
    find_cycle_by(initial, step, |a: &S, b: &S| a == b)
}

/// The state reached after `target` applications of `step` from `initial`,
/// computed through the trajectory's cycle rather than by direct replay.
pub fn project<S, F>(initial: &S, target: u64, mut step: F, mode: Projection) -> S
where
    S: Clone + PartialEq,
    F: FnMut(&mut S),
{
    let (mut state, remaining) = match mode {
        Projection::Exact => {
            let cycle = find_cycle(initial, &mut step);
            let remaining = if target <= cycle.preperiod {
                target
            } else {
                cycle.preperiod + (target - cycle.preperiod) % cycle.length
            };
            (initial.clone(), remaining)
        }
        Projection::Representative => {
            let found = detect_cycle(initial, &mut step);
            (found.state, target % found.length)
        }
    };
    trace!(target, remaining, ?mode, "replaying remainder");
    for _ in 0..remaining {
        step(&mut state);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `0 -> 1 -> ... -> tail -> tail+1 -> ... -> tail+len-1 -> tail -> ...`
    fn rho(tail: u64, len: u64) -> impl FnMut(&mut u64) {
        move |x: &mut u64| {
            *x = if *x + 1 < tail + len {
                *x + 1
            } else {
                tail
            };
        }
    }

    fn replay(mut state: u64, n: u64, mut step: impl FnMut(&mut u64)) -> u64 {
        for _ in 0..n {
            step(&mut state);
        }
        state
    }

    #[test]
    fn pure_loop_has_zero_preperiod() {
        let cycle = find_cycle(&0u64, |x: &mut u64| *x = (*x + 1) % 7);
        assert_eq!(
            cycle,
            Cycle {
                preperiod: 0,
                length: 7
            }
        );
    }

    #[test]
    fn rho_shapes_are_measured_exactly() {
        for tail in 0..6 {
            for len in 1..9 {
                let cycle = find_cycle(&0u64, rho(tail, len));
                assert_eq!(
                    cycle,
                    Cycle {
                        preperiod: tail,
                        length: len
                    },
                    "tail {tail} len {len}"
                );
            }
        }
    }

    #[test]
    fn representative_sits_on_a_cycle_boundary() {
        let found = detect_cycle(&0u64, rho(5, 7));
        assert_eq!(found.length, 7);
        assert_eq!(found.steps % 7, 0);
        assert!(found.steps >= 5);
        assert_eq!(found.state, replay(0, found.steps, rho(5, 7)));
    }

    #[test]
    fn fixed_point_has_length_one() {
        let found = detect_cycle(&3u64, |_: &mut u64| {});
        assert_eq!(found.length, 1);
        assert_eq!(found.state, 3);
    }

    #[test]
    fn custom_equality_is_respected() {
        // Compare only modulo 4 so the loop looks four long.
        let found = detect_cycle_by(
            &0u64,
            |x: &mut u64| *x += 1,
            |a: &u64, b: &u64| a % 4 == b % 4,
        );
        assert_eq!(found.length, 4);
    }

    #[test]
    fn exact_projection_matches_replay_for_every_target() {
        for target in 0..40 {
            let got = project(&0u64, target, rho(5, 7), Projection::Exact);
            assert_eq!(got, replay(0, target, rho(5, 7)), "target {target}");
        }
    }

    #[test]
    fn representative_projection_matches_past_preperiod() {
        for target in 5..40 {
            let got = project(&0u64, target, rho(5, 7), Projection::Representative);
            assert_eq!(got, replay(0, target, rho(5, 7)), "target {target}");
        }
    }

    #[test]
    fn representative_projection_lands_on_cycle_for_small_targets() {
        // Before the pre-period ends a literal replay is still on the tail,
        // while the representative projection always answers from the loop.
        let got = project(&0u64, 2, rho(5, 7), Projection::Representative);
        assert_ne!(got, replay(0, 2, rho(5, 7)));
        assert!(got >= 5);
    }

    #[test]
    fn huge_targets_project_without_replaying() {
        let target = 1_000_000_000;
        let exact = project(&0u64, target, rho(3, 11), Projection::Exact);
        let representative = project(&0u64, target, rho(3, 11), Projection::Representative);
        assert_eq!(exact, 3 + (target - 3) % 11);
        assert_eq!(exact, representative);
    }
}
