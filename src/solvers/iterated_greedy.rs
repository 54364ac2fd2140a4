//! Iterated greedy metaheuristic with adaptive deconstruction.
//!
//! Starting from a greedy solution, each iteration deconstructs part of the
//! current selection and greedily re-dominates the graph. A two-armed bandit
//! chooses between deconstruction strategies: uniform random removal across
//! the whole selection, or a breadth-first local hole around a random start
//! vertex. Arms are rewarded when the rebuilt solution matches or improves
//! the best one; scores decay exponentially so the choice tracks the current
//! search phase. Worse solutions are rolled back from a snapshot, so the
//! incumbent is feasible at every iteration boundary — which is exactly when
//! the termination flag is polled.

use crate::solvers::greedy;
use crate::store::{GraphStore, VertexRef};
use crate::termination::TerminationFlag;
use bitvec::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, RngExt, SeedableRng};
use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Guards the bandit's probability computation against a 0/0.
const BANDIT_EPSILON: f64 = 1e-10;

/// The iterated greedy solver and its tunable parameters.
///
/// The defaults are the empirically tuned competition settings; all of them
/// are plain fields, so callers can adjust any subset.
#[derive(Debug, Clone, PartialEq)]
pub struct IteratedGreedy {
    /// Cap on selected vertices removed by one local deconstruction.
    pub local_removal_cap: usize,
    /// Per-vertex removal probability of the random deconstruction.
    pub removal_probability: f64,
    /// Floor (and mirrored ceiling) for the bandit's strategy probability.
    pub min_strategy_probability: f64,
    /// Exponential decay applied to an arm's score each time it is played.
    pub score_decay: f64,
    /// Reward for strictly improving the best solution.
    pub reward_improvement: f64,
    /// Reward for matching the best solution.
    pub reward_equal: f64,
    /// Stop after this many iterations even without a termination signal.
    /// `None` runs until the flag is set.
    pub max_iterations: Option<u64>,
    /// Seed for the random source; `None` seeds from process time.
    pub seed: Option<u64>,
}

impl Default for IteratedGreedy {
    fn default() -> Self {
        Self {
            local_removal_cap: 40,
            removal_probability: 0.006,
            min_strategy_probability: 0.2,
            score_decay: 0.9,
            reward_improvement: 1.0,
            reward_equal: 0.0,
            max_iterations: None,
            seed: None,
        }
    }
}

impl IteratedGreedy {
    /// Creates a solver with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a fixed seed, making the run deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Bounds the number of iterations.
    pub fn with_max_iterations(mut self, max: u64) -> Self {
        self.max_iterations = Some(max);
        self
    }

    /// Runs the metaheuristic until the termination flag (or the iteration
    /// bound) is hit, leaving the best found selection on the graph.
    /// Returns its size, not counting fixed vertices.
    ///
    /// No vertex may be selected on entry.
    pub fn run(&self, g: &mut GraphStore, stop: &TerminationFlag) -> usize {
        debug_assert!(g.active().iter().all(|&v| !g[v].in_ds));
        greedy::init_votes(g);
        let seed = self.seed.unwrap_or_else(seed_from_time);
        let mut rng = SmallRng::seed_from_u64(seed);

        let n = g.active_len();
        let mut best_in_ds = bitvec![0; n];
        let mut best_dominated: Vec<u32> = vec![0; n];

        let mut current = greedy::construct(g, 0);
        save_snapshot(g, &mut best_in_ds, &mut best_dominated);
        let mut best = current;

        let mut score_local = 0.0_f64;
        // Random deconstruction tends to win early, so it starts favored.
        let mut score_random = 1.0_f64;
        let mut bfs_epoch: u32 = 0;
        let mut iterations: u64 = 0;

        while !stop.is_set() && self.max_iterations.map_or(true, |max| iterations < max) {
            let p_local = (score_local / (score_local + score_random + BANDIT_EPSILON)).clamp(
                self.min_strategy_probability,
                1.0 - self.min_strategy_probability,
            );
            let play_local = rng.random::<f64>() < p_local;

            current = if play_local {
                let removed =
                    local_deconstruction(g, self.local_removal_cap, &mut bfs_epoch, &mut rng);
                greedy::construct(g, current - removed)
            } else {
                let removed = random_deconstruction(g, self.removal_probability, &mut rng);
                greedy::construct(g, current - removed)
            };

            let reward = if current < best {
                self.reward_improvement
            } else if current == best {
                self.reward_equal
            } else {
                0.0
            };
            if play_local {
                score_local = score_local * self.score_decay + reward;
            } else {
                score_random = score_random * self.score_decay + reward;
            }

            if current <= best {
                if current < best {
                    debug!(size = current, iteration = iterations, "improved solution");
                }
                save_snapshot(g, &mut best_in_ds, &mut best_dominated);
                best = current;
            } else {
                restore_snapshot(g, &best_in_ds, &best_dominated);
                current = best;
            }
            iterations += 1;
        }

        info!(
            size = best,
            with_fixed = best + g.fixed().len(),
            iterations,
            terminated = stop.is_set(),
            "iterated greedy finished"
        );
        best
    }
}

fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn save_snapshot(g: &GraphStore, in_ds: &mut BitVec, dominated: &mut [u32]) {
    debug_assert_eq!(g.active_len(), dominated.len());
    for (i, &v) in g.active().iter().enumerate() {
        in_ds.set(i, g[v].in_ds);
        dominated[i] = g[v].dominated_count;
    }
}

fn restore_snapshot(g: &mut GraphStore, in_ds: &BitVec, dominated: &[u32]) {
    debug_assert_eq!(g.active_len(), dominated.len());
    for i in 0..g.active_len() {
        let v = g.active()[i];
        g[v].in_ds = in_ds[i];
        g[v].dominated_count = dominated[i];
    }
}

/// Removes every selected vertex independently with probability
/// `removal_probability`. Returns the number of removals.
pub(crate) fn random_deconstruction<R: Rng>(
    g: &mut GraphStore,
    removal_probability: f64,
    rng: &mut R,
) -> usize {
    let mut removed = 0;
    for i in 0..g.active_len() {
        let v = g.active()[i];
        if g[v].in_ds && rng.random::<f64>() < removal_probability {
            greedy::remove_from_ds(g, v);
            removed += 1;
        }
    }
    removed
}

/// Tears a local hole into the selection: a breadth-first traversal from a
/// random start vertex deselects every selected vertex it visits, stopping
/// after `cap` removals, `cap` enqueued selected vertices, or queue
/// exhaustion. Returns the number of removals.
///
/// `bfs_epoch` implements the visited check: a vertex is visited iff its
/// `queued_marker` equals the current epoch, so no per-run clearing pass is
/// needed.
pub(crate) fn local_deconstruction<R: Rng>(
    g: &mut GraphStore,
    cap: usize,
    bfs_epoch: &mut u32,
    rng: &mut R,
) -> usize {
    *bfs_epoch = bfs_epoch.wrapping_add(1);
    let epoch = *bfs_epoch;

    let start = g.active()[rng.random_range(0..g.active_len())];
    let mut queue: VecDeque<VertexRef> = VecDeque::new();
    g[start].queued_marker = epoch;
    queue.push_back(start);

    let mut removed = 0usize;
    let mut selected_queued = usize::from(g[start].in_ds);
    while removed < cap {
        let Some(v) = queue.pop_front() else {
            break;
        };
        if g[v].in_ds {
            greedy::remove_from_ds(g, v);
            removed += 1;
        }
        for i in 0..g[v].degree() {
            if selected_queued >= cap {
                break;
            }
            let u = g[v].neighbors[i];
            if g[u].queued_marker != epoch {
                g[u].queued_marker = epoch;
                queue.push_back(u);
                if g[u].in_ds {
                    selected_queued += 1;
                }
            }
        }
    }
    removed
}

#[cfg(test)]
#[path = "../unit_tests/solvers/iterated_greedy.rs"]
mod tests;
