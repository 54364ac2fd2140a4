//! Time-budgeted data reduction for dominating set.
//!
//! The engine repeatedly applies sound kernelization rules until a full
//! sweep makes no change or the budget runs out:
//!
//! - degree-0 and degree-1 simple rules,
//! - a redundancy sweep that removes dominated vertices whose undominated
//!   neighbors share another common dominator,
//! - the single-vertex and pair neighborhood rules of Alber, Fellows and
//!   Niedermeier, the pair rule extended with an isolated-component case.
//!
//! Every vertex moved to the fixed list belongs to some minimum dominating
//! set; every removed vertex is provably redundant given the current
//! domination state. Budget expiry is an orderly early stop, not an error.
//!
//! Neighborhood membership tests run in "sweep and tag" style over the
//! `neighbor_tag` scratch field: a sweep writes the id of the vertex whose
//! neighborhood is being examined, and 0 means untagged. Tags are fully
//! rewritten before every read, so stale values never influence a decision.

use crate::store::{GraphStore, VertexRef};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Wall-clock budgets for one reduction run.
///
/// `total` bounds all rules; `rule2` bounds the expensive pair rule and must
/// not exceed `total`. The redundancy sweep keeps running for an extra 10%
/// past `total` because it is cheap and pays off disproportionately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReductionBudget {
    /// Deadline for the simple rules and the single-vertex rule.
    pub total: Duration,
    /// Deadline for the pair rule.
    pub rule2: Duration,
}

impl ReductionBudget {
    /// Budgets in seconds.
    ///
    /// # Panics
    ///
    /// Panics if `total < rule2` or either is negative.
    pub fn from_secs(total: f64, rule2: f64) -> Self {
        assert!(
            total >= rule2 && rule2 >= 0.0,
            "reduction budgets must satisfy total >= rule2 >= 0"
        );
        Self {
            total: Duration::from_secs_f64(total),
            rule2: Duration::from_secs_f64(rule2),
        }
    }

    /// A short budget for finishing off trivially small leftover graphs.
    pub fn cleanup() -> Self {
        Self::from_secs(1.0, 1.0)
    }
}

impl Default for ReductionBudget {
    fn default() -> Self {
        Self::from_secs(13.0, 7.5)
    }
}

/// Reduces the graph in place until a fixed point or budget expiry.
pub fn reduce(g: &mut GraphStore, budget: &ReductionBudget) {
    let (n_before, m_before) = (g.active_len(), g.num_edges());
    Reducer::new(g, budget).run();
    debug!(
        n_before,
        m_before,
        n_after = g.active_len(),
        m_after = g.num_edges(),
        fixed = g.fixed().len(),
        "reduction finished"
    );
}

/// Classification of a neighbor `u` of the vertex (or pair) under scrutiny,
/// based on where `u`'s other neighbors lie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NeighborClass {
    /// `u` has an undominated neighbor outside the tagged closed
    /// neighborhood, so it can still be dominated from outside.
    N1,
    /// All of `u`'s outside neighbors are already dominated. `u` may be
    /// treated as N2 but must not be treated as N3: a later selection of an
    /// outside neighbor could still cover it.
    N2Only,
    /// `u` has no neighbor outside the tagged closed neighborhood; whether
    /// it is N2 or N3 depends on its N1 adjacency.
    N2OrN3,
}

struct Reducer<'g> {
    g: &'g mut GraphStore,
    deadline_total: Instant,
    deadline_rule2: Instant,
    deadline_redundant: Instant,
    ticks: u32,
    total_ok: bool,
    rule2_ok: bool,
    redundant_ok: bool,
}

impl<'g> Reducer<'g> {
    fn new(g: &'g mut GraphStore, budget: &ReductionBudget) -> Self {
        let start = Instant::now();
        Self {
            g,
            deadline_total: start + budget.total,
            deadline_rule2: start + budget.rule2,
            deadline_redundant: start + budget.total.mul_f64(1.1),
            ticks: 0,
            total_ok: true,
            rule2_ok: true,
            redundant_ok: true,
        }
    }

    /// Re-reads the clock every 256 calls to keep timekeeping off the hot
    /// path.
    fn sample_clock(&mut self) {
        if self.ticks % 256 == 0 {
            let now = Instant::now();
            self.total_ok = now < self.deadline_total;
            self.rule2_ok = now < self.deadline_rule2;
            self.redundant_ok = now < self.deadline_redundant;
        }
        self.ticks = self.ticks.wrapping_add(1);
    }

    fn run(&mut self) {
        let mut another_loop = true;
        while another_loop {
            another_loop = false;
            let mut idx = 0;
            while idx < self.g.active_len() {
                self.sample_clock();
                let v = self.g.active()[idx];

                if self.g[v].is_removed {
                    // A fresh slot was just swapped in; stay at this index.
                    self.g.delete_slot(idx);
                    continue;
                }
                if !self.redundant_ok {
                    idx += 1;
                    continue;
                }
                if self.g[v].dominated_count > 0 && self.is_redundant(v) {
                    self.g.mark_removed(v);
                    another_loop = true;
                    idx += 1;
                    continue;
                }
                if !self.total_ok {
                    idx += 1;
                    continue;
                }
                if self.rule1(v) {
                    another_loop = true;
                    idx += 1;
                    continue;
                }
                if self.rule2_ok && self.pair_sweep(v) {
                    another_loop = true;
                }
                idx += 1;
            }
        }
    }

    /// Tries the pair rule on (v, u1) and on all pairs (u1, u2) drawn from
    /// v's neighborhood. Any successful reduction restarts the scan, since
    /// the neighbor list under it has changed.
    fn pair_sweep(&mut self, v: VertexRef) -> bool {
        let mut fired = false;
        let mut i = 0;
        while !self.g[v].is_removed && i < self.g[v].degree() {
            let u1 = self.g[v].neighbors[i];
            i += 1;
            debug_assert!(!self.g[u1].is_removed);
            if self.rule2(v, u1) {
                fired = true;
                i -= 1; // the slot now holds a different neighbor
                continue;
            }
            let mut j = i;
            while !self.g[v].is_removed && j < self.g[v].degree() {
                let u2 = self.g[v].neighbors[j];
                debug_assert!(u1 != u2 && u1 != v && u2 != v);
                if !self.g[u1].is_removed && !self.g[u2].is_removed && self.rule2(u1, u2) {
                    fired = true;
                    i = 0;
                    break;
                }
                j += 1;
            }
        }
        fired
    }

    /// Returns true iff the intersection of the closed neighborhoods of all
    /// `members`, minus the ignored vertices, is non-empty (trivially true
    /// for at most one member).
    ///
    /// Works by tagging the running intersection: after step k, exactly the
    /// vertices shared by the first k+1 members carry the k-th member's id.
    fn common_neighbor_exists(
        &mut self,
        members: &[VertexRef],
        ignore_a: Option<VertexRef>,
        ignore_b: Option<VertexRef>,
    ) -> bool {
        if members.len() <= 1 {
            return true;
        }
        let u0 = members[0];
        let u0_id = self.g[u0].id;
        self.g[u0].neighbor_tag = u0_id;
        for i in 0..self.g[u0].degree() {
            let x = self.g[u0].neighbors[i];
            self.g[x].neighbor_tag = u0_id;
        }
        if let Some(a) = ignore_a {
            self.g[a].neighbor_tag = 0;
        }
        if let Some(b) = ignore_b {
            self.g[b].neighbor_tag = 0;
        }

        let mut prev_id = u0_id;
        for &u in &members[1..] {
            let u_id = self.g[u].id;
            let mut found = false;
            for i in 0..self.g[u].degree() {
                let x = self.g[u].neighbors[i];
                if self.g[x].neighbor_tag == prev_id {
                    found = true;
                    self.g[x].neighbor_tag = u_id;
                } else {
                    self.g[x].neighbor_tag = 0;
                }
            }
            if self.g[u].neighbor_tag == prev_id {
                found = true;
                self.g[u].neighbor_tag = u_id;
            } else {
                self.g[u].neighbor_tag = 0;
            }
            prev_id = u_id;
            if !found {
                return false;
            }
        }
        true
    }

    /// A dominated vertex is redundant if its undominated neighbors share a
    /// common dominator other than the vertex itself.
    fn is_redundant(&mut self, u: VertexRef) -> bool {
        debug_assert!(!self.g[u].is_removed && self.g[u].dominated_count > 0);
        let undominated: Vec<VertexRef> = self.g[u]
            .neighbors
            .iter()
            .copied()
            .filter(|&x| self.g[x].dominated_count == 0)
            .collect();
        self.common_neighbor_exists(&undominated, Some(u), None)
    }

    /// Commits `v` to the output, dominates its neighborhood, removes it,
    /// and sweeps the now-dominated neighbors for redundancy.
    fn fix_vertex(&mut self, v: VertexRef) {
        debug_assert!(!self.g[v].is_removed);
        let (id, dom) = (self.g[v].id, self.g[v].dominated_count);
        self.g.add_to_fixed(id, dom);
        self.g.mark_neighbors_dominated(v);

        let saved = self.g[v].neighbors.clone();
        self.g.mark_removed(v);
        for &u in &saved {
            if !self.g[u].is_removed && self.is_redundant(u) {
                self.g.mark_removed(u);
            }
        }
    }

    /// Commits both `v` and `w`, then sweeps the union of their former
    /// neighborhoods for redundancy.
    fn fix_pair(&mut self, v: VertexRef, w: VertexRef) {
        debug_assert!(!self.g[v].is_removed && !self.g[w].is_removed);
        let (v_id, v_dom) = (self.g[v].id, self.g[v].dominated_count);
        let (w_id, w_dom) = (self.g[w].id, self.g[w].dominated_count);
        self.g.add_to_fixed(v_id, v_dom);
        self.g.add_to_fixed(w_id, w_dom);
        self.g.mark_neighbors_dominated(v);
        self.g.mark_neighbors_dominated(w);

        // The saved union may contain v, w or shared neighbors twice; the
        // removed check below skips all of those.
        let mut saved = self.g[v].neighbors.clone();
        saved.extend_from_slice(&self.g[w].neighbors);
        self.g.mark_removed(v);
        self.g.mark_removed(w);
        for &u in &saved {
            if !self.g[u].is_removed && self.is_redundant(u) {
                self.g.mark_removed(u);
            }
        }
    }

    /// Classifies neighbor `u` given that the closed neighborhood under
    /// scrutiny is tagged with the ids in `tags`.
    fn classify_outside(&self, tags: &[u32], u: VertexRef) -> NeighborClass {
        let mut dominated_outside = false;
        for &x in &self.g[u].neighbors {
            debug_assert!(!self.g[x].is_removed);
            if !tags.contains(&self.g[x].neighbor_tag) {
                if self.g[x].dominated_count == 0 {
                    return NeighborClass::N1;
                }
                dominated_outside = true;
            }
        }
        if dominated_outside {
            NeighborClass::N2Only
        } else {
            NeighborClass::N2OrN3
        }
    }

    /// After the N2/N3 candidates have been retagged with their own ids (and
    /// the scrutinized vertices zeroed), a remaining tag from `tags` marks
    /// exactly the N1 vertices. `u` belongs to N2 iff it is dominated or
    /// adjacent to an N1 vertex.
    fn is_in_n2(&self, tags: &[u32], u: VertexRef) -> bool {
        debug_assert!(!self.g[u].is_removed);
        if self.g[u].dominated_count > 0 {
            return true; // only undominated vertices can be in N3
        }
        for &x in &self.g[u].neighbors {
            if tags.contains(&self.g[x].neighbor_tag) {
                return true;
            }
        }
        false
    }

    /// Returns true iff every member is a neighbor of `v`. Retags N(v).
    fn is_subset_of_neighborhood(&mut self, members: &[VertexRef], v: VertexRef) -> bool {
        let v_id = self.g[v].id;
        for i in 0..self.g[v].degree() {
            let x = self.g[v].neighbors[i];
            self.g[x].neighbor_tag = v_id;
        }
        members.iter().all(|&u| self.g[u].neighbor_tag == v_id)
    }

    /// Single-vertex neighborhood rule, with the degree-0/1 simple rules
    /// folded in. Returns true iff the graph changed.
    fn rule1(&mut self, v: VertexRef) -> bool {
        debug_assert!(!self.g[v].is_removed);
        let degree = self.g[v].degree();
        if degree == 0 {
            if self.g[v].dominated_count == 0 {
                self.fix_vertex(v); // an isolated vertex can only cover itself
            } else {
                self.g.mark_removed(v);
            }
            return true;
        }
        if degree == 1 {
            // Subsumed by the general case below, but cheaper on the leaves
            // most sparse inputs are full of.
            if self.g[v].dominated_count == 0 {
                let u = self.g[v].neighbors[0];
                self.fix_vertex(u);
            } else {
                self.g.mark_removed(v);
            }
            return true;
        }

        let v_id = self.g[v].id;
        let mut n2_only: Vec<VertexRef> = Vec::new();
        let mut n2_n3_mixed: Vec<VertexRef> = Vec::new();

        self.g[v].neighbor_tag = v_id;
        for i in 0..degree {
            let u = self.g[v].neighbors[i];
            self.g[u].neighbor_tag = v_id;
        }
        for i in 0..degree {
            let u = self.g[v].neighbors[i];
            match self.classify_outside(&[v_id], u) {
                NeighborClass::N2OrN3 => n2_n3_mixed.push(u),
                NeighborClass::N2Only => n2_only.push(u),
                NeighborClass::N1 => {}
            }
        }
        // Retag the non-N1 classes with their own ids so a remaining v tag
        // identifies exactly the N1 vertices.
        for &u in n2_only.iter().chain(&n2_n3_mixed) {
            let u_id = self.g[u].id;
            self.g[u].neighbor_tag = u_id;
        }
        self.g[v].neighbor_tag = 0;

        // v is forced when its private neighborhood N3 is non-empty, or when
        // v is undominated and no neighbor is a strictly better dominator.
        let mut reduce = n2_only.len() + n2_n3_mixed.len() == degree
            && self.g[v].dominated_count == 0;
        if !reduce {
            for &u in &n2_n3_mixed {
                if !self.is_in_n2(&[v_id], u) {
                    reduce = true;
                    break;
                }
            }
        }

        if reduce {
            for &u in n2_only.iter().chain(&n2_n3_mixed) {
                self.g.mark_removed(u);
            }
            self.fix_vertex(v);
            return true;
        }
        false
    }

    /// Pair neighborhood rule on (v, w). Returns true iff the graph changed.
    fn rule2(&mut self, v: VertexRef, w: VertexRef) -> bool {
        debug_assert!(!self.g[v].is_removed && !self.g[w].is_removed);
        debug_assert!(v != w);
        let v_id = self.g[v].id;
        let w_id = self.g[w].id;

        let mut n2: Vec<VertexRef> = Vec::new();
        let mut n3: Vec<VertexRef> = Vec::new();
        let mut count_n1 = 0usize;

        // Tag N[w] first, then N[v]: shared neighbors end up with v's tag.
        self.g[w].neighbor_tag = w_id;
        for i in 0..self.g[w].degree() {
            let x = self.g[w].neighbors[i];
            self.g[x].neighbor_tag = w_id;
        }
        self.g[v].neighbor_tag = v_id;
        for i in 0..self.g[v].degree() {
            let x = self.g[v].neighbors[i];
            self.g[x].neighbor_tag = v_id;
        }
        let adjacent = self.g[w].neighbor_tag == v_id;

        for i in 0..self.g[v].degree() {
            let u = self.g[v].neighbors[i];
            if u == w {
                continue;
            }
            match self.classify_outside(&[v_id, w_id], u) {
                NeighborClass::N2OrN3 => n3.push(u),
                NeighborClass::N2Only => n2.push(u),
                NeighborClass::N1 => count_n1 += 1,
            }
        }
        for i in 0..self.g[w].degree() {
            let u = self.g[w].neighbors[i];
            // Shared neighbors carry v's tag and were already classified.
            if u == v || self.g[u].neighbor_tag != w_id {
                continue;
            }
            match self.classify_outside(&[v_id, w_id], u) {
                NeighborClass::N2OrN3 => n3.push(u),
                NeighborClass::N2Only => n2.push(u),
                NeighborClass::N1 => count_n1 += 1,
            }
        }

        for &u in n2.iter().chain(&n3) {
            let u_id = self.g[u].id;
            self.g[u].neighbor_tag = u_id;
        }
        self.g[v].neighbor_tag = 0;
        self.g[w].neighbor_tag = 0;
        let mut i = 0;
        while i < n3.len() {
            if self.is_in_n2(&[v_id, w_id], n3[i]) {
                n2.push(n3.swap_remove(i));
            } else {
                i += 1;
            }
        }
        // Tags of the scrutinized pair must hold valid values again.
        self.g[v].neighbor_tag = v_id;
        self.g[w].neighbor_tag = w_id;

        // Unlike the single-vertex rule, a non-empty N3 is not sufficient:
        // a common outside dominator of N3 would beat both endpoints.
        if n3.is_empty() || self.common_neighbor_exists(&n3, Some(v), Some(w)) {
            return false;
        }

        let v_covers_n3 = self.is_subset_of_neighborhood(&n3, v);
        let w_covers_n3 = self.is_subset_of_neighborhood(&n3, w);

        let mut remove_n3 = false;
        let mut remove_n2_v = false; // drop N2 ∩ N(v)
        let mut remove_n2_w = false; // drop N2 ∩ N(w)
        let mut fix_v = false;
        let mut fix_w = false;
        if v_covers_n3 && w_covers_n3 {
            // Either endpoint alone covers the private area. Forcing a
            // choice now would not shrink the optimum, so leave the
            // structure to the greedy phase.
            trace!(v = v_id, w = w_id, "pair rule: both endpoints cover N3, no change");
        } else if v_covers_n3 {
            remove_n3 = true;
            remove_n2_v = true;
            fix_v = true;
        } else if w_covers_n3 {
            remove_n3 = true;
            remove_n2_w = true;
            fix_w = true;
        } else {
            remove_n3 = true;
            remove_n2_v = true;
            remove_n2_w = true;
            fix_v = true;
            fix_w = true;
        }
        if count_n1 == 0 && !adjacent {
            // The component is exactly N[v] ∪ N[w]: whichever endpoint is
            // still undominated has to enter the solution.
            if self.g[v].dominated_count == 0 && self.g[w].dominated_count == 0 {
                remove_n3 = true;
                remove_n2_v = true;
                remove_n2_w = true;
                fix_v = true;
                fix_w = true;
            } else if self.g[v].dominated_count == 0 {
                fix_v = true;
                remove_n2_v = true;
            } else if self.g[w].dominated_count == 0 {
                fix_w = true;
                remove_n2_w = true;
            }
        }

        if remove_n3 {
            for &u in &n3 {
                if !self.g[u].is_removed {
                    self.g.mark_removed(u);
                }
            }
        }
        if remove_n2_v {
            for i in 0..self.g[v].degree() {
                let x = self.g[v].neighbors[i];
                self.g[x].neighbor_tag = v_id;
            }
            for &u in &n2 {
                if !self.g[u].is_removed && self.g[u].neighbor_tag == v_id {
                    self.g.mark_removed(u);
                }
            }
        }
        if remove_n2_w {
            for i in 0..self.g[w].degree() {
                let x = self.g[w].neighbors[i];
                self.g[x].neighbor_tag = w_id;
            }
            for &u in &n2 {
                if !self.g[u].is_removed && self.g[u].neighbor_tag == w_id {
                    self.g.mark_removed(u);
                }
            }
        }
        if fix_v && fix_w {
            self.fix_pair(v, w);
        } else if fix_v {
            self.fix_vertex(v);
        } else if fix_w {
            self.fix_vertex(w);
        }
        debug_assert_eq!(fix_v || fix_w, remove_n3 || remove_n2_v || remove_n2_w);
        fix_v || fix_w
    }
}

#[cfg(test)]
#[path = "unit_tests/reduction.rs"]
mod tests;
