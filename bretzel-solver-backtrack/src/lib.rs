//! Chronological backtracking with forward checking, the reference solver
//! for [bretzel_solver] problems.
//!
//! Slots are assigned in a static order, most-crossed first. At every
//! assignment the domains of the still-unassigned crossing slots are pruned
//! down to the words agreeing on the shared cell; a domain running empty
//! rejects the candidate immediately instead of letting the search discover
//! the dead end levels deeper.

use std::cmp::Reverse;
use std::rc::Rc;

use bretzel_solver::{Problem, Solver};

/// Implementation of [Solver]: depth-first search over the slots in static
/// degree order, forward-checking the crossing slots at each assignment,
/// backtracking chronologically. Deterministic: candidates are tried in
/// domain order, so equal inputs yield equal solutions.
pub struct BacktrackSolver;

impl Default for BacktrackSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BacktrackSolver {
    pub fn new() -> Self {
        BacktrackSolver
    }
}

impl Solver for BacktrackSolver {
    fn solve(&self, problem: &Problem<'_>) -> Option<Vec<usize>> {
        let order = assignment_order(problem);
        // Each recursion frame owns its domain snapshot; the root snapshot
        // copies the problem's domains so the input is never touched.
        let domains: Vec<Rc<Vec<usize>>> = (0..problem.slot_count())
            .map(|slot| Rc::new(problem.domain(slot).to_vec()))
            .collect();
        let mut assignment = vec![None; problem.slot_count()];
        let mut search = Search { problem, nodes: 0 };
        let solved = search.run(&order, &mut assignment, &domains);
        log::debug!(
            "search {} after {} candidate tries",
            if solved { "succeeded" } else { "was exhausted" },
            search.nodes,
        );
        if solved {
            assignment.into_iter().collect()
        } else {
            None
        }
    }
}

/// The static assignment order: slot ids by decreasing number of crossings,
/// ties kept in increasing id order. Computed once, never revised during the
/// search.
fn assignment_order(problem: &Problem<'_>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..problem.slot_count()).collect();
    order.sort_by_key(|&slot| Reverse(problem.degree(slot)));
    order
}

struct Search<'problem, 'words> {
    problem: &'problem Problem<'words>,
    /// Candidate words tried, over the whole search.
    nodes: u64,
}

impl Search<'_, '_> {
    /// One search frame: assigns the front slot of `unassigned` and recurses
    /// on the tail. Returns whether a full consistent assignment was reached;
    /// on failure, `assignment` is restored to its state at entry.
    fn run(
        &mut self,
        unassigned: &[usize],
        assignment: &mut [Option<usize>],
        domains: &[Rc<Vec<usize>>],
    ) -> bool {
        let Some((&slot, rest)) = unassigned.split_first() else {
            return true;
        };
        for &word in domains[slot].iter() {
            self.nodes += 1;
            if !self.consistent(slot, word, assignment) {
                continue;
            }
            assignment[slot] = Some(word);
            if let Some(pruned) = self.forward_check(slot, word, assignment, domains) {
                if self.run(rest, assignment, &pruned) {
                    return true;
                }
            }
            assignment[slot] = None;
        }
        false
    }

    /// Whether putting `word` in `slot` agrees with every crossing slot
    /// already assigned.
    fn consistent(&self, slot: usize, word: usize, assignment: &[Option<usize>]) -> bool {
        let letters = self.problem.word(word).as_bytes();
        self.problem
            .crossings_of(slot)
            .iter()
            .all(|crossing| match assignment[crossing.other] {
                Some(other_word) => {
                    letters[crossing.offset]
                        == self.problem.word(other_word).as_bytes()[crossing.other_offset]
                }
                None => true,
            })
    }

    /// Restricts the domains of the unassigned slots crossing `slot` to the
    /// words carrying `word`'s letter at the shared cell. Returns the pruned
    /// snapshot, or [None] when some domain runs empty. Slots left untouched
    /// share the parent frame's domain.
    fn forward_check(
        &self,
        slot: usize,
        word: usize,
        assignment: &[Option<usize>],
        domains: &[Rc<Vec<usize>>],
    ) -> Option<Vec<Rc<Vec<usize>>>> {
        let letters = self.problem.word(word).as_bytes();
        let mut pruned = domains.to_vec();
        for crossing in self.problem.crossings_of(slot) {
            if assignment[crossing.other].is_some() {
                continue;
            }
            let letter = letters[crossing.offset];
            let restricted: Vec<usize> = pruned[crossing.other]
                .iter()
                .copied()
                .filter(|&candidate| {
                    self.problem.word(candidate).as_bytes()[crossing.other_offset] == letter
                })
                .collect();
            if restricted.is_empty() {
                return None;
            }
            if restricted.len() < pruned[crossing.other].len() {
                pruned[crossing.other] = Rc::new(restricted);
            }
        }
        Some(pruned)
    }
}
