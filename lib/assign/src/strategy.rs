//! Assignment strategy interface
//!
//! A strategy turns per-participant data into a partition of participant
//! indices. Strategies never see participant records, only the precomputed
//! scalar summaries and similarity matrix for the run.

use crate::heterogeneous::HeterogeneousGreedy;
use crate::homogeneous::HomogeneousBlock;
use std::fmt;
use teamsync_core::TeamApproach;
use teamsync_similarity::SimilarityMatrix;

/// Everything a strategy may consult for one run
#[derive(Debug, Clone, Copy)]
pub struct AssignmentContext<'a> {
    /// Mean of each participant's characteristic vector, in input order
    pub summaries: &'a [f64],
    /// Pairwise similarity over the same participants
    pub matrix: &'a SimilarityMatrix,
    /// Maximum team size, always positive
    pub team_size: usize,
    /// Configured threshold, available to acceptance predicates
    pub similarity_threshold: f64,
}

impl<'a> AssignmentContext<'a> {
    /// Number of participants to place
    #[inline]
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

/// A strategy's output: teams as participant indices, in assignment order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub teams: Vec<Vec<usize>>,
    /// `(team, participant)` placements made after the acceptance predicate
    /// rejected every remaining candidate
    pub overridden: Vec<(usize, usize)>,
}

impl Partition {
    pub fn from_teams(teams: Vec<Vec<usize>>) -> Self {
        Self {
            teams,
            overridden: Vec::new(),
        }
    }
}

/// Team-construction policy
pub trait AssignmentStrategy: Send + Sync + fmt::Debug {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Partition `0..ctx.len()` into teams of at most `ctx.team_size`
    fn assign(&self, ctx: &AssignmentContext<'_>) -> Partition;
}

/// Decides whether `candidate` may join the partially built `team`.
///
/// This is where `similarity_threshold` is meant to plug in once its
/// grouping rule is settled; the shipped predicate accepts everyone.
pub trait AcceptancePredicate: Send + Sync + fmt::Debug {
    fn accepts(&self, ctx: &AssignmentContext<'_>, team: &[usize], candidate: usize) -> bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcceptAll;

impl AcceptancePredicate for AcceptAll {
    #[inline]
    fn accepts(&self, _ctx: &AssignmentContext<'_>, _team: &[usize], _candidate: usize) -> bool {
        true
    }
}

/// Built-in strategy for a configured approach
pub fn strategy_for(approach: TeamApproach) -> Box<dyn AssignmentStrategy> {
    match approach {
        TeamApproach::Homogeneous => Box::new(HomogeneousBlock),
        TeamApproach::Heterogeneous => Box::new(HeterogeneousGreedy::new()),
    }
}

/// Pick the unplaced participant with the highest score.
///
/// Ties go to the earliest input position. Candidates the predicate rejects
/// are skipped; if it rejects all of them the best unplaced participant is
/// returned anyway, flagged with `true`.
pub(crate) fn pick_best<F>(
    ctx: &AssignmentContext<'_>,
    predicate: &dyn AcceptancePredicate,
    team: &[usize],
    placed: &[bool],
    score: F,
) -> Option<(usize, bool)>
where
    F: Fn(usize) -> f64,
{
    let best = |accept: &dyn Fn(usize) -> bool| {
        let mut best: Option<(usize, f64)> = None;
        for candidate in (0..placed.len()).filter(|&i| !placed[i] && accept(i)) {
            let value = score(candidate);
            if best.map_or(true, |(_, top)| value > top) {
                best = Some((candidate, value));
            }
        }
        best.map(|(candidate, _)| candidate)
    };

    if let Some(candidate) = best(&|i| predicate.accepts(ctx, team, i)) {
        return Some((candidate, false));
    }
    best(&|_| true).map(|candidate| (candidate, true))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use teamsync_core::CharacteristicVector;

    /// Context fixture over one-dimensional scores
    pub(crate) struct Fixture {
        pub summaries: Vec<f64>,
        pub matrix: SimilarityMatrix,
    }

    impl Fixture {
        pub(crate) fn new(scores: &[f64]) -> Self {
            let vectors: Vec<CharacteristicVector> = scores
                .iter()
                .map(|s| CharacteristicVector::new(vec![*s]))
                .collect();
            Self {
                summaries: scores.to_vec(),
                matrix: SimilarityMatrix::build(&vectors),
            }
        }

        pub(crate) fn ctx(&self, team_size: usize) -> AssignmentContext<'_> {
            AssignmentContext {
                summaries: &self.summaries,
                matrix: &self.matrix,
                team_size,
                similarity_threshold: 50.0,
            }
        }
    }

    #[derive(Debug)]
    struct RejectAll;

    impl AcceptancePredicate for RejectAll {
        fn accepts(&self, _ctx: &AssignmentContext<'_>, _team: &[usize], _candidate: usize) -> bool {
            false
        }
    }

    #[test]
    fn test_pick_best_prefers_earliest_on_tie() {
        let fixture = Fixture::new(&[5.0, 9.0, 9.0, 1.0]);
        let ctx = fixture.ctx(2);
        let placed = vec![false; 4];

        let picked = pick_best(&ctx, &AcceptAll, &[], &placed, |i| ctx.summaries[i]);
        assert_eq!(picked, Some((1, false)));
    }

    #[test]
    fn test_pick_best_skips_placed() {
        let fixture = Fixture::new(&[5.0, 9.0, 9.0, 1.0]);
        let ctx = fixture.ctx(2);
        let placed = vec![false, true, true, false];

        let picked = pick_best(&ctx, &AcceptAll, &[], &placed, |i| ctx.summaries[i]);
        assert_eq!(picked, Some((0, false)));

        let all_placed = vec![true; 4];
        assert_eq!(pick_best(&ctx, &AcceptAll, &[], &all_placed, |i| ctx.summaries[i]), None);
    }

    #[test]
    fn test_pick_best_overrides_rejecting_predicate() {
        let fixture = Fixture::new(&[5.0, 9.0]);
        let ctx = fixture.ctx(2);
        let placed = vec![false; 2];

        let picked = pick_best(&ctx, &RejectAll, &[], &placed, |i| ctx.summaries[i]);
        assert_eq!(picked, Some((1, true)));
    }

    #[test]
    fn test_strategy_for_approach() {
        assert_eq!(strategy_for(TeamApproach::Homogeneous).name(), "homogeneous-block");
        assert_eq!(strategy_for(TeamApproach::Heterogeneous).name(), "heterogeneous-greedy");
    }
}
