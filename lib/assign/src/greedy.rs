use crate::strategy::{
    pick_best, AcceptAll, AcceptancePredicate, AssignmentContext, AssignmentStrategy, Partition,
};

/// Which end of the similarity scale a matrix-driven team reaches for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    /// Add the candidate most similar to the current members
    Homogeneous,
    /// Add the candidate least similar to the current members
    Heterogeneous,
}

/// Matrix-driven greedy grouping.
///
/// Seeds each team with the first unplaced participant in input order and
/// grows it with the candidate whose mean similarity to the current members
/// is highest (or lowest, for [`Objective::Heterogeneous`]). Not selected by
/// any configured approach; install it with `TeamEngine::with_strategy`.
#[derive(Debug)]
pub struct SimilarityGreedy {
    objective: Objective,
    predicate: Box<dyn AcceptancePredicate>,
}

impl SimilarityGreedy {
    pub fn new(objective: Objective) -> Self {
        Self {
            objective,
            predicate: Box::new(AcceptAll),
        }
    }

    /// Restrict which candidates may join a team
    #[must_use]
    pub fn with_predicate(mut self, predicate: impl AcceptancePredicate + 'static) -> Self {
        self.predicate = Box::new(predicate);
        self
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }
}

impl AssignmentStrategy for SimilarityGreedy {
    fn name(&self) -> &'static str {
        match self.objective {
            Objective::Homogeneous => "similarity-greedy-homogeneous",
            Objective::Heterogeneous => "similarity-greedy-heterogeneous",
        }
    }

    fn assign(&self, ctx: &AssignmentContext<'_>) -> Partition {
        let n = ctx.len();
        let team_size = ctx.team_size.max(1);
        let mut placed = vec![false; n];
        let mut remaining = n;
        let mut partition = Partition::default();

        while remaining > 0 {
            let team_index = partition.teams.len();
            let mut team: Vec<usize> = Vec::with_capacity(team_size);

            while team.len() < team_size && remaining > 0 {
                let picked = if team.is_empty() {
                    pick_best(ctx, self.predicate.as_ref(), &team, &placed, |_| 0.0)
                } else {
                    pick_best(ctx, self.predicate.as_ref(), &team, &placed, |i| {
                        let mean = ctx.matrix.mean_to(i, &team).unwrap_or(0.0);
                        match self.objective {
                            Objective::Homogeneous => mean,
                            Objective::Heterogeneous => -mean,
                        }
                    })
                };

                let Some((candidate, overridden)) = picked else {
                    break;
                };
                if overridden {
                    partition.overridden.push((team_index, candidate));
                }

                placed[candidate] = true;
                remaining -= 1;
                team.push(candidate);
            }

            partition.teams.push(team);
        }

        partition
    }
}
