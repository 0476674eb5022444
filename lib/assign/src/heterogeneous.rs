use crate::strategy::{
    pick_best, AcceptAll, AcceptancePredicate, AssignmentContext, AssignmentStrategy, Partition,
};

/// Heterogeneous grouping by greedy spread.
///
/// Each team is seeded with the highest-summary participant still unplaced,
/// then grown by repeatedly adding whoever lies furthest from the team's
/// running mean summary. Teams are filled one at a time; the last one keeps
/// the remainder.
#[derive(Debug)]
pub struct HeterogeneousGreedy {
    predicate: Box<dyn AcceptancePredicate>,
}

impl Default for HeterogeneousGreedy {
    fn default() -> Self {
        Self::new()
    }
}

impl HeterogeneousGreedy {
    pub fn new() -> Self {
        Self {
            predicate: Box::new(AcceptAll),
        }
    }

    /// Restrict which candidates may join a team
    #[must_use]
    pub fn with_predicate(mut self, predicate: impl AcceptancePredicate + 'static) -> Self {
        self.predicate = Box::new(predicate);
        self
    }
}

impl AssignmentStrategy for HeterogeneousGreedy {
    fn name(&self) -> &'static str {
        "heterogeneous-greedy"
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
            let mut summary_total = 0.0;

            while team.len() < team_size && remaining > 0 {
                let picked = if team.is_empty() {
                    pick_best(ctx, self.predicate.as_ref(), &team, &placed, |i| {
                        ctx.summaries[i]
                    })
                } else {
                    let mean = summary_total / team.len() as f64;
                    pick_best(ctx, self.predicate.as_ref(), &team, &placed, |i| {
                        (ctx.summaries[i] - mean).abs()
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
                summary_total += ctx.summaries[candidate];
                team.push(candidate);
            }

            partition.teams.push(team);
        }

        partition
    }
}
