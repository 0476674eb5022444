use crate::strategy::{AssignmentContext, AssignmentStrategy, Partition};
use ordered_float::OrderedFloat;

/// Homogeneous grouping by contiguous blocks.
///
/// Participants are stably sorted by ascending summary and cut into blocks
/// of `team_size`; neighbours in that order are the closest available, so
/// each block has minimal spread. The last block keeps the remainder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomogeneousBlock;

impl AssignmentStrategy for HomogeneousBlock {
    fn name(&self) -> &'static str {
        "homogeneous-block"
    }

    fn assign(&self, ctx: &AssignmentContext<'_>) -> Partition {
        let mut order: Vec<usize> = (0..ctx.len()).collect();
        // `sort_by_key` is stable: equal summaries keep input order
        order.sort_by_key(|&i| OrderedFloat(ctx.summaries[i]));

        let teams = order
            .chunks(ctx.team_size.max(1))
            .map(<[usize]>::to_vec)
            .collect();

        Partition::from_teams(teams)
    }
}
