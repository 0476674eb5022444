//! Team-formation engine
//!
//! Validates a run, builds vectors and the similarity matrix, hands them to
//! the strategy and attaches metrics to every team. A run is a pure function
//! of its participants and configuration.

use crate::strategy::{strategy_for, AssignmentContext, AssignmentStrategy, Partition};
use crate::team::{Assignment, Team};
use ahash::AHashSet;
use teamsync_core::{AssignmentConfig, Diagnostic, Error, Participant, Result};
use teamsync_similarity::{SimilarityMatrix, TeamMetrics, VectorExtractor};
use tracing::{debug, warn};

/// Fewest participants a run will partition
pub const MIN_PARTICIPANTS: usize = 2;

/// Default cap on participants per run; the matrix is quadratic in this
pub const DEFAULT_MAX_PARTICIPANTS: usize = 10_000;

#[derive(Debug)]
pub struct TeamEngine {
    max_participants: usize,
    strategy: Option<Box<dyn AssignmentStrategy>>,
}

impl Default for TeamEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamEngine {
    pub fn new() -> Self {
        Self {
            max_participants: DEFAULT_MAX_PARTICIPANTS,
            strategy: None,
        }
    }

    #[must_use]
    pub fn with_max_participants(mut self, max_participants: usize) -> Self {
        self.max_participants = max_participants;
        self
    }

    /// Use `strategy` for every run instead of the one the configured approach selects
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl AssignmentStrategy + 'static) -> Self {
        self.strategy = Some(Box::new(strategy));
        self
    }

    pub fn max_participants(&self) -> usize {
        self.max_participants
    }

    /// Partition `participants` into teams under `config`
    pub fn form_teams(
        &self,
        participants: &[Participant],
        config: &AssignmentConfig,
    ) -> Result<Assignment> {
        config.validate()?;
        self.check_participants(participants)?;

        let default_strategy;
        let strategy: &dyn AssignmentStrategy = match &self.strategy {
            Some(strategy) => strategy.as_ref(),
            None => {
                default_strategy = strategy_for(config.team_approach);
                default_strategy.as_ref()
            }
        };

        debug!(
            participants = participants.len(),
            team_size = config.team_size,
            approach = %config.team_approach,
            strategy = strategy.name(),
            "forming teams"
        );

        let extraction = VectorExtractor::new(config.characteristics.clone())
            .extract_all(participants)?;
        let summaries: Vec<f64> = extraction.vectors.iter().map(|v| v.mean()).collect();
        let matrix = SimilarityMatrix::build(&extraction.vectors);

        let ctx = AssignmentContext {
            summaries: &summaries,
            matrix: &matrix,
            team_size: config.team_size,
            similarity_threshold: config.similarity_threshold,
        };
        let partition = strategy.assign(&ctx);
        check_partition(&partition, participants.len(), config.team_size, strategy.name())?;

        let mut warnings = extraction.diagnostics;
        for &(team, member) in &partition.overridden {
            let diagnostic = Diagnostic::PredicateOverridden {
                participant: participants[member].id.clone(),
                team,
            };
            warn!(%diagnostic, "acceptance predicate overridden");
            warnings.push(diagnostic);
        }

        let teams: Vec<Team> = partition
            .teams
            .iter()
            .map(|members| Team {
                members: members.iter().map(|&i| participants[i].id.clone()).collect(),
                metrics: TeamMetrics::compute(members, &matrix),
            })
            .collect();

        let assignment = Assignment::new(teams, warnings);
        debug!(
            teams = assignment.summary.team_count,
            mean_thi = assignment.summary.mean_thi,
            warnings = assignment.warnings.len(),
            "teams formed"
        );

        Ok(assignment)
    }

    fn check_participants(&self, participants: &[Participant]) -> Result<()> {
        if participants.len() < MIN_PARTICIPANTS {
            return Err(Error::InsufficientParticipants {
                required: MIN_PARTICIPANTS,
                actual: participants.len(),
            });
        }

        if participants.len() > self.max_participants {
            return Err(Error::TooManyParticipants {
                limit: self.max_participants,
                actual: participants.len(),
            });
        }

        let mut seen = AHashSet::with_capacity(participants.len());
        for participant in participants {
            if !seen.insert(&participant.id) {
                return Err(Error::DuplicateParticipant(participant.id.clone()));
            }
        }

        Ok(())
    }
}

/// Partition `participants` with the default engine
pub fn form_teams(participants: &[Participant], config: &AssignmentConfig) -> Result<Assignment> {
    TeamEngine::new().form_teams(participants, config)
}

// Every index exactly once, no empty or oversized team.
fn check_partition(partition: &Partition, n: usize, team_size: usize, strategy: &str) -> Result<()> {
    let mut seen = vec![false; n];

    for (t, team) in partition.teams.iter().enumerate() {
        if team.is_empty() || team.len() > team_size {
            return Err(Error::InvalidPartition(format!(
                "strategy '{}' produced team {} with {} members (team size {})",
                strategy,
                t,
                team.len(),
                team_size
            )));
        }
        for &member in team {
            if member >= n || seen[member] {
                return Err(Error::InvalidPartition(format!(
                    "strategy '{}' placed participant index {} more than once or out of range",
                    strategy, member
                )));
            }
            seen[member] = true;
        }
    }

    if let Some(missing) = seen.iter().position(|placed| !placed) {
        return Err(Error::InvalidPartition(format!(
            "strategy '{}' left participant index {} unassigned",
            strategy, missing
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greedy::{Objective, SimilarityGreedy};
    use crate::strategy::{AcceptancePredicate, AssignmentContext};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use serde_json::json;
    use teamsync_core::{CharacteristicSet, ParticipantId, TeamApproach};

    fn config(team_size: usize, approach: TeamApproach, keys: &[&str]) -> AssignmentConfig {
        AssignmentConfig::new(
            team_size,
            approach,
            CharacteristicSet::new(keys.iter().copied()).unwrap(),
        )
    }

    fn tech(id: &str, score: f64) -> Participant {
        Participant::new(id).with_score("tech", score)
    }

    fn scenario() -> Vec<Participant> {
        vec![tech("A", 80.0), tech("B", 82.0), tech("C", 10.0), tech("D", 15.0)]
    }

    fn member_ids(assignment: &Assignment) -> Vec<Vec<String>> {
        assignment
            .teams
            .iter()
            .map(|t| t.members.iter().map(|id| id.to_string()).collect())
            .collect()
    }

    fn random_cohort(rng: &mut StdRng, n: usize, keys: &[&str]) -> Vec<Participant> {
        (0..n)
            .map(|i| {
                keys.iter().fold(Participant::new(format!("p{}", i)), |p, key| {
                    p.with_score(*key, rng.random_range(0..=100) as f64)
                })
            })
            .collect()
    }

    #[test]
    fn test_homogeneous_scenario() {
        let assignment = form_teams(&scenario(), &config(2, TeamApproach::Homogeneous, &["tech"]))
            .unwrap();
        assert_eq!(member_ids(&assignment), vec![vec!["C", "D"], vec!["A", "B"]]);
        assert!(assignment.warnings.is_empty());
    }

    #[test]
    fn test_heterogeneous_scenario() {
        let assignment =
            form_teams(&scenario(), &config(2, TeamApproach::Heterogeneous, &["tech"])).unwrap();
        assert_eq!(member_ids(&assignment), vec![vec!["B", "C"], vec!["A", "D"]]);
    }

    #[test]
    fn test_scenario_metrics() {
        let assignment = form_teams(&scenario(), &config(2, TeamApproach::Homogeneous, &["tech"]))
            .unwrap();

        // C=10, D=15 -> distance 5; A=80, B=82 -> distance 2
        assert_eq!(assignment.teams[0].metrics.avg_similarity, 1.0 / 6.0);
        assert_eq!(assignment.teams[1].metrics.avg_similarity, 1.0 / 3.0);
        for team in &assignment.teams {
            assert_eq!(team.metrics.thi, 1.0 - team.metrics.avg_similarity);
        }
    }

    #[test]
    fn test_five_participants_team_size_two() {
        let participants: Vec<Participant> = (0..5)
            .map(|i| tech(&format!("p{}", i), (i * 10) as f64))
            .collect();

        for approach in [TeamApproach::Homogeneous, TeamApproach::Heterogeneous] {
            let assignment = form_teams(&participants, &config(2, approach, &["tech"])).unwrap();
            let sizes: Vec<usize> = assignment.teams.iter().map(Team::len).collect();

            assert_eq!(sizes, vec![2, 2, 1]);
            assert_eq!(assignment.teams[2].metrics, TeamMetrics::default());
        }
    }

    #[test]
    fn test_zero_team_size_is_invalid_config() {
        let result = form_teams(&scenario(), &config(0, TeamApproach::Homogeneous, &["tech"]));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_single_participant_is_rejected() {
        let result = form_teams(
            &[tech("A", 80.0)],
            &config(2, TeamApproach::Homogeneous, &["tech"]),
        );
        assert_eq!(
            result.unwrap_err(),
            Error::InsufficientParticipants { required: 2, actual: 1 }
        );

        let empty = form_teams(&[], &config(2, TeamApproach::Homogeneous, &["tech"]));
        assert!(matches!(empty, Err(Error::InsufficientParticipants { actual: 0, .. })));
    }

    #[test]
    fn test_participant_cap() {
        let engine = TeamEngine::new().with_max_participants(3);
        let result = engine.form_teams(&scenario(), &config(2, TeamApproach::Homogeneous, &["tech"]));
        assert_eq!(result.unwrap_err(), Error::TooManyParticipants { limit: 3, actual: 4 });
        assert_eq!(TeamEngine::default().max_participants(), DEFAULT_MAX_PARTICIPANTS);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let participants = vec![tech("A", 1.0), tech("B", 2.0), tech("A", 3.0)];
        let result = form_teams(&participants, &config(2, TeamApproach::Homogeneous, &["tech"]));
        assert_eq!(result.unwrap_err(), Error::DuplicateParticipant(ParticipantId::from("A")));
    }

    #[test]
    fn test_missing_attribute_is_a_warning() {
        let participants = vec![
            tech("A", 80.0).with_score("comm", 40.0),
            tech("B", 60.0),
            tech("C", 20.0).with_score("comm", 90.0),
        ];
        let assignment =
            form_teams(&participants, &config(2, TeamApproach::Homogeneous, &["tech", "comm"]))
                .unwrap();

        assert_eq!(
            assignment.warnings,
            vec![Diagnostic::MissingAttribute {
                participant: ParticipantId::from("B"),
                characteristic: "comm".to_string(),
            }]
        );
        // B summarises to 30 with the gap filled by 0
        assert_eq!(member_ids(&assignment), vec![vec!["B", "C"], vec!["A"]]);
    }

    #[test]
    fn test_invalid_attribute_rejects_batch() {
        let participants = vec![
            tech("A", 80.0),
            Participant::new("B").with_value("tech", json!({"level": "high"})),
        ];
        let result = form_teams(&participants, &config(2, TeamApproach::Homogeneous, &["tech"]));

        assert_eq!(
            result.unwrap_err(),
            Error::InvalidAttributeType {
                participant: ParticipantId::from("B"),
                characteristic: "tech".to_string(),
            }
        );
    }

    #[test]
    fn test_extreme_scores_keep_similarity_positive() {
        let participants = vec![tech("A", 1e100), tech("B", -1e100)];

        for approach in [TeamApproach::Homogeneous, TeamApproach::Heterogeneous] {
            let assignment =
                form_teams(&participants, &config(2, approach, &["tech"])).unwrap();
            let metrics = assignment.teams[0].metrics;
            assert!(metrics.avg_similarity > 0.0 && metrics.avg_similarity <= 1.0);
            assert!(!metrics.thi.is_nan());
        }
    }

    #[test]
    fn test_out_of_range_score_rejects_batch() {
        let participants = vec![tech("A", 1e200), tech("B", -1e200)];
        let result = form_teams(&participants, &config(2, TeamApproach::Heterogeneous, &["tech"]));

        assert_eq!(
            result.unwrap_err(),
            Error::InvalidAttributeType {
                participant: ParticipantId::from("A"),
                characteristic: "tech".to_string(),
            }
        );
    }

    #[test]
    fn test_custom_strategy() {
        let engine = TeamEngine::new().with_strategy(SimilarityGreedy::new(Objective::Heterogeneous));
        // The configured approach is ignored once a strategy is installed
        let assignment = engine
            .form_teams(&scenario(), &config(2, TeamApproach::Homogeneous, &["tech"]))
            .unwrap();

        assert_eq!(member_ids(&assignment), vec![vec!["A", "C"], vec!["B", "D"]]);
    }

    #[derive(Debug)]
    struct DropsLast;

    impl AssignmentStrategy for DropsLast {
        fn name(&self) -> &'static str {
            "drops-last"
        }

        fn assign(&self, ctx: &AssignmentContext<'_>) -> Partition {
            Partition::from_teams(vec![(0..ctx.len() - 1).collect()])
        }
    }

    #[test]
    fn test_broken_strategy_is_caught() {
        let engine = TeamEngine::new().with_strategy(DropsLast);
        let result = engine.form_teams(&scenario(), &config(4, TeamApproach::Homogeneous, &["tech"]));
        assert!(matches!(result, Err(Error::InvalidPartition(_))));
    }

    #[derive(Debug)]
    struct Never;

    impl AcceptancePredicate for Never {
        fn accepts(&self, _ctx: &AssignmentContext<'_>, team: &[usize], _candidate: usize) -> bool {
            team.is_empty()
        }
    }

    #[test]
    fn test_predicate_override_surfaces_as_warning() {
        let engine = TeamEngine::new()
            .with_strategy(crate::HeterogeneousGreedy::new().with_predicate(Never));
        let assignment = engine
            .form_teams(&scenario(), &config(2, TeamApproach::Heterogeneous, &["tech"]))
            .unwrap();

        assert_eq!(member_ids(&assignment), vec![vec!["B", "C"], vec!["A", "D"]]);
        assert_eq!(
            assignment.warnings,
            vec![
                Diagnostic::PredicateOverridden { participant: ParticipantId::from("C"), team: 0 },
                Diagnostic::PredicateOverridden { participant: ParticipantId::from("D"), team: 1 },
            ]
        );
    }

    #[test]
    fn test_threshold_does_not_change_default_policies() {
        for approach in [TeamApproach::Homogeneous, TeamApproach::Heterogeneous] {
            let low = form_teams(&scenario(), &config(2, approach, &["tech"]).with_similarity_threshold(0.0))
                .unwrap();
            let high =
                form_teams(&scenario(), &config(2, approach, &["tech"]).with_similarity_threshold(99.0))
                    .unwrap();
            assert_eq!(low, high);
        }
    }

    #[test]
    fn test_coverage_and_size_balance() {
        let keys = ["tech", "comm", "creative"];
        let mut rng = StdRng::seed_from_u64(7);

        for n in 2..40 {
            let participants = random_cohort(&mut rng, n, &keys);
            for team_size in 1..=6 {
                for approach in [TeamApproach::Homogeneous, TeamApproach::Heterogeneous] {
                    let assignment =
                        form_teams(&participants, &config(team_size, approach, &keys)).unwrap();

                    let mut ids: Vec<ParticipantId> = assignment
                        .teams
                        .iter()
                        .flat_map(|t| t.members.iter().cloned())
                        .collect();
                    ids.sort();
                    let mut expected: Vec<ParticipantId> =
                        participants.iter().map(|p| p.id.clone()).collect();
                    expected.sort();
                    assert_eq!(ids, expected, "n={} size={} {}", n, team_size, approach);

                    let (last, full) = assignment.teams.split_last().unwrap();
                    assert!(full.iter().all(|t| t.len() == team_size));
                    let remainder = n % team_size;
                    let expected_last = if remainder == 0 { team_size } else { remainder };
                    assert_eq!(last.len(), expected_last);
                    assert_eq!(assignment.teams.len(), (n + team_size - 1) / team_size);
                }
            }
        }
    }

    #[test]
    fn test_metric_identity_and_range() {
        let keys = ["tech", "comm"];
        let mut rng = StdRng::seed_from_u64(11);
        let participants = random_cohort(&mut rng, 30, &keys);

        for approach in [TeamApproach::Homogeneous, TeamApproach::Heterogeneous] {
            let assignment = form_teams(&participants, &config(4, approach, &keys)).unwrap();
            for team in &assignment.teams {
                if team.len() < 2 {
                    assert_eq!(team.metrics, TeamMetrics::default());
                    continue;
                }
                let m = team.metrics;
                assert!(m.avg_similarity > 0.0 && m.avg_similarity <= 1.0);
                assert!((m.thi - (1.0 - m.avg_similarity)).abs() <= 1e-9);
            }
        }
    }

    #[test]
    fn test_deterministic_output() {
        let keys = ["tech", "comm", "creative", "leadership"];
        let mut rng = StdRng::seed_from_u64(3);
        let participants = random_cohort(&mut rng, 57, &keys);

        for approach in [TeamApproach::Homogeneous, TeamApproach::Heterogeneous] {
            let cfg = config(5, approach, &keys);
            let first = serde_json::to_string(&form_teams(&participants, &cfg).unwrap()).unwrap();
            let second = serde_json::to_string(&form_teams(&participants, &cfg).unwrap()).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_homogeneous_teams_are_more_similar() {
        let keys = ["tech"];
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let participants = random_cohort(&mut rng, 24, &keys);
            let homogeneous =
                form_teams(&participants, &config(4, TeamApproach::Homogeneous, &keys)).unwrap();
            let heterogeneous =
                form_teams(&participants, &config(4, TeamApproach::Heterogeneous, &keys)).unwrap();

            assert!(
                homogeneous.summary.mean_avg_similarity >= heterogeneous.summary.mean_avg_similarity
            );
            assert!(homogeneous.summary.mean_thi <= heterogeneous.summary.mean_thi);
        }
    }
}
