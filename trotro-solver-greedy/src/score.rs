//! Multi-objective candidate scoring.

use trotro_core::OptimizationObjectives;

/// Scale constants of the additive candidate score.
///
/// The score is a cost: lower is better. Each term scales one
/// objective so that a kilometre, a minute, and a waiting passenger
/// compete on comparable magnitudes. The scales, the fuel and emission
/// distance shares, and the cultural penalty are calibration targets
/// carried over from operational practice, not derived constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Scale for distance-driven terms (distance, fuel, emissions).
    pub distance_scale: f64,
    /// Scale for the travel-time term.
    pub time_scale: f64,
    /// Scale for the demand-coverage reward.
    pub coverage_scale: f64,
    /// Fraction of the distance term attributed to fuel cost.
    pub fuel_distance_share: f64,
    /// Fraction of the distance term attributed to emissions.
    pub emission_distance_share: f64,
    /// Flat deterrent added while the evaluation instant falls in an
    /// avoided cultural window. A deterrent, not a hard constraint.
    pub cultural_penalty: f64,
    /// Scores closer than this are ties, broken by lower stop index.
    pub tie_epsilon: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            distance_scale: 100.0,
            time_scale: 10.0,
            coverage_scale: 50.0,
            fuel_distance_share: 0.8,
            emission_distance_share: 0.2,
            cultural_penalty: 1000.0,
            tie_epsilon: 1e-9,
        }
    }
}

impl ScoreWeights {
    /// Score one candidate leg. Lower is better.
    ///
    /// `leg_km` and `leg_minutes` describe the leg to the candidate
    /// (congestion already applied to the minutes), `demand` is the
    /// boarding demand picked up there, and `penalised` is whether the
    /// evaluation instant sits inside an avoided cultural window.
    #[must_use]
    pub fn candidate_score(
        &self,
        leg_km: f64,
        leg_minutes: f64,
        demand: f64,
        objectives: &OptimizationObjectives,
        penalised: bool,
    ) -> f64 {
        let mut score = leg_km * objectives.distance * self.distance_scale
            + leg_minutes * objectives.time * self.time_scale
            + leg_km * self.fuel_distance_share * objectives.fuel_cost * self.distance_scale
            + leg_km * self.emission_distance_share * objectives.emissions * self.distance_scale
            - demand * objectives.passenger_coverage * self.coverage_scale;
        if penalised {
            score += self.cultural_penalty;
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn nearer_stop_scores_lower_under_distance_weight() {
        let weights = ScoreWeights::default();
        let objectives = OptimizationObjectives {
            distance: 1.0,
            time: 0.0,
            fuel_cost: 0.0,
            emissions: 0.0,
            passenger_coverage: 0.0,
            driver_efficiency: 0.0,
            vehicle_wear: 0.0,
        };
        let near = weights.candidate_score(1.0, 2.4, 10.0, &objectives, false);
        let far = weights.candidate_score(3.0, 7.2, 10.0, &objectives, false);
        assert!(near < far);
    }

    #[rstest]
    fn demand_reduces_score_under_coverage_weight() {
        let weights = ScoreWeights::default();
        let objectives = OptimizationObjectives {
            distance: 0.5,
            time: 0.0,
            fuel_cost: 0.0,
            emissions: 0.0,
            passenger_coverage: 0.5,
            driver_efficiency: 0.0,
            vehicle_wear: 0.0,
        };
        let quiet = weights.candidate_score(2.0, 4.8, 5.0, &objectives, false);
        let busy = weights.candidate_score(2.0, 4.8, 50.0, &objectives, false);
        assert!(busy < quiet);
    }

    #[rstest]
    fn cultural_penalty_is_flat_and_additive() {
        let weights = ScoreWeights::default();
        let objectives = OptimizationObjectives::balanced();
        let clear = weights.candidate_score(2.0, 4.8, 5.0, &objectives, false);
        let penalised = weights.candidate_score(2.0, 4.8, 5.0, &objectives, true);
        assert!((penalised - clear - weights.cultural_penalty).abs() < 1e-9);
    }

    #[rstest]
    fn emission_weight_tracks_distance() {
        let weights = ScoreWeights::default();
        let objectives = OptimizationObjectives {
            distance: 0.0,
            time: 0.0,
            fuel_cost: 0.0,
            emissions: 1.0,
            passenger_coverage: 0.0,
            driver_efficiency: 0.0,
            vehicle_wear: 0.0,
        };
        let score = weights.candidate_score(2.0, 4.8, 0.0, &objectives, false);
        assert!((score - 2.0 * 0.2 * 100.0).abs() < 1e-9);
    }
}
