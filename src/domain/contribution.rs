use std::cmp::Reverse;

use super::features::{Feature, FeatureId};

/// Immutable input to a price recomputation.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceSnapshot {
    pub features: Vec<Feature>,
    pub base_price: i64,
}

impl PriceSnapshot {
    pub fn breakdown(&self) -> ContributionBreakdown {
        compute_breakdown(&self.features, self.base_price)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Contribution {
    pub feature_id: FeatureId,
    pub label: String,
    pub formatted_value: String,
    /// Signed currency amount; positive raises the price above the base.
    pub amount: i64,
}

impl Contribution {
    pub fn is_increase(&self) -> bool {
        self.amount > 0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContributionBreakdown {
    pub base_price: i64,
    pub predicted_price: i64,
    /// Contributions in catalog order.
    pub contributions: Vec<Contribution>,
}

impl ContributionBreakdown {
    /// Contributions ordered by descending magnitude; ties keep catalog order.
    pub fn ranked(&self) -> Vec<Contribution> {
        let mut ranked = self.contributions.clone();
        ranked.sort_by_key(|c| Reverse(c.amount.unsigned_abs()));
        ranked
    }

    pub fn increase_total(&self) -> i64 {
        self.contributions
            .iter()
            .map(|c| c.amount)
            .filter(|amount| *amount > 0)
            .sum()
    }

    pub fn decrease_total(&self) -> i64 {
        self.contributions
            .iter()
            .map(|c| c.amount)
            .filter(|amount| *amount < 0)
            .sum()
    }

    /// Largest absolute contribution, used to scale chart bars.
    pub fn max_magnitude(&self) -> u64 {
        self.contributions
            .iter()
            .map(|c| c.amount.unsigned_abs())
            .max()
            .unwrap_or(0)
    }
}

/// Rounded linear contribution of a single feature.
pub fn contribution_for(feature: &Feature) -> i64 {
    let raw = (feature.value - feature.base_value) * feature.weight;
    // Half-way values round towards positive infinity.
    (raw + 0.5).floor() as i64
}

pub fn compute_breakdown(features: &[Feature], base_price: i64) -> ContributionBreakdown {
    let contributions: Vec<Contribution> = features
        .iter()
        .map(|feature| Contribution {
            feature_id: feature.id,
            label: feature.label.to_string(),
            formatted_value: feature.format_value(),
            amount: contribution_for(feature),
        })
        .collect();

    let total: i64 = contributions.iter().map(|c| c.amount).sum();

    ContributionBreakdown {
        base_price,
        predicted_price: base_price + total,
        contributions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::features::default_features;

    fn at_baseline() -> Vec<Feature> {
        default_features()
            .into_iter()
            .map(|mut f| {
                f.value = f.base_value;
                f
            })
            .collect()
    }

    fn with_value(id: FeatureId, value: f64) -> Feature {
        let mut feature = default_features()
            .into_iter()
            .find(|f| f.id == id)
            .expect("feature in catalog");
        feature.value = value;
        feature
    }

    #[test]
    fn baseline_features_leave_base_price_untouched() {
        let breakdown = compute_breakdown(&at_baseline(), 350_000);
        assert_eq!(breakdown.predicted_price, 350_000);
        assert!(breakdown.contributions.iter().all(|c| c.amount == 0));
    }

    #[test]
    fn smaller_area_lowers_the_price() {
        assert_eq!(contribution_for(&with_value(FeatureId::Area, 1800.0)), -24_000);
    }

    #[test]
    fn garage_adds_its_flat_value() {
        assert_eq!(contribution_for(&with_value(FeatureId::HasGarage, 1.0)), 15_000);
    }

    #[test]
    fn negative_weight_flips_direction() {
        assert_eq!(contribution_for(&with_value(FeatureId::Proximity, 10.0)), 30_000);
        assert_eq!(contribution_for(&with_value(FeatureId::Proximity, 25.0)), -15_000);
    }

    #[test]
    fn half_way_amounts_round_up() {
        let mut feature = with_value(FeatureId::Area, 2000.5);
        feature.weight = 1.0;
        assert_eq!(contribution_for(&feature), 1);
        feature.value = 1999.5;
        assert_eq!(contribution_for(&feature), 0);
    }

    #[test]
    fn sign_follows_deviation_times_weight() {
        for feature in default_features() {
            for value in [feature.min, feature.max] {
                let mut f = feature.clone();
                f.value = value;
                let raw = (f.value - f.base_value) * f.weight;
                let expected = if raw > 0.0 {
                    1
                } else if raw < 0.0 {
                    -1
                } else {
                    0
                };
                assert_eq!(contribution_for(&f).signum(), expected, "{}", f.label);
            }
        }
    }

    #[test]
    fn predicted_price_is_base_plus_sum_of_contributions() {
        let breakdown = compute_breakdown(&default_features(), 370_012);
        let sum: i64 = breakdown.contributions.iter().map(|c| c.amount).sum();
        assert_eq!(breakdown.predicted_price, 370_012 + sum);
        // area -24k, year +5k, basement -30k, garage +15k, proximity +30k
        assert_eq!(sum, -4_000);
        assert_eq!(breakdown.increase_total(), 50_000);
        assert_eq!(breakdown.decrease_total(), -54_000);
    }

    #[test]
    fn ranked_orders_by_magnitude_and_keeps_ties_stable() {
        let breakdown = compute_breakdown(&default_features(), 350_000);
        let labels: Vec<_> = breakdown
            .ranked()
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(
            labels,
            [
                "Basement Area",
                "Proximity to City Center",
                "Area",
                "Has Garage",
                "Year Built",
                "Bedrooms",
                "Bathrooms",
            ]
        );
        assert_eq!(breakdown.max_magnitude(), 30_000);
    }

    #[test]
    fn breakdown_carries_labels_and_formatted_values() {
        let breakdown = compute_breakdown(&default_features(), 350_000);
        let area = &breakdown.contributions[0];
        assert_eq!(area.label, "Area");
        assert_eq!(area.formatted_value, "1,800 sq ft");
        assert!(!area.is_increase());
    }

    #[test]
    fn snapshot_recomputation_is_pure() {
        let snapshot = PriceSnapshot {
            features: default_features(),
            base_price: 350_000,
        };
        assert_eq!(snapshot.breakdown(), snapshot.breakdown());
    }
}
