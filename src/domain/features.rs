//! The fixed catalog of house features exposed as sliders.

use crate::util::format::group_thousands;

/// Identifier for one of the house features driving the prediction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureId {
    Area,
    Bedrooms,
    Bathrooms,
    YearBuilt,
    BasementArea,
    HasGarage,
    Proximity,
}

impl FeatureId {
    pub const ALL: [FeatureId; 7] = [
        FeatureId::Area,
        FeatureId::Bedrooms,
        FeatureId::Bathrooms,
        FeatureId::YearBuilt,
        FeatureId::BasementArea,
        FeatureId::HasGarage,
        FeatureId::Proximity,
    ];

    /// Stable key used for element ids and logging.
    pub fn key(&self) -> &'static str {
        match self {
            FeatureId::Area => "area",
            FeatureId::Bedrooms => "bedrooms",
            FeatureId::Bathrooms => "bathrooms",
            FeatureId::YearBuilt => "year_built",
            FeatureId::BasementArea => "square_footage_basement",
            FeatureId::HasGarage => "has_garage",
            FeatureId::Proximity => "proximity",
        }
    }

    pub fn format(&self) -> ValueFormat {
        VALUE_FORMATS
            .iter()
            .find(|(id, _)| id == self)
            .map(|(_, format)| *format)
            .unwrap_or(ValueFormat::PlainInteger)
    }
}

/// How a feature value is rendered next to its slider and in prompts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueFormat {
    /// Thousands-grouped integer followed by a unit, e.g. `1,800 sq ft`.
    IntegerWithSuffix(&'static str),
    /// `1` renders as `Yes`, anything else as `No`.
    YesNo,
    /// Rounded integer without grouping, e.g. `1990`.
    PlainInteger,
}

impl ValueFormat {
    pub fn render(&self, value: f64) -> String {
        match self {
            ValueFormat::IntegerWithSuffix(suffix) => {
                format!("{} {suffix}", group_thousands(value.round() as i64))
            }
            ValueFormat::YesNo => {
                if value == 1.0 {
                    "Yes".to_string()
                } else {
                    "No".to_string()
                }
            }
            ValueFormat::PlainInteger => format!("{}", value.round() as i64),
        }
    }
}

const VALUE_FORMATS: [(FeatureId, ValueFormat); 7] = [
    (FeatureId::Area, ValueFormat::IntegerWithSuffix("sq ft")),
    (FeatureId::Bedrooms, ValueFormat::IntegerWithSuffix("beds")),
    (FeatureId::Bathrooms, ValueFormat::IntegerWithSuffix("baths")),
    (FeatureId::YearBuilt, ValueFormat::PlainInteger),
    (FeatureId::BasementArea, ValueFormat::IntegerWithSuffix("sq ft")),
    (FeatureId::HasGarage, ValueFormat::YesNo),
    (FeatureId::Proximity, ValueFormat::IntegerWithSuffix("km")),
];

#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub id: FeatureId,
    pub label: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Value at which the feature neither raises nor lowers the price.
    pub base_value: f64,
    /// Currency per unit of deviation from `base_value`.
    pub weight: f64,
}

impl Feature {
    pub fn format_value(&self) -> String {
        self.id.format().render(self.value)
    }

    /// Snaps `candidate` onto the slider grid and keeps it within `[min, max]`.
    pub fn constrain(&self, candidate: f64) -> f64 {
        if !candidate.is_finite() {
            return self.value;
        }
        let snapped = if self.step > 0.0 {
            self.min + ((candidate - self.min) / self.step).round() * self.step
        } else {
            candidate
        };
        snapped.clamp(self.min, self.max)
    }

    /// Position of the current value along the slider track, in percent.
    pub fn fill_percent(&self) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.min) / span * 100.0).clamp(0.0, 100.0)
    }
}

// Illustrative weights, not fitted to any data.
pub const AREA_WEIGHT: f64 = 120.0;
pub const BEDROOM_WEIGHT: f64 = 25_000.0;
pub const BATHROOM_WEIGHT: f64 = 20_000.0;
pub const YEAR_BUILT_WEIGHT: f64 = 500.0;
pub const BASEMENT_AREA_WEIGHT: f64 = 60.0;
pub const GARAGE_WEIGHT: f64 = 15_000.0;
pub const PROXIMITY_WEIGHT: f64 = -3_000.0;

/// Initial slider configuration shown when the app starts.
pub fn default_features() -> Vec<Feature> {
    vec![
        Feature {
            id: FeatureId::Area,
            label: "Area",
            value: 1800.0,
            min: 500.0,
            max: 5000.0,
            step: 50.0,
            base_value: 2000.0,
            weight: AREA_WEIGHT,
        },
        Feature {
            id: FeatureId::Bedrooms,
            label: "Bedrooms",
            value: 3.0,
            min: 1.0,
            max: 8.0,
            step: 1.0,
            base_value: 3.0,
            weight: BEDROOM_WEIGHT,
        },
        Feature {
            id: FeatureId::Bathrooms,
            label: "Bathrooms",
            value: 2.0,
            min: 1.0,
            max: 6.0,
            step: 1.0,
            base_value: 2.0,
            weight: BATHROOM_WEIGHT,
        },
        Feature {
            id: FeatureId::YearBuilt,
            label: "Year Built",
            value: 1990.0,
            min: 1900.0,
            max: 2023.0,
            step: 1.0,
            base_value: 1980.0,
            weight: YEAR_BUILT_WEIGHT,
        },
        Feature {
            id: FeatureId::BasementArea,
            label: "Basement Area",
            value: 0.0,
            min: 0.0,
            max: 2000.0,
            step: 50.0,
            base_value: 500.0,
            weight: BASEMENT_AREA_WEIGHT,
        },
        Feature {
            id: FeatureId::HasGarage,
            label: "Has Garage",
            value: 1.0,
            min: 0.0,
            max: 1.0,
            step: 1.0,
            // Baseline house has no garage.
            base_value: 0.0,
            weight: GARAGE_WEIGHT,
        },
        Feature {
            id: FeatureId::Proximity,
            label: "Proximity to City Center",
            value: 10.0,
            min: 1.0,
            max: 50.0,
            step: 1.0,
            base_value: 20.0,
            weight: PROXIMITY_WEIGHT,
        },
    ]
}
