use super::contribution::PriceSnapshot;
use super::features::{default_features, Feature, FeatureId};
use super::location::{base_price_for_location, sanitize_location_code, DEFAULT_LOCATION_CODE};

/// Lifecycle of the AI explanation shown under the chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ExplanationState {
    #[default]
    Idle,
    Loading,
    Ready(String),
    /// The service failed; holds the message shown instead.
    Unavailable(String),
    /// No credential configured; the feature is switched off.
    Misconfigured(String),
}

impl ExplanationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ExplanationState::Loading)
    }
}

/// Everything the user can change, owned by the UI thread.
#[derive(Clone, Debug)]
pub struct AppState {
    features: Vec<Feature>,
    location_code: String,
    base_price: i64,
    pub explanation: ExplanationState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            features: default_features(),
            location_code: DEFAULT_LOCATION_CODE.to_string(),
            base_price: base_price_for_location(DEFAULT_LOCATION_CODE),
            explanation: ExplanationState::Idle,
        }
    }
}

impl AppState {
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn location_code(&self) -> &str {
        &self.location_code
    }

    pub fn base_price(&self) -> i64 {
        self.base_price
    }

    /// Sets a feature value, constrained to the feature's slider range.
    pub fn set_feature_value(&mut self, id: FeatureId, value: f64) {
        if let Some(feature) = self.features.iter_mut().find(|f| f.id == id) {
            feature.value = feature.constrain(value);
        }
    }

    /// Stores the sanitised location code and recomputes the base price.
    pub fn set_location_code(&mut self, raw: &str) {
        self.location_code = sanitize_location_code(raw);
        self.base_price = base_price_for_location(&self.location_code);
    }

    pub fn snapshot(&self) -> PriceSnapshot {
        PriceSnapshot {
            features: self.features.clone(),
            base_price: self.base_price,
        }
    }

    /// Moves into the loading state. Returns `false` if a request is already pending.
    pub fn begin_explanation(&mut self) -> bool {
        if self.explanation.is_loading() {
            return false;
        }
        self.explanation = ExplanationState::Loading;
        true
    }
}
