pub mod contribution_chart;
pub mod explanation_card;
pub mod feature_control;
pub mod kpi_card;
pub mod location_control;
pub mod toast;
pub mod tooltip;
