//! Published model figures shown next to the charts.
//!
//! These are fixed reference numbers, not computed from the datasets.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FeatureImportance {
    pub feature:    &'static str,
    pub importance: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChurnModelMetrics {
    pub accuracy:           f64,
    pub precision:          f64,
    pub recall:             f64,
    pub f1_score:           f64,
    pub auc:                f64,
    pub feature_importance: &'static [FeatureImportance],
}

#[derive(Debug, Clone, Serialize)]
pub struct SalesModelMetrics {
    pub mape:              f64,
    pub rmse:              f64,
    pub mae:               f64,
    pub r2:                f64,
    pub forecast_accuracy: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AbTestResults {
    /// p-value.
    pub statistical_significance: f64,
    /// 95% CI for the difference in conversion rate.
    pub confidence_interval:      (f64, f64),
    pub effect:                   &'static str,
    pub recommendation:           &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelPerformance {
    pub churn_model:     ChurnModelMetrics,
    pub sales_model:     SalesModelMetrics,
    pub ab_test_results: AbTestResults,
}

const CHURN_FEATURE_IMPORTANCE: [FeatureImportance; 6] = [
    FeatureImportance { feature: "Monthly Charges", importance: 0.28 },
    FeatureImportance { feature: "Tenure", importance: 0.24 },
    FeatureImportance { feature: "Contract Type", importance: 0.18 },
    FeatureImportance { feature: "Total Charges", importance: 0.15 },
    FeatureImportance { feature: "Payment Method", importance: 0.09 },
    FeatureImportance { feature: "Internet Service", importance: 0.06 },
];

pub const MODEL_PERFORMANCE: ModelPerformance = ModelPerformance {
    churn_model: ChurnModelMetrics {
        accuracy: 0.89,
        precision: 0.85,
        recall: 0.82,
        f1_score: 0.83,
        auc: 0.91,
        feature_importance: &CHURN_FEATURE_IMPORTANCE,
    },
    sales_model: SalesModelMetrics {
        mape: 8.5,
        rmse: 2341.0,
        mae: 1876.0,
        r2: 0.94,
        forecast_accuracy: 0.915,
    },
    ab_test_results: AbTestResults {
        statistical_significance: 0.032,
        confidence_interval: (0.018, 0.056),
        effect: "Treatment shows 25% improvement in conversion rate",
        recommendation: "Deploy treatment to all users",
    },
};
