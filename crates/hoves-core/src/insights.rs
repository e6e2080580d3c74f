//! Rule-based commentary on a finished metrics record.

use crate::types::{AnalysisMetrics, Insights};

const MAX_FUN_FACTS: usize = 3;
const MAX_RECOMMENDATIONS: usize = 3;
const MAX_ROUTINE_STEPS: usize = 4;

/// Derive fun facts, recommendations and a routine guide from `metrics`.
///
/// Rules read full-precision values, placeholders included. Each list always
/// has at least one entry.
pub fn generate_insights(metrics: &AnalysisMetrics) -> Insights {
    let symmetry = metrics.basic.symmetry.value();
    let skin_clarity = metrics.basic.skin_clarity.value();
    let overall = metrics.basic.overall_score.value();
    let tilt = metrics.expert.canthal_tilt.value();
    let mandibular_angle = metrics.expert.mandibular_angle.value();
    let midface_ratio = metrics.expert.midface_ratio.value();
    let beard_density = metrics.grooming.beard_density.value();

    let mut fun_facts = Vec::new();
    let mut recommendations = Vec::new();
    let mut routine = Vec::new();

    if symmetry > 95.0 {
        fun_facts.push("Your facial symmetry is in the top 1% of the population, often linked to high genetic health.");
    } else if symmetry > 90.0 {
        fun_facts.push("High facial symmetry like yours is historically associated with perceived trustworthiness.");
    }

    if tilt > 5.0 {
        fun_facts.push("Your 'positive canthal tilt' is a trait shared by many high-fashion models, giving an alert, youthful appearance.");
    } else if tilt < 0.0 {
        fun_facts.push("A neutral/negative canthal tilt often creates a 'relaxed' or 'dreamy' look, similar to many classic Hollywood actors.");
    }

    if overall > 7.5 {
        fun_facts.push("Your facial proportions align significantly with the 'Golden Ratio' used by Renaissance artists.");
    }

    if skin_clarity < 85 {
        recommendations.push("Prioritize niacinamide or Vitamin C serums to improve skin texture and metric scores.");
    }
    if mandibular_angle > 130.0 {
        recommendations.push("Consider masseter exercises or 'mewing' techniques to sharpen jawline definition.");
    }
    if beard_density > 30 && beard_density < 70 {
        recommendations.push("A shorter, well-groomed 'stubble' look would emphasize your jawline better than a full beard.");
    }
    if midface_ratio > 1.05 {
        recommendations.push("Hairstyles with more volume on the sides can balance a slightly longer midface ratio.");
    }

    routine.push("MORNING: Apply SPF 50+ daily to preserve skin clarity metrics.");
    if skin_clarity < 80 {
        routine.push("EVENING: Double cleanse followed by a gentle retinoid to boost clarity score.");
    } else {
        routine.push("EVENING: Hydrating mask once a week to maintain your high clarity index.");
    }
    if mandibular_angle > 125.0 {
        routine.push("EXERCISE: 5 minutes of facial yoga targeting the lower third to maintain mandibular definition.");
    }

    if fun_facts.is_empty() {
        fun_facts.push("Your facial structure follows unique biometric patterns not commonly seen in standard datasets.");
    }
    if recommendations.is_empty() {
        recommendations.push("Focus on consistent sleep (7-9h) to maintain current aesthetic metrics.");
    }

    Insights {
        fun_facts: collect(fun_facts, MAX_FUN_FACTS),
        recommendations: collect(recommendations, MAX_RECOMMENDATIONS),
        routine_guide: collect(routine, MAX_ROUTINE_STEPS),
    }
}

fn collect(entries: Vec<&str>, limit: usize) -> Vec<String> {
    entries.into_iter().take(limit).map(str::to_owned).collect()
}
