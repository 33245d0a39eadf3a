//! Result presentation
//!
//! [`ResultRenderer`] turns a [`PredictionOutcome`] into a
//! [`RenderedReport`]: one line per expert, the final prediction and, when a
//! ground truth is known, a correct/incorrect verdict. Pure and
//! deterministic; all randomness lives in the resolver.

use crate::outcome::{GroundTruth, PredictionOutcome};
use exo_dataset::{is_expert_key, Disposition};
use serde::Serialize;
use std::fmt;

/// Notice shown above a synthesized prediction
pub const MANUAL_NOTICE: &str = "Prediction based on manual input.";

/// Default decision threshold on `final_score` (strictly greater is a planet)
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Whether the prediction matched the ground truth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Prediction equals ground truth
    Correct,
    /// Prediction differs from ground truth
    Incorrect,
}

impl Verdict {
    /// Style tag for the report
    #[inline]
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
        }
    }

    /// Headline shown under the report
    #[inline]
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::Correct => "Result: Correct",
            Self::Incorrect => "Result: Incorrect",
        }
    }
}

/// One expert's contribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpertLine {
    /// Display name, e.g. `expert 01`
    pub name: String,
    /// Probability in percent with two decimals, e.g. `90.00`
    pub percent: String,
}

impl fmt::Display for ExpertLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}% chance of being a planet", self.name, self.percent)
    }
}

/// Ground truth and how the prediction fared against it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Label the prediction was compared with
    pub ground_truth: String,
    /// Outcome of the comparison
    pub verdict: Verdict,
}

/// Render-ready prediction report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedReport {
    /// Manual-entry notice, if the result was synthesized
    pub notice: Option<String>,
    /// Expert lines in result order
    pub experts: Vec<ExpertLine>,
    /// Thresholded final score
    pub final_prediction: Disposition,
    /// Final score with four decimals
    pub final_score: String,
    /// Comparison with ground truth, absent for manual entry
    pub comparison: Option<Comparison>,
}

impl RenderedReport {
    /// Verdict, absent for manual entry
    #[inline]
    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        self.comparison.as_ref().map(|c| c.verdict)
    }

    /// Whether the prediction matched, absent for manual entry
    #[inline]
    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        self.verdict().map(|v| v == Verdict::Correct)
    }

    /// Style tag of the whole report, absent for manual entry
    #[inline]
    #[must_use]
    pub fn tag(&self) -> Option<&'static str> {
        self.verdict().map(Verdict::tag)
    }

    /// `Final Model Prediction: PLANET (Score: 0.8200)`
    #[must_use]
    pub fn final_line(&self) -> String {
        format!(
            "Final Model Prediction: {} (Score: {})",
            self.final_prediction, self.final_score
        )
    }

    /// Every line in display order
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.experts.len() + 4);
        lines.extend(self.notice.clone());
        lines.extend(self.experts.iter().map(ToString::to_string));
        if let Some(comparison) = &self.comparison {
            lines.push(format!("Ground Truth: {}", comparison.ground_truth));
        }
        lines.push(self.final_line());
        if let Some(verdict) = self.verdict() {
            lines.push(verdict.headline().to_string());
        }
        lines
    }
}

impl fmt::Display for RenderedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// Display name of an expert key: `expert_01_proba` → `expert 01`
#[must_use]
pub fn expert_display_name(key: &str) -> String {
    key.replacen("_proba", "", 1).replace('_', " ")
}

/// `value` with `digits` fraction digits, exact ties rounded away from zero
///
/// `format!` rounds exact binary ties to even (`0.125` → `0.12`); report
/// figures round them up like the page's `toFixed` (`0.125` → `0.13`).
#[must_use]
pub fn to_fixed(value: f64, digits: usize) -> String {
    let rounded = format!("{value:.digits$}");
    // full decimal expansion of any finite f64 fits in 1100 fraction digits
    let exact = format!("{value:.1100}");
    let Some(point) = exact.find('.') else {
        return rounded;
    };
    let (kept, tail) = exact.split_at(point + 1 + digits);
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return rounded;
    }
    increment_magnitude(kept.strip_suffix('.').unwrap_or(kept))
}

/// Add one unit in the last place of a decimal string, ignoring sign
fn increment_magnitude(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    for c in chars.iter_mut().rev() {
        match c.to_digit(10) {
            Some(9) => *c = '0',
            Some(d) => {
                *c = char::from_digit(d + 1, 10).unwrap_or('0');
                return chars.into_iter().collect();
            }
            None => {}
        }
    }
    let sign = usize::from(chars.first() == Some(&'-'));
    chars.insert(sign, '1');
    chars.into_iter().collect()
}

/// Builds [`RenderedReport`]s
#[derive(Debug, Clone, Copy)]
pub struct ResultRenderer {
    threshold: f64,
}

impl ResultRenderer {
    /// Renderer with the default 0.5 threshold
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }

    /// Renderer with a custom decision threshold
    #[inline]
    #[must_use]
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Decision threshold
    #[inline]
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Render an outcome
    #[must_use]
    pub fn render(&self, outcome: &PredictionOutcome) -> RenderedReport {
        let result = &outcome.result;

        let experts = result
            .experts
            .iter()
            .filter(|(key, _)| is_expert_key(key))
            .map(|(key, p)| ExpertLine {
                name: expert_display_name(key),
                percent: to_fixed(p * 100.0, 2),
            })
            .collect();

        let final_prediction = Disposition::from_score(result.final_score, self.threshold);

        let (notice, comparison) = match &outcome.ground_truth {
            GroundTruth::ManualEntry => (Some(MANUAL_NOTICE.to_string()), None),
            GroundTruth::Label(label) => {
                let verdict = if final_prediction.as_str() == label {
                    Verdict::Correct
                } else {
                    Verdict::Incorrect
                };
                (
                    None,
                    Some(Comparison {
                        ground_truth: label.clone(),
                        verdict,
                    }),
                )
            }
        };

        RenderedReport {
            notice,
            experts,
            final_prediction,
            final_score: to_fixed(result.final_score, 4),
            comparison,
        }
    }
}

impl Default for ResultRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exo_dataset::PredictionResult;
    use pretty_assertions::assert_eq;

    fn fixture(score: f64) -> PredictionResult {
        PredictionResult::new(score)
            .with_expert("expert_01_proba", 0.9)
            .with_expert("expert_02_proba", 0.123_456)
    }

    #[test]
    fn expert_names() {
        assert_eq!(expert_display_name("expert_01_proba"), "expert 01");
        assert_eq!(expert_display_name("expert_lgbm_v2_proba"), "expert lgbm v2");
        assert_eq!(expert_display_name("expert_proba_x_proba"), "expert x proba");
    }

    #[test]
    fn lookup_report_correct() {
        let report = ResultRenderer::new().render(&PredictionOutcome::lookup(fixture(0.82), "PLANET"));

        assert_eq!(report.final_prediction, Disposition::Planet);
        assert_eq!(report.final_score, "0.8200");
        assert_eq!(report.is_correct(), Some(true));
        assert_eq!(report.tag(), Some("correct"));
        assert_eq!(report.notice, None);
        assert_eq!(
            report.lines(),
            vec![
                "expert 01: 90.00% chance of being a planet".to_string(),
                "expert 02: 12.35% chance of being a planet".to_string(),
                "Ground Truth: PLANET".to_string(),
                "Final Model Prediction: PLANET (Score: 0.8200)".to_string(),
                "Result: Correct".to_string(),
            ]
        );
    }

    #[test]
    fn lookup_report_incorrect() {
        let report = ResultRenderer::new()
            .render(&PredictionOutcome::lookup(fixture(0.82), "FALSE_POSITIVE"));
        assert_eq!(report.verdict(), Some(Verdict::Incorrect));
        assert_eq!(report.tag(), Some("incorrect"));
        assert!(report.to_string().ends_with("Result: Incorrect"));
    }

    #[test]
    fn threshold_is_exclusive() {
        let report = ResultRenderer::new().render(&PredictionOutcome::lookup(fixture(0.5), "PLANET"));
        assert_eq!(report.final_prediction, Disposition::FalsePositive);
        assert_eq!(report.is_correct(), Some(false));
    }

    #[test]
    fn manual_report_has_notice_and_no_verdict() {
        let report = ResultRenderer::new().render(&PredictionOutcome::manual(fixture(0.1)));
        assert_eq!(report.notice.as_deref(), Some(MANUAL_NOTICE));
        assert_eq!(report.verdict(), None);
        assert_eq!(report.tag(), None);
        let lines = report.lines();
        assert_eq!(lines.first().map(String::as_str), Some(MANUAL_NOTICE));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Final Model Prediction: FALSE_POSITIVE (Score: 0.1000)")
        );
        assert!(!lines.iter().any(|l| l.starts_with("Ground Truth")));
    }

    #[test]
    fn empty_ground_truth_is_compared() {
        let report = ResultRenderer::new().render(&PredictionOutcome::lookup(fixture(0.2), ""));
        assert_eq!(report.is_correct(), Some(false));
    }

    #[test]
    fn to_fixed_rounds_exact_ties_up() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.03125, 4), "0.0313");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(9.5, 0), "10");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
    }

    #[test]
    fn to_fixed_matches_format_off_ties() {
        assert_eq!(to_fixed(0.995, 2), "0.99");
        assert_eq!(to_fixed(0.999_99, 2), "1.00");
        assert_eq!(to_fixed(12.3456, 2), "12.35");
        assert_eq!(to_fixed(0.0, 4), "0.0000");
        assert_eq!(to_fixed(0.82, 4), "0.8200");
    }

    #[test]
    fn report_rounds_ties_like_to_fixed() {
        let result = PredictionResult::new(0.03125).with_expert("expert_01_proba", 0.00125);
        let report = ResultRenderer::new().render(&PredictionOutcome::lookup(result, "PLANET"));

        assert_eq!(report.final_score, "0.0313");
        assert_eq!(report.experts[0].percent, "0.13");
    }

    #[test]
    fn render_is_deterministic() {
        let outcome = PredictionOutcome::lookup(fixture(0.7), "PLANET");
        let renderer = ResultRenderer::with_threshold(0.6);
        assert_eq!(renderer.render(&outcome), renderer.render(&outcome));
        assert_eq!(renderer.render(&outcome).final_prediction, Disposition::Planet);
    }
}
