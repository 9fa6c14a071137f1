//! Skeleton construction and merging of technique reports
//!
//! The skeleton is the per-argument, per-technique empty structure built from
//! the extraction output; each technique report then fills in only its own
//! column, so merging is commutative across techniques.

use crate::model::{
    AnalyzedArgument, ArgumentManipulations, ArgumentReport, ExtractedArguments, Technique,
    TechniqueReport, UnifiedAnalysis,
};

/// Stable synthetic identifier for the n-th extracted argument (0-indexed
/// position, 1-indexed label). Technique prompts echo this back so the merge
/// does not depend on the model reproducing argument text byte-for-byte.
pub fn argument_id(index: usize) -> String {
    format!("arg-{}", index + 1)
}

/// Build the empty per-argument structure from the extraction output,
/// preserving the extractor's argument order.
pub fn build_skeleton(extraction: &ExtractedArguments) -> UnifiedAnalysis {
    UnifiedAnalysis {
        thesis: extraction.main_hypothesis.statement.clone(),
        arguments: extraction
            .arguments
            .iter()
            .map(|argument| AnalyzedArgument {
                kind: argument.kind,
                statement: argument.statement.clone(),
                connection_to_hypothesis: argument.connection_to_hypothesis.clone(),
                manipulations: ArgumentManipulations::default(),
            })
            .collect(),
        failed_techniques: Vec::new(),
        score: None,
    }
}

/// Fold one technique's report into the skeleton.
///
/// Entries with `contains_manipulation == false` are ignored regardless of
/// their instance lists. Each flagged entry is attached to the first matching
/// argument; entries matching nothing are dropped with a warning.
pub fn merge_report(analysis: &mut UnifiedAnalysis, technique: Technique, report: TechniqueReport) {
    for raw in report.arguments {
        if !raw.contains_manipulation {
            continue;
        }

        match find_argument(&analysis.arguments, &raw) {
            Some(index) => {
                analysis.arguments[index]
                    .manipulations
                    .get_mut(technique)
                    .extend(raw.manipulations);
            }
            None => {
                tracing::warn!(
                    technique = %technique,
                    argument_text = %snippet(&raw.argument_text),
                    "Technique report references an unknown argument, dropping its instances"
                );
            }
        }
    }
}

/// Locate the skeleton argument a raw report entry refers to.
///
/// Precedence: echoed synthetic id, then byte-equal statement, then
/// whitespace-normalized statement. First match wins.
fn find_argument(arguments: &[AnalyzedArgument], raw: &ArgumentReport) -> Option<usize> {
    if let Some(id) = raw.argument_id.as_deref() {
        if let Some(index) = (0..arguments.len()).find(|i| argument_id(*i) == id) {
            return Some(index);
        }
    }

    if let Some(index) = arguments
        .iter()
        .position(|argument| argument.statement == raw.argument_text)
    {
        return Some(index);
    }

    let wanted = normalize_statement(&raw.argument_text);
    arguments
        .iter()
        .position(|argument| normalize_statement(&argument.statement) == wanted)
}

/// Collapse whitespace runs and trim, for drift-tolerant comparison
fn normalize_statement(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn snippet(text: &str) -> String {
    text.chars().take(80).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArgumentKind, ExtractedArgument, MainHypothesis, ManipulationInstance};

    fn extraction(statements: &[&str]) -> ExtractedArguments {
        ExtractedArguments {
            main_hypothesis: MainHypothesis {
                statement: "X".to_string(),
            },
            arguments: statements
                .iter()
                .map(|statement| ExtractedArgument {
                    kind: ArgumentKind::Primary,
                    statement: statement.to_string(),
                    connection_to_hypothesis: "supports X".to_string(),
                })
                .collect(),
        }
    }

    fn instance(text: &str) -> ManipulationInstance {
        ManipulationInstance {
            instance: text.to_string(),
            explanation: "explanation".to_string(),
        }
    }

    fn report(entries: Vec<ArgumentReport>) -> TechniqueReport {
        TechniqueReport {
            main_thesis: "X".to_string(),
            arguments: entries,
        }
    }

    fn entry(
        id: Option<&str>,
        text: &str,
        flagged: bool,
        instances: Vec<ManipulationInstance>,
    ) -> ArgumentReport {
        ArgumentReport {
            argument_id: id.map(str::to_string),
            argument_text: text.to_string(),
            contains_manipulation: flagged,
            manipulations: instances,
        }
    }

    #[test]
    fn test_skeleton_preserves_order_with_empty_columns() {
        let analysis = build_skeleton(&extraction(&["A", "B"]));

        assert_eq!(analysis.thesis, "X");
        assert_eq!(analysis.arguments.len(), 2);
        assert_eq!(analysis.arguments[0].statement, "A");
        assert_eq!(analysis.arguments[1].statement, "B");
        for argument in &analysis.arguments {
            assert_eq!(argument.manipulations.detected_technique_count(), 0);
        }
    }

    #[test]
    fn test_flagged_entry_appends_instances_in_order() {
        let mut analysis = build_skeleton(&extraction(&["A", "B"]));
        merge_report(
            &mut analysis,
            Technique::AdPopulum,
            report(vec![entry(
                None,
                "A",
                true,
                vec![instance("first"), instance("second")],
            )]),
        );

        let instances = &analysis.arguments[0].manipulations.ad_populum;
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].instance, "first");
        assert_eq!(instances[1].instance, "second");
        assert!(analysis.arguments[1].manipulations.ad_populum.is_empty());
    }

    #[test]
    fn test_unflagged_entry_is_ignored_even_with_instances() {
        let mut analysis = build_skeleton(&extraction(&["A"]));
        merge_report(
            &mut analysis,
            Technique::AdPopulum,
            report(vec![entry(None, "A", false, vec![instance("ignored")])]),
        );

        assert!(analysis.arguments[0].manipulations.ad_populum.is_empty());
    }

    #[test]
    fn test_unmatched_argument_text_affects_nothing() {
        let mut analysis = build_skeleton(&extraction(&["A", "B"]));
        merge_report(
            &mut analysis,
            Technique::FalseDilemma,
            report(vec![entry(
                None,
                "a completely different statement",
                true,
                vec![instance("dropped")],
            )]),
        );

        for argument in &analysis.arguments {
            assert_eq!(argument.manipulations.detected_technique_count(), 0);
        }
    }

    #[test]
    fn test_whitespace_drift_falls_back_to_normalized_match() {
        let mut analysis = build_skeleton(&extraction(&["We must act now."]));
        merge_report(
            &mut analysis,
            Technique::FalseDilemma,
            report(vec![entry(
                None,
                "  We must   act now. ",
                true,
                vec![instance("either/or")],
            )]),
        );

        assert_eq!(analysis.arguments[0].manipulations.false_dilemma.len(), 1);
    }

    #[test]
    fn test_echoed_id_wins_over_text_matching() {
        let mut analysis = build_skeleton(&extraction(&["A", "B"]));
        // id points at the second argument even though the text matches the first
        merge_report(
            &mut analysis,
            Technique::AdPopulum,
            report(vec![entry(Some("arg-2"), "A", true, vec![instance("i")])]),
        );

        assert!(analysis.arguments[0].manipulations.ad_populum.is_empty());
        assert_eq!(analysis.arguments[1].manipulations.ad_populum.len(), 1);
    }

    #[test]
    fn test_bogus_id_falls_back_to_text_match() {
        let mut analysis = build_skeleton(&extraction(&["A"]));
        merge_report(
            &mut analysis,
            Technique::AdPopulum,
            report(vec![entry(
                Some("arg-99"),
                "A",
                true,
                vec![instance("i")],
            )]),
        );

        assert_eq!(analysis.arguments[0].manipulations.ad_populum.len(), 1);
    }

    #[test]
    fn test_duplicate_statements_first_match_wins() {
        let mut analysis = build_skeleton(&extraction(&["A", "A"]));
        merge_report(
            &mut analysis,
            Technique::AdPopulum,
            report(vec![entry(None, "A", true, vec![instance("i")])]),
        );

        assert_eq!(analysis.arguments[0].manipulations.ad_populum.len(), 1);
        assert!(analysis.arguments[1].manipulations.ad_populum.is_empty());
    }

    #[test]
    fn test_techniques_write_independent_columns() {
        let mut analysis = build_skeleton(&extraction(&["A"]));
        merge_report(
            &mut analysis,
            Technique::AdPopulum,
            report(vec![entry(None, "A", true, vec![instance("pop")])]),
        );
        merge_report(
            &mut analysis,
            Technique::CherryPickingData,
            report(vec![entry(None, "A", true, vec![instance("cherry")])]),
        );

        let manipulations = &analysis.arguments[0].manipulations;
        assert_eq!(manipulations.ad_populum.len(), 1);
        assert_eq!(manipulations.cherry_picking_data.len(), 1);
        assert_eq!(manipulations.detected_technique_count(), 2);
    }
}
