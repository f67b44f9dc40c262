//! End-to-end run over the full worked example: parse the two-section text
//! format, validate every sequence, correct the failures, and check both
//! totals.

use pretty_assertions::assert_eq;
use precedence::{parse_input, solve, Disposition};

const SAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

#[test]
fn sample_totals() {
    let input = parse_input(SAMPLE).unwrap();
    assert_eq!(input.rules.len(), 21);
    assert_eq!(input.sequences.len(), 6);

    let report = solve(input.rules, input.sequences).unwrap();
    assert_eq!(report.already_ordered_total, 143);
    assert_eq!(report.corrected_total, 123);
    assert_eq!(report.failures, 0);
}

#[test]
fn sample_dispositions() {
    let input = parse_input(SAMPLE).unwrap();
    let report = solve(input.rules, input.sequences).unwrap();

    let middles: Vec<_> = report
        .outcomes
        .iter()
        .map(|o| match &o.disposition {
            Disposition::AlreadyOrdered { middle } => (false, *middle),
            Disposition::Corrected { middle, .. } => (true, *middle),
            Disposition::Failed { error } => panic!("unexpected failure: {error}"),
        })
        .collect();
    assert_eq!(
        middles,
        vec![
            (false, 61),
            (false, 53),
            (false, 29),
            (true, 47),
            (true, 29),
            (true, 47),
        ]
    );

    match &report.outcomes[3].disposition {
        Disposition::Corrected { reordered, .. } => {
            assert_eq!(reordered, &vec![97, 75, 47, 61, 53]);
        }
        other => panic!("expected correction, got {other:?}"),
    }
}

#[test]
fn report_serializes_to_json() {
    let input = parse_input(SAMPLE).unwrap();
    let report = solve(input.rules, input.sequences).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();
    assert_eq!(json["already_ordered_total"], 143);
    assert_eq!(json["corrected_total"], 123);
    assert_eq!(json["outcomes"][3]["status"], "corrected");
    assert_eq!(json["outcomes"][0]["status"], "already_ordered");
}
