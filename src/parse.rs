use crate::error::{Error, Result};

/// Parsed input: the rule pairs, then the sequences to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub rules: Vec<(u32, u32)>,
    pub sequences: Vec<Vec<u32>>,
}

/// Parses the two-section text format: `a|b` rule lines up to the first
/// blank line, comma-separated sequence lines after it. Later blank lines
/// are skipped. Errors carry the offending 1-based line number.
pub fn parse_input(text: &str) -> Result<Input> {
    let mut rules = Vec::new();
    let mut sequences = Vec::new();
    let mut in_sequences = false;

    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            in_sequences = true;
            continue;
        }
        if in_sequences {
            sequences.push(parse_sequence(line, n + 1)?);
        } else {
            rules.push(parse_rule(line, n + 1)?);
        }
    }

    Ok(Input { rules, sequences })
}

fn parse_rule(line: &str, n: usize) -> Result<(u32, u32)> {
    let Some((before, after)) = line.split_once('|') else {
        return Err(Error::Parse {
            line: n,
            msg: format!("expected a rule like `47|53`, got `{line}`"),
        });
    };
    Ok((parse_item(before, n)?, parse_item(after, n)?))
}

fn parse_sequence(line: &str, n: usize) -> Result<Vec<u32>> {
    line.split(',').map(|item| parse_item(item, n)).collect()
}

fn parse_item(raw: &str, n: usize) -> Result<u32> {
    raw.trim().parse().map_err(|_| Error::Parse {
        line: n,
        msg: format!("`{raw}` is not an item identifier"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_rules_and_sequences_at_blank_line() {
        let input = parse_input("47|53\n97|13\n\n75,47,61\n61,13,29\n").unwrap();
        assert_eq!(input.rules, vec![(47, 53), (97, 13)]);
        assert_eq!(input.sequences, vec![vec![75, 47, 61], vec![61, 13, 29]]);
    }

    #[test]
    fn later_blank_lines_are_skipped() {
        let input = parse_input("1|2\n\n1,2\n\n2,1\n").unwrap();
        assert_eq!(input.sequences, vec![vec![1, 2], vec![2, 1]]);
    }

    #[test]
    fn bad_rule_line_reports_line_number() {
        let err = parse_input("47|53\n9753\n\n1,2\n").unwrap_err();
        assert_eq!(
            err,
            Error::Parse {
                line: 2,
                msg: "expected a rule like `47|53`, got `9753`".into()
            }
        );
    }

    #[test]
    fn bad_sequence_item_reports_line_number() {
        let err = parse_input("1|2\n\n1,x,2\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));
    }
}
