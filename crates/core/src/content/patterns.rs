use crate::model::{AgeGroup, PatternSpec, Trial, TrialError};

/// Pattern Parade: repeating emoji sequences with one hidden cell.
///
/// Unit and sequence lengths grow with the tier. Options are laid out
/// deterministically (the expected symbol lands at `missing` modulo the
/// option count) so a table rebuild shows the same board.
pub(super) fn trials() -> Result<Vec<Trial>, TrialError> {
    Ok(vec![
        pattern_trial(vec!["🔴", "🔵"], 5, 3, &["🟡", "🟢"], AgeGroup::Young)?,
        pattern_trial(vec!["⭐", "🌙"], 5, 2, &["☀️", "☁️"], AgeGroup::Young)?,
        pattern_trial(vec!["🐱", "🐶"], 6, 4, &["🐭", "🐰"], AgeGroup::Young)?,
        pattern_trial(vec!["🍎", "🍌"], 5, 1, &["🍇", "🍓"], AgeGroup::Young)?,
        pattern_trial(vec!["🔴", "🔵", "🟢"], 7, 5, &["🟡", "🟣"], AgeGroup::Middle)?,
        pattern_trial(vec!["🐸", "🐤", "🐷"], 7, 4, &["🐮", "🐵"], AgeGroup::Middle)?,
        pattern_trial(vec!["⬛", "⬜", "🔺"], 9, 7, &["🔻", "⭕", "✖️"], AgeGroup::Older)?,
        pattern_trial(vec!["🍓", "🍇", "🍊", "🍋"], 8, 6, &["🍉", "🥝", "🍒"], AgeGroup::Older)?,
    ])
}

fn pattern_trial(
    unit: Vec<&str>,
    length: usize,
    missing: usize,
    distractors: &[&str],
    tier: AgeGroup,
) -> Result<Trial, TrialError> {
    let spec = PatternSpec::new(unit, length, missing)?;
    let expected = spec.expected().to_string();
    let mut options: Vec<String> = distractors.iter().map(ToString::to_string).collect();
    let slot = missing % (options.len() + 1);
    options.insert(slot, expected);
    Trial::pattern("Which piece finishes the pattern?", spec, options).map(|trial| {
        trial
            .with_hint("Say the pattern out loud and keep going.")
            .with_min_tier(tier)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_deterministic() {
        let first = trials().unwrap();
        let second = trials().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_distractors_never_contain_the_expected_symbol() {
        for trial in trials().unwrap() {
            let spec = trial.pattern_spec().unwrap();
            let hits = trial
                .options()
                .iter()
                .filter(|option| option.as_str() == spec.expected())
                .count();
            assert_eq!(hits, 1, "expected symbol must appear exactly once");
        }
    }
}
