use crate::model::{AgeGroup, Trial, TrialError};

/// Loop Lab: count how often a repeated block really runs.
pub(super) fn trials() -> Result<Vec<Trial>, TrialError> {
    Ok(vec![
        Trial::choice("How many claps?", vec!["2", "3", "4"], 1)?
            .with_code("repeat 3:\n  clap()")
            .with_hint("The number after repeat is the count."),
        Trial::choice("How many hops?", vec!["3", "4", "5"], 1)?
            .with_code("repeat 4:\n  hop()"),
        Trial::choice("How many beeps in total?", vec!["2", "3", "4"], 1)?
            .with_code("repeat 2:\n  beep()\nbeep()")
            .with_hint("Two beeps in the loop, one more after it."),
        Trial::choice("How many blinks?", vec!["4", "5", "6"], 1)?
            .with_code("repeat 5:\n  blink()"),
        Trial::choice("How many stomps?", vec!["5", "6", "9"], 1)?
            .with_code("repeat 3:\n  repeat 2:\n    stomp()")
            .with_hint("Every outer turn stomps twice.")
            .with_min_tier(AgeGroup::Middle),
        Trial::choice("How many rings?", vec!["3", "4", "5"], 0)?
            .with_code("for i in 1..4:\n  ring()")
            .with_hint("It rings for 1, 2 and 3, then stops.")
            .with_min_tier(AgeGroup::Middle),
        Trial::choice("What is count at the end?", vec!["6", "8", "10"], 1)?
            .with_code("count = 0\nrepeat 4:\n  count = count + 2")
            .with_hint("Four turns, adding 2 each time.")
            .with_min_tier(AgeGroup::Older),
        Trial::choice("How many taps?", vec!["7", "8", "9"], 1)?
            .with_code("repeat 2:\n  repeat 3:\n    tap()\n  tap()")
            .with_hint("Each outer turn taps 3 + 1 times.")
            .with_min_tier(AgeGroup::Older),
    ])
}
