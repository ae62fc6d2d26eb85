use crate::model::{AgeGroup, Trial, TrialError};

/// Variable Vault: read a tiny program, say what a box holds at the end.
pub(super) fn trials() -> Result<Vec<Trial>, TrialError> {
    Ok(vec![
        Trial::choice("What is in the box?", vec!["3", "5", "8"], 0)?
            .with_code("box = 3")
            .with_hint("The box holds the last number put into it."),
        Trial::choice("What is x now?", vec!["2", "3", "4"], 1)?
            .with_code("x = 2\nx = x + 1")
            .with_hint("Start at 2, then add 1."),
        Trial::choice("How many apples are left?", vec!["3", "5", "7"], 0)?
            .with_code("apples = 5\napples = apples - 2")
            .with_hint("Taking away 2 leaves fewer apples."),
        Trial::choice("What is a now?", vec!["1", "4", "5"], 1)?
            .with_code("a = 1\nb = 4\na = b")
            .with_hint("a copies whatever b holds."),
        Trial::choice("What is x at the end?", vec!["5", "6", "23"], 1)?
            .with_code("x = 2\ny = 3\nx = x * y")
            .with_hint("The * sign means multiply.")
            .with_min_tier(AgeGroup::Middle),
        Trial::choice("What is a at the end?", vec!["6", "7", "10"], 1)?
            .with_code("a = 10\nb = a - 4\na = b + 1")
            .with_hint("Work out b first, then build a again.")
            .with_min_tier(AgeGroup::Middle),
        Trial::choice("What is x at the end?", vec!["2", "3", "4"], 2)?
            .with_code("x = 1\nx = x + x\nx = x + x")
            .with_hint("The number doubles on every line.")
            .with_min_tier(AgeGroup::Older),
        Trial::choice("What is b at the end?", vec!["3", "5", "7"], 1)?
            .with_code("a = 5\nb = 2\na = a - b\nb = a + b")
            .with_hint("Go line by line and keep both boxes up to date.")
            .with_min_tier(AgeGroup::Older),
    ])
}
