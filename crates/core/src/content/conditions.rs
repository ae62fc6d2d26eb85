use crate::model::{AgeGroup, Trial, TrialError};

/// If-Then Island: follow a branch and say what the program does.
pub(super) fn trials() -> Result<Vec<Trial>, TrialError> {
    Ok(vec![
        Trial::choice("It is sunny today. What do you wear?", vec!["Umbrella", "Sunhat"], 1)?
            .with_code("if rainy:\n  take umbrella\nelse:\n  wear sunhat")
            .with_hint("Sunny means the 'else' path."),
        Trial::choice("You just ate lunch. What happens?", vec!["Eat an apple", "Play"], 1)?
            .with_code("if hungry:\n  eat an apple\nelse:\n  play")
            .with_hint("After lunch you are not hungry."),
        Trial::choice("The light is red. What do you do?", vec!["Walk", "Wait"], 1)?
            .with_code("if light is green:\n  walk\nelse:\n  wait"),
        Trial::choice("It is cold outside. What happens?", vec!["Wear a coat", "Nothing"], 0)?
            .with_code("if cold:\n  wear a coat"),
        Trial::choice("x is 7. What does the program say?", vec!["BIG", "small"], 0)?
            .with_code("if x > 5:\n  say \"BIG\"\nelse:\n  say \"small\"")
            .with_hint("Is 7 more than 5?")
            .with_min_tier(AgeGroup::Middle),
        Trial::choice("x is 3. What does the program say?", vec!["BIG", "small"], 1)?
            .with_code("if x > 5:\n  say \"BIG\"\nelse:\n  say \"small\"")
            .with_min_tier(AgeGroup::Middle),
        Trial::choice(
            "a is true and b is false. What happens?",
            vec!["Cheer", "Nothing"],
            1,
        )?
        .with_code("if a and b:\n  cheer")
        .with_hint("'and' needs both to be true.")
        .with_min_tier(AgeGroup::Older),
        Trial::choice("What does the program say?", vec!["4", "14", "12"], 1)?
            .with_code("x = 4\nif x > 2:\n  x = x + 10\nsay x")
            .with_hint("The branch runs, so x changes first.")
            .with_min_tier(AgeGroup::Older),
    ])
}
