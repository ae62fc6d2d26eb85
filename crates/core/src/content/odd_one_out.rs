use crate::model::{AgeGroup, Trial, TrialError};

/// Odd One Out: three belong together, one does not.
pub(super) fn trials() -> Result<Vec<Trial>, TrialError> {
    Ok(vec![
        Trial::choice(
            "Which one is not a fruit?",
            vec!["🍎 Apple", "🍌 Banana", "🚗 Car", "🍇 Grapes"],
            2,
        )?,
        Trial::choice(
            "Which one cannot fly?",
            vec!["🦅 Eagle", "🐝 Bee", "🐟 Fish", "🦋 Butterfly"],
            2,
        )?
        .with_hint("Think about where each one moves."),
        Trial::choice(
            "Which one is not a shape?",
            vec!["⚪ Circle", "🔺 Triangle", "🐶 Puppy", "⬛ Square"],
            2,
        )?,
        Trial::choice(
            "Which number is the odd one out?",
            vec!["2", "4", "7", "8"],
            2,
        )?
        .with_hint("All the others are even."),
        Trial::choice(
            "Which one is not for drawing?",
            vec!["Pencil", "Crayon", "Spoon", "Marker"],
            2,
        )?
        .with_min_tier(AgeGroup::Middle),
        Trial::choice(
            "Which word is not an animal?",
            vec!["Tiger", "Table", "Rabbit", "Horse"],
            1,
        )?
        .with_min_tier(AgeGroup::Middle),
        Trial::choice(
            "Which number does not belong?",
            vec!["3", "9", "27", "16"],
            3,
        )?
        .with_hint("Three of them come from multiplying by 3.")
        .with_min_tier(AgeGroup::Older),
        Trial::choice(
            "Which shape is the odd one out?",
            vec!["Triangle", "Square", "Circle", "Pentagon"],
            2,
        )?
        .with_hint("Count the corners.")
        .with_min_tier(AgeGroup::Older),
    ])
}
