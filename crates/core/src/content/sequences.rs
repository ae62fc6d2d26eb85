use crate::model::{AgeGroup, Trial, TrialError};

/// Sequence Safari: put everyday and story steps in their right order.
pub(super) fn trials() -> Result<Vec<Trial>, TrialError> {
    Ok(vec![
        Trial::choice(
            "Making toast: put the bread in, then ???, then eat it. What is the middle step?",
            vec!["Toast the bread", "Wash the plate", "Go to bed"],
            0,
        )?
        .with_hint("You cannot eat toast before it is toasted."),
        Trial::choice(
            "Morning steps: wake up, brush teeth, then what?",
            vec!["Go back to sleep", "Eat breakfast", "Brush teeth again"],
            1,
        )?,
        Trial::choice(
            "Planting a flower: dig a hole, then ???, then water it.",
            vec!["Drop in the seed", "Pick the flower", "Eat lunch"],
            0,
        )?
        .with_hint("The seed goes in before the water."),
        Trial::choice(
            "The robot walks: left foot, right foot, left foot, then?",
            vec!["Left foot", "Right foot", "Jump"],
            1,
        )?
        .with_hint("The feet take turns."),
        Trial::choice(
            "A sandwich goes bread, ???, bread. What is the middle layer?",
            vec!["Cheese", "Bread", "Plate"],
            0,
        )?
        .with_min_tier(AgeGroup::Middle),
        Trial::choice(
            "A tree grows: seed, sprout, ???, tree.",
            vec!["Sapling", "Leaf pile", "Acorn"],
            0,
        )?
        .with_hint("A small young tree comes before the big one.")
        .with_min_tier(AgeGroup::Middle),
        Trial::choice(
            "A butterfly grows: egg, caterpillar, ???, butterfly.",
            vec!["Chrysalis", "Tadpole", "Worm"],
            0,
        )?
        .with_min_tier(AgeGroup::Older),
        Trial::choice(
            "The recipe repeats: stir, stir, pour, stir, stir, pour. What comes after the \
             second pour?",
            vec!["Stir", "Pour", "Stop"],
            0,
        )?
        .with_hint("The steps repeat in the same order.")
        .with_min_tier(AgeGroup::Older),
    ])
}
