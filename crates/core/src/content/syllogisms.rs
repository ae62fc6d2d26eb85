use crate::model::{AgeGroup, Trial, TrialError};

/// Truth Train: is the last sentence really true, given the first ones?
pub(super) fn trials() -> Result<Vec<Trial>, TrialError> {
    Ok(vec![
        Trial::truth(
            "All cats have whiskers. Momo is a cat. So Momo has whiskers.",
            true,
        )?
        .with_hint("If it is true for all cats, it is true for Momo."),
        Trial::truth(
            "All fish live in water. Rex is a dog. So Rex lives in water.",
            false,
        )?
        .with_hint("Rex is not a fish, so the fish rule says nothing about him."),
        Trial::truth(
            "Every square has four sides. This shape is a square. So it has four sides.",
            true,
        )?,
        Trial::truth(
            "All birds have wings. A penguin is a bird. So a penguin has wings.",
            true,
        )?
        .with_hint("Penguins cannot fly, but the question is about wings."),
        Trial::truth("Some flowers are red. So this flower must be red.", false)?
            .with_hint("'Some' does not mean 'all'.")
            .with_min_tier(AgeGroup::Middle),
        Trial::truth(
            "No reptiles have fur. A snake is a reptile. So a snake has fur.",
            false,
        )?
        .with_min_tier(AgeGroup::Middle),
        Trial::truth(
            "All robots beep. Nothing that meows is a robot. A cat meows. So the cat is a robot.",
            false,
        )?
        .with_hint("Follow the chain: can something that meows be a robot?")
        .with_min_tier(AgeGroup::Older),
        Trial::truth(
            "If it rains, the street gets wet. The street is wet. So it must have rained.",
            false,
        )?
        .with_hint("A garden hose could wet the street too.")
        .with_min_tier(AgeGroup::Older),
    ])
}
