use crate::model::{AgeGroup, Trial, TrialError};

/// Bug Hunt: one line of each little program is wrong. Find it.
pub(super) fn trials() -> Result<Vec<Trial>, TrialError> {
    Ok(vec![
        Trial::choice(
            "Which line is wrong?",
            vec!["Line 1", "Line 2", "Line 3"],
            2,
        )?
        .with_code("1: box = 2\n2: box = box + 1\n3: say \"box is 4\"")
        .with_hint("2 + 1 is 3, not 4."),
        Trial::choice(
            "Which line is wrong?",
            vec!["Line 1", "Line 2", "Line 3"],
            2,
        )?
        .with_code("1: repeat 3:\n2:   clap()\n3: say \"clapped 5 times\"")
        .with_hint("Count the claps the loop really makes."),
        Trial::choice(
            "The robot should jump 2 times, but it jumps 4. Which line is extra?",
            vec!["Line 1", "Line 2", "Line 3"],
            0,
        )?
        .with_code("1: jump 2 times\n2: repeat 2:\n3:   jump()")
        .with_hint("The loop already does all the jumping."),
        Trial::choice(
            "Which line is wrong?",
            vec!["Line 1", "Line 2", "Line 3"],
            2,
        )?
        .with_code("1: apples = 4\n2: eat one apple\n3: say \"4 apples left\"")
        .with_hint("One apple is gone."),
        Trial::choice(
            "count stays at 0! Which line is broken?",
            vec!["Line 1", "Line 2", "Line 3", "Line 4"],
            2,
        )?
        .with_code("1: count = 0\n2: repeat 3:\n3:   count + 1\n4: say count")
        .with_hint("Adding without saving changes nothing.")
        .with_min_tier(AgeGroup::Middle),
        Trial::choice(
            "The plan is backwards! Which line is wrong?",
            vec!["Line 1", "Line 2", "Line 3", "Line 4"],
            1,
        )?
        .with_code("1: if sunny:\n2:   take umbrella\n3: else:\n4:   wear sunhat")
        .with_min_tier(AgeGroup::Middle),
        Trial::choice(
            "Which line is wrong?",
            vec!["Line 1", "Line 2", "Line 3", "Line 4"],
            3,
        )?
        .with_code("1: total = 0\n2: for i in 1..4:\n3:   total = total + i\n4: say \"total is 7\"")
        .with_hint("1 + 2 + 3 makes 6.")
        .with_min_tier(AgeGroup::Older),
        Trial::choice(
            "This loop never stops! Which line keeps it running?",
            vec!["Line 1", "Line 2", "Line 3"],
            2,
        )?
        .with_code("1: x = 10\n2: while x > 0:\n3:   x = x + 1")
        .with_hint("x needs to go down to reach 0.")
        .with_min_tier(AgeGroup::Older),
    ])
}
