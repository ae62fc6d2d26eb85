use crate::model::{AgeGroup, SortItem, SortRule, Trial, TrialError};

/// Color Corral: drop each card in the warm or cool bucket.
///
/// The rule flips halfway through every tier's slice, so the table
/// interleaves tier tags: the warm-left trials come first, the flipped
/// ones after.
pub(super) fn trials() -> Result<Vec<Trial>, TrialError> {
    Ok(vec![
        Trial::sort(
            "Sort the sun!",
            SortItem::new("Sun", "☀️", true, true),
            SortRule::WarmLeft,
        )?
        .with_hint("Sunshine feels warm."),
        Trial::sort(
            "Sort the ice cube!",
            SortItem::new("Ice Cube", "🧊", false, false),
            SortRule::WarmLeft,
        )?
        .with_hint("Ice is as cool as it gets."),
        Trial::sort(
            "Sort the carrot!",
            SortItem::new("Carrot", "🥕", true, false),
            SortRule::WarmLeft,
        )?
        .with_min_tier(AgeGroup::Middle),
        Trial::sort(
            "Sort the grapes!",
            SortItem::new("Grapes", "🍇", false, true),
            SortRule::WarmLeft,
        )?
        .with_min_tier(AgeGroup::Older),
        Trial::sort(
            "Sort the apple!",
            SortItem::new("Apple", "🍎", true, true),
            SortRule::WarmRight,
        )?
        .with_hint("Careful, the buckets swapped sides!"),
        Trial::sort(
            "Sort the wave!",
            SortItem::new("Wave", "🌊", false, false),
            SortRule::WarmRight,
        )?
        .with_hint("Sea water is a cool color."),
        Trial::sort(
            "Sort the frog!",
            SortItem::new("Frog", "🐸", false, true),
            SortRule::WarmRight,
        )?
        .with_min_tier(AgeGroup::Middle),
        Trial::sort(
            "Sort the flame!",
            SortItem::new("Flame", "🔥", true, false),
            SortRule::WarmRight,
        )?
        .with_min_tier(AgeGroup::Older),
    ])
}
