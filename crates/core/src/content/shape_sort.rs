use crate::model::{AgeGroup, SortItem, SortRule, Trial, TrialError};

/// Shape Shed: round things one way, spiky things the other.
///
/// Same interleaved layout as the color sorter so every tier slice gets
/// the mid-session rule flip.
pub(super) fn trials() -> Result<Vec<Trial>, TrialError> {
    Ok(vec![
        Trial::sort(
            "Sort the ball!",
            SortItem::new("Ball", "⚽", false, true),
            SortRule::RoundLeft,
        )?
        .with_hint("A ball rolls because it is round."),
        Trial::sort(
            "Sort the star!",
            SortItem::new("Star", "⭐", true, false),
            SortRule::RoundLeft,
        )?
        .with_hint("Count the pointy tips."),
        Trial::sort(
            "Sort the cookie!",
            SortItem::new("Cookie", "🍪", true, true),
            SortRule::RoundLeft,
        )?
        .with_min_tier(AgeGroup::Middle),
        Trial::sort(
            "Sort the cactus!",
            SortItem::new("Cactus", "🌵", false, false),
            SortRule::RoundLeft,
        )?
        .with_min_tier(AgeGroup::Older),
        Trial::sort(
            "Sort the moon!",
            SortItem::new("Full Moon", "🌕", true, true),
            SortRule::RoundRight,
        )?
        .with_hint("Careful, the buckets swapped sides!"),
        Trial::sort(
            "Sort the crown!",
            SortItem::new("Crown", "👑", true, false),
            SortRule::RoundRight,
        )?
        .with_hint("A crown has pointy spikes on top."),
        Trial::sort(
            "Sort the mountain!",
            SortItem::new("Mountain", "⛰️", false, false),
            SortRule::RoundRight,
        )?
        .with_min_tier(AgeGroup::Middle),
        Trial::sort(
            "Sort the clock!",
            SortItem::new("Clock", "⏰", false, true),
            SortRule::RoundRight,
        )?
        .with_min_tier(AgeGroup::Older),
    ])
}
