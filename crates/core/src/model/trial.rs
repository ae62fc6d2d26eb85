use thiserror::Error;

use crate::model::AgeGroup;

/// Which bucket a sortable item was dropped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortSide {
    Left,
    Right,
}

/// One draggable thing in a sorting game, tagged with the two attributes
/// the sorting rules care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortItem {
    label: String,
    emoji: String,
    warm: bool,
    round: bool,
}

impl SortItem {
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        emoji: impl Into<String>,
        warm: bool,
        round: bool,
    ) -> Self {
        Self {
            label: label.into(),
            emoji: emoji.into(),
            warm,
            round,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    #[must_use]
    pub fn is_warm(&self) -> bool {
        self.warm
    }

    #[must_use]
    pub fn is_round(&self) -> bool {
        self.round
    }
}

/// Side-classification predicate for sorting trials.
///
/// Each trial carries its own rule, so a mid-session rule flip is just
/// later trials carrying the flipped variant; grading always uses the
/// current trial's rule, never a previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortRule {
    /// Warm colors left, cool colors right.
    WarmLeft,
    /// Flipped: warm colors right, cool colors left.
    WarmRight,
    /// Round shapes left, spiky shapes right.
    RoundLeft,
    /// Flipped: round shapes right, spiky shapes left.
    RoundRight,
}

impl SortRule {
    /// The side this rule expects the item on.
    #[must_use]
    pub fn expected_side(&self, item: &SortItem) -> SortSide {
        let to_left = match self {
            SortRule::WarmLeft => item.is_warm(),
            SortRule::WarmRight => !item.is_warm(),
            SortRule::RoundLeft => item.is_round(),
            SortRule::RoundRight => !item.is_round(),
        };
        if to_left { SortSide::Left } else { SortSide::Right }
    }

    /// Label for the left bucket.
    #[must_use]
    pub fn left_label(&self) -> &'static str {
        match self {
            SortRule::WarmLeft => "Warm",
            SortRule::WarmRight => "Cool",
            SortRule::RoundLeft => "Round",
            SortRule::RoundRight => "Spiky",
        }
    }

    /// Label for the right bucket.
    #[must_use]
    pub fn right_label(&self) -> &'static str {
        match self {
            SortRule::WarmLeft => "Cool",
            SortRule::WarmRight => "Warm",
            SortRule::RoundLeft => "Spiky",
            SortRule::RoundRight => "Round",
        }
    }

    /// Kid-facing statement of the current rule.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SortRule::WarmLeft => "Warm colors go LEFT, cool colors go RIGHT",
            SortRule::WarmRight => "New rule! Warm colors go RIGHT, cool colors go LEFT",
            SortRule::RoundLeft => "Round shapes go LEFT, spiky shapes go RIGHT",
            SortRule::RoundRight => "New rule! Round shapes go RIGHT, spiky shapes go LEFT",
        }
    }
}

/// A boolean gate with its operand values baked in.
///
/// The expected output is resolved once at trial construction; nothing
/// evaluates gates live during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateSpec {
    And { a: bool, b: bool },
    Or { a: bool, b: bool },
    Not { input: bool },
}

impl GateSpec {
    /// The gate's output for its baked-in inputs.
    #[must_use]
    pub fn output(&self) -> bool {
        match self {
            GateSpec::And { a, b } => *a && *b,
            GateSpec::Or { a, b } => *a || *b,
            GateSpec::Not { input } => !input,
        }
    }

    /// Gate name as shown on the gate card.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GateSpec::And { .. } => "AND",
            GateSpec::Or { .. } => "OR",
            GateSpec::Not { .. } => "NOT",
        }
    }

    /// The operand values, second one absent for single-input gates.
    #[must_use]
    pub fn inputs(&self) -> (bool, Option<bool>) {
        match self {
            GateSpec::And { a, b } | GateSpec::Or { a, b } => (*a, Some(*b)),
            GateSpec::Not { input } => (*input, None),
        }
    }
}

/// A repeating-sequence puzzle: `length` cells cycling through `unit`,
/// with the cell at `missing` hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSpec {
    unit: Vec<String>,
    length: usize,
    missing: usize,
}

impl PatternSpec {
    /// Create a validated pattern.
    ///
    /// # Errors
    ///
    /// Returns `TrialError::EmptyPatternUnit` if the repeating unit has no
    /// symbols, or `TrialError::MissingSlotOutOfRange` if the hidden slot
    /// is outside the sequence.
    pub fn new(
        unit: Vec<impl Into<String>>,
        length: usize,
        missing: usize,
    ) -> Result<Self, TrialError> {
        let unit: Vec<String> = unit.into_iter().map(Into::into).collect();
        if unit.is_empty() {
            return Err(TrialError::EmptyPatternUnit);
        }
        if missing >= length {
            return Err(TrialError::MissingSlotOutOfRange { missing, length });
        }
        Ok(Self {
            unit,
            length,
            missing,
        })
    }

    /// The symbol that belongs in the hidden slot.
    #[must_use]
    pub fn expected(&self) -> &str {
        &self.unit[self.missing % self.unit.len()]
    }

    /// The rendered sequence, `None` at the hidden slot.
    #[must_use]
    pub fn cells(&self) -> Vec<Option<&str>> {
        (0..self.length)
            .map(|i| {
                if i == self.missing {
                    None
                } else {
                    Some(self.unit[i % self.unit.len()].as_str())
                }
            })
            .collect()
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn missing(&self) -> usize {
        self.missing
    }
}

/// How a trial decides whether an answer is correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerRule {
    /// Index match against a single precomputed option.
    Choice { correct: usize },
    /// Match against a precomputed boolean (gate output, syllogism verdict).
    Truth { expected: bool },
    /// Side match under the trial's own sorting rule.
    Sort { rule: SortRule },
}

/// What the player did on a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAnswer {
    Choice(usize),
    Truth(bool),
    Side(SortSide),
}

/// An immutable question definition: prompt content, options, the answer
/// rule, an optional hint for misses, and the minimum tier that sees it.
///
/// Built once per game table at session start and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial {
    prompt: String,
    code: Option<String>,
    item: Option<SortItem>,
    gate: Option<GateSpec>,
    pattern: Option<PatternSpec>,
    options: Vec<String>,
    rule: AnswerRule,
    hint: Option<String>,
    min_tier: AgeGroup,
}

impl Trial {
    /// A multiple-choice trial; `correct` indexes into `options`.
    ///
    /// # Errors
    ///
    /// Returns `TrialError::EmptyPrompt`, `TrialError::TooFewOptions`, or
    /// `TrialError::CorrectOutOfBounds` on malformed input.
    pub fn choice(
        prompt: impl Into<String>,
        options: Vec<impl Into<String>>,
        correct: usize,
    ) -> Result<Self, TrialError> {
        let prompt = non_empty_prompt(prompt)?;
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.len() < 2 {
            return Err(TrialError::TooFewOptions { got: options.len() });
        }
        if correct >= options.len() {
            return Err(TrialError::CorrectOutOfBounds {
                index: correct,
                len: options.len(),
            });
        }
        Ok(Self {
            prompt,
            code: None,
            item: None,
            gate: None,
            pattern: None,
            options,
            rule: AnswerRule::Choice { correct },
            hint: None,
            min_tier: AgeGroup::Young,
        })
    }

    /// A true/false trial with a precomputed expected verdict.
    ///
    /// # Errors
    ///
    /// Returns `TrialError::EmptyPrompt` if the prompt is blank.
    pub fn truth(prompt: impl Into<String>, expected: bool) -> Result<Self, TrialError> {
        let prompt = non_empty_prompt(prompt)?;
        Ok(Self {
            prompt,
            code: None,
            item: None,
            gate: None,
            pattern: None,
            options: Vec::new(),
            rule: AnswerRule::Truth { expected },
            hint: None,
            min_tier: AgeGroup::Young,
        })
    }

    /// A boolean-gate trial. The expected verdict is the gate's output,
    /// resolved here and stored on the rule.
    ///
    /// # Errors
    ///
    /// Returns `TrialError::EmptyPrompt` if the prompt is blank.
    pub fn gate(prompt: impl Into<String>, gate: GateSpec) -> Result<Self, TrialError> {
        let mut trial = Self::truth(prompt, gate.output())?;
        trial.gate = Some(gate);
        Ok(trial)
    }

    /// A sorting trial: one item judged against this trial's own rule.
    ///
    /// # Errors
    ///
    /// Returns `TrialError::EmptyPrompt` if the prompt is blank.
    pub fn sort(
        prompt: impl Into<String>,
        item: SortItem,
        rule: SortRule,
    ) -> Result<Self, TrialError> {
        let prompt = non_empty_prompt(prompt)?;
        Ok(Self {
            prompt,
            code: None,
            item: Some(item),
            gate: None,
            pattern: None,
            options: Vec::new(),
            rule: AnswerRule::Sort { rule },
            hint: None,
            min_tier: AgeGroup::Young,
        })
    }

    /// A pattern-completion trial. The correct option is the pattern's
    /// expected symbol; `options` must contain it exactly once.
    ///
    /// # Errors
    ///
    /// Returns `TrialError::EmptyPrompt`, `TrialError::TooFewOptions`, or
    /// `TrialError::AmbiguousPatternOptions` when the expected symbol does
    /// not appear exactly once.
    pub fn pattern(
        prompt: impl Into<String>,
        pattern: PatternSpec,
        options: Vec<impl Into<String>>,
    ) -> Result<Self, TrialError> {
        let prompt = non_empty_prompt(prompt)?;
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.len() < 2 {
            return Err(TrialError::TooFewOptions { got: options.len() });
        }
        let expected = pattern.expected();
        let found = options.iter().filter(|option| *option == expected).count();
        if found != 1 {
            return Err(TrialError::AmbiguousPatternOptions { found });
        }
        let correct = options
            .iter()
            .position(|option| option == expected)
            .unwrap_or_default();
        Ok(Self {
            prompt,
            code: None,
            item: None,
            gate: None,
            pattern: Some(pattern),
            options,
            rule: AnswerRule::Choice { correct },
            hint: None,
            min_tier: AgeGroup::Young,
        })
    }

    /// Attach a code snippet shown above the options.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach hint text revealed after a miss.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Restrict the trial to `tier` and above.
    #[must_use]
    pub fn with_min_tier(mut self, tier: AgeGroup) -> Self {
        self.min_tier = tier;
        self
    }

    /// Judge an answer under this trial's rule. An answer of the wrong
    /// kind is simply incorrect; grading never fails.
    #[must_use]
    pub fn grade(&self, answer: PlayerAnswer) -> bool {
        match (&self.rule, answer) {
            (AnswerRule::Choice { correct }, PlayerAnswer::Choice(picked)) => picked == *correct,
            (AnswerRule::Truth { expected }, PlayerAnswer::Truth(value)) => value == *expected,
            (AnswerRule::Sort { rule }, PlayerAnswer::Side(side)) => self
                .item
                .as_ref()
                .is_some_and(|item| rule.expected_side(item) == side),
            _ => false,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    #[must_use]
    pub fn item(&self) -> Option<&SortItem> {
        self.item.as_ref()
    }

    #[must_use]
    pub fn gate_spec(&self) -> Option<&GateSpec> {
        self.gate.as_ref()
    }

    #[must_use]
    pub fn pattern_spec(&self) -> Option<&PatternSpec> {
        self.pattern.as_ref()
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn rule(&self) -> &AnswerRule {
        &self.rule
    }

    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    #[must_use]
    pub fn min_tier(&self) -> AgeGroup {
        self.min_tier
    }
}

fn non_empty_prompt(prompt: impl Into<String>) -> Result<String, TrialError> {
    let prompt = prompt.into();
    if prompt.trim().is_empty() {
        return Err(TrialError::EmptyPrompt);
    }
    Ok(prompt)
}

/// Validation errors for trial construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrialError {
    #[error("trial prompt must not be empty")]
    EmptyPrompt,
    #[error("a choice trial needs at least two options, got {got}")]
    TooFewOptions { got: usize },
    #[error("correct option index {index} is out of bounds for {len} options")]
    CorrectOutOfBounds { index: usize, len: usize },
    #[error("pattern unit must not be empty")]
    EmptyPatternUnit,
    #[error("missing slot {missing} is outside the sequence length {length}")]
    MissingSlotOutOfRange { missing: usize, length: usize },
    #[error("pattern options must contain the expected symbol exactly once, found {found}")]
    AmbiguousPatternOptions { found: usize },
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn color(label: &str, warm: bool) -> SortItem {
        SortItem::new(label, "🎨", warm, false)
    }

    #[test]
    fn test_choice_trial_grades_by_index() {
        let trial = Trial::choice("What is x at the end?", vec!["3", "5", "8"], 1).unwrap();
        assert!(trial.grade(PlayerAnswer::Choice(1)));
        assert!(!trial.grade(PlayerAnswer::Choice(0)));
        assert!(!trial.grade(PlayerAnswer::Choice(99)));
    }

    #[test]
    fn test_choice_trial_rejects_bad_correct_index() {
        let result = Trial::choice("Pick one", vec!["a", "b"], 2);
        assert_eq!(
            result.unwrap_err(),
            TrialError::CorrectOutOfBounds { index: 2, len: 2 }
        );
    }

    #[test]
    fn test_choice_trial_needs_two_options() {
        let result = Trial::choice("Pick one", vec!["only"], 0);
        assert_eq!(result.unwrap_err(), TrialError::TooFewOptions { got: 1 });
    }

    #[test]
    fn test_empty_prompt_is_rejected() {
        let result = Trial::truth("   ", true);
        assert_eq!(result.unwrap_err(), TrialError::EmptyPrompt);
    }

    #[test]
    fn test_gate_output_is_precomputed_into_the_rule() {
        let trial = Trial::gate("Does the bulb light up?", GateSpec::And { a: true, b: true })
            .unwrap();
        assert_eq!(trial.rule(), &AnswerRule::Truth { expected: true });
        assert!(trial.grade(PlayerAnswer::Truth(true)));
        assert!(!trial.grade(PlayerAnswer::Truth(false)));
    }

    #[test]
    fn test_gate_outputs() {
        assert!(GateSpec::And { a: true, b: true }.output());
        assert!(!GateSpec::And { a: true, b: false }.output());
        assert!(GateSpec::Or { a: false, b: true }.output());
        assert!(!GateSpec::Or { a: false, b: false }.output());
        assert!(GateSpec::Not { input: false }.output());
        assert!(!GateSpec::Not { input: true }.output());
    }

    #[test]
    fn test_sort_trial_judged_under_its_own_rule() {
        let red = color("Red", true);
        let before = Trial::sort("Sort it!", red.clone(), SortRule::WarmLeft).unwrap();
        let after = Trial::sort("Sort it!", red, SortRule::WarmRight).unwrap();
        // Same item, flipped rule: the correct side flips with it.
        assert!(before.grade(PlayerAnswer::Side(SortSide::Left)));
        assert!(!before.grade(PlayerAnswer::Side(SortSide::Right)));
        assert!(after.grade(PlayerAnswer::Side(SortSide::Right)));
        assert!(!after.grade(PlayerAnswer::Side(SortSide::Left)));
    }

    #[test]
    fn test_round_rules_classify_by_shape() {
        let ball = SortItem::new("Ball", "⚽", false, true);
        let star = SortItem::new("Star", "⭐", false, false);
        assert_eq!(SortRule::RoundLeft.expected_side(&ball), SortSide::Left);
        assert_eq!(SortRule::RoundLeft.expected_side(&star), SortSide::Right);
        assert_eq!(SortRule::RoundRight.expected_side(&ball), SortSide::Right);
    }

    #[test]
    fn test_pattern_expected_wraps_around_the_unit() {
        // Length 5, unit of 2, hidden slot 3: expected is unit[3 % 2].
        let spec = PatternSpec::new(vec!["🔴", "🔵"], 5, 3).unwrap();
        assert_eq!(spec.expected(), "🔵");
        let cells = spec.cells();
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[3], None);
        assert_eq!(cells[0], Some("🔴"));
        assert_eq!(cells[4], Some("🔴"));
    }

    #[test]
    fn test_pattern_trial_locates_the_expected_option() {
        let spec = PatternSpec::new(vec!["🔴", "🔵"], 5, 3).unwrap();
        let trial =
            Trial::pattern("Which one fits?", spec, vec!["🟡", "🔵", "🟢"]).unwrap();
        assert_eq!(trial.rule(), &AnswerRule::Choice { correct: 1 });
        assert!(trial.grade(PlayerAnswer::Choice(1)));
    }

    #[test]
    fn test_pattern_trial_rejects_missing_or_duplicate_expected() {
        let spec = PatternSpec::new(vec!["🔴", "🔵"], 5, 3).unwrap();
        let absent = Trial::pattern("Which one fits?", spec.clone(), vec!["🟡", "🟢"]);
        assert_eq!(
            absent.unwrap_err(),
            TrialError::AmbiguousPatternOptions { found: 0 }
        );
        let doubled = Trial::pattern("Which one fits?", spec, vec!["🔵", "🔵", "🟢"]);
        assert_eq!(
            doubled.unwrap_err(),
            TrialError::AmbiguousPatternOptions { found: 2 }
        );
    }

    #[test]
    fn test_pattern_spec_validation() {
        let empty: Vec<&str> = Vec::new();
        assert_eq!(
            PatternSpec::new(empty, 5, 0).unwrap_err(),
            TrialError::EmptyPatternUnit
        );
        assert_eq!(
            PatternSpec::new(vec!["🔴"], 4, 4).unwrap_err(),
            TrialError::MissingSlotOutOfRange {
                missing: 4,
                length: 4
            }
        );
    }

    #[test]
    fn test_mismatched_answer_kind_is_incorrect() {
        let trial = Trial::truth("True or false?", true).unwrap();
        assert!(!trial.grade(PlayerAnswer::Choice(0)));
        assert!(!trial.grade(PlayerAnswer::Side(SortSide::Left)));
    }

    #[test]
    fn test_builders_attach_extras() {
        let trial = Trial::choice("How many loops?", vec!["2", "3"], 1)
            .unwrap()
            .with_code("for i in 1..4 { jump() }")
            .with_hint("Count 1, 2, 3.")
            .with_min_tier(AgeGroup::Middle);
        assert_eq!(trial.code(), Some("for i in 1..4 { jump() }"));
        assert_eq!(trial.hint(), Some("Count 1, 2, 3."));
        assert_eq!(trial.min_tier(), AgeGroup::Middle);
    }
}
