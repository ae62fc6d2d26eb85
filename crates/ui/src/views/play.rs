use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use quest_core::model::{AnswerRule, GameId, GateSpec, PatternSpec, PlayerAnswer, SortSide, Trial};
use quest_core::session::{Phase, TrialOutcome};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::decor::StarRow;
use crate::views::state::{ViewError, ViewState, use_tier_guard, view_state_from_resource};
use crate::vm::{CountdownGuard, PlayIntent, PlayOutcome, PlayVm, format_ticks, start_play};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn PlayView(game: GameId) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let allowed = use_tier_guard();
    let trial_loop = ctx.trial_loop();

    let error = use_signal(|| None::<ViewError>);
    let vm = use_signal(|| None::<PlayVm>);
    let mut countdown = use_signal(CountdownGuard::default);

    let trial_loop_for_resource = trial_loop.clone();
    let resource = use_resource(move || {
        let trial_loop = trial_loop_for_resource.clone();
        let mut vm = vm;
        let mut error = error;
        async move {
            let started = start_play(&trial_loop, game)?;
            vm.set(Some(started));
            error.set(None);
            Ok::<_, ViewError>(())
        }
    });

    let dispatch_intent = {
        let trial_loop = trial_loop.clone();
        use_callback(move |intent: PlayIntent| {
            let mut vm = vm;
            let mut error = error;

            match intent {
                PlayIntent::Begin => {
                    if let Some(vm) = vm.write().as_mut() {
                        vm.begin();
                    }
                }
                PlayIntent::Restart => {
                    if let Some(vm) = vm.write().as_mut() {
                        vm.restart();
                    }
                    error.set(None);
                }
                PlayIntent::Tick | PlayIntent::Select(_) | PlayIntent::Advance => {
                    let trial_loop = trial_loop.clone();
                    spawn(async move {
                        let taken = { vm.write().take() };
                        let Some(mut vm_value) = taken else {
                            return;
                        };

                        let result = match intent {
                            PlayIntent::Select(answer) => {
                                vm_value.select(&trial_loop, answer).await
                            }
                            PlayIntent::Tick => vm_value.tick(&trial_loop).await,
                            PlayIntent::Advance => vm_value.advance(&trial_loop).await,
                            PlayIntent::Begin | PlayIntent::Restart => Ok(PlayOutcome::Ignored),
                        };

                        // Put the session back before reporting so the screen
                        // stays playable after a failed save.
                        {
                            let mut guard = vm.write();
                            *guard = Some(vm_value);
                        }

                        match result {
                            Ok(_) => error.set(None),
                            Err(err) => error.set(Some(err)),
                        }
                    });
                }
            }
        })
    };

    let on_tick = use_callback(move |()| dispatch_intent.call(PlayIntent::Tick));
    use_effect(move || {
        let key = vm.read().as_ref().and_then(PlayVm::timer_key);
        countdown.write().sync(key, on_tick);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PlayTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let state = view_state_from_resource(&resource);

    if !allowed {
        return rsx! {
            div { class: "page",
                p { "Taking you to the welcome screen..." }
            }
        };
    }

    let vm_guard = vm.read();
    let play = vm_guard.as_ref();
    let phase = play.map(PlayVm::phase);

    rsx! {
        div { class: "page play-page",
            header { class: "play-header",
                h2 { class: "play-title", "{game.emoji()} {game.title()}" }
                button {
                    class: "btn btn-ghost play-quit",
                    id: "play-quit",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Home {});
                    },
                    "Back to Games"
                }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    if err == ViewError::NeedsAgeGroup {
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let _ = navigator.push(Route::Welcome {});
                            },
                            "Pick an Age Group"
                        }
                    } else {
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let mut resource = resource;
                                resource.restart();
                            },
                            "Retry"
                        }
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(err) = *error.read() {
                        p { class: "play-error", "{err.message()}" }
                    }
                    match phase {
                        Some(Phase::Intro) => rsx! {
                            IntroCard {
                                game,
                                total: play.map_or(0, PlayVm::total_trials),
                                seconds: play.map_or(0, PlayVm::ticks_per_trial),
                                on_begin: move |()| dispatch_intent.call(PlayIntent::Begin),
                            }
                        },
                        Some(Phase::Presenting) | Some(Phase::Locked(_)) => rsx! {
                            if let Some(play) = play {
                                {play_board(play, dispatch_intent)}
                            }
                        },
                        Some(Phase::Completed) => rsx! {
                            if let Some(play) = play {
                                CompletionCard {
                                    score: play.score(),
                                    total: play.total_trials() as u32,
                                    stars: play.report().map_or_else(|| play.score().max(1), |report| report.stars()),
                                    leveled_up: play.report().is_some_and(|report| report.leveled_up()),
                                    on_restart: move |()| dispatch_intent.call(PlayIntent::Restart),
                                }
                            }
                        },
                        None => rsx! {
                            p { "Loading..." }
                        },
                    }
                },
            }
        }
    }
}

fn play_board(play: &PlayVm, dispatch: Callback<PlayIntent>) -> Element {
    let Some(trial) = play.current_trial() else {
        return rsx! {
            p { "Loading..." }
        };
    };
    let locked = matches!(play.phase(), Phase::Locked(_));
    let trial_number = play.trial_index() + 1;
    let total = play.total_trials();
    let score = play.score();

    rsx! {
        div { class: "play-board",
            div { class: "play-meta",
                span { class: "chip", "Question {trial_number} / {total}" }
                span { class: "chip chip--stars", "Score {score}" }
            }
            {countdown_bar(play)}
            div { class: "trial-card",
                p { class: "trial-prompt", "{trial.prompt()}" }
                if let Some(code) = trial.code() {
                    pre { class: "trial-code",
                        code { "{code}" }
                    }
                }
                if let Some(gate) = trial.gate_spec() {
                    {gate_figure(gate)}
                }
                if let Some(item) = trial.item() {
                    div { class: "sort-item",
                        span { class: "sort-item-emoji", "{item.emoji()}" }
                        span { class: "sort-item-label", "{item.label()}" }
                    }
                }
                if let Some(pattern) = trial.pattern_spec() {
                    {pattern_cells(pattern)}
                }
            }
            {answer_panel(trial, play.selected(), locked, dispatch)}
            if locked {
                {locked_panel(play, trial, dispatch)}
            }
        }
    }
}

fn countdown_bar(play: &PlayVm) -> Element {
    let ticks_total = play.ticks_per_trial().max(1);
    let ticks_left = play.ticks_left().min(ticks_total);
    let percent = ticks_left * 100 / ticks_total;
    let label = format_ticks(ticks_left);
    let fill_class = if ticks_left * 4 <= ticks_total {
        "countdown-fill countdown-fill--low"
    } else {
        "countdown-fill"
    };
    rsx! {
        div { class: "countdown-bar", role: "timer", aria_label: "{label} left",
            div { class: "{fill_class}", style: "width: {percent}%;" }
            span { class: "countdown-label", "{label}" }
        }
    }
}

fn gate_figure(gate: &GateSpec) -> Element {
    let (first, second) = gate.inputs();
    rsx! {
        div { class: "gate-figure",
            div { class: "gate-inputs",
                span { class: "{bool_chip_class(first)}", "{bool_label(first)}" }
                if let Some(second) = second {
                    span { class: "{bool_chip_class(second)}", "{bool_label(second)}" }
                }
            }
            span { class: "gate-name", "{gate.name()}" }
            span { class: "gate-output", "?" }
        }
    }
}

fn bool_label(value: bool) -> &'static str {
    if value { "ON" } else { "OFF" }
}

fn bool_chip_class(value: bool) -> &'static str {
    if value {
        "gate-chip gate-chip--on"
    } else {
        "gate-chip gate-chip--off"
    }
}

fn pattern_cells(spec: &PatternSpec) -> Element {
    let cells = spec.cells();
    rsx! {
        div { class: "pattern-row",
            for cell in cells {
                match cell {
                    Some(glyph) => rsx! {
                        span { class: "pattern-cell", "{glyph}" }
                    },
                    None => rsx! {
                        span { class: "pattern-cell pattern-cell--missing", "?" }
                    },
                }
            }
        }
    }
}

fn answer_panel(
    trial: &Trial,
    selected: Option<PlayerAnswer>,
    locked: bool,
    dispatch: Callback<PlayIntent>,
) -> Element {
    match *trial.rule() {
        AnswerRule::Choice { correct } => {
            let buttons = trial.options().iter().enumerate().map(|(idx, option)| {
                let picked = matches!(selected, Some(PlayerAnswer::Choice(i)) if i == idx);
                rsx! {
                    OptionButton {
                        label: option.clone(),
                        answer: PlayerAnswer::Choice(idx),
                        state_class: option_state(locked, idx == correct, picked),
                        locked,
                        on_intent: dispatch,
                    }
                }
            });
            rsx! {
                div { class: "option-grid", {buttons} }
            }
        }
        AnswerRule::Truth { expected } => {
            let on_gate = trial.gate_spec().is_some();
            let yes_label = if on_gate { "ON" } else { "True" };
            let no_label = if on_gate { "OFF" } else { "False" };
            let yes_picked = matches!(selected, Some(PlayerAnswer::Truth(true)));
            let no_picked = matches!(selected, Some(PlayerAnswer::Truth(false)));
            rsx! {
                div { class: "option-grid option-grid--pair",
                    OptionButton {
                        label: yes_label.to_string(),
                        answer: PlayerAnswer::Truth(true),
                        state_class: option_state(locked, expected, yes_picked),
                        locked,
                        on_intent: dispatch,
                    }
                    OptionButton {
                        label: no_label.to_string(),
                        answer: PlayerAnswer::Truth(false),
                        state_class: option_state(locked, !expected, no_picked),
                        locked,
                        on_intent: dispatch,
                    }
                }
            }
        }
        AnswerRule::Sort { rule } => {
            let expected = trial.item().map(|item| rule.expected_side(item));
            let left_picked = matches!(selected, Some(PlayerAnswer::Side(SortSide::Left)));
            let right_picked = matches!(selected, Some(PlayerAnswer::Side(SortSide::Right)));
            rsx! {
                p { class: "sort-rule", "{rule.description()}" }
                div { class: "option-grid option-grid--pair",
                    OptionButton {
                        label: format!("⬅️ {}", rule.left_label()),
                        answer: PlayerAnswer::Side(SortSide::Left),
                        state_class: option_state(locked, expected == Some(SortSide::Left), left_picked),
                        locked,
                        on_intent: dispatch,
                    }
                    OptionButton {
                        label: format!("{} ➡️", rule.right_label()),
                        answer: PlayerAnswer::Side(SortSide::Right),
                        state_class: option_state(locked, expected == Some(SortSide::Right), right_picked),
                        locked,
                        on_intent: dispatch,
                    }
                }
            }
        }
    }
}

fn option_state(locked: bool, is_correct: bool, picked: bool) -> &'static str {
    if !locked {
        if picked {
            "option-btn option-btn--picked"
        } else {
            "option-btn"
        }
    } else if is_correct {
        "option-btn option-btn--correct"
    } else if picked {
        "option-btn option-btn--wrong"
    } else {
        "option-btn option-btn--faded"
    }
}

fn locked_panel(play: &PlayVm, trial: &Trial, dispatch: Callback<PlayIntent>) -> Element {
    let outcome = play.outcome();
    let (banner_class, banner) = match outcome {
        Some(TrialOutcome::Correct) => ("feedback feedback--correct", "🎉 Correct!"),
        Some(TrialOutcome::Incorrect) => ("feedback feedback--wrong", "Not quite!"),
        Some(TrialOutcome::TimedOut) => ("feedback feedback--wrong", "⏰ Time's up!"),
        None => ("feedback", ""),
    };
    let missed = matches!(
        outcome,
        Some(TrialOutcome::Incorrect | TrialOutcome::TimedOut)
    );
    let advance_label = if play.is_last_trial() { "Finish" } else { "Next" };

    rsx! {
        div { class: "{banner_class}",
            p { class: "feedback-banner", "{banner}" }
            if missed {
                if let Some(hint) = trial.hint() {
                    p { class: "feedback-hint", "💡 {hint}" }
                }
            }
            button {
                class: "btn btn-primary play-advance",
                id: "play-advance",
                r#type: "button",
                onclick: move |_| dispatch.call(PlayIntent::Advance),
                "{advance_label}"
            }
        }
    }
}

#[component]
fn IntroCard(game: GameId, total: usize, seconds: u32, on_begin: EventHandler<()>) -> Element {
    rsx! {
        div { class: "intro-card",
            span { class: "intro-emoji", "{game.emoji()}" }
            h3 { class: "intro-title", "{game.title()}" }
            p { class: "intro-skill", "{game.skill()}" }
            p { class: "intro-rules", "{total} questions · about {seconds} seconds each" }
            p { class: "intro-rules", "Answer before the timer runs out!" }
            button {
                class: "btn btn-primary intro-start",
                id: "play-start",
                r#type: "button",
                onclick: move |_| on_begin.call(()),
                "Start!"
            }
        }
    }
}

#[component]
fn OptionButton(
    label: String,
    answer: PlayerAnswer,
    state_class: &'static str,
    locked: bool,
    on_intent: EventHandler<PlayIntent>,
) -> Element {
    rsx! {
        button {
            class: "{state_class}",
            r#type: "button",
            disabled: locked,
            onclick: move |_| on_intent.call(PlayIntent::Select(answer)),
            "{label}"
        }
    }
}

#[component]
fn CompletionCard(
    score: u32,
    total: u32,
    stars: u32,
    leveled_up: bool,
    on_restart: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "completion-card",
            ConfettiBurst {}
            h3 { class: "completion-title", "You did it!" }
            p { class: "completion-score", "{score} / {total} correct" }
            StarRow { earned: stars, total }
            if leveled_up {
                p { class: "completion-levelup", "⬆️ Level up!" }
            }
            div { class: "completion-actions",
                button {
                    class: "btn btn-primary",
                    id: "play-restart",
                    r#type: "button",
                    onclick: move |_| on_restart.call(()),
                    "Play Again"
                }
                Link { class: "btn btn-secondary", to: Route::Home {}, "Back to Games" }
            }
        }
    }
}

#[component]
fn ConfettiBurst() -> Element {
    let pieces = (0..16).map(|piece| {
        let left = piece * 6 + 3;
        let delay = piece * 80;
        rsx! {
            span { class: "confetti-piece", style: "left: {left}%; animation-delay: {delay}ms;" }
        }
    });
    rsx! {
        div { class: "confetti", aria_hidden: "true", {pieces} }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PlayTestHandles {
    dispatch: Rc<RefCell<Option<Callback<PlayIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<PlayVm>>>>>,
}

#[cfg(test)]
impl PlayTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<PlayIntent>, vm: Signal<Option<PlayVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<PlayIntent> {
        (*self.dispatch.borrow()).expect("play dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<PlayVm>> {
        (*self.vm.borrow()).expect("play vm registered")
    }
}
