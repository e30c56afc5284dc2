//! Integration tests for the phase controller

mod common;
use common::*;

use pomodoro_fsm::timing::{IDLE_TIMEOUT_SECS, PREPARE_SECS, WORK_SECS};
use pomodoro_fsm::{Controller, Events, PendingFlag, Phase, State, transition};

#[test]
fn first_tick_leaves_off_without_press() {
    let mut controller = Controller::new();
    controller.step(Events::NONE);
    assert_eq!(controller.phase(), Phase::TimeToWork);
    assert_eq!(controller.elapsed_seconds(), 0);
}

#[test]
fn first_tick_leaves_off_and_drops_press() {
    let button = PendingFlag::new();
    let mut controller = Controller::new();

    press(&mut controller, &button);
    assert_eq!(controller.phase(), Phase::TimeToWork);
    assert!(!button.is_pending());

    // The press was consumed by the cold-start tick, not carried over.
    controller.tick(&button);
    assert_eq!(controller.phase(), Phase::TimeToWork);
}

#[test]
fn tick_always_clears_pending_press() {
    let button = PendingFlag::new();

    for phase in Phase::ALL {
        for pressed in [false, true] {
            let mut controller = controller_in(phase);
            if pressed {
                button.raise();
            }
            controller.tick(&button);
            assert!(!button.is_pending(), "flag left set in {:?}", phase);
        }
    }
}

#[test]
fn button_effects_match_table() {
    let cases = [
        (Phase::Off, Phase::TimeToWork),
        (Phase::TimeToWork, Phase::Work),
        (Phase::Work, Phase::Work),
        (Phase::PrepareBreak, Phase::ShortBreak),
        (Phase::TimeToBreak, Phase::ShortBreak),
        (Phase::ShortBreak, Phase::LongBreak),
        (Phase::LongBreak, Phase::LongBreak),
        (Phase::PrepareWork, Phase::Work),
    ];

    for (from, expected) in cases {
        let next = transition(State::at(from, 3, 10), Events::PRESS);
        assert_eq!(next.phase, expected, "press in {:?}", from);
    }
}

#[test]
fn timeouts_match_table() {
    let cases = [
        (Phase::TimeToWork, 300, Phase::Off),
        (Phase::Work, 1380, Phase::PrepareBreak),
        (Phase::PrepareBreak, 120, Phase::TimeToBreak),
        (Phase::TimeToBreak, 300, Phase::Off),
        (Phase::ShortBreak, 180, Phase::PrepareWork),
        (Phase::LongBreak, 780, Phase::PrepareWork),
        (Phase::PrepareWork, 120, Phase::TimeToWork),
    ];

    for (from, limit, expected) in cases {
        // Last tick of the limit second: the clock rolls over to limit + 1.
        let next = transition(State::at(from, 9, limit), Events::NONE);
        assert_eq!(next.phase, expected, "timeout of {:?}", from);
        assert_eq!(next.elapsed_seconds(), 0);

        // One tick earlier nothing happens.
        let held = transition(State::at(from, 8, limit), Events::NONE);
        assert_eq!(held.phase, from);
        assert_eq!(held.elapsed_seconds(), limit);
    }
}

#[test]
fn ignored_press_keeps_elapsed_time() {
    let next = transition(State::at(Phase::Work, 4, 600), Events::PRESS);
    assert_eq!(next.phase, Phase::Work);
    assert_eq!(next.elapsed_seconds(), 600);
    assert_eq!(next.tick_phase(), 5);
}

#[test]
fn idle_prompt_powers_down_after_301_seconds() {
    let mut controller = controller_in(Phase::TimeToWork);

    run_ticks(&mut controller, ticks(IDLE_TIMEOUT_SECS + 1) - 1);
    assert_eq!(controller.phase(), Phase::TimeToWork);

    run_ticks(&mut controller, 1);
    assert_eq!(controller.phase(), Phase::Off);
    assert_eq!(controller.elapsed_seconds(), 0);
}

#[test]
fn work_lasts_until_second_1381() {
    let mut controller = controller_in(Phase::Work);
    let taken = ticks_until_change(&mut controller, ticks(WORK_SECS));

    assert_eq!(taken, Some(ticks(WORK_SECS - PREPARE_SECS + 1)));
    assert_eq!(controller.phase(), Phase::PrepareBreak);
}

#[test]
fn press_during_prepare_break_skips_to_short_break() {
    let button = PendingFlag::new();

    for second in [0, 1, 60, 119] {
        let mut controller = Controller::from_state(State::at(Phase::PrepareBreak, 2, second));
        press(&mut controller, &button);
        assert_eq!(controller.phase(), Phase::ShortBreak);
        assert_eq!(controller.elapsed_seconds(), 0);
    }
}

#[test]
fn press_wins_over_simultaneous_timeout() {
    // The tick both rolls PrepareBreak past its limit and carries a press.
    let next = transition(State::at(Phase::PrepareBreak, 9, 120), Events::PRESS);
    assert_eq!(next.phase, Phase::ShortBreak);
}

#[test]
fn at_most_one_change_per_tick() {
    // Entering Off by timeout must not also leave Off in the same tick.
    let next = transition(State::at(Phase::TimeToBreak, 9, 300), Events::NONE);
    assert_eq!(next.phase, Phase::Off);

    // Entering Work by press must not re-evaluate Work's row.
    let next = transition(State::at(Phase::PrepareWork, 9, 2000), Events::PRESS);
    assert_eq!(next.phase, Phase::Work);
    assert_eq!(next.elapsed_seconds(), 0);
}

#[test]
fn tick_phase_survives_phase_change() {
    let next = transition(State::at(Phase::TimeToWork, 4, 12), Events::PRESS);
    assert_eq!(next.phase, Phase::Work);
    assert_eq!(next.tick_phase(), 5);
}

#[test]
fn transition_is_deterministic() {
    for phase in Phase::ALL {
        for tick_phase in 0..10 {
            for elapsed in [0, 119, 120, 300, 1380] {
                for events in [Events::NONE, Events::PRESS] {
                    let state = State::at(phase, tick_phase, elapsed);
                    assert_eq!(transition(state, events), transition(state, events));
                }
            }
        }
    }
}

#[test]
fn elapsed_resets_exactly_on_phase_change() {
    for phase in Phase::ALL {
        for elapsed in [0, 5, 120, 121, 300, 780, 1380] {
            for events in [Events::NONE, Events::PRESS] {
                let before = State::at(phase, 9, elapsed);
                let after = transition(before, events);
                if after.phase != before.phase {
                    assert_eq!(after.elapsed_seconds(), 0);
                } else {
                    assert_eq!(after.elapsed_seconds(), elapsed + 1);
                }
            }
        }
    }
}

#[test]
fn remaining_seconds_counts_down() {
    let mut controller = controller_in(Phase::PrepareWork);
    assert_eq!(controller.remaining_seconds(), 121);

    run_ticks(&mut controller, ticks(21));
    assert_eq!(controller.remaining_seconds(), 100);

    assert_eq!(Controller::new().remaining_seconds(), 0);
}

#[test]
fn remaining_seconds_matches_ticks_until_timeout() {
    let mut controller = controller_in(Phase::ShortBreak);
    let remaining = controller.remaining_seconds();
    let taken = ticks_until_change(&mut controller, ticks(1000));
    assert_eq!(taken, Some(ticks(remaining)));
}
