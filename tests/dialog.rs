use valentine::dialog::{
    DialogState, Resolution, ACCEPT_MESSAGE, ESCALATION_PROMPTS, FAREWELL_MESSAGE, INITIAL_PROMPT,
};
use valentine::DialogWindow;

#[test]
fn opens_with_the_initial_question() {
    let state = DialogState::new();
    assert_eq!(state.no_count(), 0);
    assert!(!state.is_resolved());
    assert_eq!(state.prompt(), INITIAL_PROMPT);
    assert_eq!(state.title(), "Question");
}

#[test]
fn no_presses_escalate_prompts_in_order() {
    let mut state = DialogState::new();
    for (i, &expected) in ESCALATION_PROMPTS.iter().enumerate() {
        state.press_no();
        assert_eq!(state.no_count(), i as u8 + 1);
        assert_eq!(state.prompt(), expected);
        assert!(
            !state.is_resolved(),
            "dialog must stay open through the first four No presses"
        );
    }
}

#[test]
fn fifth_no_resolves_with_the_farewell_message() {
    let mut state = DialogState::new();
    for _ in 0..4 {
        state.press_no();
    }
    state.press_no();
    assert_eq!(state.resolution(), Some(Resolution::Declined));
    assert_eq!(state.prompt(), FAREWELL_MESSAGE);
    assert_eq!(state.title(), "Oh...");
}

#[test]
fn yes_accepts_from_every_reachable_asking_state() {
    for no_presses in 0..=4 {
        let mut state = DialogState::new();
        for _ in 0..no_presses {
            state.press_no();
        }
        state.press_yes();
        assert_eq!(
            state.resolution(),
            Some(Resolution::Accepted),
            "Yes after {} No presses should accept",
            no_presses
        );
        assert_eq!(state.prompt(), ACCEPT_MESSAGE);
        assert_eq!(state.title(), "Yay!");
    }
}

#[test]
fn resolved_state_ignores_further_presses() {
    let mut state = DialogState::new();
    state.press_yes();
    state.press_no();
    state.press_yes();
    assert_eq!(state.resolution(), Some(Resolution::Accepted));
    assert_eq!(state.prompt(), ACCEPT_MESSAGE);
}

#[test]
fn dialog_states_are_independent() {
    let mut first = DialogState::new();
    let second = DialogState::new();
    first.press_no();
    first.press_no();
    assert_eq!(second.no_count(), 0);
    assert_eq!(second.prompt(), INITIAL_PROMPT);
}

#[test]
fn dialog_windows_get_unique_ids_and_fresh_state() {
    let a = DialogWindow::new();
    let b = DialogWindow::new();
    assert_ne!(a.id(), b.id());
    assert_eq!(a.state().no_count(), 0);
    assert_eq!(b.state().prompt(), INITIAL_PROMPT);
}

#[test]
fn declining_all_the_way_follows_the_scripted_sequence() {
    let mut state = DialogState::new();
    assert_eq!(state.prompt(), "Do you want to be my valentine?");

    state.press_no();
    state.press_no();
    state.press_no();
    assert_eq!(state.prompt(), "Will you REALLY not be my valentine?");

    state.press_no();
    assert_eq!(state.prompt(), "Last chance");
    assert!(!state.is_resolved());

    state.press_no();
    assert_eq!(state.resolution(), Some(Resolution::Declined));
    assert_eq!(state.prompt(), FAREWELL_MESSAGE);
}
