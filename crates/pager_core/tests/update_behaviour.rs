use std::sync::Once;

use pager_core::{update, Effect, Msg, PagerState};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(pager_logging::initialize_for_tests);
}

fn effects_for(state: &PagerState, msg: Msg) -> Vec<Effect> {
    let (next, effects) = update(state.clone(), msg);
    // No interaction ever mutates the snapshot; the caller refetches instead.
    assert_eq!(&next, state);
    effects
}

#[test]
fn first_and_prev_are_dead_on_page_one() {
    init_logging();
    let state = PagerState::new(1, 10, 100, 10);

    assert!(effects_for(&state, Msg::FirstClicked).is_empty());
    assert!(effects_for(&state, Msg::PrevClicked).is_empty());
}

#[test]
fn next_and_last_are_dead_on_last_page() {
    init_logging();
    let state = PagerState::new(10, 10, 100, 10);

    assert!(effects_for(&state, Msg::NextClicked).is_empty());
    assert!(effects_for(&state, Msg::LastClicked).is_empty());
}

#[test]
fn page_one_next_reports_page_two() {
    init_logging();
    let state = PagerState::new(1, 10, 100, 10);

    assert_eq!(
        effects_for(&state, Msg::NextClicked),
        vec![Effect::ChangePage { page: 2 }]
    );
    assert_eq!(
        effects_for(&state, Msg::LastClicked),
        vec![Effect::ChangePage { page: 10 }]
    );
}

#[test]
fn middle_page_reports_all_four_targets() {
    init_logging();
    let state = PagerState::new(5, 10, 100, 10);

    assert_eq!(
        effects_for(&state, Msg::FirstClicked),
        vec![Effect::ChangePage { page: 1 }]
    );
    assert_eq!(
        effects_for(&state, Msg::PrevClicked),
        vec![Effect::ChangePage { page: 4 }]
    );
    assert_eq!(
        effects_for(&state, Msg::NextClicked),
        vec![Effect::ChangePage { page: 6 }]
    );
    assert_eq!(
        effects_for(&state, Msg::LastClicked),
        vec![Effect::ChangePage { page: 10 }]
    );
}

#[test]
fn numbered_token_reports_directly() {
    init_logging();
    let state = PagerState::new(5, 10, 100, 10);

    assert_eq!(
        effects_for(&state, Msg::PageClicked(7)),
        vec![Effect::ChangePage { page: 7 }]
    );
    // The current page is a plain token too; clicking it re-reports it.
    assert_eq!(
        effects_for(&state, Msg::PageClicked(5)),
        vec![Effect::ChangePage { page: 5 }]
    );
}

#[test]
fn page_size_selection_reports_enumerated_options_only() {
    init_logging();
    let state = PagerState::new(2, 10, 100, 10);

    assert_eq!(
        effects_for(&state, Msg::PageSizeSelected(50)),
        vec![Effect::ChangePageSize { size: 50 }]
    );
    assert!(effects_for(&state, Msg::PageSizeSelected(25)).is_empty());
}

#[test]
fn custom_page_size_options_drive_the_guard() {
    init_logging();
    let state = PagerState::new(1, 4, 100, 25).with_page_size_options(vec![25, 75]);

    assert_eq!(
        effects_for(&state, Msg::PageSizeSelected(75)),
        vec![Effect::ChangePageSize { size: 75 }]
    );
    assert!(effects_for(&state, Msg::PageSizeSelected(10)).is_empty());
}
