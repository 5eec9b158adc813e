use pager_core::{update, Msg, PagerState};

#[test]
fn update_is_noop() {
    let state = PagerState::new(3, 10, 100, 10);
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
