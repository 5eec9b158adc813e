use crate::{Effect, Msg, PagerState};

/// Pure update function: applies a message to state and returns any effects.
///
/// The pager never tracks the outcome of an interaction itself; the returned
/// state is the input state unchanged, and the effects tell the embedding
/// layer what to fetch next. Clicks on disabled edge controls return no
/// effects at all.
pub fn update(state: PagerState, msg: Msg) -> (PagerState, Vec<Effect>) {
    let effects = match msg {
        Msg::FirstClicked => {
            if state.current_page() != 1 {
                vec![Effect::ChangePage { page: 1 }]
            } else {
                Vec::new()
            }
        }
        Msg::PrevClicked => {
            if state.current_page() != 1 {
                vec![Effect::ChangePage {
                    page: state.current_page().saturating_sub(1),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::NextClicked => {
            if state.current_page() != state.total_pages() {
                vec![Effect::ChangePage {
                    page: state.current_page() + 1,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::LastClicked => {
            if state.current_page() != state.total_pages() {
                vec![Effect::ChangePage {
                    page: state.total_pages(),
                }]
            } else {
                Vec::new()
            }
        }
        // Numbered tokens report their page directly, with no guard.
        Msg::PageClicked(page) => vec![Effect::ChangePage { page }],
        Msg::PageSizeSelected(size) => {
            // The changer only ever offers the enumerated sizes; anything
            // else is dropped like a disabled control click.
            if state.page_size_options().contains(&size) {
                vec![Effect::ChangePageSize { size }]
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
