#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked the jump-to-first control.
    FirstClicked,
    /// User clicked the previous-page control.
    PrevClicked,
    /// User clicked the next-page control.
    NextClicked,
    /// User clicked the jump-to-last control.
    LastClicked,
    /// User clicked a numbered page token.
    PageClicked(u64),
    /// User picked an entry from the page-size changer.
    PageSizeSelected(u64),
    /// Fallback for placeholder wiring.
    NoOp,
}
