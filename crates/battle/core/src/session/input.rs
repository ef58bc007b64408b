//! Raw input consumed by the menu state machine.

bitflags::bitflags! {
    /// Keys pressed this frame, already debounced by the host (the engine
    /// treats each set bit as a single press).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct InputFrame: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const CONFIRM = 1 << 2;
        const BACK = 1 << 3;
    }
}
