use crate::input::queue::InputQueue;

/// What the host wants the run loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    Continue,
    /// The window was closed or the platform asked the app to exit.
    Quit,
}

/// Window and OS event source.
///
/// The host owns the window. Once per frame it translates pending platform
/// events into `InputQueue` entries.
pub trait Host {
    fn pump(&mut self, input: &mut InputQueue) -> HostSignal;
}
