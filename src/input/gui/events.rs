/// Custom user events for the GUI event loop.
///
/// These events allow background threads (the presenter adapter and export jobs)
/// to wake the main UI thread.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A render event may be waiting in the presenter adapter, or an export has finished.
    ///
    /// Receiving this does not redraw by itself; the handler collects a finished export and
    /// requests a redraw, which picks the render event up.
    Wake,
}
