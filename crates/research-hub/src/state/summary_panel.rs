//! Summary modal state with a stale-response guard.

use crate::models::SummaryResult;

/// Identifies one summary request issued by [`SummaryPanel::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// What the panel is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PanelStatus {
    /// Dismissed.
    #[default]
    Closed,
    /// Waiting for the summary.
    Loading,
    /// Showing a summary or the fallback.
    Ready(SummaryResult),
}

/// Summary modal for a single paper.
#[derive(Debug, Clone, Default)]
pub struct SummaryPanel {
    status: PanelStatus,
    generation: u64,
    pending: Option<u64>,
    selected_image: usize,
}

impl SummaryPanel {
    /// Closed panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the panel in the loading state and issue a ticket for the request.
    ///
    /// Any earlier ticket stops being current.
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        self.pending = Some(self.generation);
        self.status = PanelStatus::Loading;
        self.selected_image = 0;
        RequestTicket(self.generation)
    }

    /// Dismiss the panel. Outstanding tickets become stale.
    pub fn close(&mut self) {
        self.status = PanelStatus::Closed;
        self.pending = None;
        self.selected_image = 0;
    }

    /// Apply `result` if `ticket` is current and the panel is open.
    ///
    /// Returns whether the result was applied.
    pub fn complete(&mut self, ticket: RequestTicket, result: SummaryResult) -> bool {
        if self.pending != Some(ticket.0) || self.status == PanelStatus::Closed {
            tracing::debug!(ticket = ticket.0, "Dropping stale summary result");
            return false;
        }
        self.pending = None;
        self.status = PanelStatus::Ready(result);
        true
    }

    /// Select a diagram, clamped to the available ones. Returns the selected index.
    pub fn select_image(&mut self, index: usize) -> usize {
        let count = self.result().map_or(0, |r| r.diagrams.len());
        self.selected_image = index.min(count.saturating_sub(1));
        self.selected_image
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> &PanelStatus {
        &self.status
    }

    /// Displayed result, once ready.
    #[must_use]
    pub fn result(&self) -> Option<&SummaryResult> {
        match &self.status {
            PanelStatus::Ready(result) => Some(result),
            _ => None,
        }
    }

    /// Index of the selected diagram.
    #[must_use]
    pub fn selected_image(&self) -> usize {
        self.selected_image
    }

    /// True while a request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == PanelStatus::Loading
    }
}
