use serde::{Deserialize, Serialize};
use tracing::info;

/// Order pipeline state machine.
///
/// Strictly linear: every stage has exactly one successor and a failure in any
/// stage ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Start,
    Validated,
    StockChecked,
    PaymentAuthorized,
    StockUpdated,
    OrderFinalized,
    NotificationSent,
    Done,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 8] = [
        PipelineStage::Start,
        PipelineStage::Validated,
        PipelineStage::StockChecked,
        PipelineStage::PaymentAuthorized,
        PipelineStage::StockUpdated,
        PipelineStage::OrderFinalized,
        PipelineStage::NotificationSent,
        PipelineStage::Done,
    ];

    pub fn next(self) -> Option<PipelineStage> {
        match self {
            PipelineStage::Start => Some(PipelineStage::Validated),
            PipelineStage::Validated => Some(PipelineStage::StockChecked),
            PipelineStage::StockChecked => Some(PipelineStage::PaymentAuthorized),
            PipelineStage::PaymentAuthorized => Some(PipelineStage::StockUpdated),
            PipelineStage::StockUpdated => Some(PipelineStage::OrderFinalized),
            PipelineStage::OrderFinalized => Some(PipelineStage::NotificationSent),
            PipelineStage::NotificationSent => Some(PipelineStage::Done),
            PipelineStage::Done => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// `true` once inventory has been decremented for this run.
    pub fn stock_reserved(self) -> bool {
        self >= PipelineStage::StockUpdated
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PipelineStage::Start => "start",
            PipelineStage::Validated => "validated",
            PipelineStage::StockChecked => "stock_checked",
            PipelineStage::PaymentAuthorized => "payment_authorized",
            PipelineStage::StockUpdated => "stock_updated",
            PipelineStage::OrderFinalized => "order_finalized",
            PipelineStage::NotificationSent => "notification_sent",
            PipelineStage::Done => "done",
        }
    }
}

impl PartialOrd for PipelineStage {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PipelineStage {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

impl core::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress of a single pipeline run.
#[derive(Debug)]
pub(crate) struct PipelineRun {
    stage: PipelineStage,
}

impl PipelineRun {
    pub(crate) fn start() -> Self {
        Self {
            stage: PipelineStage::Start,
        }
    }

    pub(crate) fn stage(&self) -> PipelineStage {
        self.stage
    }

    /// Move to the successor stage and log the milestone.
    pub(crate) fn advance(&mut self) -> PipelineStage {
        if let Some(next) = self.stage.next() {
            self.stage = next;
            info!(stage = %next, "pipeline stage reached");
        }
        self.stage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_form_a_single_chain() {
        let mut walked = vec![PipelineStage::Start];
        let mut stage = PipelineStage::Start;
        while let Some(next) = stage.next() {
            walked.push(next);
            stage = next;
        }
        assert_eq!(walked, PipelineStage::ALL.to_vec());
        assert!(stage.is_terminal());
    }

    #[test]
    fn only_done_is_terminal() {
        let terminal: Vec<_> = PipelineStage::ALL
            .into_iter()
            .filter(|stage| stage.is_terminal())
            .collect();
        assert_eq!(terminal, vec![PipelineStage::Done]);
    }

    #[test]
    fn stock_is_reserved_only_after_payment() {
        assert!(!PipelineStage::StockChecked.stock_reserved());
        assert!(!PipelineStage::PaymentAuthorized.stock_reserved());
        assert!(PipelineStage::StockUpdated.stock_reserved());
        assert!(PipelineStage::Done.stock_reserved());
    }

    #[test]
    fn run_advances_one_stage_at_a_time() {
        let mut run = PipelineRun::start();
        assert_eq!(run.advance(), PipelineStage::Validated);
        assert_eq!(run.advance(), PipelineStage::StockChecked);
        for _ in 0..10 {
            run.advance();
        }
        assert_eq!(run.stage(), PipelineStage::Done);
    }

    #[test]
    fn display_uses_snake_case() {
        assert_eq!(PipelineStage::PaymentAuthorized.to_string(), "payment_authorized");
    }
}
