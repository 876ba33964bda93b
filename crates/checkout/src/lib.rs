//! Order pipeline orchestration.
//!
//! Runs the strictly linear flow
//!
//! ```text
//! validate → check stock → price → pay → update stock → finalize → notify
//! ```
//!
//! Any failure aborts the run and is returned unchanged. Stock is only touched
//! after payment succeeded, so an aborted run never needs compensation.

pub mod error;
pub mod order_id;
pub mod pipeline;
pub mod stage;

pub use error::OrderError;
pub use order_id::{OrderIdGenerator, TimestampOrderIdGenerator};
pub use pipeline::{OrderPipeline, PlacedOrder};
pub use stage::PipelineStage;
