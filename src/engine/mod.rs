//! The run engine: per-instrument evaluation, the orchestrator that drives
//! it across the configured list, the overview aggregator and the report
//! assembler.

pub mod evaluator;
pub mod orchestrator;
pub mod overview;
pub mod report;

pub use evaluator::evaluate_instrument;
pub use orchestrator::Orchestrator;
pub use overview::OverviewAggregator;
pub use report::assemble_report;
