//! Core pipeline logic
//!
//! One configurable pipeline replaces the three near-duplicate source
//! revisions: plan partitions ([`planner`]), filter rows ([`filter`]),
//! materialize and optionally bundle blobs ([`assembler`]), and compose the
//! outbound message ([`composer`]). Every step is a pure function of its
//! inputs except the composer's final notifier call.

pub mod assembler;
pub mod composer;
pub mod filter;
pub mod planner;

pub use assembler::ExportAssembler;
pub use composer::DeliveryComposer;
pub use planner::PartitionSpec;
