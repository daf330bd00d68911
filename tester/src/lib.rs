//! Seeded randomized testing of `forward_list` against a `Vec` model.

pub mod list_ops;
pub mod tester;

pub use list_ops::{ListOperation, ListOperationGenerator, Outcome};
pub use tester::{replay, run_operations, test_forward_list, ListFailure, OperationFailure};
