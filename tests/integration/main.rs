//! Integration test harness.
//!
//! Single binary so the mock hardware module is shared across suites.

mod mock_hw;

mod bus_tests;
mod dispatch_tests;
