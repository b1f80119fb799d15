//! Integration test entry point

mod e2e_test;
mod stats_flow_test;
