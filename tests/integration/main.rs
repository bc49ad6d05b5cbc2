//! Integration tests for netgraph.

mod util;

mod arg_tests;
mod invalid_config_tests;
