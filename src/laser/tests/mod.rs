//! Unit tests for the laser module.

mod return_service_tests;
