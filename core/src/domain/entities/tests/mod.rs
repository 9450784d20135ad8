//! Unit tests for domain entities

mod order_tests;
