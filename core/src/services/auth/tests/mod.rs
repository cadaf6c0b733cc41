//! Authentication service tests.

mod service_tests;
