//! Run profiles read from the environment by CI and local test runs.

pub mod property_test_profile;
