// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test crates but are used in others
#[allow(unused_imports)]
pub use fixtures::{TestRepo, SERVICES_DOC};
#[allow(unused_imports)]
pub use helpers::{assert_cap_invariant, create_test_services, search};
