//! Test infrastructure shared by service tests.

mod db;

pub use context::TestContext;
