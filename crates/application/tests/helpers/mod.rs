#![allow(dead_code)]

pub mod mock_resolver;

pub use mock_resolver::{ipv4, ipv6, MockRecordResolver, Outcome};
