pub mod catalog;
pub mod config;
pub mod degree;
pub mod engine;
pub mod error;
pub mod plan;
pub mod relational;
pub mod schedule;
pub mod verdict;

pub use engine::RuleEngine;
pub use error::RuleError;
pub use verdict::Verdict;
