pub mod context;
pub mod ops_modules;
pub mod ops_publish;
pub mod ops_targets;
pub mod report;
