pub mod deterministic;
