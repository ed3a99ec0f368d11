mod config;
mod core;
mod solution;

pub use config::SolverConfig;
pub use self::core::Solver;
pub use solution::Solution;

#[cfg(test)]
mod tests;
