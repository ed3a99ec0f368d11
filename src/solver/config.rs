/// Configuration for the search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Split the top-level combinations across the rayon thread pool
    pub parallel: bool,
    /// Stop exploring once a node reaches the target
    pub stop_on_exact: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            stop_on_exact: true,
        }
    }
}
