use cylpack::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::GSFConfig;

/// Record written for every (instance, strategy) pair that produced a layout
#[derive(Serialize, Deserialize, Clone)]
pub struct SolveOutput {
    pub instance: ExtInstance,
    /// The strategy that produced the solution
    pub strategy: String,
    pub solution: ExtSolution,
    pub config: GSFConfig,
}
