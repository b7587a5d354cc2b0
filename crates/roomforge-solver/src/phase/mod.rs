//! Solver phases
//!
//! Phases run in a fixed order over the same working units:
//! - GreedyConstructionPhase: places every task on a unit
//! - ConstrainedBalancePhase: moves tasks between extremes within corridor caps
//! - RelaxedBalancePhase: looser caps when the spread is still wide
//! - FinalPassPhase: one unconstrained move as a last resort
//! - TrolleyPhase: allocates trolleys and settles finish times

pub mod balance;
pub mod construction;
pub mod trolley;

use std::fmt::Debug;

use roomforge_core::Result;

use crate::scope::SolverScope;

pub use balance::{ConstrainedBalancePhase, FinalPassPhase, RelaxedBalancePhase};
pub use construction::GreedyConstructionPhase;
pub use trolley::TrolleyPhase;

/// A phase of the assignment process.
///
/// Phases are executed in sequence by the solver. Each phase reads and
/// rewrites the working units held by the solver scope.
pub trait Phase: Send + Debug {
    /// Executes this phase.
    ///
    /// An error aborts the whole run; no partial result is returned.
    fn solve(&mut self, solver_scope: &mut SolverScope<'_>) -> Result<()>;

    /// Returns the name of this phase type.
    fn phase_type_name(&self) -> &'static str;
}
