//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties every reachable [`GameState`] must
//! satisfy. A violation is an engine defect, not a user error, so they
//! are asserted in debug builds and exercised directly by tests.

use super::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all hold, or every violation otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod balanced_marks;
pub mod result_derived;
pub mod single_winner;
pub mod turn_order;

pub use balanced_marks::BalancedMarksInvariant;
pub use result_derived::ResultDerivedInvariant;
pub use single_winner::SingleWinnerInvariant;
pub use turn_order::TurnOrderInvariant;

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (
    BalancedMarksInvariant,
    TurnOrderInvariant,
    SingleWinnerInvariant,
    ResultDerivedInvariant,
);

/// Checks every invariant, returning the violations.
pub fn check_state(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
    TicTacToeInvariants::check_all(state)
}
