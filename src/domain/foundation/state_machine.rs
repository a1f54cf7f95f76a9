//! State machine trait for step enums.
//!
//! Provides a consistent interface for validating and performing forward
//! transitions across the guided-dialogue steps.

use super::{DomainError, ErrorCode};

/// Trait for step enums that represent state machines.
///
/// Implementors define valid forward transitions and get validated
/// transition methods for free. Back navigation is modeled separately
/// because it re-renders prompts rather than progressing the sequence.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if a forward transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid forward targets from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs a transition with validation, returning an error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if the current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStep {
        First,
        Second,
        Done,
    }

    impl StateMachine for TestStep {
        fn can_transition_to(&self, target: &Self) -> bool {
            use TestStep::*;
            matches!((self, target), (First, Second) | (Second, Done))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use TestStep::*;
            match self {
                First => vec![Second],
                Second => vec![Done],
                Done => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        assert_eq!(
            TestStep::First.transition_to(TestStep::Second).unwrap(),
            TestStep::Second
        );
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let err = TestStep::First.transition_to(TestStep::Done).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn is_terminal_only_for_final_step() {
        assert!(TestStep::Done.is_terminal());
        assert!(!TestStep::First.is_terminal());
        assert!(!TestStep::Second.is_terminal());
    }
}
