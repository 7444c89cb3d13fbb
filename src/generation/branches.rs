//! Branch continuations handed to the conditional helpers.
//!
//! A conditional helper never renders anything itself: it picks one of two
//! continuations and returns whatever that continuation produces.

/// The two arms of a conditional construct
pub trait Branches {
    type Output;

    /// Render the "then" arm
    fn then(&self) -> Self::Output;

    /// Render the "else" arm
    fn otherwise(&self) -> Self::Output;

    /// Render the arm selected by `condition`
    fn select(&self, condition: bool) -> Self::Output {
        if condition {
            self.then()
        } else {
            self.otherwise()
        }
    }
}

/// A pair of closures acting as the "then" and "else" arms
#[derive(Debug, Clone, Copy)]
pub struct Continuations<T, E> {
    then: T,
    otherwise: E,
}

impl<T, E> Continuations<T, E> {
    pub fn new(then: T, otherwise: E) -> Self {
        Self { then, otherwise }
    }
}

impl<O, T, E> Branches for Continuations<T, E>
where
    T: Fn() -> O,
    E: Fn() -> O,
{
    type Output = O;

    fn then(&self) -> O {
        (self.then)()
    }

    fn otherwise(&self) -> O {
        (self.otherwise)()
    }
}

/// Arms that evaluate to the condition itself
#[derive(Debug, Clone, Copy, Default)]
pub struct Truth;

impl Branches for Truth {
    type Output = bool;

    fn then(&self) -> bool {
        true
    }

    fn otherwise(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_only_selected_arm_runs() {
        let then_calls = Cell::new(0);
        let else_calls = Cell::new(0);
        let branches = Continuations::new(
            || {
                then_calls.set(then_calls.get() + 1);
                "then"
            },
            || {
                else_calls.set(else_calls.get() + 1);
                "else"
            },
        );

        assert_eq!(branches.select(true), "then");
        assert_eq!(branches.select(false), "else");
        assert_eq!(branches.select(true), "then");
        assert_eq!(then_calls.get(), 2);
        assert_eq!(else_calls.get(), 1);
    }

    #[test]
    fn test_truth_mirrors_condition() {
        assert!(Truth.select(true));
        assert!(!Truth.select(false));
    }
}
