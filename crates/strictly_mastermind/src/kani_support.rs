//! Kani arbitrary implementations for mastermind types.
//!
//! These implementations allow Kani to explore all possible values of our
//! types during model checking.

#[cfg(kani)]
use crate::{Colour, Secret, Slot, ROW_LENGTH};

#[cfg(kani)]
impl kani::Arbitrary for Colour {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < Colour::ALL.len());
        Colour::ALL[index]
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Slot {
    fn any() -> Self {
        if kani::any() {
            Slot::Empty
        } else {
            Slot::Filled(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Secret {
    fn any() -> Self {
        let colours: [Colour; ROW_LENGTH] = kani::any();
        Secret::from_colours(colours)
    }
}
