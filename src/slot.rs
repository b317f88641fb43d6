use std::fmt;

/// A parameter or column slot, addressed either by position or by name.
///
/// Prepared statements bind parameters positionally; stored-procedure
/// parameter blocks and result rows are usually addressed by name. Both
/// forms are supported symmetrically, with the target dispatching on the
/// variant. Positional slots count from 1, per prepared-statement
/// convention.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot<'a> {
    Positional(usize),
    Named(&'a str),
}

impl<'a> fmt::Display for Slot<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Slot::Positional(index) => write!(f, "[{}]", index),
            Slot::Named(name) => write!(f, "[{}]", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Slot;

    #[test]
    fn test_display() {
        assert_eq!(Slot::Positional(1).to_string(), "[1]");
        assert_eq!(Slot::Named("data").to_string(), "[data]");
    }
}
