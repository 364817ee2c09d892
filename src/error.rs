use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested order is too small for splitting to make sense
    InvalidConfiguration { order: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration { order } => write!(
                f,
                "Invalid order {}: must be at least {}",
                order,
                crate::btree::MIN_ORDER
            ),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let error = Error::InvalidConfiguration { order: 2 };
        assert_eq!(error.to_string(), "Invalid order 2: must be at least 3");
    }
}
