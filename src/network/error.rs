use thiserror::Error;

/// Errors raised while building a function approximator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Network dimension `{0}` must be non-zero")]
    ZeroDimension(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimension_display() {
        let e = NetworkError::ZeroDimension("state_size");
        assert_eq!(e.to_string(), "Network dimension `state_size` must be non-zero");
    }
}
