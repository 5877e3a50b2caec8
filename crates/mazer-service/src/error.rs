use std::fmt;

use mazer_core::GridError;
use mazer_gen::GenError;
use mazer_paths::SolveError;

/// Errors reported to a transport by the maze service.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// The request was malformed: missing or empty grid, ragged rows,
    /// cell values other than 0 and 1.
    Input(String),
    /// The requested algorithm does not exist.
    UnknownAlgorithm(String),
    /// The maze could not be generated.
    Generate(GenError),
    /// The solve was cancelled or the listener went away.
    Aborted,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(msg) => f.write_str(msg),
            Self::UnknownAlgorithm(name) => write!(
                f,
                "{}",
                SolveError::UnknownAlgorithm(name.clone())
            ),
            Self::Generate(e) => write!(f, "{e}"),
            Self::Aborted => f.write_str("solve aborted"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Generate(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ServiceError {
    fn from(e: GridError) -> Self {
        ServiceError::Input(e.to_string())
    }
}

impl From<GenError> for ServiceError {
    fn from(e: GenError) -> Self {
        ServiceError::Generate(e)
    }
}

impl From<SolveError> for ServiceError {
    fn from(e: SolveError) -> Self {
        match e {
            SolveError::UnknownAlgorithm(name) => ServiceError::UnknownAlgorithm(name),
            SolveError::OutOfBounds(_) => ServiceError::Input(e.to_string()),
            SolveError::Aborted => ServiceError::Aborted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::Point;

    #[test]
    fn conversions() {
        assert_eq!(
            ServiceError::from(SolveError::UnknownAlgorithm("x".into())),
            ServiceError::UnknownAlgorithm("x".into())
        );
        assert_eq!(
            ServiceError::from(SolveError::Aborted),
            ServiceError::Aborted
        );
        assert!(matches!(
            ServiceError::from(SolveError::OutOfBounds(Point::new(5, 5))),
            ServiceError::Input(_)
        ));
        assert_eq!(
            ServiceError::from(GridError::Empty),
            ServiceError::Input("grid is empty".into())
        );
    }

    #[test]
    fn unknown_algorithm_message_names_the_choices() {
        let msg = ServiceError::UnknownAlgorithm("greedy".into()).to_string();
        assert!(msg.contains("greedy"));
        assert!(msg.contains("astar"));
    }
}
