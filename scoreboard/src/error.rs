use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Broad class of a rejected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input itself was malformed. Retrying with corrected input succeeds.
    InvalidArgument,
    /// The operation does not apply to the current game.
    InvalidState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Team names must not be blank.")]
    BlankTeamName,
    #[error("Points must be positive.")]
    NonPositivePoints,
    #[error("Set team names before scoring.")]
    NamesNotSet,
    #[error("No actions to undo.")]
    NothingToUndo,
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::BlankTeamName | Error::NonPositivePoints => ErrorKind::InvalidArgument,
            Error::NamesNotSet | Error::NothingToUndo => ErrorKind::InvalidState,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::BlankTeamName.to_string(),
            "Team names must not be blank."
        );
        assert_eq!(Error::NonPositivePoints.to_string(), "Points must be positive.");
        assert_eq!(
            Error::NamesNotSet.to_string(),
            "Set team names before scoring."
        );
        assert_eq!(Error::NothingToUndo.to_string(), "No actions to undo.");
    }

    #[test]
    fn kinds() {
        assert_eq!(Error::BlankTeamName.kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::NonPositivePoints.kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::NamesNotSet.kind(), ErrorKind::InvalidState);
        assert_eq!(Error::NothingToUndo.kind(), ErrorKind::InvalidState);
    }
}
