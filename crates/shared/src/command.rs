use crate::Issues;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(Issues),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Issues> for Error {
    fn from(value: Issues) -> Self {
        Self::Validate(value)
    }
}

impl Error {
    /// Validation issues carried by this error, if any.
    pub fn issues(&self) -> Option<&Issues> {
        match self {
            Self::Validate(issues) => Some(issues),
            Self::Unknown(_) => None,
        }
    }
}

