use immunity_types::ValueError;

#[derive(Debug, thiserror::Error)]
pub enum ImmunityError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<ValueError> for ImmunityError {
    fn from(err: ValueError) -> Self {
        ImmunityError::InvalidInput(err.to_string())
    }
}

pub type ImmunityResult<T> = std::result::Result<T, ImmunityError>;
