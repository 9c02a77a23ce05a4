#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("caloric needs must be a whole number of kcal, got '{0}'")]
    InvalidCaloricNeeds(String),

    #[error("unsupported export format '{0}', choose txt, html or json")]
    UnsupportedFormat(String),

    #[error("meal plan is empty, generate a plan first")]
    EmptyPlan,

    #[error("meal '{0}' not found")]
    MealNotFound(String),

    #[error("preferences not set, set preferences first")]
    PreferencesNotSet,

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Unknown(value.into())
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}
