/// Errors raised while loading detector configuration. Detection itself is
/// infallible.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
