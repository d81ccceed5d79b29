#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidOption(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self {
            Self::InvalidOption(input) => write!(
                fmt,
                "Invalid option '{}'. Choose snake, water or gun.",
                input
            ),
        }
    }
}

impl std::error::Error for GameError {}
