#[derive(Debug)]
pub enum SwgError {
    Io(std::io::Error),
    Game(swg_game::GameError),
}

impl From<std::io::Error> for SwgError {
    fn from(err: std::io::Error) -> SwgError {
        SwgError::Io(err)
    }
}

impl From<swg_game::GameError> for SwgError {
    fn from(err: swg_game::GameError) -> SwgError {
        SwgError::Game(err)
    }
}

impl std::fmt::Display for SwgError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self {
            Self::Io(err) => write!(fmt, "I/O error: {}", err),
            Self::Game(err) => write!(fmt, "{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swg_game::GameError;

    #[test]
    fn game_error_displays_unchanged() {
        let err = GameError::InvalidOption("rock".to_owned());
        let wrapped: SwgError = err.clone().into();
        assert_eq!(wrapped.to_string(), err.to_string());
        assert_eq!(
            wrapped.to_string(),
            "Invalid option 'rock'. Choose snake, water or gun."
        );
    }

    #[test]
    fn io_error_is_prefixed() {
        let err: SwgError = std::io::Error::new(std::io::ErrorKind::Other, "pipe closed").into();
        assert_eq!(err.to_string(), "I/O error: pipe closed");
    }
}
