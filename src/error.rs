use std::fmt;

#[derive(Debug)]
pub enum Error {
  InvalidArgument {
    description: String
  },
  IO {
    error: std::io::Error
  }
}

impl Error {
  pub fn invalid_argument<S: Into<String>>(description: S) -> Self {
    Error::InvalidArgument { description: description.into() }
  }

  pub fn is_invalid_argument(&self) -> bool {
    matches!(self, Error::InvalidArgument { .. })
  }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument { description } => write!(f, "{}", description),
            Error::IO { error } => write!(f, "{}", error)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidArgument { .. } => None,
            Error::IO { error } => Some(error)
        }
    }
}

impl From<std::io::Error> for Error {
  fn from(error: std::io::Error) -> Self {
    Error::IO { error: error }
  }
}
