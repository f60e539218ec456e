use std::error::Error;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadErrorKind {
    NotFound,
    Fetch,
    Parse,
}

impl fmt::Display for LoadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadErrorKind::NotFound => write!(f, "not found"),
            LoadErrorKind::Fetch => write!(f, "fetch failed"),
            LoadErrorKind::Parse => write!(f, "invalid content"),
        }
    }
}

/// Failure to retrieve or decode a course resource (catalog, structure,
/// chapter or quiz data). Never cached: the caller may simply try again.
#[derive(Debug)]
pub struct ContentLoadError {
    pub kind: LoadErrorKind,
    pub resource: String,
    pub cause: anyhow::Error,
}

impl ContentLoadError {
    pub fn new<R: Into<String>, E: Into<anyhow::Error>>(
        kind: LoadErrorKind,
        resource: R,
        cause: E,
    ) -> Self {
        ContentLoadError {
            kind,
            resource: resource.into(),
            cause: cause.into(),
        }
    }

    pub fn not_found<R: Into<String>>(resource: R) -> Self {
        let resource = resource.into();
        let cause = anyhow::anyhow!("no such resource: {}", resource);
        ContentLoadError::new(LoadErrorKind::NotFound, resource, cause)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == LoadErrorKind::NotFound
    }
}

impl fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not load {} ({})", self.resource, self.kind)
    }
}

impl Error for ContentLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.cause)
    }
}

/// Rejected quiz session transitions. None of them change session state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionError {
    NoSelection,
    AlreadyChecked,
    NotRetryable,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoSelection => write!(f, "Please select an answer first"),
            SessionError::AlreadyChecked => write!(f, "This question was already checked"),
            SessionError::NotRetryable => {
                write!(f, "Only an incorrectly answered question can be retried")
            }
        }
    }
}

impl Error for SessionError {}
