use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// Index or slice bound outside the series. `bound` is the first
    /// index that would have been acceptable as an exclusive limit.
    pub fn index_out_of_range(index: usize, bound: usize) -> Error {
        Error(ErrorKind::IndexOutOfRange { index, bound }.into())
    }

    pub fn incompatible_range(lower: u64, upper: u64) -> Error {
        Error(ErrorKind::IncompatibleRange { lower, upper }.into())
    }

    pub fn insufficient_capacity(required: usize, provided: usize) -> Error {
        Error(ErrorKind::InsufficientCapacity { required, provided }.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("segment index {index} out of range (bound {bound})")]
    IndexOutOfRange { index: usize, bound: usize },

    #[error("value range {lower}-{upper} does not reverse into a contiguous range")]
    IncompatibleRange { lower: u64, upper: u64 },

    #[error("destination buffer holds {provided} segments, {required} required")]
    InsufficientCapacity { required: usize, provided: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(_: std::convert::Infallible) -> Self {
        Error::invalid_arg("conversion", "infallible")
    }
}
