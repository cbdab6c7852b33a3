use crate::client::model::error::ClientError;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Loading,
    Fetched(T),
    Error(ClientError),
}

impl<T> Cache<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Cache::Loading)
    }

    /// Whether a value or an error has arrived.
    pub fn is_settled(&self) -> bool {
        matches!(self, Cache::Fetched(_) | Cache::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            Cache::Error(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ClientError>> for Cache<T> {
    fn from(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(data) => Cache::Fetched(data),
            Err(err) => Cache::Error(err),
        }
    }
}
