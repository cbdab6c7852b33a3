use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable holds a value that is not an absolute URL.
    ///
    /// `BACKEND_URL` must be an origin such as `http://localhost:3333`; check the
    /// `.env` file for typos or a missing scheme.
    #[error("Invalid URL in {name}: '{value}': {source}")]
    InvalidUrl {
        /// Name of the offending variable
        name: String,
        /// The value as read from the environment
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// The URL parsed but uses a scheme the proxy cannot forward to.
    #[error("Unsupported scheme in {name}: '{value}' (expected http or https)")]
    UnsupportedScheme { name: String, value: String },
}
