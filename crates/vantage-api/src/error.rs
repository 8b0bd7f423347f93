//! API error types.

use vantage_chunk::CoordParseError;

/// Errors produced by the GraphQL fetch boundary.
///
/// Opaque to the chunk pipeline: callers report these, the pipeline never
/// sees them.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (connection, TLS, timeout).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("http status {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// Response body text, possibly empty.
        body: String,
    },

    /// The GraphQL response carried one or more errors.
    #[error("graphql errors: {}", messages.join("; "))]
    Graphql {
        /// All error messages from the response, in order.
        messages: Vec<String>,
    },

    /// The GraphQL response had neither data nor errors.
    #[error("no data in graphql response")]
    MissingData,

    /// A wire coordinate string failed to parse as an integer.
    #[error("malformed wire coordinate: {0}")]
    Coord(#[from] CoordParseError),
}
