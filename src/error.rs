use super::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("reddit error: {message}")]
  Api { message: String },
  #[error("request to {url} failed")]
  Http {
    #[source]
    source: reqwest::Error,
    url: String,
  },
  #[error("malformed listing envelope")]
  MalformedEnvelope {
    #[source]
    source: serde_json::Error,
  },
  #[error("malformed response from {url}")]
  MalformedResponse {
    #[source]
    source: serde_json::Error,
    url: String,
  },
  #[error("malformed scalar `{raw}`, expected a boolean or a number")]
  MalformedScalar { raw: String },
  #[error("malformed {kind}")]
  MalformedThing {
    kind: Kind,
    #[source]
    source: serde_json::Error,
  },
  #[error("no recipient to relay errors to")]
  MissingRecipient,
  #[error("no access token, log in first")]
  MissingToken,
  #[error("{url} returned status {status}")]
  Status { status: StatusCode, url: String },
  #[error("access token expired at {expiry}")]
  TokenExpired { expiry: DateTime<Utc> },
  #[error("expected exactly one post in listing, found {count}")]
  UnexpectedChildCount { count: usize },
  #[error("expected {expected} but found kind `{found}`")]
  UnexpectedKind { expected: Kind, found: String },
  #[error("expected a post listing and a comment listing, found {count}")]
  UnexpectedListingCount { count: usize },
  #[error("invalid url `{input}`")]
  Url {
    input: String,
    #[source]
    source: url::ParseError,
  },
}
