//! A client for reddit's REST API.
//!
//! The heart of the crate is the listing decoder: [`decode_thread`] turns the
//! two-listing response of a post's `.json` endpoint into a [`Post`] that owns
//! its full comment forest. [`Client`] wraps authentication and the handful of
//! read and moderation endpoints a bot needs.

use {
  chrono::{DateTime, TimeDelta, Utc},
  reqwest::{RequestBuilder, StatusCode},
  serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, DeserializeOwned},
  },
  serde_json::value::RawValue,
  std::{
    borrow::Cow,
    cmp::Reverse,
    fmt::{self, Debug, Display, Formatter, Write as _},
    str,
  },
  tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  tracing::{
    Event, Level, Subscriber, debug,
    field::{Field, Visit},
    trace, warn,
  },
  tracing_subscriber::layer::{Context, Layer},
  url::Url,
};

pub use {
  client::{Client, Credentials},
  comment::Comment,
  comment_node::{CommentNode, ScoreOrder},
  endpoint::Endpoint,
  error::Error,
  error_relay::{ErrorRelay, Report},
  kind::Kind,
  listing::{RawThing, unwrap_listing},
  more_comments::MoreComments,
  post::Post,
  reply_tree::DecodeMode,
  response::{Account, StylesheetImage, StylesheetTemplate, SubmittedPost},
  thing::Thing,
  thing_info::ThingInfo,
  thread::{decode_thread, decode_thread_tolerant},
  timestamp::Timestamp,
  text_post::TextPost,
  token::Token,
};

use {
  endpoint::{OAUTH_HOST, WWW_HOST},
  reply_tree::{Forest, ReplyTree},
  response::{ApiStatus, JsonResponse, StylesheetTemplateResponse},
  token::TokenResponse,
  utils::{deserialize_flag, truncate},
};

mod client;
mod comment;
mod comment_node;
mod endpoint;
mod error;
mod error_relay;
mod kind;
mod listing;
mod more_comments;
mod post;
mod reply_tree;
mod response;
mod text_post;
mod thing;
mod thing_info;
mod thread;
mod timestamp;
mod token;
mod utils;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
