use super::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum Sort {
  Bottom,
  Top,
}

#[derive(Debug, Parser)]
#[command(
  name = "reddit-client",
  version,
  about = "Fetch reddit threads and print their comment trees"
)]
pub(crate) struct Arguments {
  #[arg(long, env = "REDDIT_BOT_NAME", default_value = "reddit-client")]
  pub(crate) bot_name: String,
  #[arg(long, env = "REDDIT_CLIENT_ID")]
  pub(crate) client_id: String,
  #[arg(long, env = "REDDIT_CLIENT_SECRET", hide_env_values = true)]
  pub(crate) client_secret: String,
  /// Print threads as JSON instead of an indented tree.
  #[arg(long)]
  pub(crate) json: bool,
  #[arg(long, env = "REDDIT_PASSWORD", hide_env_values = true)]
  pub(crate) password: String,
  /// Send warnings and errors to this user or subreddit.
  #[arg(long, env = "REDDIT_REPORT_TO")]
  pub(crate) report_to: Option<String>,
  /// Reorder comments by score instead of keeping reddit's order.
  #[arg(long, value_enum)]
  pub(crate) sort: Option<Sort>,
  /// Drop replies that fail to decode instead of failing the thread.
  #[arg(long)]
  pub(crate) tolerant: bool,
  /// Thread links or permalinks.
  #[arg(required = true)]
  pub(crate) urls: Vec<String>,
  #[arg(
    long,
    env = "REDDIT_USER_AGENT",
    default_value = concat!("reddit-client/", env!("CARGO_PKG_VERSION"))
  )]
  pub(crate) user_agent: String,
  #[arg(long, env = "REDDIT_USERNAME")]
  pub(crate) username: String,
  /// Wrap comment bodies at this many columns.
  #[arg(long, default_value_t = 100)]
  pub(crate) width: usize,
}

impl Arguments {
  pub(crate) fn credentials(&self) -> Credentials {
    Credentials {
      client_id: self.client_id.clone(),
      client_secret: self.client_secret.clone(),
      user_agent: self.user_agent.clone(),
      username: self.username.clone(),
    }
  }

  pub(crate) fn mode(&self) -> DecodeMode {
    if self.tolerant {
      DecodeMode::Tolerant
    } else {
      DecodeMode::Strict
    }
  }

  pub(crate) fn score_order(&self) -> Option<ScoreOrder> {
    self.sort.map(|sort| match sort {
      Sort::Bottom => ScoreOrder::Ascending,
      Sort::Top => ScoreOrder::Descending,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(extra: &[&str]) -> Result<Arguments, clap::Error> {
    let mut args = vec![
      "reddit-client",
      "--client-id",
      "id",
      "--client-secret",
      "secret",
      "--username",
      "bot",
      "--password",
      "hunter2",
    ];

    args.extend(extra);

    Arguments::try_parse_from(args)
  }

  #[test]
  fn defaults() {
    let arguments = parse(&["/r/rust/comments/abc/title/"]).unwrap();

    assert_eq!(arguments.urls, ["/r/rust/comments/abc/title/"]);
    assert_eq!(arguments.width, 100);
    assert!(!arguments.json);
    assert_eq!(arguments.mode(), DecodeMode::Strict);
    assert!(arguments.user_agent.starts_with("reddit-client/"));
  }

  #[test]
  fn tolerant_flag_selects_tolerant_mode() {
    let arguments = parse(&["--tolerant", "--width", "60", "a", "b"]).unwrap();

    assert_eq!(arguments.mode(), DecodeMode::Tolerant);
    assert_eq!(arguments.score_order(), None);
    assert_eq!(arguments.width, 60);
    assert_eq!(arguments.urls, ["a", "b"]);
  }

  #[test]
  fn sort_maps_to_score_order() {
    assert_eq!(
      parse(&["--sort", "top", "a"]).unwrap().score_order(),
      Some(ScoreOrder::Descending)
    );
    assert_eq!(
      parse(&["--sort", "bottom", "a"]).unwrap().score_order(),
      Some(ScoreOrder::Ascending)
    );
    assert!(parse(&["--sort", "best", "a"]).is_err());
  }

  #[test]
  fn at_least_one_url_is_required() {
    assert!(parse(&[]).is_err());
  }

  #[test]
  fn credentials_are_copied() {
    let credentials = parse(&["a"]).unwrap().credentials();

    assert_eq!(credentials.client_id, "id");
    assert_eq!(credentials.username, "bot");
  }
}
