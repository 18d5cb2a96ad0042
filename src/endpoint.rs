use super::*;

pub(crate) const OAUTH_HOST: &str = "oauth.reddit.com";

pub(crate) const WWW_HOST: &str = "www.reddit.com";

/// An API endpoint. Token requests go to `www.reddit.com` with basic auth,
/// everything else to `oauth.reddit.com` with a bearer token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Endpoint<'a> {
  AccessToken,
  ComposeMessage,
  ContestMode,
  Me,
  RemovePost,
  SetStylesheet(&'a str),
  Sticky,
  Stylesheet(&'a str),
  StylesheetTemplate(&'a str),
  Submit,
}

impl Endpoint<'_> {
  fn host(self) -> &'static str {
    match self {
      Self::AccessToken => WWW_HOST,
      _ => OAUTH_HOST,
    }
  }

  fn segments(self) -> Vec<&'static str> {
    match self {
      Self::AccessToken => vec!["api", "v1", "access_token"],
      Self::ComposeMessage => vec!["api", "compose"],
      Self::ContestMode => vec!["api", "set_contest_mode"],
      Self::Me => vec!["api", "v1", "me"],
      Self::RemovePost => vec!["api", "remove"],
      Self::SetStylesheet(_) => vec!["api", "subreddit_stylesheet"],
      Self::Sticky => vec!["api", "set_subreddit_sticky"],
      Self::Stylesheet(_) => vec!["stylesheet"],
      Self::StylesheetTemplate(_) => vec!["about", "stylesheet.json"],
      Self::Submit => vec!["api", "submit"],
    }
  }

  fn subreddit(self) -> Option<String> {
    match self {
      Self::SetStylesheet(subreddit)
      | Self::Stylesheet(subreddit)
      | Self::StylesheetTemplate(subreddit) => Some(subreddit.to_string()),
      _ => None,
    }
  }

  /// Turns a post link into the URL of its JSON comment page.
  ///
  /// Accepts full links on any reddit host as well as bare permalinks such
  /// as `/r/rust/comments/abc/title/`.
  pub fn thread(link: &str) -> Result<Url> {
    let invalid = |source| Error::Url {
      input: link.to_string(),
      source,
    };

    let mut url = if link.starts_with('/') {
      Url::parse(&format!("https://{OAUTH_HOST}{link}")).map_err(invalid)?
    } else {
      Url::parse(link).map_err(invalid)?
    };

    let path = url.path().trim_end_matches('/').to_string();

    if !path.ends_with(".json") {
      url.set_path(&format!("{path}.json"));
    }

    url.set_host(Some(OAUTH_HOST)).map_err(invalid)?;

    // Only fails for non-special schemes, which reddit links never use.
    let _ = url.set_scheme("https");

    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
  }

  pub fn url(self) -> Result<Url> {
    let input = format!("https://{}/", self.host());

    let mut url = Url::parse(&input)
      .map_err(|source| Error::Url { input, source })?;

    if let Ok(mut path) = url.path_segments_mut() {
      path.clear();

      if let Some(subreddit) = self.subreddit() {
        path.push("r").push(&subreddit);
      }

      path.extend(self.segments());
    }

    Ok(url)
  }
}
