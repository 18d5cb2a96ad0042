use super::*;

/// A self post to submit.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct TextPost<'a> {
  /// Submit as a promoted post.
  pub ad: bool,
  pub nsfw: bool,
  pub send_replies: bool,
  pub spoiler: bool,
  pub subreddit: &'a str,
  pub text: &'a str,
  pub title: &'a str,
}

impl<'a> TextPost<'a> {
  pub(crate) fn form(&self) -> Vec<(&'static str, &'a str)> {
    let flag = |value: bool| if value { "true" } else { "false" };

    vec![
      ("ad", flag(self.ad)),
      ("api_type", "json"),
      ("kind", "self"),
      ("nsfw", flag(self.nsfw)),
      ("resubmit", "false"),
      ("sendreplies", flag(self.send_replies)),
      ("spoiler", flag(self.spoiler)),
      ("sr", self.subreddit),
      ("text", self.text),
      ("title", self.title),
    ]
  }
}
