use super::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Post {
  /// The self text, empty for link posts.
  pub body: String,
  /// The comment count reported by reddit, which includes comments that
  /// were not sent with the thread.
  pub comment_count: u64,
  pub hidden: bool,
  pub info: ThingInfo,
  pub is_self: bool,
  pub more: Option<MoreComments>,
  pub nsfw: bool,
  pub permalink: String,
  pub quarantined: bool,
  pub replies: Vec<CommentNode>,
  pub title: String,
  pub url: String,
}

#[derive(Deserialize)]
struct PostData {
  #[serde(default, deserialize_with = "deserialize_flag")]
  hidden: bool,
  #[serde(default, deserialize_with = "deserialize_flag")]
  is_self: bool,
  #[serde(default)]
  num_comments: u64,
  #[serde(default, deserialize_with = "deserialize_flag")]
  over_18: bool,
  #[serde(default)]
  permalink: String,
  #[serde(default, deserialize_with = "deserialize_flag")]
  quarantine: bool,
  #[serde(default)]
  selftext: String,
  title: String,
  url: String,
}

impl Post {
  /// Number of comments actually present in the decoded forest.
  pub fn comment_count_loaded(&self) -> usize {
    self.replies.iter().map(CommentNode::size).sum()
  }

  /// Decodes a post's flat fields. The comment forest starts empty.
  pub(crate) fn decode(payload: &RawValue) -> Result<Self> {
    let info = ThingInfo::decode(payload, Kind::Post)?;

    let data =
      serde_json::from_str::<PostData>(payload.get()).map_err(|source| {
        Error::MalformedThing {
          kind: Kind::Post,
          source,
        }
      })?;

    Ok(Self {
      body: data.selftext,
      comment_count: data.num_comments,
      hidden: data.hidden,
      info,
      is_self: data.is_self,
      more: None,
      nsfw: data.over_18,
      permalink: data.permalink,
      quarantined: data.quarantine,
      replies: Vec::new(),
      title: data.title,
      url: data.url,
    })
  }

  /// Reorders the comment forest by score, at every level.
  pub fn sort_replies_by_score(&mut self, order: ScoreOrder) {
    CommentNode::sort_by_score(&mut self.replies, order);
  }
}
