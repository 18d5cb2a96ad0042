use super::*;

/// Fields shared by posts and comments.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThingInfo {
  pub approved: bool,
  pub archived: bool,
  pub author: String,
  pub author_fullname: Option<String>,
  pub contest_mode: bool,
  pub created_utc: Timestamp,
  pub downs: i64,
  pub edited: Timestamp,
  pub gilded: u32,
  pub id: String,
  pub locked: bool,
  /// The fullname, `t1_<id>` or `t3_<id>`.
  pub name: String,
  pub removed: bool,
  pub saved: bool,
  pub score: i64,
  pub spoiler: bool,
  pub stickied: bool,
  pub subreddit: String,
  pub subreddit_id: String,
  pub subreddit_type: Option<String>,
  pub ups: i64,
}

#[derive(Deserialize)]
struct InfoData<'a> {
  #[serde(default, deserialize_with = "deserialize_flag")]
  approved: bool,
  #[serde(default, deserialize_with = "deserialize_flag")]
  archived: bool,
  author: String,
  #[serde(default)]
  author_fullname: Option<String>,
  #[serde(default, deserialize_with = "deserialize_flag")]
  contest_mode: bool,
  #[serde(borrow)]
  created_utc: &'a RawValue,
  #[serde(default)]
  downs: i64,
  #[serde(borrow, default)]
  edited: Option<&'a RawValue>,
  #[serde(default)]
  gilded: u32,
  id: String,
  #[serde(default, deserialize_with = "deserialize_flag")]
  locked: bool,
  name: String,
  #[serde(default, deserialize_with = "deserialize_flag")]
  removed: bool,
  #[serde(default, deserialize_with = "deserialize_flag")]
  saved: bool,
  score: i64,
  #[serde(default, deserialize_with = "deserialize_flag")]
  spoiler: bool,
  #[serde(default, deserialize_with = "deserialize_flag")]
  stickied: bool,
  subreddit: String,
  subreddit_id: String,
  #[serde(default)]
  subreddit_type: Option<String>,
  #[serde(default)]
  ups: i64,
}

impl ThingInfo {
  /// Decodes the shared fields of one thing payload.
  pub(crate) fn decode(payload: &RawValue, kind: Kind) -> Result<Self> {
    let data = serde_json::from_str::<InfoData>(payload.get())
      .map_err(|source| Error::MalformedThing { kind, source })?;

    let created_utc = Timestamp::from_raw(data.created_utc.get().as_bytes())?;

    let edited = match data.edited {
      Some(raw) => Timestamp::from_raw(raw.get().as_bytes())?,
      None => Timestamp::default(),
    };

    Ok(Self {
      approved: data.approved,
      archived: data.archived,
      author: data.author,
      author_fullname: data.author_fullname,
      contest_mode: data.contest_mode,
      created_utc,
      downs: data.downs,
      edited,
      gilded: data.gilded,
      id: data.id,
      locked: data.locked,
      name: data.name,
      removed: data.removed,
      saved: data.saved,
      score: data.score,
      spoiler: data.spoiler,
      stickied: data.stickied,
      subreddit: data.subreddit,
      subreddit_id: data.subreddit_id,
      subreddit_type: data.subreddit_type,
      ups: data.ups,
    })
  }
}
