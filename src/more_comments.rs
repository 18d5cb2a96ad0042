use super::*;

/// A `more` stub standing in for replies reddit did not send.
///
/// A stub with no children is a "continue this thread" link for replies
/// nested too deep to include.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct MoreComments {
  /// Ids of the missing comments.
  #[serde(default)]
  pub children: Vec<String>,
  #[serde(default)]
  pub count: u64,
  #[serde(default)]
  pub parent_id: String,
}

impl MoreComments {
  pub(crate) fn decode(payload: &RawValue) -> Result<Self> {
    serde_json::from_str(payload.get()).map_err(|source| {
      Error::MalformedThing {
        kind: Kind::More,
        source,
      }
    })
  }

  /// Folds another stub from the same listing into this one.
  pub(crate) fn merge(&mut self, other: Self) {
    self.children.extend(other.children);
    self.count = self.count.saturating_add(other.count);

    if self.parent_id.is_empty() {
      self.parent_id = other.parent_id;
    }
  }
}
