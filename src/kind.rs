use super::*;

/// The kinds of thing a comment page can contain.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
  Comment,
  More,
  Post,
}

impl Kind {
  pub fn from_tag(tag: &str) -> Option<Self> {
    match tag {
      "t1" => Some(Self::Comment),
      "more" => Some(Self::More),
      "t3" => Some(Self::Post),
      _ => None,
    }
  }

  /// Settles which kind a child is, given the kind its listing should hold.
  ///
  /// Untagged children are taken to be `expected`. Comment listings may also
  /// carry `more` stubs.
  pub fn resolve(tag: Option<&str>, expected: Self) -> Result<Self> {
    let Some(tag) = tag else {
      return Ok(expected);
    };

    match Self::from_tag(tag) {
      Some(Self::More) if expected == Self::Comment => Ok(Self::More),
      Some(kind) if kind == expected => Ok(kind),
      _ => Err(Error::UnexpectedKind {
        expected,
        found: tag.to_string(),
      }),
    }
  }

  pub fn tag(self) -> &'static str {
    match self {
      Self::Comment => "t1",
      Self::More => "more",
      Self::Post => "t3",
    }
  }
}

impl Display for Kind {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(match self {
      Self::Comment => "comment",
      Self::More => "more stub",
      Self::Post => "post",
    })
  }
}
