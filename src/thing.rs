use super::*;

/// A single decoded listing child, without any of its replies.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
#[allow(clippy::large_enum_variant)]
pub enum Thing {
  Comment(Comment),
  More(MoreComments),
  Post(Post),
}

impl Thing {
  /// Decodes one listing child, checking its kind tag against `expected`.
  ///
  /// Decoding is all or nothing: a missing or mistyped field fails the whole
  /// thing. A comment's replies payload is ignored here.
  pub fn decode(child: &RawThing<'_>, expected: Kind) -> Result<Self> {
    Ok(match Kind::resolve(child.kind.as_deref(), expected)? {
      Kind::Comment => Self::Comment(Comment::decode(child.data)?.0),
      Kind::More => Self::More(MoreComments::decode(child.data)?),
      Kind::Post => Self::Post(Post::decode(child.data)?),
    })
  }

  pub fn kind(&self) -> Kind {
    match self {
      Self::Comment(_) => Kind::Comment,
      Self::More(_) => Kind::More,
      Self::Post(_) => Kind::Post,
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde_json::json};

  fn listing(children: serde_json::Value) -> String {
    json!({"kind": "Listing", "data": {"children": children}}).to_string()
  }

  fn comment() -> serde_json::Value {
    json!({
      "author": "dave",
      "body": "hi",
      "created_utc": 1_600_000_000,
      "id": "d1",
      "name": "t1_d1",
      "parent_id": "t3_p",
      "replies": "",
      "score": 1,
      "subreddit": "rust",
      "subreddit_id": "t5_2s7lj",
    })
  }

  #[test]
  fn tagged_comment_decodes() {
    let raw = listing(json!([{"kind": "t1", "data": comment()}]));
    let children = unwrap_listing(&raw).unwrap();

    let thing = Thing::decode(&children[0], Kind::Comment).unwrap();

    assert_eq!(thing.kind(), Kind::Comment);

    let Thing::Comment(comment) = thing else {
      panic!("expected a comment");
    };

    assert_eq!(comment.info.author, "dave");
  }

  #[test]
  fn untagged_child_takes_expected_kind() {
    let raw = listing(json!([{"data": comment()}]));
    let children = unwrap_listing(&raw).unwrap();

    assert_eq!(
      Thing::decode(&children[0], Kind::Comment).unwrap().kind(),
      Kind::Comment
    );
  }

  #[test]
  fn comment_in_post_listing_is_rejected() {
    let raw = listing(json!([{"kind": "t1", "data": comment()}]));
    let children = unwrap_listing(&raw).unwrap();

    assert!(matches!(
      Thing::decode(&children[0], Kind::Post),
      Err(Error::UnexpectedKind {
        expected: Kind::Post,
        ..
      })
    ));
  }

  #[test]
  fn comment_shape_is_checked_against_post_expectation() {
    let raw = listing(json!([{"data": comment()}]));
    let children = unwrap_listing(&raw).unwrap();

    assert!(matches!(
      Thing::decode(&children[0], Kind::Post),
      Err(Error::MalformedThing {
        kind: Kind::Post,
        ..
      })
    ));
  }

  #[test]
  fn more_stub_decodes_in_comment_listing() {
    let raw = listing(json!([
      {"kind": "more", "data": {"count": 2, "children": ["a", "b"]}}
    ]));
    let children = unwrap_listing(&raw).unwrap();

    assert!(matches!(
      Thing::decode(&children[0], Kind::Comment).unwrap(),
      Thing::More(MoreComments { count: 2, .. })
    ));
  }
}
