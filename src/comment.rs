use super::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comment {
  pub body: String,
  pub info: ThingInfo,
  /// Fullname of the post or comment this replies to.
  pub parent_id: String,
}

#[derive(Deserialize)]
struct CommentData<'a> {
  body: String,
  parent_id: String,
  #[serde(borrow, default)]
  replies: Option<&'a RawValue>,
}

impl Comment {
  /// Decodes a comment's flat fields, handing back its replies payload
  /// untouched so a broken subtree cannot spoil the fields decoded here.
  pub(crate) fn decode(
    payload: &RawValue,
  ) -> Result<(Self, Option<&RawValue>)> {
    let info = ThingInfo::decode(payload, Kind::Comment)?;

    let data = serde_json::from_str::<CommentData>(payload.get()).map_err(
      |source| Error::MalformedThing {
        kind: Kind::Comment,
        source,
      },
    )?;

    Ok((
      Self {
        body: data.body,
        info,
        parent_id: data.parent_id,
      },
      data.replies,
    ))
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde_json::json};

  fn payload(value: serde_json::Value) -> Box<RawValue> {
    RawValue::from_string(value.to_string()).unwrap()
  }

  fn sample(replies: serde_json::Value) -> serde_json::Value {
    json!({
      "author": "carol",
      "body": "first!",
      "created_utc": 1_622_548_900.0,
      "edited": false,
      "id": "c1",
      "name": "t1_c1",
      "parent_id": "t3_xyz",
      "replies": replies,
      "score": 3,
      "subreddit": "rust",
      "subreddit_id": "t5_2s7lj",
    })
  }

  #[test]
  fn comment_fields_decode() {
    let raw = payload(sample(json!("")));

    let (comment, replies) = Comment::decode(&raw).unwrap();

    assert_eq!(comment.body, "first!");
    assert_eq!(comment.parent_id, "t3_xyz");
    assert_eq!(comment.info.created_utc.unix(), 1_622_548_900);
    assert_eq!(replies.map(RawValue::get), Some(r#""""#));
  }

  #[test]
  fn replies_are_passed_through_undecoded() {
    let raw = payload(sample(json!({"data": {"children": "garbage"}})));

    let (_, replies) = Comment::decode(&raw).unwrap();

    assert_eq!(
      replies.map(RawValue::get),
      Some(r#"{"data":{"children":"garbage"}}"#)
    );
  }

  #[test]
  fn null_or_missing_replies_are_none() {
    let raw = payload(sample(json!(null)));
    assert!(Comment::decode(&raw).unwrap().1.is_none());

    let mut value = sample(json!(""));
    value.as_object_mut().unwrap().remove("replies");
    let raw = payload(value);
    assert!(Comment::decode(&raw).unwrap().1.is_none());
  }

  #[test]
  fn missing_parent_is_malformed() {
    let mut value = sample(json!(""));
    value.as_object_mut().unwrap().remove("parent_id");

    assert!(matches!(
      Comment::decode(&payload(value)),
      Err(Error::MalformedThing {
        kind: Kind::Comment,
        ..
      })
    ));
  }
}
