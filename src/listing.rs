use super::*;

/// One child of a listing, with its payload left undecoded.
#[derive(Debug, Deserialize)]
pub struct RawThing<'a> {
  #[serde(borrow)]
  pub data: &'a RawValue,
  #[serde(borrow, default)]
  pub kind: Option<Cow<'a, str>>,
}

#[derive(Deserialize)]
struct Envelope<'a> {
  #[serde(borrow)]
  data: EnvelopeData<'a>,
}

#[derive(Deserialize)]
struct EnvelopeData<'a> {
  #[serde(borrow)]
  children: Vec<RawThing<'a>>,
}

/// Strips a `{"data": {"children": [...]}}` envelope, returning the children
/// in listing order. The payloads borrow from `raw` and are not inspected.
pub fn unwrap_listing(raw: &str) -> Result<Vec<RawThing<'_>>> {
  serde_json::from_str::<Envelope>(raw)
    .map(|envelope| envelope.data.children)
    .map_err(|source| Error::MalformedEnvelope { source })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_children_unwrap_to_nothing() {
    assert!(unwrap_listing(r#"{"data":{"children":[]}}"#).unwrap().is_empty());
  }

  #[test]
  fn missing_children_is_malformed() {
    assert!(matches!(
      unwrap_listing(r#"{"data":{}}"#),
      Err(Error::MalformedEnvelope { .. })
    ));
  }

  #[test]
  fn missing_data_is_malformed() {
    assert!(matches!(
      unwrap_listing(r#"{"kind":"Listing"}"#),
      Err(Error::MalformedEnvelope { .. })
    ));
  }

  #[test]
  fn children_of_the_wrong_shape_are_malformed() {
    assert!(unwrap_listing(r#"{"data":{"children":{}}}"#).is_err());
    assert!(unwrap_listing(r#"{"data":{"children":[{"kind":"t1"}]}}"#).is_err());
    assert!(unwrap_listing("[]").is_err());
  }

  #[test]
  fn order_and_payloads_are_preserved() {
    let children = unwrap_listing(
      r#"{
        "kind": "Listing",
        "data": {
          "after": null,
          "dist": 3,
          "children": [
            {"kind": "t1", "data": {"id": "b"}},
            {"kind": "t1", "data": {"id": "a"}},
            {"data": {"id": "c", "nested": [1, 2]}}
          ]
        }
      }"#,
    )
    .unwrap();

    assert_eq!(
      children
        .iter()
        .map(|child| child.data.get())
        .collect::<Vec<_>>(),
      vec![
        r#"{"id": "b"}"#,
        r#"{"id": "a"}"#,
        r#"{"id": "c", "nested": [1, 2]}"#
      ]
    );

    assert_eq!(children[0].kind.as_deref(), Some("t1"));
    assert_eq!(children[2].kind, None);
  }

  #[test]
  fn payload_contents_are_not_validated() {
    let children =
      unwrap_listing(r#"{"data":{"children":[{"data":"anything"}]}}"#).unwrap();

    assert_eq!(children[0].data.get(), r#""anything""#);
  }
}
