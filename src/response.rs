use super::*;

/// The `{"error": 403, "message": "Forbidden"}` shape reddit uses to report
/// failures on plain endpoints.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiStatus {
  #[serde(default)]
  error: Option<serde_json::Value>,
  #[serde(default)]
  message: Option<String>,
}

impl ApiStatus {
  pub(crate) fn check(self) -> Result {
    match self.error {
      None | Some(serde_json::Value::Null) => Ok(()),
      Some(serde_json::Value::Number(code)) if code.as_i64() == Some(0) => {
        Ok(())
      }
      Some(code) => Err(Error::Api {
        message: format!("{code}: {}", self.message.unwrap_or_default()),
      }),
    }
  }
}

/// The `{"json": {"errors": [...], "data": {...}}}` shape used by endpoints
/// called with `api_type=json`.
#[derive(Debug, Deserialize)]
pub(crate) struct JsonResponse<T> {
  #[serde(default = "Option::default")]
  json: Option<JsonBody<T>>,
  #[serde(default)]
  message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JsonBody<T> {
  #[serde(default = "Option::default")]
  data: Option<T>,
  #[serde(default)]
  errors: Vec<Vec<serde_json::Value>>,
}

impl<T> JsonResponse<T> {
  pub(crate) fn into_data(self) -> Result<Option<T>> {
    if let Some(message) = self.message.filter(|message| !message.is_empty())
    {
      return Err(Error::Api { message });
    }

    let Some(body) = self.json else {
      return Ok(None);
    };

    if body.errors.is_empty() {
      return Ok(body.data);
    }

    let message = body
      .errors
      .iter()
      .map(|error| {
        error
          .iter()
          .filter_map(|part| match part {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
          })
          .collect::<Vec<_>>()
          .join(" ")
      })
      .collect::<Vec<_>>()
      .join("; ");

    Err(Error::Api { message })
  }
}

/// The logged in account, as returned by `/api/v1/me`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Account {
  #[serde(default)]
  pub comment_karma: i64,
  pub created: Timestamp,
  pub created_utc: Timestamp,
  #[serde(default, deserialize_with = "deserialize_flag")]
  pub has_mail: bool,
  #[serde(default, deserialize_with = "deserialize_flag")]
  pub has_mod_mail: bool,
  #[serde(default, deserialize_with = "deserialize_flag")]
  pub has_verified_email: bool,
  pub id: String,
  #[serde(default, deserialize_with = "deserialize_flag")]
  pub is_gold: bool,
  #[serde(default, deserialize_with = "deserialize_flag")]
  pub is_mod: bool,
  #[serde(default)]
  pub link_karma: i64,
  pub name: String,
  #[serde(default, deserialize_with = "deserialize_flag")]
  pub over_18: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StylesheetImage {
  /// The `url(%%name%%)` placeholder to use in the stylesheet.
  pub link: String,
  pub name: String,
  pub url: String,
}

/// A subreddit stylesheet with image links left as placeholders.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StylesheetTemplate {
  #[serde(default)]
  pub images: Vec<StylesheetImage>,
  pub stylesheet: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StylesheetTemplateResponse {
  pub(crate) data: StylesheetTemplate,
  pub(crate) kind: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SubmittedPost {
  #[serde(default, rename = "drafts_count")]
  pub drafts: u64,
  #[serde(default)]
  pub id: String,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub url: String,
}
