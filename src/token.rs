use super::*;

/// An OAuth access token and the moment it stops being valid.
#[derive(Clone)]
pub struct Token {
  pub access_token: String,
  pub expiry: DateTime<Utc>,
  pub scope: String,
  pub token_type: String,
}

impl Token {
  pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
    now > self.expiry
  }
}

impl Debug for Token {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.debug_struct("Token")
      .field("access_token", &"<redacted>")
      .field("expiry", &self.expiry)
      .field("scope", &self.scope)
      .field("token_type", &self.token_type)
      .finish()
  }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
  #[serde(default)]
  access_token: String,
  #[serde(default)]
  error: Option<String>,
  /// Lifetime in seconds.
  #[serde(default)]
  expires_in: i64,
  #[serde(default)]
  scope: String,
  #[serde(default)]
  token_type: String,
}

impl TokenResponse {
  pub(crate) fn into_token(self, issued_at: DateTime<Utc>) -> Result<Token> {
    if let Some(message) = self.error {
      return Err(Error::Api { message });
    }

    if self.access_token.is_empty() {
      return Err(Error::Api {
        message: "blank access token".into(),
      });
    }

    let lifetime =
      TimeDelta::try_seconds(self.expires_in).unwrap_or(TimeDelta::zero());

    Ok(Token {
      access_token: self.access_token,
      expiry: issued_at + lifetime,
      scope: self.scope,
      token_type: self.token_type,
    })
  }
}
