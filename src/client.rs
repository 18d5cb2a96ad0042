use super::*;

/// The application and account a [`Client`] acts for.
#[derive(Clone, Debug)]
pub struct Credentials {
  pub client_id: String,
  pub client_secret: String,
  pub user_agent: String,
  pub username: String,
}

#[derive(Clone, Debug)]
pub struct Client {
  client: reqwest::Client,
  credentials: Credentials,
  token: Option<Token>,
}

impl Client {
  fn authorize(
    &self,
    request: RequestBuilder,
    url: &Url,
    now: DateTime<Utc>,
  ) -> Result<RequestBuilder> {
    let request = request
      .header(reqwest::header::USER_AGENT, &self.credentials.user_agent);

    match url.host_str() {
      Some(OAUTH_HOST) => {
        let token = self.token.as_ref().ok_or(Error::MissingToken)?;

        if token.is_expired_at(now) {
          return Err(Error::TokenExpired {
            expiry: token.expiry,
          });
        }

        Ok(request.bearer_auth(&token.access_token))
      }
      Some(WWW_HOST) => Ok(request.basic_auth(
        &self.credentials.client_id,
        Some(&self.credentials.client_secret),
      )),
      _ => Ok(request),
    }
  }

  pub async fn compose_message(
    &self,
    to: &str,
    subject: &str,
    text: &str,
  ) -> Result {
    let url = Endpoint::ComposeMessage.url()?;

    let body = self
      .post_form(
        &url,
        &[
          ("api_type", "json"),
          ("subject", subject),
          ("text", text),
          ("to", to),
        ],
      )
      .await?;

    Self::decode::<JsonResponse<serde_json::Value>>(&body, &url)?
      .into_data()?;

    Ok(())
  }

  fn decode<T: DeserializeOwned>(body: &[u8], url: &Url) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| Error::MalformedResponse {
      source,
      url: url.to_string(),
    })
  }

  /// Sends an authorized GET and returns the body of a successful response.
  pub async fn get(
    &self,
    url: &Url,
    query: &[(&str, &str)],
  ) -> Result<Vec<u8>> {
    let request = self.client.get(url.clone()).query(query);

    let request = self.authorize(request, url, Utc::now())?;

    self.send(request, url).await
  }

  /// Exchanges the account password for an access token.
  pub async fn login(&mut self, password: &str) -> Result {
    let url = Endpoint::AccessToken.url()?;

    let body = self
      .post_form(
        &url,
        &[
          ("grant_type", "password"),
          ("password", password),
          ("username", self.credentials.username.as_str()),
        ],
      )
      .await?;

    let token =
      Self::decode::<TokenResponse>(&body, &url)?.into_token(Utc::now())?;

    debug!(
      username = %self.credentials.username,
      scope = %token.scope,
      expiry = %token.expiry,
      "logged in"
    );

    self.token = Some(token);

    Ok(())
  }

  pub async fn me(&self) -> Result<Account> {
    let url = Endpoint::Me.url()?;

    let body = self.get(&url, &[]).await?;

    Self::decode::<ApiStatus>(&body, &url)?.check()?;

    Self::decode(&body, &url)
  }

  pub fn new(credentials: Credentials) -> Self {
    Self {
      client: reqwest::Client::new(),
      credentials,
      token: None,
    }
  }

  /// Sends an authorized form-encoded POST and returns the body of a
  /// successful response.
  pub async fn post_form(
    &self,
    url: &Url,
    form: &[(&str, &str)],
  ) -> Result<Vec<u8>> {
    let request = self.client.post(url.clone()).form(form);

    let request = self.authorize(request, url, Utc::now())?;

    self.send(request, url).await
  }

  /// Removes a post or comment as a moderator, optionally marking it as
  /// spam.
  pub async fn remove_post(&self, name: &str, spam: bool) -> Result {
    let url = Endpoint::RemovePost.url()?;

    let body = self
      .post_form(
        &url,
        &[("id", name), ("spam", if spam { "true" } else { "false" })],
      )
      .await?;

    Self::decode::<ApiStatus>(&body, &url)?.check()
  }

  async fn send(&self, request: RequestBuilder, url: &Url) -> Result<Vec<u8>> {
    debug!(%url, "sending request");

    let http = |source| Error::Http {
      source,
      url: url.to_string(),
    };

    let response = request.send().await.map_err(http)?;

    let status = response.status();

    let body = response.bytes().await.map_err(http)?;

    debug!(%url, %status, bytes = body.len(), "received response");

    trace!(body = %String::from_utf8_lossy(&body), "response body");

    if !status.is_success() {
      return Err(Error::Status {
        status,
        url: url.to_string(),
      });
    }

    Ok(body.to_vec())
  }

  pub async fn set_contest_mode(&self, name: &str, state: bool) -> Result {
    let url = Endpoint::ContestMode.url()?;

    let body = self
      .post_form(
        &url,
        &[
          ("api_type", "json"),
          ("id", name),
          ("state", if state { "true" } else { "false" }),
        ],
      )
      .await?;

    Self::decode::<JsonResponse<serde_json::Value>>(&body, &url)?
      .into_data()?;

    Ok(())
  }

  /// Stickies or unstickies a post. `slot` picks one of the four sticky
  /// positions and is ignored when unstickying or out of range.
  pub async fn set_sticky(
    &self,
    subreddit: &str,
    name: &str,
    state: bool,
    slot: Option<u8>,
  ) -> Result {
    let url = Endpoint::Sticky.url()?;

    let slot = slot
      .filter(|slot| state && (1..=4).contains(slot))
      .map(|slot| slot.to_string());

    let mut form = vec![
      ("api_type", "json"),
      ("id", name),
      ("r", subreddit),
      ("state", if state { "true" } else { "false" }),
    ];

    if let Some(slot) = &slot {
      form.push(("num", slot.as_str()));
    }

    let body = self.post_form(&url, &form).await?;

    Self::decode::<JsonResponse<serde_json::Value>>(&body, &url)?
      .into_data()?;

    Ok(())
  }

  pub async fn set_stylesheet(
    &self,
    subreddit: &str,
    stylesheet: &str,
    reason: &str,
  ) -> Result {
    let url = Endpoint::SetStylesheet(subreddit).url()?;

    let body = self
      .post_form(
        &url,
        &[
          ("api_type", "json"),
          ("op", "save"),
          ("reason", reason),
          ("stylesheet_contents", stylesheet),
        ],
      )
      .await?;

    Self::decode::<JsonResponse<serde_json::Value>>(&body, &url)?
      .into_data()?;

    Ok(())
  }

  /// The compiled stylesheet of a subreddit.
  pub async fn stylesheet(&self, subreddit: &str) -> Result<String> {
    let url = Endpoint::Stylesheet(subreddit).url()?;

    let body = self.get(&url, &[]).await?;

    Ok(String::from_utf8_lossy(&body).into_owned())
  }

  pub async fn stylesheet_template(
    &self,
    subreddit: &str,
  ) -> Result<StylesheetTemplate> {
    let url = Endpoint::StylesheetTemplate(subreddit).url()?;

    let body = self.get(&url, &[("raw_json", "1")]).await?;

    Self::decode::<ApiStatus>(&body, &url)?.check()?;

    let response = Self::decode::<StylesheetTemplateResponse>(&body, &url)?;

    if response.kind != "stylesheet" {
      return Err(Error::Api {
        message: format!("unexpected kind `{}`", response.kind),
      });
    }

    Ok(response.data)
  }

  pub async fn submit_text_post(
    &self,
    post: &TextPost<'_>,
  ) -> Result<SubmittedPost> {
    let url = Endpoint::Submit.url()?;

    let body = self.post_form(&url, &post.form()).await?;

    Self::decode::<JsonResponse<SubmittedPost>>(&body, &url)?
      .into_data()?
      .filter(|submitted| !submitted.id.is_empty())
      .ok_or_else(|| Error::Api {
        message: "submission returned an empty post id".into(),
      })
  }

  /// Fetches a post and its full comment forest.
  ///
  /// In tolerant mode the second element holds the errors of replies that
  /// were dropped. It is always empty in strict mode.
  pub async fn thread(
    &self,
    link: &str,
    mode: DecodeMode,
  ) -> Result<(Post, Vec<Error>)> {
    let url = Endpoint::thread(link)?;

    let body = self.get(&url, &[("raw_json", "1")]).await?;

    match mode {
      DecodeMode::Strict => Ok((decode_thread(&body)?, Vec::new())),
      DecodeMode::Tolerant => decode_thread_tolerant(&body),
    }
  }

  pub fn token(&self) -> Option<&Token> {
    self.token.as_ref()
  }

  /// Uses a previously obtained token instead of logging in.
  #[must_use]
  pub fn with_token(mut self, token: Token) -> Self {
    self.token = Some(token);
    self
  }
}

#[cfg(test)]
mod tests {
  use {super::*, reqwest::header};

  fn client() -> Client {
    Client::new(Credentials {
      client_id: "id".into(),
      client_secret: "secret".into(),
      user_agent: "reddit-client-test/0.1".into(),
      username: "bot".into(),
    })
  }

  fn now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
  }

  fn token(expiry: DateTime<Utc>) -> Token {
    Token {
      access_token: "abc".into(),
      expiry,
      scope: "*".into(),
      token_type: "bearer".into(),
    }
  }

  fn authorize(client: &Client, url: &Url) -> Result<reqwest::Request> {
    Ok(
      client
        .authorize(client.client.get(url.clone()), url, now())?
        .build()
        .unwrap(),
    )
  }

  #[test]
  fn oauth_requests_need_a_token() {
    let url = Endpoint::Me.url().unwrap();

    assert!(matches!(
      authorize(&client(), &url),
      Err(Error::MissingToken)
    ));
  }

  #[test]
  fn expired_tokens_are_refused() {
    let client = client().with_token(token(now() - TimeDelta::seconds(1)));

    let url = Endpoint::Me.url().unwrap();

    assert!(matches!(
      authorize(&client, &url),
      Err(Error::TokenExpired { .. })
    ));
  }

  #[test]
  fn oauth_requests_carry_bearer_and_user_agent() {
    let client = client().with_token(token(now() + TimeDelta::hours(1)));

    let request = authorize(&client, &Endpoint::Me.url().unwrap()).unwrap();

    assert_eq!(request.headers()[header::AUTHORIZATION], "Bearer abc");
    assert_eq!(
      request.headers()[header::USER_AGENT],
      "reddit-client-test/0.1"
    );
  }

  #[test]
  fn token_requests_use_basic_auth() {
    let request =
      authorize(&client(), &Endpoint::AccessToken.url().unwrap()).unwrap();

    assert!(
      request.headers()[header::AUTHORIZATION]
        .to_str()
        .unwrap()
        .starts_with("Basic ")
    );
  }

  #[test]
  fn with_token_stores_the_token() {
    assert!(client().token().is_none());

    let client = client().with_token(token(now()));

    assert_eq!(client.token().unwrap().access_token, "abc");
  }
}
