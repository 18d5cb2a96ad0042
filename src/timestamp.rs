use super::*;

/// A point in time decoded from reddit's epoch-seconds fields.
///
/// Unset times are sometimes sent as `false` rather than `null` or `0`
/// (`edited` on a comment that was never edited, for example). Those decode
/// to the zero value, the Unix epoch, instead of failing.
#[derive(
  Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
  pub fn as_datetime(&self) -> DateTime<Utc> {
    self.0
  }

  /// Decodes the raw JSON text of a timestamp field.
  ///
  /// Boolean literals are tried first and yield the zero timestamp. Anything
  /// else must parse as a float number of seconds, with the fractional part
  /// discarded.
  pub fn from_raw(raw: &[u8]) -> Result<Self> {
    let malformed = || Error::MalformedScalar {
      raw: String::from_utf8_lossy(raw).into_owned(),
    };

    let text = str::from_utf8(raw).map_err(|_| malformed())?.trim();

    if text.parse::<bool>().is_ok() {
      return Ok(Self::default());
    }

    let seconds = text.parse::<f64>().map_err(|_| malformed())?;

    Self::from_seconds(seconds).ok_or_else(malformed)
  }

  #[allow(clippy::cast_possible_truncation)]
  fn from_seconds(seconds: f64) -> Option<Self> {
    if !seconds.is_finite() {
      return None;
    }

    Self::from_unix(seconds.trunc() as i64)
  }

  pub fn from_unix(seconds: i64) -> Option<Self> {
    DateTime::from_timestamp(seconds, 0).map(Self)
  }

  pub fn is_zero(&self) -> bool {
    *self == Self::default()
  }

  pub fn unix(&self) -> i64 {
    self.0.timestamp()
  }
}

impl<'de> Deserialize<'de> for Timestamp {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let raw = Box::<RawValue>::deserialize(deserializer)?;

    Self::from_raw(raw.get().as_bytes()).map_err(de::Error::custom)
  }
}

impl Display for Timestamp {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S UTC"))
  }
}
