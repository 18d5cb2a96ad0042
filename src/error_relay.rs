//! Forwards warnings and errors logged anywhere in the process to a reddit
//! inbox.
//!
//! [`ErrorRelay`] is a [`Layer`] that turns each qualifying event into a
//! [`Report`] and pushes it down an unbounded channel. Delivery happens on a
//! separate task, so logging never waits on the network.

use super::*;

const SUBJECT_MAX_CHARS: usize = 40;

const TIME_FORMAT: &str = "%a %-d %b %Y, %H:%M:%S";

#[derive(Clone, Debug)]
pub struct ErrorRelay {
  bot_name: String,
  sender: UnboundedSender<Report>,
  threshold: Level,
}

impl ErrorRelay {
  pub fn new(bot_name: &str) -> (Self, UnboundedReceiver<Report>) {
    let (sender, receiver) = mpsc::unbounded_channel();

    (
      Self {
        bot_name: bot_name.to_string(),
        sender,
        threshold: Level::WARN,
      },
      receiver,
    )
  }

  /// Sends every report to `recipient` through `client` until all relays
  /// are dropped.
  ///
  /// A bare username gets a `/u/` prefix. Names that already start with
  /// `/u/` or `/r/` are used as given.
  pub fn spawn_delivery(
    client: Client,
    recipient: &str,
    mut reports: UnboundedReceiver<Report>,
  ) -> Result<tokio::task::JoinHandle<()>> {
    let recipient = recipient.trim();

    if recipient.is_empty() {
      return Err(Error::MissingRecipient);
    }

    let recipient = if recipient.starts_with("/u/")
      || recipient.starts_with("/r/")
    {
      recipient.to_string()
    } else {
      format!("/u/{recipient}")
    };

    Ok(tokio::spawn(async move {
      while let Some(report) = reports.recv().await {
        if let Err(error) = client
          .compose_message(&recipient, &report.subject, &report.body)
          .await
        {
          warn!(%error, %recipient, "could not deliver error report");
        }
      }
    }))
  }

  /// Relays events at `level` or more severe. Defaults to `WARN`.
  #[must_use]
  pub fn threshold(mut self, level: Level) -> Self {
    self.threshold = level;
    self
  }
}

impl<S: Subscriber> Layer<S> for ErrorRelay {
  fn on_event(&self, event: &Event<'_>, _context: Context<'_, S>) {
    let metadata = event.metadata();

    if *metadata.level() > self.threshold {
      return;
    }

    // Delivery failures are logged from here and must not loop back.
    if metadata.target() == module_path!() {
      return;
    }

    let mut collector = FieldCollector::default();

    event.record(&mut collector);

    let caller = metadata.module_path().map(|module| Caller {
      file: metadata.file().unwrap_or("<unknown>"),
      line: metadata.line().unwrap_or_default(),
      module,
    });

    let report = Report::new(
      &self.bot_name,
      *metadata.level(),
      &collector,
      caller,
      Utc::now(),
    );

    let _ = self.sender.send(report);
  }
}

#[derive(Debug, Default)]
struct FieldCollector {
  fields: Vec<(&'static str, String)>,
  message: String,
}

impl FieldCollector {
  fn push(&mut self, field: &Field, value: String) {
    if field.name() == "message" {
      self.message = value;
    } else {
      self.fields.push((field.name(), value));
    }
  }
}

impl Visit for FieldCollector {
  fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
    self.push(field, format!("{value:?}"));
  }

  fn record_str(&mut self, field: &Field, value: &str) {
    self.push(field, value.to_string());
  }
}

#[derive(Clone, Copy, Debug)]
struct Caller<'a> {
  file: &'a str,
  line: u32,
  module: &'a str,
}

/// A message ready to be sent to the report recipient.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
  pub body: String,
  pub subject: String,
}

impl Report {
  fn new(
    bot_name: &str,
    level: Level,
    fields: &FieldCollector,
    caller: Option<Caller<'_>>,
    time: DateTime<Utc>,
  ) -> Self {
    let subject = truncate(
      &format!("{level} in {bot_name}: {}", fields.message),
      SUBJECT_MAX_CHARS,
    );

    let mut body = String::new();

    let _ = writeln!(body, "Time: {}", time.format(TIME_FORMAT));
    let _ = writeln!(body);
    let _ = writeln!(body, "Message: {}", fields.message);

    if !fields.fields.is_empty() {
      let data = fields
        .fields
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join(", ");

      let _ = writeln!(body);
      let _ = writeln!(body, "Data: {data}");
    }

    let _ = writeln!(body);

    match caller {
      Some(Caller { file, line, module }) => {
        let _ = write!(
          body,
          "Calling Function: '{module}', '{file}' line {line}"
        );
      }
      None => {
        body.push_str("No information available about the calling function.");
      }
    }

    Self { body, subject }
  }
}
