use {
  anyhow::Context,
  arguments::Arguments,
  clap::{Parser, ValueEnum},
  crossterm::style::Stylize,
  futures::stream::{self, StreamExt},
  reddit_client::{
    Client, CommentNode, Credentials, DecodeMode, ErrorRelay, MoreComments,
    Post, Report, ScoreOrder,
  },
  render::render_thread,
  std::{
    backtrace::BacktraceStatus,
    io::{self, IsTerminal},
    process,
  },
  tokio::{sync::mpsc::UnboundedReceiver, task::JoinHandle},
  tracing::{error, subscriber::DefaultGuard, warn},
  tracing_subscriber::{EnvFilter, fmt, prelude::*},
};

mod arguments;
mod render;

const CONCURRENT_FETCHES: usize = 4;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

/// Logs in, and starts report delivery when a recipient is configured.
async fn connect(
  arguments: &Arguments,
  reports: Option<UnboundedReceiver<Report>>,
) -> Result<(Client, Option<JoinHandle<()>>)> {
  let mut client = Client::new(arguments.credentials());

  client
    .login(&arguments.password)
    .await
    .with_context(|| format!("could not log in as {}", arguments.username))?;

  let delivery = match (&arguments.report_to, reports) {
    (Some(recipient), Some(reports)) => Some(
      ErrorRelay::spawn_delivery(client.clone(), recipient, reports)
        .context("could not start error reporting")?,
    ),
    _ => None,
  };

  Ok((client, delivery))
}

/// Relays a fatal error, then closes the report channel and waits for
/// delivery to drain it.
async fn finish(
  result: Result,
  guard: DefaultGuard,
  delivery: Option<JoinHandle<()>>,
) -> Result {
  let Some(delivery) = delivery else {
    return result;
  };

  if let Err(error) = &result {
    error!("{error:#}");
  }

  drop(guard);

  let delivered = delivery.await.context("error reporting task failed");

  result.and(delivered)
}

async fn print_threads(arguments: &Arguments, client: &Client) -> Result {
  let mode = arguments.mode();

  let threads = stream::iter(&arguments.urls)
    .map(|url| async move {
      client
        .thread(url, mode)
        .await
        .with_context(|| format!("could not fetch thread {url}"))
    })
    .buffered(CONCURRENT_FETCHES)
    .collect::<Vec<_>>()
    .await;

  let mut posts = Vec::new();

  for thread in threads {
    let (mut post, dropped) = thread?;

    for error in dropped {
      warn!(post = %post.info.name, %error, "dropped reply");
    }

    if let Some(order) = arguments.score_order() {
      post.sort_replies_by_score(order);
    }

    posts.push(post);
  }

  if arguments.json {
    println!("{}", serde_json::to_string_pretty(&posts)?);
  } else {
    let rendered = posts
      .iter()
      .map(|post| render_thread(post, arguments.width))
      .collect::<Vec<_>>();

    println!("{}", rendered.join("\n\n"));
  }

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  let (relay, reports) = arguments
    .report_to
    .as_ref()
    .map(|_| ErrorRelay::new(&arguments.bot_name))
    .unzip();

  let guard = tracing_subscriber::registry()
    .with(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with(fmt::layer().with_writer(io::stderr))
    .with(relay)
    .set_default();

  let (result, delivery) = match connect(&arguments, reports).await {
    Ok((client, delivery)) => {
      (print_threads(&arguments, &client).await, delivery)
    }
    Err(error) => (Err(error), None),
  };

  finish(result, guard, delivery).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    std::sync::{Arc, Mutex},
  };

  fn relay() -> (DefaultGuard, JoinHandle<()>, Arc<Mutex<Vec<String>>>) {
    let (relay, mut reports) = ErrorRelay::new("modbot");

    let guard = tracing_subscriber::registry().with(relay).set_default();

    let subjects = Arc::new(Mutex::new(Vec::new()));

    let delivery = tokio::spawn({
      let subjects = subjects.clone();

      async move {
        while let Some(report) = reports.recv().await {
          subjects.lock().unwrap().push(report.subject);
        }
      }
    });

    (guard, delivery, subjects)
  }

  #[tokio::test]
  async fn fatal_error_is_delivered_before_exit() {
    let (guard, delivery, subjects) = relay();

    warn!("queued earlier");

    let result =
      finish(Err(anyhow::anyhow!("boom")), guard, Some(delivery)).await;

    assert_eq!(result.unwrap_err().to_string(), "boom");

    assert_eq!(
      *subjects.lock().unwrap(),
      ["WARN in modbot: queued earlier", "ERROR in modbot: boom"]
    );
  }

  #[tokio::test]
  async fn success_drains_queued_reports() {
    let (guard, delivery, subjects) = relay();

    warn!("dropped reply");

    finish(Ok(()), guard, Some(delivery)).await.unwrap();

    assert_eq!(*subjects.lock().unwrap(), ["WARN in modbot: dropped reply"]);
  }

  #[tokio::test]
  async fn without_delivery_the_result_is_returned() {
    let guard = tracing_subscriber::registry().set_default();

    assert!(finish(Err(anyhow::anyhow!("boom")), guard, None).await.is_err());
  }
}
