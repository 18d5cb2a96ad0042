use super::*;

const BASE_INDENT: &str = " ";

const DEPTH_INDENT: &str = "  ";

fn comment_lines(node: &CommentNode, depth: usize, width: usize) -> Vec<String> {
  let indent = format!("{BASE_INDENT}{}", DEPTH_INDENT.repeat(depth));

  let info = &node.comment.info;

  let mut lines = vec![format!(
    "{indent}{} by {} at {}",
    format_points(info.score),
    info.author,
    info.created_utc
  )];

  let wrap_width = width.saturating_sub(indent.chars().count()).max(1);

  for paragraph in node.comment.body.lines() {
    for line in wrap_text(paragraph, wrap_width) {
      lines.push(format!("{indent}{line}"));
    }
  }

  lines.push(String::new());

  for reply in &node.replies {
    lines.extend(comment_lines(reply, depth + 1, width));
  }

  if let Some(more) = &node.more {
    lines.push(more_line(more, depth + 1));
  }

  lines
}

pub(crate) fn format_points(score: i64) -> String {
  match score {
    1 => "1 point".to_string(),
    _ => format!("{score} points"),
  }
}

fn more_line(more: &MoreComments, depth: usize) -> String {
  let count = more.count.max(more.children.len() as u64);

  format!(
    "{BASE_INDENT}{}[{count} more {}]",
    DEPTH_INDENT.repeat(depth),
    if count == 1 { "reply" } else { "replies" }
  )
}

/// Renders a post and its loaded comments as an indented plain text tree.
pub(crate) fn render_thread(post: &Post, width: usize) -> String {
  let info = &post.info;

  let mut lines = vec![
    post.title.clone(),
    format!(
      "{} by {} in r/{} at {}",
      format_points(info.score),
      info.author,
      info.subreddit,
      info.created_utc
    ),
    format!(
      "{} comments, {} loaded",
      post.comment_count,
      post.comment_count_loaded()
    ),
  ];

  if !post.is_self {
    lines.push(post.url.clone());
  }

  lines.push(String::new());

  for paragraph in post.body.lines() {
    lines.extend(wrap_text(paragraph, width.max(1)));
  }

  if !post.body.is_empty() {
    lines.push(String::new());
  }

  for node in &post.replies {
    lines.extend(comment_lines(node, 0, width));
  }

  if let Some(more) = &post.more {
    lines.push(more_line(more, 0));
  }

  lines.join("\n")
}

pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  if text.is_empty() {
    return Vec::new();
  }

  let mut lines = Vec::new();
  let mut current = String::new();
  let mut current_width = 0;

  for word in text.split_whitespace() {
    let word_width = word.chars().count();

    if current.is_empty() {
      current.push_str(word);
      current_width = word_width;
    } else if current_width + 1 + word_width <= width {
      current.push(' ');
      current.push_str(word);
      current_width += 1 + word_width;
    } else {
      lines.push(current);
      current = word.to_string();
      current_width = word_width;
    }
  }

  if !current.is_empty() {
    lines.push(current);
  }

  lines
}

#[cfg(test)]
mod tests {
  use {super::*, reddit_client::decode_thread, serde_json::json};

  fn thread() -> Post {
    let body = json!([
      {"kind": "Listing", "data": {"children": [{"kind": "t3", "data": {
        "id": "p", "name": "t3_p", "author": "op", "subreddit": "rust",
        "subreddit_id": "t5_1", "created_utc": 1622548800.0, "score": 1,
        "title": "Weekly thread", "url": "https://example.com/a",
        "is_self": false, "selftext": "", "num_comments": 4
      }}]}},
      {"kind": "Listing", "data": {"children": [
        {"kind": "t1", "data": {
          "id": "c1", "name": "t1_c1", "author": "alice",
          "subreddit": "rust", "subreddit_id": "t5_1",
          "created_utc": 1622548800.0, "score": 3,
          "body": "first reply with enough words to wrap", "parent_id": "t3_p",
          "replies": {"kind": "Listing", "data": {"children": [
            {"kind": "t1", "data": {
              "id": "c2", "name": "t1_c2", "author": "bob",
              "subreddit": "rust", "subreddit_id": "t5_1",
              "created_utc": 1622548800.0, "score": -2,
              "body": "nested", "parent_id": "t1_c1", "replies": ""
            }}
          ]}}
        }},
        {"kind": "more", "data": {
          "count": 2, "children": ["c3", "c4"], "parent_id": "t3_p"
        }}
      ]}}
    ]);

    decode_thread(body.to_string().as_bytes()).unwrap()
  }

  #[test]
  fn format_points_handles_singular_and_plural() {
    assert_eq!(format_points(1), "1 point");
    assert_eq!(format_points(0), "0 points");
    assert_eq!(format_points(-4), "-4 points");
  }

  #[test]
  fn wrap_text_returns_empty_for_empty_input() {
    assert_eq!(wrap_text("", 10), Vec::<String>::new());
  }

  #[test]
  fn wrap_text_wraps_longer_text() {
    assert_eq!(
      wrap_text("hello brave new world", 11),
      vec!["hello brave".to_string(), "new world".to_string()]
    );
  }

  #[test]
  fn thread_renders_header_and_nested_comments() {
    let rendered = render_thread(&thread(), 20);

    let lines = rendered.lines().collect::<Vec<_>>();

    assert_eq!(lines[0], "Weekly thread");
    assert_eq!(lines[1], "1 point by op in r/rust at 2021-06-01 12:00:00 UTC");
    assert_eq!(lines[2], "4 comments, 2 loaded");
    assert_eq!(lines[3], "https://example.com/a");
    assert_eq!(lines[4], "");
    assert_eq!(lines[5], " 3 points by alice at 2021-06-01 12:00:00 UTC");
    assert_eq!(lines[6], " first reply with");
    assert_eq!(lines[7], " enough words to");
    assert_eq!(lines[8], " wrap");
    assert_eq!(lines[9], "");
    assert_eq!(lines[10], "   -2 points by bob at 2021-06-01 12:00:00 UTC");
    assert_eq!(lines[11], "   nested");
    assert_eq!(lines[12], "");
    assert_eq!(lines[13], " [2 more replies]");
  }
}
