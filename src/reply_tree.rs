//! Recursive materialisation of comment replies.
//!
//! A comment's `replies` field holds either `""` for a leaf, or another
//! comment listing. The listing may be nested inline or encoded as a JSON
//! string that has to be parsed a second time. Each level is decoded with
//! ordinary recursion, so stack use grows with thread depth. Reddit caps how
//! deep it nests replies in a single response (deeper threads are cut off
//! with a `more` stub), which keeps that depth small.
//!
//! Raw payloads are never stored on the decoded nodes. Children borrow from
//! their parent's payload while it is being decoded, and a string-encoded
//! listing is dropped as soon as its subtree has been built.

use super::*;

/// How decode failures inside a comment forest are handled.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DecodeMode {
  /// Any failure anywhere aborts the whole decode.
  #[default]
  Strict,
  /// A reply whose own fields or subtree fail to decode is dropped, and its
  /// siblings are kept.
  Tolerant,
}

/// The decoded contents of one comment listing.
#[derive(Debug, Default)]
pub(crate) struct Forest {
  pub(crate) comments: Vec<CommentNode>,
  pub(crate) more: Option<MoreComments>,
}

impl Forest {
  fn push_more(&mut self, more: MoreComments) {
    match &mut self.more {
      Some(existing) => existing.merge(more),
      None => self.more = Some(more),
    }
  }
}

#[derive(Debug)]
pub(crate) struct ReplyTree {
  dropped: Vec<Error>,
  mode: DecodeMode,
}

impl ReplyTree {
  /// Decodes one child of a comment listing into `forest`. Nothing is
  /// added when the child or anything below it fails.
  fn branch(&mut self, child: &RawThing<'_>, forest: &mut Forest) -> Result {
    if Kind::resolve(child.kind.as_deref(), Kind::Comment)? == Kind::More {
      forest.push_more(MoreComments::decode(child.data)?);
      return Ok(());
    }

    let (comment, replies) = Comment::decode(child.data)?;

    let Forest { comments, more } = self.build(replies)?;

    forest.comments.push(CommentNode {
      comment,
      more,
      replies: comments,
    });

    Ok(())
  }

  /// Builds the forest held in a comment's raw `replies` payload.
  pub(crate) fn build(&mut self, replies: Option<&RawValue>) -> Result<Forest> {
    let Some(replies) = replies else {
      return Ok(Forest::default());
    };

    let raw = replies.get();

    if raw == r#""""# {
      return Ok(Forest::default());
    }

    if raw.starts_with('"') {
      let nested = serde_json::from_str::<String>(raw)
        .map_err(|source| Error::MalformedEnvelope { source })?;

      let text = nested.trim();

      if text.is_empty() || text == r#""""# {
        return Ok(Forest::default());
      }

      return self.build_listing(&nested);
    }

    self.build_listing(raw)
  }

  /// Builds every child of a comment listing, in listing order.
  pub(crate) fn build_listing(&mut self, raw: &str) -> Result<Forest> {
    let mut forest = Forest::default();

    for child in unwrap_listing(raw)? {
      match self.branch(&child, &mut forest) {
        Ok(()) => {}
        Err(error) if self.mode == DecodeMode::Tolerant => {
          self.dropped.push(error);
        }
        Err(error) => return Err(error),
      }
    }

    Ok(forest)
  }

  /// Errors for the branches dropped in tolerant mode.
  pub(crate) fn into_dropped(self) -> Vec<Error> {
    self.dropped
  }

  pub(crate) fn new(mode: DecodeMode) -> Self {
    Self {
      dropped: Vec::new(),
      mode,
    }
  }
}
