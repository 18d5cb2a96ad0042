use super::*;

/// Decodes the body of a post's comment page: a post listing holding exactly
/// one post, followed by the listing of its top-level comments.
///
/// Any decode error anywhere in the response fails the whole call.
pub fn decode_thread(body: &[u8]) -> Result<Post> {
  assemble(body, DecodeMode::Strict).map(|(post, _)| post)
}

/// Like [`decode_thread`], but replies that fail to decode are dropped
/// instead of failing the thread. The errors for dropped replies are
/// returned alongside the post.
///
/// The post itself, and the envelopes of both top-level listings, must
/// still decode.
pub fn decode_thread_tolerant(body: &[u8]) -> Result<(Post, Vec<Error>)> {
  assemble(body, DecodeMode::Tolerant)
}

fn assemble(
  body: &[u8],
  mode: DecodeMode,
) -> Result<(Post, Vec<Error>)> {
  let listings = serde_json::from_slice::<Vec<&RawValue>>(body)
    .map_err(|source| Error::MalformedEnvelope { source })?;

  let [post_listing, comment_listing] = listings.as_slice() else {
    return Err(Error::UnexpectedListingCount {
      count: listings.len(),
    });
  };

  let posts = unwrap_listing(post_listing.get())?;

  let [child] = posts.as_slice() else {
    return Err(Error::UnexpectedChildCount { count: posts.len() });
  };

  Kind::resolve(child.kind.as_deref(), Kind::Post)?;

  let mut post = Post::decode(child.data)?;

  let mut tree = ReplyTree::new(mode);

  let Forest { comments, more } = tree.build_listing(comment_listing.get())?;

  post.replies = comments;
  post.more = more;

  Ok((post, tree.into_dropped()))
}
