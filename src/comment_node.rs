use super::*;

/// Direction for [`CommentNode::sort_by_score`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScoreOrder {
  Ascending,
  Descending,
}

/// A comment together with the replies that hang off it.
///
/// Each node owns its replies outright. Nodes are decoded from their own
/// payload, so no two nodes share a child.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommentNode {
  pub comment: Comment,
  pub more: Option<MoreComments>,
  pub replies: Vec<CommentNode>,
}

impl CommentNode {
  /// Levels in this subtree, counting this node as one.
  pub fn depth(&self) -> usize {
    1 + self.replies.iter().map(Self::depth).max().unwrap_or(0)
  }

  /// Comments in this subtree, counting this node.
  pub fn size(&self) -> usize {
    1 + self.replies.iter().map(Self::size).sum::<usize>()
  }

  /// Reorders `nodes` and every level below them by score. Ties keep their
  /// listing order.
  pub fn sort_by_score(nodes: &mut [Self], order: ScoreOrder) {
    match order {
      ScoreOrder::Ascending => nodes.sort_by_key(|node| node.comment.info.score),
      ScoreOrder::Descending => {
        nodes.sort_by_key(|node| Reverse(node.comment.info.score));
      }
    }

    for node in nodes {
      Self::sort_by_score(&mut node.replies, order);
    }
  }
}
