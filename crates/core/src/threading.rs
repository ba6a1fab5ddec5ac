//! Response threading: nested reply trees and the reply depth policy.
//!
//! Responses are stored flat with a nullable `parent_id`. Readers get a
//! forest of [`ThreadNode`]s via [`build_thread_tree`]; writers check the
//! depth of a new reply with [`reply_depth`] before inserting it.
//!
//! Tree building never fails. A reply whose parent is not in the input (for
//! example because the parent was deleted) is promoted to a root instead of
//! being dropped. Malformed parent links (self-references, cycles) are
//! resolved the same way, so every input record appears exactly once in the
//! output.

use std::collections::{HashMap, VecDeque};

use serde::Serialize;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum nesting depth of a reply. Root responses have depth 0.
pub const DEFAULT_MAX_THREAD_DEPTH: i32 = 10;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A record that can be arranged into a reply thread.
pub trait ThreadItem {
    fn id(&self) -> DbId;
    fn parent_id(&self) -> Option<DbId>;
    fn created_at(&self) -> Timestamp;
}

/// One node of a reply thread.
///
/// The wrapped record is flattened on serialization, so a node renders as the
/// record's own fields plus `depth` and `replies`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreadNode<T> {
    #[serde(flatten)]
    pub item: T,
    /// Number of ancestor hops to the root of this node's tree.
    pub depth: u32,
    /// Direct replies, oldest first.
    pub replies: Vec<ThreadNode<T>>,
}

impl<T> ThreadNode<T> {
    /// Total number of descendants below this node.
    pub fn reply_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&ThreadNode<T>> = self.replies.iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.replies.iter());
        }
        count
    }

    /// Deepest `depth` found in this node's subtree (including itself).
    pub fn max_depth(&self) -> u32 {
        let mut deepest = self.depth;
        let mut stack: Vec<&ThreadNode<T>> = vec![self];
        while let Some(node) = stack.pop() {
            deepest = deepest.max(node.depth);
            stack.extend(node.replies.iter());
        }
        deepest
    }
}

// ---------------------------------------------------------------------------
// Tree building
// ---------------------------------------------------------------------------

/// Arrange a flat list of records into a forest of reply threads.
///
/// Records are stably sorted by `created_at` first, so roots and siblings come
/// out oldest first and records with equal timestamps keep their input order.
///
/// Parent resolution:
/// - no `parent_id`, or a `parent_id` not present in the input: root;
/// - a record whose ancestor chain loops back on itself (including a
///   self-reference): the oldest record of the loop becomes a root;
/// - duplicate ids: all records are kept, replies attach to the oldest one.
pub fn build_thread_tree<T: ThreadItem>(mut items: Vec<T>) -> Vec<ThreadNode<T>> {
    items.sort_by_key(|item| item.created_at());
    let len = items.len();

    let mut index_by_id: HashMap<DbId, usize> = HashMap::with_capacity(len);
    for (idx, item) in items.iter().enumerate() {
        index_by_id.entry(item.id()).or_insert(idx);
    }

    let mut parents: Vec<Option<usize>> = items
        .iter()
        .map(|item| {
            item.parent_id()
                .and_then(|parent_id| index_by_id.get(&parent_id).copied())
        })
        .collect();
    break_cycles(&mut parents);

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); len];
    let mut roots = Vec::new();
    for (idx, parent) in parents.iter().enumerate() {
        match parent {
            Some(parent) => children[*parent].push(idx),
            None => roots.push(idx),
        }
    }

    // Breadth-first walk assigns depths; walking it backwards visits every
    // child before its parent, which lets nodes be assembled by value.
    let mut depths = vec![0u32; len];
    let mut order = Vec::with_capacity(len);
    let mut queue: VecDeque<usize> = roots.iter().copied().collect();
    while let Some(idx) = queue.pop_front() {
        order.push(idx);
        for &child in &children[idx] {
            depths[child] = depths[idx] + 1;
            queue.push_back(child);
        }
    }

    let mut pending: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let mut built: Vec<Option<ThreadNode<T>>> = (0..len).map(|_| None).collect();
    for &idx in order.iter().rev() {
        let replies = children[idx]
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();
        if let Some(item) = pending[idx].take() {
            built[idx] = Some(ThreadNode {
                item,
                depth: depths[idx],
                replies,
            });
        }
    }

    roots
        .into_iter()
        .filter_map(|idx| built[idx].take())
        .collect()
}

#[derive(Clone, Copy, PartialEq)]
enum Visit {
    New,
    OnPath,
    Done,
}

/// Detach one record from every parent-link loop so that all chains end at a
/// root. Indices are in chronological order, so the smallest index on a loop
/// is its oldest record.
fn break_cycles(parents: &mut [Option<usize>]) {
    let mut visits = vec![Visit::New; parents.len()];
    let mut path = Vec::new();

    for start in 0..parents.len() {
        if visits[start] != Visit::New {
            continue;
        }
        path.clear();
        let mut current = Some(start);
        while let Some(idx) = current {
            match visits[idx] {
                Visit::Done => break,
                Visit::OnPath => {
                    if let Some(pos) = path.iter().position(|&p| p == idx) {
                        if let Some(&oldest) = path[pos..].iter().min() {
                            parents[oldest] = None;
                        }
                    }
                    break;
                }
                Visit::New => {
                    visits[idx] = Visit::OnPath;
                    path.push(idx);
                    current = parents[idx];
                }
            }
        }
        for &idx in &path {
            visits[idx] = Visit::Done;
        }
    }
}

// ---------------------------------------------------------------------------
// Traversal helpers
// ---------------------------------------------------------------------------

/// Total number of nodes in a forest.
pub fn count_nodes<T>(roots: &[ThreadNode<T>]) -> usize {
    roots.iter().map(|root| 1 + root.reply_count()).sum()
}

/// Flatten a forest into display order (pre-order, oldest first) paired with
/// each node's depth.
pub fn flatten_thread<T>(roots: &[ThreadNode<T>]) -> Vec<(u32, &T)> {
    let mut out = Vec::new();
    let mut stack: Vec<&ThreadNode<T>> = roots.iter().rev().collect();
    while let Some(node) = stack.pop() {
        out.push((node.depth, &node.item));
        stack.extend(node.replies.iter().rev());
    }
    out
}

// ---------------------------------------------------------------------------
// Depth policy
// ---------------------------------------------------------------------------

/// Depth of a new reply under a parent at `parent_depth`.
///
/// Fails with a validation error when the reply would be nested deeper than
/// `max_depth`.
pub fn reply_depth(parent_depth: i32, max_depth: i32) -> Result<i32, CoreError> {
    let depth = parent_depth + 1;
    if depth > max_depth {
        return Err(CoreError::Validation(format!(
            "Thread depth limit exceeded: replies can be nested at most {max_depth} levels deep"
        )));
    }
    Ok(depth)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
