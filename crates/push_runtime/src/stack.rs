//! Typed LIFO stacks.
//!
//! Items are stored bottom-first in a `Vec`; "depth" always counts from the
//! top, so depth 0 is the item `peek` returns. Every operation is total:
//! an empty stack answers `None`, and operations that need more items than
//! are present leave the stack untouched.

use std::fmt;

#[derive(Clone, PartialEq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Clone> Stack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Item at `depth` from the top, without clamping.
    pub fn get(&self, depth: usize) -> Option<&T> {
        let len = self.items.len();
        if depth >= len {
            return None;
        }
        self.items.get(len - 1 - depth)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn dup(&mut self) {
        if let Some(top) = self.items.last().cloned() {
            self.items.push(top);
        }
    }

    pub fn swap(&mut self) {
        let len = self.items.len();
        if len >= 2 {
            self.items.swap(len - 1, len - 2);
        }
    }

    /// Pull the third item to the top: bottom-to-top `[a, b, c]` becomes
    /// `[b, c, a]`.
    pub fn rot(&mut self) {
        let len = self.items.len();
        if len >= 3 {
            self.items[len - 3..].rotate_left(1);
        }
    }

    pub fn flush(&mut self) {
        self.items.clear();
    }

    /// Clamp a signed depth into `[0, max]`.
    fn clamp_depth(depth: i64, max: usize) -> usize {
        depth.clamp(0, max as i64) as usize
    }

    /// Insert `item` so that it ends up at `depth` from the top. Depths past
    /// the bottom insert at the bottom; negative depths insert at the top.
    pub fn shove(&mut self, item: T, depth: i64) {
        let len = self.items.len();
        let depth = Self::clamp_depth(depth, len);
        self.items.insert(len - depth, item);
    }

    /// Move the item at `depth` (clamped to the stack) to the top.
    pub fn yank(&mut self, depth: i64) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let depth = Self::clamp_depth(depth, len - 1);
        let item = self.items.remove(len - 1 - depth);
        self.items.push(item);
    }

    /// Copy the item at `depth` (clamped to the stack) to the top.
    pub fn yank_dup(&mut self, depth: i64) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let depth = Self::clamp_depth(depth, len - 1);
        let item = self.items[len - 1 - depth].clone();
        self.items.push(item);
    }

    /// Items from the top down.
    pub fn iter_top_down(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }

    /// Items from the bottom up, matching the order they were pushed.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    /// Builds a stack whose last element is the top.
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
