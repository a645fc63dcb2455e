use std::collections::vec_deque::{self, VecDeque};

/// Stack structure for the VM.
/// The front of the deque is the top of the stack; it has no fixed capacity.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stack {
    data: VecDeque<i64>,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            data: VecDeque::new(),
        }
    }

    /// Push a value onto the top of the stack.
    #[inline]
    pub fn push_front(&mut self, value: i64) {
        self.data.push_front(value);
    }

    /// Remove the top value, if any.
    #[inline]
    pub fn pop_front(&mut self) -> Option<i64> {
        self.data.pop_front()
    }

    #[inline]
    pub fn peek_top(&self) -> Option<i64> {
        self.data.front().copied()
    }

    #[inline]
    pub fn peek_second(&self) -> Option<i64> {
        self.data.get(1).copied()
    }

    /// Mutable access to the top value (used to store arithmetic results in place).
    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut i64> {
        self.data.front_mut()
    }

    /// Swap the values of the top two elements. Does nothing on a shorter stack.
    pub fn swap_top(&mut self) {
        if self.data.len() >= 2 {
            self.data.swap(0, 1);
        }
    }

    /// Move the top value to the bottom.
    pub fn rotate_left(&mut self) {
        if self.data.len() >= 2 {
            self.data.rotate_left(1);
        }
    }

    /// Move the bottom value to the top.
    pub fn rotate_right(&mut self) {
        if self.data.len() >= 2 {
            self.data.rotate_right(1);
        }
    }

    /// Walk the stack from top to bottom. Each call starts a fresh traversal.
    pub fn iter(&self) -> vec_deque::Iter<'_, i64> {
        self.data.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drop every element. Safe to call on an empty stack.
    pub fn release_all(&mut self) {
        self.data.clear();
        self.data.shrink_to_fit();
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a i64;
    type IntoIter = vec_deque::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<i64> for Stack {
    /// Build a stack from values listed top first.
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Stack {
            data: iter.into_iter().collect(),
        }
    }
}

// VM stack inspection methods
use super::VM;

impl VM {
    /// Borrow the operand stack.
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Helper for testing to inspect the top of the stack without popping.
    pub fn peek_stack(&self) -> Option<i64> {
        self.stack.peek_top()
    }

    /// Snapshot of the stack, top first.
    pub fn stack_values(&self) -> Vec<i64> {
        self.stack.iter().copied().collect()
    }

    /// Release every stack element. Called once when a run ends, on success or failure.
    pub fn release_stack(&mut self) {
        self.stack.release_all();
    }
}
