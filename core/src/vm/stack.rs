use core::fmt;

/// Failures of the bounded operand stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    #[error("Stack overflow: more than {max_size} values")]
    Overflow { max_size: usize },
    #[error("Stack underflow: {needed} value(s) needed, {available} available")]
    Underflow { needed: usize, available: usize },
}

/// A stack with an enforced maximum size.
///
/// # Examples
///
/// ```
/// use kal_core::vm::Stack;
///
/// let mut stack = Stack::new(100);
/// stack.push(42).unwrap();
/// stack.push(17).unwrap();
/// assert_eq!(stack.pop(), Ok(17));
/// assert_eq!(stack.peek(), Ok(&42));
/// assert_eq!(stack.len(), 1);
/// ```
pub struct Stack<T> {
    items: Vec<T>,
    max_size: usize,
}

impl<T> Stack<T> {
    /// Creates a new stack with the specified maximum size.
    ///
    /// Pre-allocates at most 256 slots.
    pub fn new(max_size: usize) -> Self {
        Self {
            items: Vec::with_capacity(max_size.min(256)),
            max_size,
        }
    }

    /// Pushes a value, failing if the stack is already full.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.items.len() >= self.max_size {
            return Err(StackError::Overflow {
                max_size: self.max_size,
            });
        }
        self.items.push(value);
        Ok(())
    }

    /// Removes and returns the top value.
    #[inline]
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Underflow {
            needed: 1,
            available: 0,
        })
    }

    /// Returns a reference to the top value without removing it.
    #[inline]
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::Underflow {
            needed: 1,
            available: 0,
        })
    }

    /// Pops the top two values, top first.
    ///
    /// Fails without touching the stack if fewer than two are present.
    pub fn pop_pair(&mut self) -> Result<(T, T), StackError> {
        if self.items.len() < 2 {
            return Err(StackError::Underflow {
                needed: 2,
                available: self.items.len(),
            });
        }
        let top = self.pop()?;
        let below = self.pop()?;
        Ok((top, below))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the maximum number of values the stack will hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.max_size
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("items", &self.items)
            .field("len", &self.items.len())
            .field("max_size", &self.max_size)
            .finish()
    }
}
