// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Display, Error, Formatter};

use crate::error::StackError;
use crate::slots::Slots;

/// The capacity of a stack constructed with [`ArrayStack::new()`][new].
///
/// [new]: struct.ArrayStack.html#method.new
pub const DEFAULT_CAPACITY: usize = 10;

/// A last in, first out stack backed by an array of fixed capacity.
///
/// The backing array is allocated once, at construction time, and never
/// grows. Pushing onto a full stack fails with
/// [`StackError::CapacityExceeded`][CapacityExceeded] instead.
///
/// # Example
///
/// ```rust
/// # use arraystack::{ArrayStack, StackError};
/// let mut stack = ArrayStack::with_capacity(3)?;
/// stack.push(1)?;
/// stack.push(2)?;
/// stack.push(3)?;
/// assert_eq!("[1, 2, 3]", stack.to_string());
/// assert_eq!(Ok(3), stack.pop());
/// assert_eq!("[1, 2]", stack.to_string());
/// # Ok::<(), StackError>(())
/// ```
///
/// [CapacityExceeded]: enum.StackError.html#variant.CapacityExceeded
#[derive(Clone)]
pub struct ArrayStack<A> {
    size: usize,
    slots: Box<[Option<A>]>,
}

impl<A> ArrayStack<A> {
    /// Construct an empty stack with a capacity of
    /// [`DEFAULT_CAPACITY`][DEFAULT_CAPACITY].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arraystack::ArrayStack;
    /// let stack: ArrayStack<usize> = ArrayStack::new();
    /// assert!(stack.is_empty());
    /// assert_eq!(10, stack.capacity());
    /// ```
    ///
    /// [DEFAULT_CAPACITY]: constant.DEFAULT_CAPACITY.html
    pub fn new() -> Self {
        Self::allocate(DEFAULT_CAPACITY)
    }

    /// Construct an empty stack which can hold up to `capacity` values.
    ///
    /// The backing array is allocated up front. A `capacity` of zero is
    /// rejected with [`StackError::InvalidArgument`][InvalidArgument].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arraystack::{ArrayStack, StackError};
    /// let stack: ArrayStack<String> = ArrayStack::with_capacity(256)?;
    /// assert_eq!(256, stack.capacity());
    ///
    /// assert_eq!(
    ///     Err(StackError::InvalidArgument { capacity: 0 }),
    ///     ArrayStack::<String>::with_capacity(0).map(|_| ())
    /// );
    /// # Ok::<(), StackError>(())
    /// ```
    ///
    /// [InvalidArgument]: enum.StackError.html#variant.InvalidArgument
    pub fn with_capacity(capacity: usize) -> Result<Self, StackError> {
        if capacity == 0 {
            return Err(StackError::InvalidArgument { capacity });
        }
        Ok(Self::allocate(capacity))
    }

    fn allocate(capacity: usize) -> Self {
        trace!("allocating stack with capacity {}", capacity);
        Self {
            size: 0,
            slots: Slots::slots_new(capacity),
        }
    }

    /// Get the number of values on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Get the maximum number of values the stack can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.slots_capacity()
    }

    /// Test whether the stack holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Test whether the stack is at capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.size >= self.capacity()
    }

    /// Push a value onto the top of the stack.
    ///
    /// If the stack is full, the value is dropped and
    /// [`StackError::CapacityExceeded`][CapacityExceeded] is returned. Use
    /// [`try_push()`][try_push] to get the value back instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arraystack::{ArrayStack, StackError};
    /// let mut stack = ArrayStack::with_capacity(1)?;
    /// stack.push("hello")?;
    /// assert_eq!(Ok(&"hello"), stack.peek());
    /// assert_eq!(
    ///     Err(StackError::CapacityExceeded { capacity: 1 }),
    ///     stack.push("world")
    /// );
    /// # Ok::<(), StackError>(())
    /// ```
    ///
    /// [CapacityExceeded]: enum.StackError.html#variant.CapacityExceeded
    /// [try_push]: #method.try_push
    pub fn push(&mut self, value: A) -> Result<(), StackError> {
        self.try_push(value)
            .map_err(|_| StackError::CapacityExceeded {
                capacity: self.capacity(),
            })
    }

    /// Push a value onto the top of the stack, handing it back if the stack
    /// is full.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arraystack::{ArrayStack, StackError};
    /// let mut stack = ArrayStack::with_capacity(1)?;
    /// assert_eq!(Ok(()), stack.try_push(1));
    /// assert_eq!(Err(2), stack.try_push(2));
    /// # Ok::<(), StackError>(())
    /// ```
    pub fn try_push(&mut self, value: A) -> Result<(), A> {
        if self.is_full() {
            return Err(value);
        }
        self.slots.slots_put(self.size, value);
        self.size += 1;
        Ok(())
    }

    /// Remove the value on top of the stack and return it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arraystack::{ArrayStack, StackError};
    /// let mut stack = ArrayStack::new();
    /// stack.push(1)?;
    /// stack.push(2)?;
    /// assert_eq!(Ok(2), stack.pop());
    /// assert_eq!(Ok(1), stack.pop());
    /// assert_eq!(Err(StackError::EmptyStack), stack.pop());
    /// # Ok::<(), StackError>(())
    /// ```
    pub fn pop(&mut self) -> Result<A, StackError> {
        let top = self.top()?;
        let value = self.slots.slots_take(top).ok_or(StackError::EmptyStack)?;
        self.size = top;
        Ok(value)
    }

    /// Get a reference to the value on top of the stack without removing
    /// it.
    pub fn peek(&self) -> Result<&A, StackError> {
        let top = self.top()?;
        self.slots.slots_get(top).ok_or(StackError::EmptyStack)
    }

    /// Get a mutable reference to the value on top of the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arraystack::{ArrayStack, StackError};
    /// let mut stack = ArrayStack::new();
    /// stack.push(1)?;
    /// *stack.peek_mut()? += 1336;
    /// assert_eq!(Ok(&1337), stack.peek());
    /// # Ok::<(), StackError>(())
    /// ```
    pub fn peek_mut(&mut self) -> Result<&mut A, StackError> {
        let top = self.top()?;
        self.slots.slots_get_mut(top).ok_or(StackError::EmptyStack)
    }

    /// Drop every value on the stack.
    ///
    /// The backing array is kept, so the capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arraystack::{ArrayStack, StackError};
    /// let mut stack = ArrayStack::with_capacity(8)?;
    /// stack.push(1)?;
    /// stack.push(2)?;
    /// stack.clear();
    /// assert!(stack.is_empty());
    /// assert_eq!(8, stack.capacity());
    /// # Ok::<(), StackError>(())
    /// ```
    pub fn clear(&mut self) {
        trace!("clearing {} values from stack", self.size);
        let size = std::mem::replace(&mut self.size, 0);
        for index in 0..size {
            self.slots.slots_take(index);
        }
    }

    fn top(&self) -> Result<usize, StackError> {
        self.size.checked_sub(1).ok_or(StackError::EmptyStack)
    }

    // Live values, bottom to top.
    fn values(&self) -> impl Iterator<Item = &A> + '_ {
        (0..self.size).filter_map(move |index| self.slots.slots_get(index))
    }
}

impl<A> Default for ArrayStack<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PartialEq> PartialEq for ArrayStack<A> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.values().eq(other.values())
    }
}

impl<A: Eq> Eq for ArrayStack<A> {}

impl<A: Display> Display for ArrayStack<A> {
    /// Render the stack from bottom to top, as in `[1, 2, 3]`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.write_str("[")?;
        for (index, value) in self.values().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl<A: Debug> Debug for ArrayStack<A> {
    /// Debug implementation for `ArrayStack`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arraystack::{ArrayStack, StackError};
    /// let mut stack = ArrayStack::with_capacity(4)?;
    /// stack.push("a")?;
    /// stack.push("b")?;
    /// assert_eq!("ArrayStack[2/4][\"a\", \"b\"]", format!("{:?}", stack));
    /// # Ok::<(), StackError>(())
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "ArrayStack[{}/{}]", self.size, self.capacity())?;
        f.debug_list().entries(self.values()).finish()
    }
}
