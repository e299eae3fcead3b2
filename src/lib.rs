// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A last in, first out stack backed by an array of fixed capacity.
//!
//! [`ArrayStack`][ArrayStack] allocates its backing array once, when it's
//! constructed, and never grows it. Pushing and popping are O(1) and never
//! allocate. Each slot in the array is either occupied or empty, and a slot
//! is emptied as soon as its value leaves the stack, so popped and cleared
//! values are handed back or dropped right away rather than lingering in the
//! backing array.
//!
//! # Errors
//!
//! Every operation which can't be performed on the stack as it stands
//! returns a [`StackError`][StackError] rather than panicking:
//!
//!   * [`StackError::InvalidArgument`][InvalidArgument] if you ask for a
//!     stack with a capacity of zero.
//!   * [`StackError::CapacityExceeded`][CapacityExceeded] if you push onto a
//!     full stack.
//!   * [`StackError::EmptyStack`][EmptyStack] if you pop or peek at an empty
//!     stack.
//!
//! A failed operation leaves the stack exactly as it was.
//!
//! # Thread Safety
//!
//! [`ArrayStack`][ArrayStack] does no locking of its own. It's
//! [`Send`][Send] and [`Sync`][Sync] whenever its values are, so you can put
//! it behind a [`Mutex`][Mutex] if you need to share it between threads.
//!
//! # Example
//!
//! ```rust
//! # use arraystack::{ArrayStack, StackError};
//! // Create a stack which can hold three values.
//! let mut stack = ArrayStack::with_capacity(3)?;
//! stack.push(1)?;
//! stack.push(2)?;
//! stack.push(3)?;
//! assert_eq!("[1, 2, 3]", stack.to_string());
//!
//! // It's full now, so the next push fails.
//! assert_eq!(
//!     Err(StackError::CapacityExceeded { capacity: 3 }),
//!     stack.push(4)
//! );
//!
//! // Values come back out in reverse order.
//! assert_eq!(Ok(3), stack.pop());
//! assert_eq!(Ok(&2), stack.peek());
//! # Ok::<(), StackError>(())
//! ```
//!
//! # Feature Flags
//!
//! There's one feature flag available, `log`, which emits trace level
//! records through the [`log`][log] crate when a stack is allocated or
//! cleared.
//!
//! [ArrayStack]: struct.ArrayStack.html
//! [StackError]: enum.StackError.html
//! [InvalidArgument]: enum.StackError.html#variant.InvalidArgument
//! [CapacityExceeded]: enum.StackError.html#variant.CapacityExceeded
//! [EmptyStack]: enum.StackError.html#variant.EmptyStack
//! [Send]: https://doc.rust-lang.org/std/marker/trait.Send.html
//! [Sync]: https://doc.rust-lang.org/std/marker/trait.Sync.html
//! [Mutex]: https://doc.rust-lang.org/std/sync/struct.Mutex.html
//! [log]: https://docs.rs/log

#![forbid(rust_2018_idioms)]
#![deny(nonstandard_style)]
#![warn(unreachable_pub, missing_docs, missing_debug_implementations)]

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
    }};
}

mod error;
mod slots;
mod stack;

pub use self::error::StackError;
pub use self::stack::{ArrayStack, DEFAULT_CAPACITY};
