// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// The ways an [`ArrayStack`][ArrayStack] operation can fail.
///
/// A failed operation never modifies the stack.
///
/// [ArrayStack]: struct.ArrayStack.html
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum StackError {
    /// A stack was constructed with a capacity of zero.
    #[error("invalid stack capacity: {capacity}")]
    InvalidArgument {
        /// The capacity that was asked for.
        capacity: usize,
    },
    /// A value was pushed onto a full stack.
    #[error("stack capacity of {capacity} exceeded")]
    CapacityExceeded {
        /// The capacity of the stack that rejected the push.
        capacity: usize,
    },
    /// A value was requested from an empty stack.
    #[error("stack is empty")]
    EmptyStack,
}
