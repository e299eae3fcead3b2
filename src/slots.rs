// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Fixed length backing storage for an `ArrayStack`.
///
/// Every slot is either occupied or empty. Callers are responsible for
/// keeping `index` below `slots_capacity()`.
pub(crate) trait Slots<A> {
    fn slots_new(capacity: usize) -> Self;
    fn slots_capacity(&self) -> usize;
    fn slots_put(&mut self, index: usize, value: A);
    fn slots_take(&mut self, index: usize) -> Option<A>;
    fn slots_get(&self, index: usize) -> Option<&A>;
    fn slots_get_mut(&mut self, index: usize) -> Option<&mut A>;
}

impl<A> Slots<A> for Box<[Option<A>]> {
    fn slots_new(capacity: usize) -> Self {
        std::iter::repeat_with(|| None).take(capacity).collect()
    }

    #[inline(always)]
    fn slots_capacity(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn slots_put(&mut self, index: usize, value: A) {
        debug_assert!(self[index].is_none());
        self[index] = Some(value);
    }

    #[inline(always)]
    fn slots_take(&mut self, index: usize) -> Option<A> {
        self[index].take()
    }

    #[inline(always)]
    fn slots_get(&self, index: usize) -> Option<&A> {
        self[index].as_ref()
    }

    #[inline(always)]
    fn slots_get_mut(&mut self, index: usize) -> Option<&mut A> {
        self[index].as_mut()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_slots_are_empty() {
        let slots: Box<[Option<String>]> = Slots::slots_new(4);
        assert_eq!(4, slots.slots_capacity());
        assert!((0..4).all(|index| slots.slots_get(index).is_none()));
    }

    #[test]
    fn take_leaves_slot_empty() {
        let mut slots: Box<[Option<usize>]> = Slots::slots_new(2);
        slots.slots_put(1, 1337);
        assert_eq!(Some(&1337), slots.slots_get(1));
        assert_eq!(Some(1337), slots.slots_take(1));
        assert_eq!(None, slots.slots_get(1));
        assert_eq!(None, slots.slots_take(1));
    }
}
