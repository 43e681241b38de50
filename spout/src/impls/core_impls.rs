use core::convert::Infallible;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::Spout;

/// Drops all items.
#[derive(Debug, Clone, Copy, Default)]
pub struct DropSpout;

impl<T> Spout<T> for DropSpout {
    type Error = Infallible;

    #[inline]
    fn send(&mut self, _item: T) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Counts items without keeping them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountSpout {
    count: usize,
}

impl CountSpout {
    /// Create a counter starting at zero.
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Items received so far.
    pub const fn count(&self) -> usize {
        self.count
    }
}

impl<T> Spout<T> for CountSpout {
    type Error = Infallible;

    #[inline]
    fn send(&mut self, _item: T) -> Result<(), Infallible> {
        self.count = self.count.wrapping_add(1);
        Ok(())
    }
}

/// Collects items into a Vec.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, Default)]
pub struct CollectSpout<T> {
    items: Vec<T>,
}

#[cfg(feature = "alloc")]
impl<T> CollectSpout<T> {
    /// Create a new collecting spout.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Get collected items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Take collected items, leaving an empty Vec.
    pub fn take(&mut self) -> Vec<T> {
        core::mem::take(&mut self.items)
    }

    /// Consume spout and return collected items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

#[cfg(feature = "alloc")]
impl<T> Spout<T> for CollectSpout<T> {
    type Error = Infallible;

    #[inline]
    fn send(&mut self, item: T) -> Result<(), Infallible> {
        self.items.push(item);
        Ok(())
    }

    #[inline]
    fn send_all(&mut self, items: impl Iterator<Item = T>) -> Result<(), Infallible> {
        self.items.extend(items);
        Ok(())
    }
}

/// Calls a closure for each item.
#[derive(Debug)]
pub struct FnSpout<F>(pub F);

impl<F> FnSpout<F> {
    /// Wrap a closure.
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<T, F: FnMut(T)> Spout<T> for FnSpout<F> {
    type Error = Infallible;

    #[inline]
    fn send(&mut self, item: T) -> Result<(), Infallible> {
        (self.0)(item);
        Ok(())
    }
}
