/// Consumes items.
pub trait Spout<T> {
    /// The error type returned by fallible operations.
    type Error;

    /// Consume an item.
    ///
    /// # Errors
    /// Returns an error if the item could not be consumed.
    fn send(&mut self, item: T) -> Result<(), Self::Error>;

    /// Consume multiple items from an iterator.
    ///
    /// Default implementation calls `send` for each item and stops at the
    /// first failure.
    ///
    /// # Errors
    /// Returns an error if any item could not be consumed.
    #[inline]
    fn send_all(&mut self, items: impl Iterator<Item = T>) -> Result<(), Self::Error> {
        for item in items {
            self.send(item)?;
        }
        Ok(())
    }

    /// Flush buffered data.
    ///
    /// # Errors
    /// Returns an error if the flush operation fails.
    #[inline]
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<T, S: Spout<T> + ?Sized> Spout<T> for &mut S {
    type Error = S::Error;

    #[inline]
    fn send(&mut self, item: T) -> Result<(), Self::Error> {
        (**self).send(item)
    }

    #[inline]
    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}
