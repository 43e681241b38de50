//! Split producer/consumer halves for use from two threads.
//!
//! [`ByteRing::split`] borrows the ring mutably and hands out a [`Producer`]
//! and a [`Consumer`] that may live on different threads. The producer owns
//! the write cursor, the consumer keeps its own read cursor, and the two
//! coordinate only through the shared byte count: Release on publish,
//! Acquire on observe, no CAS.
//!
//! Only unobserved rings split: the halves run outside `&mut ByteRing`, so
//! they have no observer to notify. When both are dropped the ring's cursors
//! reflect everything they moved.

use core::{marker::PhantomData, ptr::NonNull};

use spout::Spout;

use crate::{
    error::WriteError,
    index::AtomicIndex,
    observer::NoObserver,
    ring::{ByteRing, advance},
    traits::{ByteConsumer, ByteProducer, RingInfo},
};

impl ByteRing<'_, NoObserver> {
    /// Split into a producer and a consumer that can run concurrently.
    ///
    /// Pending bytes stay pending: the consumer starts at the current read
    /// cursor.
    ///
    /// An observed ring cannot be split, since every write and read on it
    /// must reach its observer:
    ///
    /// ```compile_fail
    /// use bytering_core::{ByteRing, CountingObserver};
    ///
    /// let mut storage = [0u8; 8];
    /// let mut ring = ByteRing::builder()
    ///     .observer(CountingObserver::new())
    ///     .build(&mut storage)
    ///     .unwrap();
    /// let (tx, rx) = ring.split();
    /// ```
    ///
    /// # Example
    ///
    /// ```
    /// use bytering_core::ByteRing;
    ///
    /// let mut storage = [0u8; 64];
    /// let mut ring = ByteRing::new(&mut storage).unwrap();
    /// let (mut tx, mut rx) = ring.split();
    ///
    /// std::thread::scope(|s| {
    ///     s.spawn(move || {
    ///         let mut sent = 0;
    ///         while sent < 10 {
    ///             sent += tx.write(&b"0123456789"[sent..]);
    ///         }
    ///     });
    ///     let mut out = [0u8; 10];
    ///     let mut got = 0;
    ///     while got < 10 {
    ///         got += rx.read(&mut out[got..]);
    ///     }
    ///     assert_eq!(&out, b"0123456789");
    /// });
    /// ```
    pub fn split(&mut self) -> (Producer<'_>, Consumer<'_>) {
        let read = self.read_cursor();
        let (storage, write, count) = self.parts_mut();
        let capacity = storage.len();
        let buf = NonNull::from(storage).cast::<u8>();

        let producer = Producer {
            buf,
            capacity,
            write,
            count,
            _storage: PhantomData,
        };
        let consumer = Consumer {
            buf,
            capacity,
            read,
            count,
            _storage: PhantomData,
        };
        (producer, consumer)
    }
}

/// Write half of a split [`ByteRing`].
pub struct Producer<'r> {
    buf: NonNull<u8>,
    capacity: usize,
    write: &'r mut usize,
    count: &'r AtomicIndex,
    _storage: PhantomData<&'r mut [u8]>,
}

// SAFETY: the producer only touches free bytes, which the consumer never
// reads until the Release in `AtomicIndex::add` publishes them.
unsafe impl Send for Producer<'_> {}

impl Producer<'_> {
    /// Copy as much of `src` as fits and return the number of bytes taken.
    pub fn write(&mut self, src: &[u8]) -> usize {
        let capacity = self.capacity;
        let n = src.len().min(capacity - self.count.load());
        if n == 0 {
            return 0;
        }

        let start = *self.write;
        let first = n.min(capacity - start);
        // SAFETY: [start, start + n) mod capacity lies in the free region,
        // which the consumer does not access until the count says so.
        unsafe {
            let base = self.buf.as_ptr();
            core::ptr::copy_nonoverlapping(src.as_ptr(), base.add(start), first);
            core::ptr::copy_nonoverlapping(src.as_ptr().add(first), base, n - first);
        }

        *self.write = advance(start, n, capacity);
        self.count.add(n);
        n
    }
}

impl RingInfo for Producer<'_> {
    #[inline]
    fn count(&self) -> usize {
        self.count.load()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl ByteProducer for Producer<'_> {
    #[inline]
    fn write(&mut self, src: &[u8]) -> usize {
        Producer::write(self, src)
    }
}

impl Spout<&[u8]> for Producer<'_> {
    type Error = WriteError;

    #[inline]
    fn send(&mut self, item: &[u8]) -> Result<(), WriteError> {
        let written = self.write(item);
        if written < item.len() {
            return Err(WriteError::Truncated {
                written,
                requested: item.len(),
            });
        }
        Ok(())
    }
}

/// Read half of a split [`ByteRing`].
pub struct Consumer<'r> {
    buf: NonNull<u8>,
    capacity: usize,
    read: usize,
    count: &'r AtomicIndex,
    _storage: PhantomData<&'r mut [u8]>,
}

// SAFETY: the consumer only touches pending bytes, which the producer never
// overwrites until the Release in `AtomicIndex::sub` frees them.
unsafe impl Send for Consumer<'_> {}

impl Consumer<'_> {
    /// Move up to `dst.len()` of the oldest pending bytes into `dst`.
    pub fn read(&mut self, dst: &mut [u8]) -> usize {
        let n = self.copy_out(dst);
        if n > 0 {
            self.read = advance(self.read, n, self.capacity);
            self.count.sub(n);
        }
        n
    }

    /// Copy up to `dst.len()` pending bytes without consuming them.
    #[must_use]
    pub fn peek(&self, dst: &mut [u8]) -> usize {
        self.copy_out(dst)
    }

    fn copy_out(&self, dst: &mut [u8]) -> usize {
        let n = dst.len().min(self.count.load());
        if n == 0 {
            return 0;
        }

        let start = self.read;
        let first = n.min(self.capacity - start);
        // SAFETY: the Acquire load above makes the first `n` bytes from the
        // read cursor visible, and the producer leaves them alone until
        // `sub` releases them.
        unsafe {
            let base = self.buf.as_ptr().cast_const();
            core::ptr::copy_nonoverlapping(base.add(start), dst.as_mut_ptr(), first);
            core::ptr::copy_nonoverlapping(base, dst.as_mut_ptr().add(first), n - first);
        }
        n
    }
}

impl RingInfo for Consumer<'_> {
    #[inline]
    fn count(&self) -> usize {
        self.count.load()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl ByteConsumer for Consumer<'_> {
    #[inline]
    fn read(&mut self, dst: &mut [u8]) -> usize {
        Consumer::read(self, dst)
    }

    #[inline]
    fn peek(&self, dst: &mut [u8]) -> usize {
        Consumer::peek(self, dst)
    }
}
