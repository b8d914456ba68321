//! Scratch buffers for rendering.
//!
//! Statements render into a `String` taken from a shared pool and returned
//! afterwards. The pool only holds cleared scratch strings, so a poisoned
//! lock is simply recovered.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, PoisonError};

/// Initial capacity of a fresh buffer (bytes).
pub const DEFAULT_BUFFER_CAPACITY: usize = 255;

/// Maximum number of idle buffers kept by the default pool.
pub const DEFAULT_MAX_POOLED: usize = 64;

/// Buffers grown beyond this are dropped instead of being pooled.
pub const MAX_RETAINED_CAPACITY: usize = 64 * 1024;

static DEFAULT_POOL: BufferPool = BufferPool::new(DEFAULT_BUFFER_CAPACITY, DEFAULT_MAX_POOLED);

/// A pool of reusable `String` buffers.
#[derive(Debug)]
pub struct BufferPool {
    buffers: Mutex<Vec<String>>,
    initial_capacity: usize,
    max_pooled: usize,
}

impl BufferPool {
    pub const fn new(initial_capacity: usize, max_pooled: usize) -> Self {
        Self {
            buffers: Mutex::new(Vec::new()),
            initial_capacity,
            max_pooled,
        }
    }

    /// Take a cleared buffer; it goes back to the pool when the guard drops.
    pub fn acquire(&self) -> PooledBuffer<'_> {
        let buf = self
            .buffers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop()
            .unwrap_or_else(|| String::with_capacity(self.initial_capacity));
        PooledBuffer { buf, pool: self }
    }

    /// Run `f` with a scratch buffer from this pool.
    pub fn with_buffer<R>(&self, f: impl FnOnce(&mut String) -> R) -> R {
        let mut guard = self.acquire();
        f(&mut guard)
    }

    /// Number of idle buffers.
    pub fn idle(&self) -> usize {
        self.buffers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn release(&self, mut buf: String) {
        if buf.capacity() > MAX_RETAINED_CAPACITY {
            return;
        }
        buf.clear();
        let mut buffers = self.buffers.lock().unwrap_or_else(PoisonError::into_inner);
        if buffers.len() < self.max_pooled {
            buffers.push(buf);
        }
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_CAPACITY, DEFAULT_MAX_POOLED)
    }
}

/// A buffer on loan from a [`BufferPool`].
#[derive(Debug)]
pub struct PooledBuffer<'a> {
    buf: String,
    pool: &'a BufferPool,
}

impl Deref for PooledBuffer<'_> {
    type Target = String;

    fn deref(&self) -> &String {
        &self.buf
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut String {
        &mut self.buf
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.buf));
    }
}

/// Run `f` with a scratch buffer from the crate-wide pool.
pub fn with_buffer<R>(f: impl FnOnce(&mut String) -> R) -> R {
    DEFAULT_POOL.with_buffer(f)
}
