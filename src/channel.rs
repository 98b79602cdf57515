//! Bounded report channel.
//!
//! A fixed-size byte ring shared between the report-arrival context
//! (writer) and a polling consumer (reader). Writes never evict unread
//! data: once the ring is full the rest of the entry is dropped and the
//! drop is reported to the caller.
//!
//! ```text
//!            read            write
//!             v                v
//!   [ . . . . A B C D E F G H . . . . ]   N bytes, N - 1 usable
//! ```
//!
//! Each `write` or `drain` call is a single critical section, so entries
//! from concurrent writers never interleave byte-for-byte and concurrent
//! readers never receive the same bytes.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use heapless::spsc::Queue;

use crate::config::CHANNEL_CAPACITY;
use crate::error::Error;

/// Result of a single [`ReportChannel::write`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteOutcome {
    /// Every byte was queued.
    Written(usize),
    /// The ring filled up part way; the tail of the entry was discarded.
    PartiallyDropped { written: usize, dropped: usize },
}

impl WriteOutcome {
    pub fn written(&self) -> usize {
        match *self {
            WriteOutcome::Written(n) => n,
            WriteOutcome::PartiallyDropped { written, .. } => written,
        }
    }

    pub fn dropped(&self) -> usize {
        match *self {
            WriteOutcome::Written(_) => 0,
            WriteOutcome::PartiallyDropped { dropped, .. } => dropped,
        }
    }

    /// `Err(Error::ChannelFull)` if anything was dropped.
    pub fn into_result(self) -> Result<usize, Error> {
        match self {
            WriteOutcome::Written(n) => Ok(n),
            WriteOutcome::PartiallyDropped { written, dropped } => {
                Err(Error::ChannelFull { written, dropped })
            }
        }
    }
}

/// Byte queue plus drop counter. Not synchronised on its own.
struct ByteRing<const N: usize> {
    queue: Queue<u8, N>,
    /// Bytes discarded since construction.
    dropped: usize,
}

impl<const N: usize> ByteRing<N> {
    const VALID: () = assert!(N >= 2, "ring needs at least two slots");

    const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID;
        Self {
            queue: Queue::new(),
            dropped: 0,
        }
    }

    fn write(&mut self, bytes: &[u8]) -> WriteOutcome {
        // `enqueue` refuses once N - 1 bytes are queued; the rest is dropped.
        let written = bytes
            .iter()
            .take_while(|&&byte| self.queue.enqueue(byte).is_ok())
            .count();

        let dropped = bytes.len() - written;
        if dropped == 0 {
            WriteOutcome::Written(written)
        } else {
            self.dropped = self.dropped.saturating_add(dropped);
            WriteOutcome::PartiallyDropped { written, dropped }
        }
    }

    fn drain(&mut self, out: &mut [u8]) -> usize {
        let mut n = 0;
        for slot in out.iter_mut() {
            match self.queue.dequeue() {
                Some(byte) => {
                    *slot = byte;
                    n += 1;
                }
                None => break,
            }
        }
        n
    }
}

/// Fixed-capacity, drop-on-full byte channel safe to share across contexts.
pub struct ReportChannel<const N: usize = CHANNEL_CAPACITY> {
    ring: Mutex<CriticalSectionRawMutex, RefCell<ByteRing<N>>>,
}

impl<const N: usize> ReportChannel<N> {
    /// Create an empty channel. Fails to compile for `N < 2`.
    pub const fn new() -> Self {
        Self {
            ring: Mutex::new(RefCell::new(ByteRing::new())),
        }
    }

    /// Queue `bytes` as one unit, dropping whatever does not fit.
    ///
    /// Only formatted entries are written, from inside the crate:
    ///
    /// ```compile_fail
    /// let channel: wiimote_hid::ReportChannel = wiimote_hid::ReportChannel::new();
    /// channel.write(b"Battery: 1\n");
    /// ```
    pub(crate) fn write(&self, bytes: &[u8]) -> WriteOutcome {
        self.ring.lock(|ring| ring.borrow_mut().write(bytes))
    }

    /// Move up to `out.len()` queued bytes into `out`.
    ///
    /// Returns the number of bytes copied; zero when the channel is empty.
    /// Never waits for data.
    pub fn drain(&self, out: &mut [u8]) -> usize {
        self.ring.lock(|ring| ring.borrow_mut().drain(out))
    }

    /// Bytes currently queued.
    pub fn len(&self) -> usize {
        self.ring.lock(|ring| ring.borrow().queue.len())
    }

    pub fn is_empty(&self) -> bool {
        self.ring.lock(|ring| ring.borrow().queue.is_empty())
    }

    /// Usable capacity in bytes (`N - 1`).
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Total bytes dropped because the channel was full.
    pub fn dropped_total(&self) -> usize {
        self.ring.lock(|ring| ring.borrow().dropped)
    }
}

impl<const N: usize> Default for ReportChannel<N> {
    fn default() -> Self {
        Self::new()
    }
}
