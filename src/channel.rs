//! Command queue between the message bus and the renderer
//!
//! Built on `critical-section` and `heapless::Deque`, so it can be shared
//! between tasks and interrupts. Commands are decoded on the sending side;
//! the renderer drains the queue before it touches the animation, so a
//! command is never applied halfway through a frame.
//!
//! The queue never rejects a command. When it is full the oldest entry is
//! dropped, since a newer command overrides whatever the older one set.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::command::{DecodedCommand, decode};

/// Bounded, interrupt-safe command queue
pub struct CommandChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<DecodedCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { channel: self }
    }

    /// Queue a decoded command
    ///
    /// Returns the evicted command when the queue was full.
    pub fn send(&self, command: DecodedCommand) -> Option<DecodedCommand> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            let evicted = if queue.is_full() {
                queue.pop_front()
            } else {
                None
            };
            // Cannot fail, a slot was freed above
            let _ = queue.push_back(command);
            evicted
        })
    }

    /// Take the oldest queued command
    pub fn try_receive(&self) -> Option<DecodedCommand> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of commands waiting
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half, handed to the message bus task
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Decode a raw payload and queue the result
    ///
    /// Undecodable payloads are queued too, they switch the die to the error
    /// indication once applied.
    pub fn send_payload(&self, payload: &[u8]) -> Option<DecodedCommand> {
        self.channel.send(decode(payload))
    }

    pub fn send(&self, command: DecodedCommand) -> Option<DecodedCommand> {
        self.channel.send(command)
    }
}

/// Receiving half, owned by the renderer
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<DecodedCommand> {
        self.channel.try_receive()
    }
}
