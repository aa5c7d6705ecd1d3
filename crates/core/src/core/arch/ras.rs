//! Return Address Stack.
//!
//! Branch instructions push the address of the following instruction; return
//! pops it back into the pc. The stack is architectural and unbounded, so it
//! never drops or overwrites entries.

/// Return Address Stack structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturnStack {
    /// The stack storage; the last element is the top.
    stack: Vec<u32>,
}

impl ReturnStack {
    /// Creates an empty return stack.
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Pushes a return address onto the stack.
    pub fn push(&mut self, addr: u32) {
        self.stack.push(addr);
    }

    /// Pops a return address from the stack.
    ///
    /// # Returns
    ///
    /// The popped return address, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<u32> {
        self.stack.pop()
    }

    /// Peeks at the top of the stack without removing the entry.
    pub fn top(&self) -> Option<u32> {
        self.stack.last().copied()
    }

    /// Returns the number of pending return addresses.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if no return address is pending.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
