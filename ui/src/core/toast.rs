//! Transient notification stack.

/// One toast on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub duration_ms: u64,
    /// Clock reading (see `timing::now_ms`) after which the toast is gone.
    pub expires_at: f64,
}

/// Ordered toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    /// Most toasts shown at once; older ones are dropped first.
    pub const LIMIT: usize = 3;

    pub fn push(&mut self, title: String, description: String, duration_ms: u64, now: f64) -> u64 {
        self.expire(now);
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            title,
            description,
            duration_ms,
            expires_at: now + duration_ms as f64,
        });
        if self.items.len() > Self::LIMIT {
            let overflow = self.items.len() - Self::LIMIT;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        before != self.items.len()
    }

    /// Drop every toast whose time is up, whether or not its timer fired.
    pub fn expire(&mut self, now: f64) -> usize {
        let before = self.items.len();
        self.items.retain(|t| t.expires_at > now);
        before - self.items.len()
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
