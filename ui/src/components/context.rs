//! App-wide contexts: locale, config, feed handoff and toasts.
//!
//! A platform shell calls [`use_app_context`] once at the top of its `App`.
//! Components reach the contexts through the `use_*` hooks below, which fall
//! back to a local value when rendered outside a shell (tests, previews).

use dioxus::prelude::*;

use crate::core::config::NavConfig;
use crate::core::handoff::{FeedPayload, HandedFeed};
use crate::core::locale::Locale;
use crate::core::timing;
use crate::core::toast::ToastQueue;
use crate::i18n;

/// Install every context the navigation components need. Returns the
/// locale signal so the shell can key its routed tree on it.
pub fn use_app_context(config: NavConfig) -> Signal<Locale> {
    i18n::init();
    let locale = use_context_provider(|| Signal::new(i18n::current_locale()));
    use_context_provider(|| config);
    use_context_provider(FeedChannel::new);
    use_context_provider(Toaster::new);
    locale
}

/// Reactive mirror of the i18n loader's current locale.
pub fn use_locale() -> Signal<Locale> {
    let fallback = use_signal(i18n::current_locale);
    try_use_context::<Signal<Locale>>().unwrap_or(fallback)
}

pub fn use_nav_config() -> NavConfig {
    try_use_context::<NavConfig>().unwrap_or_default()
}

/// Carries the article list for the next feed route.
#[derive(Clone, Copy, PartialEq)]
pub struct FeedChannel {
    slot: Signal<Option<FeedPayload>>,
}

impl FeedChannel {
    pub fn new() -> Self {
        Self {
            slot: Signal::new(None),
        }
    }

    pub fn publish(&self, payload: FeedPayload) {
        let mut slot = self.slot;
        slot.set(Some(payload));
    }

    /// Whether a payload for `query` is waiting. Does not subscribe.
    pub fn pending_for(&self, query: &str) -> bool {
        matches!(&*self.slot.peek(), Some(payload) if payload.matches(query))
    }

    /// Move a pending payload for `query` into `feed`. Reads the slot
    /// reactively, so a later publish for the same query re-runs the caller.
    pub fn deliver(&self, mut feed: Signal<HandedFeed>, query: &str) -> bool {
        let waiting = matches!(&*self.slot.read(), Some(payload) if payload.matches(query));
        if !waiting {
            return false;
        }
        let mut slot = self.slot;
        let received = feed.write().receive(&mut slot.write(), query);
        received
    }
}

pub fn use_feed_channel() -> FeedChannel {
    let fallback = use_hook(FeedChannel::new);
    try_use_context::<FeedChannel>().unwrap_or(fallback)
}

/// Handle for showing transient notifications.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    queue: Signal<ToastQueue>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            queue: Signal::new(ToastQueue::default()),
        }
    }

    /// Show a toast and dismiss it after `duration_ms`.
    ///
    /// The timer runs outside the calling component, which may unmount
    /// first (the desktop shell remounts its routes on a locale change).
    pub fn show(&self, title: impl Into<String>, description: impl Into<String>, duration_ms: u64) {
        let mut queue = self.queue;
        let id = queue
            .write()
            .push(title.into(), description.into(), duration_ms, timing::now_ms());
        spawn_forever(async move {
            timing::sleep_ms(duration_ms).await;
            let mut toasts = queue.write();
            toasts.dismiss(id);
            toasts.expire(timing::now_ms());
        });
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    pub fn queue(&self) -> ReadOnlySignal<ToastQueue> {
        self.queue.into()
    }
}

pub fn use_toaster() -> Toaster {
    let fallback = use_hook(Toaster::new);
    try_use_context::<Toaster>().unwrap_or(fallback)
}
