#![deny(warnings)]

//! Interaction-driven prefetch planning for the route shell and galleries.
//!
//! The heuristic (which routes warm up, and when) lives here; the actual
//! loading sits behind capability traits so the shell can plug in its
//! dynamic imports and tests can plug in fakes.

use estate_core::Property;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Normalized route path used as the prefetch key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteKey(pub String);

impl RouteKey {
    /// Normalize an href into a route key: absolute URLs reduce to their
    /// path, trailing slashes are stripped (the root stays "/").
    /// Unparseable hrefs yield `None`.
    pub fn from_href(href: &str) -> Option<RouteKey> {
        let path = match Url::parse(href) {
            Ok(url) => url.path().to_string(),
            // Not an absolute URL; accept root-relative paths as-is.
            Err(_) if href.starts_with('/') => href.split(['?', '#']).next()?.to_string(),
            Err(_) => return None,
        };
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            Some(RouteKey("/".to_string()))
        } else {
            Some(RouteKey(trimmed.to_string()))
        }
    }
}

/// Errors surfaced by a [`RouteLoader`].
#[derive(Debug, Error)]
pub enum PrefetchError {
    /// The underlying load failed; navigation will still load the route.
    #[error("loader failed for {route}: {reason}")]
    LoaderFailed { route: String, reason: String },
}

/// Capability that performs the actual route load.
pub trait RouteLoader {
    fn prefetch(&mut self, route: &RouteKey) -> Result<(), PrefetchError>;
}

/// Plans route prefetching from interaction events.
///
/// Constructed once with the set of prefetchable routes, a warmup
/// priority list, and the injected loader; holds the session dedupe set.
pub struct PrefetchPlanner<L> {
    registry: BTreeSet<RouteKey>,
    warmup: Vec<RouteKey>,
    done: BTreeSet<RouteKey>,
    loader: L,
}

impl<L: RouteLoader> PrefetchPlanner<L> {
    /// Build a planner. Warmup routes are registered implicitly.
    pub fn new(routes: Vec<RouteKey>, warmup: Vec<RouteKey>, loader: L) -> Self {
        let mut registry: BTreeSet<RouteKey> = routes.into_iter().collect();
        registry.extend(warmup.iter().cloned());
        Self {
            registry,
            warmup,
            done: BTreeSet::new(),
            loader,
        }
    }

    /// Pointer hovered a link. Returns whether a prefetch fired.
    pub fn on_hover(&mut self, href: &str) -> bool {
        self.on_interaction(href)
    }

    /// Touch started on a link. Same policy as hover: one dedupe set
    /// covers both input modes.
    pub fn on_touch(&mut self, href: &str) -> bool {
        self.on_interaction(href)
    }

    fn on_interaction(&mut self, href: &str) -> bool {
        match RouteKey::from_href(href) {
            Some(key) => self.warm(&key),
            None => false,
        }
    }

    /// The shell reports idle: warm the priority routes.
    pub fn idle_warmup(&mut self) -> usize {
        let pending = self.warmup.clone();
        pending.iter().filter(|key| self.warm(key)).count()
    }

    fn warm(&mut self, key: &RouteKey) -> bool {
        if !self.registry.contains(key) || self.done.contains(key) {
            return false;
        }
        match self.loader.prefetch(key) {
            Ok(()) => {
                self.done.insert(key.clone());
                true
            }
            Err(err) => {
                // Not marked done: navigation falls back to a normal load
                // and a later interaction may retry.
                debug!(route = %key.0, error = %err, "prefetch failed");
                false
            }
        }
    }

    /// Whether a route already warmed up this session.
    pub fn is_prefetched(&self, key: &RouteKey) -> bool {
        self.done.contains(key)
    }

    /// Number of routes warmed so far.
    pub fn prefetched_count(&self) -> usize {
        self.done.len()
    }

    /// Tear down, handing the injected loader back to the caller.
    pub fn into_loader(self) -> L {
        self.loader
    }
}

/// Relative fetch priority for image warmup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchPriority {
    High,
    Low,
}

/// Capability that schedules an image fetch.
pub trait ImageSink {
    fn preload(&mut self, url: &str, priority: FetchPriority);
}

/// Warm a listing's gallery: the hero image first at high priority, the
/// rest behind it at low priority.
pub fn warm_gallery<S: ImageSink>(sink: &mut S, property: &Property) {
    let mut images = property.images.iter();
    if let Some(hero) = images.next() {
        sink.preload(hero, FetchPriority::High);
    }
    for url in images {
        sink.preload(url, FetchPriority::Low);
    }
}
