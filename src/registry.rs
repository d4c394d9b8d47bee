//! Live-instance registry and event dispatch.
//!
//! Whoever wires up scroll and resize notifications owns a [`Registry`] and
//! feeds it [`Event`]s, either immediately with [`Registry::dispatch`] or
//! coalesced per rendered frame with [`Registry::schedule`] and
//! [`Registry::flush_frame`].

use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::controller::{MeasurementProvider, Parallax, ScrollSource};
use crate::style::PositionWriter;

/// Handle returned by [`Registry::register`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

/// Notification from the environment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Event<E> {
    /// A scroll source moved.
    Scroll(ScrollSource<E>),
    /// The viewport changed size.
    Resize,
}

/// Tracked elements sharing one set of listeners.
#[derive(Debug)]
pub struct Registry<E> {
    instances: Vec<(InstanceId, Parallax<E>)>,
    next_id: u64,
    pending_resize: bool,
    pending_scrolls: Vec<ScrollSource<E>>,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self {
            instances: Vec::new(),
            next_id: 0,
            pending_resize: false,
            pending_scrolls: Vec::new(),
        }
    }
}

impl<E: PartialEq> Registry<E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking an element and position it once from cached state.
    pub fn register<M, W>(&mut self, mut instance: Parallax<E>, provider: &M, writer: &mut W) -> InstanceId
    where
        M: MeasurementProvider<E>,
        W: PositionWriter<E>,
    {
        let id = InstanceId(self.next_id);
        self.next_id += 1;
        instance.update(provider, writer, false);
        self.instances.push((id, instance));
        debug!(?id, count = self.instances.len(), "registered");
        id
    }

    /// Stop tracking; the caller decides whether to [`Parallax::destroy`] it.
    pub fn unregister(&mut self, id: InstanceId) -> Option<Parallax<E>> {
        let index = self.instances.iter().position(|(i, _)| *i == id)?;
        let (_, instance) = self.instances.remove(index);
        debug!(?id, count = self.instances.len(), "unregistered");
        Some(instance)
    }

    pub fn get(&self, id: InstanceId) -> Option<&Parallax<E>> {
        self.instances
            .iter()
            .find(|(i, _)| *i == id)
            .map(|(_, p)| p)
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut Parallax<E>> {
        self.instances
            .iter_mut()
            .find(|(i, _)| *i == id)
            .map(|(_, p)| p)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Whether any instance wants resize notifications.
    pub fn needs_resize_listener(&self) -> bool {
        self.instances.iter().any(|(_, p)| p.options().responsive)
    }

    /// Deliver an event now. Returns how many instances were repositioned.
    ///
    /// Scrolls reach only instances driven by that source. Resizes reach
    /// every instance, newest first.
    pub fn dispatch<M, W>(&mut self, event: &Event<E>, provider: &M, writer: &mut W) -> usize
    where
        M: MeasurementProvider<E>,
        W: PositionWriter<E>,
    {
        let updated = match event {
            Event::Scroll(source) => self
                .instances
                .iter_mut()
                .filter(|(_, p)| p.scroll_source() == source)
                .filter_map(|(_, p)| p.on_scroll(provider, writer))
                .count(),
            Event::Resize => self
                .instances
                .iter_mut()
                .rev()
                .filter_map(|(_, p)| p.on_resize(provider, writer))
                .count(),
        };
        trace!(updated, "dispatched");
        updated
    }

    /// Queue an event until the next [`flush_frame`](Self::flush_frame).
    ///
    /// Repeated events for the same source collapse into one.
    pub fn schedule(&mut self, event: Event<E>) {
        match event {
            Event::Resize => self.pending_resize = true,
            Event::Scroll(source) => {
                if !self.pending_scrolls.contains(&source) {
                    self.pending_scrolls.push(source);
                }
            }
        }
    }

    /// Whether events are waiting for a flush.
    pub fn has_pending(&self) -> bool {
        self.pending_resize || !self.pending_scrolls.is_empty()
    }

    /// Deliver queued events: the resize first, then each scroll source once.
    pub fn flush_frame<M, W>(&mut self, provider: &M, writer: &mut W) -> usize
    where
        M: MeasurementProvider<E>,
        W: PositionWriter<E>,
    {
        let mut updated = 0;
        if core::mem::take(&mut self.pending_resize) {
            updated += self.dispatch(&Event::Resize, provider, writer);
        }
        for source in core::mem::take(&mut self.pending_scrolls) {
            updated += self.dispatch(&Event::Scroll(source), provider, writer);
        }
        updated
    }
}
