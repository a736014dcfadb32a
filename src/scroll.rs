use crate::error::{ScrollvineError, ScrollvineResult};

/// A scroll range over which the viewport holds a section pinned while
/// progress advances from 0 to 1.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct PinnedRegion {
    /// Scrollable extent in pixels.
    pub extent_px: f64,
}

impl PinnedRegion {
    pub fn new(extent_px: f64) -> ScrollvineResult<Self> {
        if !extent_px.is_finite() || extent_px <= 0.0 {
            return Err(ScrollvineError::validation(
                "pinned region extent must be > 0",
            ));
        }
        Ok(Self { extent_px })
    }

    /// Extent derived the way pinned sections size themselves: viewport
    /// height times a fixed multiplier.
    pub fn from_viewport(viewport_height_px: f64, multiplier: f64) -> ScrollvineResult<Self> {
        Self::new(viewport_height_px * multiplier)
    }

    /// Normalized progress for a raw scroll offset, clamped to `[0, 1]`
    /// even when native scrolling overshoots the region.
    pub fn progress_at(self, offset_px: f64) -> f64 {
        (offset_px / self.extent_px).clamp(0.0, 1.0)
    }
}

/// One tick's worth of input for the animation engine: normalized progress
/// plus its frame-to-frame delta. Velocity is re-derived every tick and
/// never smoothed, so it drops to 0 the instant scrolling stops.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct TickSample {
    pub progress: f64,
    pub velocity: f64,
}

impl TickSample {
    /// A still sample at the given progress. Useful for tests and for
    /// stepping through a scene offline.
    pub fn at(progress: f64) -> Self {
        Self {
            progress: progress.clamp(0.0, 1.0),
            velocity: 0.0,
        }
    }
}

pub type TickObserver = Box<dyn FnMut(TickSample)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Owns progress sampling for one pinned region and fans each tick out to
/// the attached observers.
///
/// This is an explicit context with an explicit lifecycle: construct it
/// next to the scene, attach consumers, and detach them (or tear the whole
/// context down) when the scene goes away. A detached observer is
/// guaranteed to never fire again; there is no global trigger registry to
/// leak callbacks into.
pub struct ScrollContext {
    region: PinnedRegion,
    last_progress: f64,
    next_id: u64,
    observers: Vec<(ObserverId, TickObserver)>,
}

impl ScrollContext {
    pub fn new(region: PinnedRegion) -> Self {
        Self {
            region,
            last_progress: 0.0,
            next_id: 0,
            observers: Vec::new(),
        }
    }

    pub fn region(&self) -> PinnedRegion {
        self.region
    }

    /// Progress recorded by the most recent sample.
    pub fn progress(&self) -> f64 {
        self.last_progress
    }

    /// Convert a raw scroll offset into this tick's sample. Remembers the
    /// progress so the next tick can derive its velocity; this is the only
    /// state the scroll source keeps.
    pub fn sample(&mut self, offset_px: f64) -> TickSample {
        let progress = self.region.progress_at(offset_px);
        let velocity = progress - self.last_progress;
        self.last_progress = progress;
        TickSample { progress, velocity }
    }

    pub fn attach(&mut self, observer: TickObserver) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Detach one observer. Returns `false` when the id was unknown (for
    /// instance after a double detach).
    pub fn detach(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Sample once and hand the same sample to every live observer, so all
    /// subsystems see an identical progress value within the tick.
    pub fn tick(&mut self, offset_px: f64) {
        let sample = self.sample(offset_px);
        for (_, observer) in &mut self.observers {
            observer(sample);
        }
    }

    /// Drop every observer at once (scene teardown).
    pub fn teardown(&mut self) {
        let dropped = self.observers.len();
        self.observers.clear();
        tracing::debug!(dropped, "scroll context torn down");
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl std::fmt::Debug for ScrollContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollContext")
            .field("region", &self.region)
            .field("last_progress", &self.last_progress)
            .field("observers", &self.observers.len())
            .finish()
    }
}
