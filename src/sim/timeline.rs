/*!
 * Execution Timeline
 * Ordered segments describing who held the CPU and when
 */

use crate::core::types::Tick;
use serde::Serialize;

/// One uninterrupted stretch of execution for a single process
///
/// Covers the half-open interval `[start, end)`, so `end` is the first
/// tick the process no longer holds the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Segment {
    pub id: String,
    pub start: Tick,
    pub end: Tick,
}

impl Segment {
    pub fn new(id: impl Into<String>, start: Tick, end: Tick) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Number of ticks covered by this segment
    pub fn ticks(&self) -> Tick {
        self.end - self.start
    }
}

/// Time-ordered, non-overlapping list of segments
///
/// Idle time shows up as a gap between segments, never as a segment of
/// its own. Consecutive segments always belong to different processes
/// because an uninterrupted run is reported as one segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    /// Append a closed segment; the run emits them in time order
    pub(crate) fn push(&mut self, segment: Segment) {
        debug_assert!(segment.start < segment.end);
        debug_assert!(self
            .segments
            .last()
            .map_or(true, |last| last.end <= segment.start));
        self.segments.push(segment);
    }

    /// Segments in execution order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Total ticks spent executing (gaps excluded)
    pub fn busy_ticks(&self) -> Tick {
        self.segments.iter().map(Segment::ticks).sum()
    }

    /// End of the last segment, or zero for an empty timeline
    pub fn span(&self) -> Tick {
        self.segments.last().map_or(0, |segment| segment.end)
    }

    /// Segments belonging to one process, in execution order
    pub fn segments_for<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Segment> + 'a {
        self.segments.iter().filter(move |segment| segment.id == id)
    }

    /// Tick at which a process first reached the CPU
    pub fn first_run(&self, id: &str) -> Option<Tick> {
        self.segments_for(id).next().map(|segment| segment.start)
    }

    /// True when every segment is well formed and no two overlap
    pub fn is_ordered(&self) -> bool {
        self.segments
            .windows(2)
            .all(|pair| pair[0].end <= pair[1].start)
            && self.segments.iter().all(|segment| segment.start < segment.end)
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
