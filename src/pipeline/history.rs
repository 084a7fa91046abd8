//! Bounded trend history

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::types::ChartPoint;

/// Sliding window of the most recent chart points, oldest first.
///
/// Appending to a full buffer evicts from the front, so the buffer always
/// holds the last `capacity` points in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryBuffer {
    points: VecDeque<ChartPoint>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Empty buffer. A zero capacity is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Buffer pre-filled by appending `points` in order.
    pub fn seeded(capacity: usize, points: impl IntoIterator<Item = ChartPoint>) -> Self {
        let mut buffer = Self::new(capacity);
        for point in points {
            buffer.append(point);
        }
        buffer
    }

    pub fn append(&mut self, point: ChartPoint) {
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&ChartPoint> {
        self.points.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartPoint> {
        self.points.iter()
    }

    /// Contiguous copy, oldest first
    pub fn to_vec(&self) -> Vec<ChartPoint> {
        self.points.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(i: usize) -> ChartPoint {
        #[allow(clippy::cast_precision_loss)]
        let v = i as f64;
        ChartPoint::new(format!("p{i}"), 8000.0 + v, 9000.0, 0.3)
    }

    fn labels(buffer: &HistoryBuffer) -> Vec<String> {
        buffer.iter().map(|p| p.label.clone()).collect()
    }

    #[test]
    fn test_fills_up_to_capacity() {
        let mut buffer = HistoryBuffer::new(4);
        for i in 0..3 {
            buffer.append(point(i));
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(labels(&buffer), vec!["p0", "p1", "p2"]);
    }

    #[test]
    fn test_ten_appends_keep_last_four_in_order() {
        let mut buffer = HistoryBuffer::new(4);
        for i in 0..10 {
            buffer.append(point(i));
            assert!(buffer.len() <= 4);
        }
        assert_eq!(labels(&buffer), vec!["p6", "p7", "p8", "p9"]);
        assert_eq!(buffer.latest().map(|p| p.label.as_str()), Some("p9"));
    }

    #[test]
    fn test_seeded_larger_than_capacity_keeps_tail() {
        let buffer = HistoryBuffer::seeded(2, (0..5).map(point));
        assert_eq!(labels(&buffer), vec!["p3", "p4"]);
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let mut buffer = HistoryBuffer::new(0);
        assert_eq!(buffer.capacity(), 1);
        buffer.append(point(0));
        buffer.append(point(1));
        assert_eq!(labels(&buffer), vec!["p1"]);
    }
}
