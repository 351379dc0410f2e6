//! Matching utilities for multi-object tracking.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::tracker::rect::{Rect, iou_batch};

/// Cost of an impossible pairing in the padded square problem.
const PADDING_COST: f64 = 1e6;

/// Compute IoU distance matrix between tracks and detections.
///
/// `cost[i][j] = 1 - IoU(track[i], detection[j])`, rows and columns in input order.
pub fn iou_distance(track_boxes: &[Rect], det_boxes: &[Rect]) -> Array2<f32> {
    iou_batch(track_boxes, det_boxes).mapv(|iou| 1.0 - iou)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentResult {
    pub matches: Vec<(usize, usize)>,
    pub unmatched_tracks: Vec<usize>,
    pub unmatched_detections: Vec<usize>,
}

impl AssignmentResult {
    /// Nothing matched: every row and every column left over.
    fn unmatched(num_rows: usize, num_cols: usize) -> Self {
        Self {
            matches: vec![],
            unmatched_tracks: (0..num_rows).collect(),
            unmatched_detections: (0..num_cols).collect(),
        }
    }

    fn from_matches(matches: Vec<(usize, usize)>, num_rows: usize, num_cols: usize) -> Self {
        let mut row_free = vec![true; num_rows];
        let mut col_free = vec![true; num_cols];
        for &(row, col) in &matches {
            row_free[row] = false;
            col_free[col] = false;
        }
        Self {
            matches,
            unmatched_tracks: free_indices(&row_free),
            unmatched_detections: free_indices(&col_free),
        }
    }
}

fn free_indices(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &free)| if free { Some(i) } else { None })
        .collect()
}

/// A bipartite matcher over a track × detection cost matrix.
///
/// Pairs whose cost is `>= thresh` are inadmissible.
pub trait AssignmentSolver {
    fn solve(&self, cost_matrix: &Array2<f32>, thresh: f32) -> AssignmentResult;
}

/// Which matcher the tracker cascade runs at every stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Cheapest-pair-first greedy matching.
    #[default]
    Greedy,
    /// Minimum total cost assignment (Jonker-Volgenant).
    Optimal,
}

impl AssignmentSolver for MatchStrategy {
    fn solve(&self, cost_matrix: &Array2<f32>, thresh: f32) -> AssignmentResult {
        match self {
            MatchStrategy::Greedy => greedy_assignment(cost_matrix, thresh),
            MatchStrategy::Optimal => linear_assignment(cost_matrix, thresh),
        }
    }
}

/// Greedy matching: accept admissible pairs in ascending cost order, skipping
/// any pair whose row or column is already taken.
///
/// Equal costs keep their enumeration order (rows outer, columns inner).
pub fn greedy_assignment(cost_matrix: &Array2<f32>, thresh: f32) -> AssignmentResult {
    let (num_rows, num_cols) = cost_matrix.dim();
    if num_rows == 0 || num_cols == 0 {
        return AssignmentResult::unmatched(num_rows, num_cols);
    }

    let mut candidates: Vec<(usize, usize, f32)> = cost_matrix
        .indexed_iter()
        .filter(|&(_, &cost)| cost < thresh)
        .map(|((row, col), &cost)| (row, col, cost))
        .collect();
    // sort_by is stable
    candidates.sort_by(|a, b| a.2.total_cmp(&b.2));

    let mut row_taken = vec![false; num_rows];
    let mut col_taken = vec![false; num_cols];
    let mut matches = vec![];

    for (row, col, _) in candidates {
        if row_taken[row] || col_taken[col] {
            continue;
        }
        row_taken[row] = true;
        col_taken[col] = true;
        matches.push((row, col));
    }

    AssignmentResult::from_matches(matches, num_rows, num_cols)
}

/// Optimal matching on the padded square problem, then thresholded.
pub fn linear_assignment(cost_matrix: &Array2<f32>, thresh: f32) -> AssignmentResult {
    let (num_rows, num_cols) = cost_matrix.dim();
    if num_rows == 0 || num_cols == 0 {
        return AssignmentResult::unmatched(num_rows, num_cols);
    }

    let size = num_rows.max(num_cols);
    let mut padded = Array2::<f64>::from_elem((size, size), PADDING_COST);
    for ((i, j), &cost) in cost_matrix.indexed_iter() {
        padded[[i, j]] = cost as f64;
    }

    let row_to_col = match lapjv::lapjv(&padded) {
        Ok((row_to_col, _)) => row_to_col,
        Err(err) => {
            warn!(?err, num_rows, num_cols, "optimal assignment failed, leaving all unmatched");
            return AssignmentResult::unmatched(num_rows, num_cols);
        }
    };

    let matches = row_to_col
        .into_iter()
        .enumerate()
        .filter(|&(row, col)| row < num_rows && col < num_cols)
        .filter(|&(row, col)| cost_matrix[[row, col]] < thresh)
        .collect();

    AssignmentResult::from_matches(matches, num_rows, num_cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_iou_distance() {
        let tracks = [Rect::new(0.0, 0.0, 10.0, 10.0)];
        let dets = [Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(100.0, 0.0, 10.0, 10.0)];
        let dists = iou_distance(&tracks, &dets);
        assert_eq!(dists.dim(), (1, 2));
        assert!(dists[[0, 0]].abs() < 1e-6);
        assert_eq!(dists[[0, 1]], 1.0);
    }

    #[test]
    fn test_greedy_diagonal() {
        let cost = array![[0.1, 0.9], [0.9, 0.1]];
        let result = greedy_assignment(&cost, 0.5);
        assert_eq!(result.matches, vec![(0, 0), (1, 1)]);
        assert!(result.unmatched_tracks.is_empty());
        assert!(result.unmatched_detections.is_empty());
    }

    #[test]
    fn test_greedy_all_above_threshold() {
        let cost = array![[0.6, 0.6]];
        let result = greedy_assignment(&cost, 0.5);
        assert!(result.matches.is_empty());
        assert_eq!(result.unmatched_tracks, vec![0]);
        assert_eq!(result.unmatched_detections, vec![0, 1]);
    }

    #[test]
    fn test_greedy_threshold_is_exclusive() {
        let cost = array![[0.5]];
        let result = greedy_assignment(&cost, 0.5);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_greedy_ties_follow_enumeration_order() {
        let cost = array![[0.2, 0.2], [0.2, 0.2]];
        let result = greedy_assignment(&cost, 0.5);
        assert_eq!(result.matches, vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_empty_inputs() {
        let no_tracks = Array2::<f32>::zeros((0, 3));
        let result = greedy_assignment(&no_tracks, 0.5);
        assert!(result.matches.is_empty());
        assert!(result.unmatched_tracks.is_empty());
        assert_eq!(result.unmatched_detections, vec![0, 1, 2]);

        let no_dets = Array2::<f32>::zeros((2, 0));
        let result = MatchStrategy::Optimal.solve(&no_dets, 0.5);
        assert_eq!(result.unmatched_tracks, vec![0, 1]);
        assert!(result.unmatched_detections.is_empty());
    }

    #[test]
    fn test_greedy_versus_optimal() {
        // Greedy grabs (0, 0) first and strands the rest; the optimal
        // solver pairs across for a lower total cost.
        let cost = array![[0.1, 0.2], [0.2, 0.9]];

        let greedy = MatchStrategy::Greedy.solve(&cost, 0.5);
        assert_eq!(greedy.matches, vec![(0, 0)]);
        assert_eq!(greedy.unmatched_tracks, vec![1]);
        assert_eq!(greedy.unmatched_detections, vec![1]);

        let optimal = MatchStrategy::Optimal.solve(&cost, 0.5);
        assert_eq!(optimal.matches, vec![(0, 1), (1, 0)]);
        assert!(optimal.unmatched_tracks.is_empty());
        assert!(optimal.unmatched_detections.is_empty());
    }

    #[test]
    fn test_optimal_rectangular_and_thresholded() {
        let cost = array![[0.1, 0.8, 0.3], [0.7, 0.95, 0.6]];
        let result = linear_assignment(&cost, 0.5);
        assert_eq!(result.matches, vec![(0, 0)]);
        assert_eq!(result.unmatched_tracks, vec![1]);
        assert_eq!(result.unmatched_detections, vec![1, 2]);
    }
}
