//! Monotone paths over a [`Grid`].
//!
//! A [`Path`] always starts at `(0, 0)` and grows one [`Step`] at a time,
//! either to the right or down. It borrows its grid, caches its current
//! position and the gold collected so far, and refuses to step onto rocks or
//! off the map. Since steps only ever increase the row or the column, no cell
//! is visited twice and every visited cell's gold is counted exactly once.
//!
//! Paths are plain values. Algorithms that explore several continuations of
//! the same prefix clone it (see [`Path::branch`]) instead of sharing it.

use std::fmt;

use crate::grid::Grid;

/// One move of a gnome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Column + 1.
    Right,
    /// Row + 1.
    Down,
}

impl Step {
    /// `(d_row, d_column)` applied by this step.
    #[inline]
    pub fn delta(self) -> (usize, usize) {
        match self {
            Step::Right => (0, 1),
            Step::Down => (1, 0),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::Right => "right",
            Step::Down => "down",
        })
    }
}

/// An append-only sequence of steps from the start cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<'g> {
    grid: &'g Grid,
    steps: Vec<Step>,
    row: usize,
    column: usize,
    gold: u64,
}

impl<'g> Path<'g> {
    /// The trivial path: standing on `(0, 0)`, holding that cell's gold.
    pub fn new(grid: &'g Grid) -> Self {
        debug_assert!(grid.may_step(0, 0), "start cell must be open");
        Self {
            grid,
            steps: Vec::new(),
            row: 0,
            column: 0,
            gold: u64::from(grid.reward(0, 0)),
        }
    }

    /// Whether `step` keeps the path on the grid and off rocks.
    #[inline]
    pub fn is_step_valid(&self, step: Step) -> bool {
        let (dr, dc) = step.delta();
        self.grid.may_step(self.row + dr, self.column + dc)
    }

    /// Append `step`, moving onto the next cell and collecting its gold.
    ///
    /// # Panics
    /// Panics if [`is_step_valid`](Self::is_step_valid) does not hold.
    pub fn add_step(&mut self, step: Step) {
        assert!(
            self.is_step_valid(step),
            "invalid step {step} from ({}, {})",
            self.row,
            self.column
        );
        let (dr, dc) = step.delta();
        self.row += dr;
        self.column += dc;
        self.steps.push(step);
        self.gold += u64::from(self.grid.reward(self.row, self.column));
    }

    /// A copy of this path extended by `step`, or `None` if the step is not
    /// valid from here. `self` is left untouched.
    pub fn branch(&self, step: Step) -> Option<Self> {
        if !self.is_step_valid(step) {
            return None;
        }
        let mut next = self.clone();
        next.add_step(step);
        Some(next)
    }

    #[inline]
    pub fn total_gold(&self) -> u64 {
        self.gold
    }

    #[inline]
    pub fn final_row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn final_column(&self) -> usize {
        self.column
    }

    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps taken; zero for the trivial path.
    #[inline]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Coordinates visited, start cell first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut pos = (0usize, 0usize);
        std::iter::once(pos).chain(self.steps.iter().map(move |step| {
            let (dr, dc) = step.delta();
            pos = (pos.0 + dr, pos.1 + dc);
            pos
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GridBuilder;

    fn two_by_three() -> Grid {
        // 1 2 X
        // 3 4 5
        GridBuilder::new(2, 3)
            .with_row(0, [1, 2, 0])
            .with_blocked(0, 2)
            .with_row(1, [3, 4, 5])
            .build()
            .unwrap()
    }

    #[test]
    fn trivial_path_holds_start_gold() {
        let g = two_by_three();
        let p = Path::new(&g);
        assert_eq!(p.total_gold(), 1);
        assert_eq!(p.final_row(), 0);
        assert_eq!(p.final_column(), 0);
        assert!(p.steps().is_empty());
        assert_eq!(p.cells().collect::<Vec<_>>(), vec![(0, 0)]);
    }

    #[test]
    fn steps_accumulate_gold_and_position() {
        let g = two_by_three();
        let mut p = Path::new(&g);
        p.add_step(Step::Right);
        p.add_step(Step::Down);
        p.add_step(Step::Right);
        assert_eq!(p.total_gold(), 1 + 2 + 4 + 5);
        assert_eq!((p.final_row(), p.final_column()), (1, 2));
        assert_eq!(p.steps(), &[Step::Right, Step::Down, Step::Right]);
        assert_eq!(
            p.cells().collect::<Vec<_>>(),
            vec![(0, 0), (0, 1), (1, 1), (1, 2)]
        );
    }

    #[test]
    fn validity_checks_rocks_and_edges() {
        let g = two_by_three();
        let mut p = Path::new(&g);
        p.add_step(Step::Right);
        assert!(!p.is_step_valid(Step::Right)); // rock at (0, 2)
        p.add_step(Step::Down);
        assert!(!p.is_step_valid(Step::Down)); // bottom edge
        p.add_step(Step::Right);
        assert!(!p.is_step_valid(Step::Right)); // right edge
    }

    #[test]
    fn branch_leaves_parent_untouched() {
        let g = two_by_three();
        let parent = Path::new(&g);
        let right = parent.branch(Step::Right).unwrap();
        let down = parent.branch(Step::Down).unwrap();
        assert_eq!(parent.step_count(), 0);
        assert_eq!(right.total_gold(), 3);
        assert_eq!(down.total_gold(), 4);
        assert!(right.branch(Step::Right).is_none());
    }

    #[test]
    #[should_panic(expected = "invalid step")]
    fn add_step_onto_rock_panics() {
        let g = two_by_three();
        let mut p = Path::new(&g);
        p.add_step(Step::Right);
        p.add_step(Step::Right);
    }

    #[test]
    fn step_display() {
        assert_eq!(Step::Right.to_string(), "right");
        assert_eq!(Step::Down.to_string(), "down");
    }
}
