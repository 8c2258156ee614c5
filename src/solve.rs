use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt::Display;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::geom::{Coord, Direction};
use crate::maze::Maze;

/// Estimate of the remaining cost from one coordinate to another.
///
/// All variants are admissible for unit-cost cardinal movement, so each one
/// yields a shortest path; they only differ in how much of the maze the
/// search explores.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Heuristic {
    /// Straight-line distance, `hypot(dx, dy)`.
    #[default]
    Euclidean,
    /// Taxicab distance, `|dx| + |dy|`.
    Manhattan,
    /// Always zero, degrading A* to uniform-cost (Dijkstra) search.
    Zero,
}

impl Heuristic {
    pub fn estimate(self, from: Coord, to: Coord) -> f64 {
        let dx = (to.x - from.x) as f64;
        let dy = (to.y - from.y) as f64;

        match self {
            Heuristic::Euclidean => dx.hypot(dy),
            Heuristic::Manhattan => dx.abs() + dy.abs(),
            Heuristic::Zero => 0.0,
        }
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Heuristic::Euclidean => "euclidean",
                Heuristic::Manhattan => "manhattan",
                Heuristic::Zero => "zero",
            }
        )
    }
}

impl FromStr for Heuristic {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euclidean" => Ok(Heuristic::Euclidean),
            "manhattan" => Ok(Heuristic::Manhattan),
            "zero" => Ok(Heuristic::Zero),
            _ => Err(anyhow::anyhow!("Invalid heuristic: {}", s)),
        }
    }
}

/// A frontier entry: a coordinate keyed by its fScore at push time.
///
/// Reversed ordering turns the std max-heap into a min-heap; fScore ties are
/// broken by coordinate so the search order is fully deterministic. Score
/// improvements push a duplicate entry and the stale one is skipped on pop.
#[derive(Debug)]
struct OpenNode {
    f_score: f64,
    coord: Coord,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

impl Maze {
    /// Find a shortest path from the start opening to the end opening using
    /// A* with the given heuristic.
    ///
    /// Returns the path ordered start to end, inclusive of both endpoints.
    /// An empty vector means the maze has no solution; that is a normal
    /// outcome, not an error. All search state is local to the call, so a
    /// shared `&Maze` can be solved from several threads at once.
    pub fn solve(&self, heuristic: Heuristic) -> Vec<Coord> {
        let (start, end) = (self.start(), self.end());

        // sparse score maps: absence means "not yet discovered" (gScore of
        // +infinity), so large mazes are never pre-populated
        let mut came_from: HashMap<Coord, Coord> = HashMap::new();
        let mut g_score: HashMap<Coord, f64> = HashMap::new();
        let mut closed: HashSet<Coord> = HashSet::new();

        let mut open = BinaryHeap::new();
        g_score.insert(start, 0.0);
        open.push(OpenNode {
            f_score: heuristic.estimate(start, end),
            coord: start,
        });

        let mut expanded = 0usize;

        while let Some(OpenNode { coord: current, .. }) = open.pop() {
            if current == end {
                debug!(
                    "goal reached: cost={} expanded={} heuristic={}",
                    g_score[&current], expanded, heuristic
                );
                return reconstruct_path(&came_from, start, end);
            }

            // a lower-fScore entry for this coordinate was already processed
            if !closed.insert(current) {
                continue;
            }
            expanded += 1;
            trace!("expanding {} (g={})", current, g_score[&current]);

            let tentative_g = g_score[&current] + 1.0;

            for direction in Direction::ALL {
                let neighbor = current.step(direction);

                if !self.is_passable(neighbor) || closed.contains(&neighbor) {
                    continue;
                }

                // relax only on strict improvement
                match g_score.get(&neighbor) {
                    Some(&g) if tentative_g >= g => continue,
                    _ => {}
                }

                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative_g);
                open.push(OpenNode {
                    f_score: tentative_g + heuristic.estimate(neighbor, end),
                    coord: neighbor,
                });
            }
        }

        debug!("frontier exhausted after {} expansions, no path", expanded);
        Vec::new()
    }
}

/// Walk the predecessor chain backward from the end, then flip it so the
/// returned path reads start to end.
fn reconstruct_path(came_from: &HashMap<Coord, Coord>, start: Coord, end: Coord) -> Vec<Coord> {
    let mut path = vec![end];

    let mut current = end;
    while current != start {
        current = came_from[&current];
        path.push(current);
    }

    path.reverse();
    path
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::maze::test::cells_from_art;

    fn open_cross() -> Maze {
        // outer ring walled except the two openings, interior fully open
        Maze::new(cells_from_art(&[
            "XXXXX", //
            "X   X",
            "     ",
            "X   X",
            "XXXXX",
        ]))
        .unwrap()
    }

    #[test]
    fn test_straight_corridor() {
        let maze = open_cross();
        let path = maze.solve(Heuristic::Euclidean);

        assert_eq!(
            path,
            vec![
                Coord::new(0, 2),
                Coord::new(1, 2),
                Coord::new(2, 2),
                Coord::new(3, 2),
                Coord::new(4, 2),
            ]
        );
    }

    #[test]
    fn test_consecutive_coords_are_cardinal_steps() {
        let maze = Maze::new(cells_from_art(&[
            "X XXXX", //
            "X    X",
            "XXXX X",
            "X    X",
            "X XXXX",
            "X XXXX",
        ]))
        .unwrap();

        let path = maze.solve(Heuristic::Euclidean);

        assert_eq!(path.first(), Some(&maze.start()));
        assert_eq!(path.last(), Some(&maze.end()));
        for pair in path.windows(2) {
            let (dx, dy) = (pair[1].x - pair[0].x, pair[1].y - pair[0].y);
            assert_eq!(dx.abs() + dy.abs(), 1, "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_detour_around_barrier() {
        // vertical barrier through the interior with a single gap at the
        // bottom forces a detour of length 7
        let maze = Maze::new(cells_from_art(&[
            "XXXXX", //
            "X X X",
            "  X  ",
            "X   X",
            "XXXXX",
        ]))
        .unwrap();

        let path = maze.solve(Heuristic::Euclidean);

        assert_eq!(path.len(), 7);
        assert_eq!(path.first(), Some(&Coord::new(0, 2)));
        assert_eq!(path.last(), Some(&Coord::new(4, 2)));
    }

    #[test]
    fn test_full_barrier_has_no_path() {
        // the barrier spans the whole interior, disconnecting the openings;
        // an empty path is the expected result, not an error
        let maze = Maze::new(cells_from_art(&[
            "XXXXX", //
            "X X X",
            "  X  ",
            "X X X",
            "XXXXX",
        ]))
        .unwrap();

        assert_eq!(maze.solve(Heuristic::Euclidean), Vec::new());
    }

    #[test]
    fn test_enclosed_start_region_has_no_path() {
        let maze = Maze::new(cells_from_art(&[
            "XXXXXX", //
            "X XX X",
            " XXX  ",
            "XXXXXX",
        ]))
        .unwrap();

        assert_eq!(maze.solve(Heuristic::Manhattan), Vec::new());
    }

    #[test]
    fn test_solve_is_idempotent() {
        let maze = Maze::new(cells_from_art(&[
            "XX XXXX", //
            "X    XX",
            "X XX XX",
            "X XX  X",
            "XX XX X",
            "XX    X",
            "XXXXX X",
        ]))
        .unwrap();

        let first = maze.solve(Heuristic::Euclidean);
        let second = maze.solve(Heuristic::Euclidean);

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_heuristics_find_shortest_path() {
        let maze = Maze::new(cells_from_art(&[
            "XX XXXX", //
            "X    XX",
            "X XX XX",
            "X XX  X",
            "XX XX X",
            "XX    X",
            "XXXXX X",
        ]))
        .unwrap();

        let euclidean = maze.solve(Heuristic::Euclidean);
        let manhattan = maze.solve(Heuristic::Manhattan);
        let uniform = maze.solve(Heuristic::Zero);

        assert!(!euclidean.is_empty());
        assert_eq!(euclidean.len(), manhattan.len());
        assert_eq!(euclidean.len(), uniform.len());
    }
}
