//! The wave-by-wave flood-fill engine.
//!
//! # Stepping model
//!
//! The frontier holds the cells discovered by the previous wave. A call
//! to [`FloodFillEngine::step`] snapshots the frontier length first and
//! expands exactly that many cells, so cells discovered during the call
//! wait for the next one. Cells are marked `Visited` when enqueued, which
//! keeps every coordinate in the frontier at most once.
//!
//! After expanding a layer the engine looks one wave ahead: if no cell of
//! the new frontier has an `Empty` neighbour, the frontier is drained and
//! the engine becomes [`EngineState::Exhausted`] within the same call.
//! `Exhausted` is terminal until [`reset`](FloodFillEngine::reset).

use std::collections::VecDeque;
use std::time::Instant;

use indexmap::IndexMap;
use log::{debug, info, trace, warn};
use wavefill_core::{
    CellState, Coord, EngineError, GridError, StartRejection, StepError, WaveId,
};
use wavefill_grid::Grid;

use crate::config::{ConfigError, EngineConfig, ExhaustionPolicy};
use crate::metrics::StepMetrics;

// ── EngineState / StepOutcome ───────────────────────────────────

/// Lifecycle of a flood fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// The frontier may still reach new cells.
    Running,
    /// No reachable cell is left unvisited.
    Exhausted,
}

/// Result of one [`FloodFillEngine::step`] call.
///
/// Depends only on the engine state and grid before the call. Timing for
/// the call lives in [`FloodFillEngine::last_metrics`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Depth of the layer this call produced.
    ///
    /// For a no-op call after exhaustion this repeats the last wave.
    pub wave: WaveId,
    /// Cells reached by this call, in discovery order.
    pub newly_visited: Vec<Coord>,
    /// Whether the engine is exhausted after this call.
    pub exhausted: bool,
}

// ── FloodFillEngine ─────────────────────────────────────────────

/// Breadth-first flood fill advanced one layer per [`step()`](Self::step).
///
/// The engine owns its grid exclusively. Walls may be toggled between
/// steps through [`toggle_wall`](Self::toggle_wall); cells already
/// reached are protected by the grid.
///
/// # Examples
///
/// ```
/// use wavefill_core::Coord;
/// use wavefill_engine::FloodFillEngine;
/// use wavefill_grid::Grid;
///
/// let grid = Grid::new(3).unwrap();
/// let mut engine = FloodFillEngine::new(grid, Coord::new(0, 0)).unwrap();
///
/// let first = engine.step().unwrap();
/// assert_eq!(first.newly_visited, vec![Coord::new(0, 1), Coord::new(1, 0)]);
/// assert!(!first.exhausted);
///
/// while !engine.is_exhausted() {
///     engine.step().unwrap();
/// }
/// assert_eq!(engine.visited_count(), 9);
/// ```
#[derive(Debug)]
pub struct FloodFillEngine {
    grid: Grid,
    start: Coord,
    frontier: VecDeque<Coord>,
    state: EngineState,
    wave: WaveId,
    ledger: IndexMap<Coord, WaveId>,
    policy: ExhaustionPolicy,
    last_metrics: StepMetrics,
}

impl FloodFillEngine {
    /// Take ownership of `grid` and seed the frontier with `start`.
    ///
    /// `start` must be in bounds and `Empty`; otherwise
    /// `EngineError::InvalidStart` is returned and the grid is dropped.
    /// The start cell is marked `Visited` at depth 0. The engine always
    /// begins `Running`, even when the start has no open neighbour;
    /// that case is detected by the first `step()`.
    pub fn new(mut grid: Grid, start: Coord) -> Result<Self, EngineError> {
        match grid.state_at(start) {
            Ok(CellState::Empty) => {}
            Ok(state) => {
                return Err(EngineError::InvalidStart {
                    coord: start,
                    reason: StartRejection::NotEmpty(state),
                });
            }
            Err(_) => {
                return Err(EngineError::InvalidStart {
                    coord: start,
                    reason: StartRejection::OutOfBounds,
                });
            }
        }
        grid.mark_visited(start.row, start.col)?;

        let mut ledger = IndexMap::new();
        ledger.insert(start, WaveId(0));
        debug!("flood fill seeded at {start} on a {0}x{0} grid", grid.size());

        Ok(Self {
            grid,
            start,
            frontier: VecDeque::from([start]),
            state: EngineState::Running,
            wave: WaveId(0),
            ledger,
            policy: ExhaustionPolicy::default(),
            last_metrics: StepMetrics::default(),
        })
    }

    /// Build a grid and engine from a validated [`EngineConfig`].
    ///
    /// Consumes the config.
    pub fn from_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut grid = Grid::new(config.grid_size)?;
        for wall in &config.walls {
            grid.toggle_wall(wall.row, wall.col)?;
        }
        Ok(Self::new(grid, config.start)?.with_policy(config.exhaustion))
    }

    /// Replace the exhaustion policy.
    pub fn with_policy(mut self, policy: ExhaustionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Expand the current frontier by one breadth-first layer.
    ///
    /// Every in-bounds `Empty` neighbour of a frontier cell is marked
    /// `Visited`, appended to the next frontier, and reported in
    /// [`StepOutcome::newly_visited`], in frontier order and then
    /// [`NEIGHBOUR_OFFSETS`](wavefill_grid::NEIGHBOUR_OFFSETS) order.
    ///
    /// # Errors
    ///
    /// Under [`ExhaustionPolicy::Strict`], a call after exhaustion returns
    /// [`StepError::NoMoreSteps`]. Under the default
    /// [`ExhaustionPolicy::NoOp`] the same call returns an empty outcome
    /// with `exhausted = true`.
    pub fn step(&mut self) -> Result<StepOutcome, StepError> {
        let started = Instant::now();

        if self.state == EngineState::Exhausted {
            warn!("step requested after exhaustion at wave {}", self.wave);
            return match self.policy {
                ExhaustionPolicy::Strict => Err(StepError::NoMoreSteps {
                    last_wave: self.wave,
                }),
                ExhaustionPolicy::NoOp => {
                    self.record_metrics(0, started);
                    Ok(StepOutcome {
                        wave: self.wave,
                        newly_visited: Vec::new(),
                        exhausted: true,
                    })
                }
            };
        }

        let wave = self.wave.next();
        let layer_len = self.frontier.len();
        let mut newly_visited = Vec::new();

        for _ in 0..layer_len {
            let Some(cell) = self.frontier.pop_front() else {
                break;
            };
            for nb in self.grid.neighbours(cell) {
                if self.grid.state_at(nb)? != CellState::Empty {
                    continue;
                }
                self.grid.mark_visited(nb.row, nb.col)?;
                self.frontier.push_back(nb);
                self.ledger.insert(nb, wave);
                trace!("wave {wave}: visited {nb}");
                newly_visited.push(nb);
            }
        }
        self.wave = wave;

        if !self.frontier_can_expand() {
            self.frontier.clear();
            self.state = EngineState::Exhausted;
            info!(
                "flood fill from {} exhausted at wave {wave} after {} cells",
                self.start,
                self.ledger.len()
            );
        }

        self.record_metrics(newly_visited.len(), started);
        debug!(
            "wave {wave}: {} newly visited, frontier {}",
            newly_visited.len(),
            self.frontier.len()
        );
        Ok(StepOutcome {
            wave,
            newly_visited,
            exhausted: self.state == EngineState::Exhausted,
        })
    }

    /// Whether any frontier cell still has an `Empty` neighbour.
    fn frontier_can_expand(&self) -> bool {
        self.frontier.iter().any(|&cell| {
            self.grid
                .neighbours(cell)
                .into_iter()
                .any(|nb| self.grid.state_at(nb) == Ok(CellState::Empty))
        })
    }

    fn record_metrics(&mut self, newly_visited: usize, started: Instant) {
        self.last_metrics = StepMetrics {
            newly_visited,
            frontier_len: self.frontier.len(),
            total_visited: self.ledger.len(),
            elapsed_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        };
    }

    /// Clear all visitation and re-seed the frontier with the start cell.
    ///
    /// Walls are kept, the wave counter returns to 0 and the engine is
    /// `Running` again.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        let cleared = self.grid.clear_visited();
        self.grid.mark_visited(self.start.row, self.start.col)?;
        self.frontier.clear();
        self.frontier.push_back(self.start);
        self.ledger.clear();
        self.ledger.insert(self.start, WaveId(0));
        self.wave = WaveId(0);
        self.state = EngineState::Running;
        self.last_metrics = StepMetrics::default();
        info!("flood fill reset at {} ({cleared} cells cleared)", self.start);
        Ok(())
    }

    /// Flip `(row, col)` between `Empty` and `Wall` on the owned grid.
    ///
    /// Returns the new state. Visited cells, including the start, are
    /// refused with `GridError::InvalidState`.
    pub fn toggle_wall(&mut self, row: i32, col: i32) -> Result<CellState, GridError> {
        self.grid.toggle_wall(row, col)
    }

    /// State of the cell at `(row, col)`.
    pub fn state_of(&self, row: i32, col: i32) -> Result<CellState, GridError> {
        self.grid.state_of(row, col)
    }

    /// Whether the frontier is exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.state == EngineState::Exhausted
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Depth of the most recently expanded wave (0 before the first step).
    pub fn current_wave(&self) -> WaveId {
        self.wave
    }

    /// Number of cells waiting in the frontier.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Number of visited cells, start included.
    pub fn visited_count(&self) -> usize {
        self.ledger.len()
    }

    /// BFS depth at which `coord` was reached, if it has been.
    pub fn depth_of(&self, coord: Coord) -> Option<WaveId> {
        self.ledger.get(&coord).copied()
    }

    /// Every visited cell with its depth, in discovery order.
    pub fn visit_order(&self) -> impl Iterator<Item = (Coord, WaveId)> + '_ {
        self.ledger.iter().map(|(&coord, &wave)| (coord, wave))
    }

    /// The origin of the fill.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Active exhaustion policy.
    pub fn policy(&self) -> ExhaustionPolicy {
        self.policy
    }

    /// Read-only view of the owned grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Metrics from the most recent `step()` call.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// ASCII picture of the grid with `S` marking the start cell.
    pub fn render(&self) -> String {
        let n = self.grid.size() as usize;
        let mut out = String::with_capacity(self.grid.cell_count() + n);
        for (coord, state) in self.grid.iter() {
            if coord.col == 0 && coord.row > 0 {
                out.push('\n');
            }
            out.push(if coord == self.start { 'S' } else { state.glyph() });
        }
        out
    }
}
