//! Breadth-first growth driver.
//!
//! [`LatticeBuilder`] seeds the root, then pops vertices in discovery order
//! and expands every one closer to the root than the configured depth.
//! Each [`step()`](LatticeBuilder::step) handles exactly one queued vertex,
//! so callers can drive growth incrementally and inspect the partial graph
//! between steps; [`run()`](LatticeBuilder::run) drives it to completion.
//!
//! # Distance labels
//!
//! Vertices leave the queue in non-decreasing distance order, and a vertex's
//! label is final before it is expanded. Relaxing the three edges of each
//! expansion in both directions is then enough to keep every label equal to
//! the true hop count, which the oracle can confirm when
//! [`GenerateConfig::verify`] is set.

use std::collections::VecDeque;
use std::time::Instant;

use trilat_core::{Distance, VertexId};
use trilat_graph::Graph;
use trilat_space::{Expansion, LatticeGrid};

use crate::config::GenerateConfig;
use crate::error::GenerateError;
use crate::metrics::BuildMetrics;

// ── BuilderState ────────────────────────────────────────────────

/// Lifecycle of a [`LatticeBuilder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuilderState {
    /// Vertices remain queued.
    Growing,
    /// The queue is empty, or growth was aborted by an error.
    Done,
}

// ── StepOutcome ─────────────────────────────────────────────────

/// What a single [`LatticeBuilder::step()`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The popped vertex was expanded; its new neighbours were queued.
    Expanded(Expansion),
    /// The popped vertex lies at or beyond the depth bound. It stays in the
    /// graph but is not expanded.
    Discarded {
        /// The popped vertex.
        vertex: VertexId,
        /// Its distance label.
        distance: Distance,
    },
    /// Nothing left to do.
    Done,
}

// ── Lattice ─────────────────────────────────────────────────────

/// A fully grown lattice.
#[derive(Clone, Debug)]
pub struct Lattice {
    /// The vertex arena with final distance labels.
    pub graph: Graph,
    /// Where each vertex was placed.
    pub grid: LatticeGrid,
    /// Counters collected during growth.
    pub metrics: BuildMetrics,
}

// ── LatticeBuilder ──────────────────────────────────────────────

/// Single-threaded breadth-first lattice builder.
///
/// # Examples
///
/// ```
/// use trilat_engine::{BuilderState, GenerateConfig, LatticeBuilder, StepOutcome};
///
/// let mut builder = LatticeBuilder::new(GenerateConfig::with_depth(1)).unwrap();
/// assert_eq!(builder.pending(), 1);
///
/// // The root expands into three leaves...
/// assert!(matches!(builder.step().unwrap(), StepOutcome::Expanded(_)));
/// assert_eq!(builder.pending(), 3);
///
/// // ...which sit on the depth bound and are discarded.
/// for _ in 0..3 {
///     assert!(matches!(builder.step().unwrap(), StepOutcome::Discarded { .. }));
/// }
/// assert_eq!(builder.state(), BuilderState::Done);
///
/// let lattice = builder.run().unwrap();
/// assert_eq!(lattice.graph.vertex_count(), 4);
/// ```
#[derive(Debug)]
pub struct LatticeBuilder {
    config: GenerateConfig,
    depth: u32,
    graph: Graph,
    grid: LatticeGrid,
    queue: VecDeque<VertexId>,
    state: BuilderState,
    metrics: BuildMetrics,
    started: Instant,
    failure: Option<GenerateError>,
}

impl LatticeBuilder {
    /// Validate `config`, seed the root and queue it.
    pub fn new(config: GenerateConfig) -> Result<Self, GenerateError> {
        let depth = config.hop_depth()?;
        let started = Instant::now();
        let mut graph = Graph::new();
        let (grid, root) = LatticeGrid::seeded(&mut graph)?;
        tracing::debug!(
            depth,
            vertex_limit = ?config.vertex_limit,
            verify = config.verify,
            "seeded lattice"
        );
        Ok(Self {
            config,
            depth,
            graph,
            grid,
            queue: VecDeque::from([root]),
            state: BuilderState::Growing,
            metrics: BuildMetrics::default(),
            started,
            failure: None,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// The configuration this builder was created with.
    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// The graph grown so far.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The placement grid grown so far.
    pub fn grid(&self) -> &LatticeGrid {
        &self.grid
    }

    /// Counters collected so far.
    pub fn metrics(&self) -> &BuildMetrics {
        &self.metrics
    }

    /// Vertices discovered but not yet popped.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Pop one vertex and expand or discard it.
    ///
    /// Once the queue drains the builder moves to [`BuilderState::Done`]
    /// and further calls return [`StepOutcome::Done`].
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::VertexLimitExceeded`] if the expansion took
    /// the graph past the configured limit, and [`GenerateError::Space`] if
    /// the grid rejected the expansion. Either error stops the builder; the
    /// partial graph stays readable through [`graph()`](Self::graph).
    pub fn step(&mut self) -> Result<StepOutcome, GenerateError> {
        if self.state == BuilderState::Done {
            return Ok(StepOutcome::Done);
        }
        let Some(vertex) = self.queue.pop_front() else {
            self.finish();
            return Ok(StepOutcome::Done);
        };

        let distance = self
            .graph
            .distance(vertex)
            .unwrap_or(Distance::INFINITE);
        let within_bound = matches!(distance.get(), Some(hops) if hops < self.depth);
        let outcome = if within_bound {
            let expansion = match self.grid.expand(&mut self.graph, vertex) {
                Ok(expansion) => expansion,
                Err(e) => return Err(self.abort(e.into())),
            };
            self.metrics.record(&expansion);
            self.queue.extend(expansion.created.iter().copied());
            if let Some(limit) = self.config.vertex_limit {
                if self.graph.vertex_count() > limit {
                    tracing::warn!(
                        limit,
                        vertex_count = self.graph.vertex_count(),
                        "vertex limit exceeded, aborting growth"
                    );
                    return Err(self.abort(GenerateError::VertexLimitExceeded { limit }));
                }
            }
            StepOutcome::Expanded(expansion)
        } else {
            self.metrics.discarded += 1;
            tracing::trace!(vertex = vertex.0, %distance, "discarded at depth bound");
            StepOutcome::Discarded { vertex, distance }
        };

        if self.queue.is_empty() {
            self.finish();
        }
        Ok(outcome)
    }

    /// Step until done and return the finished lattice.
    ///
    /// With [`GenerateConfig::verify`] set, every distance label and edge is
    /// checked against the oracle before returning. A builder stopped by an
    /// earlier [`step()`](Self::step) error returns that error again.
    pub fn run(mut self) -> Result<Lattice, GenerateError> {
        while self.state == BuilderState::Growing {
            self.step()?;
        }
        if let Some(e) = self.failure {
            return Err(e);
        }
        if self.config.verify {
            self.graph.verify()?;
            tracing::debug!(vertices = self.graph.vertex_count(), "labels verified");
        }
        Ok(Lattice {
            graph: self.graph,
            grid: self.grid,
            metrics: self.metrics,
        })
    }

    fn finish(&mut self) {
        self.state = BuilderState::Done;
        self.metrics.total_us = self.started.elapsed().as_micros() as u64;
        tracing::debug!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            expansions = self.metrics.expansions,
            discarded = self.metrics.discarded,
            total_us = self.metrics.total_us,
            "lattice complete"
        );
    }

    fn abort(&mut self, error: GenerateError) -> GenerateError {
        self.queue.clear();
        self.state = BuilderState::Done;
        self.metrics.total_us = self.started.elapsed().as_micros() as u64;
        self.failure = Some(error.clone());
        error
    }
}
