//! The maze service: generation, validation and streamed solves.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use log::{debug, error, info, warn};
use mazer_core::{Context, Grid};
use mazer_gen::MazeGen;
use mazer_paths::{
    Aborted, Algorithm, Emitter, Outcome, Pacer, SleepPacer, SolveError, Speed, StepEvent,
    StepSink, solve,
};
use rand::Rng;

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::messages::{ClientMsg, GenerateRequest, ServerMsg, SolveRequest, StepMsg};

/// Forwards step events to a client channel as [`ServerMsg::MazeSolvingStep`].
struct MessageSink<'a> {
    tx: &'a Sender<ServerMsg>,
}

impl StepSink for MessageSink<'_> {
    fn emit(&mut self, event: StepEvent) -> Result<(), Aborted> {
        self.tx
            .send(ServerMsg::MazeSolvingStep(StepMsg::from(event)))
            .map_err(|_| Aborted)
    }
}

/// A validated solve request, ready to run.
#[derive(Debug, Clone)]
pub struct SolveJob {
    pub grid: Arc<Grid>,
    pub algorithm: Algorithm,
    pub speed: Speed,
}

impl SolveJob {
    /// Run the solve, streaming steps into `tx` and finishing with exactly
    /// one terminal message. A cancelled solve sends no terminal message.
    pub fn run<P: Pacer>(
        &self,
        ctx: &Context,
        tx: &Sender<ServerMsg>,
        pacer: P,
    ) -> Result<Outcome, ServiceError> {
        info!(
            "solving {}x{} maze with algorithm: {} at speed: {}",
            self.grid.rows(),
            self.grid.cols(),
            self.algorithm,
            self.speed
        );
        let mut em = Emitter::new(MessageSink { tx }, pacer, ctx.clone());

        let outcome = match solve(&self.grid, self.algorithm, &mut em) {
            Ok(outcome) => outcome,
            Err(SolveError::Aborted) => {
                warn!("{} solve aborted after {} events", self.algorithm, em.stats().total());
                return Err(ServiceError::Aborted);
            }
            Err(e) => return Err(e.into()),
        };

        let stats = em.stats();
        debug!(
            "{} expanded {} cells, admitted {} to the frontier",
            self.algorithm, stats.visiting, stats.frontier
        );

        let terminal = match &outcome {
            Outcome::Solved(path) => {
                info!("{} solved the maze in {} steps", self.algorithm, path.len() - 1);
                ServerMsg::MazeSolved {
                    solution: path.clone(),
                }
            }
            Outcome::NoSolution => {
                info!("{} found no solution", self.algorithm);
                ServerMsg::NoSolution {}
            }
        };
        tx.send(terminal).map_err(|_| ServiceError::Aborted)?;
        Ok(outcome)
    }
}

/// Handle to a solve running on its own thread.
pub struct SolveHandle {
    ctx: Context,
    join: JoinHandle<Result<Outcome, ServiceError>>,
}

impl SolveHandle {
    /// Ask the solve to stop. It returns [`ServiceError::Aborted`] at its
    /// next step.
    pub fn cancel(&self) {
        self.ctx.cancel();
    }

    /// Wait for the solve to end.
    pub fn join(self) -> Result<Outcome, ServiceError> {
        self.join.join().unwrap_or(Err(ServiceError::Aborted))
    }
}

/// Entry point for a transport.
pub struct MazeService {
    config: ServiceConfig,
}

impl Default for MazeService {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}

impl MazeService {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Generate a maze with the thread-local random source.
    pub fn generate_maze(&self, req: &GenerateRequest) -> Result<Grid, ServiceError> {
        self.generate_maze_with(req, rand::rng())
    }

    /// Generate a maze with a caller-supplied random source.
    pub fn generate_maze_with<R: Rng>(
        &self,
        req: &GenerateRequest,
        rng: R,
    ) -> Result<Grid, ServiceError> {
        let rows = req.rows.unwrap_or(self.config.default_rows);
        let cols = req.cols.unwrap_or(self.config.default_cols);
        let grid = MazeGen::new(rng)
            .with_open_pct(self.config.open_pct)
            .with_max_cells(self.config.max_cells)
            .generate(rows, cols)?;
        Ok(grid)
    }

    /// Validate a solve request without running it.
    ///
    /// The algorithm defaults to BFS when absent; the speed defaults to
    /// medium when absent or unknown.
    pub fn prepare(&self, req: &SolveRequest) -> Result<SolveJob, ServiceError> {
        let rows = match req.maze.as_deref() {
            Some(rows) if !rows.is_empty() => rows,
            _ => return Err(ServiceError::Input("No maze provided".into())),
        };
        let grid = Grid::from_rows(rows)?;
        let algorithm = match req.algorithm.as_deref() {
            Some(name) => name.parse()?,
            None => Algorithm::default(),
        };
        let speed = req.speed.as_deref().map(Speed::from_name).unwrap_or_default();
        Ok(SolveJob {
            grid: Arc::new(grid),
            algorithm,
            speed,
        })
    }

    fn pacer(&self, speed: Speed) -> SleepPacer {
        SleepPacer::new(self.config.pacing.delay(speed))
    }

    /// Validate and run a solve on the calling thread.
    ///
    /// Invalid input is reported on `tx` as [`ServerMsg::Error`] before any
    /// step is emitted, and returned.
    pub fn solve_maze(
        &self,
        req: &SolveRequest,
        ctx: &Context,
        tx: &Sender<ServerMsg>,
    ) -> Result<Outcome, ServiceError> {
        let job = self.prepare(req).inspect_err(|e| report(tx, e))?;
        job.run(ctx, tx, self.pacer(job.speed))
    }

    /// Validate a solve on the calling thread, then run it on a new one.
    pub fn spawn_solve(
        &self,
        req: &SolveRequest,
        tx: Sender<ServerMsg>,
    ) -> Result<SolveHandle, ServiceError> {
        let job = self.prepare(req).inspect_err(|e| report(&tx, e))?;
        let pacer = self.pacer(job.speed);
        let ctx = Context::new();
        let run_ctx = ctx.clone();
        let join = thread::spawn(move || job.run(&run_ctx, &tx, pacer));
        Ok(SolveHandle { ctx, join })
    }

    /// Dispatch one client message, replying on `tx`.
    pub fn handle(
        &self,
        msg: ClientMsg,
        ctx: &Context,
        tx: &Sender<ServerMsg>,
    ) -> Result<(), ServiceError> {
        match msg {
            ClientMsg::GenerateMaze(req) => {
                let maze = self.generate_maze(&req).inspect_err(|e| report(tx, e))?;
                tx.send(ServerMsg::MazeGenerated { maze })
                    .map_err(|_| ServiceError::Aborted)
            }
            ClientMsg::SolveMaze(req) => self.solve_maze(&req, ctx, tx).map(|_| ()),
        }
    }
}

/// Log a request error and pass it on to the client.
fn report(tx: &Sender<ServerMsg>, e: &ServiceError) {
    error!("{e}");
    // The client may already be gone; the caller still gets the error.
    let _ = tx.send(ServerMsg::Error {
        message: e.to_string(),
    });
}
