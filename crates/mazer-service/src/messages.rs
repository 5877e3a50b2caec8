//! Wire messages exchanged with a client.
//!
//! Both directions use an adjacently tagged envelope:
//!
//! ```text
//! {"event": "maze_solving_step", "data": {"position": [0, 1], "type": "frontier"}}
//! ```

use mazer_core::{Grid, Point};
use mazer_paths::{StepEvent, StepKind};
use serde::{Deserialize, Serialize};

/// Request to generate a maze. Missing dimensions take the configured
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateRequest {
    pub rows: Option<i32>,
    pub cols: Option<i32>,
}

/// Request to solve a maze.
///
/// The grid stays in its raw nested form so that a malformed one can be
/// reported as an input error instead of failing deserialization of the
/// whole message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveRequest {
    pub maze: Option<Vec<Vec<i64>>>,
    pub algorithm: Option<String>,
    pub speed: Option<String>,
}

impl SolveRequest {
    /// A request for `grid` with the given algorithm and speed names.
    pub fn new(grid: &Grid, algorithm: &str, speed: &str) -> Self {
        Self {
            maze: Some(
                grid.to_rows()
                    .into_iter()
                    .map(|row| row.into_iter().map(i64::from).collect())
                    .collect(),
            ),
            algorithm: Some(algorithm.to_string()),
            speed: Some(speed.to_string()),
        }
    }
}

/// Messages sent by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientMsg {
    GenerateMaze(GenerateRequest),
    SolveMaze(SolveRequest),
}

/// Payload of a single search step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepMsg {
    pub position: Point,
    #[serde(rename = "type")]
    pub kind: StepKind,
}

impl From<StepEvent> for StepMsg {
    fn from(e: StepEvent) -> Self {
        Self {
            position: e.pos,
            kind: e.kind,
        }
    }
}

/// Messages sent to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerMsg {
    MazeGenerated { maze: Grid },
    MazeSolvingStep(StepMsg),
    MazeSolved { solution: Vec<Point> },
    NoSolution {},
    Error { message: String },
}

impl ServerMsg {
    /// Whether this message ends a solve stream.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ServerMsg::MazeSolved { .. } | ServerMsg::NoSolution {} | ServerMsg::Error { .. }
        )
    }

    /// Serialize to a single JSON line.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn step_wire_shape() {
        let msg = ServerMsg::MazeSolvingStep(StepMsg {
            position: Point::new(2, 3),
            kind: StepKind::Visiting,
        });
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"event": "maze_solving_step", "data": {"position": [2, 3], "type": "visiting"}})
        );
    }

    #[test]
    fn terminal_wire_shapes() {
        let solved = ServerMsg::MazeSolved {
            solution: vec![Point::new(0, 0), Point::new(0, 1)],
        };
        assert_eq!(
            serde_json::to_value(&solved).unwrap(),
            json!({"event": "maze_solved", "data": {"solution": [[0, 0], [0, 1]]}})
        );
        assert_eq!(
            serde_json::to_value(ServerMsg::NoSolution {}).unwrap(),
            json!({"event": "no_solution", "data": {}})
        );
        assert!(solved.is_terminal());
        assert!(ServerMsg::NoSolution {}.is_terminal());
    }

    #[test]
    fn generated_maze_is_nested_rows() {
        let grid: Grid = ".#\n..".parse().unwrap();
        let msg = ServerMsg::MazeGenerated { maze: grid };
        assert_eq!(
            msg.to_json().unwrap(),
            r#"{"event":"maze_generated","data":{"maze":[[0,1],[0,0]]}}"#
        );
    }

    #[test]
    fn client_messages_with_missing_fields() {
        let msg: ClientMsg =
            serde_json::from_str(r#"{"event": "generate_maze", "data": {}}"#).unwrap();
        assert_eq!(msg, ClientMsg::GenerateMaze(GenerateRequest::default()));

        let msg: ClientMsg = serde_json::from_str(
            r#"{"event": "solve_maze", "data": {"maze": [[0, 0], [1, 0]], "algorithm": "astar"}}"#,
        )
        .unwrap();
        let ClientMsg::SolveMaze(req) = msg else {
            panic!("expected solve_maze");
        };
        assert_eq!(req.maze, Some(vec![vec![0, 0], vec![1, 0]]));
        assert_eq!(req.algorithm.as_deref(), Some("astar"));
        assert_eq!(req.speed, None);
    }

    #[test]
    fn solve_request_from_grid() {
        let grid: Grid = "..\n#.".parse().unwrap();
        let req = SolveRequest::new(&grid, "dfs", "fast");
        assert_eq!(req.maze, Some(vec![vec![0, 0], vec![1, 0]]));
    }
}
