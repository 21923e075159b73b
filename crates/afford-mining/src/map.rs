use thiserror::Error;

use crate::state::MiningState;

const AGENT_SYM: char = 'a';
const ORE_SYM: char = '*';
const FURNACE_SYM: char = 'o';
const WALL_SYM: char = '=';
const FLOOR_SYM: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map is empty")]
    Empty,
    #[error("map has no agent start cell")]
    MissingAgent,
    #[error("map has more than one agent start cell")]
    DuplicateAgent,
    #[error("map row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("unknown map symbol '{0}'")]
    UnknownSymbol(char),
}

/// Parse an ASCII map into a [`MiningState`].
///
/// One character per cell, row-major from the top-left:
/// `a` agent start, `*` ore vein, `o` furnace, `=` wall, `.` floor.
/// Rows must all have the same width; exactly one agent is required.
///
/// ```
/// let state = afford_mining::parse_map("a.*\n.=o\n").unwrap();
/// assert_eq!(state.agent(), (0, 0));
/// assert!(state.ore().contains(&(2, 0)));
/// ```
pub fn parse_map(text: &str) -> Result<MiningState, MapError> {
    let rows: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
    if rows.is_empty() {
        return Err(MapError::Empty);
    }

    let width = rows[0].chars().count();
    let height = rows.len();

    let mut agent: Option<(usize, usize)> = None;
    let mut state = MiningState::new(width, height, (0, 0));

    for (y, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != width {
            return Err(MapError::RaggedRow {
                row: y,
                found,
                expected: width,
            });
        }
        for (x, sym) in row.chars().enumerate() {
            match sym {
                AGENT_SYM => {
                    if agent.replace((x, y)).is_some() {
                        return Err(MapError::DuplicateAgent);
                    }
                }
                ORE_SYM => state = state.with_ore((x, y)),
                FURNACE_SYM => state = state.with_furnace((x, y)),
                WALL_SYM => state = state.with_wall((x, y)),
                FLOOR_SYM => {}
                other => return Err(MapError::UnknownSymbol(other)),
            }
        }
    }

    let agent = agent.ok_or(MapError::MissingAgent)?;
    state.set_agent(agent);
    Ok(state)
}
