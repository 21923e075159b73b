use std::collections::BTreeSet;

use afford_core::{ActionSchema, StateView};

/// Object classes this domain exposes to binding enumeration.
pub const CELL: &str = "cell";
pub const ORE: &str = "ore";
pub const FURNACE: &str = "furnace";

/// A mining world state: an agent on a grid with walls, ore veins, and
/// furnaces.
///
/// Uses `BTreeSet` cell storage so equality, hashing, and object
/// enumeration order are all structural and deterministic — states are
/// usable as cache keys directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MiningState {
    width: usize,
    height: usize,
    agent: (usize, usize),
    holding_ore: bool,
    walls: BTreeSet<(usize, usize)>,
    ore: BTreeSet<(usize, usize)>,
    furnaces: BTreeSet<(usize, usize)>,
}

impl MiningState {
    pub fn new(width: usize, height: usize, agent: (usize, usize)) -> Self {
        Self {
            width,
            height,
            agent,
            holding_ore: false,
            walls: BTreeSet::new(),
            ore: BTreeSet::new(),
            furnaces: BTreeSet::new(),
        }
    }

    pub fn with_wall(mut self, pos: (usize, usize)) -> Self {
        self.walls.insert(pos);
        self
    }

    pub fn with_ore(mut self, pos: (usize, usize)) -> Self {
        self.ore.insert(pos);
        self
    }

    pub fn with_furnace(mut self, pos: (usize, usize)) -> Self {
        self.furnaces.insert(pos);
        self
    }

    pub fn with_holding_ore(mut self, holding: bool) -> Self {
        self.holding_ore = holding;
        self
    }

    pub fn set_holding_ore(&mut self, holding: bool) {
        self.holding_ore = holding;
    }

    pub fn set_agent(&mut self, pos: (usize, usize)) {
        self.agent = pos;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn agent(&self) -> (usize, usize) {
        self.agent
    }

    pub fn holding_ore(&self) -> bool {
        self.holding_ore
    }

    pub fn walls(&self) -> &BTreeSet<(usize, usize)> {
        &self.walls
    }

    pub fn ore(&self) -> &BTreeSet<(usize, usize)> {
        &self.ore
    }

    pub fn furnaces(&self) -> &BTreeSet<(usize, usize)> {
        &self.furnaces
    }

    /// Plain floor: in bounds and not occupied by a wall, ore vein, or
    /// furnace.
    pub fn is_floor(&self, pos: (usize, usize)) -> bool {
        pos.0 < self.width
            && pos.1 < self.height
            && !self.walls.contains(&pos)
            && !self.ore.contains(&pos)
            && !self.furnaces.contains(&pos)
    }

    /// The named objects of one class, in deterministic order.
    pub fn objects_of(&self, class: &str) -> Vec<String> {
        match class {
            CELL => {
                let mut cells = Vec::new();
                for y in 0..self.height {
                    for x in 0..self.width {
                        if self.is_floor((x, y)) {
                            cells.push(object_name(CELL, (x, y)));
                        }
                    }
                }
                cells
            }
            ORE => self.ore.iter().map(|&p| object_name(ORE, p)).collect(),
            FURNACE => self
                .furnaces
                .iter()
                .map(|&p| object_name(FURNACE, p))
                .collect(),
            _ => Vec::new(),
        }
    }
}

pub fn object_name(class: &str, pos: (usize, usize)) -> String {
    format!("{}_{}_{}", class, pos.0, pos.1)
}

impl StateView for MiningState {
    fn possible_bindings(&self, schema: &ActionSchema) -> Vec<Vec<String>> {
        let domains: Vec<Vec<String>> = schema
            .parameter_classes()
            .iter()
            .map(|class| self.objects_of(class))
            .collect();

        let mut out = Vec::new();
        let mut prefix = Vec::with_capacity(domains.len());
        extend_bindings(
            &domains,
            schema.parameter_order_groups(),
            &mut prefix,
            &mut out,
        );
        out
    }
}

/// Depth-first binding enumeration over per-parameter object domains.
///
/// No object is bound twice within one binding. When order groups are
/// present, later parameters of the same group pick strictly larger object
/// indices, so bindings that differ only by a within-group permutation
/// appear once.
fn extend_bindings(
    domains: &[Vec<String>],
    groups: &[&'static str],
    prefix: &mut Vec<usize>,
    out: &mut Vec<Vec<String>>,
) {
    let param = prefix.len();
    if param == domains.len() {
        out.push(
            prefix
                .iter()
                .enumerate()
                .map(|(p, &idx)| domains[p][idx].clone())
                .collect(),
        );
        return;
    }

    for idx in 0..domains[param].len() {
        let reused = prefix
            .iter()
            .enumerate()
            .any(|(p, &prev)| domains[p][prev] == domains[param][idx]);
        if reused {
            continue;
        }

        if !groups.is_empty() {
            let same_group_prev = prefix
                .iter()
                .enumerate()
                .rev()
                .find(|&(p, _)| groups[p] == groups[param])
                .map(|(_, &prev)| prev);
            if let Some(prev) = same_group_prev {
                if idx <= prev {
                    continue;
                }
            }
        }

        prefix.push(idx);
        extend_bindings(domains, groups, prefix, out);
        prefix.pop();
    }
}
