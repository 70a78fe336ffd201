//! Top-down breadth-first diagram compilation.
//!
//! The compiler expands a [`FrontierModel`] level by level, from the edge
//! count down to 1. Each level keeps a table of distinct states; equal
//! states merge there, which is what compresses the exponential search into
//! a shared diagram. Expansion records, per state and branch, whether the
//! transition rejected, terminated, or produced a successor state. A second
//! bottom-up pass then interns the tables into canonical arena nodes, so
//! children always exist before their parents and structural sharing plus
//! zero-suppression apply throughout.
//!
//! State is cloned before every branch split; transitions never see a
//! sibling branch's mutations.

use hashbrown::HashMap;

use crate::dd::diagram::Diagram;
use crate::dd::node::{NodeArena, NodeId};
use crate::model::{Direction, FrontierModel, Step};

#[derive(Copy, Clone, Debug)]
enum ChildRef {
    Zero,
    One,
    At { level: usize, index: usize },
}

struct LevelTable<S> {
    states: Vec<S>,
    index: HashMap<S, usize>,
    children: Vec<[ChildRef; 2]>,
}

impl<S: Clone + Eq + std::hash::Hash> LevelTable<S> {
    fn new() -> Self {
        LevelTable {
            states: Vec::new(),
            index: HashMap::new(),
            children: Vec::new(),
        }
    }

    fn insert(&mut self, state: S) -> usize {
        if let Some(&i) = self.index.get(&state) {
            return i;
        }
        let i = self.states.len();
        self.index.insert(state.clone(), i);
        self.states.push(state);
        i
    }
}

/// Compile a frontier state machine into a canonical diagram.
///
/// An empty edge sequence compiles to the accepting terminal: the one
/// (empty) orientation.
pub fn compile<M: FrontierModel>(model: &M) -> Diagram {
    let (root_state, top) = model.root();
    if top == 0 {
        return Diagram::trivial_accept();
    }

    let mut tables: Vec<LevelTable<M::State>> = (0..=top).map(|_| LevelTable::new()).collect();
    tables[top].insert(root_state);

    for level in (1..=top).rev() {
        let mut i = 0;
        while i < tables[level].states.len() {
            let state = tables[level].states[i].clone();
            let mut refs = [ChildRef::Zero; 2];
            for dir in Direction::BOTH {
                let mut s = state.clone();
                refs[dir.branch()] = match model.child(&mut s, level, dir) {
                    Step::Reject => ChildRef::Zero,
                    Step::Terminal => ChildRef::One,
                    Step::Next(0) => ChildRef::One,
                    Step::Next(next) => {
                        debug_assert!(next < level, "levels must strictly decrease");
                        let index = tables[next].insert(s);
                        ChildRef::At { level: next, index }
                    }
                };
            }
            tables[level].children.push(refs);
            i += 1;
        }
        log::trace!("level {level}: {} distinct states", tables[level].states.len());
    }

    // Bottom-up: children are interned before any parent refers to them.
    let mut arena = NodeArena::new();
    let mut resolved: Vec<Vec<NodeId>> = (0..=top)
        .map(|l| Vec::with_capacity(tables[l].states.len()))
        .collect();
    for level in 1..=top {
        for refs in &tables[level].children {
            let lo = resolve(refs[0], &resolved);
            let hi = resolve(refs[1], &resolved);
            let id = arena.intern(level as u32, lo, hi);
            resolved[level].push(id);
        }
    }

    let root = resolved[top][0];
    Diagram::new(arena, root, top)
}

fn resolve(r: ChildRef, resolved: &[Vec<NodeId>]) -> NodeId {
    match r {
        ChildRef::Zero => NodeId::ZERO,
        ChildRef::One => NodeId::ONE,
        ChildRef::At { level, index } => resolved[level][index],
    }
}
