//! Name-to-binding scopes, nested stack-style for lexical shadowing.

use glint_common::Atom;
use glint_solver::MonoType;
use rustc_hash::FxHashMap;

#[derive(Clone, Debug)]
pub struct Binding {
    pub ty: MonoType,
    pub global: bool,
    pub mutable: bool,
}

/// A stack of name-to-binding frames. The bottom frame is the global
/// scope, created once and never popped; every other frame is pushed and
/// popped around blocks, function bodies, and groups that introduce new
/// bindings.
#[derive(Default)]
pub struct Scope {
    frames: Vec<FxHashMap<Atom, Binding>>,
}

impl Scope {
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames: vec![FxHashMap::default()],
        }
    }

    pub fn push(&mut self) {
        self.frames.push(FxHashMap::default());
    }

    pub fn pop(&mut self) {
        debug_assert!(self.frames.len() > 1, "the global frame is never popped");
        self.frames.pop();
    }

    pub fn insert(&mut self, name: Atom, binding: Binding) {
        self.frames
            .last_mut()
            .expect("scope always has at least the global frame")
            .insert(name, binding);
    }

    #[must_use]
    pub fn lookup(&self, name: Atom) -> Option<&Binding> {
        self.frames.iter().rev().find_map(|frame| frame.get(&name))
    }
}
