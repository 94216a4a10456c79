//! The l_system module provides a Lindenmayer fractal generator that drives
//! a raster [`crate::turtle::Pen`]. Take a look at the
//! [`crate::l_system::LSystem`] struct for more details, and examples.

use crate::errors::{LSystemError, PenError};
use crate::turtle::{Pen, PenState};
use std::collections::HashMap;

pub mod ops;

use ops::{parse_program, Command};

/// # LSystem
///
/// A deterministic, context-free L-system paired with a per-symbol operation
/// table. [`expand`](LSystem::expand) rewrites an axiom for a number of
/// generations; [`run`](LSystem::run) expands and then interprets the result
/// against the owned pen, one symbol at a time.
///
/// Operation-table entries are instruction lists in the mini-language of
/// [`crate::l_system::ops`]; symbols missing from the table are structural
/// and draw nothing, while symbols missing from the rule table rewrite to
/// themselves.
///
/// # Example
///
/// ```rust
/// use lsys_pen_rs::l_system::LSystem;
/// use std::collections::HashMap;
///
/// let mut plant = LSystem::new(
///     HashMap::from([
///         ('F', "FF".to_string()),
///         ('X', "F+[[X]-X]-F[-FX]+X".to_string()),
///     ]),
///     HashMap::from([
///         ('F', "draw #1b5e20ff 1 3".to_string()),
///         ('+', "rotate 25".to_string()),
///         ('-', "rotate -25".to_string()),
///         ('[', "push".to_string()),
///         (']', "pop".to_string()),
///     ]),
/// );
/// plant.run("X", 4).unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct LSystem {
    rules: HashMap<char, String>,
    operations: HashMap<char, String>,
    pen: Pen,
    stack: Vec<PenState>,
}

impl LSystem {
    /// Build an L-system from its rewriting rules and its symbol operation
    /// table. Both tables are fixed for the life of the instance; the pen
    /// and the save stack start empty and persist across runs.
    pub fn new(rules: HashMap<char, String>, operations: HashMap<char, String>) -> Self {
        LSystem {
            rules,
            operations,
            pen: Pen::new(),
            stack: vec![],
        }
    }

    fn recur(&self, state: String, order: u32) -> String {
        if order == 0 {
            return state;
        }
        let new_state = state
            .chars()
            .map(|c| match self.rules.get(&c) {
                Some(replacement) => replacement.clone(),
                None => String::from(c),
            })
            .collect();
        self.recur(new_state, order - 1)
    }

    /// # expand
    ///
    /// Rewrite `axiom` for the requested "order" of generations and return
    /// the resulting state string. Order 0 is the identity. Pure and
    /// deterministic; growth is unbounded (typically exponential), so the
    /// caller is responsible for keeping `order` sane.
    pub fn expand(&self, axiom: &str, order: u32) -> String {
        self.recur(axiom.to_string(), order)
    }

    /// # run
    ///
    /// Expand `axiom` by `iterations` generations, then walk the expanded
    /// string once, executing each mapped symbol's instruction list against
    /// the pen. Operation entries are parsed lazily at each occurrence, so a
    /// malformed entry for a symbol the expansion never produces goes
    /// unnoticed. The first parse or stack error aborts the run.
    pub fn run(&mut self, axiom: &str, iterations: u32) -> Result<(), LSystemError> {
        let expanded = self.expand(axiom, iterations);
        for symbol in expanded.chars() {
            let program = match self.operations.get(&symbol) {
                Some(entry) => parse_program(entry)?,
                None => continue,
            };
            for command in program {
                self.execute(command)?;
            }
        }
        Ok(())
    }

    fn execute(&mut self, command: Command) -> Result<(), LSystemError> {
        match command {
            Command::Push => self.stack.push(self.pen.state()),
            Command::Pop => {
                let state = self.stack.pop().ok_or(LSystemError::StackUnderflow)?;
                self.pen.restore(state);
            }
            Command::Rotate(degrees) => self.pen.rotate(degrees),
            Command::Move(distance) => {
                self.pen.pen_up();
                self.pen.forward(distance);
                self.pen.pen_down();
            }
            Command::Draw { color, width, length } => {
                self.pen.set_color(color);
                self.pen.set_width(width);
                self.pen.forward(length);
            }
        }
        Ok(())
    }

    /// The pen holding everything drawn so far.
    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    /// # save
    ///
    /// Persist the drawing produced by [`run`](LSystem::run) to `name`.
    /// Format follows the extension; currently only PNG (`.png`) is
    /// supported, anything else comes back as an error.
    pub fn save(&self, name: &str) -> Result<(), PenError> {
        self.pen.save(name)
    }
}
