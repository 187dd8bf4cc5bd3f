#![cfg(feature = "std")]

use std::io::{self, Write};
use std::string::String;
use std::vec::Vec;

use crate::{board::Board, common::Coordinate, config::ROW_LABELS, render::Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unknown,
    Hit,
    Miss,
}

/// [`Renderer`] that keeps its own view of the board and draws it as text.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    size: usize,
    marks: Vec<Mark>,
    messages: Vec<String>,
}

impl TerminalRenderer {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            marks: vec![Mark::Unknown; size * size],
            messages: Vec::new(),
        }
    }

    fn set(&mut self, at: Coordinate, mark: Mark) {
        if at.within(self.size) {
            self.marks[at.row() * self.size + at.col()] = mark;
        }
    }

    /// Messages shown since the last draw.
    pub fn pending_messages(&self) -> &[String] {
        &self.messages
    }

    /// Writes the pending messages and the board, then clears the messages.
    pub fn draw<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        for msg in self.messages.drain(..) {
            writeln!(out, "{}", msg)?;
        }
        draw_grid(out, self.size, |r, c| match self.marks[r * self.size + c] {
            Mark::Unknown => '.',
            Mark::Hit => 'X',
            Mark::Miss => 'o',
        })
    }
}

impl Renderer for TerminalRenderer {
    fn show_message(&mut self, msg: &str) {
        self.messages.push(msg.to_owned());
    }

    fn mark_hit(&mut self, at: Coordinate) {
        self.set(at, Mark::Hit);
    }

    fn mark_miss(&mut self, at: Coordinate) {
        self.set(at, Mark::Miss);
    }
}

/// Draws the board with the fleet showing: `S` intact segment, `X` hit
/// segment, `o` miss.
pub fn draw_fleet<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    let ships = board.fleet().occupied();
    let hits = board.hits();
    let misses = board.misses();
    draw_grid(out, board.size(), |r, c| {
        let cell = Coordinate::new(r as u8, c as u8);
        if hits.contains(cell).unwrap_or(false) {
            'X'
        } else if ships.contains(cell).unwrap_or(false) {
            'S'
        } else if misses.contains(cell).unwrap_or(false) {
            'o'
        } else {
            '.'
        }
    })
}

fn draw_grid<W, F>(out: &mut W, size: usize, cell: F) -> io::Result<()>
where
    W: Write,
    F: Fn(usize, usize) -> char,
{
    write!(out, "  ")?;
    for c in 0..size {
        write!(out, " {}", c)?;
    }
    writeln!(out)?;
    for r in 0..size {
        write!(out, "{} ", ROW_LABELS[r] as char)?;
        for c in 0..size {
            write!(out, " {}", cell(r, c))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
