//! Board state and the rules of stone placement.
//!
//! The grid is a flat row-major `Vec<Option<Color>>`. All rule queries
//! (`group_and_liberties`, `is_legal`, `legal_moves`) leave the board
//! untouched; `is_legal` simulates the move on a scratch clone rather than
//! mutating and undoing. `place` is the only mutating entry point and
//! re-checks legality itself.
//!
//! There is no pass and no ko: a move is legal exactly when the point is
//! on the board, empty, and the stone either captures or ends up with at
//! least one liberty.

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

/// Stone color. Black moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other side.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// A board coordinate as `(row, col)`, row 0 at the top edge.
pub type Point = (usize, usize);

/// A square Go board of fixed size.
///
/// Cloning copies one `Vec`, which is what legality simulation leans on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// An empty `size` x `size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, r: usize, c: usize) -> usize {
        r * self.size + c
    }

    /// Whether `(r, c)` lies on the grid.
    pub fn in_bounds(&self, r: usize, c: usize) -> bool {
        r < self.size && c < self.size
    }

    /// Contents of `(r, c)`; `None` for an empty point or one off the grid.
    pub fn get(&self, r: usize, c: usize) -> Option<Color> {
        if !self.in_bounds(r, c) {
            return None;
        }
        self.cells[self.idx(r, c)]
    }

    fn neighbors(&self, r: usize, c: usize) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        let mut v = Vec::new();
        if r > 0 {
            v.push((r - 1, c));
        }
        if r + 1 < s {
            v.push((r + 1, c));
        }
        if c > 0 {
            v.push((r, c - 1));
        }
        if c + 1 < s {
            v.push((r, c + 1));
        }
        v.into_iter()
    }

    /// The maximal group of same-colored stones through `(r, c)` together
    /// with its liberties.
    ///
    /// Returns `None` when the point is empty or off the grid. Liberties
    /// come back as a set; only membership is meaningful.
    pub fn group_and_liberties(&self, r: usize, c: usize) -> Option<(Vec<Point>, HashSet<Point>)> {
        let color = self.get(r, c)?;
        Some(self.flood_group(r, c, color))
    }

    /// Work-list flood fill from a stone of `color` at `(r, c)`. No
    /// recursion, so a group spanning the whole board cannot blow the
    /// call stack.
    fn flood_group(&self, r: usize, c: usize, color: Color) -> (Vec<Point>, HashSet<Point>) {
        let mut stones = Vec::new();
        let mut liberties = HashSet::new();
        let mut visited = vec![false; self.size * self.size];
        let mut stack = vec![(r, c)];
        while let Some((gr, gc)) = stack.pop() {
            let i = self.idx(gr, gc);
            if visited[i] {
                continue;
            }
            visited[i] = true;
            stones.push((gr, gc));
            for (nr, nc) in self.neighbors(gr, gc) {
                let ni = self.idx(nr, nc);
                match self.get(nr, nc) {
                    None => {
                        liberties.insert((nr, nc));
                    }
                    Some(v) if v == color && !visited[ni] => stack.push((nr, nc)),
                    _ => {}
                }
            }
        }
        (stones, liberties)
    }

    /// Whether `color` may play at `(r, c)`.
    ///
    /// The move is simulated on a scratch clone: place the stone, clear
    /// any opposing groups it leaves without liberties, then require the
    /// new stone's own group to breathe unless the move captured
    /// something. The live grid is never touched.
    pub fn is_legal(&self, r: usize, c: usize, color: Color) -> bool {
        if !self.in_bounds(r, c) || self.get(r, c).is_some() {
            return false;
        }
        let mut scratch = self.clone();
        let i = scratch.idx(r, c);
        scratch.cells[i] = Some(color);
        let captured = scratch.remove_dead_neighbors(r, c, color);
        if captured > 0 {
            return true;
        }
        let (_, liberties) = scratch.flood_group(r, c, color);
        !liberties.is_empty()
    }

    /// Put a `color` stone on `(r, c)`, removing opposing groups that run
    /// out of liberties. Legality is re-checked here rather than trusting
    /// an earlier `is_legal` answer. Returns whether the stone went down.
    pub fn place(&mut self, r: usize, c: usize, color: Color) -> bool {
        if !self.is_legal(r, c, color) {
            return false;
        }
        let i = self.idx(r, c);
        self.cells[i] = Some(color);
        let captured = self.remove_dead_neighbors(r, c, color);
        if captured > 0 {
            debug!(stone = %color, r, c, captured, "group captured");
        }
        true
    }

    /// Remove every opposing group adjacent to `(r, c)` left without
    /// liberties, assuming a `color` stone just landed there. Returns the
    /// number of stones taken off.
    fn remove_dead_neighbors(&mut self, r: usize, c: usize, color: Color) -> usize {
        let opp = color.opponent();
        let neighbors: Vec<Point> = self.neighbors(r, c).collect();
        let mut removed = 0;
        for (nr, nc) in neighbors {
            // a neighbor already cleared as part of an earlier dead group
            // reads empty here and is skipped
            if self.get(nr, nc) != Some(opp) {
                continue;
            }
            let (stones, liberties) = self.flood_group(nr, nc, opp);
            if liberties.is_empty() {
                removed += stones.len();
                for (dr, dc) in stones {
                    let i = self.idx(dr, dc);
                    self.cells[i] = None;
                }
            }
        }
        removed
    }

    /// Every point where `color` may legally play, in row-major order.
    pub fn legal_moves(&self, color: Color) -> Vec<Point> {
        let mut moves = Vec::new();
        for r in 0..self.size {
            for c in 0..self.size {
                if self.get(r, c).is_none() && self.is_legal(r, c, color) {
                    moves.push((r, c));
                }
            }
        }
        moves
    }
}

fn col_letter(c: usize) -> char {
    // column letters skip 'I' by Go convention
    let mut ch = b'A' + c as u8;
    if ch >= b'I' {
        ch += 1;
    }
    ch as char
}

/// Parse a coordinate like `D4` into `(row, col)`.
///
/// Columns are letters from the left edge (skipping `I`), rows are
/// numbered from the bottom. Returns `None` for anything malformed or off
/// the board.
pub fn parse_point(s: &str, size: usize) -> Option<Point> {
    let s = s.trim();
    let mut chars = s.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() || letter == 'I' {
        return None;
    }
    let mut col = (letter as u8 - b'A') as usize;
    if letter > 'I' {
        col -= 1;
    }
    let row_num: usize = chars.as_str().parse().ok()?;
    if row_num == 0 || row_num > size || col >= size {
        return None;
    }
    Some((size - row_num, col))
}

/// Format `(row, col)` in the same letter-number notation.
pub fn format_point((r, c): Point, size: usize) -> String {
    format!("{}{}", col_letter(c), size - r)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..self.size {
            write!(f, " {}", col_letter(c))?;
        }
        writeln!(f)?;
        for r in 0..self.size {
            write!(f, "{:2}", self.size - r)?;
            for c in 0..self.size {
                let ch = match self.get(r, c) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
