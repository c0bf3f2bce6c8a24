//! ASCII rendering of a [`Grid`].

use std::fmt;

use crate::grid::Grid;

impl fmt::Display for Grid {
    /// One line per row, one glyph per cell (`.` empty, `#` wall,
    /// `o` visited).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size() as usize;
        for (i, (_, state)) in self.iter().enumerate() {
            write!(f, "{}", state.glyph())?;
            if (i + 1) % n == 0 && i + 1 < self.cell_count() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Grid;

    #[test]
    fn renders_glyphs_row_per_line() {
        let mut g = Grid::new(3).unwrap();
        g.toggle_wall(0, 2).unwrap();
        g.mark_visited(1, 1).unwrap();
        assert_eq!(g.to_string(), "..#\n.o.\n...");
    }

    #[test]
    fn single_cell_has_no_newline() {
        assert_eq!(Grid::new(1).unwrap().to_string(), ".");
    }
}
