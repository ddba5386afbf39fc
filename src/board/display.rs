use std::fmt;

use super::{Board, Coordinate};

/// Text grid with the last row on top, e.g. for an 8x8 board:
///
/// ```text
/// 8 | r n b q k b n r
/// ...
/// 1 | R N B Q K B N R
///   +----------------
///     1 2 3 4 5 6 7 8
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self.rows().to_string().len();
        for row in (Coordinate::MIN..=self.rows()).rev() {
            write!(f, "{row:>label_width$} |")?;
            for column in Coordinate::MIN..=self.columns() {
                let tile = self
                    .piece_at(Coordinate::new_unchecked(column, row))
                    .map_or('.', |piece| piece.to_char());
                write!(f, " {tile}")?;
            }
            writeln!(f)?;
        }
        writeln!(
            f,
            "{:label_width$} +{}",
            "",
            "-".repeat(self.columns() as usize * 2)
        )?;
        write!(f, "{:label_width$}  ", "")?;
        for column in Coordinate::MIN..=self.columns() {
            write!(f, " {}", column % 10)?;
        }
        writeln!(f)
    }
}
