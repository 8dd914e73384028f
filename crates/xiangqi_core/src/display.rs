use std::fmt::{self, Formatter};

use crate::board::GameState;
use crate::types::*;

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for x in 0..WIDTH {
            write!(f, " {x}")?;
        }
        writeln!(f)?;

        for y in 0..HEIGHT {
            if y == 5 {
                writeln!(f, "   {}", "~ ".repeat(WIDTH as usize))?;
            }
            write!(f, "{y} ")?;
            for x in 0..WIDTH {
                match self.piece_at(x, y) {
                    Some(p) => write!(f, " {}", p.kind.letter(p.side))?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }

        match (self.is_game_over(), self.winner()) {
            (true, Some(side)) => write!(f, "game over: {side} wins"),
            (true, None) => write!(f, "game over"),
            (false, _) => write!(f, "{} to move", self.current_turn()),
        }
    }
}
