use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    pub fn opposite(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// X is the maximizing side, O the minimizing side.
    pub fn maximize_score(&self) -> bool {
        match self {
            Player::X => true,
            Player::O => false,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::X => "X",
            Player::O => "O",
        };
        write!(f, "{}", player_str)
    }
}

type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            _ => Err("invalid player; options are: x, o"),
        }
    }
}

/// Contents of a single grid position.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum Cell {
    Empty,
    Marked(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn mark(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(*player),
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Marked(Player::X) => 'X',
            Cell::Marked(Player::O) => 'O',
        }
    }

    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Marked(Player::X)),
            'O' | 'o' => Some(Cell::Marked(Player::O)),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Marked(player)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Player::X.opposite(), Player::O);
        assert_eq!(Player::O.opposite(), Player::X);
    }

    #[test]
    fn test_maximize_score() {
        assert!(Player::X.maximize_score());
        assert!(!Player::O.maximize_score());
    }

    #[test]
    fn test_parse_player() {
        assert_eq!(Player::X, Player::from_str("x").unwrap());
        assert_eq!(Player::O, Player::from_str("O").unwrap());
        assert!(Player::from_str("z").is_err());
    }

    #[test]
    fn test_cell_symbols() {
        assert_eq!(Cell::from_char('_'), Some(Cell::Empty));
        assert_eq!(Cell::from_char('x'), Some(Cell::Marked(Player::X)));
        assert_eq!(Cell::from_char('?'), None);
        assert_eq!(Cell::Marked(Player::O).to_char(), 'O');
        assert_eq!(Cell::from(Player::X).mark(), Some(Player::X));
        assert_eq!(Cell::Empty.mark(), None);
    }
}
