//! Output formatting for the CLI

use crate::game::{CELLS, Cell, SIDE_LEN};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Player pieces are `X`, computer pieces `O`.
pub fn cell_symbol(cell: Cell, empty: char) -> char {
    match cell {
        Cell::Empty => empty,
        Cell::Player => 'X',
        Cell::Computer => 'O',
    }
}

fn rows(cells: &[char; CELLS], separator: &str, divider: Option<&str>) -> String {
    let lines: Vec<String> = cells
        .chunks(SIDE_LEN)
        .map(|row| {
            row.iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(separator)
        })
        .collect();

    match divider {
        Some(divider) => lines.join(&format!("\n{divider}\n")),
        None => lines.join("\n"),
    }
}

/// Plain grid, empty squares shown as `.`
///
/// ```text
/// O O O
/// . . .
/// X X X
/// ```
pub fn render_plain_grid(cells: &[Cell; CELLS]) -> String {
    rows(&cells.map(|c| cell_symbol(c, '.')), " ", None)
}

/// Ruled grid with blank empty squares
///
/// ```text
///   | O |
/// --+---+--
///   | X |
/// --+---+--
///   |   |
/// ```
pub fn render_ruled_grid(cells: &[Cell; CELLS]) -> String {
    rows(&cells.map(|c| cell_symbol(c, ' ')), " | ", Some("--+---+--"))
}

/// Cell numbering diagram in the plain layout
pub fn plain_numbering() -> String {
    rows(&numbers(), " ", None)
}

/// Cell numbering diagram in the ruled layout
pub fn ruled_numbering() -> String {
    rows(&numbers(), " | ", Some("--+---+--"))
}

fn numbers() -> [char; CELLS] {
    std::array::from_fn(|i| char::from(b'1' + i as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, BoardKey};

    fn cells(key: &str) -> [Cell; CELLS] {
        *Board::from_key(&BoardKey::parse(key).unwrap()).cells()
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_plain_grid() {
        assert_eq!(render_plain_grid(&cells("222000111")), "O O O\n. . .\nX X X");
    }

    #[test]
    fn test_ruled_grid() {
        assert_eq!(
            render_ruled_grid(&cells("002010000")),
            "  |   | O\n--+---+--\n  | X |  \n--+---+--\n  |   |  "
        );
    }

    #[test]
    fn test_numbering() {
        assert_eq!(plain_numbering(), "1 2 3\n4 5 6\n7 8 9");
        assert_eq!(
            ruled_numbering(),
            "1 | 2 | 3\n--+---+--\n4 | 5 | 6\n--+---+--\n7 | 8 | 9"
        );
    }
}
