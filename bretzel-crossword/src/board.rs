use crate::grid;
use crate::slot::Slot;

/// Renders a solved grid.
///
/// Every cell starts as a block; each chosen word is then written along its
/// slot, one letter per cell. `words` is indexed by slot id. Rows are joined
/// by newlines, with no spacing between cells.
pub fn fill(rows: usize, columns: usize, slots: &[Slot], words: &[&str]) -> String {
    let mut board = vec![vec![grid::BLOCK as u8; columns]; rows];
    for (slot, word) in slots.iter().zip(words.iter().copied()) {
        for (pos, letter) in slot.positions().iter().zip(word.bytes()) {
            board[pos.row][pos.column] = letter;
        }
    }
    board
        .into_iter()
        .map(|row| row.into_iter().map(char::from).collect::<String>())
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn board_fill_plus_shape() {
        let slots = vec![Slot::across(0, 1, 0, 3), Slot::down(1, 0, 1, 3)];
        let board = fill(3, 3, &slots, &["bar", "bar"]);
        assert_eq!("#b#\nbar\n#r#", board);
    }

    #[test]
    fn board_fill_full_grid() {
        let slots = vec![
            Slot::across(0, 0, 0, 2),
            Slot::across(1, 1, 0, 2),
            Slot::down(2, 0, 0, 2),
            Slot::down(3, 0, 1, 2),
        ];
        let board = fill(2, 2, &slots, &["ab", "ba", "ab", "ba"]);
        assert_eq!("ab\nba", board);
    }

    #[test]
    fn board_fill_keeps_blocks() {
        let slots = vec![Slot::across(0, 0, 1, 2)];
        let board = fill(2, 3, &slots, &["to"]);
        assert_eq!("#to\n###", board);
    }
}
