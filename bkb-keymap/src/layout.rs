//! Physical layout to electrical matrix mapping.

/// Rows of the electrical matrix of a 3x5+3 split keyboard, 4 per half
pub const MATRIX_ROWS: usize = 8;
/// Columns of the electrical matrix of a 3x5+3 split keyboard
pub const MATRIX_COLS: usize = 5;

/// Number of keys of a 3x5+3 layout: 3 rows of 10 keys and 6 thumb keys
pub const SPLIT_3X5_3_KEYS: usize = 36;

/// Arrange 36 keys given in reading order onto the matrix of a 3x5+3 split keyboard.
///
/// Keys are given as 3 rows of 10 (left half first) followed by the 6 thumb keys from left to
/// right. The left half is wired on rows 0 to 3, the right half on rows 4 to 7 with its
/// columns mirrored, so the outermost right key is column 0. Thumbs sit on the last row of
/// each half, columns 2 to 4. Cells which don't carry a key are set to `fill`.
///
/// Used for both keycodes and colors, so both tables always share the same shape.
pub const fn split_3x5_3<T: Copy>(keys: [T; SPLIT_3X5_3_KEYS], fill: T) -> [[T; MATRIX_COLS]; MATRIX_ROWS] {
    let mut matrix = [[fill; MATRIX_COLS]; MATRIX_ROWS];

    let mut row = 0;
    while row < 3 {
        let mut col = 0;
        while col < 5 {
            matrix[row][col] = keys[row * 10 + col];
            matrix[row + 4][4 - col] = keys[row * 10 + 5 + col];
            col += 1;
        }
        row += 1;
    }

    // Left thumbs, outer to inner
    matrix[3][2] = keys[30];
    matrix[3][3] = keys[31];
    matrix[3][4] = keys[32];
    // Right thumbs, inner to outer
    matrix[7][4] = keys[33];
    matrix[7][3] = keys[34];
    matrix[7][2] = keys[35];

    matrix
}

/// Position in the matrix of the `index`-th key of a 3x5+3 layout, in reading order
pub const fn split_3x5_3_position(index: usize) -> Option<(usize, usize)> {
    match index {
        0..30 => {
            let row = index / 10;
            let col = index % 10;
            if col < 5 { Some((row, col)) } else { Some((row + 4, 9 - col)) }
        }
        30..33 => Some((3, index - 28)),
        33..36 => Some((7, 37 - index)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> [u8; SPLIT_3X5_3_KEYS] {
        let mut keys = [0; SPLIT_3X5_3_KEYS];
        for (i, k) in keys.iter_mut().enumerate() {
            *k = i as u8 + 1;
        }
        keys
    }

    #[test]
    fn test_left_half_rows() {
        let matrix = split_3x5_3(numbered(), 0);
        assert_eq!(matrix[0], [1, 2, 3, 4, 5]);
        assert_eq!(matrix[1], [11, 12, 13, 14, 15]);
        assert_eq!(matrix[2], [21, 22, 23, 24, 25]);
        assert_eq!(matrix[3], [0, 0, 31, 32, 33]);
    }

    #[test]
    fn test_right_half_is_mirrored() {
        let matrix = split_3x5_3(numbered(), 0);
        assert_eq!(matrix[4], [10, 9, 8, 7, 6]);
        assert_eq!(matrix[5], [20, 19, 18, 17, 16]);
        assert_eq!(matrix[6], [30, 29, 28, 27, 26]);
        assert_eq!(matrix[7], [0, 0, 36, 35, 34]);
    }

    #[test]
    fn test_every_key_lands_once() {
        let keys = numbered();
        let matrix = split_3x5_3(keys, 0);
        let placed = matrix.iter().flatten().filter(|&&k| k != 0).count();
        assert_eq!(placed, SPLIT_3X5_3_KEYS);
        for (i, key) in keys.iter().enumerate() {
            let (row, col) = split_3x5_3_position(i).unwrap();
            assert_eq!(matrix[row][col], *key, "key {}", i);
        }
        assert_eq!(split_3x5_3_position(36), None);
    }
}
