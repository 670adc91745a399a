//! Tests for divider splitting and empty-half extraction

#[cfg(test)]
mod tests {
    use gridtools::GridError;
    use gridtools::analysis::halves::{get_halves, get_non_empty_half};
    use gridtools::spatial::Grid;

    fn grid(rows: &[Vec<u8>]) -> Grid {
        Grid::from_list(rows).unwrap()
    }

    // Tests a divider row is dropped between top and bottom
    // Verified by keeping the divider in the bottom half
    #[test]
    fn test_halves_horizontal() {
        let (top, bottom) =
            get_halves(&grid(&[vec![1, 0, 0], vec![5, 5, 5], vec![0, 2, 0]])).unwrap();
        assert_eq!(top.to_list(), vec![vec![1, 0, 0]]);
        assert_eq!(bottom.to_list(), vec![vec![0, 2, 0]]);
    }

    // Tests a divider column splits left from right
    // Verified by slicing rows instead of columns
    #[test]
    fn test_halves_vertical() {
        let (left, right) = get_halves(&grid(&[vec![1, 5, 0], vec![0, 5, 2]])).unwrap();
        assert_eq!(left.to_list(), vec![vec![1], vec![0]]);
        assert_eq!(right.to_list(), vec![vec![0], vec![2]]);
    }

    // Tests a divider on the edge leaves an empty half
    // Verified by rejecting edge dividers
    #[test]
    fn test_halves_edge_divider() {
        let (top, bottom) = get_halves(&grid(&[vec![4, 4], vec![0, 1]])).unwrap();
        assert_eq!(top.dimensions(), (0, 2));
        assert_eq!(bottom.to_list(), vec![vec![0, 1]]);
    }

    // Tests dividers on the last row and last column leave an empty second half
    // Verified by slicing past the end of the array
    #[test]
    fn test_halves_trailing_divider() {
        let (top, bottom) = get_halves(&grid(&[vec![0, 1], vec![3, 3]])).unwrap();
        assert_eq!(top.to_list(), vec![vec![0, 1]]);
        assert_eq!(bottom.dimensions(), (0, 2));

        let (left, right) = get_halves(&grid(&[vec![1, 0, 6], vec![0, 2, 6]])).unwrap();
        assert_eq!(left.to_list(), vec![vec![1, 0], vec![0, 2]]);
        assert_eq!(right.dimensions(), (2, 0));
    }

    // Tests grids without a divider are rejected
    // Verified by returning two copies of the grid
    #[test]
    fn test_halves_without_divider() {
        assert!(matches!(
            get_halves(&Grid::new(2, 2)),
            Err(GridError::StructureNotFound { .. })
        ));
    }

    // Tests an empty top half yields the bottom half
    // Verified by returning the empty half
    #[test]
    fn test_non_empty_half_vertical_order() {
        let half = get_non_empty_half(&grid(&[
            vec![0, 0],
            vec![0, 0],
            vec![1, 2],
            vec![3, 0],
        ]))
        .unwrap();
        assert_eq!(half.to_list(), vec![vec![1, 2], vec![3, 0]]);
    }

    // Tests columns are checked after rows
    // Verified by checking left/right before top/bottom
    #[test]
    fn test_non_empty_half_columns() {
        let half = get_non_empty_half(&grid(&[vec![1, 0], vec![2, 0]])).unwrap();
        assert_eq!(half.to_list(), vec![vec![1], vec![2]]);
    }

    // Tests grids with no empty half are rejected
    // Verified by defaulting to the top half
    #[test]
    fn test_non_empty_half_missing() {
        assert!(matches!(
            get_non_empty_half(&Grid::with_color(2, 2, 1).unwrap()),
            Err(GridError::StructureNotFound { .. })
        ));
    }
}
