//! Tests for shape keys and translation-congruence grouping

#[cfg(test)]
mod tests {
    use gridtools::algorithm::shapes::{ShapeKey, entities_by_shape, shape_groups};
    use gridtools::spatial::{Entity, Grid};

    fn sample() -> Grid {
        Grid::from_list(&[
            vec![2, 2, 0, 0, 0, 0],
            vec![0, 2, 0, 0, 3, 3],
            vec![0, 0, 0, 0, 0, 3],
            vec![5, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 6, 0, 0],
            vec![0, 0, 6, 6, 0, 0],
        ])
        .unwrap()
    }

    // Tests keys are normalised to a zero minimum row and column
    // Verified by skipping the translation
    #[test]
    fn test_shape_key_normalisation() {
        let entity = Entity::from_positions(1, [[4, 7], [4, 8], [5, 8]]);
        let key = ShapeKey::of(&entity);
        assert_eq!(key.len(), 3);
        assert_eq!(
            key.positions().collect::<Vec<_>>(),
            vec![[0, 0], [0, 1], [1, 1]]
        );
        assert!(ShapeKey::of(&Entity::default()).is_empty());
    }

    // Tests rotations produce different keys
    // Verified by sorting coordinates within each position
    #[test]
    fn test_shape_key_is_not_rotation_invariant() {
        let ell = Entity::from_positions(1, [[0, 0], [0, 1], [1, 1]]);
        let rotated = Entity::from_positions(1, [[0, 1], [1, 0], [1, 1]]);
        assert_ne!(ShapeKey::of(&ell), ShapeKey::of(&rotated));
    }

    // Tests congruent entities of different colours share a group
    // Verified by including the colour in the key
    #[test]
    fn test_shape_groups() {
        let groups = shape_groups(&sample());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].entities.len(), 2);
        assert_eq!(groups[0].key, ShapeKey::of(&groups[0].entities[1]));
        assert_eq!(groups[1].entities.len(), 1);
        assert_eq!(groups[1].entities[0].len(), 3);
    }

    // Tests single-cell entities are left out of grouping
    // Verified by keeping entities of length one
    #[test]
    fn test_shape_groups_skip_single_cells() {
        let grid = Grid::from_list(&[vec![5, 0, 5], vec![0, 0, 0]]).unwrap();
        assert!(shape_groups(&grid).is_empty());
    }

    // Tests lookup by a translated target shape
    // Verified by comparing raw positions instead of keys
    #[test]
    fn test_entities_by_shape() {
        let target = Entity::from_positions(7, [[10, 10], [10, 11], [11, 11]]);
        let matches = entities_by_shape(&sample(), &target);
        assert_eq!(matches.len(), 2);

        let single = Entity::from_positions(1, [[0, 0]]);
        assert_eq!(entities_by_shape(&sample(), &single).len(), 1);
    }

    // Tests an empty target matches nothing
    // Verified by removing the empty-target guard
    #[test]
    fn test_entities_by_empty_shape() {
        assert!(entities_by_shape(&sample(), &Entity::default()).is_empty());
    }
}
