//! Tests for flood-fill component extraction and its predicate variants

#[cfg(test)]
mod tests {
    use gridtools::algorithm::components::{
        Connectivity, all_entities_by_color, entities_by_color, extract_components,
        is_surrounded, isolated_cells, isolated_groups, same_color_groups, surrounded_regions,
    };
    use gridtools::spatial::{Cell, Entity, Grid};
    use std::collections::HashSet;

    fn sample() -> Grid {
        Grid::from_list(&[
            vec![1, 1, 0, 2],
            vec![0, 1, 0, 2],
            vec![3, 0, 0, 0],
            vec![0, 3, 0, 1],
        ])
        .unwrap()
    }

    fn positions(entity: &Entity) -> HashSet<[i32; 2]> {
        entity.positions().collect()
    }

    // Tests 4-connected same-colour extraction splits diagonal neighbours
    // Verified by using 8-connectivity for colour extraction
    #[test]
    fn test_entities_by_color() {
        let grid = sample();
        let ones = entities_by_color(&grid, 1);
        assert_eq!(ones.len(), 2);
        assert_eq!(
            positions(&ones[0]),
            HashSet::from([[0, 0], [0, 1], [1, 1]])
        );
        assert_eq!(positions(&ones[1]), HashSet::from([[3, 3]]));

        let threes = entities_by_color(&grid, 3);
        assert_eq!(threes.len(), 2);
        assert!(entities_by_color(&grid, 7).is_empty());
    }

    // Tests background is extractable like any other colour
    // Verified by skipping background seeds
    #[test]
    fn test_background_components() {
        let zeros = entities_by_color(&sample(), 0);
        assert_eq!(zeros.len(), 3);
        assert_eq!(zeros.iter().map(Entity::len).sum::<usize>(), 8);
    }

    // Tests the per-colour table covers the whole palette
    // Verified by stopping the colour range at 8
    #[test]
    fn test_all_entities_by_color() {
        let table = all_entities_by_color(&sample());
        assert_eq!(table.len(), 10);
        assert_eq!(table[1].len(), 2);
        assert_eq!(table[2].len(), 1);
        assert!(table[9].is_empty());
    }

    // Tests isolated groups join diagonal neighbours of any colour
    // Verified by requiring equal colours inside a group
    #[test]
    fn test_isolated_groups_mix_colors() {
        let groups = isolated_groups(&sample());
        assert_eq!(groups.len(), 3);
        assert_eq!(
            positions(&groups[0]),
            HashSet::from([[0, 0], [0, 1], [1, 1], [2, 0], [3, 1]])
        );
        assert_eq!(positions(&groups[1]), HashSet::from([[0, 3], [1, 3]]));
        assert_eq!(positions(&groups[2]), HashSet::from([[3, 3]]));
    }

    // Tests same-colour groups partition the non-background cells
    // Verified by letting a fill enter cells of another colour
    #[test]
    fn test_same_color_groups_partition() {
        let groups = same_color_groups(&sample(), Connectivity::Eight);
        assert_eq!(groups.len(), 4);

        let mut seen = HashSet::new();
        for group in &groups {
            let color = group.cells()[0].color;
            for cell in group.cells() {
                assert_eq!(cell.color, color);
                assert!(seen.insert(cell.position), "cell claimed twice");
            }
        }
        assert_eq!(seen.len(), 8);
    }

    // Tests entities come out in row-major order of their seeds
    // Verified by scanning columns before rows
    #[test]
    fn test_seed_order() {
        let groups = same_color_groups(&sample(), Connectivity::Eight);
        let seeds: Vec<u8> = groups.iter().map(|g| g.cells()[0].color).collect();
        assert_eq!(seeds, vec![1, 2, 3, 1]);
    }

    // Tests a custom predicate pair over the whole grid
    // Verified by skipping neighbours pushed onto the stack
    #[test]
    fn test_extract_components_whole_grid() {
        let grid = sample();
        let everything = extract_components(&grid, Connectivity::Four, |_| true, |_, _| true);
        assert_eq!(everything.len(), 1);
        assert_eq!(everything[0].len(), 16);
    }

    // Tests offsets per connectivity
    // Verified by returning the orthogonal offsets for both variants
    #[test]
    fn test_connectivity_offsets() {
        assert_eq!(Connectivity::Four.offsets().len(), 4);
        assert_eq!(Connectivity::Eight.offsets().len(), 8);
    }

    // Tests edge cells are never surrounded
    // Verified by treating missing neighbours as matching
    #[test]
    fn test_is_surrounded() {
        let grid = Grid::from_list(&[vec![4, 4, 4], vec![4, 0, 4], vec![4, 4, 4]]).unwrap();
        assert!(is_surrounded(&grid, Cell::new(0, 1, 1), 4));
        assert!(!is_surrounded(&grid, Cell::new(4, 0, 1), 4));
        assert!(!is_surrounded(&grid, Cell::new(0, 1, 1), 3));
    }

    // Tests surrounded regions only grow through surrounded cells
    // Verified by growing through any non-matching cell
    #[test]
    fn test_surrounded_regions() {
        let single = Grid::from_list(&[vec![4, 4, 4], vec![4, 0, 4], vec![4, 4, 4]]).unwrap();
        let regions = surrounded_regions(&single, 4);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].cells(), &[Cell::new(0, 1, 1)]);

        // Two neighbouring gap cells each see the other, so neither qualifies
        let wide = Grid::from_list(&[vec![4, 4, 4, 4], vec![4, 0, 0, 4], vec![4, 4, 4, 4]])
            .unwrap();
        assert!(surrounded_regions(&wide, 4).is_empty());
    }

    // Tests isolated cells have no non-background neighbour in 8 directions
    // Verified by checking only orthogonal neighbours
    #[test]
    fn test_isolated_cells() {
        let isolated = isolated_cells(&sample());
        assert_eq!(isolated.len(), 1);
        assert_eq!(isolated[0].cells(), &[Cell::new(1, 3, 3)]);
    }
}
