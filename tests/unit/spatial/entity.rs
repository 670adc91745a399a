//! Tests for entities, bounding boxes, hole analysis and scaling

#[cfg(test)]
mod tests {
    use gridtools::GridError;
    use gridtools::spatial::entity::{Quality, combine_entities};
    use gridtools::spatial::primitives::{plus_sign, solid_box};
    use gridtools::spatial::{BoundingBox, Cell, Entity, Side};
    use std::collections::HashSet;

    // Tests bounds and extent of a scattered entity
    // Verified by folding max with min
    #[test]
    fn test_bounds_and_dimensions() {
        let entity = Entity::from_positions(1, [[2, 5], [4, 1], [3, 3]]);
        let bounds = entity.bounds().unwrap();
        assert_eq!(bounds.min, [2, 1]);
        assert_eq!(bounds.max, [4, 5]);
        assert_eq!(bounds.height(), 3);
        assert_eq!(bounds.width(), 5);
        assert_eq!(entity.dimensions().unwrap(), (2, 4));
        assert_eq!(bounds.center(), [3.0, 3.0]);
        assert!(bounds.contains([4, 5]));
        assert!(!bounds.contains([5, 5]));
    }

    // Tests bounds of an empty entity are an error
    // Verified by returning a zero box
    #[test]
    fn test_empty_bounds() {
        assert!(matches!(
            Entity::default().bounds(),
            Err(GridError::EmptyEntity { .. })
        ));
    }

    // Tests the plus sign has a partly filled border line
    // Verified by requiring a completely empty border line
    #[test]
    fn test_has_hole_on_one_side() {
        assert!(plus_sign(2, [0, 0]).has_hole_on_one_side().unwrap());
        assert!(!solid_box(2, [0, 0]).has_hole_on_one_side().unwrap());

        // Only the left column is partly filled
        let left_gap = Entity::from_positions(1, [[0, 1], [1, 1], [2, 0], [2, 1], [0, 0]]);
        assert!(left_gap.has_hole_on_one_side().unwrap());
    }

    // Tests hole extraction and its cache
    // Verified by extracting occupied positions
    #[test]
    fn test_extract_hole() {
        let mut plus = plus_sign(2, [0, 0]);
        assert!(plus.cached_hole().is_none());

        let hole = plus.extract_hole().unwrap();
        let positions: HashSet<_> = hole.positions().collect();
        assert_eq!(positions, HashSet::from([[0, 0], [0, 2], [2, 0], [2, 2]]));
        assert!(hole.cells().iter().all(Cell::is_background));
        assert_eq!(plus.cached_hole(), Some(&hole));
    }

    // Tests equality ignores the cached hole
    // Verified by deriving PartialEq over every field
    #[test]
    fn test_equality_ignores_cache() {
        let plain = plus_sign(3, [0, 0]);
        let mut cached = plain.clone();
        cached.extract_hole().unwrap();
        assert_eq!(plain, cached);
    }

    // Tests hole orientation picks the first side with an empty position
    // Verified by checking the sides in reverse order
    #[test]
    fn test_orientation() {
        assert_eq!(
            plus_sign(1, [0, 0]).orientation(Quality::Hole).unwrap(),
            Some(Side::Top)
        );

        let bottom_gap = Entity::from_positions(1, [[0, 0], [0, 1], [1, 0]]);
        assert_eq!(
            bottom_gap.orientation(Quality::Hole).unwrap(),
            Some(Side::Bottom)
        );
        assert_eq!(solid_box(1, [0, 0]).orientation(Quality::Hole).unwrap(), None);
    }

    // Tests quality names other than hole are rejected
    // Verified by mapping unknown names to the hole quality
    #[test]
    fn test_orientation_by_name() {
        let plus = plus_sign(1, [0, 0]);
        assert_eq!(plus.orientation_by_name("hole").unwrap(), Some(Side::Top));
        assert!(matches!(
            plus.orientation_by_name("size"),
            Err(GridError::InvalidArgument { .. })
        ));
    }

    // Tests the numeric and named side conventions
    // Verified by swapping left and right indices
    #[test]
    fn test_side_conventions() {
        for side in Side::ALL {
            assert_eq!(Side::from_index(i64::from(side.index())).unwrap(), side);
        }
        assert!(Side::from_index(4).is_err());
        assert_eq!("down".parse::<Side>().unwrap(), Side::Bottom);
        assert_eq!("Left".parse::<Side>().unwrap(), Side::Left);
        assert!("middle".parse::<Side>().is_err());
    }

    // Tests edge slices keep only cells on the requested extreme
    // Verified by comparing against the opposite bound
    #[test]
    fn test_edge_slice() {
        let plus = plus_sign(1, [0, 0]);
        let top: Vec<_> = plus.edge_slice(Side::Top).unwrap().positions().collect();
        assert_eq!(top, vec![[0, 1]]);
        let left: Vec<_> = plus.edge_slice(Side::Left).unwrap().positions().collect();
        assert_eq!(left, vec![[1, 0]]);
    }

    // Tests translation and recolouring
    // Verified by translating columns by the row offset
    #[test]
    fn test_translate_and_recolor() {
        let mut entity = Entity::new(vec![Cell::new(1, 0, 0), Cell::new(2, 0, 1)]);
        entity.translate(2, -1);
        assert_eq!(
            entity.positions().collect::<Vec<_>>(),
            vec![[2, -1], [2, 0]]
        );

        entity.fill_color(5, 2).unwrap();
        assert_eq!(entity.cells()[0].color, 1);
        assert_eq!(entity.cells()[1].color, 5);

        entity.set_color(7).unwrap().translate(1, 1);
        assert_eq!(entity.uniform_color(), Some(7));
        assert_eq!(entity.cells()[0].position, [3, 0]);
    }

    // Tests recolouring outside the palette fails and leaves cells unchanged
    // Verified by assigning the colour without validation
    #[test]
    fn test_recolor_rejects_palette_overflow() {
        let mut entity = Entity::new(vec![Cell::new(1, 0, 0), Cell::new(2, 0, 1)]);
        assert!(matches!(
            entity.set_color(200),
            Err(GridError::InvalidArgument { parameter: "color", .. })
        ));
        assert!(matches!(
            entity.fill_color(10, 1),
            Err(GridError::InvalidArgument { parameter: "color", .. })
        ));
        assert_eq!(
            entity.cells(),
            &[Cell::new(1, 0, 0), Cell::new(2, 0, 1)]
        );
    }

    // Tests building an entity cell by cell and taking its cells back
    // Verified by keeping the hole cached after the shape changed
    #[test]
    fn test_push_and_into_cells() {
        let mut entity = Entity::default();
        entity.push(Cell::new(4, 1, 1));
        entity.push(Cell::new(4, 1, 2));
        entity.push(Cell::new(4, 2, 1));
        assert_eq!(entity.len(), 3);

        entity.extract_hole().unwrap();
        assert!(entity.cached_hole().is_some());
        entity.push(Cell::new(4, 2, 2));
        assert!(entity.cached_hole().is_none());
        assert!(entity.extract_hole().unwrap().is_empty());

        entity.translate(1, 0);
        assert!(entity.cached_hole().is_none());

        let cells = entity.into_cells();
        assert_eq!(
            cells,
            vec![
                Cell::new(4, 2, 1),
                Cell::new(4, 2, 2),
                Cell::new(4, 3, 1),
                Cell::new(4, 3, 2)
            ]
        );
    }

    // Tests the shared colour ignores background and rejects mixtures
    // Verified by including background cells in the colour set
    #[test]
    fn test_uniform_color() {
        let with_background = Entity::new(vec![Cell::new(0, 0, 0), Cell::new(4, 0, 1)]);
        assert_eq!(with_background.uniform_color(), Some(4));

        let mixed = Entity::new(vec![Cell::new(3, 0, 0), Cell::new(4, 0, 1)]);
        assert_eq!(mixed.uniform_color(), None);
        assert_eq!(Entity::default().uniform_color(), None);
    }

    // Tests downscaling keeps uniform blocks and blanks mixed ones
    // Verified by taking the first colour of a mixed block
    #[test]
    fn test_scale() {
        let uniform = solid_box(3, [0, 0]);
        let scaled = uniform.scale((3, 3), (1, 1)).unwrap();
        assert_eq!(scaled.cells(), &[Cell::new(3, 0, 0)]);

        let mixed = Entity::new(vec![
            Cell::new(1, 0, 0),
            Cell::new(2, 0, 1),
            Cell::new(1, 1, 0),
            Cell::new(1, 1, 1),
        ]);
        let blanked = mixed.scale((2, 2), (1, 1)).unwrap();
        assert_eq!(blanked.cells(), &[Cell::new(0, 0, 0)]);

        let halves = mixed.scale((2, 2), (2, 1)).unwrap();
        assert_eq!(
            halves.cells(),
            &[Cell::new(0, 0, 0), Cell::new(1, 1, 0)]
        );
    }

    // Tests scaling to a zero-sized lattice fails
    // Verified by dividing by zero into infinite scale factors
    #[test]
    fn test_scale_zero_target() {
        assert!(matches!(
            solid_box(1, [0, 0]).scale((3, 3), (0, 2)),
            Err(GridError::InvalidArgument { .. })
        ));
    }

    // Tests combining entities keeps the first cell at each position
    // Verified by keeping the last occurrence
    #[test]
    fn test_combine_entities() {
        let a = Entity::new(vec![Cell::new(1, 0, 0), Cell::new(1, 0, 1)]);
        let b = Entity::new(vec![Cell::new(2, 0, 1), Cell::new(2, 1, 1)]);
        let combined = combine_entities(&[a, b]);
        assert_eq!(
            combined.cells(),
            &[Cell::new(1, 0, 0), Cell::new(1, 0, 1), Cell::new(2, 1, 1)]
        );
    }

    // Tests bounding-box helpers on a degenerate box
    // Verified by computing width from rows
    #[test]
    fn test_single_cell_box() {
        let bounds = BoundingBox {
            min: [3, 4],
            max: [3, 4],
        };
        assert_eq!((bounds.height(), bounds.width()), (1, 1));
        assert_eq!(bounds.center(), [3.0, 4.0]);
    }
}
