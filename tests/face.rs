mod tests {
    use dice_light_composer::face::{DieFace, FACE_CELLS, LED_COUNT};

    #[test]
    fn test_face_cells_partition_the_strip() {
        let mut owner = [0u8; LED_COUNT];
        for value in 1..=6 {
            let face = DieFace::new(value);
            let cells = face.cells();
            assert_eq!(cells.len(), usize::from(face.get()));
            for cell in cells {
                assert_eq!(owner[cell], 0, "cell {cell} belongs to two faces");
                owner[cell] = face.get();
            }
        }
        assert!(owner.iter().all(|face| *face != 0));
        assert_eq!(FACE_CELLS.iter().map(|range| range.len()).sum::<usize>(), LED_COUNT);
    }

    #[test]
    fn test_face_clamps() {
        assert_eq!(DieFace::new(0).get(), 1);
        assert_eq!(DieFace::new(-40).get(), 1);
        assert_eq!(DieFace::new(7).get(), 6);
        assert_eq!(DieFace::new(i32::MAX).get(), 6);
        assert_eq!(DieFace::new(4).get(), 4);
        assert_eq!(DieFace::from(3).get(), 3);
    }

    #[test]
    fn test_face_wraps() {
        assert_eq!(DieFace::new(6).next(), DieFace::new(1));
        assert_eq!(DieFace::new(1).prev(), DieFace::new(6));

        let mut face = DieFace::new(1);
        for _ in 0..6 {
            face = face.next();
        }
        assert_eq!(face, DieFace::new(1));
    }
}
