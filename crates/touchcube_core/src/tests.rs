use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

fn arb_axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)]
}

fn arb_shift() -> impl Strategy<Value = ShiftRecord> {
    (arb_axis(), 0..3_u8, any::<bool>()).prop_map(|(axis, layer, reverse)| ShiftRecord {
        axis,
        layer,
        reverse,
    })
}

fn arb_cube() -> impl Strategy<Value = Cube> {
    (proptest::collection::vec(arb_shift(), 0..40), 0..FACELET_COUNT).prop_map(
        |(shifts, current)| {
            let mut cube = Cube::new();
            cube.set_current_facelet(FaceletId(current as u8));
            for shift in shifts {
                cube.apply(shift);
            }
            cube
        },
    )
}

proptest! {
    #[test]
    fn proptest_color_conservation(mut cube in arb_cube(), shifts in proptest::collection::vec(arb_shift(), 0..20)) {
        for shift in shifts {
            cube.apply(shift);
        }
        let counts = cube.color_counts();
        prop_assert_eq!(counts.values().sum::<usize>(), FACELET_COUNT);
        for side in SideId::ALL {
            prop_assert_eq!(counts.get(&side.home_color()).copied(), Some(FACELETS_PER_SIDE));
        }
    }

    #[test]
    fn proptest_quarter_turn_has_order_four(mut cube in arb_cube(), shift in arb_shift()) {
        let before = cube.clone();
        for _ in 0..4 {
            cube.apply(shift);
        }
        prop_assert_eq!(cube, before);
    }

    #[test]
    fn proptest_inverse_cancels(mut cube in arb_cube(), shift in arb_shift()) {
        let before = cube.clone();
        cube.apply(shift);
        cube.apply(shift.inverse());
        prop_assert_eq!(cube, before);
    }

    #[test]
    fn proptest_side_shift_inverse_cancels(mut cube in arb_cube(), side_index in 0..6_usize, clockwise in any::<bool>()) {
        let side = SideId::from_index(side_index).expect("side index in range");
        let before = cube.clone();
        cube.shift_side(side, clockwise);
        cube.shift_side(side, !clockwise);
        prop_assert_eq!(cube, before);
    }

    #[test]
    fn proptest_current_facelet_tracks_position(mut cube in arb_cube(), shift in arb_shift()) {
        // Paint the selected facelet a unique color and check that the
        // selection stays on it.
        let mut marked = cube.clone();
        marked.paint(marked.current_facelet(), Color::Magenta);

        cube.apply(shift);
        marked.apply(shift);
        prop_assert!(cube.current_facelet().index() < FACELET_COUNT);
        prop_assert_eq!(marked.current_facelet(), cube.current_facelet());
        prop_assert_eq!(marked.color(marked.current_facelet()), Color::Magenta);
    }
}

#[test]
fn test_scramble_is_reproducible() {
    use rand::SeedableRng;

    let mut a = Cube::new();
    let mut b = Cube::new();
    let shifts_a = a.scramble(&mut rand_chacha::ChaCha8Rng::seed_from_u64(42), 25);
    let shifts_b = b.scramble(&mut rand_chacha::ChaCha8Rng::seed_from_u64(42), 25);
    assert_eq!(shifts_a, shifts_b);
    assert_eq!(a, b);

    for shift in shifts_a.iter().rev() {
        a.apply(shift.inverse());
    }
    assert!(a.is_solved());
    assert_eq!(a.current_facelet(), Cube::new().current_facelet());
}

#[test]
fn test_solved_cube() {
    let cube = Cube::new();
    assert!(cube.is_solved());
    assert_eq!(cube.color_counts().len(), 6);
    assert_eq!(
        cube.facelet(cube.current_facelet()).location,
        FaceletRef::new(SideId::Front, 1, 1).expect("valid location"),
    );
}
