use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use strum::IntoEnumIterator;

use crate::*;

/// Parses tiles written as digits, such as `"115115115"`.
fn parse_tiles<const N: usize>(digits: &str) -> [Tile; N] {
    let tiles: Vec<Tile> = digits
        .bytes()
        .map(|b| FaceId::from_number(b - b'0').expect("bad tile digit"))
        .collect();
    tiles.try_into().expect("wrong number of tiles")
}

fn tiles(digits: &str) -> [Tile; TILE_COUNT] {
    parse_tiles(digits)
}

fn strip(digits: &str) -> Strip {
    parse_tiles(digits)
}

fn assert_faces(cube: &Cube, expected: [(FaceId, &str); 6]) {
    for (face, digits) in expected {
        assert_eq!(tiles(digits), *cube.tiles(face), "{face} face");
    }
}

/// Returns a cube with a listener that counts notifications.
fn counting_cube() -> (Cube, Rc<Cell<usize>>) {
    let count = Rc::new(Cell::new(0));
    let mut cube = Cube::new();
    let c = Rc::clone(&count);
    cube.set_listener(move |_: &Faces| c.set(c.get() + 1));
    (cube, count)
}

fn any_move() -> impl Strategy<Value = Move> {
    prop::sample::select(Move::iter().collect::<Vec<_>>())
}

fn any_primitive() -> impl Strategy<Value = Move> {
    prop::sample::select(Move::PRIMITIVES.to_vec())
}

fn any_face() -> impl Strategy<Value = Face> {
    (
        prop::sample::select(FaceId::ALL.to_vec()),
        prop::array::uniform9(prop::sample::select(FaceId::ALL.to_vec())),
    )
        .prop_map(|(id, tiles)| Face::with_tiles(id, tiles))
}

#[test]
fn test_reset() {
    let mut cube = Cube::new();
    for face in FaceId::iter() {
        assert_eq!([face; TILE_COUNT], *cube.tiles(face));
    }

    cube.scramble_seeded(30, 1);
    cube.reset();
    assert!(cube.is_solved());
    assert_eq!(Cube::new().faces(), cube.faces());
    for face in FaceId::iter() {
        assert_eq!(face.number() as usize, face.index() + 1);
        assert!(cube.face(face).is_uniform(face));
    }
}

#[test]
fn test_face_wiring() {
    let faces = Faces::new();
    for face in faces.iter() {
        for dir in Direction::iter() {
            assert_eq!(face.id().adjacent(dir), face.adjacent(dir));
        }
        assert_eq!(face.id() == FaceId::Back, face.is_inverted());
    }
    assert_eq!(Some(FaceId::Right), faces[FaceId::Back].adjacent(Direction::Left));
    assert_eq!(None, faces[FaceId::Up].adjacent(Direction::Left));
    assert_eq!(None, faces[FaceId::Left].adjacent(Direction::Up));
}

#[test]
fn test_turn_permutation() {
    // Clockwise: 0 <- 6, 1 <- 3, 2 <- 0, 3 <- 7, 5 <- 1, 6 <- 8, 7 <- 5, 8 <- 2.
    let cw_source = [6, 3, 0, 7, 4, 1, 8, 5, 2];
    for (dest, &src) in cw_source.iter().enumerate() {
        let mut t = [FaceId::Front; TILE_COUNT];
        t[src] = FaceId::Back;
        let mut face = Face::with_tiles(FaceId::Front, t);
        face.turn(TwistDirection::CW);
        assert_eq!(FaceId::Back, face.tiles()[dest], "tile {src} after CW");

        face.turn(TwistDirection::CCW);
        assert_eq!(t, *face.tiles(), "CCW after CW");
    }
}

#[test]
fn test_turn_accepts_bool() {
    let mut face = Face::with_tiles(FaceId::Up, tiles("123456123"));
    let mut expected = face.clone();
    face.turn(true);
    expected.turn(TwistDirection::CW);
    assert_eq!(expected, face);
    face.turn(false);
    assert_eq!(tiles("123456123"), *face.tiles());
}

#[test]
fn test_invert() {
    let mut face = Face::with_tiles(FaceId::Front, tiles("123456123"));
    face.invert();
    assert_eq!(tiles("321654321"), *face.tiles());
}

#[test]
fn test_rows_and_columns() {
    let mut face = Face::with_tiles(FaceId::Front, tiles("123456654"));
    assert_eq!(strip("123"), face.row(0));
    assert_eq!(strip("654"), face.row(2));
    assert_eq!(strip("146"), face.column(0));
    assert_eq!(strip("364"), face.column(2));

    let old = face.replace_row(1, strip("111"));
    assert_eq!(strip("456"), old);
    assert_eq!(tiles("123111654"), *face.tiles());

    let old = face.replace_column(2, strip("222"));
    assert_eq!(strip("314"), old);
    assert_eq!(tiles("122112652"), *face.tiles());
}

#[test]
fn test_inverted_face_columns() {
    // Stored as seen from behind; column 0 on the vertical ring is the
    // stored column 2 read bottom to top.
    let mut face = Face::with_tiles(FaceId::Back, tiles("123456654"));
    assert_eq!(strip("463"), face.column(0));
    assert_eq!(strip("641"), face.column(2));
    assert_eq!(strip("123"), face.row(0));

    let old = face.replace_column(0, strip("111"));
    assert_eq!(strip("463"), old);
    assert_eq!(tiles("121451651"), *face.tiles());
}

#[test]
#[should_panic(expected = "row index 3 out of range")]
fn test_row_out_of_range() {
    Face::new(FaceId::Front).row(3);
}

#[test]
#[should_panic(expected = "has no neighbor")]
fn test_shift_without_neighbor() {
    Faces::new().shift_row(FaceId::Up, 0, Direction::Left);
}

#[test]
#[should_panic(expected = "cannot shift")]
fn test_shift_row_vertically() {
    Faces::new().shift_row(FaceId::Front, 0, Direction::Up);
}

#[test]
fn test_shift_row() {
    let mut faces = Faces::new();
    faces.shift_row(FaceId::Front, 0, Direction::Left);
    assert_eq!(tiles("333111111"), *faces.tiles(FaceId::Front));
    assert_eq!(tiles("111222222"), *faces.tiles(FaceId::Left));
    assert_eq!(tiles("666333333"), *faces.tiles(FaceId::Right));
    assert_eq!(tiles("222666666"), *faces.tiles(FaceId::Back));
    assert!(faces[FaceId::Up].is_uniform(FaceId::Up));

    faces.shift_row(FaceId::Front, 0, Direction::Right);
    assert_eq!(Faces::new(), faces);
}

#[test]
fn test_shift_column_through_back() {
    let mut faces = Faces::new();
    faces.shift_column(FaceId::Front, 2, Direction::Up);
    assert_eq!(tiles("115115115"), *faces.tiles(FaceId::Front));
    assert_eq!(tiles("441441441"), *faces.tiles(FaceId::Up));
    assert_eq!(tiles("466466466"), *faces.tiles(FaceId::Back));
    assert_eq!(tiles("556556556"), *faces.tiles(FaceId::Down));
}

#[test]
fn test_u_from_solved() {
    let mut cube = Cube::new();
    cube.u();
    assert_faces(
        &cube,
        [
            (FaceId::Front, "333111111"),
            (FaceId::Left, "111222222"),
            (FaceId::Right, "666333333"),
            (FaceId::Up, "444444444"),
            (FaceId::Down, "555555555"),
            (FaceId::Back, "222666666"),
        ],
    );
}

#[test]
fn test_u_cycles_top_rows() {
    let mut cube = Cube::new();
    cube.scramble_seeded(25, 99);
    let before = cube.faces().clone();
    cube.u();

    // Row 0 moves one face to the left around the ring.
    for (face, predecessor) in [
        (FaceId::Front, FaceId::Right),
        (FaceId::Left, FaceId::Front),
        (FaceId::Back, FaceId::Left),
        (FaceId::Right, FaceId::Back),
    ] {
        assert_eq!(before[predecessor].row(0), cube.face(face).row(0), "{face}");
        assert_eq!(before[face].row(1), cube.face(face).row(1), "{face}");
    }
    assert_eq!(before[FaceId::Down], *cube.face(FaceId::Down));

    let mut up = before[FaceId::Up].clone();
    up.turn(TwistDirection::CW);
    assert_eq!(up, *cube.face(FaceId::Up));
}

#[test]
fn test_layer_moves_from_solved() {
    let mut cube = Cube::new();
    cube.r();
    assert_faces(
        &cube,
        [
            (FaceId::Front, "115115115"),
            (FaceId::Left, "222222222"),
            (FaceId::Right, "333333333"),
            (FaceId::Up, "441441441"),
            (FaceId::Down, "556556556"),
            (FaceId::Back, "466466466"),
        ],
    );

    let mut cube = Cube::new();
    cube.l();
    assert_faces(
        &cube,
        [
            (FaceId::Front, "411411411"),
            (FaceId::Left, "222222222"),
            (FaceId::Right, "333333333"),
            (FaceId::Up, "644644644"),
            (FaceId::Down, "155155155"),
            (FaceId::Back, "665665665"),
        ],
    );

    let mut cube = Cube::new();
    cube.d();
    assert_faces(
        &cube,
        [
            (FaceId::Front, "111111222"),
            (FaceId::Left, "222222666"),
            (FaceId::Right, "333333111"),
            (FaceId::Up, "444444444"),
            (FaceId::Down, "555555555"),
            (FaceId::Back, "666666333"),
        ],
    );
}

#[test]
fn test_reorientations_from_solved() {
    let mut cube = Cube::new();
    cube.turn_left();
    assert_faces(
        &cube,
        [
            (FaceId::Front, "333333333"),
            (FaceId::Left, "111111111"),
            (FaceId::Right, "666666666"),
            (FaceId::Up, "444444444"),
            (FaceId::Down, "555555555"),
            (FaceId::Back, "222222222"),
        ],
    );

    let mut cube = Cube::new();
    cube.turn_up();
    assert_faces(
        &cube,
        [
            (FaceId::Front, "555555555"),
            (FaceId::Left, "222222222"),
            (FaceId::Right, "333333333"),
            (FaceId::Up, "111111111"),
            (FaceId::Down, "666666666"),
            (FaceId::Back, "444444444"),
        ],
    );
}

#[test]
fn test_front_and_back_from_solved() {
    let mut cube = Cube::new();
    cube.f();
    assert_faces(
        &cube,
        [
            (FaceId::Front, "111111111"),
            (FaceId::Left, "225225225"),
            (FaceId::Right, "433433433"),
            (FaceId::Up, "444444222"),
            (FaceId::Down, "333555555"),
            (FaceId::Back, "666666666"),
        ],
    );

    let mut cube = Cube::new();
    cube.b();
    assert_faces(
        &cube,
        [
            (FaceId::Front, "111111111"),
            (FaceId::Left, "422422422"),
            (FaceId::Right, "335335335"),
            (FaceId::Up, "333444444"),
            (FaceId::Down, "555555222"),
            (FaceId::Back, "666666666"),
        ],
    );
}

#[test]
fn test_r_u_f_sequence() {
    let mut cube = Cube::new();
    cube.apply_all([Move::R, Move::U, Move::F]);
    assert_faces(
        &cube,
        [
            (FaceId::Front, "113113553"),
            (FaceId::Left, "115225226"),
            (FaceId::Right, "166133133"),
            (FaceId::Up, "444444225"),
            (FaceId::Down, "334556556"),
            (FaceId::Back, "222466466"),
        ],
    );
    assert_eq!(Ok(()), cube.check_invariants());
}

#[test]
fn test_move_orders() {
    let solved = Faces::new();
    for m in Move::iter() {
        let mut cube = Cube::new();
        for i in 1..=4 {
            cube.apply(m);
            assert_eq!(i == 4, *cube.faces() == solved, "{m} applied {i} times");
        }
    }

    let mut cube = Cube::new();
    for i in 1..=6 {
        cube.apply_all([Move::R, Move::U, Move::Rr, Move::Ur]);
        assert_eq!(i == 6, *cube.faces() == solved, "sexy move applied {i} times");
    }
}

#[test]
fn test_reorientation_keeps_faces_uniform() {
    for m in [Move::TurnLeft, Move::TurnRight, Move::TurnUp, Move::TurnDown] {
        let mut cube = Cube::new();
        cube.apply(m);
        assert!(cube.is_solved(), "{m}");
        assert_ne!(Faces::new(), *cube.faces(), "{m}");
    }
}

#[test]
fn test_apply_matches_methods() {
    let methods: [(Move, fn(&mut Cube)); 20] = [
        (Move::U, Cube::u),
        (Move::Ur, Cube::ur),
        (Move::Cl, Cube::cl),
        (Move::Cr, Cube::cr),
        (Move::D, Cube::d),
        (Move::Dr, Cube::dr),
        (Move::L, Cube::l),
        (Move::Lr, Cube::lr),
        (Move::Cu, Cube::cu),
        (Move::Cd, Cube::cd),
        (Move::R, Cube::r),
        (Move::Rr, Cube::rr),
        (Move::TurnLeft, Cube::turn_left),
        (Move::TurnRight, Cube::turn_right),
        (Move::TurnUp, Cube::turn_up),
        (Move::TurnDown, Cube::turn_down),
        (Move::F, Cube::f),
        (Move::Fr, Cube::fr),
        (Move::B, Cube::b),
        (Move::Br, Cube::br),
    ];
    for (m, method) in methods {
        let mut a = Cube::new();
        let mut b = Cube::new();
        a.scramble_seeded(20, 7);
        b.scramble_seeded(20, 7);
        a.apply(m);
        method(&mut b);
        assert_eq!(a.faces(), b.faces(), "{m}");
    }
}

#[test]
fn test_notification_counts() {
    for m in Move::iter() {
        let (mut cube, count) = counting_cube();
        cube.apply(m);
        let expected = match m.kind() {
            MoveKind::Primitive => 1,
            MoveKind::Reorientation => 4,
            MoveKind::Compound => 9,
        };
        assert_eq!(expected, count.get(), "{m}");
    }

    let (mut cube, count) = counting_cube();
    cube.reset();
    assert_eq!(1, count.get());
}

#[test]
fn test_listener_sees_new_state() {
    let seen = Rc::new(Cell::new(None));
    let s = Rc::clone(&seen);
    let mut cube = Cube::with_listener(move |faces: &Faces| {
        s.set(Some(faces.tiles(FaceId::Front)[0]));
    });
    assert_eq!(Some(FaceId::Front), seen.get());
    cube.u();
    assert_eq!(Some(FaceId::Right), seen.get());

    assert!(cube.take_listener().is_some());
    cube.ur();
    assert_eq!(Some(FaceId::Right), seen.get());
    assert!(cube.take_listener().is_none());
}

#[test]
fn test_scramble() {
    let (mut cube, count) = counting_cube();
    let moves = cube.scramble(ScrambleLength::default().get());
    assert_eq!(DEFAULT_SCRAMBLE_LENGTH as usize, moves.len());
    assert_eq!(DEFAULT_SCRAMBLE_LENGTH as usize, count.get());
    assert!(moves.iter().all(|m| m.is_primitive()));
    assert_eq!(Ok(()), cube.check_invariants());

    let (mut cube, count) = counting_cube();
    assert_eq!(Vec::<Move>::new(), cube.scramble(0));
    assert_eq!(0, count.get());
    assert!(cube.is_solved());
}

#[test]
fn test_scramble_seeded_is_reproducible() {
    let mut a = Cube::new();
    let mut b = Cube::new();
    let moves = a.scramble_seeded(40, 12345);
    assert_eq!(moves, b.scramble_seeded(40, 12345));
    assert_eq!(a.faces(), b.faces());

    let mut c = Cube::new();
    c.apply_all(moves.iter().copied());
    assert_eq!(a.faces(), c.faces());
}

#[test]
fn test_scramble_uses_every_primitive() {
    let mut cube = Cube::new();
    let moves = cube.scramble_seeded(2000, 3);
    for m in Move::PRIMITIVES {
        assert!(moves.contains(&m), "{m} never chosen");
    }
}

proptest! {
    #[test]
    fn proptest_invert_twice_is_identity(face in any_face()) {
        let mut inverted = face.clone();
        inverted.invert();
        inverted.invert();
        prop_assert_eq!(face, inverted);
    }

    #[test]
    fn proptest_turn_four_times_is_identity(face in any_face(), cw in any::<bool>()) {
        let mut turned = face.clone();
        for _ in 0..4 {
            turned.turn(cw);
        }
        prop_assert_eq!(face, turned);
    }

    #[test]
    fn proptest_inverted_column_matches_invert_read_invert(face in any_face(), i in 0..SIDE_LEN) {
        let mut plain = Face::with_tiles(FaceId::Front, *face.tiles());
        plain.invert();
        let expected = plain.column(i);

        let back = Face::with_tiles(FaceId::Back, *face.tiles());
        prop_assert_eq!(expected, back.column(i));
    }

    #[test]
    fn proptest_moves_conserve_tiles(moves in prop::collection::vec(any_move(), 0..40)) {
        let mut cube = Cube::new();
        cube.apply_all(moves);
        prop_assert_eq!([TILE_COUNT; FaceId::COUNT], cube.faces().tile_counts());
        prop_assert_eq!(Ok(()), cube.check_invariants());
    }

    #[test]
    fn proptest_inverse_undoes_move(
        setup in prop::collection::vec(any_primitive(), 0..30),
        m in any_move(),
    ) {
        let mut cube = Cube::new();
        cube.apply_all(setup);
        let before = cube.faces().clone();
        cube.apply(m);
        cube.apply(m.inverse());
        prop_assert_eq!(&before, cube.faces());
        cube.apply(m.inverse());
        cube.apply(m);
        prop_assert_eq!(&before, cube.faces());
    }
}
