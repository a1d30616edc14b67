use lofire_core::prelude::*;

#[test]
fn single_triangle_matches_reference_dump() {
    let mut screen = Screen::new();
    draw_triangle(&mut screen, tri([40, 25], [56, 34], [40, 43]), color(1));

    let expected = include_bytes!("single_tri.bin");
    assert_eq!(screen.data(), expected);
}

#[test]
fn cube_scene_matches_reference_dump() {
    // An isometric cube seen from a corner: three visible faces, two
    // triangles each, all wound counter-clockwise. The silhouette is a
    // hexagon around the front corner at the screen center.
    let center = [40, 25];
    let bot_r = [56, 34];
    let bot_l = [24, 34];
    let top = [40, 7];
    let bot = [40, 43];
    let top_r = [56, 16];
    let top_l = [24, 16];

    let mut screen = Screen::new();
    // Bottom face
    draw_triangle(&mut screen, tri(center, bot_r, bot), color(1));
    draw_triangle(&mut screen, tri(center, bot, bot_l), color(1));
    // Right face
    draw_triangle(&mut screen, tri(center, top, top_r), color(2));
    draw_triangle(&mut screen, tri(center, top_r, bot_r), color(2));
    // Left face
    draw_triangle(&mut screen, tri(center, bot_l, top_l), color(3));
    draw_triangle(&mut screen, tri(center, top_l, top), color(3));

    let expected = include_bytes!("cube_scene.bin");
    assert_eq!(screen.data(), expected);
}

#[test]
fn culled_and_degenerate_input_leaves_the_buffer_alone() {
    let mut screen = Screen::new();
    screen.clear(color(2));
    let before = screen.clone();

    // Clockwise
    draw_triangle(&mut screen, tri([40, 10], [20, 40], [60, 40]), color(1));
    // Zero height
    draw_triangle(&mut screen, tri([10, 30], [20, 30], [30, 30]), color(1));
    // Entirely off screen
    draw_triangle(&mut screen, tri([90, 60], [120, 90], [91, 95]), color(1));

    assert_eq!(screen, before);
}

#[cfg(feature = "std")]
#[test]
fn screen_dump_roundtrips_through_a_stream() {
    use lofire_core::util::raw::{load_raw, save_raw};

    let mut screen = Screen::new();
    draw_triangle(&mut screen, tri([40, 25], [56, 34], [40, 43]), color(1));

    let mut bytes = Vec::new();
    save_raw(&mut bytes, &screen).unwrap();
    assert_eq!(bytes, include_bytes!("single_tri.bin"));
    assert_eq!(load_raw(&bytes[..]).unwrap(), screen);
}
