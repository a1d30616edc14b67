//! Scan conversion of triangles into spans.
//!
//! A triangle is filled one trapezoid at a time: with the vertices
//! sorted by y, the edge from the topmost to the bottommost vertex (the
//! *long* edge) spans the whole height, and the two remaining edges
//! bound an upper and a lower trapezoid against it. Both edges step in
//! 8.8 fixed point, one scanline at a time, sampled at the vertical
//! center of each line so that vertices landing exactly on a scanline do
//! not produce ambiguous endpoints.
//!
//! Whenever two consecutive scanlines of a trapezoid start on an even y
//! they are emitted as one dual-row fill, which lets the span blitter
//! write the shared character bytes whole.

use core::ops::Range;

use crate::geom::{ScreenPt, Tri};
use crate::math::Fixed;

use super::span::{fill_dual_spans, fill_span};
use super::target::{Color, Screen};

/// One triangle edge, stepped a scanline at a time.
struct Edge {
    x: Fixed,
    step: Fixed,
}

impl Edge {
    /// Starts an edge at `x0`, descending `dy` scanlines over a
    /// horizontal distance of `dx` pixels. `dy` must be positive.
    ///
    /// The start position is advanced by half a step, sampling every
    /// scanline at its vertical center.
    fn new(x0: i32, dx: i32, dy: i32) -> Self {
        let step = Fixed::ratio(dx, dy);
        Self { x: Fixed::from_int(x0) + step.half(), step }
    }

    fn advance(&mut self) {
        self.x += self.step;
    }

    /// The edge position on the next scanline, without committing the
    /// step.
    fn peek(&self) -> Fixed {
        self.x + self.step
    }
}

/// Integer endpoints of the current scanline, normalized left to right.
fn endpoints(long: Fixed, short: Fixed, short_on_left: bool) -> Range<i32> {
    let (l, r) = if short_on_left { (short, long) } else { (long, short) };
    let (xl, xr) = (l.floor(), r.floor());
    if xl <= xr { xl..xr } else { xr..xl }
}

/// Scans the trapezoid between `long` and `short` from `*y` up to
/// `y_end`, pairing even-starting scanlines into dual-row fills.
fn scan_trapezoid(
    screen: &mut Screen,
    y: &mut i32,
    y_end: i32,
    long: &mut Edge,
    short: &mut Edge,
    short_on_left: bool,
    c: Color,
) {
    while *y < y_end {
        let xs = endpoints(long.x, short.x, short_on_left);
        if *y & 1 == 0 && *y + 1 < y_end {
            let below = endpoints(long.peek(), short.peek(), short_on_left);
            fill_dual_spans(screen, *y, xs, below, c);
            long.advance();
            long.advance();
            short.advance();
            short.advance();
            *y += 2;
        } else {
            fill_span(screen, *y, xs, c);
            long.advance();
            short.advance();
            *y += 1;
        }
    }
}

/// Rasterizes a filled triangle onto `screen`.
///
/// The triangle is drawn only if its vertices wind counter-clockwise in
/// screen space; clockwise triangles face away from the viewer and are
/// culled. Degenerate triangles with zero vertical extent draw nothing.
/// Both outcomes are silent, not errors.
///
/// Scanline spans are half-open, so two triangles sharing an edge never
/// overdraw it. Parts of the triangle outside the screen are skipped.
pub fn draw_triangle(screen: &mut Screen, tri: Tri<ScreenPt>, c: Color) {
    if tri.signed_area_x2() < 0 {
        return; // backface
    }
    let mut v = tri.0;

    // Sort the vertices by y. The signed area is non-negative at this
    // point and every swap flips its sign, so after sorting, the parity
    // of the swap count alone tells which side of the long edge B lies
    // on. This stands in for a second cross product.
    let mut swaps = 0;
    if v[0][1] > v[1][1] {
        v.swap(0, 1);
        swaps += 1;
    }
    if v[1][1] > v[2][1] {
        v.swap(1, 2);
        swaps += 1;
    }
    if v[0][1] > v[1][1] {
        v.swap(0, 1);
        swaps += 1;
    }
    let ([ax, ay], [bx, by], [cx, cy]) = (v[0], v[1], v[2]);

    if ay == cy {
        return; // zero height
    }
    let short_on_left = swaps & 1 == 1;

    // The long edge runs through both trapezoids; its accumulator must
    // not be reset in between, or its rounding would diverge from an
    // edge stepped in one go.
    let mut long = Edge::new(ax, cx - ax, cy - ay);
    let mut y = ay;

    if ay < by {
        let mut short = Edge::new(ax, bx - ax, by - ay);
        scan_trapezoid(screen, &mut y, by, &mut long, &mut short, short_on_left, c);
    }
    if by < cy {
        let mut short = Edge::new(bx, cx - bx, cy - by);
        scan_trapezoid(screen, &mut y, cy, &mut long, &mut short, short_on_left, c);
    }
}
