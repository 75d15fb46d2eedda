// Copyright 2011 The Android Open Source Project
// Copyright 2020 Evgeniy Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::convert::TryFrom;

use crate::{LineCap, Path, Point, Rect, ScreenIntRect, AlphaU8, LengthU32};

use crate::blitter::Blitter;
use crate::fixed_point::{fdot8, fdot16, FDot8, FDot16};
use crate::line_clipper;
use crate::math::LENGTH_U32_ONE;

#[derive(Copy, Clone, Debug)]
struct FixedRect {
    left: FDot16,
    top: FDot16,
    right: FDot16,
    bottom: FDot16,
}

impl FixedRect {
    fn from_rect(src: &Rect) -> Self {
        FixedRect {
            left: fdot16::from_f32(src.left()),
            top: fdot16::from_f32(src.top()),
            right: fdot16::from_f32(src.right()),
            bottom: fdot16::from_f32(src.bottom()),
        }
    }
}


/// Multiplies value by 0..256, and shift the result down 8
/// (i.e. return (value * alpha256) >> 8)
#[inline]
fn alpha_mul(value: AlphaU8, alpha256: i32) -> u8 {
    let a = (i32::from(value) * alpha256) >> 8;
    debug_assert!(a >= 0 && a <= 255);
    a as u8
}


pub fn fill_rect(
    rect: &Rect,
    clip: &ScreenIntRect,
    blitter: &mut dyn Blitter,
) -> Option<()> {
    let rect = rect.intersect(&clip.to_rect())?;
    let fr = FixedRect::from_rect(&rect);
    fill_fixed_rect(&fr, blitter);
    Some(())
}

fn fill_fixed_rect(rect: &FixedRect, blitter: &mut dyn Blitter) {
    fill_dot8(
        fdot8::from_fdot16(rect.left),
        fdot8::from_fdot16(rect.top),
        fdot8::from_fdot16(rect.right),
        fdot8::from_fdot16(rect.bottom),
        true,
        blitter,
    )
}

fn fill_dot8(l: FDot8, t: FDot8, r: FDot8, b: FDot8, fill_inner: bool, blitter: &mut dyn Blitter) {
    fn to_alpha(a: i32) -> u8 {
        debug_assert!(a >= 0 && a <= 255);
        a as u8
    }

    // check for empty now that we're in our reduced precision space
    if l >= r || t >= b {
        return;
    }

    let mut top = t >> 8;
    if top == ((b - 1) >> 8) {
        // just one scanline high
        do_scanline(l, top, r, to_alpha(b - t - 1), blitter);
        return;
    }

    if t & 0xFF != 0 {
        do_scanline(l, top, r, to_alpha(256 - (t & 0xFF)), blitter);
        top += 1;
    }

    let bottom = b >> 8;
    let height = bottom - top;
    if let Some(height) = u32::try_from(height).ok().and_then(LengthU32::new) {
        let mut left = l >> 8;
        if left == ((r - 1) >> 8) {
            // just 1-pixel wide
            let left = u32::try_from(left).unwrap();
            let top = u32::try_from(top).unwrap();
            blitter.blit_v(left, top, height, to_alpha(r - l - 1));
        } else {
            if l & 0xFF != 0 {
                {
                    let left = u32::try_from(left).unwrap();
                    let top = u32::try_from(top).unwrap();
                    blitter.blit_v(left, top, height, to_alpha(256 - (l & 0xFF)));
                }

                left += 1;
            }

            let right = r >> 8;
            let width = right - left;
            if fill_inner {
                if let Some(width) = u32::try_from(width).ok().and_then(LengthU32::new) {
                    let left = u32::try_from(left).unwrap();
                    let top = u32::try_from(top).unwrap();
                    let rect = ScreenIntRect::from_xywh_safe(left, top, width, height);
                    blitter.blit_rect(&rect);
                }
            }

            if r & 0xFF != 0 {
                let right = u32::try_from(right).unwrap();
                let top = u32::try_from(top).unwrap();
                blitter.blit_v(right, top, height, to_alpha(r & 0xFF));
            }
        }
    }

    if b & 0xFF != 0 {
        do_scanline(l, bottom, r, to_alpha(b & 0xFF), blitter);
    }
}

fn do_scanline(l: FDot8, top: i32, r: FDot8, alpha: AlphaU8, blitter: &mut dyn Blitter) {
    debug_assert!(l < r);

    let one_len = LengthU32::new(1).unwrap();
    let top = u32::try_from(top).unwrap();

    if (l >> 8) == ((r - 1) >> 8) {
        // 1x1 pixel
        let left = u32::try_from(l >> 8).unwrap();
        blitter.blit_v(left, top, one_len, alpha_mul(alpha, r - l));
        return;
    }

    let mut left = l >> 8;

    if l & 0xFF != 0 {
        {
            let left = u32::try_from(l >> 8).unwrap();
            blitter.blit_v(left, top, one_len, alpha_mul(alpha, 256 - (l & 0xFF)));
        }

        left += 1;
    }

    let right = r >> 8;
    let width = right - left;
    if let Some(width) = u32::try_from(width).ok().and_then(LengthU32::new) {
        let left = u32::try_from(left).unwrap();
        call_hline_blitter(left, top, width, alpha, blitter);
    }

    if r & 0xFF != 0 {
        let right = u32::try_from(right).unwrap();
        blitter.blit_v(right, top, one_len, alpha_mul(alpha, r & 0xFF));
    }
}

/// Anti-aliased hairline stroking.
///
/// Unlike `hairline::stroke_path`, every affected pixel gets an analytically
/// computed coverage instead of a flat one, so diagonal segments end up split
/// between the two rows (or columns) they pass through.
pub fn stroke_path(
    path: &Path,
    line_cap: LineCap,
    clip: &ScreenIntRect,
    blitter: &mut dyn Blitter,
) {
    super::hairline::stroke_path_impl(path, line_cap, clip, aa_hair_line_rgn, blitter)
}

const MAX_COORD: f32 = 32766.0;
const MAX_SEGMENT_LEN: f32 = 511.0;

fn aa_hair_line_rgn(points: &[Point], clip: Option<&ScreenIntRect>, blitter: &mut dyn Blitter) {
    let fixed_bounds = Rect::from_ltrb(-MAX_COORD, -MAX_COORD, MAX_COORD, MAX_COORD).unwrap();
    let clip_bounds = clip.map(|c| c.to_rect());

    for i in 0..points.len() - 1 {
        let mut pts = [Point::zero(); 2];
        if !line_clipper::intersect(&[points[i], points[i + 1]], &fixed_bounds, &mut pts) {
            continue;
        }

        if let Some(clip_bounds) = clip_bounds {
            let tmp = pts;
            if !line_clipper::intersect(&tmp, &clip_bounds, &mut pts) {
                continue;
            }
        }

        stroke_segment(pts[0], pts[1], blitter);
    }
}

fn stroke_segment(p0: Point, p1: Point, blitter: &mut dyn Blitter) {
    if (p1.x - p0.x).abs().max((p1.y - p0.y).abs()) > MAX_SEGMENT_LEN {
        let mid = Point::from_xy((p0.x + p1.x) * 0.5, (p0.y + p1.y) * 0.5);
        stroke_segment(p0, mid, blitter);
        stroke_segment(mid, p1, blitter);
        return;
    }

    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;

    if dx == 0.0 && dy == 0.0 {
        return;
    } else if dy == 0.0 {
        // Pure horizontal: treat as a 1px-tall rect centered on the pixel row.
        if let Some(rect) = Rect::from_ltrb(p0.x.min(p1.x), p0.y - 0.5, p0.x.max(p1.x), p0.y + 0.5) {
            fill_fixed_rect(&FixedRect::from_rect(&rect), blitter);
        }
    } else if dx == 0.0 {
        // Pure vertical: same trick, centered on the pixel column.
        if let Some(rect) = Rect::from_ltrb(p0.x - 0.5, p0.y.min(p1.y), p0.x + 0.5, p0.y.max(p1.y)) {
            fill_fixed_rect(&FixedRect::from_rect(&rect), blitter);
        }
    } else if dx.abs() > dy.abs() {
        stroke_mostly_horizontal(p0, p1, blitter);
    } else {
        stroke_mostly_vertical(p0, p1, blitter);
    }
}

/// Scales `alpha` by `scale256 / 256`.
fn alpha_scale(alpha: u8, scale256: i32) -> u8 {
    (((alpha as i32) * scale256) >> 8) as u8
}

fn blit_pixel(blitter: &mut dyn Blitter, x: i32, y: i32, alpha: u8) {
    if x >= 0 && y >= 0 && alpha > 0 {
        blitter.blit_v(x as u32, y as u32, LENGTH_U32_ONE, alpha);
    }
}

fn stroke_mostly_horizontal(mut p0: Point, mut p1: Point, blitter: &mut dyn Blitter) {
    if p0.x > p1.x {
        std::mem::swap(&mut p0, &mut p1);
    }

    let slope = (p1.y - p0.y) / (p1.x - p0.x);

    let ix0 = p0.x.floor() as i32;
    let ix1 = p1.x.ceil() as i32;

    for ix in ix0..ix1 {
        // Horizontal coverage: how much of this column the segment actually spans.
        let seg_l = p0.x.max(ix as f32);
        let seg_r = p1.x.min(ix as f32 + 1.0);
        let h_coverage = ((seg_r - seg_l).max(0.0).min(1.0) * 255.0).round() as u8;
        if h_coverage == 0 {
            continue;
        }

        let y = p0.y + slope * ((ix as f32 + 0.5) - p0.x);
        let iy = y.floor();
        let frac = y - iy;

        let top_alpha = alpha_scale(h_coverage, ((1.0 - frac) * 256.0) as i32);
        let bot_alpha = alpha_scale(h_coverage, (frac * 256.0) as i32);

        blit_pixel(blitter, ix, iy as i32, top_alpha);
        blit_pixel(blitter, ix, iy as i32 + 1, bot_alpha);
    }
}

fn stroke_mostly_vertical(mut p0: Point, mut p1: Point, blitter: &mut dyn Blitter) {
    if p0.y > p1.y {
        std::mem::swap(&mut p0, &mut p1);
    }

    let slope = (p1.x - p0.x) / (p1.y - p0.y);

    let iy0 = p0.y.floor() as i32;
    let iy1 = p1.y.ceil() as i32;

    for iy in iy0..iy1 {
        let seg_t = p0.y.max(iy as f32);
        let seg_b = p1.y.min(iy as f32 + 1.0);
        let v_coverage = ((seg_b - seg_t).max(0.0).min(1.0) * 255.0).round() as u8;
        if v_coverage == 0 {
            continue;
        }

        let x = p0.x + slope * ((iy as f32 + 0.5) - p0.y);
        let ix = x.floor();
        let frac = x - ix;

        let left_alpha = alpha_scale(v_coverage, ((1.0 - frac) * 256.0) as i32);
        let right_alpha = alpha_scale(v_coverage, (frac * 256.0) as i32);

        blit_pixel(blitter, ix as i32, iy, left_alpha);
        blit_pixel(blitter, ix as i32 + 1, iy, right_alpha);
    }
}

fn call_hline_blitter(mut x: u32, y: u32, count: LengthU32, alpha: AlphaU8, blitter: &mut dyn Blitter) {
    const HLINE_STACK_BUFFER: usize = 100;

    let mut runs = [0u16; HLINE_STACK_BUFFER + 1];
    let mut aa = [0u8; HLINE_STACK_BUFFER];

    let mut count = count.get();
    loop {
        // In theory, we should be able to just do this once (outside of the loop),
        // since aa[] and runs[] are supposed" to be const when we call the blitter.
        // In reality, some wrapper-blitters (e.g. RgnClipBlitter) cast away that
        // constness, and modify the buffers in-place. Hence the need to be defensive
        // here and reseed the aa value.
        aa[0] = alpha;

        let mut n = count;
        if n > HLINE_STACK_BUFFER as u32 {
            n = HLINE_STACK_BUFFER as u32;
        }

        debug_assert!(n <= std::u16::MAX as u32);
        runs[0] = n as u16;
        runs[n as usize] = 0;
        blitter.blit_anti_h(x, y, &aa, &runs);
        x += n;

        if n > count || count == 0 {
            break;
        }

        count -= n;
    }
}
