// Copyright 2006 The Android Open Source Project
// Copyright 2020 Evgeniy Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::{AlphaU8, Color, LengthU32, Path, Pixmap, PixmapMut, ScreenIntRect};

use crate::blitter::Blitter;
use crate::color::{premultiply_u8, PremultipliedColorU8, ALPHA_U8_OPAQUE};
use crate::scan;

// 8K is 1 too big, since 8K << supersample == 32768 which is too big for Fixed.
const MAX_DIM: u32 = 8192 - 1;


/// A path filling rule.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum FillRule {
    /// Specifies that "inside" is computed by a non-zero sum of signed edge crossings.
    Winding,
    /// Specifies that "inside" is computed by an odd number of edge crossings.
    EvenOdd,
}

impl Default for FillRule {
    #[inline]
    fn default() -> Self {
        FillRule::Winding
    }
}


/// A line cap used by hairline stroking.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl Default for LineCap {
    #[inline]
    fn default() -> Self {
        LineCap::Butt
    }
}


/// Controls how a shape should be painted.
///
/// Only solid-color painting with source-over compositing is supported.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Paint {
    /// A solid fill color.
    ///
    /// Default: black.
    pub color: Color,

    /// Enables anti-aliased painting.
    ///
    /// Default: false.
    pub anti_alias: bool,
}

impl Default for Paint {
    #[inline]
    fn default() -> Self {
        Paint {
            color: Color::BLACK,
            anti_alias: false,
        }
    }
}

impl Paint {
    /// Sets the paint color.
    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the paint color from 8-bit RGBA components.
    #[inline]
    pub fn set_color_rgba8(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.set_color(Color::from_rgba8(r, g, b, a))
    }
}


impl Pixmap {
    /// Draws a filled path onto the pixmap.
    ///
    /// See [`PixmapMut::fill_path`](struct.PixmapMut.html#method.fill_path) for details.
    #[inline]
    pub fn fill_path(&mut self, path: &Path, paint: &Paint, fill_rule: FillRule) -> Option<()> {
        self.as_mut().fill_path(path, paint, fill_rule)
    }

    /// Strokes a hairline path.
    ///
    /// See [`PixmapMut::stroke_hairline`](struct.PixmapMut.html#method.stroke_hairline) for details.
    #[inline]
    pub fn stroke_hairline(&mut self, path: &Path, paint: &Paint, line_cap: LineCap) -> Option<()> {
        self.as_mut().stroke_hairline(path, paint, line_cap)
    }
}

impl PixmapMut<'_> {
    /// Draws a filled path onto the pixmap.
    ///
    /// Returns `None` when there is nothing to fill or in case of a numeric overflow.
    pub fn fill_path(&mut self, path: &Path, paint: &Paint, fill_rule: FillRule) -> Option<()> {
        // to_rect will fail when bounds' width/height is zero.
        // This is an intended behaviour since the only
        // reason for width/height to be zero is a horizontal/vertical line.
        // And in both cases there is nothing to fill.
        let path_int_bounds = path.bounds().round_out();
        if path_int_bounds.width() > MAX_DIM || path_int_bounds.height() > MAX_DIM {
            return None;
        }

        if path.is_too_big_for_math() {
            return None;
        }

        let clip_rect = self.size().to_screen_int_rect(0, 0);
        let color = paint.color.premultiply().to_color_u8();
        let mut blitter = PixmapBlitter { pixmap: self, color };

        if paint.anti_alias {
            scan::path_aa::fill_path(path, fill_rule, &clip_rect, &mut blitter)
        } else {
            scan::path::fill_path(path, fill_rule, &clip_rect, &mut blitter)
        }
    }

    /// Strokes a hairline path.
    ///
    /// A hairline is always 1px wide regardless of any transform; general stroke
    /// expansion (caps/joins for arbitrary widths) is not supported here and is
    /// expected to be performed upstream, producing a filled path instead.
    pub fn stroke_hairline(&mut self, path: &Path, paint: &Paint, line_cap: LineCap) -> Option<()> {
        let clip = self.size().to_screen_int_rect(0, 0);
        let color = paint.color.premultiply().to_color_u8();
        let mut blitter = PixmapBlitter { pixmap: self, color };

        if paint.anti_alias {
            scan::hairline_aa::stroke_path(path, line_cap, &clip, &mut blitter);
        } else {
            scan::hairline::stroke_path(path, line_cap, &clip, &mut blitter);
        }

        Some(())
    }
}


/// A `Blitter` that source-over composites a solid, premultiplied color into a `PixmapMut`.
struct PixmapBlitter<'a, 'b> {
    pixmap: &'a mut PixmapMut<'b>,
    color: PremultipliedColorU8,
}

impl PixmapBlitter<'_, '_> {
    #[inline]
    fn blend_pixel(&mut self, x: u32, y: u32, coverage: AlphaU8) {
        if coverage == 0 {
            return;
        }

        let width = self.pixmap.width();
        let idx = (y as usize) * (width as usize) + (x as usize);
        let pixels = self.pixmap.pixels_mut();
        if let Some(dst) = pixels.get_mut(idx) {
            *dst = blend_over(self.color, *dst, coverage);
        }
    }
}

impl Blitter for PixmapBlitter<'_, '_> {
    fn blit_h(&mut self, x: u32, y: u32, width: LengthU32) {
        for dx in 0..width.get() {
            self.blend_pixel(x + dx, y, ALPHA_U8_OPAQUE);
        }
    }

    fn blit_v(&mut self, x: u32, y: u32, height: LengthU32, alpha: AlphaU8) {
        for dy in 0..height.get() {
            self.blend_pixel(x, y + dy, alpha);
        }
    }

    fn blit_rect(&mut self, rect: &ScreenIntRect) {
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                self.blend_pixel(x, y, ALPHA_U8_OPAQUE);
            }
        }
    }

    fn blit_anti_h(&mut self, x: u32, y: u32, aa: &[AlphaU8], runs: &[u16]) {
        let mut x = x;
        let mut i = 0;
        while runs[i] != 0 {
            let run = u32::from(runs[i]);
            let alpha = aa[i];
            for dx in 0..run {
                self.blend_pixel(x + dx, y, alpha);
            }

            x += run;
            i += 1;
        }
    }
}

/// Source-over composites `src` onto `dst`, scaling `src`'s contribution by `coverage`.
///
/// Both colors are premultiplied, which keeps the blend a single lerp with no final
/// unpremultiply/divide step.
fn blend_over(src: PremultipliedColorU8, dst: PremultipliedColorU8, coverage: AlphaU8) -> PremultipliedColorU8 {
    if coverage == ALPHA_U8_OPAQUE && src.is_opaque() {
        return src;
    }

    let src_r = premultiply_u8(src.red(), coverage);
    let src_g = premultiply_u8(src.green(), coverage);
    let src_b = premultiply_u8(src.blue(), coverage);
    let src_a = premultiply_u8(src.alpha(), coverage);

    let inv_src_a = 255 - src_a;

    PremultipliedColorU8::from_rgba_unchecked(
        src_r.saturating_add(premultiply_u8(dst.red(), inv_src_a)),
        src_g.saturating_add(premultiply_u8(dst.green(), inv_src_a)),
        src_b.saturating_add(premultiply_u8(dst.blue(), inv_src_a)),
        src_a.saturating_add(premultiply_u8(dst.alpha(), inv_src_a)),
    )
}
