//! Diagnostic PNG visualization of current tracks. Rendering is best-effort:
//! the behavior of downstream tests never depends on pixel content, only on
//! a file landing at the expected path.

use std::path::Path;

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect as PixelRect;

use crate::error::Result;
use crate::tracker::TrackView;

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 600;
const BACKGROUND: Rgb<u8> = Rgb([16, 16, 16]);
const TRACK_COLOR: Rgb<u8> = Rgb([0, 200, 0]);

/// Renders `frame_<iiii>.png` (four-digit, zero-padded) under `dir`, one
/// green rectangle per track scaled from normalized to pixel coordinates,
/// stamped with the track's id.
pub fn render_frame(dir: &Path, frame_index: usize, tracks: &[TrackView]) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    let mut canvas = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);

    for track in tracks {
        let rect = scale_to_canvas(track.rect.x, track.rect.y, track.rect.w, track.rect.h);
        draw_hollow_rect_mut(&mut canvas, rect, TRACK_COLOR);
        stamp_id(&mut canvas, rect.left(), rect.top(), track.id);
    }

    let path = dir.join(format!("frame_{frame_index:04}.png"));
    canvas.save(&path).map_err(|e| {
        crate::error::TrackerError::malformed(format!("failed to write {}: {e}", path.display()))
    })?;

    Ok(())
}

fn scale_to_canvas(x: f64, y: f64, w: f64, h: f64) -> PixelRect {
    let px = (x * CANVAS_WIDTH as f64).round() as i32;
    let py = (y * CANVAS_HEIGHT as f64).round() as i32;
    let pw = ((w * CANVAS_WIDTH as f64).round() as u32).max(1);
    let ph = ((h * CANVAS_HEIGHT as f64).round() as u32).max(1);
    PixelRect::at(px, py).of_size(pw, ph)
}

/// Stamps an integer id as a tiny run of filled squares above a track's
/// rectangle — one digit per square, base 10, most significant digit first.
/// No font asset is available to embed for real text rendering, and this
/// output is diagnostic only.
fn stamp_id(canvas: &mut RgbImage, left: i32, top: i32, id: u64) {
    const DIGIT_SIZE: i32 = 4;
    const GAP: i32 = 1;

    let digits = id.to_string();
    let label_top = (top - DIGIT_SIZE - GAP).max(0);

    for (i, ch) in digits.chars().enumerate() {
        let digit = ch.to_digit(10).unwrap_or(0);
        let x0 = left + i as i32 * (DIGIT_SIZE + GAP);
        // Brightness encodes the digit value so distinct ids are visually
        // distinguishable without a real font.
        let shade = 40 + (digit as u8) * 20;
        let color = Rgb([shade, shade, 0]);

        for dx in 0..DIGIT_SIZE {
            for dy in 0..DIGIT_SIZE {
                let px = x0 + dx;
                let py = label_top + dy;
                if px >= 0 && py >= 0 && (px as u32) < canvas.width() && (py as u32) < canvas.height()
                {
                    canvas.put_pixel(px as u32, py as u32, color);
                }
            }
        }
    }
}
