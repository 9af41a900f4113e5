//! Stand-in for the GPU fragment shader.
//!
//! The core hands over a flat [`FrameParameters`] record and knows nothing
//! about what happens here. A background worker evaluates the escape-time
//! image on the CPU (rayon, row-parallel) at a reduced resolution and
//! ships the result back as an egui texture image.

use std::sync::mpsc;

use eframe::egui;
use rayon::prelude::*;
use tracing::debug;

use fractalizer_core::{Complex, FractalKind, FrameParameters, ScreenPos, ScreenSize, ViewState};

/// Longest edge of the rendered image; the texture is stretched to the
/// window, trading sharpness for per-frame latency.
const MAX_RENDER_EDGE: u32 = 640;

/// Fraction of the viewport covered by the Julia inset in overlay mode.
const OVERLAY_INSET: u32 = 3;

pub(crate) struct ShaderRequest {
    pub(crate) id: u64,
    pub(crate) params: FrameParameters,
}

pub(crate) struct ShaderResponse {
    pub(crate) id: u64,
    pub(crate) image: egui::ColorImage,
}

/// Worker loop: always renders the most recent request, dropping any that
/// queued up behind it while a frame was being computed.
pub(crate) fn shader_worker(
    ctx: egui::Context,
    rx: mpsc::Receiver<ShaderRequest>,
    tx: mpsc::Sender<ShaderResponse>,
) {
    while let Ok(mut req) = rx.recv() {
        while let Ok(newer) = rx.try_recv() {
            req = newer;
        }
        debug!(id = req.id, iterations = req.params.iterations, "rendering frame");
        let image = render(&req.params);
        if tx.send(ShaderResponse { id: req.id, image }).is_err() {
            return;
        }
        ctx.request_repaint();
    }
}

/// Escape-time iteration count for one plane point, or `None` when the
/// orbit stays bounded for the full budget.
fn escape_count(z0: Complex, c: Complex, kind: FractalKind, max_iter: u32) -> Option<u32> {
    let mut z = z0;
    for n in 0..max_iter {
        z = match kind {
            FractalKind::Mandelbrot => z * z + c,
            FractalKind::BurningShip => {
                let a = Complex::new(z.re.abs(), z.im.abs());
                a * a + c
            }
        };
        if z.norm_sq() > 4.0 {
            return Some(n);
        }
    }
    None
}

fn shade(escaped: Option<u32>, max_iter: u32) -> [u8; 4] {
    match escaped {
        None => [0, 0, 0, 255],
        Some(n) => {
            let t = n as f64 / max_iter as f64;
            let r = (9.0 * (1.0 - t) * t * t * t * 255.0) as u8;
            let g = (15.0 * (1.0 - t) * (1.0 - t) * t * t * 255.0) as u8;
            let b = (8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t * 255.0) as u8;
            [r, g, b, 255]
        }
    }
}

fn render(params: &FrameParameters) -> egui::ColorImage {
    let scale = (params.size.width.max(params.size.height)).div_ceil(MAX_RENDER_EDGE).max(1);
    let width = (params.size.width / scale).max(1);
    let height = (params.size.height / scale).max(1);
    let size = ScreenSize::new(width, height);

    let fractal_view = ViewState {
        center: params.fractal_center,
        zoom: params.fractal_zoom,
    };
    let julia_view = ViewState {
        center: params.julia_center,
        zoom: params.julia_zoom,
    };

    // Overlay mode draws the Julia set in a square inset, top-right.
    let inset_edge = width.min(height) / OVERLAY_INSET;
    let inset_left = width - inset_edge;

    let mut pixels = vec![0u8; (width * height * 4) as usize];
    pixels
        .par_chunks_exact_mut((width * 4) as usize)
        .enumerate()
        .for_each(|(py, row)| {
            for px in 0..width {
                let pos = ScreenPos::new(px as f64 + 0.5, py as f64 + 0.5);
                let in_inset = params.mode_ordinal == 2
                    && px >= inset_left
                    && (py as u32) < inset_edge;

                let escaped = if params.mode_ordinal == 1 {
                    let z0 = fractalizer_core::argand::screen_to_plane(pos, size, &julia_view);
                    escape_count(z0, params.julia_sample, FractalKind::Mandelbrot, params.iterations)
                } else if in_inset {
                    let inset_pos = ScreenPos::new(
                        ((px - inset_left) as f64 + 0.5) * (width as f64 / inset_edge as f64),
                        (py as f64 + 0.5) * (height as f64 / inset_edge as f64),
                    );
                    let z0 =
                        fractalizer_core::argand::screen_to_plane(inset_pos, size, &julia_view);
                    escape_count(z0, params.julia_sample, FractalKind::Mandelbrot, params.iterations)
                } else {
                    let c = fractalizer_core::argand::screen_to_plane(pos, size, &fractal_view);
                    escape_count(Complex::ZERO, c, params.kind, params.iterations)
                };

                let rgba = shade(escaped, params.iterations);
                let i = (px * 4) as usize;
                row[i..i + 4].copy_from_slice(&rgba);
            }
        });

    egui::ColorImage::from_rgba_unmultiplied([width as usize, height as usize], &pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_point_escapes_immediately() {
        let n = escape_count(Complex::ZERO, Complex::new(10.0, 0.0), FractalKind::Mandelbrot, 100);
        assert_eq!(n, Some(0));
    }

    #[test]
    fn origin_stays_bounded() {
        let n = escape_count(Complex::ZERO, Complex::ZERO, FractalKind::Mandelbrot, 100);
        assert_eq!(n, None);
    }

    #[test]
    fn render_produces_full_image() {
        let params = FrameParameters {
            size: ScreenSize::new(160, 90),
            fractal_center: Complex::ZERO,
            fractal_zoom: 2.0,
            julia_center: Complex::ZERO,
            julia_zoom: 2.0,
            mouse_plane: Complex::ZERO,
            julia_sample: Complex::new(-0.7, 0.27015),
            kind: FractalKind::Mandelbrot,
            mode_ordinal: 0,
            iterations: 50,
        };
        let image = render(&params);
        assert_eq!(image.size, [160, 90]);
        // The default view contains both interior and escaped points.
        let interior = image.pixels.iter().filter(|p| **p == egui::Color32::BLACK).count();
        assert!(interior > 0);
        assert!(interior < image.pixels.len());
    }
}
