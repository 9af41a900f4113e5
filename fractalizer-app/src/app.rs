use std::sync::mpsc;
use std::thread;

use eframe::egui;
use tracing::{debug, info};

use fractalizer_core::orbit::DEFAULT_TRACE_LENGTH;
use fractalizer_core::{
    Explorer, FractalKind, FrameInput, FrameParameters, RenderMode, ScreenPos, ScreenSize,
};

use crate::shader_bridge::{shader_worker, ShaderRequest, ShaderResponse};

// ---------------------------------------------------------------------------
// Application struct
// ---------------------------------------------------------------------------

pub(crate) struct FractalizerApp {
    explorer: Explorer,

    // Renderer thread
    tx_request: mpsc::Sender<ShaderRequest>,
    rx_response: mpsc::Receiver<ShaderResponse>,
    frame_id: u64,
    last_sent: Option<FrameParameters>,
    texture: Option<egui::TextureHandle>,

    // UI state
    show_trace: bool,
    pending_julia_toggle: bool,
}

impl FractalizerApp {
    pub(crate) fn new(egui_ctx: &egui::Context) -> Self {
        let (tx_req, rx_req) = mpsc::channel();
        let (tx_resp, rx_resp) = mpsc::channel();

        let ctx = egui_ctx.clone();
        thread::spawn(move || {
            shader_worker(ctx, rx_req, tx_resp);
        });

        Self {
            explorer: Explorer::new(),
            tx_request: tx_req,
            rx_response: rx_resp,
            frame_id: 0,
            last_sent: None,
            texture: None,
            show_trace: false,
            pending_julia_toggle: false,
        }
    }

    /// Drain renderer responses, keeping only the newest image.
    fn poll_responses(&mut self, ctx: &egui::Context) {
        let mut latest: Option<ShaderResponse> = None;
        while let Ok(resp) = self.rx_response.try_recv() {
            // Ids are monotonic and responses arrive in order.
            latest = Some(resp);
        }
        if let Some(resp) = latest {
            debug!(id = resp.id, "applying rendered frame");
            self.texture =
                Some(ctx.load_texture("fractal", resp.image, egui::TextureOptions::LINEAR));
        }
    }

    /// Collect this frame's input record for the core pipeline.
    fn gather_input(&mut self, ctx: &egui::Context, response: &egui::Response) -> FrameInput {
        let rect = response.rect;
        let size = ScreenSize::new(
            rect.width().max(0.0) as u32,
            rect.height().max(0.0) as u32,
        );

        // Single-letter shortcuts are suppressed while a text widget has
        // focus, so typing never toggles modes.
        let text_editing = ctx.memory(|m| m.focused().is_some());

        let mut input = ctx.input(|i| {
            let pointer = i
                .pointer
                .latest_pos()
                .map(|pos| ScreenPos::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64))
                .unwrap_or(ScreenPos::new(rect.width() as f64 / 2.0, rect.height() as f64 / 2.0));

            FrameInput {
                size,
                pointer,
                pointer_over_ui: !response.hovered(),
                pointer_pressed: i.pointer.primary_pressed(),
                pointer_down: i.pointer.primary_down(),
                scroll: if response.hovered() {
                    i.raw_scroll_delta.y as f64
                } else {
                    0.0
                },
                julia_pressed: !text_editing && i.key_pressed(egui::Key::J),
                overlay_pressed: !text_editing && i.key_pressed(egui::Key::Tab),
                overlay_released: !text_editing && i.key_released(egui::Key::Tab),
                freeze_pressed: !text_editing && i.key_pressed(egui::Key::F),
                reset_pressed: !text_editing && i.key_pressed(egui::Key::R),
            }
        });

        // The HUD checkbox maps onto the same J event as the keyboard.
        if self.pending_julia_toggle {
            input.julia_pressed = true;
            self.pending_julia_toggle = false;
        }
        input
    }

    /// Hand the snapshot to the renderer when anything changed.
    fn request_render(&mut self, params: FrameParameters) {
        if self.last_sent == Some(params) {
            return;
        }
        self.frame_id += 1;
        self.last_sent = Some(params);
        let _ = self.tx_request.send(ShaderRequest {
            id: self.frame_id,
            params,
        });
    }

    /// Draw the orbit of `z ← z² + c` for the hovered point: dots for the
    /// iterates, segments joining them.
    fn draw_orbit_trace(&self, painter: &egui::Painter, rect: egui::Rect, size: ScreenSize) {
        let dot = egui::Color32::from_rgb(80, 120, 255);
        let line = egui::Stroke::new(1.0, egui::Color32::from_rgb(230, 60, 60));

        let mut previous: Option<egui::Pos2> = None;
        for point in self.explorer.trace_orbit(size, DEFAULT_TRACE_LENGTH) {
            let pos = egui::pos2(
                rect.min.x + point.x as f32,
                rect.min.y + point.y as f32,
            );
            painter.circle_filled(pos, 2.0, dot);
            if let Some(prev) = previous {
                painter.line_segment([prev, pos], line);
            }
            previous = Some(pos);
        }
    }

    fn show_control_panel(&mut self, ctx: &egui::Context, params: Option<FrameParameters>) {
        egui::Window::new("Control Panel")
            .default_pos([10.0, 10.0])
            .show(ctx, |ui| {
                let mut iterations = self.explorer.iterations();
                if ui
                    .add(egui::Slider::new(&mut iterations, 10..=1000).text("Iterations"))
                    .changed()
                {
                    self.explorer.set_iterations(iterations);
                }

                let mut kind = self.explorer.kind();
                egui::ComboBox::from_label("Fractal")
                    .selected_text(kind.label())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut kind, FractalKind::Mandelbrot, "Mandelbrot");
                        ui.selectable_value(&mut kind, FractalKind::BurningShip, "Burning Ship");
                    });
                if kind != self.explorer.kind() {
                    self.explorer.set_kind(kind);
                }

                let mut is_julia = self.explorer.mode() != RenderMode::Fractal;
                if ui.checkbox(&mut is_julia, "Julia Set").changed() {
                    self.pending_julia_toggle = true;
                }
                if self.explorer.mode() == RenderMode::Fractal {
                    ui.checkbox(&mut self.show_trace, "Trace Complex Number Path");
                } else {
                    ui.label(if self.explorer.is_frozen() {
                        "Julia sample: frozen (F to release)"
                    } else {
                        "Julia sample: following mouse (F to freeze)"
                    });
                }

                if let Some(p) = params {
                    let centered = if p.mode_ordinal == 0 {
                        p.fractal_center
                    } else {
                        p.julia_center
                    };
                    ui.label(format!("Centered at: {centered}"));
                    ui.label(format!("Mouse at: {}", p.mouse_plane));
                }
            });
    }
}

// ---------------------------------------------------------------------------
// eframe::App
// ---------------------------------------------------------------------------

impl eframe::App for FractalizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());
        self.poll_responses(ctx);

        let mut frame_params = None;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let available = ui.available_size();
                let (response, painter) =
                    ui.allocate_painter(available, egui::Sense::click_and_drag());

                let input = self.gather_input(ctx, &response);
                frame_params = self.explorer.advance(&input);
                if let Some(params) = frame_params {
                    self.request_render(params);
                }

                if let Some(ref tex) = self.texture {
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    painter.image(tex.id(), response.rect, uv, egui::Color32::WHITE);
                }

                if self.show_trace && self.explorer.mode() == RenderMode::Fractal {
                    self.draw_orbit_trace(&painter, response.rect, input.size);
                }
            });

        self.show_control_panel(ctx, frame_params);

        // The Julia sample follows the pointer and drags update every
        // frame, so keep the loop running like any real-time canvas.
        ctx.request_repaint();
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub(crate) fn run() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Fractalizer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Fractalizer")
            .with_inner_size([1280.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fractalizer",
        options,
        Box::new(|cc| Ok(Box::new(FractalizerApp::new(&cc.egui_ctx)))),
    )
}
