mod app;
mod shader_bridge;

fn main() -> eframe::Result {
    app::run()
}
