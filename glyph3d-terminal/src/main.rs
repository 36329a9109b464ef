/// Glyph3D terminal viewer
///
/// Controls:
///   - W/S: Pitch
///   - A/D: Yaw
///   - Q/E: Roll
///   - Z/X: Zoom in / out
///   - Left mouse at the screen rim: Pan; near the centre: Depth
///   - Esc / Ctrl-C: Quit
use anyhow::Context;
use clap::Parser;
use glyph3d_core::{RenderConfig, ShowcaseScene};
use glyph3d_terminal::{load_config, stl, TerminalApp};

mod cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    if let Some(path) = &cli.log_file {
        cli::initialize_tracing(path, &cli.log_filter, cli.log_format)?;
    }

    let mut config = match &cli.config {
        Some(path) => load_config(path).with_context(|| format!("loading {}", path.display()))?,
        None => RenderConfig::default(),
    };
    if let Some(light) = cli.light {
        config.light = light.into();
        config.validate().context("invalid --light")?;
    }

    let mut scene = ShowcaseScene::new(config);
    for path in &cli.stl {
        let mesh = stl::load(path).with_context(|| format!("loading mesh {}", path.display()))?;
        scene.push_mesh(stl::scaled(&mesh, &cli.mesh_scale));
    }

    let mut app = TerminalApp::new(scene).context("failed to attach to the terminal")?;
    app.run().context("render loop failed")?;
    Ok(())
}
