//! tftcanvas simulator
//!
//! Renders a demo panel through the canvas into an in-memory display
//! controller and saves it as an upscaled PNG.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

use tftcanvas::config::{self, Config};
use tftcanvas::{Align, Canvas, Display, FrameBufferDisplay, MONO_6X8};

fn print_help() {
    println!("tftcanvas {}", env!("CARGO_PKG_VERSION"));
    println!("Render the canvas demo panel to a PNG file");
    println!();
    println!("USAGE:");
    println!("    tftcanvas [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help            Print this help");
    println!("    -V, --version         Print version");
    println!("    -o, --output <PATH>   PNG file to write (overrides [output] path)");
    println!("    -s, --scale <N>       Upscale factor (overrides [output] scale)");
    println!("        --init-config     Write a config template and exit");
    println!();
    println!("CONFIG:");
    println!("    $TFTCANVAS_CONFIG, ~/.config/tftcanvas/config.toml, /etc/tftcanvas/config.toml");
}

/// Value of `--flag=value` or `--flag value`
fn flag_value<'a>(args: &'a [String], names: &[&str]) -> Option<&'a str> {
    for (i, arg) in args.iter().enumerate() {
        for name in names {
            if arg == name {
                return args.get(i + 1).map(String::as_str);
            }
            if let Some(value) = arg.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')) {
                return Some(value);
            }
        }
    }
    None
}

/// Demo panel: title bar, two register boxes, a character grid footer
fn draw_demo<D: Display>(canvas: &mut Canvas<'_, D>, cfg: &Config) -> Result<()> {
    let fg = cfg.appearance.foreground_color();
    let bg = cfg.appearance.background_color();
    let accent = cfg.appearance.accent_color();
    let width = canvas.display().width();
    let height = canvas.display().height();
    let glyph_h = canvas.font().glyph_height() as u16;

    canvas.set_foreground(fg);
    canvas.set_background(bg);
    canvas.set_thickness(cfg.appearance.thickness);
    canvas.clear(bg);

    // Title bar
    canvas.fill_rectangle(0, 0, width, glyph_h + 2, accent);
    canvas.set_foreground(bg);
    canvas.set_background(accent);
    canvas.draw_text(0, 1, width, Align::Center, "TFTCANVAS")?;
    canvas.set_foreground(fg);
    canvas.set_background(bg);

    // Two boxes side by side
    let top = glyph_h + 8;
    let box_w = (width / 2).saturating_sub(8);
    let box_h = (glyph_h * 4).min(height.saturating_sub(top + glyph_h + 8));
    let labels = [("ACC", "12"), ("BAK", "-7")];
    for (i, (name, value)) in labels.iter().enumerate() {
        let x = 4 + i as u16 * (width / 2);
        canvas.draw_rectangle(x, top, box_w, box_h);
        let inner_x = x + 3;
        let inner_w = box_w.saturating_sub(5);
        canvas.draw_text(inner_x, top + 3, inner_w, Align::Left, name)?;
        canvas.draw_text(inner_x, top + 3 + glyph_h, inner_w, Align::Right, value)?;
    }

    // Footer on the last text row
    let rows = canvas.rows();
    let columns = canvas.columns();
    if rows > 0 {
        for (col, ch) in "0123456789".chars().enumerate().take(columns as usize) {
            canvas.draw_char_cell(col as u16, rows - 1, ch)?;
        }
    }

    debug!("Demo panel drawn on {}x{} display", width, height);
    Ok(())
}

/// Save display contents as RGBA PNG
fn save_png(display: &FrameBufferDisplay, scale: u32, path: &Path) -> Result<()> {
    let width = display.width() as u32 * scale;
    let height = display.height() as u32 * scale;
    let pixels = display.to_rgba8(scale);

    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;

    info!("PNG saved: {} ({}x{})", path.display(), width, height);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    // --help
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // --version
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("tftcanvas {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.iter().any(|a| a == "--init-config") {
        let path = Config::write_default_config()?;
        println!("Config file generated: {}", path.display());
        return Ok(());
    }

    let mut cfg = Config::load();
    if let Some(path) = flag_value(&args, &["--output", "-o"]) {
        cfg.output.path = path.to_string();
    }
    if let Some(scale) = flag_value(&args, &["--scale", "-s"]) {
        cfg.output.scale = scale
            .parse()
            .with_context(|| format!("Invalid scale: {}", scale))?;
    }
    if cfg.display.width == 0 || cfg.display.height == 0 {
        bail!(
            "Display size must be non-zero (got {}x{})",
            cfg.display.width,
            cfg.display.height
        );
    }
    if let Some(path) = config::default_config_path() {
        debug!("User config path: {}", path.display());
    }

    let mut display = FrameBufferDisplay::new(cfg.display.width, cfg.display.height);
    {
        let mut canvas = Canvas::new(&mut display, &MONO_6X8);
        draw_demo(&mut canvas, &cfg)?;
    }

    let output = PathBuf::from(&cfg.output.path);
    save_png(&display, cfg.output.effective_scale(), &output)?;
    println!("{}", output.display());
    Ok(())
}
