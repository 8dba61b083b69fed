//! Raster3D console demo
//!
//! Renders a spinning cube with the software rasterizer and prints every
//! presented frame to the terminal, one character per pixel.

use std::f32::consts::FRAC_PI_2;
use std::io::{self, Write};
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::Duration;

use clap::{value_t, App, Arg};
use colored::Colorize;
use raster_3d_engine::raster3d::math::{Matrix4, Vector3};
use raster_3d_engine::raster3d::render::{Device, DeviceDesc, RenderModes};
use raster_3d_engine::raster3d::resource::{Color, VertexBuffer};
use raster_3d_engine::raster3d::shader::DefaultShader;
use raster_3d_engine::raster3d::{Error, Result};
use raster_3d_engine::raster_info;

const ROTATION_STEP: f32 = 0.05;
const FRAME_TIME: Duration = Duration::from_millis(33);

#[rustfmt::skip]
const CUBE_POSITIONS: [f32; 24] = [
    -1.0, 1.0, 1.0,   // left upper front
    -1.0, 1.0, -1.0,  // left upper back
    1.0, 1.0, 1.0,    // right upper front
    1.0, 1.0, -1.0,   // right upper back
    -1.0, -1.0, 1.0,  // left lower front
    -1.0, -1.0, -1.0, // left lower back
    1.0, -1.0, 1.0,   // right lower front
    1.0, -1.0, -1.0,  // right lower back
];

#[rustfmt::skip]
const CUBE_INDICES: [u32; 36] = [
    0, 2, 4, 2, 4, 6,
    1, 3, 5, 3, 5, 7,
    0, 1, 4, 1, 4, 5,
    2, 3, 6, 3, 6, 7,
    0, 1, 2, 1, 2, 3,
    4, 5, 6, 5, 6, 7,
];

struct Options {
    columns: u32,
    rows: u32,
    frames: u32,
    solid: bool,
}

fn parse_options() -> Options {
    let matches = App::new("Raster3D console demo")
        .version("0.1.0")
        .about("Spinning cube rendered by the software rasterizer")
        .arg(Arg::with_name("columns")
            .long("columns")
            .takes_value(true)
            .default_value("80")
            .help("Frame width in characters"))
        .arg(Arg::with_name("rows")
            .long("rows")
            .takes_value(true)
            .default_value("40")
            .help("Frame height in characters"))
        .arg(Arg::with_name("frames")
            .long("frames")
            .takes_value(true)
            .default_value("0")
            .help("Number of frames to render, 0 to run until interrupted"))
        .arg(Arg::with_name("solid")
            .long("solid")
            .help("Fill faces in addition to the wireframe"))
        .get_matches();

    Options {
        columns: value_t!(matches, "columns", u32).unwrap_or_else(|e| e.exit()),
        rows: value_t!(matches, "rows", u32).unwrap_or_else(|e| e.exit()),
        frames: value_t!(matches, "frames", u32).unwrap_or_else(|e| e.exit()),
        solid: matches.is_present("solid"),
    }
}

/// One line per pixel row; untouched (transparent) pixels are blank
fn frame_to_text(pixels: &[u8], columns: u32) -> String {
    let mut text = String::with_capacity(pixels.len() * 4);
    for row in pixels.chunks_exact(columns as usize * 4) {
        for px in row.chunks_exact(4) {
            if px[3] > 0 {
                text.push_str(&"#".truecolor(px[0], px[1], px[2]).to_string());
            } else {
                text.push(' ');
            }
        }
        text.push('\n');
    }
    text
}

fn run(options: &Options) -> Result<()> {
    let modes = if options.solid {
        RenderModes::SOLID | RenderModes::WIREFRAME
    } else {
        RenderModes::WIREFRAME
    };
    let mut device = Device::from_desc(&DeviceDesc {
        width: options.columns,
        height: options.rows,
        render_modes: modes,
        depth_buffer: false,
        fill_color: Color::rgb(90, 90, 140),
        line_color: Color::GREEN,
        ..DeviceDesc::default()
    })?;

    let mesh = VertexBuffer::with_indices(CUBE_POSITIONS.to_vec(), CUBE_INDICES.to_vec())?;
    let shader = Arc::new(RwLock::new(DefaultShader::default()));
    device.set_shader(shader.clone());

    let view = Matrix4::create_look_at(Vector3::new(3.0, 0.0, 0.0), Vector3::ZERO, Vector3::Y);
    let projection = Matrix4::create_perspective_field_of_view(FRAC_PI_2, 640.0 / 480.0, 0.1, 100.0);

    raster_info!("raster3d::Console", "Rendering {}x{} ({:?})", options.columns, options.rows, modes);

    let stdout = io::stdout();
    let mut rotation = 0.0_f32;
    let mut frame = 0;
    while options.frames == 0 || frame < options.frames {
        rotation += ROTATION_STEP;
        let world = Matrix4::create_rotation_y(rotation);
        shader
            .write()
            .map_err(|_| Error::LockPoisoned("raster3d::Console shader".to_string()))?
            .transformation = world * view * projection;

        device.clear(Color::TRANSPARENT);
        device.draw(&mesh)?;
        let text = frame_to_text(device.present(), options.columns);

        // Cursor home + clear, then the whole frame in one write
        let mut out = stdout.lock();
        let _ = write!(out, "\x1b[H\x1b[2J{}", text);
        let _ = out.flush();

        frame += 1;
        thread::sleep(FRAME_TIME);
    }
    Ok(())
}

fn main() {
    let options = parse_options();
    if let Err(e) = run(&options) {
        eprintln!("raster_3d_console: {}", e);
        std::process::exit(1);
    }
}
