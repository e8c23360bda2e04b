use std::{env, fs, process};

use thermal_raster::{Argb, Bitmap, Config};

fn print_usage() {
    println!("Usage: cargo run --example render_image <INPUT> <OUTPUT> [--dither]");
    println!("\nWrites one raster payload per 24 row band, concatenated.");
}

fn main() {
    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{}:{}] {} - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.level(),
                record.args()
            )
        })
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }
    let dither = args.iter().skip(3).any(|a| a == "--dither");

    let img = match image::open(&args[1]) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            eprintln!("Error: can't open '{}': {}", args[1], e);
            process::exit(1);
        }
    };

    let pixels = img
        .pixels()
        .map(|p| Argb::new(p[3], p[0], p[1], p[2]))
        .collect();
    let bitmap = match Bitmap::new(img.width(), img.height(), pixels) {
        Ok(bitmap) => bitmap,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let config = Config::new().dither(dither);
    let payloads = match config.render_bands(&bitmap) {
        Ok(payloads) => payloads,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let bytes: Vec<u8> = payloads.concat();
    if let Err(e) = fs::write(&args[2], &bytes) {
        eprintln!("Error: can't write '{}': {}", args[2], e);
        process::exit(1);
    }
    println!(
        "Wrote {} bands ({} bytes) to {}",
        payloads.len(),
        bytes.len(),
        args[2]
    );
}
