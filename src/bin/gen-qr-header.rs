//! Generate a QR module matrix header.
//!
//! cargo run --bin gen-qr-header "http://example.com" ./qr_matrix.h
//!
use fw_assets::{cli, emit, module_grid, pack, Error, HeaderLayout, DEFAULT_EC_LEVEL};
use std::{env, ffi::OsString, path::Path, process};

const USAGE: &str = "Usage: gen-qr-header <text-or-url> <out.h>";

fn main() {
    cli::init_logger();

    let args: Vec<OsString> = env::args_os().collect();
    match run(&args) {
        Ok(()) => (),
        Err(err) => process::exit(cli::report(&err)),
    }
}

fn run(args: &[OsString]) -> Result<(), Error> {
    let (content, out) = cli::two_positional(args, USAGE)?;
    let content = cli::utf8_argument(content)?;
    let out_path = Path::new(&out);

    let grid = module_grid(&content, DEFAULT_EC_LEVEL)?;
    let packed = pack(&grid)?;
    emit(
        out_path,
        &HeaderLayout::qr_modules(),
        packed.modules(),
        packed.bytes(),
        &content,
    )?;

    println!(
        "Wrote {} ({} bytes) modules={} for: {}",
        out_path.display(),
        packed.bytes().len(),
        packed.modules(),
        content
    );
    Ok(())
}
