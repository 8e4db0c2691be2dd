//! Convert a black/white 32x32 PNG into a bitmap header.
//!
//! cargo run --bin png-to-header ./qr_32x32.png ./qr_32x32.h
//!
use fw_assets::{cli, emit_bitmap_32, load_bitmap_32, pack, Error};
use std::{env, ffi::OsString, path::Path, process};

const USAGE: &str = "Usage: png-to-header <in.png> <out.h>";

fn main() {
    cli::init_logger();

    let args: Vec<OsString> = env::args_os().collect();
    match run(&args) {
        Ok(()) => (),
        Err(err) => process::exit(cli::report(&err)),
    }
}

fn run(args: &[OsString]) -> Result<(), Error> {
    let (input, out) = cli::two_positional(args, USAGE)?;
    let out_path = Path::new(&out);

    let grid = load_bitmap_32(Path::new(&input))?;
    let packed = pack(&grid)?;
    emit_bitmap_32(out_path, packed.bytes(), &input.to_string_lossy())?;

    println!("Wrote {} ({} bytes)", out_path.display(), packed.bytes().len());
    Ok(())
}
