//! Dump the paragraph text of a DOCX document.
//!
//! cargo run --bin extract-docx-text ./requirements.docx ./requirements.txt
//!
use fw_assets::{cli, extract, write_text, Error};
use std::{env, ffi::OsString, path::Path, process};

const USAGE: &str = "Usage: extract-docx-text <in.docx> <out.txt>";

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

    let lines = extract(Path::new(&input))?;
    let written = write_text(out_path, &lines)?;

    println!("extracted_lines={}", lines.len());
    println!("wrote={} bytes={}", out_path.display(), written);
    Ok(())
}
