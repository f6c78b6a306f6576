#[macro_use]
extern crate clap;

use byteorder::{LittleEndian, WriteBytesExt};
use clap::Arg;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process;
use vcpu::constants::MEMORY_SIZE;

#[derive(Debug)]
enum IOErrorContext {
    ReadInput,
    WriteOutput,
}

#[derive(Debug)]
enum Error {
    Assemble(vasm::AssembleError),
    Io(std::io::Error, IOErrorContext, PathBuf),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err, context, path) => write!(
                f,
                "{} file \"{}\" failed: {}",
                match context {
                    IOErrorContext::ReadInput => "reading input",
                    IOErrorContext::WriteOutput => "writing output",
                },
                path.display(),
                err
            ),
            Error::Assemble(err) => write!(f, "assembly failed: {}", err),
        }
    }
}

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INFILE")
                .help("Assembly source file to read")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("OUTFILE")
                .required(true)
                .help("ROM image file to write"),
        )
        .get_matches();

    let infile = matches.value_of("INFILE").unwrap();
    let outfile = matches.value_of("output").unwrap();

    if let Err(err) = assembler(infile, outfile) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn assembler(infile: &str, outfile: &str) -> Result<(), Error> {
    let input_path = Path::new(infile);
    let input_file = File::open(input_path)
        .map_err(|err| Error::Io(err, IOErrorContext::ReadInput, input_path.to_owned()))?;
    let mut reader = BufReader::new(input_file);
    let mut source = String::new();
    reader
        .read_to_string(&mut source)
        .map_err(|err| Error::Io(err, IOErrorContext::ReadInput, input_path.to_owned()))?;

    let image = vasm::assemble(&source).map_err(Error::Assemble)?;

    let output_path = PathBuf::from(outfile);
    write_rom(&image, &output_path)
        .map_err(|err| Error::Io(err, IOErrorContext::WriteOutput, output_path))?;

    Ok(())
}

/// Writes `image` as a raw little-endian word stream, zero-padded to
/// exactly [`MEMORY_SIZE`] words.
fn write_rom(image: &[vcpu::Word], path: &Path) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for i in 0..MEMORY_SIZE {
        let word = image.get(i).copied().unwrap_or(0);
        writer.write_u32::<LittleEndian>(word)?;
    }
    Ok(())
}
