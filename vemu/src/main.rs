#[macro_use]
extern crate clap;

use byteorder::{LittleEndian, ReadBytesExt};
use clap::Arg;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;
use vcpu::constants::MEMORY_SIZE;
use vcpu::{run, Memory, RegisterFile, RegisterId};

#[derive(Debug)]
enum Error {
    Io(std::io::Error, PathBuf),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err, path) => {
                write!(f, "loading ROM \"{}\" failed: {}", path.display(), err)
            }
        }
    }
}

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("ROMFILE")
                .help("ROM image file to load and run")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .help("Print the final register snapshot to stderr after halting"),
        )
        .get_matches();

    let romfile = matches.value_of("ROMFILE").unwrap();
    let verbose = matches.is_present("verbose");

    if let Err(err) = emulator(romfile, verbose) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn emulator(romfile: &str, verbose: bool) -> Result<(), Error> {
    let rom_path = Path::new(romfile);
    let image = read_rom(rom_path).map_err(|err| Error::Io(err, rom_path.to_owned()))?;

    let mut memory = Memory::from(image.as_slice());
    let mut registers = RegisterFile::new();

    run(&mut memory, &mut registers);

    if verbose {
        eprintln!("{}", registers);
        eprintln!("halted at IP={}", registers.get(RegisterId::Ip));
    }

    Ok(())
}

/// Reads a ROM file: exactly [`MEMORY_SIZE`] little-endian 32-bit words.
/// A short read is an I/O error; the missing words are not zero-filled,
/// since a ROM on disk is expected to already be the full image.
fn read_rom(path: &Path) -> std::io::Result<Vec<i32>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut words = Vec::with_capacity(MEMORY_SIZE);
    for _ in 0..MEMORY_SIZE {
        words.push(reader.read_u32::<LittleEndian>()? as i32);
    }
    Ok(words)
}
