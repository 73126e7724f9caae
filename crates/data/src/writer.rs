//! Write operations for summaries of restart and volume content
//!
//! These are for inspecting the metadata of a file. Binary data files are
//! never written.

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::fields::FieldFile;

// ngatools modules
use ngatools_utils::{f, ValueExt};

// external crates
use serde::Serialize;

/// Write a human readable summary of a [Restart](crate::Restart) or
/// [Volume](crate::Volume)
///
/// Includes the grid size, time values, and variable names. Grid bounds are
/// included for anything that carries grid coordinates. Field data is never
/// written.
///
/// ```no_run
/// # use ngatools_data::{read_volume, write_summary};
/// // Read the example file
/// let volume = read_volume("./data/volume_example.bin", false).unwrap();
///
/// // Write a human readable text file
/// write_summary(&volume, "./volume_summary.txt").unwrap();
/// ```
pub fn write_summary<F: FieldFile, P: AsRef<Path>>(file: &F, path: P) -> Result<()> {
    let mut writer = init_writer(path)?;
    let dimensions = file.dimensions();

    writeln!(
        writer,
        "Grid size:         nx={}, ny={}, nz={}",
        dimensions.nx, dimensions.ny, dimensions.nz
    )?;

    if let Some(grid) = file.grid() {
        writeln!(writer, "    xmin, xmax:    {}", grid.bounds_summary(0))?;
        writeln!(writer, "    ymin, ymax:    {}", grid.bounds_summary(1))?;
        writeln!(writer, "    zmin, zmax:    {}", grid.bounds_summary(2))?;
    }

    writeln!(writer, "Data file at time: {}", file.time().sci(5, 2))?;
    writeln!(writer, "Timestep size:     {}", file.dt().sci(5, 2))?;
    writeln!(writer, "Number of vars:    {}", dimensions.nvar)?;
    writeln!(writer, "Field data read:   {}", file.data().is_some())?;

    // names may be blank, so show them quoted
    let names = file
        .names()
        .iter()
        .map(|name| f!("\"{name}\""))
        .collect::<Vec<String>>()
        .join(" ");

    writeln!(writer, "\nVariables in file:")?;
    writeln!(writer, "{}", textwrap::fill(&names, 80))?;

    Ok(())
}

/// Write file metadata to a JSON file
///
/// Any [Restart](crate::Restart) or [Volume](crate::Volume) may be written
/// to JSON for inspection or for use in other tools.
///
/// This is a direct serialisation of the header, names, time values, and any
/// grid coordinates. Field data is skipped.
///
/// ```no_run
/// # use ngatools_data::{read_restart, write_json};
/// // Read the example file
/// let restart = read_restart("./data/restart_example.bin", false).unwrap();
///
/// // Write the metadata to JSON
/// write_json(&restart, "./restart.json").unwrap();
/// ```
pub fn write_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let writer = init_writer(path)?;
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
