//! Integration tests for summaries, JSON, and VTK output

use ngatools_data::vtk::{volume_to_vtk, write_vtk, VolumeToVtk, VtkFormat};
use ngatools_data::{read_restart, read_volume, write_json, write_summary, Grid, Restart, Volume};
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
fn restart() -> Restart {
    read_restart("./data/restart_example.bin", true).unwrap()
}

#[fixture]
fn volume() -> Volume {
    read_volume("./data/volume_example.bin", true).unwrap()
}

#[fixture]
fn scratch() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[rstest]
fn json_excludes_field_data(restart: Restart, scratch: TempDir) {
    let path = scratch.path().join("restart.json");
    write_json(&restart, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["header"]["nx"], 4);
    assert_eq!(value["header"]["nvar"], 3);
    assert_eq!(value["names"], serde_json::json!(["U", "V", "RHO"]));
    assert!(value.get("data").is_none());
}

#[rstest]
fn json_includes_grid(volume: Volume, scratch: TempDir) {
    let path = scratch.path().join("volume.json");
    write_json(&volume, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["grid"]["z"], serde_json::json!([0.0, 0.5, 1.0]));
    assert_eq!(value["header"]["ntime"], 7);
    assert_eq!(value["time"], 3.5);
    assert!(value.get("data").is_none());
}

#[rstest]
fn volume_summary(volume: Volume, scratch: TempDir) {
    let path = scratch.path().join("summary.txt");
    write_summary(&volume, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("nx=5, ny=4, nz=3"));
    assert!(text.contains("ymin, ymax:    -1.00000e+00, 1.00000e+00"));
    assert!(text.contains("Data file at time: 3.50000e+00"));
    assert!(text.contains("Number of vars:    2"));
    assert!(text.contains("\"ZMIX\" \"T\""));
}

#[rstest]
fn restart_summary_has_no_bounds(scratch: TempDir) {
    let restart = read_restart("./data/restart_example.bin", false).unwrap();
    let path = scratch.path().join("summary.txt");
    write_summary(&restart, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("Timestep size:     2.50000e-04"));
    assert!(text.contains("Field data read:   false"));
    assert!(!text.contains("xmin"));
}

#[rstest]
#[case::xml("volume.vtr", VtkFormat::Xml)]
#[case::ascii("volume.vtk", VtkFormat::LegacyAscii)]
#[case::binary("volume.vtk", VtkFormat::LegacyBinary)]
fn vtk_output(volume: Volume, scratch: TempDir, #[case] name: &str, #[case] format: VtkFormat) {
    let path = scratch.path().join(name);
    let vtk = VolumeToVtk::new().convert(&volume).unwrap();
    write_vtk(vtk, &path, format).unwrap();

    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[rstest]
fn restart_vtk_on_uniform_grid(restart: Restart, scratch: TempDir) {
    let path = scratch.path().join("restart.vtk");
    let vtk = VolumeToVtk::new()
        .convert_restart(&restart, &Grid::uniform(4, 3, 2))
        .unwrap();
    write_vtk(vtk, &path, VtkFormat::LegacyAscii).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("RECTILINEAR_GRID"));
    assert!(text.contains("RHO"));
}

#[rstest]
fn default_conversion_shorthand(volume: Volume, scratch: TempDir) {
    let shorthand = volume_to_vtk(&volume).unwrap();
    let configured = VolumeToVtk::default().convert(&volume).unwrap();
    assert_eq!(shorthand, configured);

    let path = scratch.path().join("shorthand.vtk");
    write_vtk(shorthand, &path, VtkFormat::LegacyAscii).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("ZMIX"));
}
