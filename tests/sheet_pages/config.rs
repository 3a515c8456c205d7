//! Configuration driven loading

use sheetview_rs::prelude::*;

use crate::{group_dir, write_sheet};

#[test]
fn test_config_file_loads_every_group() {
	let root = tempfile::tempdir().unwrap();
	write_sheet(&group_dir(root.path(), "bob"), "idle.png", 2, 32, 32);
	write_sheet(&group_dir(root.path(), "boss"), "slam.png", 2, 64, 64);

	let config_path = root.path().join("viewer.toml");
	let text = format!(
		r#"
root = "{}"
cell_size = 32
max_rows_per_page = 12

[[groups]]
folder = "bob"

[[groups]]
folder = "boss"
frame_cells = [2, 2]
"#,
		root.path().display().to_string().replace('\\', "/")
	);
	std::fs::write(&config_path, text).unwrap();

	let config = ViewerConfig::from_file(&config_path).unwrap();
	let table = config.load_table().unwrap();

	assert_eq!(table.group_count(), 2);
	assert_eq!(table.action("boss", "slam").map(FrameSequence::frame_width), Some(64));

	let pages = config.layout().unwrap().layout(&table, &BitmapFont::default(), &LineGrid, config.area());
	assert_eq!((pages.width(), pages.height()), (160, 64));
}

#[test]
fn test_config_with_missing_root_fails_on_load() {
	let config = ViewerConfig::from_toml_str("root = \"/no/such/place\"\ncell_size = 8\n").unwrap();
	let err = config.load_table().unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Configuration);
}
