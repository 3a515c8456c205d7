//! Sheet folder loading

use sheetview_rs::prelude::*;

use crate::{group_dir, write_sheet};

#[test_log::test]
fn test_idle_and_run_scenario() {
	let root = tempfile::tempdir().unwrap();
	let bob = group_dir(root.path(), "bob");
	write_sheet(&bob, "idle.png", 2, 32, 32);
	write_sheet(&bob, "run.png", 3, 32, 32);

	let loader = SheetLoader::new(root.path(), 32, ColorKey::new(255, 0, 255)).unwrap();
	let mut table = AnimationTable::new();
	let actions = loader.prepare(&mut table, "bob", FrameSize::unit()).unwrap();

	assert_eq!(actions.len(), 2);
	assert_eq!(actions["idle"].len(), 2);
	assert_eq!(actions["run"].len(), 3);
	assert_eq!(table.group_count(), 1);

	for frame in table.action("bob", "run").unwrap() {
		assert_eq!(frame.dimensions(), (32, 32));
	}
	let run = table.action("bob", "run").unwrap();
	assert_eq!(run.get(2).unwrap().get_pixel(0, 0)[0], 2);

	let layout = PageLayout::new(32, 12).unwrap();
	assert_eq!(layout.page_size(&table), (128, 64));
	let pages = layout.layout(&table, &BitmapFont::default(), &LineGrid, (1280, 720));
	assert_eq!(pages.len(), 1);
	assert_eq!((pages.width(), pages.height()), (128, 64));
}

#[test_log::test]
fn test_decode_failure_skips_file() {
	let root = tempfile::tempdir().unwrap();
	let bob = group_dir(root.path(), "bob");
	std::fs::write(bob.join("a_broken.png"), b"definitely not a png").unwrap();
	std::fs::write(bob.join("notes.txt"), b"todo").unwrap();
	write_sheet(&bob, "walk.png", 4, 16, 16);

	let loader = SheetLoader::new(root.path(), 16, ColorKey::default()).unwrap();
	let mut table = AnimationTable::new();
	let actions = loader.prepare(&mut table, "bob", FrameSize::unit()).unwrap();

	assert_eq!(actions.len(), 1);
	assert_eq!(actions["walk"].len(), 4);
}

#[test_log::test]
fn test_height_mismatch_aborts_folder() {
	let root = tempfile::tempdir().unwrap();
	let bob = group_dir(root.path(), "bob");
	write_sheet(&bob, "a_idle.png", 2, 32, 32);
	write_sheet(&bob, "b_tall.png", 2, 32, 48);

	let loader = SheetLoader::new(root.path(), 32, ColorKey::default()).unwrap();
	let mut table = AnimationTable::new();
	let err = loader.prepare(&mut table, "bob", FrameSize::unit()).unwrap_err();

	assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
	assert!(matches!(err, SheetError::HeightMismatch { .. }));
	assert!(table.group("bob").is_none());
}

#[test]
fn test_width_not_divisible_aborts_folder() {
	let root = tempfile::tempdir().unwrap();
	let bob = group_dir(root.path(), "bob");
	image::RgbaImage::new(100, 32).save(bob.join("run.png")).unwrap();

	let loader = SheetLoader::new(root.path(), 32, ColorKey::default()).unwrap();
	let mut table = AnimationTable::new();
	let err = loader.prepare(&mut table, "bob", FrameSize::unit()).unwrap_err();

	assert!(matches!(
		err,
		SheetError::WidthNotDivisible {
			expected: 32,
			actual: 100,
			..
		}
	));
}

#[test]
fn test_frame_size_scales_by_cell_size() {
	let root = tempfile::tempdir().unwrap();
	let boss = group_dir(root.path(), "boss");
	write_sheet(&boss, "slam.png", 3, 32, 48);

	let loader = SheetLoader::new(root.path(), 16, ColorKey::default()).unwrap();
	let mut table = AnimationTable::new();
	let actions = loader.prepare(&mut table, "boss", FrameSize::new(2, 3).unwrap()).unwrap();

	let slam = &actions["slam"];
	assert_eq!(slam.len(), 3);
	assert_eq!((slam.frame_width(), slam.frame_height()), (32, 48));
}

#[test]
fn test_repeated_prepare_accumulates_groups() {
	let root = tempfile::tempdir().unwrap();
	let bob = group_dir(root.path(), "bob");
	let amy = group_dir(root.path(), "amy");
	write_sheet(&bob, "idle.png", 2, 8, 8);
	write_sheet(&amy, "jump.png", 5, 8, 8);

	let loader = SheetLoader::new(root.path(), 8, ColorKey::default()).unwrap();
	let mut table = AnimationTable::new();
	loader.prepare(&mut table, "bob", FrameSize::unit()).unwrap();
	loader.prepare(&mut table, "amy", FrameSize::unit()).unwrap();

	write_sheet(&bob, "run.png", 1, 8, 8);
	loader.prepare(&mut table, "bob", FrameSize::unit()).unwrap();

	let groups: Vec<_> = table.iter().map(|(name, _)| name.as_str()).collect();
	assert_eq!(groups, vec!["bob", "amy"]);
	assert_eq!(table.row_count(), 3);
	assert_eq!(table.action("bob", "run").map(FrameSequence::len), Some(1));
}

#[test]
fn test_duplicate_action_name_last_file_wins() {
	let root = tempfile::tempdir().unwrap();
	let bob = group_dir(root.path(), "bob");
	write_sheet(&bob, "run.old.png", 1, 8, 8);
	write_sheet(&bob, "run.png", 3, 8, 8);

	let loader = SheetLoader::new(root.path(), 8, ColorKey::default()).unwrap();
	let actions = loader.load_folder("bob", FrameSize::unit()).unwrap();

	assert_eq!(actions.len(), 1);
	assert_eq!(actions["run"].len(), 3);
}

#[test]
fn test_missing_group_folder_is_io_error() {
	let root = tempfile::tempdir().unwrap();
	let loader = SheetLoader::new(root.path(), 8, ColorKey::default()).unwrap();
	let err = loader.load_folder("nobody", FrameSize::unit()).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Io);
}

