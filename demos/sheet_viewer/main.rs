//! Spritesheet Viewer CLI
//!
//! A headless host for the paginated spritesheet view.
//!
//! # Features
//!
//! - **export**: Render every page to PNG files
//! - **browse**: Flip through pages interactively, writing the displayed window to a PNG
//! - **info**: Summarize the loaded animation table
//!
//! # Configuration
//!
//! All commands read a TOML file describing the sheet folders:
//!
//! ```toml
//! root = "assets/sprites"
//! cell_size = 32
//! color_key = [255, 255, 255]
//! max_rows_per_page = 12
//!
//! [window]
//! width = 1280
//! height = 720
//!
//! [[groups]]
//! folder = "bob"
//! frame_cells = [1, 1]
//! ```
//!
//! Scalar values can be overridden with `SHEETVIEW_*` environment variables.
//!
//! # Usage
//!
//! ```bash
//! # Write page_000.png, page_001.png, ... to pages/
//! cargo run --example sheet_viewer -- export viewer.toml -o pages/
//!
//! # Browse pages, the current window is written to window.png
//! cargo run --example sheet_viewer -- browse viewer.toml
//!
//! # Show the table as JSON
//! cargo run --example sheet_viewer -- info viewer.toml --json
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use image::RgbaImage;
use inquire::Select;
use log::info;
use serde::Serialize;
use sheetview_rs::prelude::*;

#[derive(Parser)]
#[command(name = "sheet_viewer")]
#[command(author = "sheetview-rs project")]
#[command(version = "1.0")]
#[command(about = "Spritesheet viewer - slice sheets and page through their frames", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Render every page to PNG files
	Export {
		/// Viewer configuration file
		#[arg(value_name = "CONFIG")]
		config: PathBuf,

		/// Output directory
		#[arg(short, long, value_name = "OUTPUT_DIR", default_value = "pages")]
		output: PathBuf,

		/// Override rows per page
		#[arg(short, long, value_name = "ROWS")]
		max_rows: Option<usize>,
	},

	/// Flip through pages interactively
	Browse {
		/// Viewer configuration file
		#[arg(value_name = "CONFIG")]
		config: PathBuf,

		/// File the displayed window is written to after every step
		#[arg(short, long, value_name = "OUTPUT", default_value = "window.png")]
		output: PathBuf,

		/// Override rows per page
		#[arg(short, long, value_name = "ROWS")]
		max_rows: Option<usize>,
	},

	/// Summarize the loaded animation table
	Info {
		/// Viewer configuration file
		#[arg(value_name = "CONFIG")]
		config: PathBuf,

		/// Print JSON instead of text
		#[arg(short, long)]
		json: bool,
	},
}

/// Table summary for JSON output
#[derive(Debug, Serialize)]
struct TableSummary {
	groups: Vec<GroupSummary>,
	rows: usize,
	pages: usize,
	page_width: u32,
	page_height: u32,
}

#[derive(Debug, Serialize)]
struct GroupSummary {
	name: String,
	actions: Vec<ActionSummary>,
}

#[derive(Debug, Serialize)]
struct ActionSummary {
	name: String,
	frames: usize,
	frame_width: u32,
	frame_height: u32,
}

/// Loads the configuration, applying the rows-per-page override
fn load_config(path: &PathBuf, max_rows: Option<usize>) -> anyhow::Result<ViewerConfig> {
	let mut config = ViewerConfig::from_file(path)
		.with_context(|| format!("Cannot read configuration {}", path.display()))?;
	if let Some(rows) = max_rows {
		config.max_rows_per_page = rows;
	}
	Ok(config)
}

fn handle_export(config: PathBuf, output: PathBuf, max_rows: Option<usize>) -> anyhow::Result<()> {
	let config = load_config(&config, max_rows)?;
	let table = config.load_table()?;
	let pages = config.layout()?.layout(&table, &BitmapFont::default(), &LineGrid, config.area());

	fs::create_dir_all(&output)?;
	for (index, page) in pages.pages().iter().enumerate() {
		let path = output.join(format!("page_{index:03}.png"));
		page.save(&path).with_context(|| format!("Cannot write {}", path.display()))?;
	}

	info!(
		"Exported {} pages of {}x{} to {}",
		pages.len(),
		pages.width(),
		pages.height(),
		output.display()
	);
	Ok(())
}

fn handle_browse(config: PathBuf, output: PathBuf, max_rows: Option<usize>) -> anyhow::Result<()> {
	const NEXT: &str = "Next page";
	const PREVIOUS: &str = "Previous page";
	const QUIT: &str = "Quit";

	let config = load_config(&config, max_rows)?;
	let table = config.load_table()?;
	let (win_w, win_h) = config.area();

	let mut registry = ScreenRegistry::new();
	registry.register(Box::new(SheetViewer::new(table, config.layout()?)));
	let screen = registry
		.get_mut(VIEWER_SCREEN_NAME)
		.context("Spritesheet viewer is not registered")?;

	let mut window = RgbaImage::new(win_w, win_h);
	screen.initialize(window.size());

	loop {
		screen.update(0.0);
		screen.render(&mut window);
		window.save(&output).with_context(|| format!("Cannot write {}", output.display()))?;

		let choice = Select::new("Navigate:", vec![NEXT, PREVIOUS, QUIT]).prompt()?;
		let event = match choice {
			NEXT => InputEvent::Key(Key::Right),
			PREVIOUS => InputEvent::Key(Key::Left),
			_ => break,
		};
		screen.handle_input(event);
	}

	Ok(())
}

fn handle_info(config: PathBuf, json: bool) -> anyhow::Result<()> {
	let config = load_config(&config, None)?;
	let table = config.load_table()?;
	let layout = config.layout()?;
	let (page_width, page_height) = layout.page_size(&table);

	let summary = TableSummary {
		groups: table
			.iter()
			.map(|(name, actions)| GroupSummary {
				name: name.clone(),
				actions: actions
					.iter()
					.map(|(action, frames)| ActionSummary {
						name: action.clone(),
						frames: frames.len(),
						frame_width: frames.frame_width(),
						frame_height: frames.frame_height(),
					})
					.collect(),
			})
			.collect(),
		rows: table.row_count(),
		pages: layout.page_count(table.row_count()),
		page_width,
		page_height,
	};

	if json {
		println!("{}", serde_json::to_string_pretty(&summary)?);
		return Ok(());
	}

	println!("Root: {}", config.root.display());
	println!("Rows: {} on {} pages of {}x{}", summary.rows, summary.pages, page_width, page_height);
	for group in &summary.groups {
		println!("[{}]", group.name);
		for action in &group.actions {
			println!(
				"  {:<16} {:>3} frames of {}x{}",
				action.name, action.frames, action.frame_width, action.frame_height
			);
		}
	}

	Ok(())
}

fn main() -> anyhow::Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();

	match cli.command {
		Commands::Export {
			config,
			output,
			max_rows,
		} => handle_export(config, output, max_rows),

		Commands::Browse {
			config,
			output,
			max_rows,
		} => handle_browse(config, output, max_rows),

		Commands::Info {
			config,
			json,
		} => handle_info(config, json),
	}
}
