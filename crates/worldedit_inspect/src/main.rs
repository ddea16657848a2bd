#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use std::path::PathBuf;

use clap::Parser;
use flexi_logger::Logger;
use worldedit_engine::{FrameImportance, HeaderConvention, LiquidKind, Position, SectionFormat, SectionHeader};

/// Number of tile types of the stock world.
const DEFAULT_TILE_TYPES: usize = 470;

#[derive(Parser, Debug)]
#[command(version, about = "Inspect clipboard, undo/redo and region section files", long_about = None)]
pub struct Args {
    /// Section file to inspect
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Read the header with the clipboard convention
    #[clap(long, default_value_t = false)]
    clipboard: bool,

    /// Tile type ids that carry frame coordinates
    #[clap(long, value_name = "IDS", value_delimiter = ',')]
    frame_important: Vec<u16>,

    /// Size of the tile type table
    #[clap(long, value_name = "COUNT", default_value_t = DEFAULT_TILE_TYPES)]
    tile_types: usize,

    /// Decode every tile and print statistics
    #[clap(long, default_value_t = false)]
    tiles: bool,

    /// Print the container trailer
    #[clap(long, default_value_t = false)]
    containers: bool,
}

#[derive(Default)]
struct TileStats {
    total: usize,
    active: usize,
    framed: usize,
    walls: usize,
    water: usize,
    lava: usize,
    honey: usize,
}

fn print_header(header: &SectionHeader) {
    match header {
        SectionHeader::Region(h) => {
            println!("origin:      {}", Position::new(h.origin_x, h.origin_y));
            println!("size:        {}x{}", h.width, h.height);
        }
        SectionHeader::Clipboard(h) => {
            println!("reserved:    {} {}", h.reserved_a, h.reserved_b);
            println!("stored size: {}x{}", h.stored_width, h.stored_height);
            println!("span:        {}", header.size());
        }
    }
    println!("cells:       {}", header.cell_count());
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logger = Logger::try_with_env_or_str("warn")?.log_to_stderr().start()?;

    let frames = FrameImportance::from_ids(args.tile_types, args.frame_important.iter().copied());
    let format = SectionFormat::new(frames);
    let convention = if args.clipboard { HeaderConvention::Clipboard } else { HeaderConvention::Region };

    let mut reader = format.read_section(&args.path, convention)?;
    let header = reader.header();
    println!("{}", args.path.display());
    print_header(&header);

    if !args.tiles && !args.containers {
        return Ok(());
    }

    let mut stats = TileStats::default();
    for tile in reader.by_ref() {
        let tile = tile?;
        stats.total += 1;
        if tile.is_active() {
            stats.active += 1;
            if tile.has_frame(format.frames()) {
                stats.framed += 1;
            }
        }
        if tile.wall > 0 {
            stats.walls += 1;
        }
        if tile.liquid > 0 {
            match tile.liquid_kind() {
                LiquidKind::Water => stats.water += 1,
                LiquidKind::Lava => stats.lava += 1,
                LiquidKind::Honey => stats.honey += 1,
            }
        }
    }
    log::debug!("decoded {} tiles", stats.total);

    if args.tiles {
        println!("tiles:       {} ({} active, {} framed)", stats.total, stats.active, stats.framed);
        println!("walls:       {}", stats.walls);
        println!("liquids:     {} water, {} lava, {} honey", stats.water, stats.lava, stats.honey);
    }

    if args.containers {
        let containers = reader.read_containers(header.origin())?;
        println!("containers:  {}", containers.len());
        for container in &containers {
            let used = container.items.iter().filter(|item| !item.is_empty()).count();
            println!("  {} '{}' {} slots used", container.position, container.name, used);
        }
    }
    Ok(())
}
