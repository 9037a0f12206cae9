use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use item_thumb::{ItemLayout, ItemParams};

#[derive(Parser, Debug)]
#[command(name = "item-thumb", version)]
struct Cli {
    /// Log pipeline stages to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an item thumbnail as a PNG.
    Render(RenderArgs),
    /// Print the item geometry as JSON without decoding pixels.
    Layout(LayoutArgs),
}

#[derive(Args, Debug)]
struct ItemArgs {
    /// Edge length of the square output, in pixels.
    #[arg(long, default_value_t = item_thumb::DEFAULT_TARGET_SIZE)]
    size: u32,

    /// Corner radius of the fitted image, in pixels.
    #[arg(long, default_value_t = item_thumb::DEFAULT_CORNER_RADIUS)]
    radius: u32,
}

impl ItemArgs {
    fn params(&self) -> ItemParams {
        ItemParams {
            target_size: self.size,
            corner_radius: self.radius,
        }
    }
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input image (PNG, JPEG, GIF or WebP).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    item: ItemArgs,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input image (PNG, JPEG, GIF or WebP).
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    item: ItemArgs,
}

#[derive(serde::Serialize)]
struct LayoutReport {
    params: ItemParams,
    layout: ItemLayout,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let params = args.item.params();
    let item = item_thumb::create_item(&args.in_path, params.target_size, params.corner_radius)
        .with_context(|| format!("build item from '{}'", args.in_path.display()))?;

    item_thumb::ensure_parent_dir(&args.out)?;
    item_thumb::save_png(&item, &args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let bytes = item_thumb::read_image_file(&args.in_path)?;
    let source = item_thumb::header_size(&bytes)
        .with_context(|| format!("read header of '{}'", args.in_path.display()))?;

    let params = args.item.params();
    let report = LayoutReport {
        params,
        layout: ItemLayout::compute(source, params.target_size),
    };
    let stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(stdout, &report).context("write layout JSON")?;
    println!();
    Ok(())
}
