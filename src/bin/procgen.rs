use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "procgen", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available presets.
    Presets(PresetsArgs),
    /// Render a fresh batch.
    Generate(BatchArgs),
    /// Render the batch reached by mutating a chain of picks.
    Mutate(MutateArgs),
}

#[derive(Args, Debug)]
struct PresetsArgs {
    /// Preset catalog JSON (defaults to the built-in presets).
    #[arg(long)]
    presets: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Preset id.
    #[arg(long)]
    preset: String,

    /// Batch seed (defaults to one mixed from the clock).
    #[arg(long)]
    seed: Option<u32>,

    /// Items per batch.
    #[arg(long, default_value_t = 24)]
    count: usize,

    /// Items per grid row.
    #[arg(long, default_value_t = 6)]
    columns: usize,

    /// Thumbnail size in pixels.
    #[arg(long, default_value_t = 256)]
    size: u32,

    /// Also render the first item at this size as `preview.png`.
    #[arg(long, num_args = 0..=1, default_missing_value = "1024")]
    preview: Option<u32>,

    /// Also write all thumbnails tiled as `sheet.png`.
    #[arg(long)]
    sheet: bool,

    /// Raster worker threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Preset catalog JSON (defaults to the built-in presets).
    #[arg(long)]
    presets: Option<PathBuf>,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct MutateArgs {
    #[command(flatten)]
    batch: BatchArgs,

    /// Index of the item to mutate; repeat to descend further.
    #[arg(long = "pick")]
    picks: Vec<usize>,
}

#[derive(serde::Serialize)]
struct ManifestItem<'a> {
    #[serde(flatten)]
    instance: &'a procgen::Instance,
    file: String,
    sha256: String,
}

#[derive(serde::Serialize)]
struct Manifest<'a> {
    preset: &'a str,
    batch_seed: u32,
    picks: &'a [usize],
    layout: procgen::GridLayout,
    size: u32,
    items: Vec<ManifestItem<'a>>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Presets(args) => cmd_presets(args),
        Command::Generate(args) => cmd_batch(args, &[]),
        Command::Mutate(args) => {
            if args.picks.is_empty() {
                tracing::warn!("no --pick given; rendering the fresh batch");
            }
            cmd_batch(args.batch, &args.picks)
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<procgen::PresetCatalog> {
    match path {
        Some(p) => procgen::PresetCatalog::from_path(p)
            .with_context(|| format!("load presets '{}'", p.display())),
        None => Ok(procgen::PresetCatalog::builtin()?),
    }
}

fn cmd_presets(args: PresetsArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(args.presets.as_deref())?;
    for preset in catalog.iter() {
        println!(
            "{:<20} {:<22} m={}",
            preset.id(),
            preset.name(),
            preset.mutation_strength()
        );
    }
    Ok(())
}

fn cmd_batch(args: BatchArgs, picks: &[usize]) -> anyhow::Result<()> {
    let catalog = load_catalog(args.presets.as_deref())?;
    let preset = catalog.get(&args.preset)?;
    let layout = procgen::GridLayout::new(args.count, args.columns)?;
    let thumb = procgen::Resolution::square(args.size)?;
    let preview = args.preview.map(procgen::Resolution::square).transpose()?;
    let batch_seed = args.seed.unwrap_or_else(procgen::seed_from_clock);

    let batch = procgen::descend(preset, batch_seed, picks, &layout)?;
    let executor = procgen::RasterExecutor::new(procgen::RasterOpts {
        threads: args.threads,
        origin: procgen::Origin::TopLeft,
    })?;

    if args.out.join("batch.json").exists() {
        tracing::warn!(dir = %args.out.display(), "overwriting an earlier batch");
    }
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    let frames = executor.render_batch(&batch, thumb)?;
    let mut items = Vec::with_capacity(batch.len());
    for (instance, frame) in batch.iter().zip(&frames) {
        let file = format!("{}.png", instance.id);
        write_png(&args.out.join(&file), frame)?;
        items.push(ManifestItem {
            instance,
            file,
            sha256: format!("{:x}", sha2::Sha256::digest(&frame.data)),
        });
    }

    if args.sheet {
        let sheet = procgen::contact_sheet(&frames, layout.columns)?;
        write_png(&args.out.join("sheet.png"), &sheet)?;
    }

    if let (Some(res), Some(first)) = (preview, batch.first()) {
        let frame = executor.render(first, res)?;
        write_png(&args.out.join("preview.png"), &frame)?;
    }

    let manifest = Manifest {
        preset: preset.id(),
        batch_seed,
        picks,
        layout,
        size: args.size,
        items,
    };
    let manifest_path = args.out.join("batch.json");
    let f = std::fs::File::create(&manifest_path)
        .with_context(|| format!("create manifest '{}'", manifest_path.display()))?;
    serde_json::to_writer_pretty(f, &manifest).with_context(|| "write manifest JSON")?;

    eprintln!(
        "wrote {} items (batch seed {batch_seed}) to {}",
        batch.len(),
        args.out.display()
    );
    Ok(())
}

fn write_png(path: &Path, frame: &procgen::FrameRGBA) -> anyhow::Result<()> {
    frame
        .clone()
        .into_image()?
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))
}
