use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "mirage", version)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide one image inside another as a checkerboard composite PNG.
    Hide(HideArgs),
    /// Pull one layer back out of a composite.
    Extract(ExtractArgs),
    /// Apply an exposure adjustment to reveal a hidden image.
    Reveal(RevealArgs),
    /// Convert a color between hex, RGB and HSL.
    Color(ColorArgs),
    /// Blend two hex colors.
    Mix(MixArgs),
    /// Hash text or a file.
    Hash(HashArgs),
}

#[derive(Args, Debug)]
struct HideArgs {
    /// Image shown on light backgrounds.
    #[arg(long)]
    visible: PathBuf,

    /// Image revealed on dark backgrounds.
    #[arg(long)]
    hidden: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Placement of a hidden image whose size differs from the visible one.
    #[arg(long, value_enum)]
    mode: Option<ModeChoice>,

    /// Brightness added to the visible image, in percent.
    #[arg(long)]
    visible_brightness: Option<i32>,

    /// Brightness removed from the hidden image, in percent.
    #[arg(long)]
    hidden_brightness_reduce: Option<i32>,

    /// Contrast of the visible image, in percent.
    #[arg(long)]
    visible_contrast: Option<i32>,

    /// Contrast of the hidden image, in percent.
    #[arg(long)]
    hidden_contrast: Option<i32>,

    /// JSON preset with tone controls and mode. Flags above override it.
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Also copy the composite to the system clipboard.
    #[arg(long)]
    copy: bool,
}

#[derive(Args, Debug)]
struct ExtractArgs {
    /// Composite PNG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Layer to keep.
    #[arg(long, value_enum)]
    layer: LayerChoice,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct RevealArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Exposure in EV, -10..=10.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    exposure: f32,

    /// Backend to use.
    #[arg(long, value_enum, default_value_t = BackendChoice::Cpu)]
    backend: BackendChoice,
}

#[derive(Args, Debug)]
struct ColorArgs {
    /// `#rrggbb`, `0xrrggbb`, or `r, g, b`.
    value: String,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct MixArgs {
    /// Start color, `#rrggbb`.
    #[arg(long)]
    start: String,

    /// End color, `#rrggbb`.
    #[arg(long)]
    end: String,

    /// Blend position, 0 (start) to 1 (end).
    #[arg(long, default_value_t = 0.5)]
    alpha: f64,
}

#[derive(Args, Debug)]
struct HashArgs {
    /// md5, sha1, sha256 or sha512.
    #[arg(long, default_value = "md5")]
    alg: String,

    /// Text to hash (UTF-8).
    #[arg(long, required_unless_present = "file", conflicts_with = "file")]
    text: Option<String>,

    /// File to hash.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Also copy the digest to the system clipboard.
    #[arg(long)]
    copy: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Stretch,
    Scale,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayerChoice {
    Visible,
    Hidden,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendChoice {
    Cpu,
    Gpu,
}

#[derive(serde::Serialize)]
struct ColorReport {
    hex: String,
    rgb: String,
    hsl: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Hide(args) => cmd_hide(args),
        Command::Extract(args) => cmd_extract(args),
        Command::Reveal(args) => cmd_reveal(args),
        Command::Color(args) => cmd_color(args),
        Command::Mix(args) => cmd_mix(args),
        Command::Hash(args) => cmd_hash(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_image(path: &Path) -> anyhow::Result<(mirage::Bitmap, u64)> {
    mirage::load_image(path).with_context(|| format!("load image '{}'", path.display()))
}

fn open_clipboard() -> anyhow::Result<Box<dyn mirage::Clipboard>> {
    #[cfg(feature = "system-clipboard")]
    {
        Ok(Box::new(mirage::SystemClipboard::new()?))
    }
    #[cfg(not(feature = "system-clipboard"))]
    {
        anyhow::bail!("clipboard support requires the `system-clipboard` feature")
    }
}

fn cmd_hide(args: HideArgs) -> anyhow::Result<()> {
    let mut preset = match &args.preset {
        Some(p) => mirage::HidePreset::from_path(p)?,
        None => mirage::HidePreset::default(),
    };
    if let Some(mode) = args.mode {
        preset.mode = match mode {
            ModeChoice::Stretch => mirage::FitMode::Stretch,
            ModeChoice::Scale => mirage::FitMode::ScaleToFit,
        };
    }
    if let Some(v) = args.visible_brightness {
        preset.tone.visible_brightness_boost = v;
    }
    if let Some(v) = args.hidden_brightness_reduce {
        preset.tone.hidden_brightness_reduce = v;
    }
    if let Some(v) = args.visible_contrast {
        preset.tone.visible_contrast = v;
    }
    if let Some(v) = args.hidden_contrast {
        preset.tone.hidden_contrast = v;
    }
    tracing::info!(?preset, "hide settings");

    let mut state = mirage::HiderState::new();
    state.set_tone(preset.tone);
    state.set_mode(preset.mode);
    for (slot, path) in [
        (mirage::Slot::Visible, &args.visible),
        (mirage::Slot::Hidden, &args.hidden),
    ] {
        let (bitmap, size) = read_image(path)?;
        state.set_image(slot, bitmap, size);
    }
    if state.size_status() == mirage::SizeStatus::Mismatch {
        tracing::warn!(
            mode = ?preset.mode,
            "image sizes differ; the hidden image is placed into the visible image's frame"
        );
    }

    state.generate();
    let Some(composite) = state.composite() else {
        anyhow::bail!("generate failed: {}", state.warning());
    };
    mirage::save_png(composite, &args.out)
        .with_context(|| format!("write composite '{}'", args.out.display()))?;

    if args.copy {
        let mut clipboard = open_clipboard()?;
        if !state.copy_image(clipboard.as_mut()) {
            eprintln!("warning: {}", state.warning());
        }
    }
    Ok(())
}

fn cmd_extract(args: ExtractArgs) -> anyhow::Result<()> {
    let (composite, _) = read_image(&args.in_path)?;
    let layer = match args.layer {
        LayerChoice::Visible => mirage::Layer::Visible,
        LayerChoice::Hidden => mirage::Layer::Hidden,
    };
    let out = mirage::extract_layer(&composite, layer)?;
    mirage::save_png(&out, &args.out)
        .with_context(|| format!("write layer '{}'", args.out.display()))?;
    Ok(())
}

fn cmd_reveal(args: RevealArgs) -> anyhow::Result<()> {
    let (bitmap, _) = read_image(&args.in_path)?;
    let kind = match args.backend {
        BackendChoice::Cpu => mirage::BackendKind::Cpu,
        BackendChoice::Gpu => mirage::BackendKind::Gpu,
    };
    let mut state = mirage::RevealState::with_backend(kind);
    state.set_image(bitmap);
    state.set_ev(args.exposure);
    let Some(out) = state.render() else {
        anyhow::bail!("reveal failed: {}", state.warning());
    };
    mirage::save_png(&out, &args.out)
        .with_context(|| format!("write revealed image '{}'", args.out.display()))?;
    Ok(())
}

fn cmd_color(args: ColorArgs) -> anyhow::Result<()> {
    let rgb = if args.value.contains(',') {
        mirage::parse_rgb(&args.value)?
    } else {
        mirage::parse_hex(&args.value)?
    };
    let report = ColorReport {
        hex: rgb.to_hex(),
        rgb: rgb.to_string(),
        hsl: rgb.to_hsl().to_string(),
    };
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serialize color report")?
        );
    } else {
        println!("hex: {}", report.hex);
        println!("rgb: {}", report.rgb);
        println!("hsl: {}", report.hsl);
    }
    Ok(())
}

fn cmd_mix(args: MixArgs) -> anyhow::Result<()> {
    let mut mixer = mirage::ColorMixer::new();
    mixer.set_start(&args.start);
    mixer.set_end(&args.end);
    mixer.set_alpha(args.alpha);
    println!("{}", mixer.mixed());
    Ok(())
}

fn cmd_hash(args: HashArgs) -> anyhow::Result<()> {
    let alg: mirage::HashAlgorithm = args.alg.parse()?;
    let digest = match (&args.text, &args.file) {
        (Some(text), _) => mirage::digest_hex(alg, text.as_bytes()),
        (None, Some(path)) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("read '{}'", path.display()))?;
            mirage::digest_hex(alg, &bytes)
        }
        (None, None) => anyhow::bail!("one of --text or --file is required"),
    };
    println!("{digest}");

    if args.copy {
        let mut clipboard = open_clipboard()?;
        let mut button = mirage::CopyButton::new();
        if !button.copy(clipboard.as_mut(), &digest) {
            eprintln!("warning: digest was not copied");
        }
    }
    Ok(())
}
