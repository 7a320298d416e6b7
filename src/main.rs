use std::{
    fs::File,
    io::{BufRead, BufReader},
    process,
};

use clap::Parser;
use tracing::{debug, info};

use text2png::{
    encode,
    prelude::{Error, FontDatabase, Image, RenderRequest, Rgba},
    text::{draw_outlined, measure},
};

#[derive(Parser, Debug)]
#[command(
    name = "text2png",
    version,
    about = "Render each non-empty line of a text file to a transparent, outlined PNG"
)]
struct Cli {
    /// Input text file (one image per non-empty line)
    #[arg(long, value_name = "FILE", required_unless_present = "list_fonts")]
    input: Option<String>,

    /// Output prefix; files are written as <prefix><N>.png
    #[arg(long, default_value = "")]
    prefix: String,

    /// First line number used for output filenames
    #[arg(long, default_value_t = 1)]
    start_index: u32,

    /// Font family name to use
    #[arg(long, default_value = "DejaVu Sans")]
    font: String,

    /// Pick a font by 1-based index from --list-fonts instead of by name
    #[arg(long, value_name = "N")]
    font_index: Option<usize>,

    /// Font size in pixels
    #[arg(long, default_value_t = 48)]
    size: u32,

    /// Text fill color (#RRGGBB or #RRGGBBAA)
    #[arg(long, default_value = "#FFFFFF")]
    color: String,

    /// Outline color
    #[arg(long, default_value = "#000000")]
    outline_color: String,

    /// Outline thickness in pixels (0 disables the outline)
    #[arg(long, default_value_t = 2)]
    outline: u32,

    /// Background color (default: fully transparent)
    #[arg(long, default_value = "#00000000")]
    bg_color: String,

    /// Padding around the text in pixels
    #[arg(long, default_value_t = 20)]
    padding: u32,

    /// Number of directions in the outline halo ring
    #[arg(long, default_value_t = 36)]
    offset_directions: u32,

    /// Print available font families with indices and exit
    #[arg(long)]
    list_fonts: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> text2png::Result<()> {
    let db = FontDatabase::load_system();

    if cli.list_fonts {
        for (index, family) in db.families().iter().enumerate() {
            println!("{}: {family}", index + 1);
        }
        return Ok(());
    }

    let family = match cli.font_index {
        Some(index) => {
            let families = db.families();
            families
                .get(index.wrapping_sub(1))
                .cloned()
                .ok_or_else(|| {
                    Error::FontNotFound(format!(
                        "font index {index} out of range (have {} families)",
                        families.len()
                    ))
                })?
        }
        None => cli.font.clone(),
    };

    let fill = Rgba::from_hex(&cli.color)?;
    let outline = Rgba::from_hex(&cli.outline_color)?;
    let background = Rgba::from_hex(&cli.bg_color)?;

    let size = cli.size as f32;
    let font = db.load(&family, size)?;
    info!("using font family {family} at {size}px");

    // clap guarantees --input is present unless --list-fonts was passed.
    let path = cli.input.as_deref().unwrap_or_default();
    let reader = BufReader::new(File::open(path)?);

    let mut written = 0_u32;
    let mut index = cli.start_index;
    for line in reader.lines() {
        let line = line?;
        let text = line.trim();
        // Blank lines produce no image but still advance the index, keeping a
        // stable line-to-file mapping.
        if text.is_empty() {
            index += 1;
            continue;
        }

        let metrics = measure(&font, text, size);
        let plan = RenderRequest::new(text, cli.size)
            .with_outline_width(cli.outline)
            .with_padding(cli.padding)
            .plan(&metrics);
        debug!(
            "line {index}: canvas {}x{}, origin ({}, {})",
            plan.width, plan.height, plan.origin_x, plan.origin_y
        );

        let mut image = Image::new(plan.width, plan.height, background);
        draw_outlined(
            &mut image,
            &font,
            text,
            size,
            (plan.origin_x, plan.origin_y),
            fill,
            outline,
            cli.outline,
            cli.offset_directions,
        );

        let filename = format!("{}{index}.png", cli.prefix);
        encode::save(&image, &filename)?;
        println!("created {filename}");

        written += 1;
        index += 1;
    }

    println!("wrote {written} PNG files");
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    text2png::logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
