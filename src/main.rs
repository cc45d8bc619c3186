use clap::{Parser, Subcommand};
use devbelt::config::{self, AppConfig};
use devbelt::imaging::specs::{find_paper_spec, find_photo_spec};
use devbelt::imaging::{self, CropRegion, ExportFormat, SheetLayout};
use devbelt::text::case::CaseStyle;
use devbelt::text::diff::DiffMode;
use devbelt::{codec, convert, format as fmt, generate, output, text};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "devbelt")]
#[command(about = "A single-binary toolbox of everyday developer utilities")]
#[command(long_about = "\
A single-binary toolbox of everyday developer utilities

Text tools take their input from an optional TEXT argument, or from stdin
when the argument is omitted (or given as '-'):

  devbelt base64 encode \"hello\"
  cat payload.json | devbelt json format
  devbelt hash < release.tar.gz.name

Image tools read and write files:

  devbelt photo crop portrait.jpg --spec usa
  devbelt photo sheet portrait.jpg --spec uk --paper a4
  devbelt bg product.png

Defaults for the photo tools (dpi, margins, JPEG quality) and the markdown
preview theme come from devbelt.toml. Run 'devbelt gen-config' to print a
documented stock config.")]
#[command(version)]
struct Cli {
    /// Path to devbelt.toml (default: ./devbelt.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format, minify, or validate JSON
    Json {
        #[command(subcommand)]
        action: JsonAction,
    },
    /// Validate YAML or convert it to JSON
    Yaml {
        #[command(subcommand)]
        action: YamlAction,
    },
    /// Format or minify XML
    Xml {
        #[command(subcommand)]
        action: XmlAction,
    },
    /// Format SQL (2-space indent, uppercase keywords)
    Sql { text: Option<String> },
    /// Render Markdown to HTML
    Markdown {
        #[command(subcommand)]
        action: MarkdownAction,
    },
    /// Base64 encode/decode (standard alphabet, padded)
    Base64 {
        #[command(subcommand)]
        action: CodecAction,
    },
    /// URL percent-encode/decode
    Url {
        #[command(subcommand)]
        action: CodecAction,
    },
    /// HTML entity encode/decode
    Entities {
        #[command(subcommand)]
        action: CodecAction,
    },
    /// Decode a JWT's header and payload (no signature verification)
    Jwt { token: Option<String> },
    /// MD5/SHA-1/SHA-256/SHA-512 digests of the input
    Hash { text: Option<String> },
    /// Generate random v4 UUIDs
    Uuid {
        /// How many to generate
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    /// Build, describe, or list cron expressions
    Cron {
        #[command(subcommand)]
        action: CronAction,
    },
    /// Test a regular expression against the input
    Regex {
        /// The pattern to test
        pattern: String,
        text: Option<String>,
        /// Replace matches with this template ($1, ${name}) instead of listing them
        #[arg(long)]
        replace: Option<String>,
    },
    /// Convert text case
    Case {
        style: CaseStyle,
        text: Option<String>,
    },
    /// Count characters, words, lines, and sentences
    Count { text: Option<String> },
    /// Generate lorem ipsum paragraphs
    Lorem {
        /// Number of paragraphs (default from config)
        #[arg(long)]
        paragraphs: Option<u32>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Diff two files line by line
    Diff {
        old: PathBuf,
        new: PathBuf,
        /// Full listing with +/- prefixes instead of unified hunks
        #[arg(long)]
        plain: bool,
        /// Context lines around unified hunks
        #[arg(long, default_value_t = 3)]
        context: usize,
    },
    /// Convert an integer between bases 2-36
    Base {
        value: Option<String>,
        #[arg(long, default_value_t = 10)]
        from: u32,
        #[arg(long, default_value_t = 16)]
        to: u32,
    },
    /// Convert a color between hex, rgb, and hsl
    Color { value: Option<String> },
    /// Convert unix timestamps to dates and back
    Timestamp {
        #[command(subcommand)]
        action: TimestampAction,
    },
    /// Date arithmetic
    Date {
        #[command(subcommand)]
        action: DateAction,
    },
    /// Convert between CSV and JSON
    Csv {
        #[command(subcommand)]
        action: CsvAction,
    },
    /// Passport photo tools: crop and print sheets
    Photo {
        #[command(subcommand)]
        action: PhotoAction,
    },
    /// Remove a flat background from an image (naive color matching)
    Bg {
        image: PathBuf,
        /// Composite the result over white and export JPEG instead of
        /// transparent PNG
        #[arg(long)]
        flatten: bool,
        /// Output path (default: <input>-no-background.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a stock devbelt.toml with all options documented
    GenConfig,
}

#[derive(Subcommand)]
enum JsonAction {
    /// Pretty-print with 2-space indentation
    Format { text: Option<String> },
    /// Strip insignificant whitespace
    Minify { text: Option<String> },
    /// Parse-only validation
    Check { text: Option<String> },
}

#[derive(Subcommand)]
enum YamlAction {
    /// Parse-only validation
    Check { text: Option<String> },
    /// Convert to pretty-printed JSON
    ToJson { text: Option<String> },
}

#[derive(Subcommand)]
enum XmlAction {
    /// Pretty-print with 2-space indentation
    Format { text: Option<String> },
    /// Strip inter-element whitespace
    Minify { text: Option<String> },
}

#[derive(Subcommand)]
enum MarkdownAction {
    /// Emit an HTML fragment
    Html { text: Option<String> },
    /// Emit a full standalone preview page (theme from config)
    Preview { text: Option<String> },
}

#[derive(Subcommand)]
enum CodecAction {
    Encode { text: Option<String> },
    Decode { text: Option<String> },
}

#[derive(Subcommand)]
enum CronAction {
    /// Assemble an expression from per-field values
    Build {
        #[arg(long)]
        minute: Option<String>,
        #[arg(long)]
        hour: Option<String>,
        #[arg(long, value_name = "DAY")]
        day_of_month: Option<String>,
        #[arg(long)]
        month: Option<String>,
        #[arg(long, value_name = "DAY")]
        day_of_week: Option<String>,
    },
    /// Validate an expression and describe it in words
    Describe { expression: String },
    /// List common ready-made expressions
    Presets,
}

#[derive(Subcommand)]
enum TimestampAction {
    /// Epoch (seconds or milliseconds, auto-detected) to UTC date-time
    ToDate { epoch: Option<String> },
    /// Date-time text to epoch seconds
    FromDate { text: Option<String> },
    /// Print the current epoch in seconds
    Now,
}

#[derive(Subcommand)]
enum DateAction {
    /// Whole days between two dates
    Diff { start: String, end: String },
    /// Add (or with a negative count, subtract) days
    Add { date: String, days: i64 },
}

#[derive(Subcommand)]
enum CsvAction {
    /// CSV (header row) to a JSON array of objects
    ToJson { file: Option<PathBuf> },
    /// JSON array of objects to CSV
    FromJson { file: Option<PathBuf> },
}

#[derive(Subcommand)]
enum PhotoAction {
    /// Crop (and optionally rotate) to a passport format
    Crop {
        image: PathBuf,
        /// Photo format id (see `photo specs`)
        #[arg(long, default_value = "usa")]
        spec: String,
        /// Crop region as X,Y,WIDTH,HEIGHT in source pixels
        /// (default: largest centered region with the format's aspect)
        #[arg(long)]
        crop: Option<String>,
        /// Clockwise rotation in degrees (multiple of 90)
        #[arg(long, default_value_t = 0)]
        rotate: i32,
        /// Output path (default: passport-photo-<spec>.jpg)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Tile the cropped photo onto a print sheet
    Sheet {
        image: PathBuf,
        #[arg(long, default_value = "usa")]
        spec: String,
        /// Paper size id (see `photo specs`)
        #[arg(long, default_value = "a4")]
        paper: String,
        #[arg(long)]
        crop: Option<String>,
        #[arg(long, default_value_t = 0)]
        rotate: i32,
        /// Output path (default: passport-print-sheet-<paper>.jpg)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the photo format and paper size catalogs
    Specs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Json { action } => match action {
            JsonAction::Format { text } => println!("{}", fmt::json::format(&read_text(text)?)?),
            JsonAction::Minify { text } => println!("{}", fmt::json::minify(&read_text(text)?)?),
            JsonAction::Check { text } => {
                fmt::json::validate(&read_text(text)?)?;
                println!("Valid JSON");
            }
        },
        Command::Yaml { action } => match action {
            YamlAction::Check { text } => {
                fmt::yaml::validate(&read_text(text)?)?;
                println!("Valid YAML");
            }
            YamlAction::ToJson { text } => println!("{}", fmt::yaml::to_json(&read_text(text)?)?),
        },
        Command::Xml { action } => match action {
            XmlAction::Format { text } => println!("{}", fmt::xml::format(&read_text(text)?)?),
            XmlAction::Minify { text } => println!("{}", fmt::xml::minify(&read_text(text)?)?),
        },
        Command::Sql { text } => println!("{}", fmt::sql::format(&read_text(text)?)),
        Command::Markdown { action } => match action {
            MarkdownAction::Html { text } => {
                print!("{}", fmt::markdown::to_html(&read_text(text)?));
            }
            MarkdownAction::Preview { text } => {
                println!(
                    "{}",
                    fmt::markdown::preview_page(&read_text(text)?, config.markdown.theme)
                );
            }
        },
        Command::Base64 { action } => match action {
            CodecAction::Encode { text } => println!("{}", codec::base64::encode(&read_text(text)?)),
            CodecAction::Decode { text } => println!("{}", codec::base64::decode(&read_text(text)?)?),
        },
        Command::Url { action } => match action {
            CodecAction::Encode { text } => println!("{}", codec::url::encode(&read_text(text)?)),
            CodecAction::Decode { text } => println!("{}", codec::url::decode(&read_text(text)?)?),
        },
        Command::Entities { action } => match action {
            CodecAction::Encode { text } => println!("{}", codec::entities::encode(&read_text(text)?)),
            CodecAction::Decode { text } => println!("{}", codec::entities::decode(&read_text(text)?)?),
        },
        Command::Jwt { token } => {
            let decoded = codec::jwt::decode(&read_text(token)?)?;
            println!("Header\n{}", decoded.header);
            println!("\nPayload\n{}", decoded.payload);
            println!("\nSignature (not verified)\n{}", decoded.signature);
        }
        Command::Hash { text } => {
            output::print_hash_report(&generate::hash::digest_all(&read_text(text)?));
        }
        Command::Uuid { count } => {
            for id in generate::uuid::generate(count) {
                println!("{}", id);
            }
        }
        Command::Cron { action } => match action {
            CronAction::Build {
                minute,
                hour,
                day_of_month,
                month,
                day_of_week,
            } => {
                let expr = generate::cron::CronExpr::build(
                    minute.as_deref(),
                    hour.as_deref(),
                    day_of_month.as_deref(),
                    month.as_deref(),
                    day_of_week.as_deref(),
                )?;
                output::print_cron_report(&expr);
            }
            CronAction::Describe { expression } => {
                let expr = generate::cron::CronExpr::parse(&expression)?;
                println!("{}", expr.describe());
            }
            CronAction::Presets => output::print_cron_presets(&generate::cron::presets()),
        },
        Command::Regex {
            pattern,
            text,
            replace,
        } => {
            let input = read_text(text)?;
            match replace {
                Some(template) => {
                    println!("{}", text::regex_tester::replace_all(&pattern, &input, &template)?);
                }
                None => output::print_matches(&text::regex_tester::find_matches(&pattern, &input)?),
            }
        }
        Command::Case { style, text } => println!("{}", text::case::convert(&read_text(text)?, style)),
        Command::Count { text } => output::print_counts(&text::count::count(&read_text(text)?)),
        Command::Lorem { paragraphs, seed } => {
            let paragraphs = paragraphs.unwrap_or(config.lorem.paragraphs);
            println!("{}", text::lorem::generate(paragraphs, seed));
        }
        Command::Diff {
            old,
            new,
            plain,
            context,
        } => {
            let old_text = std::fs::read_to_string(&old)?;
            let new_text = std::fs::read_to_string(&new)?;
            let mode = if plain {
                DiffMode::Plain
            } else {
                DiffMode::Unified { context }
            };
            let out = text::diff::diff_lines(
                &old_text,
                &new_text,
                &old.display().to_string(),
                &new.display().to_string(),
                mode,
            );
            if out.is_empty() {
                println!("Files are identical");
            } else {
                print!("{}", out);
            }
        }
        Command::Base { value, from, to } => {
            println!("{}", convert::base::convert(&read_text(value)?, from, to)?);
        }
        Command::Color { value } => {
            let rgb = convert::color::parse(&read_text(value)?)?;
            println!("{}", rgb.to_hex());
            println!("{}", rgb.to_rgb_string());
            println!("{}", rgb.to_hsl().to_hsl_string());
        }
        Command::Timestamp { action } => match action {
            TimestampAction::ToDate { epoch } => {
                let resolved = convert::timestamp::from_epoch(&read_text(epoch)?)?;
                println!("{}", resolved.utc.to_rfc3339());
                println!("{}", resolved.utc.format("%Y-%m-%d %H:%M:%S UTC"));
            }
            TimestampAction::FromDate { text } => {
                println!("{}", convert::timestamp::to_epoch(&read_text(text)?)?);
            }
            TimestampAction::Now => println!("{}", convert::timestamp::now_epoch()),
        },
        Command::Date { action } => match action {
            DateAction::Diff { start, end } => {
                println!("{} days", convert::date::diff_days(&start, &end)?);
            }
            DateAction::Add { date, days } => {
                println!("{}", convert::date::add_days(&date, days)?);
            }
        },
        Command::Csv { action } => match action {
            CsvAction::ToJson { file } => {
                println!("{}", convert::csv::csv_to_json(&read_file_or_stdin(file)?)?);
            }
            CsvAction::FromJson { file } => {
                print!("{}", convert::csv::json_to_csv(&read_file_or_stdin(file)?)?);
            }
        },
        Command::Photo { action } => run_photo(action, &config)?,
        Command::Bg {
            image,
            flatten,
            output: out_path,
        } => {
            let source = imaging::load_image(&image)?.to_rgba8();
            let background = imaging::background::detect_background_color(&source);
            let removed = imaging::background::remove_background(
                &source,
                background,
                imaging::background::DEFAULT_TOLERANCE,
            );
            let (bytes, default_name) = if flatten {
                let flat = imaging::background::flatten_onto_white(&removed);
                let rgba = image::DynamicImage::ImageRgb8(flat).to_rgba8();
                (
                    imaging::export(
                        &rgba,
                        ExportFormat::Jpeg {
                            quality: config.photo.jpeg_quality,
                        },
                    )?,
                    derived_name(&image, "-white-background.jpg"),
                )
            } else {
                (
                    imaging::export(&removed, ExportFormat::Png)?,
                    derived_name(&image, "-no-background.png"),
                )
            };
            let out_path = out_path.unwrap_or(default_name);
            std::fs::write(&out_path, bytes)?;
            println!(
                "Background {} -> {}",
                format_rgb(background),
                out_path.display()
            );
        }
        Command::GenConfig => print!("{}", config::stock_config_toml()),
    }

    Ok(())
}

fn run_photo(action: PhotoAction, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PhotoAction::Crop {
            image,
            spec,
            crop,
            rotate,
            output: out_path,
        } => {
            let spec = find_photo_spec(&spec)
                .ok_or_else(|| format!("unknown photo format '{spec}' (see `photo specs`)"))?;
            let source = imaging::load_image(&image)?;
            let crop = resolve_crop(crop.as_deref(), &source, spec)?;
            let photo = imaging::crop_rotate(&source, crop, rotate)?;
            let bytes = imaging::export(
                &photo,
                ExportFormat::Jpeg {
                    quality: config.photo.jpeg_quality,
                },
            )?;
            let out_path =
                out_path.unwrap_or_else(|| PathBuf::from(format!("passport-photo-{}.jpg", spec.id)));
            std::fs::write(&out_path, bytes)?;
            println!(
                "{}x{} px photo -> {}",
                photo.width(),
                photo.height(),
                out_path.display()
            );
        }
        PhotoAction::Sheet {
            image,
            spec,
            paper,
            crop,
            rotate,
            output: out_path,
        } => {
            let spec = find_photo_spec(&spec)
                .ok_or_else(|| format!("unknown photo format '{spec}' (see `photo specs`)"))?;
            let paper = find_paper_spec(&paper)
                .ok_or_else(|| format!("unknown paper size '{paper}' (see `photo specs`)"))?;
            let source = imaging::load_image(&image)?;
            let crop = resolve_crop(crop.as_deref(), &source, spec)?;
            let photo = imaging::crop_rotate(&source, crop, rotate)?;
            let sheet = imaging::render_print_sheet(
                &photo,
                paper,
                spec,
                config.photo.dpi,
                config.photo.margin_px,
            );
            let bytes = imaging::export(
                &sheet,
                ExportFormat::Jpeg {
                    quality: config.photo.jpeg_quality,
                },
            )?;
            let out_path = out_path
                .unwrap_or_else(|| PathBuf::from(format!("passport-print-sheet-{}.jpg", paper.id)));
            std::fs::write(&out_path, bytes)?;
            let layout = SheetLayout::compute(paper, spec, config.photo.dpi, config.photo.margin_px);
            println!("{}", output::format_sheet_summary(&layout));
            println!("-> {}", out_path.display());
        }
        PhotoAction::Specs => {
            output::print_spec_catalog(imaging::photo_specs(), imaging::paper_specs());
        }
    }
    Ok(())
}

/// Parse `--crop X,Y,W,H`, or derive the largest centered region with the
/// format's aspect when no crop is given. An explicit crop must match the
/// format's aspect ratio within 1%.
fn resolve_crop(
    arg: Option<&str>,
    source: &image::DynamicImage,
    spec: &imaging::specs::PhotoSpec,
) -> Result<CropRegion, Box<dyn std::error::Error>> {
    let Some(arg) = arg else {
        return Ok(CropRegion::centered(source.width(), source.height(), spec));
    };
    let parts: Vec<u32> = arg
        .split(',')
        .map(|p| p.trim().parse::<u32>())
        .collect::<Result<_, _>>()
        .map_err(|_| format!("--crop expects X,Y,WIDTH,HEIGHT, got '{arg}'"))?;
    let &[x, y, width, height] = parts.as_slice() else {
        return Err(format!("--crop expects 4 values, got {}", parts.len()).into());
    };
    let crop = CropRegion {
        x,
        y,
        width,
        height,
    };
    if !crop.matches_aspect(spec, 0.01) {
        return Err(format!(
            "crop {}x{} does not match the {} aspect ratio {}:{}",
            width, height, spec.id, spec.width_mm, spec.height_mm
        )
        .into());
    }
    Ok(crop)
}

/// Read a positional text argument, falling back to stdin for `None` or `-`.
fn read_text(arg: Option<String>) -> std::io::Result<String> {
    match arg {
        Some(text) if text != "-" => Ok(text),
        _ => read_stdin(),
    }
}

/// Read a file argument, falling back to stdin when absent.
fn read_file_or_stdin(path: Option<PathBuf>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => read_stdin(),
    }
}

fn read_stdin() -> std::io::Result<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// `portrait.jpg` + `-no-background.png` → `portrait-no-background.png`.
fn derived_name(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}{suffix}"))
}

fn format_rgb(rgb: image::Rgb<u8>) -> String {
    format!("rgb({}, {}, {})", rgb[0], rgb[1], rgb[2])
}
