// Copyright 2025 the Isocontour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! I/O layer of the `isocontour` command.
//!
//! Reads rectangles as a count followed by `x1 x2 y1 y2` lines, computes the
//! contour of their union with [`isocontour`], and writes it out as a plain
//! listing, as CSV tables, and optionally as an SVG drawing.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use isocontour::{Contour, Rectangle};
use kurbo::Shape;
use tracing::{debug, info};

/// Tolerance for flattening shapes into SVG paths; every shape here is straight-edged.
const SVG_TOLERANCE: f64 = 0.1;

/// Command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "isocontour")]
#[command(about = "Contour of a union of iso-oriented rectangles")]
#[command(version)]
pub struct Args {
    /// Input file: a rectangle count, then one `x1 x2 y1 y2` line per rectangle.
    /// Reads stdin when absent or `-`.
    pub input: Option<PathBuf>,

    /// Directory receiving `rectangles.csv` and `contours.csv`.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Do not write the CSV tables.
    #[arg(long = "no-csv")]
    pub no_csv: bool,

    /// Also draw the frame, rectangles and contour to an SVG file.
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,

    /// Do not print the contour listing.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parse the text input format into validated rectangles.
///
/// # Errors
///
/// Fails on a missing or malformed count, a missing or non-integer coordinate,
/// tokens left over after the last rectangle, or a degenerate rectangle.
pub fn parse_rectangles(text: &str) -> Result<Vec<Rectangle>> {
    let mut tokens = text.split_whitespace();
    let count: usize = tokens
        .next()
        .context("missing rectangle count")?
        .parse()
        .context("invalid rectangle count")?;

    let mut rows = Vec::with_capacity(count.min(1 << 16));
    for i in 0..count {
        let mut row = [0_i64; 4];
        for (slot, name) in row.iter_mut().zip(["x1", "x2", "y1", "y2"]) {
            let token = tokens
                .next()
                .with_context(|| format!("rectangle {i}: missing {name}"))?;
            *slot = token
                .parse()
                .with_context(|| format!("rectangle {i}: invalid {name} {token:?}"))?;
        }
        rows.push(row);
    }
    if let Some(extra) = tokens.next() {
        bail!("unexpected token {extra:?} after {count} rectangles");
    }
    Ok(Rectangle::from_bounds(rows)?)
}

/// Write the plain listing: horizontal segments, then vertical segments.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_listing<W: Write>(out: &mut W, contour: &Contour) -> io::Result<()> {
    writeln!(out, "Horizontal Contours")?;
    for s in contour.horizontal() {
        let [x1, y, x2, _] = s.horizontal_endpoints();
        writeln!(out, "{x1} {y}     {x2} {y}")?;
    }
    writeln!(out, "Vertical Contours")?;
    for s in contour.vertical() {
        let [x, y1, _, y2] = s.vertical_endpoints();
        writeln!(out, "{x} {y1}     {x} {y2}")?;
    }
    Ok(())
}

/// Fields after the first carry one leading space, so rows read `a, b, c, d`.
fn spaced_row(row: [i64; 4]) -> [String; 4] {
    let mut first = true;
    row.map(|v| {
        if core::mem::take(&mut first) {
            v.to_string()
        } else {
            format!(" {v}")
        }
    })
}

fn table_writer<W: Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .flexible(true)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(out)
}

/// Write the `Rectangles` table: the frame first, then every input rectangle
/// as `xmin, xmax, ymin, ymax`.
///
/// # Errors
///
/// Propagates CSV and I/O failures.
pub fn write_rectangles_csv<W: Write>(
    out: W,
    frame: &Rectangle,
    rects: &[Rectangle],
) -> csv::Result<()> {
    let mut wtr = table_writer(out);
    wtr.write_record(["Rectangles"])?;
    for r in std::iter::once(frame).chain(rects) {
        wtr.write_record(spaced_row([r.x.bottom, r.x.top, r.y.bottom, r.y.top]))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the `Contours` table: every segment as `x1, y1, x2, y2`, horizontal first.
///
/// # Errors
///
/// Propagates CSV and I/O failures.
pub fn write_contours_csv<W: Write>(out: W, contour: &Contour) -> csv::Result<()> {
    let mut wtr = table_writer(out);
    wtr.write_record(["Contours"])?;
    for row in contour.endpoints() {
        wtr.write_record(spaced_row(row))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Draw the frame, the rectangles and the contour as an SVG document.
///
/// The drawing keeps the input's y-up orientation.
pub fn render_svg(contour: &Contour, rects: &[Rectangle]) -> String {
    let frame = contour.frame().to_kurbo();
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n",
        frame.x0,
        frame.y0,
        frame.width(),
        frame.height()
    );
    svg.push_str(&format!(
        "<g transform=\"translate(0 {}) scale(1 -1)\">\n",
        frame.y0 + frame.y1
    ));
    svg.push_str(&format!(
        "<path d=\"{}\" fill=\"none\" stroke=\"gray\" stroke-width=\"0.05\"/>\n",
        frame.to_path(SVG_TOLERANCE).to_svg()
    ));
    for r in rects {
        svg.push_str(&format!(
            "<path d=\"{}\" fill=\"steelblue\" fill-opacity=\"0.25\"/>\n",
            r.to_kurbo().to_path(SVG_TOLERANCE).to_svg()
        ));
    }
    svg.push_str(&format!(
        "<path d=\"{}\" fill=\"none\" stroke=\"crimson\" stroke-width=\"0.1\"/>\n",
        contour.to_bez_path().to_svg()
    ));
    svg.push_str("</g>\n</svg>\n");
    svg
}

fn read_input(input: Option<&Path>) -> Result<String> {
    let mut text = String::new();
    match input {
        Some(path) if path != Path::new("-") => {
            text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        }
        _ => {
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
        }
    }
    Ok(text)
}

fn create_csv_writer(dir: &Path, name: &str) -> Result<fs::File> {
    let path = dir.join(name);
    fs::File::create(&path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))
}

/// Run the command: read, compute, then write every requested output.
///
/// # Errors
///
/// Fails on unreadable or invalid input, or when an output cannot be written.
pub fn run(args: &Args) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let rects = parse_rectangles(&text)?;
    debug!(rectangles = rects.len(), "parsed input");

    let contour = Contour::compute(&rects).context("Failed to compute contour")?;
    info!(
        horizontal = contour.horizontal().len(),
        vertical = contour.vertical().len(),
        perimeter = %contour.perimeter(),
        "computed contour"
    );

    if !args.quiet {
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        write_listing(&mut out, &contour)?;
        out.flush()?;
    }

    if !args.no_csv {
        fs::create_dir_all(&args.out_dir).with_context(|| {
            format!("Failed to create output directory: {}", args.out_dir.display())
        })?;
        write_rectangles_csv(
            create_csv_writer(&args.out_dir, "rectangles.csv")?,
            &contour.frame(),
            &rects,
        )
        .context("Failed to write rectangles.csv")?;
        write_contours_csv(create_csv_writer(&args.out_dir, "contours.csv")?, &contour)
            .context("Failed to write contours.csv")?;
        debug!(dir = %args.out_dir.display(), "wrote CSV tables");
    }

    if let Some(path) = &args.svg {
        fs::write(path, render_svg(&contour, &rects))
            .with_context(|| format!("Failed to write SVG: {}", path.display()))?;
        debug!(path = %path.display(), "wrote SVG");
    }
    Ok(())
}
