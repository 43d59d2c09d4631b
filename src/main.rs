//! Plotvec - plot 2-d vectors and linear transforms in the terminal.

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ndarray::Array2;
use plotvec::app::App;
use plotvec::geometry::parse_matrix;
use plotvec::{
    plot_field, plotvec, plotvec_rect, transform_unit_vecs, ui, Alpha, Canvas, ColorSpec,
    Colormap, FieldOptions, LegendLoc, UnitVecOptions, VecPlotOptions, Vector2,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "plotvec")]
#[command(about = "Plot 2-d vectors and linear transforms in the terminal", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print a text description of the plot instead of opening the viewer
    #[arg(long, global = true)]
    dump: bool,

    /// Enable logging to specified file
    #[arg(long, global = true)]
    log: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plot vectors as arrows
    Vec(VecArgs),
    /// Push a ring of unit vectors through a 2x2 matrix
    Ring(RingArgs),
    /// Push a square lattice of points through a 2x2 matrix
    Field(FieldArgs),
}

#[derive(ClapArgs, Debug)]
struct VecArgs {
    /// Vectors as X,Y; wrap in brackets ([-1,2]) or pass after `--` when X is negative
    #[arg(required = true)]
    vectors: Vec<Vector2>,

    /// Tail of the first vector, as X,Y
    #[arg(long, allow_hyphen_values = true, default_value = "0,0")]
    tail: Vector2,

    /// Place each vector's tail at the previous vector's head
    #[arg(long)]
    chain: bool,

    /// Draw the sum of the vectors as a dashed arrow
    #[arg(long)]
    plotsum: bool,

    /// Legend labels, one per vector
    #[arg(long, value_delimiter = ',')]
    labels: Option<Vec<String>>,

    /// Colors (C<n>, #rrggbb or a basic name), one per vector plus one for the sum
    #[arg(long, value_delimiter = ',')]
    colors: Option<Vec<ColorSpec>>,

    /// Shift of the generated color cycle
    #[arg(long, default_value_t = 0)]
    color_offset: usize,

    /// Opacity: one value for all arrows, or one per vector plus one for the sum
    #[arg(long, value_delimiter = ',')]
    alpha: Option<Vec<f64>>,

    /// Arrow shaft width
    #[arg(long)]
    width: Option<f64>,

    /// Do not force equal scaling of the axes
    #[arg(long)]
    rect: bool,

    /// Legend location, e.g. "upper left" or a numeric code
    #[arg(long, default_value = "best")]
    legend_loc: LegendLoc,
}

#[derive(ClapArgs, Debug)]
struct RingArgs {
    /// 2x2 matrix in row-major order, as A,B,C,D; repeat for one figure per matrix
    #[arg(long = "matrix", allow_hyphen_values = true, default_value = "1,0,0,1")]
    matrices: Vec<String>,

    /// Number of unit vectors
    #[arg(short = 'n', long, default_value_t = 16)]
    num_vectors: usize,

    /// Only draw the transformed vectors
    #[arg(long)]
    no_inputs: bool,

    /// Color gradient for coloring by angle
    #[arg(long, default_value = "plasma")]
    colormap: Colormap,
}

#[derive(ClapArgs, Debug)]
struct FieldArgs {
    /// 2x2 matrix in row-major order, as A,B,C,D; repeat for one figure per matrix
    #[arg(long = "matrix", allow_hyphen_values = true, default_value = "1,0,0,1")]
    matrices: Vec<String>,

    /// Half-width of the input field
    #[arg(long, default_value_t = 3.0)]
    field_width: f64,

    /// Spacing between lattice points
    #[arg(long, default_value_t = 0.5)]
    point_spacing: f64,

    /// Let the output view follow the transformed points
    #[arg(long)]
    no_preserve_axes: bool,

    /// Only draw the transformed points
    #[arg(long)]
    no_inputs: bool,

    /// Color gradient for coloring by angle
    #[arg(long, default_value = "plasma")]
    colormap: Colormap,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting plotvec");
    }

    let canvas = build_canvas(&args.command)?;

    if args.dump {
        print!("{}", canvas);
    } else {
        show(canvas)?;
    }

    if args.log.is_some() {
        tracing::info!("plotvec exited");
    }

    Ok(())
}

fn build_canvas(command: &Command) -> Result<Canvas> {
    let mut canvas = Canvas::new();
    match command {
        Command::Vec(a) => {
            let alpha = match a.alpha.as_deref() {
                None => Alpha::default(),
                Some([single]) => Alpha::Scalar(*single),
                Some(values) => Alpha::PerVector(values.to_vec()),
            };
            let options = VecPlotOptions {
                tail: a.tail,
                chain: a.chain,
                labels: a.labels.clone(),
                colors: a.colors.clone(),
                color_offset: a.color_offset,
                alpha,
                width: a.width,
                plotsum: a.plotsum,
                legendloc: a.legend_loc,
                ..Default::default()
            };
            if a.rect {
                plotvec_rect(&mut canvas, &a.vectors, &options)?;
            } else {
                plotvec(&mut canvas, &a.vectors, &options)?;
            }
        },
        Command::Ring(a) => {
            let options = UnitVecOptions {
                num_vectors: a.num_vectors,
                plot_inputs: !a.no_inputs,
                colormap: a.colormap.name().to_string(),
            };
            for matrix in parse_matrices(&a.matrices)? {
                transform_unit_vecs(&mut canvas, &matrix, &options)?;
            }
        },
        Command::Field(a) => {
            let options = FieldOptions {
                field_width: a.field_width,
                point_spacing: a.point_spacing,
                preserve_axes: !a.no_preserve_axes,
                plot_inputs: !a.no_inputs,
                colormap: a.colormap.name().to_string(),
            };
            for matrix in parse_matrices(&a.matrices)? {
                plot_field(&mut canvas, &matrix, &options)?;
            }
        },
    }
    Ok(canvas)
}

/// Parse every `--matrix` value up front so a bad one fails before drawing.
fn parse_matrices(values: &[String]) -> Result<Vec<Array2<f64>>> {
    Ok(values
        .iter()
        .map(|value| parse_matrix(value))
        .collect::<plotvec::Result<_>>()?)
}

fn show(canvas: Canvas) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(canvas));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc)
                    | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

                    // Figures
                    (KeyModifiers::NONE, KeyCode::Char('n'))
                    | (KeyModifiers::NONE, KeyCode::Tab)
                    | (KeyModifiers::NONE, KeyCode::Right) => app.next_figure(),
                    (KeyModifiers::NONE, KeyCode::Char('p'))
                    | (KeyModifiers::SHIFT, KeyCode::BackTab)
                    | (KeyModifiers::NONE, KeyCode::Left) => app.prev_figure(),

                    // Theme
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),

                    // Clipboard
                    (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_figure(),

                    _ => {},
                }
            }
        }
    }
}
