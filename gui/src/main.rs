use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use eframe::egui;
use eframe::egui::{ScrollArea, Ui};
use eframe::run_native;
use life_engine::{
    BoundaryPolicy, CellState::Alive, Grid, Simulation, SimulationConfig, Stamp, Strategy, STAMPS,
};

const GRID_SIZE: usize = 128;
const CELL_SIZE: f32 = 5.0;
const STEP_INTERVAL: Duration = Duration::from_millis(50);
const RATE_INTERVAL: Duration = Duration::from_secs(1);

const USAGE: &str = "usage: life-gui [PATTERN_FILE] [--size N] [--finite|--toroidal] \
                     [--direct|--convolution] [--stamp NAME]";

/// Command-line settings for the viewer.
#[derive(Debug, PartialEq)]
struct Options {
    pattern: Option<PathBuf>,
    config: SimulationConfig,
    stamp: Option<&'static Stamp>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            pattern: None,
            config: SimulationConfig {
                size: GRID_SIZE,
                ..SimulationConfig::default()
            },
            stamp: None,
        }
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Options> {
    let mut options = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--size" => {
                let value = args.next().context("--size needs a value")?;
                options.config.size = value
                    .parse()
                    .with_context(|| format!("invalid grid size {:?}", value))?;
            }
            "--finite" => options.config.policy = BoundaryPolicy::Finite,
            "--toroidal" => options.config.policy = BoundaryPolicy::Toroidal,
            "--direct" => options.config.strategy = Strategy::Direct,
            "--convolution" => options.config.strategy = Strategy::Convolution,
            "--stamp" => {
                let name = args.next().context("--stamp needs a name")?;
                let stamp = Stamp::by_name(&name)
                    .with_context(|| format!("unknown stamp {:?}", name))?;
                options.stamp = Some(stamp);
            }
            "-h" | "--help" => bail!(USAGE),
            flag if flag.starts_with('-') => bail!("unknown option {:?}\n{}", flag, USAGE),
            _ if options.pattern.is_some() => bail!("more than one pattern file given\n{}", USAGE),
            _ => options.pattern = Some(PathBuf::from(&arg)),
        }
    }
    Ok(options)
}

/// Builds the simulation and its first generation from the command line.
fn initial_simulation(options: &Options) -> anyhow::Result<Simulation> {
    let mut simulation = Simulation::new(options.config).context("create grid")?;
    let grid = simulation.grid_mut();
    if let Some(path) = &options.pattern {
        let pattern = life_patterns::load_file(path)
            .with_context(|| format!("load pattern {}", path.display()))?;
        grid.insert_centered(&pattern).context("place pattern")?;
    }
    if let Some(stamp) = options.stamp {
        insert_stamp_centered(grid, stamp)?;
    }
    Ok(simulation)
}

fn insert_stamp_centered(grid: &mut Grid, stamp: &Stamp) -> anyhow::Result<()> {
    let (rows, cols) = stamp.extent();
    let (row, col) = life_engine::centered_offset(grid.size(), rows, cols)
        .with_context(|| format!("{} does not fit", stamp.name))?;
    grid.insert_stamp(stamp, row, col)?;
    Ok(())
}

/// Simulation shared between the stepping thread and the UI.
struct SharedState {
    simulation: Simulation,
    running: bool,
}

type Shared = Arc<Mutex<SharedState>>;

fn lock(shared: &Shared) -> MutexGuard<'_, SharedState> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = parse_args(std::env::args().skip(1))?;
    let simulation = initial_simulation(&options)?;
    log::info!(
        "starting {}x{} simulation ({}, {}) with {} alive cells",
        options.config.size,
        options.config.size,
        simulation.policy,
        simulation.strategy,
        simulation.grid().population()
    );

    // Shared grid state wrapped in Arc<Mutex<T>> for synchronization between threads
    let shared = Arc::new(Mutex::new(SharedState {
        simulation,
        running: true,
    }));

    run_native(
        "Game of Life",
        eframe::NativeOptions::default(),
        Box::new(|cc| {
            let ctx = cc.egui_ctx.clone();
            let state = Arc::clone(&shared);

            // Spawn a background thread to advance the simulation
            thread::spawn(move || {
                let mut rate_start = Instant::now();
                let mut rate_generations = 0_u32;
                loop {
                    thread::sleep(STEP_INTERVAL);
                    let changed = {
                        let mut state = lock(&state);
                        if !state.running {
                            continue;
                        }
                        state.simulation.advance()
                    };
                    rate_generations += 1;
                    if changed {
                        ctx.request_repaint();
                    }

                    let elapsed = rate_start.elapsed();
                    if elapsed >= RATE_INTERVAL {
                        let rate = rate_generations as f32 / elapsed.as_secs_f32();
                        log::info!("generations/s: {:.1}", rate);
                        rate_start = Instant::now();
                        rate_generations = 0;
                    }
                }
            });

            Ok(Box::new(GuiOfLife::new(cc, shared)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("viewer failed: {}", err))
}

struct GuiOfLife {
    state: Shared,
    status: Option<String>,
}

impl GuiOfLife {
    fn new(_cc: &eframe::CreationContext<'_>, state: Shared) -> Self {
        Self { state, status: None }
    }

    fn controls(&mut self, ui: &mut Ui) {
        let mut state = lock(&self.state);

        ui.horizontal(|ui| {
            let label = if state.running { "Pause" } else { "Resume" };
            if ui.button(label).clicked() {
                state.running = !state.running;
            }
            if ui.button("Step").clicked() {
                state.simulation.advance();
            }
            if ui.button("Randomize").clicked() {
                let mut grid = state.simulation.grid().blank();
                grid.randomize();
                state.simulation.replace_grid(grid);
            }
            if ui.button("Clear").clicked() {
                let grid = state.simulation.grid().blank();
                state.simulation.replace_grid(grid);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Boundary:");
            ui.radio_value(&mut state.simulation.policy, BoundaryPolicy::Finite, "finite");
            ui.radio_value(&mut state.simulation.policy, BoundaryPolicy::Toroidal, "toroidal");
            ui.separator();
            ui.label("Counting:");
            ui.radio_value(&mut state.simulation.strategy, Strategy::Direct, "direct");
            ui.radio_value(&mut state.simulation.strategy, Strategy::Convolution, "convolution");
        });

        ui.horizontal(|ui| {
            ui.label("Insert:");
            for stamp in STAMPS {
                if ui.button(stamp.name).clicked() {
                    self.status = insert_stamp_centered(state.simulation.grid_mut(), stamp)
                        .err()
                        .map(|err| format!("{:#}", err));
                }
            }
        });

        ui.label(format!(
            "generation {}, population {}",
            state.simulation.generation(),
            state.simulation.grid().population()
        ));
        if let Some(status) = &self.status {
            ui.colored_label(egui::Color32::LIGHT_RED, status.as_str());
        }
    }

    fn create_grid(&self, ui: &mut Ui) {
        let state = lock(&self.state);
        let grid = state.simulation.grid();
        let extent = CELL_SIZE * grid.size() as f32;

        // Calculate the grid starting point
        let (rect, _) = ui.allocate_exact_size(egui::vec2(extent, extent), egui::Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, egui::Color32::DARK_GRAY);

        for (row_index, row) in grid.rows().enumerate() {
            for (col_index, &cell) in row.iter().enumerate() {
                if cell != Alive {
                    continue;
                }
                // Determine the position of the top-left corner of the cell
                let pos = rect.min
                    + egui::vec2(col_index as f32 * CELL_SIZE, row_index as f32 * CELL_SIZE);
                painter.rect_filled(
                    egui::Rect::from_min_size(pos, egui::vec2(CELL_SIZE, CELL_SIZE)),
                    CELL_SIZE / 4f32,
                    egui::Color32::WHITE,
                );
            }
        }
    }
}

impl eframe::App for GuiOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::both().show(ui, |ui| {
                ui.heading("Game of Life");
                self.controls(ui);
                self.create_grid(ui);
            });
        });
    }
}
