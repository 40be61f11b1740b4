//! Interactive controller.
//!
//! Drives a [`Simulation`] from the console: a drawing menu that loops until the
//! user picks "begin", then ticks at a fixed cadence until the earthquake.
//! Works over any `BufRead`/`Write` pair so whole sessions can be scripted.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Result};

use crate::core::{Earthquake, Simulation, TickOutcome};
use crate::input::{parse_menu_choice, Prompter};
use crate::journal::{SessionEvent, SessionJournal};
use crate::term::TerminalRenderer;
use crate::types::{MenuChoice, Shape, GRID_HEIGHT, GRID_WIDTH};

pub struct Controller<R, W> {
    sim: Simulation,
    prompter: Prompter<R, W>,
    renderer: TerminalRenderer,
    journal: SessionJournal,
    tick_interval: Duration,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    pub fn new(
        input: R,
        output: W,
        sim: Simulation,
        journal: SessionJournal,
        tick_interval: Duration,
    ) -> Self {
        Self {
            sim,
            prompter: Prompter::new(input, output),
            renderer: TerminalRenderer::new(),
            journal,
            tick_interval,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run the whole session: drawing, then simulating until the earthquake.
    pub fn run(&mut self) -> Result<Earthquake> {
        self.renderer.title(self.prompter.output())?;
        self.journal.record(&SessionEvent::SessionStarted {
            seed: self.sim.seed(),
            threshold: self.sim.threshold(),
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
        });

        self.draw_faults()?;
        self.simulate()
    }

    fn draw_faults(&mut self) -> Result<()> {
        loop {
            let out = self.prompter.output();
            writeln!(out, "Please choose a fault line shape to generate...")?;
            for choice in MenuChoice::ALL {
                writeln!(out, "{}: {}", choice.code(), choice.label())?;
            }

            let parsed = parse_menu_choice(self.prompter.read_line("ENTER: ")?);
            let choice = match parsed {
                Some(Some(choice)) => choice,
                Some(None) => {
                    self.redraw_faults()?;
                    self.notice("Invalid choice, try again.")?;
                    continue;
                }
                None => {
                    self.redraw_faults()?;
                    self.notice("Please enter one of the menu numbers.")?;
                    continue;
                }
            };

            let shape = match choice {
                MenuChoice::BeginSimulation => return Ok(()),
                other => self.ask_shape(other)?,
            };

            let marked = self.sim.draw(shape).unwrap_or(0);
            self.journal.record(&SessionEvent::ShapeDrawn {
                shape: shape.into(),
                cells_marked: marked,
            });

            self.redraw_faults()?;
            if marked == 0 {
                self.notice("That shape lies entirely outside the grid; nothing was drawn.")?;
            }
        }
    }

    fn ask_shape(&mut self, choice: MenuChoice) -> Result<Shape> {
        let (max_x, max_y) = (GRID_WIDTH - 1, GRID_HEIGHT - 1);
        let p = &mut self.prompter;

        let shape = match choice {
            MenuChoice::VerticalLine => {
                let x = p.ask_int(&format!(
                    "At what X location would you like to place this vertical line? (0-{max_x})\nENTER: "
                ))?;
                Shape::Vertical { x }
            }
            MenuChoice::HorizontalLine => {
                let y = p.ask_int(&format!(
                    "At what Y location would you like to place this horizontal line? (0-{max_y})\nENTER: "
                ))?;
                Shape::Horizontal { y }
            }
            MenuChoice::Circle => {
                let (cx, cy) = p.ask_pair(&format!(
                    "At what X,Y location would you like to place this circle? (0-{max_x}), (0-{max_y})\nENTER (format: x,y): "
                ))?;
                Shape::Circle { cx, cy }
            }
            MenuChoice::PointToPoint => {
                let (x1, y1) = p.ask_pair(&format!(
                    "Enter X,Y of start point (0-{max_x}), (0-{max_y}) (format: x,y): "
                ))?;
                let (x2, y2) = p.ask_pair(&format!(
                    "Enter X,Y of end point (0-{max_x}), (0-{max_y}) (format: x,y): "
                ))?;
                Shape::Segment { x1, y1, x2, y2 }
            }
            MenuChoice::BeginSimulation => bail!("begin simulation is not a shape"),
        };
        Ok(shape)
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        self.renderer.notice(self.prompter.output(), message)
    }

    fn redraw_faults(&mut self) -> Result<()> {
        self.renderer
            .fault_screen(self.prompter.output(), self.sim.grid())
    }

    fn simulate(&mut self) -> Result<Earthquake> {
        write!(self.prompter.output(), "\nBeginning simulation...\n\n")?;
        self.sim.begin();
        self.journal.record(&SessionEvent::SimulationStarted {
            fault_cells: self.sim.grid().fault_count(),
        });

        loop {
            match self.sim.tick() {
                TickOutcome::Calm { step, peak } => {
                    self.renderer.stress_frame(
                        self.prompter.output(),
                        step,
                        self.sim.grid(),
                        peak,
                        self.sim.threshold(),
                    )?;
                    self.journal.record(&SessionEvent::Tick { step, peak });
                }
                TickOutcome::Earthquake(quake) => {
                    self.renderer.stress_frame(
                        self.prompter.output(),
                        quake.step,
                        self.sim.grid(),
                        quake.peak,
                        self.sim.threshold(),
                    )?;
                    self.renderer.earthquake(self.prompter.output(), &quake)?;
                    self.journal.record(&SessionEvent::Earthquake {
                        step: quake.step,
                        peak: quake.peak,
                        epicentres: quake.epicentres.clone(),
                    });
                    self.journal.flush();
                    return Ok(quake);
                }
                TickOutcome::Idle => bail!("simulation stopped before an earthquake"),
            }

            if !self.tick_interval.is_zero() {
                thread::sleep(self.tick_interval);
            }
        }
    }
}
