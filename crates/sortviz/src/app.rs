#![forbid(unsafe_code)]

//! Event loop wiring: input thread, driver task, renderer, and the
//! narration worker.
//!
//! All work runs on the tokio runtime with explicit suspension points: the
//! driver task suspends between steps, the narration worker suspends on its
//! HTTP call. The UI loop selects over input, emitted steps, narration
//! text, and driver completion, so the app stays responsive (and keeps
//! rejecting conflicting requests) while an animation runs.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::{JoinError, JoinHandle};
use tracing::{info, warn};

use sortviz_core::array::VALUE_CEILING;
use sortviz_core::highlight::HighlightMap;
use sortviz_core::session::SortSession;
use sortviz_core::step::{Algorithm, Step, StepDescriptor};
use sortviz_engine::{StepEmitter, run_sort};
use sortviz_explain::{ExplainTransport, HttpTransport, Narrator};
use sortviz_render::{BarChart, Rect};

/// Rows above the chart: title and config line.
const CHROME_ROWS: u16 = 2;
/// Rows below the chart: status and narration lines.
const FOOTER_ROWS: u16 = 2;

const DELAY_STEP: Duration = Duration::from_millis(100);
const DELAY_MIN: Duration = Duration::from_millis(100);
const DELAY_MAX: Duration = Duration::from_millis(2000);

const TITLE: &str =
    "sortviz   1-5 sort   g generate   +/- size   [/] speed   n narration   q quit";

/// Everything the select loop can wake up on.
enum LoopEvent {
    Input(Event),
    InputClosed,
    Step(Step),
    Narration(String),
    SortDone(Result<Vec<u32>, JoinError>),
}

/// Map an algorithm key to its driver.
fn algorithm_for_key(c: char) -> Option<Algorithm> {
    match c {
        '1' => Some(Algorithm::Bubble),
        '2' => Some(Algorithm::Selection),
        '3' => Some(Algorithm::Insertion),
        '4' => Some(Algorithm::Merge),
        '5' => Some(Algorithm::Quick),
        _ => None,
    }
}

/// One delay notch up or down, clamped to the supported range.
fn step_delay(current: Duration, faster: bool) -> Duration {
    let next = if faster {
        current.saturating_sub(DELAY_STEP)
    } else {
        current.saturating_add(DELAY_STEP)
    };
    next.clamp(DELAY_MIN, DELAY_MAX)
}

/// Chart rectangle for a terminal of `width` x `height` cells.
fn chart_area(width: u16, height: u16) -> Rect {
    Rect::new(
        0,
        CHROME_ROWS,
        width,
        height.saturating_sub(CHROME_ROWS + FOOTER_ROWS),
    )
}

/// Await the active sort task, or park forever when none is running.
async fn await_sort(active: &mut Option<JoinHandle<Vec<u32>>>) -> Result<Vec<u32>, JoinError> {
    match active {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    }
}

fn spawn_input_thread(tx: UnboundedSender<Event>) {
    thread::spawn(move || {
        while let Ok(event) = crossterm::event::read() {
            if tx.send(event).is_err() {
                break;
            }
        }
    });
}

/// Consume step descriptors sequentially and post narration text back.
///
/// Narration may lag behind the bar chart; the animation never waits on it.
fn spawn_narration_worker<T>(
    narrator: Narrator<T>,
    mut descriptors: UnboundedReceiver<StepDescriptor>,
    texts: UnboundedSender<String>,
) where
    T: ExplainTransport + Send + Sync + 'static,
{
    tokio::spawn(async move {
        while let Some(descriptor) = descriptors.recv().await {
            let text = narrator.explain(&descriptor).await;
            if texts.send(text).is_err() {
                break;
            }
        }
    });
}

/// The visualizer application.
pub struct App {
    session: SortSession,
    explain_url: String,
    chart: BarChart,
    term: (u16, u16),
    /// Snapshot and highlights of the most recently rendered step.
    last_frame: Option<(Vec<u32>, HighlightMap)>,
    /// Requested array size; tracked separately so +/- survives rejections.
    desired_size: usize,
    status: String,
    narration: String,
    should_quit: bool,
}

impl App {
    pub fn new(session: SortSession, explain_url: String) -> io::Result<Self> {
        let term = crossterm::terminal::size()?;
        let desired_size = session.len();
        Ok(Self {
            session,
            explain_url,
            chart: BarChart::new(),
            term,
            last_frame: None,
            desired_size,
            status: "Press 1-5 to run a sort.".to_string(),
            narration: String::new(),
            should_quit: false,
        })
    }

    pub async fn run<W: Write>(mut self, out: &mut W) -> io::Result<()> {
        let (input_tx, mut input_rx) = mpsc::unbounded_channel();
        spawn_input_thread(input_tx);

        let (step_tx, mut step_rx) = mpsc::unbounded_channel::<Step>();
        let (desc_tx, desc_rx) = mpsc::unbounded_channel::<StepDescriptor>();
        let (text_tx, mut text_rx) = mpsc::unbounded_channel::<String>();

        let narrator = Narrator::new(
            HttpTransport::new(self.explain_url.clone()),
            self.session.narration(),
        );
        spawn_narration_worker(narrator, desc_rx, text_tx);

        let mut active: Option<JoinHandle<Vec<u32>>> = None;
        self.redraw(out)?;

        loop {
            let event = tokio::select! {
                maybe = input_rx.recv() => match maybe {
                    Some(input) => LoopEvent::Input(input),
                    None => LoopEvent::InputClosed,
                },
                Some(step) = step_rx.recv() => LoopEvent::Step(step),
                Some(text) = text_rx.recv() => LoopEvent::Narration(text),
                result = await_sort(&mut active) => LoopEvent::SortDone(result),
            };

            match event {
                LoopEvent::Input(input) => self.on_input(out, input, &mut active, &step_tx)?,
                LoopEvent::InputClosed => break,
                LoopEvent::Step(step) => self.on_step(out, step, &desc_tx)?,
                LoopEvent::Narration(text) => {
                    self.narration = text;
                    self.draw_narration(out)?;
                }
                LoopEvent::SortDone(result) => {
                    // Render whatever frames the driver queued before it
                    // finished, so the final state is never skipped.
                    while let Ok(step) = step_rx.try_recv() {
                        self.on_step(out, step, &desc_tx)?;
                    }
                    active = None;
                    self.on_sort_done(out, result)?;
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn on_input<W: Write>(
        &mut self,
        out: &mut W,
        event: Event,
        active: &mut Option<JoinHandle<Vec<u32>>>,
        step_tx: &UnboundedSender<Step>,
    ) -> io::Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.on_key(out, key, active, step_tx)
            }
            Event::Resize(width, height) => {
                self.term = (width, height);
                self.redraw(out)
            }
            _ => Ok(()),
        }
    }

    fn on_key<W: Write>(
        &mut self,
        out: &mut W,
        key: KeyEvent,
        active: &mut Option<JoinHandle<Vec<u32>>>,
        step_tx: &UnboundedSender<Step>,
    ) -> io::Result<()> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                Ok(())
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                Ok(())
            }
            KeyCode::Char('g') => self.regenerate(out, self.desired_size),
            KeyCode::Char('+') | KeyCode::Char('=') => self.regenerate(out, self.desired_size + 1),
            KeyCode::Char('-') => self.regenerate(out, self.desired_size.saturating_sub(1)),
            KeyCode::Char('[') => self.adjust_delay(out, true),
            KeyCode::Char(']') => self.adjust_delay(out, false),
            KeyCode::Char('n') => {
                let on = self.session.narration().toggle();
                self.status = if on {
                    "Narration on.".to_string()
                } else {
                    "Narration off.".to_string()
                };
                self.draw_info(out)?;
                self.draw_status(out)
            }
            KeyCode::Char(c) => match algorithm_for_key(c) {
                Some(algorithm) => self.start_sort(out, algorithm, active, step_tx),
                None => Ok(()),
            },
            _ => Ok(()),
        }
    }

    fn regenerate<W: Write>(&mut self, out: &mut W, size: usize) -> io::Result<()> {
        match self.session.regenerate(size, || fastrand::u32(..VALUE_CEILING)) {
            Ok(()) => {
                self.desired_size = size;
                self.last_frame = None;
                self.narration.clear();
                self.status = format!("Generated a fresh array of {size} values.");
                self.redraw(out)
            }
            Err(err) => {
                warn!(error = %err, "generate rejected");
                self.status = err.to_string();
                self.draw_status(out)
            }
        }
    }

    fn adjust_delay<W: Write>(&mut self, out: &mut W, faster: bool) -> io::Result<()> {
        let next = step_delay(self.session.delay().current(), faster);
        match self.session.set_delay(next) {
            Ok(()) => {
                self.status = format!("Delay set to {} ms.", next.as_millis());
            }
            Err(err) => {
                warn!(error = %err, "delay change rejected");
                self.status = err.to_string();
            }
        }
        self.draw_info(out)?;
        self.draw_status(out)
    }

    fn start_sort<W: Write>(
        &mut self,
        out: &mut W,
        algorithm: Algorithm,
        active: &mut Option<JoinHandle<Vec<u32>>>,
        step_tx: &UnboundedSender<Step>,
    ) -> io::Result<()> {
        match self.session.try_begin() {
            Ok((permit, values)) => {
                info!(algorithm = algorithm.name(), "starting sort");
                let emitter = StepEmitter::new(step_tx.clone(), self.session.delay());
                *active = Some(tokio::spawn(run_sort(algorithm, values, emitter, permit)));
                self.status = format!("Running {algorithm}...");
                self.draw_status(out)
            }
            Err(err) => {
                warn!(algorithm = algorithm.name(), error = %err, "sort rejected");
                self.status = "Sorting is already in progress.".to_string();
                self.draw_status(out)
            }
        }
    }

    fn on_step<W: Write>(
        &mut self,
        out: &mut W,
        step: Step,
        descriptors: &UnboundedSender<StepDescriptor>,
    ) -> io::Result<()> {
        // Narration is best-effort and decoupled; a closed worker is fine.
        let _ = descriptors.send(step.descriptor());

        let (width, height) = self.term;
        self.chart
            .draw(out, chart_area(width, height), &step.snapshot, &step.highlights)?;
        self.last_frame = Some((step.snapshot, step.highlights));
        Ok(())
    }

    fn on_sort_done<W: Write>(
        &mut self,
        out: &mut W,
        result: Result<Vec<u32>, JoinError>,
    ) -> io::Result<()> {
        match result {
            Ok(sorted) => {
                self.session.finish(sorted);
                self.status = "Done. The array is sorted.".to_string();
            }
            Err(err) => {
                // The permit was released when the task was torn down; the
                // session keeps its pre-run values.
                warn!(error = %err, "sort task failed");
                self.status = "Sort task failed; showing the last rendered state.".to_string();
            }
        }
        self.draw_info(out)?;
        self.draw_status(out)
    }

    fn redraw<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        queue!(out, Clear(ClearType::All))?;
        self.draw_title(out)?;
        self.draw_info(out)?;

        let (width, height) = self.term;
        let (snapshot, highlights) = match &self.last_frame {
            Some((snapshot, highlights)) => (snapshot.clone(), highlights.clone()),
            None => (self.session.values().to_vec(), HighlightMap::new()),
        };
        self.chart
            .draw(out, chart_area(width, height), &snapshot, &highlights)?;

        self.draw_status(out)?;
        self.draw_narration(out)
    }

    fn draw_title<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.draw_line(out, 0, TITLE)
    }

    fn draw_info<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let info = format!(
            "size {}   delay {} ms   narration {}",
            self.session.len(),
            self.session.delay().current().as_millis(),
            if self.session.narration().enabled() {
                "on"
            } else {
                "off"
            },
        );
        self.draw_line(out, 1, &info)
    }

    fn draw_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let row = self.term.1.saturating_sub(2);
        self.draw_line(out, row, &self.status)
    }

    fn draw_narration<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let row = self.term.1.saturating_sub(1);
        self.draw_line(out, row, &self.narration)
    }

    fn draw_line<W: Write>(&self, out: &mut W, row: u16, text: &str) -> io::Result<()> {
        let clipped: String = text.chars().take(self.term.0 as usize).collect();
        queue!(
            out,
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            Print(clipped)
        )?;
        out.flush()
    }
}
