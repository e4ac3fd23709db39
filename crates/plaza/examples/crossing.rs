//! Headless crossing demo.
//!
//! Two groups of boxes cross a board in opposite directions while a
//! broadcast ticker flushes into a recorder. A text renderer prints the
//! occupied cells every few flushes.
//!
//! Run with `RUST_LOG=plaza=debug` (or `info`, the default) to see the
//! board's own logging.

use std::fmt::Write as _;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use plaza::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

const WIDTH: u32 = 24;
const HEIGHT: u32 = 12;
const PER_GROUP: usize = 5;
const PRINT_EVERY: usize = 10;

/// Prints the recorder's picture as a character grid.
struct TextRenderer {
    width: u32,
    height: u32,
    frames: Mutex<usize>,
}

impl TextRenderer {
    fn glyph(note: Note) -> char {
        match note.phase {
            Phase::ToArrive => '+',
            Phase::Arrive => char::from_digit(note.box_id.0 as u32 % 36, 36).unwrap_or('#'),
            Phase::ToLeave => '-',
            Phase::Left => '.',
        }
    }
}

impl RecorderListener for TextRenderer {
    fn receive_all_drops_all_boxes(
        &self,
        drops: &DropBatch,
        boxes: &BoxRoster,
    ) -> Result<(), ObserverError> {
        let mut frames = self.frames.lock();
        *frames += 1;
        if *frames % PRINT_EVERY != 0 {
            return Ok(());
        }
        let mut out = String::new();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let glyph = drops
                    .get(&Position::new(x, y))
                    .map_or('.', |d| Self::glyph(d.note));
                out.push(glyph);
            }
            out.push('\n');
        }
        let levels: u64 = boxes.values().map(BoxInfo::level).sum();
        writeln!(out, "frame {} | occupied {} | total level {levels}", *frames, drops.len())
            .map_err(|e| ObserverError::Rejected {
                reason: e.to_string(),
            })?;
        println!("{out}");
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let roster = BoardConfig::groups(0, &[PER_GROUP, PER_GROUP]);
    let board = Arc::new(Board::new(BoardConfig::new(WIDTH, HEIGHT).with_roster(roster))?);

    let recorder = Arc::new(Recorder::new());
    recorder.register_listener(Arc::new(TextRenderer {
        width: WIDTH,
        height: HEIGHT,
        frames: Mutex::new(0),
    }));
    board.register_listener(recorder);

    let ticker = BroadcastTicker::spawn(
        BroadcastAgent::new(board.board_proxy()),
        TickerConfig::default(),
    )?;

    let stop = Arc::new(AtomicBool::new(false));
    let bounds = board.bounds();
    let bottom = HEIGHT as i32 - 1;
    let walker_config = WalkerConfig {
        max_stalls: Some(200),
        ..WalkerConfig::default()
    };

    let reports = thread::scope(|s| -> Result<Vec<WalkReport>, WalkError> {
        let mut handles = Vec::new();
        for i in 0..PER_GROUP as i32 {
            let x = 2 + i * 4;

            let mover = Mover::new(i, Arc::clone(&board));
            let mut up = Walker::new(mover, UpPlanner::new(0, bounds), SafeDecider, walker_config)
                .with_stop_flag(Arc::clone(&stop));
            handles.push(s.spawn(move || up.walk(Position::new(x, bottom))));

            let id = PER_GROUP as i32 + i;
            let goal = Position::new(WIDTH as i32 - 1 - x, bottom);
            let mover = Mover::new(id, Arc::clone(&board));
            let planner = StepPlanner::seeded(goal, bounds, id as u64);
            let mut step = Walker::new(mover, planner, RiskDecider, walker_config)
                .with_stop_flag(Arc::clone(&stop));
            handles.push(s.spawn(move || step.walk(Position::new(x + 1, 0))));
        }
        let mut reports = Vec::new();
        for handle in handles {
            // A panicking walker thread is a bug in the demo; surface it.
            match handle.join() {
                Ok(report) => reports.push(report?),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        Ok(reports)
    })?;

    let flushes = ticker.stop();
    let arrived = reports.iter().filter(|r| r.reached_end).count();
    let moves: u32 = reports.iter().map(|r| r.moves).sum();
    let stalls: u32 = reports.iter().map(|r| r.stalls).sum();
    info!(arrived, walkers = reports.len(), moves, stalls, flushes, "crossing finished");
    Ok(())
}
