//! Integration test: walkers crossing a shared board.
//!
//! Two groups walk toward opposite edges through the same rows while a
//! broadcast ticker flushes into a recorder. Every walker must finish,
//! the board must end empty, and the recorder's picture must agree.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use plaza_agents::{Mover, MoverTiming, RiskDecider, SafeDecider, WalkReport, Walker, WalkerConfig};
use plaza_board::{Board, BoardConfig};
use plaza_broadcast::{BroadcastAgent, BroadcastTicker, Recorder, TickerConfig};
use plaza_core::{Note, Position};
use plaza_planner::{DownPlanner, UpPlanner};
use plaza_test_utils::CapturingListener;

const SIZE: u32 = 16;
const PER_GROUP: usize = 4;

fn config() -> WalkerConfig {
    WalkerConfig {
        blocked_pause: Duration::from_millis(1),
        max_stalls: Some(500),
    }
}

fn timing() -> MoverTiming {
    MoverTiming {
        arrive_pause: Duration::from_micros(200),
        axis_move_pause: Duration::from_micros(400),
        diagonal_move_pause: Duration::from_micros(600),
    }
}

#[test]
fn opposing_groups_cross_and_clear_the_board() {
    let roster = BoardConfig::groups(0, &[PER_GROUP, PER_GROUP]);
    let board = Arc::new(Board::new(BoardConfig::new(SIZE, SIZE).with_roster(roster)).unwrap());
    let recorder = Arc::new(Recorder::new());
    let picture = CapturingListener::new();
    recorder.register_listener(picture.clone());
    board.register_listener(recorder.clone());

    let ticker = BroadcastTicker::spawn(
        BroadcastAgent::new(board.board_proxy()),
        TickerConfig {
            interval: Duration::from_millis(2),
        },
    )
    .unwrap();
    let stop = Arc::new(AtomicBool::new(false));
    let bounds = board.bounds();
    let last_row = SIZE as i32 - 1;

    let reports: Vec<WalkReport> = thread::scope(|s| {
        let mut handles = Vec::new();
        for i in 0..PER_GROUP as i32 {
            let x = 2 + i * 3;
            // Group 0 heads up with the safe decider.
            let mover = Mover::with_timing(i, Arc::clone(&board), timing());
            let mut up = Walker::new(mover, UpPlanner::new(0, bounds), SafeDecider, config())
                .with_stop_flag(Arc::clone(&stop));
            handles.push(s.spawn(move || up.walk(Position::new(x, last_row)).unwrap()));

            // Group 1 heads down, one column over, with the risk decider.
            let id = PER_GROUP as i32 + i;
            let mover = Mover::with_timing(id, Arc::clone(&board), timing());
            let mut down =
                Walker::new(mover, DownPlanner::new(last_row, bounds), RiskDecider, config())
                    .with_stop_flag(Arc::clone(&stop));
            handles.push(s.spawn(move || down.walk(Position::new(x + 1, 0)).unwrap()));
        }
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    ticker.stop();

    assert_eq!(reports.len(), PER_GROUP * 2);
    for report in &reports {
        assert!(report.reached_end, "walker did not finish: {report:?}");
    }
    for x in 0..SIZE as i32 {
        for y in 0..SIZE as i32 {
            assert_eq!(board.note_at(Position::new(x, y)).unwrap(), Note::VACANT);
        }
    }
    // Everyone left, so the recorder's picture is empty but still lists
    // every box.
    assert!(recorder.occupied().is_empty());
    assert!(picture.drops().is_empty());
    assert_eq!(picture.boxes().len(), PER_GROUP * 2);
}
