//! Engine-level properties: refill, id uniqueness, atomic failures, swap order.

use tetris_stack::core::{Engine, EngineError, OutcomeKind, PieceRule, SimpleRng, Snapshot};
use tetris_stack::types::{Command, RefillPolicy, QUEUE_CAPACITY, STACK_CAPACITY};

fn queue_ids(snap: &Snapshot) -> Vec<u32> {
    snap.queue_ids().collect()
}

fn stack_ids(snap: &Snapshot) -> Vec<u32> {
    snap.stack_ids().collect()
}

/// Deterministic pseudo-random command stream.
fn command_stream(seed: u32, len: usize) -> Vec<Command> {
    let mut rng = SimpleRng::new(seed);
    (0..len)
        .map(|_| Command::ALL[rng.next_range(Command::ALL.len() as u32) as usize])
        .collect()
}

#[test]
fn test_initial_state() {
    let engine = Engine::new(2024);
    let snap = engine.snapshot();
    assert_eq!(queue_ids(&snap), vec![0, 1, 2, 3, 4]);
    assert!(snap.stack.is_empty());
    assert_eq!(snap.next_id, QUEUE_CAPACITY as u32);
}

#[test]
fn test_queue_stays_full_under_auto_refill() {
    for seed in [1, 7, 99, 12345] {
        let mut engine = Engine::new(seed);
        for command in command_stream(seed, 500) {
            let _ = engine.execute(command);
            assert!(engine.queue().len() <= QUEUE_CAPACITY);
            assert!(engine.stack().len() <= STACK_CAPACITY);
            assert!(engine.queue().is_full(), "queue not full after {:?}", command);
        }
    }
}

#[test]
fn test_ids_are_unique_and_increasing() {
    let mut engine = Engine::with_options(77, PieceRule::Bag, RefillPolicy::Auto);
    let mut generated: Vec<u32> = engine.queue().iter().map(|p| p.id).collect();

    for command in command_stream(77, 1000) {
        if let Ok(outcome) = engine.execute(command) {
            // The refill piece is the only freshly generated one.
            if matches!(outcome.kind, OutcomeKind::Played | OutcomeKind::Sent) {
                if let Some(refill) = outcome.pieces.get(1) {
                    generated.push(refill.id);
                }
            }
        }
    }

    assert!(generated.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(*generated.last().unwrap() + 1, engine.snapshot().next_id);

    let snap = engine.snapshot();
    let mut live: Vec<u32> = snap.queue_ids().chain(snap.stack_ids()).collect();
    live.sort_unstable();
    live.dedup();
    assert_eq!(live.len(), snap.queue.len() + snap.stack.len());
}

#[test]
fn test_failures_leave_state_unchanged() {
    let mut engine = Engine::new(5);

    // Empty stack: use / swap / block swap fail.
    for (command, err) in [
        (Command::UseReserved, EngineError::StackEmpty),
        (Command::SwapTop, EngineError::StackEmpty),
        (Command::SwapBlock, EngineError::InsufficientStackDepth),
        (Command::Insert, EngineError::QueueFull),
    ] {
        let before = engine.snapshot();
        assert_eq!(engine.execute(command), Err(err));
        assert_eq!(engine.snapshot(), before);
    }

    // Full stack: send fails.
    for _ in 0..STACK_CAPACITY {
        engine.execute(Command::SendToStack).unwrap();
    }
    let before = engine.snapshot();
    assert_eq!(engine.execute(Command::SendToStack), Err(EngineError::StackFull));
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_consecutive_plays_shift_queue() {
    let mut engine = Engine::new(31337);
    let original: Vec<_> = engine.queue().iter().copied().collect();

    let n = 3;
    for _ in 0..n {
        engine.execute(Command::Play).unwrap();
    }

    let now: Vec<_> = engine.queue().iter().copied().collect();
    assert_eq!(&now[..QUEUE_CAPACITY - n], &original[n..]);
    let appended: Vec<u32> = now[QUEUE_CAPACITY - n..].iter().map(|p| p.id).collect();
    assert_eq!(appended, vec![5, 6, 7]);
}

#[test]
fn test_three_sends_from_fresh_queue() {
    let mut engine = Engine::new(8);
    for _ in 0..3 {
        engine.execute(Command::SendToStack).unwrap();
    }
    let snap = engine.snapshot();
    assert_eq!(stack_ids(&snap), vec![2, 1, 0]);
    assert_eq!(queue_ids(&snap), vec![3, 4, 5, 6, 7]);
}

#[test]
fn test_swap_block_mirrors_both_sides() {
    let mut engine = Engine::new(8);
    for _ in 0..3 {
        engine.execute(Command::SendToStack).unwrap();
    }
    // Make the queue front differ from a plain shift.
    engine.execute(Command::Play).unwrap();

    let before = engine.snapshot();
    let (a, b, c) = (before.queue[0], before.queue[1], before.queue[2]);
    let (x, y, z) = (before.stack[0], before.stack[1], before.stack[2]);

    engine.execute(Command::SwapBlock).unwrap();
    let after = engine.snapshot();
    assert_eq!(&after.queue[..3], &[z, y, x]);
    assert_eq!(&after.stack[..3], &[c, b, a]);
    assert_eq!(&after.queue[3..], &before.queue[3..]);
    assert_eq!(after.next_id, before.next_id);
}

#[test]
fn test_swap_top_does_not_generate() {
    let mut engine = Engine::new(8);
    engine.execute(Command::SendToStack).unwrap();
    let before = engine.snapshot();

    let outcome = engine.execute(Command::SwapTop).unwrap();
    let after = engine.snapshot();
    assert_eq!(after.next_id, before.next_id);
    assert_eq!(after.queue[0], before.stack[0]);
    assert_eq!(after.stack[0], before.queue[0]);
    assert_eq!(outcome.pieces.as_slice(), &[before.queue[0], before.stack[0]]);
}

#[test]
fn test_capacity_bound() {
    let mut engine = Engine::new(3);
    for _ in 0..STACK_CAPACITY {
        engine.execute(Command::SendToStack).unwrap();
    }
    assert!(engine.stack().is_full());
    let before = engine.snapshot();
    assert_eq!(engine.execute(Command::SendToStack), Err(EngineError::StackFull));
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_manual_refill_cycle() {
    let mut engine = Engine::with_options(3, PieceRule::Uniform, RefillPolicy::Manual);
    engine.execute(Command::Play).unwrap();
    engine.execute(Command::Play).unwrap();
    assert_eq!(engine.queue().len(), QUEUE_CAPACITY - 2);

    assert_eq!(engine.execute(Command::Insert).unwrap().pieces[0].id, 5);
    assert_eq!(engine.execute(Command::Insert).unwrap().pieces[0].id, 6);
    assert_eq!(engine.execute(Command::Insert), Err(EngineError::QueueFull));
    assert_eq!(queue_ids(&engine.snapshot()), vec![2, 3, 4, 5, 6]);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = Engine::new(4242);
    let mut b = Engine::new(4242);
    for command in command_stream(3, 200) {
        assert_eq!(a.execute(command), b.execute(command));
    }
    assert_eq!(a.snapshot(), b.snapshot());
}
