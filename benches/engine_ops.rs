use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_stack::core::{Engine, PieceQueue, PieceSource, Snapshot};
use tetris_stack::types::{Command, QUEUE_CAPACITY};

fn bench_play(c: &mut Criterion) {
    let mut engine = Engine::new(12345);

    c.bench_function("play", |b| {
        b.iter(|| {
            let _ = black_box(engine.execute(Command::Play));
        })
    });
}

fn bench_send_and_use(c: &mut Criterion) {
    let mut engine = Engine::new(12345);

    c.bench_function("send_then_use", |b| {
        b.iter(|| {
            let _ = black_box(engine.execute(Command::SendToStack));
            let _ = black_box(engine.execute(Command::UseReserved));
        })
    });
}

fn bench_swap_block(c: &mut Criterion) {
    let mut engine = Engine::new(12345);
    for _ in 0..3 {
        let _ = engine.execute(Command::SendToStack);
    }

    c.bench_function("swap_block", |b| {
        b.iter(|| {
            let _ = black_box(engine.execute(Command::SwapBlock));
        })
    });
}

fn bench_queue_cycle(c: &mut Criterion) {
    let mut queue: PieceQueue<QUEUE_CAPACITY> = PieceQueue::filled(PieceSource::new(12345));

    c.bench_function("dequeue_enqueue", |b| {
        b.iter(|| {
            let _ = black_box(queue.dequeue());
            let _ = black_box(queue.enqueue());
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = Engine::new(12345);
    let mut snap = Snapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            engine.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_play,
    bench_send_and_use,
    bench_swap_block,
    bench_queue_cycle,
    bench_snapshot
);
criterion_main!(benches);
