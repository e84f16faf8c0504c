use criterion::{criterion_group, criterion_main, Criterion, black_box};
use linechess::GameState;
use linechess::search::encoder::PositionEncoder;
use linechess::search::tt::PackedTable;
use linechess::search::StateEncoder;
use linechess::Outcome;

fn bench_encode(c: &mut Criterion) {
    let start = GameState::standard(8).unwrap();
    // a handful of positions a couple of plies in
    let mut states = vec![start.clone()];
    for &mv in start.moves() {
        let child = start.after(mv);
        for &reply in child.moves() { states.push(child.after(reply)); }
        states.push(child);
    }
    let compact = PositionEncoder::compact(8);
    let direct = PositionEncoder::direct(8);
    c.bench_function("encode_compact", |ben| {
        ben.iter(|| {
            let mut acc = 0usize;
            for s in &states { acc ^= compact.encode(black_box(s)); }
            black_box(acc)
        })
    });
    c.bench_function("encode_direct", |ben| {
        ben.iter(|| {
            let mut acc = 0usize;
            for s in &states { acc ^= direct.encode(black_box(s)); }
            black_box(acc)
        })
    });
}

fn bench_packed_table(c: &mut Criterion) {
    let n = PositionEncoder::compact(8).capacity();
    let mut table = PackedTable::new(n);
    c.bench_function("packed_table_set_get", |ben| {
        ben.iter(|| {
            let mut hits = 0usize;
            for i in (0..n).step_by(97) {
                table.set(i, Outcome::Draw);
                if table.get(black_box(i)).is_some() { hits += 1; }
            }
            black_box(hits)
        })
    });
}

criterion_group!(benches, bench_encode, bench_packed_table);
criterion_main!(benches);
