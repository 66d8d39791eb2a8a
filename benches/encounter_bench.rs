//! Benchmarks for resolving whole encounters under the autopilot.

use std::hint::black_box;

use catastrophe_chronicles::combat::{run_encounter_for, AutoPilot, CombatSession};
use catastrophe_chronicles::entity::StatTable;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_duel(c: &mut Criterion) {
    let table = StatTable::builtin().expect("built-in roster");

    c.bench_function("duel_whiskerwall_viperstrike", |b| {
        b.iter(|| {
            let party = table.party(&["Whiskerwall"]).expect("party");
            let enemies = table.enemy_group(&["Viperstrike"]).expect("enemies");
            let mut session = CombatSession::new(party, enemies)
                .expect("session")
                .with_seed(black_box(42));
            let report = run_encounter_for(&mut session, &mut AutoPilot, Some(1_000));
            black_box(report)
        });
    });
}

fn bench_full_party(c: &mut Criterion) {
    let table = StatTable::builtin().expect("built-in roster");

    c.bench_function("party_of_three_vs_two", |b| {
        b.iter(|| {
            let party = table
                .party(&["Whiskerwall", "Purrception", "Meowdicine"])
                .expect("party");
            let enemies = table
                .enemy_group(&["Viperstrike", "Mistwalker"])
                .expect("enemies");
            let mut session = CombatSession::new(party, enemies)
                .expect("session")
                .with_seed(black_box(7));
            let report = run_encounter_for(&mut session, &mut AutoPilot, Some(1_000));
            black_box(report)
        });
    });
}

criterion_group!(benches, bench_duel, bench_full_party);
criterion_main!(benches);
