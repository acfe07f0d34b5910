use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use sokoban_grid::{Direction, LevelCatalog};

const PUZZLES: &[(&str, &str)] = &[
    ("puzzle_0", r#"
####
#PC#
####
"#),
    ("puzzle_1", r#"
######
#PC X#
######
"#),
    ("puzzle_2", r#"
########
# PC  X#
# C  C #
# X# C #
#XX#   #
########
"#),
    ("puzzle_3", r#"
       ####
########  ##
#          ###
# PCC ##   XX#
# CC   ##  XX#
#         ####
###########
"#),
];

// Walks a fixed loop so both successful and refused moves are measured.
const MOVE_SCRIPT: &[Direction] = &[
    Direction::East, Direction::East, Direction::South, Direction::West,
    Direction::North, Direction::West, Direction::South, Direction::East,
];

fn catalog_text() -> String {
    PUZZLES
        .iter()
        .map(|(_, puzzle)| puzzle.trim_start_matches('\n'))
        .collect::<Vec<_>>()
        .join(";\n")
}

pub fn bench_decode_catalog(c: &mut Criterion) {
    let text = catalog_text();
    let mut group = c.benchmark_group("decode_catalog");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("all_puzzles", |b| {
        b.iter(|| LevelCatalog::decode(black_box(&text)))
    });
    group.finish();
}

pub fn bench_move_script(c: &mut Criterion) {
    let catalog = LevelCatalog::decode(&catalog_text());
    let mut group = c.benchmark_group("move_script");
    group.throughput(Throughput::Elements(MOVE_SCRIPT.len() as u64));

    for (index, &(puzzle_name, _)) in PUZZLES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("step", puzzle_name), &index, |b, &index| {
            b.iter_with_setup(
                || catalog.select_level(index).expect("puzzle index is in the catalog"),
                |mut grid| {
                    for &direction in MOVE_SCRIPT {
                        black_box(grid.move_player(direction));
                    }
                    grid
                },
            );
        });
    }
    group.finish();
}

pub fn bench_game_won(c: &mut Criterion) {
    let catalog = LevelCatalog::decode(&catalog_text());
    let mut group = c.benchmark_group("game_won");

    for (index, &(puzzle_name, _)) in PUZZLES.iter().enumerate() {
        let grid = catalog.select_level(index).expect("puzzle index is in the catalog");
        group.bench_with_input(BenchmarkId::new("scan", puzzle_name), &grid, |b, grid| {
            b.iter(|| black_box(grid.game_won()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode_catalog, bench_move_script, bench_game_won);
criterion_main!(benches);
