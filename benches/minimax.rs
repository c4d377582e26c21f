use criterion::{black_box, criterion_group, criterion_main, Criterion};
use game_ai::games::tictactoe::TicTacToeGame;
use game_ai::minimax::{MinimaxSearch, SearchConfig};

fn started(size: usize) -> TicTacToeGame {
    let mut game = TicTacToeGame::with_size(size);
    game.reset(1).unwrap();
    game
}

fn benchmark_minimax(c: &mut Criterion) {
    let mut group = c.benchmark_group("Minimax");
    group.sample_size(10);

    let empty = started(3);
    group.bench_function("empty_3x3_unlimited", |b| {
        b.iter(|| {
            let mut search = MinimaxSearch::new(SearchConfig::default().unlimited().with_seed(1));
            black_box(search.find_best_move(black_box(&empty)).unwrap());
        });
    });

    let midgame = TicTacToeGame::from_rows(&[vec![1, 0, 0], vec![0, 2, 0], vec![0, 0, 0]]);
    group.bench_function("midgame_3x3_unlimited", |b| {
        b.iter(|| {
            let mut search = MinimaxSearch::new(SearchConfig::default().unlimited().with_seed(1));
            black_box(search.find_best_move(black_box(&midgame)).unwrap());
        });
    });

    let large = started(4);
    for depth in [0, 1, 2] {
        group.bench_function(format!("empty_4x4_depth_{}", depth), |b| {
            b.iter(|| {
                let mut search =
                    MinimaxSearch::new(SearchConfig::default().with_max_depth(depth).with_seed(1));
                black_box(search.find_best_move(black_box(&large)).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_minimax);
criterion_main!(benches);
