use bipartite_match::{bipartite_match, MatchParams, Matches};

const ROWS: usize = 64;
const COLS: usize = 48;
const N: usize = 100;

fn main() -> bipartite_match::Result<()> {
    tracing_subscriber::fmt::init();

    let mut matches = Matches::default();
    let mut total_distance = 0.;
    let mut total_matches = 0;
    for _ in 0..N {
        let distances = nalgebra::DMatrix::<f64>::new_random(ROWS, COLS);
        bipartite_match(&distances, MatchParams::default().with_top_k(32), &mut matches)?;
        total_distance += matches.pairs().map(|a| distances[a]).sum::<f64>();
        total_matches += matches.len();
    }

    println!("matches: {total_matches}, total: {total_distance}");
    Ok(())
}
