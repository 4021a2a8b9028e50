use bipartite_match::{distance_matrix, MatchParams, Matches};
use tracing_subscriber::EnvFilter;

fn main() -> bipartite_match::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // three predictions against two ground truth boxes, last row is padding
    #[rustfmt::skip]
    let distances = distance_matrix(&[3, 2], &[
        0.3, 0.7,
        0.9, 0.2,
        0.0, 0.0,
    ])?;
    let params = MatchParams::from_valid_rows_input(&[2.0f32], -1)?;

    let matches = Matches::compute(&distances, params)?;
    for (row, col) in matches.pairs() {
        println!("row {row} -> col {col} ({})", distances[(row, col)]);
    }
    println!("row_to_col: {:?}", matches.row_to_col());
    println!("col_to_row: {:?}", matches.col_to_row());
    Ok(())
}
