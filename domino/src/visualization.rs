use crate::{Chain, Tile};

/// Tiles shown on each side of the `...` when the chain gets long.
const SHOWN_AT_EACH_END: usize = 3;

/// Renders the chain on one line, e.g. `[5, 6][6, 2]`.
pub fn render_chain(chain: &Chain) -> String {
    render_line_of_tiles(&chain.iter().collect::<Vec<_>>())
}

/// Renders tiles on one line, left to right.
///
/// More than six tiles are shortened to the first and last three.
pub fn render_line_of_tiles(tiles: &[Tile]) -> String {
    if tiles.len() > 2 * SHOWN_AT_EACH_END {
        let head = concat(&tiles[..SHOWN_AT_EACH_END]);
        let tail = concat(&tiles[tiles.len() - SHOWN_AT_EACH_END..]);
        format!("{}...{}", head, tail)
    } else {
        concat(tiles)
    }
}

fn concat(tiles: &[Tile]) -> String {
    tiles.iter().map(|tile| tile.to_string()).collect()
}
