use crate::{Tile, MAX_PIP};

/// A pip value from 0 to 6.
#[derive(Clone, Copy, Debug)]
pub struct Pip(pub u8);

impl quickcheck::Arbitrary for Pip {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Pip(u8::arbitrary(g) % (MAX_PIP + 1))
    }
}

impl quickcheck::Arbitrary for Tile {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Tile::new(Pip::arbitrary(g).0, Pip::arbitrary(g).0)
    }
}
