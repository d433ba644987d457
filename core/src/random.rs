use rand::Rng;

/// Shuffles `items` in place with Fisher-Yates and hands the same slice back for chaining.
pub fn shuffle<'a, T, R: Rng>(items: &'a mut [T], rng: &mut R) -> &'a mut [T] {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
    items
}

/// Picks one element uniformly, `None` when there is nothing to pick from.
pub fn pick_random<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.random_range(0..items.len()))
}
