/// Fills `bytes` from JavaScript's Math.random
pub(crate) fn js_random_fill(bytes: &mut [u8]) {
    use js_sys::Math::random;
    bytes.fill_with(|| (256. * random()) as u8);
}
