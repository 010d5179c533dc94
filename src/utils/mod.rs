pub(crate) mod prng;

pub(crate) use prng::PRNG;
