mod block;
mod galois;
mod poly;

pub(crate) use block::{ecc, interleave};
