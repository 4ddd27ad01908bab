//! Benchmark utilities.

use rand::seq::SliceRandom;
use rand::Rng;

const VERBS: &[&str] = &["GET", "POST", "accepted", "rejected", "timeout", "connect"];
const DIRS: &[&str] = &["var", "log", "srv", "www", "data", "cache", "tmp"];

/// Generate one log-like line with an IP, a path, a number and a hash.
pub fn random_line<R: Rng>(rng: &mut R) -> String {
    let verb = VERBS.choose(rng).copied().unwrap_or("GET");
    let depth = rng.gen_range(1..4);
    let path: String = (0..depth)
        .map(|_| format!("/{}", DIRS.choose(rng).copied().unwrap_or("tmp")))
        .collect();

    format!(
        "{verb} {path}/file{} from 10.{}.{}.{} took {}ms rev {:012x}",
        rng.gen_range(0..100),
        rng.gen::<u8>(),
        rng.gen::<u8>(),
        rng.gen::<u8>(),
        rng.gen_range(10_000..1_000_000),
        rng.gen::<u64>() & 0xffff_ffff_ffff,
    )
}

/// Generate `count` log-like lines.
pub fn generate_lines(count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| random_line(&mut rng)).collect()
}
