use log::debug;
use std::time::Instant;

use super::hash::sha256_hex;
use super::DIFFICULTY_PREFIX;

/// True iff SHA-256 of `"{last_proof}{proof}"` starts with [`DIFFICULTY_PREFIX`].
pub fn valid_proof(last_proof: u64, proof: u64) -> bool {
    let guess = format!("{last_proof}{proof}");
    sha256_hex(guess.as_bytes()).starts_with(DIFFICULTY_PREFIX)
}

/// Brute-force the first `proof >= 0` accepted by [`valid_proof`].
/// Runs to completion on the calling thread.
pub fn proof_of_work(last_proof: u64) -> u64 {
    let t0 = Instant::now();
    let mut proof: u64 = 0;
    while !valid_proof(last_proof, proof) {
        proof += 1;
    }
    debug!(
        "POW - last_proof={} -> proof={} ({} candidates, {} ms)",
        last_proof,
        proof,
        proof + 1,
        t0.elapsed().as_millis()
    );
    proof
}
