//! Quine–McCluskey minimization.
//!
//! [`minimize`] computes every minimal disjunctive normal form (MDNF) of a boolean
//! function given as a sum of products plus an optional set of don't-care terms.
//! The work is split into four phases:
//!
//! 1. **Canonicalization** ([`to_minterms`]): every term is expanded into the full
//!    minterms it covers.
//! 2. **Prime implicants** ([`prime_implicants`]): minterms are merged pairwise,
//!    generation after generation, until nothing combines any more. Terms that did
//!    not combine in a round are prime.
//! 3. **Essential implicants** ([`essential_implicants`]): a prime that is the only
//!    cover of some required minterm belongs to every MDNF.
//! 4. **Cover search**: the remaining required minterms are covered by trying
//!    combinations of the non-essential primes in increasing size, keeping every
//!    cover with the fewest literals.
//!
//! Don't-care minterms take part in phase 2 but are never required to be covered.
//!
//! # Examples
//!
//! ```
//! use qmc_rs::dnf::Dnf;
//! use qmc_rs::qmc::minimize;
//!
//! let (f, n) = Dnf::parse("ABC'+ABC+AB'C+A'BC+A'B'C", None).unwrap();
//! let mdnfs = minimize(n, &f, &Dnf::new()).unwrap();
//! assert_eq!(mdnfs.len(), 1);
//! let mdnf = mdnfs.first().unwrap();
//! assert_eq!(mdnf.to_literal_string(n).unwrap(), "AB+C");
//! ```

use std::collections::BTreeSet;

use log::{debug, trace};
use num_bigint::BigUint;

use crate::bitset::BitSet;
use crate::combination::{binomial, Combinations};
use crate::dnf::Dnf;
use crate::error::{Error, Result};
use crate::implicant::{full_mask, Implicant};
use crate::types::MAX_VARIABLES;

/// Configuration of the minimization engine.
///
/// # Examples
///
/// ```
/// use qmc_rs::qmc::MinimizeConfig;
///
/// let config = MinimizeConfig {
///     max_combinations: Some(1_000_000),
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct MinimizeConfig {
    /// Maximum number of combinations the cover search may test (default: unbounded)
    pub max_combinations: Option<u64>,
}

/// Computes all minimal DNFs of the `n`-variable function `dnf` with don't-cares
/// `dont_care`, using the default configuration.
///
/// See [`minimize_with_config`].
pub fn minimize(n: u32, dnf: &Dnf, dont_care: &Dnf) -> Result<BTreeSet<Dnf>> {
    minimize_with_config(n, dnf, dont_care, &MinimizeConfig::default())
}

/// Computes all minimal DNFs of the `n`-variable function `dnf` with don't-cares
/// `dont_care`.
///
/// Terms of either set may be arbitrary implicants; they are expanded into
/// minterms first. A minterm that appears in both sets is a don't-care.
///
/// # Returns
///
/// The set of all covers with the minimal total number of literals. The set is
/// empty when both `dnf` and `dont_care` are empty. When every minterm is a
/// don't-care, the only MDNF is the empty DNF.
///
/// # Errors
///
/// - [`Error::IllegalVariableCount`] if `n` is zero or exceeds [`MAX_VARIABLES`];
/// - [`Error::ImplicantOutOfRange`] if a term uses a variable outside of `n`;
/// - [`Error::SearchLimitExceeded`] if the cover search hits `config.max_combinations`.
pub fn minimize_with_config(n: u32, dnf: &Dnf, dont_care: &Dnf, config: &MinimizeConfig) -> Result<BTreeSet<Dnf>> {
    debug!(
        "minimize(n = {}, {} terms, {} don't-care terms)",
        n,
        dnf.len(),
        dont_care.len()
    );

    check_variable_count(n)?;
    if dnf.is_empty() && dont_care.is_empty() {
        debug!("minimize: empty function, no MDNF");
        return Ok(BTreeSet::new());
    }

    let minterms = to_minterms(n, dnf)?;
    let dont_care = to_minterms(n, dont_care)?;
    debug!("minimize: {} minterms, {} don't-care minterms", minterms.len(), dont_care.len());

    let mut domain = minterms.clone();
    domain.extend(&dont_care);
    let primes = prime_implicants(&domain);

    let required: Dnf = minterms.iter().filter(|m| !dont_care.contains(m)).copied().collect();
    let (essentials, remaining) = essential_implicants(&primes, &required);

    if remaining.is_empty() {
        debug!("minimize: essential implicants cover the function");
        return Ok(BTreeSet::from([essentials]));
    }

    search_covers(&primes, essentials, &remaining, config)
}

fn check_variable_count(n: u32) -> Result<()> {
    if n == 0 || n > MAX_VARIABLES {
        return Err(Error::IllegalVariableCount { count: n });
    }
    Ok(())
}

/// Expands every term of `dnf` into the minterms of an `n`-variable function it covers.
///
/// A term missing some variables is split into the two terms obtained by fixing the
/// lowest missing variable to 0 and to 1, until all terms are minterms.
///
/// # Errors
///
/// [`Error::IllegalVariableCount`] for an illegal `n` and
/// [`Error::ImplicantOutOfRange`] if a term uses a variable outside of `n`.
pub fn to_minterms(n: u32, dnf: &Dnf) -> Result<Dnf> {
    check_variable_count(n)?;
    let full = full_mask(n);

    let mut minterms = Dnf::new();
    let mut worklist: Vec<Implicant> = Vec::new();
    for &term in dnf {
        if !term.fits(n) {
            return Err(Error::ImplicantOutOfRange { implicant: term, count: n });
        }
        worklist.push(term);
        while let Some(term) = worklist.pop() {
            let missing = full & !term.mask();
            if missing == 0 {
                minterms.insert(term);
                continue;
            }
            let bit = missing.trailing_zeros();
            worklist.push(term.with_variable(bit, false));
            worklist.push(term.with_variable(bit, true));
        }
    }
    Ok(minterms)
}

/// Computes the prime implicants of the function whose minterms are `minterms`.
///
/// Each round merges all combinable pairs of the current generation into the next
/// one; members of a generation that merged with nothing are prime. The iteration
/// stops at the first round without merges, whose members are all prime.
pub fn prime_implicants(minterms: &Dnf) -> Dnf {
    let mut primes = Dnf::new();
    // Canonical order groups equal masks together
    let mut generation: Vec<Implicant> = minterms.iter().copied().collect();
    let mut round = 0;

    loop {
        let mut next = Dnf::new();
        let mut combined = vec![false; generation.len()];

        let mut start = 0;
        while start < generation.len() {
            let mask = generation[start].mask();
            let end = start + generation[start..].iter().take_while(|t| t.mask() == mask).count();
            for i in start..end {
                for j in i + 1..end {
                    if let Some(merged) = generation[i].merge(&generation[j]) {
                        next.insert(merged);
                        combined[i] = true;
                        combined[j] = true;
                    }
                }
            }
            start = end;
        }

        let before = primes.len();
        primes.extend(generation.iter().zip(&combined).filter(|&(_, &used)| !used).map(|(&t, _)| t));
        trace!(
            "prime_implicants: round {}: {} implicants, {} new primes, {} merged",
            round,
            generation.len(),
            primes.len() - before,
            next.len()
        );

        if next.is_empty() {
            break;
        }
        generation = next.into_iter().collect();
        round += 1;
    }

    debug!("prime_implicants: {} primes after {} rounds", primes.len(), round + 1);
    primes
}

/// Extracts the essential implicants among `primes` for the minterms `required`.
///
/// A prime is essential if it is the only one covering some required minterm. Every
/// minterm covered by an essential implicant is dropped, and the scan restarts since
/// this can make other primes essential.
///
/// Returns the essential implicants and the required minterms they leave uncovered.
pub fn essential_implicants(primes: &Dnf, required: &Dnf) -> (Dnf, Dnf) {
    let mut essentials = Dnf::new();
    let mut remaining = required.clone();

    while let Some(essential) = remaining.iter().find_map(|m| sole_cover(primes, m)) {
        trace!("essential_implicants: {:?} is essential", essential);
        essentials.insert(essential);
        remaining = remaining.iter().filter(|m| !essential.implied_by(m)).copied().collect();
    }

    debug!(
        "essential_implicants: {} essential, {} minterms left",
        essentials.len(),
        remaining.len()
    );
    (essentials, remaining)
}

/// The prime covering `minterm`, if there is exactly one.
fn sole_cover(primes: &Dnf, minterm: &Implicant) -> Option<Implicant> {
    let mut covering = primes.iter().filter(|p| p.implied_by(minterm));
    match (covering.next(), covering.next()) {
        (Some(&p), None) => Some(p),
        _ => None,
    }
}

/// Returns whether every minterm of `minterms` is covered by some term of `dnf`.
pub fn is_cover(dnf: &Dnf, minterms: &Dnf) -> bool {
    minterms.iter().all(|m| dnf.covers(m))
}

/// Exhaustive search for the cheapest covers of `remaining`.
fn search_covers(primes: &Dnf, essentials: Dnf, remaining: &Dnf, config: &MinimizeConfig) -> Result<BTreeSet<Dnf>> {
    // Primes covering no remaining minterm can only add literals
    let candidates: Vec<Implicant> = primes
        .iter()
        .filter(|p| !essentials.contains(p) && remaining.iter().any(|m| p.implied_by(m)))
        .copied()
        .collect();

    let coverage: Vec<BitSet> = candidates
        .iter()
        .map(|p| {
            let mut covered = BitSet::new(remaining.len());
            for (i, m) in remaining.iter().enumerate() {
                if p.implied_by(m) {
                    covered.insert(i);
                }
            }
            covered
        })
        .collect();

    let search_space = (BigUint::from(1u32) << candidates.len()) - 1u32;
    debug!(
        "search_covers: {} candidates for {} minterms, at most {} combinations",
        candidates.len(),
        remaining.len(),
        search_space
    );

    let mut results = BTreeSet::new();
    let mut best: Option<u32> = None;
    let mut tested: u64 = 0;
    let mut covered = BitSet::new(remaining.len());

    for k in 1..=candidates.len() {
        // A k-subset has at least k literals
        if best.is_some_and(|b| k as u32 > b) {
            break;
        }
        trace!("search_covers: k = {}, {} combinations", k, binomial(candidates.len(), k));

        let mut combinations = Combinations::new(candidates.len(), k);
        while let Some(indices) = combinations.next_combination() {
            tested += 1;
            if let Some(limit) = config.max_combinations {
                if tested > limit {
                    return Err(Error::SearchLimitExceeded { limit });
                }
            }

            let literals: u32 = indices.iter().map(|&i| candidates[i].variable_count()).sum();
            if best.is_some_and(|b| literals > b) {
                continue;
            }

            covered.clear();
            for &i in indices {
                covered.union_with(&coverage[i]);
            }
            if !covered.is_full() {
                continue;
            }

            if best != Some(literals) {
                trace!("search_covers: new best of {} literals", literals);
                best = Some(literals);
                results.clear();
            }
            let mut mdnf = essentials.clone();
            mdnf.extend(indices.iter().map(|&i| candidates[i]));
            results.insert(mdnf);
        }
    }

    debug!(
        "search_covers: {} MDNFs with {} extra literals after {} combinations",
        results.len(),
        best.unwrap_or(0),
        tested
    );
    Ok(results)
}
