//! # qmc-rs: Quine–McCluskey minimization in Rust
//!
//! **`qmc-rs`** computes the *minimal disjunctive normal forms* (MDNFs) of boolean functions
//! and draws them as Veitch (Karnaugh) diagrams.
//!
//! ## What is an MDNF?
//!
//! A boolean function in disjunctive normal form is a sum of products, e.g. `ABC' + ABC + A'C`.
//! Among all such forms of the same function, the minimal ones use the fewest literals in total.
//! A function may have several MDNFs; all of them are returned.
//! Input combinations marked as *don't-care* may be covered or not, whichever is cheaper.
//!
//! ## Key Features
//!
//! - **Bitmask Implicants**: Product terms are pairs of `u64` words, so functions of up to 64 variables are supported and all term operations are a handful of bit tricks.
//! - **Exact**: Prime implicants are generated with the Quine–McCluskey method, essential ones are extracted, and the rest of the cover is found by exhaustive search, ties included.
//! - **Deterministic**: Every set of terms is canonically ordered, so results do not depend on input order.
//! - **Veitch Diagrams**: Functions of up to five variables can be laid out on a grid and rendered as text, with labels and contours around the terms.
//!
//! ## Basic Usage
//!
//! ```rust
//! use qmc_rs::dnf::Dnf;
//! use qmc_rs::qmc::minimize;
//!
//! // 1. Parse the function (the variable count is inferred: A, B, C)
//! let (f, n) = Dnf::parse("ABC'+ABC+AB'C+A'BC+A'B'C", None).unwrap();
//! assert_eq!(n, 3);
//!
//! // 2. Minimize it without don't-cares
//! let mdnfs = minimize(n, &f, &Dnf::new()).unwrap();
//!
//! // 3. There is a single MDNF with three literals
//! assert_eq!(mdnfs.len(), 1);
//! let mdnf = mdnfs.first().unwrap();
//! assert_eq!(mdnf.literal_count(), 3);
//! assert_eq!(mdnf.to_literal_string(n).unwrap(), "AB+C");
//! ```
//!
//! Minterms can be given by index too, here with don't-cares:
//!
//! ```rust
//! use qmc_rs::dnf::Dnf;
//! use qmc_rs::qmc::minimize;
//!
//! let (f, n) = Dnf::parse_indices("0,1,2,3,4,5,6,10,14", None).unwrap();
//! let (dont_care, _) = Dnf::parse_indices("7,11,15", Some(n)).unwrap();
//! let mdnfs = minimize(n, &f, &dont_care).unwrap();
//! assert_eq!(mdnfs.first().unwrap().to_literal_string(n).unwrap(), "A'+C");
//! ```
//!
//! ## Core Components
//!
//! - **[`implicant`]**: The [`Implicant`][crate::implicant::Implicant] value type and its operators.
//! - **[`dnf`]**: Canonically ordered sets of implicants, with parsing and printing.
//! - **[`qmc`]**: The minimization engine.
//! - **[`veitch`]** and **[`render`]**: Diagram layout and text rendering.

pub mod bitset;
pub mod combination;
pub mod dnf;
pub mod error;
pub mod implicant;
pub mod qmc;
pub mod render;
pub mod types;
pub mod veitch;

pub use error::{Error, Result};
