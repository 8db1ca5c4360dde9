//! # radixvec
//!
//! A persistent (immutable) vector for Rust, backed by a bit-partitioned
//! radix balanced tree.
//!
//! ## Overview
//!
//! [`RadixVector`] is an immutable indexed sequence: every update operation
//! (appending, popping, overwriting a position) returns a new vector while
//! leaving the original untouched. The new and old vectors share the bulk of
//! their internal tree, so updates are cheap in both time and memory:
//!
//! - O(log32 N) random access (effectively O(1) for practical sizes)
//! - O(log32 N) `push_back`, `pop_back`, and `update`
//! - O(N / 32) tree surgery for batched appends via `extend_from_slice`
//! - O(1) `len`, `is_empty`, and `clone`
//!
//! All nodes are shared through atomic reference counts, so vectors can be
//! handed to other threads and read concurrently without any locking.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` implementations for [`RadixVector`]
//!
//! ## Example
//!
//! ```rust
//! use radixvec::RadixVector;
//!
//! let vector: RadixVector<i32> = (0..100).collect();
//! assert_eq!(vector.get(50), Some(&50));
//!
//! // Structural sharing: the original vector is preserved
//! let updated = vector.update(50, 999).unwrap();
//! assert_eq!(vector.get(50), Some(&50));
//! assert_eq!(updated.get(50), Some(&999));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: proptest generates large arrays in property tests for nested types
#![cfg_attr(test, allow(clippy::large_stack_arrays))]

mod vector;

pub use vector::RadixVector;
pub use vector::RadixVectorBlockIterator;
pub use vector::RadixVectorIntoIterator;
pub use vector::RadixVectorIterator;
