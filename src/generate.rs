//! Random sequence pairs for testing and benchmarking.
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::Sequence;

#[derive(ValueEnum, Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorModel {
    #[default]
    Uniform,
    /// Make a single gap (insertion or deletion) of size e*n.
    Gap,
    /// Delete a region of size e*n and insert it elsewhere.
    Move,
}

#[derive(Parser, Clone, Debug, Default, Serialize, Deserialize)]
pub struct GenerateArgs {
    /// The number of sequence pairs to generate
    #[clap(short = 'x', long, default_value_t = 1, display_order = 2)]
    pub cnt: usize,

    /// Length of generated sequences
    #[clap(short = 'n', long, display_order = 3)]
    pub length: Option<usize>,

    /// Fraction of the length that is mutated
    #[clap(short, long, default_value_t = 0.1, display_order = 4)]
    pub error_rate: f32,

    #[clap(
        long,
        value_enum,
        default_value_t,
        value_name = "MODEL",
        hide_short_help = true
    )]
    pub error_model: ErrorModel,

    /// Seed to initialize RNG for reproducability
    #[clap(long)]
    pub seed: Option<u64>,
}

impl GenerateArgs {
    /// `None` when no length was given.
    pub fn to_generate_options(&self) -> Option<GenerateOptions> {
        Some(GenerateOptions {
            length: self.length?,
            error_rate: self.error_rate,
            error_model: self.error_model,
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GenerateOptions {
    pub length: usize,
    pub error_rate: f32,
    pub error_model: ErrorModel,
}

const ALPH: [u8; 4] = [b'A', b'C', b'G', b'T'];

enum Mutation {
    // Replace char at pos.
    Substitution(usize, u8),
    // Insert char before pos.
    Insertion(usize, u8),
    // Delete char at pos.
    Deletion(usize),
}

fn rand_char(rng: &mut impl Rng) -> u8 {
    ALPH[rng.gen_range(0..4)]
}

fn random_mutation(len_b: usize, rng: &mut impl Rng) -> Mutation {
    // Substitution / insertion / deletion all with equal probability.
    // For length 0 sequences, only generate insertions.
    match if len_b == 0 {
        1
    } else {
        rng.gen_range(0..3usize)
    } {
        0 => Mutation::Substitution(rng.gen_range(0..len_b), rand_char(rng)),
        1 => Mutation::Insertion(rng.gen_range(0..len_b + 1), rand_char(rng)),
        2 => Mutation::Deletion(rng.gen_range(0..len_b)),
        _ => unreachable!(),
    }
}

/// A random sequence of the given length and a mutated copy of it.
pub fn generate_pair(opt: &GenerateOptions, rng: &mut impl Rng) -> (Sequence, Sequence) {
    let a = (0..opt.length).map(|_| rand_char(rng)).collect_vec();
    let num_mutations = ((opt.error_rate * opt.length as f32).ceil() as usize).min(opt.length);
    let mut b = a.clone();
    match opt.error_model {
        ErrorModel::Uniform => {
            for _ in 0..num_mutations {
                match random_mutation(b.len(), rng) {
                    Mutation::Substitution(i, c) => b[i] = c,
                    Mutation::Insertion(i, c) => b.insert(i, c),
                    Mutation::Deletion(i) => {
                        b.remove(i);
                    }
                }
            }
        }
        ErrorModel::Gap => {
            if rng.gen_bool(0.5) {
                // deletion
                let start = rng.gen_range(0..=b.len() - num_mutations);
                b.drain(start..start + num_mutations);
            } else {
                // insertion
                let start = rng.gen_range(0..=b.len());
                let text = (0..num_mutations).map(|_| rand_char(rng)).collect_vec();
                b.splice(start..start, text);
            }
        }
        ErrorModel::Move => {
            let start = rng.gen_range(0..=b.len() - num_mutations);
            let piece = b.drain(start..start + num_mutations).collect_vec();
            let start = rng.gen_range(0..=b.len());
            b.splice(start..start, piece);
        }
    }
    (a, b)
}

pub fn setup_sequences_with_seed(seed: u64, n: usize, e: f32) -> (Sequence, Sequence) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_pair(
        &GenerateOptions {
            length: n,
            error_rate: e,
            error_model: ErrorModel::Uniform,
        },
        &mut rng,
    )
}

// For quick testing
pub fn setup_sequences(n: usize, e: f32) -> (Sequence, Sequence) {
    setup_sequences_with_seed(31415, n, e)
}
