use anyhow::{bail, Context};
use bio::io::fasta;
use clap::{value_parser, Parser};
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    ops::ControlFlow,
    path::{Path, PathBuf},
};

use crate::{
    cost_model::{Cost, CostModel},
    generate::{generate_pair, GenerateArgs},
    EditOp, Seq,
};

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(author, about, disable_version_flag(true))]
pub struct Cli {
    /// The source sequence. Requires TARGET.
    #[clap(requires = "target", display_order = 0)]
    pub source: Option<String>,

    /// The target sequence.
    #[clap(display_order = 0)]
    pub target: Option<String>,

    /// A .seq, .txt, or Fasta file with sequence pairs to align.
    #[clap(short, long, value_parser = value_parser!(PathBuf), conflicts_with = "source", display_order = 1)]
    pub input: Option<PathBuf>,

    /// Write a .csv of `{cost},{cigar}` lines
    #[clap(short, long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub output: Option<PathBuf>,

    /// Costs of the edit operations.
    #[clap(flatten, next_help_heading = "Costs")]
    pub costs: CostArgs,

    /// Print the distance matrix of each pair.
    #[clap(long)]
    pub print_matrix: bool,

    /// Print the table of edit operations of each pair.
    #[clap(long)]
    pub print_ops: bool,

    /// Print one JSON object per pair.
    #[clap(long, conflicts_with_all = ["print_matrix", "print_ops"])]
    pub json: bool,

    /// Print less. Pass twice to also drop the summary line.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub silent: u8,

    /// Options to generate an input pair.
    #[clap(flatten, next_help_heading = "Generated input")]
    pub generate: GenerateArgs,
}

#[derive(Parser, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CostArgs {
    /// Cost of inserting a target symbol.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub ins: Cost,

    /// Cost of deleting a source symbol.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub del: Cost,

    /// Cost of substituting a source symbol by a target symbol.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub sub: Cost,
}

impl CostArgs {
    pub fn cost_model(&self) -> crate::Result<CostModel> {
        CostModel::new(self.ins, self.del, self.sub)
    }
}

/// One pair of sequences to align.
///
/// Positional arguments are aligned per Unicode scalar value, so that `é` is
/// a single symbol. Files and generated input are aligned per byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPair<'a> {
    Chars(&'a [char], &'a [char]),
    Bytes(Seq<'a>, Seq<'a>),
}

/// The result for one pair, as printed with `--json`.
#[derive(Serialize, Deserialize, Debug)]
pub struct AlignmentRecord {
    pub distance: Cost,
    pub cigar: String,
    pub ops: Vec<EditOp>,
}

impl Cli {
    /// Call the given function for each pair in the input.
    pub fn process_input_pairs(
        &self,
        mut run_pair: impl FnMut(InputPair) -> ControlFlow<()>,
    ) -> anyhow::Result<()> {
        if let (Some(a), Some(b)) = (&self.source, &self.target) {
            let a = a.chars().collect_vec();
            let b = b.chars().collect_vec();
            if let ControlFlow::Break(()) = run_pair(InputPair::Chars(&a, &b)) {
                log::debug!("Stopped after the positional pair");
            }
            return Ok(());
        }

        if let Some(input) = &self.input {
            let files = if input.is_file() {
                vec![input.clone()]
            } else {
                input
                    .read_dir()
                    .with_context(|| format!("{} is not a file or directory", input.display()))?
                    .map(|x| x.map(|e| e.path()))
                    .collect::<Result<Vec<_>, _>>()?
            };

            for f in files {
                if let ControlFlow::Break(()) = process_file(&f, &mut run_pair)? {
                    break;
                }
            }
            return Ok(());
        }

        let Some(opt) = self.generate.to_generate_options() else {
            bail!("Pass SOURCE and TARGET, -i/--input <file>, or -n/--length to generate input.");
        };
        let seed = self.generate.seed.unwrap_or_else(|| {
            let seed = ChaCha8Rng::from_entropy().gen_range(0..1_000);
            log::info!("Seed: {seed}");
            seed
        });
        let rng = &mut ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..self.generate.cnt {
            let (a, b) = generate_pair(&opt, rng);
            if let ControlFlow::Break(()) = run_pair(InputPair::Bytes(&a, &b)) {
                break;
            }
        }
        Ok(())
    }
}

fn process_file(
    f: &Path,
    run_pair: &mut impl FnMut(InputPair) -> ControlFlow<()>,
) -> anyhow::Result<ControlFlow<()>> {
    let Some(ext) = f.extension().and_then(|ext| ext.to_str()) else {
        bail!("{} has no file extension", f.display());
    };
    let reader = BufReader::new(File::open(f).with_context(|| format!("opening {}", f.display()))?);
    log::info!("Reading pairs from {}", f.display());
    match ext {
        "seq" | "txt" => {
            let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;
            for (a, b) in lines.iter().tuples() {
                let (a, b) = if ext == "seq" {
                    match (a.strip_prefix('>'), b.strip_prefix('<')) {
                        (Some(a), Some(b)) => (a, b),
                        _ => bail!("{}: .seq pairs must start with '>' and '<'", f.display()),
                    }
                } else {
                    (a.as_str(), b.as_str())
                };
                let pair = InputPair::Bytes(a.as_bytes(), b.as_bytes());
                if let ControlFlow::Break(()) = run_pair(pair) {
                    return Ok(ControlFlow::Break(()));
                }
            }
        }
        "fna" | "fa" | "fasta" => {
            for (a, b) in fasta::Reader::new(reader).records().tuples() {
                let (a, b) = (a?, b?);
                if let ControlFlow::Break(()) = run_pair(InputPair::Bytes(a.seq(), b.seq())) {
                    return Ok(ControlFlow::Break(()));
                }
            }
        }
        ext => bail!("Unknown file extension {ext:?}. Must be in {{seq,txt,fna,fa,fasta}}."),
    }
    Ok(ControlFlow::Continue(()))
}
