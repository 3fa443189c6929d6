use clap::Parser;
use itertools::Itertools;
use levenshtein_aligner::{
    cli::{AlignmentRecord, Cli, InputPair},
    *,
};
use log::info;
use std::{fmt::Display, ops::ControlFlow, time::Instant};

fn chars(s: Seq) -> Vec<char> {
    s.iter().map(|&c| c as char).collect()
}

/// Print the alignment of one pair, and return its distance and CIGAR string.
///
/// `la` and `lb` label the rows and columns of `--print-matrix`.
fn report<T: Eq, L: Display>(args: &Cli, l: &Levenshtein<T>, la: &[L], lb: &[L]) -> (Cost, String) {
    let script = l.edit_ops();
    let cigar = script.to_cigar();

    if args.json {
        let record = AlignmentRecord {
            distance: l.distance(),
            cigar: cigar.clone(),
            ops: script.into_ops(),
        };
        match serde_json::to_string(&record) {
            Ok(line) => println!("{line}"),
            Err(err) => log::error!("Could not serialize alignment: {err}"),
        }
    } else if args.silent == 0 {
        if args.print_matrix {
            print!("{}", MatrixTable::new(l.matrix(), la, lb));
        }
        if args.print_ops {
            print!("{}", OpsTable(&script));
        }
        println!("{}\t{cigar}", l.distance());
    }
    (l.distance(), cigar)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();
    let cm = args.costs.cost_model()?;
    info!("Costs: {cm:?}");

    let start = Instant::now();
    let mut results = vec![];
    let mut total: i64 = 0;
    let mut failure = None;

    args.process_input_pairs(|pair| {
        let aligned = match pair {
            InputPair::Chars(a, b) => Levenshtein::new(a, b, cm).map(|l| report(&args, &l, a, b)),
            InputPair::Bytes(a, b) => {
                Levenshtein::new(a, b, cm).map(|l| report(&args, &l, &chars(a), &chars(b)))
            }
        };
        match aligned {
            Ok((distance, cigar)) => {
                total += i64::from(distance);
                results.push((distance, cigar));
                ControlFlow::Continue(())
            }
            Err(err) => {
                failure = Some(err);
                ControlFlow::Break(())
            }
        }
    })?;
    if let Some(err) = failure {
        return Err(err.into());
    }

    info!("Aligned {} pairs in {:.3?}", results.len(), start.elapsed());
    if args.silent <= 1 && !args.json && results.len() > 1 {
        println!("pairs: {}\ttotal distance: {total}", results.len());
    }

    if let Some(output) = &args.output {
        std::fs::write(
            output,
            results
                .iter()
                .map(|(cost, cigar)| format!("{cost},{cigar}\n"))
                .join(""),
        )?;
    }
    Ok(())
}
