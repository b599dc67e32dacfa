//! Logic Minimizer - Command Line Interface
//!
//! Minimizes a Boolean function given as a truth vector or a minterm list.

use clap::{Parser, ValueEnum};
use logic_minimizer::{
    Method, Minimizable, MinimizeError, MinimizerConfig, NormalForm, TruthTable, Variables,
};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::process;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    /// Quine-McCluskey with greedy cover (default)
    Consensus,
    /// Quine-McCluskey with coverage matrix and Petrick's method
    Tabular,
    /// Karnaugh map grouping (1 to 5 variables)
    Geometric,
}

impl From<MethodArg> for Method {
    fn from(val: MethodArg) -> Self {
        match val {
            MethodArg::Consensus => Method::Consensus,
            MethodArg::Tabular => Method::Tabular,
            MethodArg::Geometric => Method::Geometric,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormArg {
    /// Sum of products
    Sop,
    /// Product of sums
    Pos,
    /// Both forms
    Both,
}

impl FormArg {
    fn forms(self) -> &'static [NormalForm] {
        match self {
            FormArg::Sop => &[NormalForm::SumOfProducts],
            FormArg::Pos => &[NormalForm::ProductOfSums],
            FormArg::Both => &[NormalForm::SumOfProducts, NormalForm::ProductOfSums],
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "logic-min")]
#[command(about = "Two-level Boolean function minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// Variable names, most significant first (comma separated)
    #[arg(long, value_delimiter = ',', required = true)]
    vars: Vec<String>,

    /// Function value of every row in ascending binary order, e.g. 01110101
    #[arg(
        short = 't',
        long,
        conflicts_with = "minterms",
        required_unless_present = "minterms"
    )]
    table: Option<String>,

    /// Indices of the rows where the function is true (comma separated)
    #[arg(short = 'm', long, value_delimiter = ',')]
    minterms: Option<Vec<usize>>,

    /// Minimization method
    #[arg(short = 'M', long, value_enum, default_value = "consensus")]
    method: MethodArg,

    /// Normal form(s) to print
    #[arg(short = 'f', long, value_enum, default_value = "both")]
    form: FormArg,

    /// Use the tabular method when the Karnaugh map cannot be built
    #[arg(long)]
    fallback: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_results(table: &str) -> Result<Vec<bool>, String> {
    table
        .chars()
        .filter(|c| !c.is_whitespace())
        .enumerate()
        .map(|(i, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(format!(
                "Invalid truth table character {:?} at position {}",
                other, i
            )),
        })
        .collect()
}

fn results_from_minterms(minterms: &[usize], num_vars: usize) -> Result<Vec<bool>, String> {
    let size = u32::try_from(num_vars)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .ok_or_else(|| format!("Too many variables ({}) for a truth table", num_vars))?;
    let mut results = vec![false; size];
    for &m in minterms {
        if m >= size {
            return Err(format!(
                "Minterm {} out of range for {} variable(s) (max {})",
                m,
                num_vars,
                size - 1
            ));
        }
        results[m] = true;
    }
    Ok(results)
}

fn build_table(args: &Args) -> Result<TruthTable, String> {
    let variables = Variables::new(&args.vars).map_err(|e| e.to_string())?;
    let results = match (&args.table, &args.minterms) {
        (Some(table), _) => parse_results(table)?,
        (None, Some(minterms)) => results_from_minterms(minterms, variables.len())?,
        (None, None) => return Err("Either --table or --minterms is required".to_string()),
    };
    TruthTable::from_results(variables, &results).map_err(|e| e.to_string())
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    let table = match build_table(&args) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let config = MinimizerConfig {
        method: args.method.into(),
        geometric_fallback: args.fallback,
        ..Default::default()
    };
    log::info!(
        "Minimizing {} variable(s) with the {} method",
        table.num_vars(),
        config.method
    );

    for &form in args.form.forms() {
        let label = match form {
            NormalForm::SumOfProducts => "SOP",
            NormalForm::ProductOfSums => "POS",
        };
        match table.minimize_with_config(form, &config) {
            Ok(minimized) => println!("{}: {}", label, minimized),
            Err(e @ MinimizeError::UnsupportedVariableCount { .. }) => {
                eprintln!("Error: {} (try --fallback or another --method)", e);
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_results() {
        assert_eq!(
            parse_results("01 10").unwrap(),
            vec![false, true, true, false]
        );
    }

    #[test]
    fn test_parse_results_rejects_invalid_character() {
        let err = parse_results("01x1").unwrap_err();
        assert!(err.contains("'x'"));
        assert!(err.contains("position 2"));
    }

    #[test]
    fn test_results_from_minterms() {
        assert_eq!(
            results_from_minterms(&[1, 2, 2], 2).unwrap(),
            vec![false, true, true, false]
        );
    }

    #[test]
    fn test_results_from_minterms_out_of_range() {
        let err = results_from_minterms(&[0, 8], 3).unwrap_err();
        assert!(err.contains("Minterm 8"));
        assert!(err.contains("max 7"));
    }

    #[test]
    fn test_results_from_minterms_too_many_variables() {
        assert!(results_from_minterms(&[], usize::BITS as usize).is_err());
    }

    #[test]
    fn test_build_table_from_minterms() {
        let args = Args::parse_from(["logic-min", "--vars", "a,b", "--minterms", "3"]);
        let table = build_table(&args).unwrap();
        assert_eq!(table.minterms().len(), 1);

        let args = Args::parse_from(["logic-min", "--vars", "a,b", "--table", "011"]);
        assert!(build_table(&args).unwrap_err().contains("4 rows"));
    }
}
