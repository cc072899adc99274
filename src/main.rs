use std::{fs, io::Read};

use anyhow::{anyhow, bail, Context, Result};

use cnf_helper::{CnfOptions, Grammar, GrammarSpec};

const STAGES: [&str; 6] = ["eps", "unit", "reach", "gen", "bin", "cnf"];
const OUTPUTS: [&str; 2] = ["prod", "vars"];

fn print_help() {
    println!("Usage: cnf-helper [stages] outputs [options] [grammar file]");
    println!("stages (applied in the given order):");
    println!("  eps: Eliminate epsilon productions");
    println!("  unit: Eliminate unit productions");
    println!("  reach: Remove unreachable variables");
    println!("  gen: Remove unproductive variables");
    println!("  bin: Isolate terminals and binarize");
    println!("  cnf: All of the above, in order");
    println!("outputs:");
    println!("  prod: Productions");
    println!("  vars: Nullable, reachable, productive and unit closure per variable");
    println!("options:");
    println!("  -h: Print this help");
    println!("  -l: Print in LaTeX format");
    println!("  -j: Print in JSON format");
    println!("  -t PREFIX: Prefix of variables standing for a terminal (default T)");
    println!("  -x PREFIX: Prefix of variables splitting long productions (default X)");
    println!("The grammar is a JSON object with variables, terminals, start and productions.");
}

enum OutputFormat {
    Plain,
    LaTeX,
    JSON,
}

fn main() -> Result<()> {
    let args = std::env::args().skip(1).collect::<Vec<String>>();
    let mut i: usize = 0;

    let mut stages: Vec<&str> = Vec::new();
    while i < args.len() && STAGES.contains(&args[i].as_str()) {
        stages.push(args[i].as_str());
        i += 1;
    }
    let mut outputs: Vec<&str> = Vec::new();
    while i < args.len() && OUTPUTS.contains(&args[i].as_str()) {
        outputs.push(args[i].as_str());
        i += 1;
    }

    let mut output_format = OutputFormat::Plain;
    let mut options = CnfOptions::default();
    while i < args.len() && args[i].starts_with('-') {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            "-l" => output_format = OutputFormat::LaTeX,
            "-j" => output_format = OutputFormat::JSON,
            flag @ ("-t" | "-x") => {
                i += 1;
                let prefix = args
                    .get(i)
                    .cloned()
                    .ok_or_else(|| anyhow!("{} expects a prefix", flag))?;
                if flag == "-t" {
                    options.terminal_prefix = prefix;
                } else {
                    options.chain_prefix = prefix;
                }
            }
            other => bail!("unknown option {}", other),
        }
        i += 1;
    }

    if i + 1 < args.len() || outputs.is_empty() {
        print_help();
        return Ok(());
    }

    let input: String = if i == args.len() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read grammar from stdin")?;
        input
    } else {
        fs::read_to_string(&args[i]).with_context(|| format!("failed to read {}", args[i]))?
    };

    let spec: GrammarSpec = serde_json::from_str(&input).context("malformed grammar")?;
    let mut g = Grammar::from_spec(spec)?;

    for stage in stages {
        match stage {
            "eps" => g.eliminate_epsilon(),
            "unit" => g.eliminate_unit_productions(),
            "reach" => g.prune_unreachable(),
            "gen" => g.prune_unproductive(),
            "bin" => g.binarize(&options),
            _ => g.normalize_with(&options),
        }
    }

    for output in outputs {
        let text = if output == "prod" {
            match output_format {
                OutputFormat::Plain => g.to_production_output_vec().to_plaintext(),
                OutputFormat::LaTeX => g.to_production_output_vec().to_latex(),
                OutputFormat::JSON => serde_json::to_string(&g.to_spec())?,
            }
        } else {
            let t = g.to_variable_output_vec();
            match output_format {
                OutputFormat::Plain => t.to_plaintext(),
                OutputFormat::LaTeX => t.to_latex(),
                OutputFormat::JSON => t.to_json()?,
            }
        };
        println!("{}", text);
    }

    Ok(())
}
