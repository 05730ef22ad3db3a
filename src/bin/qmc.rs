use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use log::info;

use qmc_rs::dnf::Dnf;
use qmc_rs::qmc::minimize;
use qmc_rs::render::RenderConfig;
use qmc_rs::veitch::VeitchDiagram;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Minimize a logical function specified in a disjunctive normal form.
    Minimize {
        #[command(flatten)]
        input: Input,
    },

    /// Draw a Veitch diagram of a logical function. The function is minimized by default.
    Veitch {
        #[command(flatten)]
        input: Input,

        /// Do not minimize the function.
        #[arg(short = 'M', long)]
        no_minimize: bool,

        /// Do not draw cell borders.
        #[arg(short = 'b', long)]
        no_border: bool,

        /// Do not draw contours around the terms.
        #[arg(short = 'l', long)]
        no_loops: bool,

        /// Number of MDNFs to draw (0 draws all of them).
        #[arg(short, long, value_name = "INT", default_value = "1")]
        show: usize,

        /// Draw all MDNFs.
        #[arg(short = 'S', long)]
        show_all: bool,
    },
}

#[derive(Debug, Args)]
struct Input {
    /// Read the expression and don't-cares as comma-separated minterm indices.
    #[arg(short, long)]
    minterms: bool,

    /// Number of variables (inferred from the expression by default).
    #[arg(short = 'n', long, value_name = "INT")]
    variable_count: Option<u32>,

    /// Don't-care combinations: comma-separated terms, or indices with `--minterms`.
    #[arg(short, long, value_name = "LIST")]
    dont_care: Option<String>,

    /// The function, e.g. `ABC+ABC'+A'C`, or `0,1,5,10` with `--minterms`.
    #[arg(value_name = "EXPR")]
    expression: String,
}

impl Input {
    /// Parses the function and its don't-cares, returning them with the variable count.
    fn parse(&self) -> color_eyre::Result<(Dnf, Dnf, u32)> {
        let (dnf, n) = if self.minterms {
            Dnf::parse_indices(&self.expression, self.variable_count)
        } else {
            Dnf::parse(&self.expression, self.variable_count)
        }
        .wrap_err("Specified DNF is of illegal format")?;

        let dont_care = match &self.dont_care {
            None => Dnf::new(),
            Some(list) => {
                let parsed = if self.minterms {
                    Dnf::parse_indices(list, Some(n))
                } else {
                    Dnf::parse_delimited(list, ',', Some(n))
                };
                parsed.wrap_err("Illegal don't care combinations specified")?.0
            }
        };
        info!("Parsed {} terms and {} don't-care terms over {} variables", dnf.len(), dont_care.len(), n);
        Ok((dnf, dont_care, n))
    }
}

/// Textual MDNF, with `0` for the constant false and `1` for the constant true function.
fn format_mdnf(mdnf: &Dnf, n: u32) -> qmc_rs::Result<String> {
    if mdnf.is_empty() {
        Ok("0".to_string())
    } else if mdnf.iter().any(|term| term.mask() == 0) {
        Ok("1".to_string())
    } else {
        mdnf.to_literal_string(n)
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    info!("args = {:?}", args);

    let time_total = Instant::now();

    match args.command {
        Command::Minimize { input } => {
            let (dnf, dont_care, n) = input.parse()?;
            let mdnfs = minimize(n, &dnf, &dont_care)?;
            println!("The following MDNFs have been found:");
            for (i, mdnf) in mdnfs.iter().enumerate() {
                println!("{}. {}", i + 1, format_mdnf(mdnf, n)?);
            }
        }
        Command::Veitch {
            input,
            no_minimize,
            no_border,
            no_loops,
            show,
            show_all,
        } => {
            let (dnf, dont_care, n) = input.parse()?;
            let mut dnfs: Vec<Dnf> = if no_minimize {
                vec![dnf]
            } else {
                minimize(n, &dnf, &dont_care)?.into_iter().collect()
            };
            if dnfs.is_empty() {
                dnfs.push(Dnf::new());
            }

            let count = if show_all || show == 0 { dnfs.len() } else { show };
            let config = RenderConfig {
                draw_borders: !no_border,
                draw_contours: !no_loops,
                draw_labels: true,
            };
            for dnf in dnfs.iter().take(count) {
                info!("Drawing {}", dnf.to_literal_string(n)?);
                let diagram = VeitchDiagram::build(n, dnf, &dont_care, false)?;
                println!("{}", diagram.render_with_config(&config));
            }
        }
    }

    info!("All done in {:.3} s", time_total.elapsed().as_secs_f64());
    Ok(())
}
