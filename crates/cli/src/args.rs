//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use std::path::PathBuf;

use blast_client::Program;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "webblast")]
#[command(about = "Submit and retrieve NCBI BLAST searches from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  webblast blastn query.fasta\n  webblast megablast contig.fasta --db refseq_rna --evalue 1e-20\n  webblast blastp protein.fasta --bg\n  webblast status 7WD3KUT2014 --monitor\n  webblast get 7WD3KUT2014 --outfmt 1 --out report.txt\n  webblast list --tsv\n"
)]
pub struct Cli {
    /// Base URL of the BLAST service
    #[arg(
        short,
        long,
        global = true,
        env = "BLAST_BASE_URL",
        default_value = blast_client::client::DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// Suppress all progress output (spinners).
    ///
    /// Note: progress indicators always write to STDERR; this flag disables them entirely.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Nucleotide query against a nucleotide database
    Blastn(SubmitArgs),

    /// Protein query against a protein database
    Blastp(SubmitArgs),

    /// Translated nucleotide query against a protein database
    Blastx(SubmitArgs),

    /// Protein query against a translated nucleotide database
    Tblastn(SubmitArgs),

    /// Translated nucleotide query against a translated nucleotide database
    Tblastx(SubmitArgs),

    /// Fast nucleotide search for highly similar sequences
    Megablast(SubmitArgs),

    /// Query the status of a submitted job
    Status {
        /// Request identifier printed at submission time
        rid: String,

        /// Keep polling until the job finishes, then retrieve its results
        #[arg(long)]
        monitor: bool,

        #[command(flatten)]
        retrieve: RetrieveArgs,
    },

    /// Retrieve the results of a finished job.
    ///
    /// Checks the job status first (one extra request); a job that is
    /// not READY fails with exit code 3 (unknown) or 4 (failed).
    Get {
        /// Request identifier printed at submission time
        rid: String,

        #[command(flatten)]
        retrieve: RetrieveArgs,
    },

    /// List the recent jobs tied to the saved session
    List {
        /// Tab-separated output instead of fixed-width columns
        #[arg(long)]
        tsv: bool,
    },
}

impl Commands {
    /// The search program a submission subcommand stands for.
    pub fn program(&self) -> Option<Program> {
        match self {
            Commands::Blastn(_) => Some(Program::Blastn),
            Commands::Blastp(_) => Some(Program::Blastp),
            Commands::Blastx(_) => Some(Program::Blastx),
            Commands::Tblastn(_) => Some(Program::Tblastn),
            Commands::Tblastx(_) => Some(Program::Tblastx),
            Commands::Megablast(_) => Some(Program::Megablast),
            _ => None,
        }
    }
}

/// Arguments shared by the six submission subcommands.
#[derive(Args)]
pub struct SubmitArgs {
    /// File containing the query sequence (FASTA or bare sequence)
    pub query: PathBuf,

    /// Database to search (default: nt for nucleotide programs, nr for protein)
    #[arg(long = "db")]
    pub database: Option<String>,

    /// Expect-value cutoff (e.g. 1e-20), passed through verbatim
    #[arg(long)]
    pub evalue: Option<String>,

    /// Submit, print the RID, and exit without waiting for the job
    #[arg(long)]
    pub bg: bool,

    /// Do not load or save the session cookie jar
    #[arg(long)]
    pub no_cache: bool,

    #[command(flatten)]
    pub retrieve: RetrieveArgs,
}

/// Arguments shared by every path that retrieves a result document.
#[derive(Args)]
pub struct RetrieveArgs {
    /// Output format: 1 = plain text, 6 = tabular
    #[arg(long, default_value_t = 6)]
    pub outfmt: u32,

    /// Write results to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Keep roughly this many records per result section
    #[arg(short = 'n', long = "limit")]
    pub limit: Option<usize>,
}
