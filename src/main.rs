use crate::options::Args;
use clap::Parser;
use varsum::process;
use varsum::session::{Session, Status};

mod options {
    use std::path::PathBuf;

    #[derive(Debug, clap::Parser)]
    #[clap(name = "varsum", about = "A tool to summarize a seller transaction export by variant code")]
    pub struct Args {
        /// The `.xlsx` transaction export; only its first sheet is read.
        pub file: PathBuf,
        /// The directory the summary workbook is written into.
        #[clap(long, short = 'o', default_value = ".")]
        pub out_dir: PathBuf,
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();
    let mut session = Session::new(args.out_dir);
    println!("{}", session.select(Some(args.file)));
    println!("{}", Status::Busy);
    match session.run(process::Options::default()) {
        Status::Failed { message } => anyhow::bail!("{message}"),
        status => println!("{status}"),
    }
    Ok(())
}
