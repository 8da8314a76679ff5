#![forbid(unsafe_code)]

use dm_storage::SqliteStore;
use dm_sync::{Reconciler, RunReport, SyncConfig, failure_json};

fn usage() -> &'static str {
    "dm_sync — mirror a directory of markdown files into the documents table\n\n\
USAGE:\n\
  dm_sync\n\n\
ENVIRONMENT:\n\
  DOCMIRROR_DOCS_DIR     source directory (default ./docs)\n\
  DOCMIRROR_STORAGE_DIR  directory holding docmirror.db (default ./storage)\n\n\
NOTES:\n\
  - One complete pass per invocation; scheduling belongs to the caller.\n\
  - Success prints a JSON report on stdout; failure prints a JSON error on\n\
    stderr and exits non-zero. A failed run claims nothing about how far it\n\
    got — re-run to converge.\n"
}

fn main() {
    let mut args = std::env::args().skip(1);
    if let Some(arg) = args.next() {
        if arg == "--help" || arg == "-h" {
            print!("{}", usage());
            return;
        }
        eprintln!("unexpected argument: {arg}\n\n{}", usage());
        std::process::exit(2);
    }

    let cfg = SyncConfig::from_env();
    match run(&cfg) {
        Ok(report) => println!("{}", report.to_json_pretty()),
        Err(err) => {
            eprintln!("{}", failure_json(&err));
            std::process::exit(1);
        }
    }
}

fn run(cfg: &SyncConfig) -> Result<RunReport, Box<dyn std::error::Error>> {
    // The store handle lives exactly as long as this scope and is closed on
    // every exit path, early error returns included.
    let mut store = SqliteStore::open(&cfg.storage_dir)?;
    let report = Reconciler::new(&cfg.docs_dir).run(&mut store)?;
    Ok(report)
}
