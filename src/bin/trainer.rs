//! Trainer Binary
//!
//! Trains a strategy on the reference game, evaluating it at regular
//! intervals, then estimates exploitability and optionally persists
//! the store and its average strategies.

use abscfr::*;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let rules = args.rules();
    log::info!("{:<32}{:<32}", "rules", serde_json::to_string(&rules)?);
    let ref dir = args.directory();
    let mut trainer = Trainer::new(Poker::new(rules)?, args.encoder, args.seed);
    if let Some(ref name) = args.load {
        trainer.replace(InfosetStore::load_from(dir, name)?);
    }
    log::info!("{:<32}{:<32}", "abstraction", args.encoder);
    log::info!("{:<32}{:<32}", "sampling", args.scheme);
    let interval = args.interval.max(1);
    let mut done = 0;
    while done < args.iterations {
        let n = interval.min(args.iterations - done);
        let utility = trainer.train(args.scheme, n)?;
        done += n;
        let value = trainer.evaluate()?;
        log::info!(
            "{:<32}{:<32}",
            format!("iteration {:>10}", done),
            format!("{:>+.5} (sampled {:>+.5})", value, utility)
        );
    }
    let (p1, p2) = trainer.counts();
    log::info!("{:<32}{:<32}", "infosets (player 1)", p1);
    log::info!("{:<32}{:<32}", "infosets (player 2)", p2);
    log::info!("{:<32}{:<32}", "exploitability", trainer.exploitability(args.exploit)?);
    if let Some(ref name) = args.save {
        trainer.store().save_in(dir, name)?;
    }
    if let Some(ref path) = args.dump {
        let json = serde_json::to_string_pretty(&trainer.store().strategies())?;
        std::fs::write(path, json)?;
        log::info!("{:<32}{:<32}", "strategies written", path.display());
    }
    log::trace!("{}", trainer);
    Ok(())
}
