use crate::*;
use clap::Parser;
use std::path::PathBuf;

/// Command line of the `trainer` binary.
#[derive(Debug, Parser)]
#[command(author, version, about = "Train and evaluate MCCFR strategies", long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = SUITS, help = "Suits in the deck")]
    pub suits: u8,
    #[arg(long, default_value_t = RANKS, help = "Ranks in the deck")]
    pub ranks: u8,
    #[arg(long, default_value_t = HAND_SIZE, help = "Cards dealt to each player")]
    pub hand_size: usize,
    #[arg(long, default_value_t = MAX_RAISES, help = "Raises allowed after the opening bet")]
    pub raises: usize,
    #[arg(long, help = "Open with a forced post by the first player")]
    pub post: bool,
    #[arg(long, help = "Play Kuhn poker, ignoring the deck options")]
    pub kuhn: bool,

    #[arg(long, value_enum, default_value_t = Encoder::Identity)]
    pub encoder: Encoder,
    #[arg(long, value_enum, default_value_t = Scheme::External)]
    pub scheme: Scheme,
    #[arg(long, default_value_t = TRAIN_ITERATIONS, help = "Total training iterations")]
    pub iterations: usize,
    #[arg(long, default_value_t = TRAIN_INTERVALS, help = "Iterations between evaluations")]
    pub interval: usize,
    #[arg(long, default_value_t = EXPLOIT_ITERATIONS, help = "Iterations per best-response pass")]
    pub exploit: usize,
    #[arg(long, default_value_t = SEED)]
    pub seed: u64,

    #[arg(long, help = "Resume from a named snapshot")]
    pub load: Option<String>,
    #[arg(long, help = "Save the store under this name when done")]
    pub save: Option<String>,
    #[arg(long, help = "Snapshot directory (defaults to ./snapshots)")]
    pub dir: Option<PathBuf>,
    #[arg(long, help = "Write average strategies as JSON to this path")]
    pub dump: Option<PathBuf>,
}

impl Args {
    pub fn rules(&self) -> Rules {
        match self.kuhn {
            true => Rules {
                raises: self.raises,
                post: self.post,
                ..Rules::kuhn()
            },
            false => Rules {
                suits: self.suits,
                ranks: self.ranks,
                hand_size: self.hand_size,
                raises: self.raises,
                post: self.post,
                ..Rules::default()
            },
        }
    }
    pub fn directory(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(InfosetStore::directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_default_rules() {
        let args = Args::parse_from(["trainer"]);
        assert_eq!(args.rules(), Rules::default());
        assert_eq!(args.encoder, Encoder::Identity);
        assert_eq!(args.scheme, Scheme::External);
    }

    #[test]
    fn kuhn_overrides_the_deck() {
        let args = Args::parse_from(["trainer", "--kuhn", "--suits", "4", "--post", "--scheme", "chance"]);
        assert_eq!(
            args.rules(),
            Rules {
                post: true,
                ..Rules::kuhn()
            }
        );
        assert_eq!(args.scheme, Scheme::Chance);
    }

    #[test]
    fn encoder_parses_by_name() {
        let args = Args::parse_from(["trainer", "--encoder", "strength"]);
        assert_eq!(args.encoder, Encoder::Strength);
    }
}
