use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "voidmate")]
#[command(about = "Two-player chess where either player may delete empty squares instead of moving")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a game on this terminal, two players taking turns
    ///
    /// Each turn the player to move either moves a piece or permanently
    /// removes an empty square from the board. Removed squares cannot be
    /// entered or crossed by any piece.
    ///
    /// Examples:
    ///   voidmate play
    ///   voidmate play --time-limit 30 --removals 2
    ///   voidmate play --resume saved.json
    Play {
        /// Seconds per turn; 0 disables the clock. Defaults to the configured value
        #[arg(short, long)]
        time_limit: Option<u64>,
        /// Square removals allowed per player. Defaults to the configured value
        #[arg(short, long)]
        removals: Option<u32>,
        /// Allow any number of removals, overriding configuration
        #[arg(long, conflicts_with = "removals")]
        unlimited_removals: bool,
        /// Draw the board with ASCII characters
        #[arg(long)]
        ascii: bool,
        /// Continue a game saved with the 'save' command
        #[arg(long)]
        resume: Option<PathBuf>,
    },

    /// Report check, checkmate and legal moves for a position
    ///
    /// The position is given as the piece-placement field of a FEN string.
    ///
    /// Examples:
    ///   voidmate analyze "4k3/8/8/8/8/8/8/4K2R" --castling K
    ///   voidmate analyze "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR" --removed e4,d5
    Analyze {
        /// Piece placement, rank 8 first (e.g. "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
        placement: String,
        /// Side to move: 'white' or 'black'
        #[arg(long, default_value = "white")]
        to_move: String,
        /// Comma separated removed squares (e.g. "e4,d5")
        #[arg(long, default_value = "")]
        removed: String,
        /// Castling rights in FEN form ("KQkq", "Kq", "-")
        #[arg(long, default_value = "KQkq")]
        castling: String,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the configuration file location
    Path,
    /// Print the active configuration
    Show,
    /// Write a default configuration file (overwrites existing)
    Init,
}
