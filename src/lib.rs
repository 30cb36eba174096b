//! A word-grid puzzle engine.
//!
//! Given a rectangular grid of letters, the engine finds every dictionary
//! word spelled by a path of adjacent, non-repeated cells, searches the found
//! words for combinations that exactly partition the unclaimed region of the
//! board, and descrambles a hint word from a reserved subset of cells. The
//! [`puzzle::PuzzleBoard`] facade ties the pieces together; the dictionary is
//! handed in as a plain word list at startup.

pub mod board;
pub mod cover;
pub mod dictionary;
pub mod errors;
pub mod finder;
pub mod hints;
pub mod puzzle;
pub mod puzzle_word;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use board::{Board, CellSet, Coord, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_BOARD_AREA};
pub use dictionary::{Dictionary, DEFAULT_MIN_WORD_LEN};
pub use errors::SolverError;
pub use puzzle::{PuzzleBoard, WordToken};
pub use puzzle_word::PuzzleWord;

#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Initialize logging for the engine.
///
/// Native builds use `env_logger`, honouring `RUST_LOG` when set; wasm builds
/// log to the browser console.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        // A failure here means a logger is already installed; keep going.
        let _ = console_log::init_with_level(level);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        let _ = builder.try_init();
    }
}
