// Wed Jan 15 2026 - Alex

use super::args::Args;
use crate::config::OpcodeMapFile;
use crate::dispatch::MismatchPolicy;
use crate::extract::OpcodeExtractor;
use crate::memory::MappedImage;
use crate::opcode::OpcodeMap;
use crate::output::JsonSerializer;
use anyhow::Context;
use colored::Colorize;
use std::time::Instant;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<OpcodeMap> {
        if args.no_color {
            colored::control::set_override(false);
        }

        self.setup_logging(&args)?;

        let start_time = Instant::now();

        let opcode_map = OpcodeMapFile::load(&args.opcode_map_file)
            .with_context(|| format!("Failed to load opcode map {}", args.opcode_map_file.display()))?;

        if !args.quiet {
            println!("{} Loading binary: {}", "[*]".blue(), args.game_executable.display());
        }
        let image = MappedImage::open(&args.game_executable)
            .with_context(|| format!("Failed to load binary {}", args.game_executable.display()))?;
        log::info!("Mapped {} bytes from {}", image.size(), image.path().display());

        let policy = if args.strict {
            MismatchPolicy::Strict
        } else {
            MismatchPolicy::Lenient
        };

        let opcodes = OpcodeExtractor::new()
            .with_dump_all(args.dump_all_opcodes)
            .with_policy(policy)
            .extract(&opcode_map, image.as_slice());

        if let Some(path) = &args.output {
            JsonSerializer::new()
                .with_sort_keys(!args.keep_order)
                .serialize_to_file(&opcodes, path)
                .with_context(|| format!("Failed to save results to {}", path.display()))?;
            if !args.quiet {
                println!("{} Results saved to: {}", "[+]".green(), path.display());
            }
        } else if !args.quiet {
            self.print_opcodes(&opcodes);
        }

        if !args.quiet {
            println!("{} Mapped {} opcodes in {:.2}s",
                "[+]".green(), opcodes.len(), start_time.elapsed().as_secs_f64());
        }

        Ok(opcodes)
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Info,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init()?;

        Ok(())
    }

    fn print_opcodes(&self, opcodes: &OpcodeMap) {
        if opcodes.is_empty() {
            println!("{} No opcodes mapped", "[!]".yellow());
            return;
        }

        println!("{}", "Opcodes".cyan().bold());
        println!("{}", "-".repeat(40).cyan());
        for (opcode, name) in opcodes.sorted() {
            println!("  {:>6} {:>8}  {}", opcode, format!("0x{:X}", opcode).yellow(), name.green());
        }
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
