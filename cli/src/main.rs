mod commands;
mod terminal;

use commands::{CommandLine, Commands, interactive, orders, table, translate};
use morse_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands: CommandLine = CommandLine::parse_args();
    let cfg: Config = commands.to_config();

    logging::init_logging(cfg.quiet);
    print::banner(&cfg);

    match commands.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            print::section("interactive translator", &cfg);
            interactive::interactive(&cfg)
        }
        Commands::Encode { text } => {
            print::section("encoding", &cfg);
            translate::encode(&text, &cfg)
        }
        Commands::Decode { code } => {
            print::section("decoding", &cfg);
            translate::decode(&code, &cfg)
        }
        Commands::Table => table::table(&cfg),
        Commands::Orders => orders::orders(&cfg),
    }
}
