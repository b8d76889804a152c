// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;

use crate::cmd::check::check_collection;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_stats;
use crate::collection::Collection;
use crate::config::DEFAULT_PORT;
use crate::error::Fallible;
use crate::play::server::ServerOptions;
use crate::play::server::start_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Play the game in the browser.
    Play {
        /// Path to the game directory. By default, the current working directory is used.
        directory: Option<String>,
        /// URL or path of the card database. Overrides the configuration file.
        #[arg(long)]
        db: Option<String>,
        /// The port to use for the web server. Overrides the configuration file.
        #[arg(long)]
        port: Option<u16>,
        /// Don't open the browser automatically.
        #[arg(long)]
        no_open: bool,
    },
    /// Check the integrity of the card database.
    Check {
        /// Path to the game directory. By default, the current working directory is used.
        directory: Option<String>,
        /// URL or path of the card database. Overrides the configuration file.
        #[arg(long)]
        db: Option<String>,
    },
    /// Print card database statistics.
    Stats {
        /// Path to the game directory. By default, the current working directory is used.
        directory: Option<String>,
        /// URL or path of the card database. Overrides the configuration file.
        #[arg(long)]
        db: Option<String>,
        /// Which output format to use.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Play {
            directory,
            db,
            port,
            no_open,
        } => {
            let coll = Collection::new(directory, db)?;
            let options = ServerOptions {
                port: port.or(coll.config.port).unwrap_or(DEFAULT_PORT),
                open_browser: !no_open && coll.config.open_browser.unwrap_or(true),
            };
            start_server(coll, options).await
        }
        Command::Check { directory, db } => check_collection(directory, db).await,
        Command::Stats {
            directory,
            db,
            format,
        } => print_stats(directory, db, format).await,
    }
}
