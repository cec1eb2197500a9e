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

use std::process::exit;

use ankicraft_core::Fallible;
use ankicraft_core::Layout;
use clap::Parser;
use tokio::spawn;

use crate::cmd::design::server::ServerConfig;
use crate::cmd::design::server::start_server;
use crate::cmd::export::ExportPart;
use crate::cmd::export::export_design;
use crate::cmd::initial_session;
use crate::cmd::presets::print_presets;
use crate::utils::wait_for_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Design card templates through a web interface.
    Design {
        /// Path to a design file to start from.
        #[arg(long)]
        design: Option<String>,
        /// Id of the preset to start from. Overrides the design file's preset.
        #[arg(long)]
        preset: Option<String>,
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to use for the web server. Default is 8000.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Whether to open the browser automatically. Default is true.
        #[arg(long)]
        open_browser: Option<bool>,
        /// Turn off the preview animations.
        #[arg(long)]
        reduce_motion: bool,
    },
    /// Print the card templates and stylesheet for a design.
    Export {
        /// Path to a design file.
        #[arg(long)]
        design: Option<String>,
        /// Id of the preset to use. Overrides the design file's preset.
        #[arg(long)]
        preset: Option<String>,
        /// Content alignment: center or left. Overrides the design file's layout.
        #[arg(long)]
        layout: Option<Layout>,
        /// Directory to write front.html, back.html and style.css to. By default, the output is printed to stdout.
        #[arg(long)]
        output: Option<String>,
        /// Also copy one of the outputs to the clipboard.
        #[arg(long)]
        copy: Option<ExportPart>,
    },
    /// List the available presets.
    Presets,
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Design {
            design,
            preset,
            host,
            port,
            open_browser,
            reduce_motion,
        } => {
            let session = initial_session(design, preset, reduce_motion)?;
            if open_browser.unwrap_or(true) {
                // Start a separate task to open the browser once the server is up.
                let browser_host = host.clone();
                spawn(async move {
                    match wait_for_server(&browser_host, port).await {
                        Ok(_) => {
                            let _ = open::that(format!("http://{browser_host}:{port}/"));
                        }
                        Err(e) => {
                            eprintln!("Failed to connect to server: {e}");
                            exit(-1)
                        }
                    }
                });
            }
            let config = ServerConfig {
                host,
                port,
                session,
            };
            start_server(config).await
        }
        Command::Export {
            design,
            preset,
            layout,
            output,
            copy,
        } => {
            let mut session = initial_session(design, preset, false)?;
            if let Some(layout) = layout {
                session.set_layout(layout);
            }
            export_design(&session, output, copy)
        }
        Command::Presets => {
            print_presets();
            Ok(())
        }
    }
}
