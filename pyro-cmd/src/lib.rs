//! Command implementations for the pyrolysis dashboard CLI.
//!
//! Provides subcommands to serve the dashboard over HTTP, inspect a
//! simulation CSV, and print the frame the update loop produces for a
//! single event.

use anyhow::Context;
use clap::Subcommand;
use pyro_data::loader::load_path;
use pyro_playback::UpdateLoop;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod frame;
pub mod inspect;
pub mod serve;

#[derive(Subcommand)]
pub enum Command {
    /// Serve the dashboard and its JSON API over HTTP
    Serve {
        /// Charcoal density CSV (rows = positions, columns = time steps)
        #[arg(long, default_value = "fixtures/Res_rho_char.csv")]
        rho_char: PathBuf,

        /// Kinetic reaction rate CSV
        #[arg(long, default_value = "fixtures/Res_R_kin.csv")]
        r_kin: PathBuf,

        /// Directory with a built Dioxus bundle to serve instead of the built-in page
        #[arg(long)]
        dist: Option<PathBuf>,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,

        /// Port to listen on
        #[arg(short, long, default_value_t = 8050)]
        port: u16,

        /// Debug logging and per-request tracing
        #[arg(long)]
        debug: bool,
    },

    /// Print the shape and value range of a simulation CSV
    Inspect {
        /// Path to a CSV or gzip-compressed CSV
        path: PathBuf,
    },

    /// Print the frame produced by one event as JSON
    Frame {
        /// Charcoal density CSV
        #[arg(long, default_value = "fixtures/Res_rho_char.csv")]
        rho_char: PathBuf,

        /// Kinetic reaction rate CSV
        #[arg(long, default_value = "fixtures/Res_R_kin.csv")]
        r_kin: PathBuf,

        /// Time step the event is applied to
        #[arg(long, default_value_t = 0)]
        current: usize,

        /// Event JSON, e.g. '{"source":"slider_moved","index":5}' (default: page_loaded)
        #[arg(long)]
        event: Option<String>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

impl Command {
    /// Whether debug-level logging was requested.
    pub fn debug(&self) -> bool {
        matches!(self, Command::Serve { debug: true, .. })
    }
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve {
            rho_char,
            r_kin,
            dist,
            host,
            port,
            debug,
        } => {
            let update_loop = load_update_loop(&rho_char, &r_kin)?;
            serve::run_serve(update_loop, dist, host, port, debug).await
        }
        Command::Inspect { path } => inspect::run_inspect(&path),
        Command::Frame {
            rho_char,
            r_kin,
            current,
            event,
            pretty,
        } => {
            let update_loop = load_update_loop(&rho_char, &r_kin)?;
            frame::run_frame(&update_loop, current, event.as_deref(), pretty)
        }
    }
}

/// Load both simulation outputs and wire them into the dashboard's update loop.
pub fn load_update_loop(rho_char: &Path, r_kin: &Path) -> anyhow::Result<UpdateLoop> {
    let rho_char = load_path(rho_char)
        .with_context(|| format!("Failed to load charcoal density from {}", rho_char.display()))?;
    let r_kin = load_path(r_kin)
        .with_context(|| format!("Failed to load kinetic rate from {}", r_kin.display()))?;

    Ok(UpdateLoop::pyrolysis(Arc::new(rho_char), Arc::new(r_kin))?)
}

#[cfg(test)]
pub(crate) mod test_support {
    use pyro_data::loader::parse_csv;
    use pyro_playback::UpdateLoop;
    use std::sync::Arc;

    /// Ten time steps, three positions; column `t` holds `t / 100` (density)
    /// and `t * 1e-6` (rate).
    pub(crate) fn update_loop() -> UpdateLoop {
        let header: Vec<String> = (0..10).map(|t| t.to_string()).collect();
        let mut rho = format!(",{}\n", header.join(","));
        let mut kin = rho.clone();
        for row in 0..3 {
            let rho_row: Vec<String> = (0..10).map(|t| format!("{}", t as f64 / 100.0)).collect();
            let kin_row: Vec<String> = (0..10).map(|t| format!("{}", t as f64 * 1e-6)).collect();
            rho.push_str(&format!("{},{}\n", row, rho_row.join(",")));
            kin.push_str(&format!("{},{}\n", row, kin_row.join(",")));
        }
        UpdateLoop::pyrolysis(
            Arc::new(parse_csv("rho", &rho).unwrap()),
            Arc::new(parse_csv("kin", &kin).unwrap()),
        )
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_update_loop_reports_missing_file() {
        let err = load_update_loop(Path::new("/missing/rho.csv"), Path::new("/missing/kin.csv"))
            .unwrap_err();
        assert!(err.to_string().contains("charcoal density"));
    }

    #[test]
    fn test_load_update_loop_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let rho = dir.path().join("Res_rho_char.csv");
        let kin = dir.path().join("Res_R_kin.csv");
        std::fs::write(&rho, ",0,1\n0,0.01,0.02\n").unwrap();
        std::fs::write(&kin, ",0,1\n0,1e-6,2e-6\n").unwrap();

        let ul = load_update_loop(&rho, &kin).unwrap();
        assert_eq!(ul.column_count(), 2);
    }

    #[test]
    fn test_debug_flag_only_on_serve() {
        let inspect = Command::Inspect {
            path: PathBuf::from("x.csv"),
        };
        assert!(!inspect.debug());
    }
}
