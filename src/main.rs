//! SFTP Organizer - CLI entry point.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use sftp_organizer::{
    cli::Args,
    config::{validate_config, Config, FALLBACK_DIR_NAME},
    error::{exit_codes, Error, Result},
    filer::organize,
    logging::RunLog,
    output::{
        print_banner, print_config_summary, print_error, print_run_stats, print_warning, RunStats,
    },
    remote::{RemoteSource, SftpSource},
    Classifier,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::DirectoryUnavailable(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Connection(_) | Error::RemoteMissing(_) | Error::Ssh(_) => {
                    ExitCode::from(exit_codes::CONNECTION_ERROR as u8)
                }
                Error::Transfer { .. } | Error::PartialFailure(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    let quiet = args.quiet;
    if !quiet {
        print_banner();
    }

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration before touching the network or the filesystem
    validate_config(&config)?;

    // Resolve the local base, falling back under the home directory if the
    // configured root cannot be created
    let local_base = resolve_local_root(&config)?;

    if !quiet {
        print_config_summary(
            &config.sftp.host,
            &config.sftp.remote_base_path,
            &local_base.display().to_string(),
        );
    }

    // The run log lives next to the downloads
    let log = RunLog::new(&local_base);
    let classifier = Classifier::new(&config.classifier.prefix_marker);

    // Fatal errors past this point must reach the daily log, not just the
    // console
    let stats = log_fatal(
        transfer_phase(&config, &classifier, &local_base, &log),
        &log,
    )?;

    if !quiet {
        print_run_stats(&stats);
    }

    if stats.has_failures() {
        return Err(Error::PartialFailure(
            stats.download_failed + stats.organize_failed,
        ));
    }

    Ok(())
}

/// Connect, list the remote base, and download/organize every candidate
/// file. Per-file errors are folded into the stats; connection-level
/// errors propagate and abort the run.
fn transfer_phase(
    config: &Config,
    classifier: &Classifier,
    local_base: &Path,
    log: &RunLog,
) -> Result<RunStats> {
    let source = SftpSource::connect(&config.sftp)?;
    log.log("Conectado a SFTP.");

    let remote_base = config.sftp.remote_base_path.clone();
    if !source.exists(&remote_base)? {
        log.log(&format!("Ruta remota inválida: {}", remote_base));
        return Err(Error::RemoteMissing(remote_base));
    }

    let candidates: Vec<_> = source
        .list_entries(&remote_base)?
        .into_iter()
        .filter(|entry| entry.is_candidate())
        .collect();

    if candidates.is_empty() {
        log.log("No se encontraron archivos para descargar.");
    }

    // One file at a time: download if needed, then classify and file it.
    // Per-file errors are logged and never abort the batch.
    let mut stats = RunStats::default();
    for entry in &candidates {
        let local_path = local_base.join(&entry.name);

        if local_path.exists() {
            log.log(&format!(
                "Ya existe en base, intentando organizar si no se hizo antes: {}",
                entry.name
            ));
            stats.already_present += 1;
            stats.record_organize(organize(
                classifier,
                &entry.name,
                &local_path,
                local_base,
                log,
            ));
            continue;
        }

        let remote_path = join_remote(&remote_base, &entry.name);
        match source.download(&remote_path, &local_path) {
            Ok(bytes) => {
                log.log(&format!("Descargado: {} ({} bytes)", entry.name, bytes));
                stats.downloaded += 1;
                stats.record_organize(organize(
                    classifier,
                    &entry.name,
                    &local_path,
                    local_base,
                    log,
                ));
            }
            Err(e) => {
                log.log(&format!("Error descargando {}: {}", entry.name, e));
                stats.download_failed += 1;
                // Drop the partial file so the next run retries the download
                let _ = std::fs::remove_file(&local_path);
            }
        }
    }

    source.disconnect();
    log.log("Desconectado de SFTP.");

    Ok(stats)
}

/// Record a fatal error in the run log before it propagates; the console
/// report alone would leave the daily file with no trace of why the run
/// stopped.
fn log_fatal<T>(result: Result<T>, log: &RunLog) -> Result<T> {
    if let Err(e) = &result {
        log.log(&format!("Error general: {}", e));
    }
    result
}

/// Resolve the local base directory, trying the configured root first and
/// falling back once to `{home}/DescargasFTP`.
fn resolve_local_root(config: &Config) -> Result<PathBuf> {
    if let Some(preferred) = &config.local.download_directory {
        match std::fs::create_dir_all(preferred) {
            Ok(()) => return Ok(preferred.clone()),
            Err(e) => print_warning(&format!(
                "Cannot use '{}' ({}), falling back under the home directory",
                preferred.display(),
                e
            )),
        }
    } else {
        print_warning("No download directory configured, using the home directory fallback");
    }

    let home = directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| Error::DirectoryUnavailable(PathBuf::from("~")))?;

    let fallback = home.join(FALLBACK_DIR_NAME);
    std::fs::create_dir_all(&fallback)
        .map_err(|_| Error::DirectoryUnavailable(fallback.clone()))?;
    Ok(fallback)
}

/// Join a remote base path and an entry name with a forward slash.
fn join_remote(base: &str, name: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), name)
}
